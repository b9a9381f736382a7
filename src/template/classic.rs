//! Centred serif letterhead, uppercase section titles, no colour.

use super::{Canvas, Palette, TemplateDefinition, TemplateId, Typography};
use crate::colour::{colours, Colour};
use crate::font::BuiltinFont;
use crate::layout::{ColumnLayout, Margins, SectionKind};
use crate::page::TextStyle;
use crate::rect::Rect;
use crate::units::Pt;

const PHOTO_SIZE: Pt = Pt(56.0);
const PHOTO_GAP: Pt = Pt(12.0);
const GAP_BELOW_HEADER: Pt = Pt(14.0);

const ORDER: &[SectionKind] = &[
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Languages,
    SectionKind::Certifications,
    SectionKind::References,
    SectionKind::Projects,
];

pub(super) fn definition() -> TemplateDefinition {
    let ink = Colour::new_grey(0.1);
    TemplateDefinition {
        id: TemplateId::Classic,
        palette: Palette {
            primary: ink,
            accent: Colour::new_grey(0.3),
            text: ink,
            muted: Colour::new_grey(0.4),
            rule: ink,
            link: Colour::new_rgb_bytes(0x1A, 0x3C, 0x6E),
            on_primary: colours::WHITE,
            sidebar_background: None,
            sidebar_text: ink,
        },
        typography: Typography {
            regular: BuiltinFont::TimesRoman,
            bold: BuiltinFont::TimesBold,
            italic: BuiltinFont::TimesItalic,
            name_size: Pt(22.0),
            headline_size: Pt(12.0),
            title_size: Pt(12.0),
            heading_size: Pt(11.0),
            body_size: Pt(10.0),
            small_size: Pt(9.0),
        },
        margins: Margins::trbl(Pt(42.0), Pt(54.0), Pt(30.0), Pt(54.0)),
        columns: ColumnLayout::Single,
        section_order: ORDER,
        sidebar_sections: &[],
        uppercase_titles: true,
        title_rule: Pt(0.75),
        header,
        sidebar: None,
    }
}

fn header(canvas: &mut Canvas<'_>) -> Pt {
    if canvas.is_first_page() {
        letterhead(canvas)
    } else {
        running_head(canvas)
    }
}

fn letterhead(canvas: &mut Canvas<'_>) -> Pt {
    let geometry = canvas.geometry;
    let content = canvas.content;
    let palette = *canvas.palette;
    let t = *canvas.typography;

    let left = geometry.margins.left;
    let right = geometry.page_width() - geometry.margins.right;
    let centre = left + (right - left) / 2.0;
    let top = geometry.margins.top;

    let photo_drawn = canvas.photo(Rect::from_xywh(right - PHOTO_SIZE, top, PHOTO_SIZE, PHOTO_SIZE));
    // keep the text centred on the page even when the photo takes the right edge
    let width = if photo_drawn {
        right - left - (PHOTO_SIZE + PHOTO_GAP) * 2.0
    } else {
        right - left
    };

    let name = TextStyle::new(t.bold, t.name_size, palette.text);
    let headline = TextStyle::new(t.italic, t.headline_size, palette.accent);
    let contact = TextStyle::new(t.regular, t.small_size, palette.text);

    let mut y = canvas.paragraph_centred(&content.name, name, centre, top, width);
    if let Some(h) = &content.headline {
        y = canvas.paragraph_centred(h, headline, centre, y + Pt(2.0), width);
    }
    y = canvas.paragraph_centred(&content.contact_line(), contact, centre, y + Pt(4.0), width);

    if photo_drawn {
        y = y.max(top + PHOTO_SIZE);
    }
    let rule_y = y + Pt(6.0);
    canvas.rule(left, right, rule_y, Pt(1.2), palette.rule);
    canvas.rule(left, right, rule_y + Pt(3.0), Pt(0.5), palette.rule);

    rule_y + Pt(3.0) + GAP_BELOW_HEADER
}

fn running_head(canvas: &mut Canvas<'_>) -> Pt {
    let geometry = canvas.geometry;
    let content = canvas.content;
    let palette = *canvas.palette;
    let t = *canvas.typography;

    let left = geometry.margins.left;
    let right = geometry.page_width() - geometry.margins.right;
    let top = geometry.margins.top;

    let name = TextStyle::new(t.bold, Pt(12.0), palette.text);
    let caption = TextStyle::new(t.italic, t.small_size, palette.muted);

    canvas.text(content.name.as_str(), name, left, top);
    let page = format!("Page {}", canvas.page_number);
    canvas.text_right(&page, caption, right, top + (name.line_height() - caption.line_height()));

    let rule_y = top + name.line_height() + Pt(4.0);
    canvas.rule(left, right, rule_y, Pt(0.5), palette.rule);
    rule_y + GAP_BELOW_HEADER
}
