//! A coloured banner across the top of the page with the photo on the left.

use super::{Canvas, Palette, TemplateDefinition, TemplateId, Typography};
use crate::colour::{colours, Colour};
use crate::font::BuiltinFont;
use crate::layout::text::measure;
use crate::layout::{ColumnLayout, Margins, SectionKind};
use crate::page::TextStyle;
use crate::rect::Rect;
use crate::units::Pt;

const BANNER_PADDING: Pt = Pt(22.0);
const PHOTO_SIZE: Pt = Pt(76.0);
const PHOTO_GAP: Pt = Pt(18.0);
const CONTINUATION_BAND: Pt = Pt(34.0);
const GAP_BELOW_HEADER: Pt = Pt(18.0);

const ORDER: &[SectionKind] = &[
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Languages,
    SectionKind::Certifications,
    SectionKind::Projects,
    SectionKind::References,
];

pub(super) fn definition() -> TemplateDefinition {
    TemplateDefinition {
        id: TemplateId::Modern,
        palette: Palette {
            primary: Colour::new_rgb_bytes(0x1F, 0x4E, 0x79),
            accent: Colour::new_rgb_bytes(0x2E, 0x75, 0xB6),
            text: Colour::new_grey(0.15),
            muted: colours::MID_GREY,
            rule: Colour::new_rgb_bytes(0xC9, 0xD6, 0xE3),
            link: Colour::new_rgb_bytes(0x2E, 0x75, 0xB6),
            on_primary: colours::WHITE,
            sidebar_background: None,
            sidebar_text: colours::WHITE,
        },
        typography: Typography {
            regular: BuiltinFont::Helvetica,
            bold: BuiltinFont::HelveticaBold,
            italic: BuiltinFont::HelveticaOblique,
            name_size: Pt(24.0),
            headline_size: Pt(12.0),
            title_size: Pt(13.0),
            heading_size: Pt(11.0),
            body_size: Pt(10.0),
            small_size: Pt(9.0),
        },
        margins: Margins::default(),
        columns: ColumnLayout::Single,
        section_order: ORDER,
        sidebar_sections: &[],
        uppercase_titles: false,
        title_rule: Pt(1.0),
        header,
        sidebar: None,
    }
}

fn header(canvas: &mut Canvas<'_>) -> Pt {
    if canvas.is_first_page() {
        banner(canvas)
    } else {
        continuation_band(canvas)
    }
}

fn banner(canvas: &mut Canvas<'_>) -> Pt {
    let geometry = canvas.geometry;
    let content = canvas.content;
    let palette = *canvas.palette;
    let t = *canvas.typography;

    let page_width = geometry.page_width();
    let left = geometry.margins.left;
    let right = page_width - geometry.margins.right;
    let has_photo = canvas.photo.is_some();
    let text_x = if has_photo {
        left + PHOTO_SIZE + PHOTO_GAP
    } else {
        left
    };
    let text_width = right - text_x;

    let name = TextStyle::new(t.bold, t.name_size, palette.on_primary);
    let headline = TextStyle::new(t.regular, t.headline_size, palette.on_primary);
    let contact = TextStyle::new(t.regular, t.small_size, palette.on_primary);
    let contact_line = content.contact_line();

    let mut text_height = measure(&content.name, &name, text_width);
    if let Some(h) = &content.headline {
        text_height += measure(h, &headline, text_width);
    }
    text_height += Pt(6.0) + measure(&contact_line, &contact, text_width);

    let inner = if has_photo {
        text_height.max(PHOTO_SIZE)
    } else {
        text_height
    };
    let banner_height = inner + BANNER_PADDING * 2.0;

    canvas.fill(
        Rect::from_xywh(Pt(0.0), Pt(0.0), page_width, banner_height),
        palette.primary,
    );
    canvas.photo(Rect::from_xywh(
        left,
        (banner_height - PHOTO_SIZE) / 2.0,
        PHOTO_SIZE,
        PHOTO_SIZE,
    ));

    let mut y = (banner_height - text_height) / 2.0;
    y = canvas.paragraph(&content.name, name, text_x, y, text_width);
    if let Some(h) = &content.headline {
        y = canvas.paragraph(h, headline, text_x, y, text_width);
    }
    canvas.paragraph(&contact_line, contact, text_x, y + Pt(6.0), text_width);

    banner_height + GAP_BELOW_HEADER
}

fn continuation_band(canvas: &mut Canvas<'_>) -> Pt {
    let geometry = canvas.geometry;
    let content = canvas.content;
    let palette = *canvas.palette;
    let t = *canvas.typography;

    let name = TextStyle::new(t.bold, Pt(13.0), palette.on_primary);
    let caption = TextStyle::new(t.regular, t.small_size, palette.on_primary);

    canvas.fill(
        Rect::from_xywh(Pt(0.0), Pt(0.0), geometry.page_width(), CONTINUATION_BAND),
        palette.primary,
    );
    canvas.text(
        content.name.as_str(),
        name,
        geometry.margins.left,
        (CONTINUATION_BAND - name.line_height()) / 2.0,
    );
    let page = format!("Page {}", canvas.page_number);
    canvas.text_right(
        &page,
        caption,
        geometry.page_width() - geometry.margins.right,
        (CONTINUATION_BAND - caption.line_height()) / 2.0,
    );

    CONTINUATION_BAND + GAP_BELOW_HEADER
}
