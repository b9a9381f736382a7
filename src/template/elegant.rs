//! A dark sidebar band carrying the photo, contact details, profile, skills
//! and languages, with the flowed sections in a main column to its right.

use super::{Canvas, Palette, TemplateDefinition, TemplateId, Typography};
use crate::colour::{colours, Colour};
use crate::font::BuiltinFont;
use crate::layout::lists::format_list;
use crate::layout::text::wrap_text;
use crate::layout::{ColumnLayout, Margins, Section, SectionContent, SectionKind};
use crate::page::TextStyle;
use crate::rect::Rect;
use crate::units::Pt;

const SIDEBAR_BAND: Pt = Pt(190.0);
const SIDEBAR_PADDING: Pt = Pt(18.0);
const GUTTER: Pt = Pt(24.0);
const PHOTO_SIZE: Pt = Pt(110.0);
const SIDEBAR_BLOCK_GAP: Pt = Pt(16.0);
const GAP_BELOW_HEADER: Pt = Pt(16.0);

const ORDER: &[SectionKind] = &[
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Certifications,
    SectionKind::Projects,
    SectionKind::References,
];

const SIDEBAR: &[SectionKind] = &[SectionKind::Summary, SectionKind::Skills, SectionKind::Languages];

pub(super) fn definition() -> TemplateDefinition {
    let navy = Colour::new_rgb_bytes(0x2C, 0x3E, 0x50);
    let gold = Colour::new_rgb_bytes(0xB0, 0x8D, 0x57);
    TemplateDefinition {
        id: TemplateId::Elegant,
        palette: Palette {
            primary: navy,
            accent: gold,
            text: Colour::new_grey(0.15),
            muted: colours::MID_GREY,
            rule: gold,
            link: Colour::new_rgb_bytes(0x2C, 0x6E, 0x9E),
            on_primary: colours::WHITE,
            sidebar_background: Some(navy),
            sidebar_text: Colour::new_rgb_bytes(0xEC, 0xF0, 0xF1),
        },
        typography: Typography {
            regular: BuiltinFont::Helvetica,
            bold: BuiltinFont::HelveticaBold,
            italic: BuiltinFont::HelveticaOblique,
            name_size: Pt(24.0),
            headline_size: Pt(12.0),
            title_size: Pt(12.0),
            heading_size: Pt(11.0),
            body_size: Pt(10.0),
            small_size: Pt(9.0),
        },
        margins: Margins::trbl(Pt(40.0), Pt(36.0), Pt(30.0), Pt(36.0)),
        columns: ColumnLayout::Sidebar {
            band: SIDEBAR_BAND,
            padding: SIDEBAR_PADDING,
            gutter: GUTTER,
        },
        section_order: ORDER,
        sidebar_sections: SIDEBAR,
        uppercase_titles: true,
        title_rule: Pt(0.75),
        header,
        sidebar: Some(sidebar),
    }
}

fn header(canvas: &mut Canvas<'_>) -> Pt {
    let geometry = canvas.geometry;
    let content = canvas.content;
    let palette = *canvas.palette;
    let t = *canvas.typography;
    let main = geometry.main();
    let top = geometry.margins.top;

    if canvas.is_first_page() {
        let name = TextStyle::new(t.bold, t.name_size, palette.primary);
        let headline = TextStyle::new(t.regular, t.headline_size, palette.accent);

        let mut y = canvas.paragraph(&content.name, name, main.x, top, main.width);
        if let Some(h) = &content.headline {
            y = canvas.paragraph(h, headline, main.x, y + Pt(2.0), main.width);
        }
        let rule_y = y + Pt(8.0);
        canvas.rule(main.x, main.x + Pt(60.0), rule_y, Pt(2.0), palette.accent);
        rule_y + Pt(1.0) + GAP_BELOW_HEADER
    } else {
        let name = TextStyle::new(t.bold, Pt(13.0), palette.primary);
        let caption = TextStyle::new(t.regular, t.small_size, palette.muted);
        let right = main.x + main.width;

        canvas.text(content.name.as_str(), name, main.x, top);
        let page = format!("Page {}", canvas.page_number);
        canvas.text_right(&page, caption, right, top + (name.line_height() - caption.line_height()));
        let rule_y = top + name.line_height() + Pt(4.0);
        canvas.rule(main.x, right, rule_y, Pt(0.5), palette.rule);
        rule_y + GAP_BELOW_HEADER
    }
}

/// Height of a sidebar block heading, including its rule
fn heading_height(style: &TextStyle) -> Pt {
    style.line_height() + Pt(6.0)
}

fn sidebar(canvas: &mut Canvas<'_>, sections: &[Section]) -> Vec<SectionKind> {
    let geometry = canvas.geometry;
    let content = canvas.content;
    let palette = *canvas.palette;
    let t = *canvas.typography;
    let Some(column) = geometry.sidebar() else {
        return sections.iter().map(|s| s.kind).collect();
    };
    let band = geometry.sidebar_band().unwrap_or(column.x * 2.0 + column.width);
    let bottom = geometry.writable_bottom();

    if let Some(background) = palette.sidebar_background {
        canvas.fill(
            Rect::from_xywh(Pt(0.0), Pt(0.0), band, geometry.page_height()),
            background,
        );
    }

    let heading = TextStyle::new(t.bold, Pt(10.0), palette.accent);
    let text = TextStyle::new(t.regular, t.small_size, palette.sidebar_text);

    let mut y = geometry.margins.top;
    let size = PHOTO_SIZE.min(column.width);
    if canvas.photo(Rect::from_xywh((band - size) / 2.0, y, size, size)) {
        y += size + SIDEBAR_BLOCK_GAP;
    }

    y = draw_heading(canvas, "CONTACT", heading, column.x, column.width, y);
    for field in &content.contact {
        y = canvas.paragraph(&field.display(), text, column.x, y, column.width);
    }
    y += SIDEBAR_BLOCK_GAP;

    let mut spilled = Vec::new();
    for section in sections {
        let lines = match &section.content {
            SectionContent::Text(body) => wrap_text(body, &text, column.width),
            SectionContent::List(items) => format_list(items, column.width, &text)
                .rows
                .into_iter()
                .flat_map(|row| row.cells.into_iter().map(|cell| cell.text))
                .collect(),
            SectionContent::Entries(_) => {
                spilled.push(section.kind);
                continue;
            }
        };

        let needed = heading_height(&heading) + text.line_height() * lines.len() as f32;
        if !spilled.is_empty() || y + needed > bottom {
            spilled.push(section.kind);
            continue;
        }

        y = draw_heading(canvas, &section.title.to_uppercase(), heading, column.x, column.width, y);
        for line in lines {
            canvas.text(line, text, column.x, y);
            y += text.line_height();
        }
        y += SIDEBAR_BLOCK_GAP;
    }
    spilled
}

fn draw_heading(canvas: &mut Canvas<'_>, title: &str, style: TextStyle, x: Pt, width: Pt, y: Pt) -> Pt {
    canvas.text(title, style, x, y);
    let rule_y = y + style.line_height() + Pt(2.0);
    canvas.rule(x, x + width, rule_y, Pt(0.5), style.colour);
    y + heading_height(&style)
}
