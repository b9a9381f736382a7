//! Density selection for item lists (skills, languages).
//!
//! Short lists read best one item per line. Medium lists are split into two
//! side-by-side halves when the column is wide enough. Long lists, and any
//! list in a narrow column such as a sidebar, collapse into a single
//! comma-joined paragraph so their height stays bounded.

use crate::layout::text::wrap_text;
use crate::page::TextStyle;
use crate::units::Pt;

/// Lists with at most this many items are drawn one item per line
pub const VERTICAL_MAX_ITEMS: usize = 6;
/// Lists with at most this many items may be split into two columns
pub const TWO_COLUMN_MAX_ITEMS: usize = 20;
/// Columns narrower than this never split a list in two
pub const MIN_SPLIT_WIDTH: Pt = Pt(300.0);
/// Horizontal gap between the two halves of a split list
pub const SPLIT_GUTTER: Pt = Pt(16.0);

/// One entry in a list, optionally carrying a proficiency level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub name: String,
    pub level: Option<String>,
}

impl ListItem {
    pub fn new<S: Into<String>>(name: S, level: Option<String>) -> ListItem {
        ListItem {
            name: name.into(),
            level: level.filter(|l| !l.trim().is_empty()),
        }
    }

    /// `Name — Level`, used when the item has a line to itself
    pub fn line_label(&self) -> String {
        match &self.level {
            Some(level) => format!("{} \u{2014} {}", self.name, level),
            None => self.name.clone(),
        }
    }

    /// `Name (Level)`, used inside a comma-joined paragraph
    pub fn inline_label(&self) -> String {
        match &self.level {
            Some(level) => format!("{} ({})", self.name, level),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListFormat {
    /// One item per line
    Vertical,
    /// Two halves drawn side by side
    TwoColumn,
    /// A single wrapped, comma-joined paragraph
    Paragraph,
}

/// Pick a format for `count` items in a column `column_width` wide
pub fn choose_format(count: usize, column_width: Pt) -> ListFormat {
    if column_width < MIN_SPLIT_WIDTH {
        ListFormat::Paragraph
    } else if count <= VERTICAL_MAX_ITEMS {
        ListFormat::Vertical
    } else if count <= TWO_COLUMN_MAX_ITEMS {
        ListFormat::TwoColumn
    } else {
        ListFormat::Paragraph
    }
}

/// A piece of one visual row, offset from the column's left edge
#[derive(Debug, Clone, PartialEq)]
pub struct ListCell {
    pub offset: Pt,
    pub text: String,
}

/// One line of a laid-out list. All cells in a row share a baseline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListRow {
    pub cells: Vec<ListCell>,
}

/// A list broken into rows of equal height, ready to be placed row by row
#[derive(Debug, Clone, PartialEq)]
pub struct ListLayout {
    pub format: ListFormat,
    pub rows: Vec<ListRow>,
}

impl ListLayout {
    pub fn height(&self, style: &TextStyle) -> Pt {
        style.line_height() * self.rows.len() as f32
    }
}

/// Lay `items` out for a column `column_width` wide
pub fn format_list(items: &[ListItem], column_width: Pt, style: &TextStyle) -> ListLayout {
    let format = choose_format(items.len(), column_width);
    log::debug!(
        "list of {} items in {:.0}pt column: {:?}",
        items.len(),
        *column_width,
        format
    );

    let rows = match format {
        ListFormat::Vertical => single_cell_rows(
            items
                .iter()
                .flat_map(|item| wrap_text(&item.line_label(), style, column_width)),
            Pt(0.0),
        ),
        ListFormat::TwoColumn => {
            let half = (column_width - SPLIT_GUTTER) / 2.0;
            let split = items.len().div_ceil(2);
            let wrap_half = |items: &[ListItem]| -> Vec<String> {
                items
                    .iter()
                    .flat_map(|item| wrap_text(&item.line_label(), style, half))
                    .collect()
            };
            let left = wrap_half(&items[..split]);
            let right = wrap_half(&items[split..]);

            let mut rows = Vec::with_capacity(left.len().max(right.len()));
            let mut left = left.into_iter();
            let mut right = right.into_iter();
            loop {
                let mut row = ListRow::default();
                if let Some(text) = left.next() {
                    row.cells.push(ListCell {
                        offset: Pt(0.0),
                        text,
                    });
                }
                if let Some(text) = right.next() {
                    row.cells.push(ListCell {
                        offset: half + SPLIT_GUTTER,
                        text,
                    });
                }
                if row.cells.is_empty() {
                    break;
                }
                rows.push(row);
            }
            rows
        }
        ListFormat::Paragraph => {
            let joined = items
                .iter()
                .map(ListItem::inline_label)
                .collect::<Vec<_>>()
                .join(", ");
            single_cell_rows(wrap_text(&joined, style, column_width).into_iter(), Pt(0.0))
        }
    };

    ListLayout { format, rows }
}

fn single_cell_rows(lines: impl Iterator<Item = String>, offset: Pt) -> Vec<ListRow> {
    lines
        .map(|text| ListRow {
            cells: vec![ListCell { offset, text }],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::font::BuiltinFont;

    fn items(n: usize) -> Vec<ListItem> {
        (0..n)
            .map(|i| ListItem::new(format!("Skill {i}"), Some("Advanced".into())))
            .collect()
    }

    fn style() -> TextStyle {
        TextStyle::new(BuiltinFont::Helvetica, Pt(10.0), colours::BLACK)
    }

    #[test]
    fn density_boundaries() {
        let wide = Pt(500.0);
        assert_eq!(choose_format(0, wide), ListFormat::Vertical);
        assert_eq!(choose_format(6, wide), ListFormat::Vertical);
        assert_eq!(choose_format(7, wide), ListFormat::TwoColumn);
        assert_eq!(choose_format(20, wide), ListFormat::TwoColumn);
        assert_eq!(choose_format(21, wide), ListFormat::Paragraph);
    }

    #[test]
    fn narrow_columns_always_get_a_paragraph() {
        assert_eq!(choose_format(2, Pt(150.0)), ListFormat::Paragraph);
        assert_eq!(choose_format(10, Pt(150.0)), ListFormat::Paragraph);
    }

    #[test]
    fn labels() {
        let item = ListItem::new("Rust", Some("Expert".into()));
        assert_eq!(item.line_label(), "Rust \u{2014} Expert");
        assert_eq!(item.inline_label(), "Rust (Expert)");
        assert_eq!(ListItem::new("Go", Some("  ".into())).inline_label(), "Go");
    }

    #[test]
    fn vertical_lists_get_a_row_per_item() {
        let layout = format_list(&items(6), Pt(500.0), &style());
        assert_eq!(layout.format, ListFormat::Vertical);
        assert_eq!(layout.rows.len(), 6);
        assert_eq!(layout.rows[0].cells[0].text, "Skill 0 \u{2014} Advanced");
    }

    #[test]
    fn two_column_lists_pair_up_the_halves() {
        let layout = format_list(&items(7), Pt(500.0), &style());
        assert_eq!(layout.format, ListFormat::TwoColumn);
        assert_eq!(layout.rows.len(), 4);
        assert_eq!(layout.rows[0].cells.len(), 2);
        assert_eq!(layout.rows[0].cells[1].text, "Skill 4 \u{2014} Advanced");
        assert_eq!(layout.rows[3].cells.len(), 1);
    }

    #[test]
    fn paragraph_lists_are_comma_joined() {
        let layout = format_list(&items(21), Pt(500.0), &style());
        assert_eq!(layout.format, ListFormat::Paragraph);
        let text: Vec<_> = layout.rows.iter().map(|r| r.cells[0].text.clone()).collect();
        let text = text.join(" ");
        assert!(text.starts_with("Skill 0 (Advanced), Skill 1 (Advanced)"));
        assert!(layout.rows.len() < 21);
    }
}
