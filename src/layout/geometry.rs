use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::units::Pt;

/// Horizontal extent of one column
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub x: Pt,
    pub width: Pt,
}

/// How a template splits the page horizontally
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnLayout {
    /// One column spanning the page between the side margins
    Single,
    /// A full-height band on the left edge holding static content, and a
    /// main column to its right that carries the flowed sections
    Sidebar {
        /// Width of the coloured band, measured from the page edge
        band: Pt,
        /// Inner padding between the band edges and the sidebar text
        padding: Pt,
        /// Space between the band and the main column
        gutter: Pt,
    },
}

/// Page dimensions, margins and column positions for one render call.
/// Pure data: computed once at render start and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryContext {
    pub page_size: PageSize,
    pub margins: Margins,
    pub columns: Vec<ColumnDescriptor>,
    main_column: usize,
    sidebar_column: Option<usize>,
    sidebar_band: Option<Pt>,
}

impl GeometryContext {
    pub fn new(page_size: PageSize, margins: Margins, layout: ColumnLayout) -> GeometryContext {
        let (width, _) = page_size;
        match layout {
            ColumnLayout::Single => GeometryContext {
                page_size,
                columns: vec![ColumnDescriptor {
                    x: margins.left,
                    width: width - margins.left - margins.right,
                }],
                margins,
                main_column: 0,
                sidebar_column: None,
                sidebar_band: None,
            },
            ColumnLayout::Sidebar {
                band,
                padding,
                gutter,
            } => {
                let sidebar = ColumnDescriptor {
                    x: padding,
                    width: band - padding * 2.0,
                };
                let main_x = band + gutter;
                let main = ColumnDescriptor {
                    x: main_x,
                    width: width - main_x - margins.right,
                };
                GeometryContext {
                    page_size,
                    columns: vec![sidebar, main],
                    margins,
                    main_column: 1,
                    sidebar_column: Some(0),
                    sidebar_band: Some(band),
                }
            }
        }
    }

    pub fn page_width(&self) -> Pt {
        self.page_size.0
    }

    pub fn page_height(&self) -> Pt {
        self.page_size.1
    }

    pub fn bottom_margin(&self) -> Pt {
        self.margins.bottom
    }

    /// The lowest y any flowed block may reach
    pub fn writable_bottom(&self) -> Pt {
        self.page_size.1 - self.margins.bottom
    }

    /// Height between the top margin and the writable bottom
    pub fn usable_height(&self) -> Pt {
        self.writable_bottom() - self.margins.top
    }

    /// The column carrying flowed sections
    pub fn main(&self) -> ColumnDescriptor {
        self.columns[self.main_column]
    }

    /// The static sidebar column, for templates that have one
    pub fn sidebar(&self) -> Option<ColumnDescriptor> {
        self.sidebar_column.map(|i| self.columns[i])
    }

    /// Width of the sidebar background band
    pub fn sidebar_band(&self) -> Option<Pt> {
        self.sidebar_band
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;

    #[test]
    fn single_column_spans_between_margins() {
        let geometry = GeometryContext::new(A4, Margins::default(), ColumnLayout::Single);
        let main = geometry.main();
        assert_eq!(main.x, Pt(40.0));
        assert_eq!(main.x + main.width, A4.0 - Pt(40.0));
        assert!(geometry.sidebar().is_none());
        assert_eq!(geometry.writable_bottom(), A4.1 - Pt(30.0));
    }

    #[test]
    fn sidebar_layout_has_two_columns() {
        let geometry = GeometryContext::new(
            A4,
            Margins::default(),
            ColumnLayout::Sidebar {
                band: Pt(190.0),
                padding: Pt(18.0),
                gutter: Pt(24.0),
            },
        );
        let sidebar = geometry.sidebar().expect("has a sidebar");
        assert_eq!(sidebar.x, Pt(18.0));
        assert_eq!(sidebar.width, Pt(154.0));
        assert_eq!(geometry.main().x, Pt(214.0));
        assert_eq!(geometry.columns.len(), 2);
    }
}
