use crate::layout::ColumnDescriptor;
use crate::units::Pt;

/// The write position within one column. Each column owns its cursor; a
/// two-column template holds two and only the main one ever triggers a
/// page break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub x: Pt,
    pub y: Pt,
    pub column_width: Pt,
    /// 0-based index of the page the cursor is on
    pub page_index: usize,
}

impl LayoutCursor {
    pub fn new(column: ColumnDescriptor, y: Pt) -> LayoutCursor {
        LayoutCursor {
            x: column.x,
            y,
            column_width: column.width,
            page_index: 0,
        }
    }

    /// Move down by `dy`
    pub fn advance(&mut self, dy: Pt) {
        self.y += dy;
    }

    /// Right edge of the column
    pub fn right(&self) -> Pt {
        self.x + self.column_width
    }
}
