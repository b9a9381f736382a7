use crate::units::*;

/// A rectangle, specified by two opposite corners. Rectangles in the layout
/// are top-down: `y1` is the top edge and `y2` the bottom edge, measured from
/// the top of the page.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x1: Pt,
    /// The y-coordinate of the top edge.
    pub y1: Pt,
    /// The x-coordinate of the right edge.
    pub x2: Pt,
    /// The y-coordinate of the bottom edge.
    pub y2: Pt,
}

impl Rect {
    /// Build a rectangle from its top-left corner and its size
    pub fn from_xywh(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Flip into PDF user space (origin at the bottom-left) for a page of
    /// the given height
    pub fn to_pdf(&self, page_height: Pt) -> pdf_writer::Rect {
        pdf_writer::Rect {
            x1: self.x1.into(),
            y1: (page_height - self.y2).into(),
            x2: self.x2.into(),
            y2: (page_height - self.y1).into(),
        }
    }
}
