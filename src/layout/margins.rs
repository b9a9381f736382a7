use crate::units::Pt;

/// The bottom margin every template keeps clear of flowed content. The page
/// caption is drawn inside it.
pub const DEFAULT_BOTTOM_MARGIN: Pt = Pt(30.0);

/// Margins are the guidelines layout functions work within. Flowed content
/// never crosses the bottom margin; the page controller breaks to a new page
/// first. The margins are also written to each page's `ArtBox`.
#[derive(Debug, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Default for Margins {
    fn default() -> Self {
        Margins::trbl(Pt(36.0), Pt(40.0), DEFAULT_BOTTOM_MARGIN, Pt(40.0))
    }
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}
