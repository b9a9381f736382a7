//! The pagination engine shared by every template.
//!
//! Layout runs top-down: a [LayoutCursor] per column walks down the page,
//! [text] wraps strings into lines, [lists] picks a density for item lists,
//! the [PageController] decides when a block no longer fits and replays the
//! template header on each new page, and the [SectionRenderer] ties these
//! together for one titled résumé section.
//!
//! Templates never measure or break pages themselves; they only describe
//! what goes where.

mod cursor;
mod geometry;
pub mod lists;
mod margins;
mod pagination;
mod section;
pub mod text;

pub use cursor::*;
pub use geometry::*;
pub use lists::{ListFormat, ListItem};
pub use margins::*;
pub use pagination::*;
pub use section::*;
pub use text::FlowResult;
