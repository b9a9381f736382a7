//! Render a résumé into a paginated PDF under one of several visual
//! templates.
//!
//! ```no_run
//! use resume_pdf::{render, ResumeDocument};
//!
//! let mut resume = ResumeDocument::new("Ada Lovelace", "ada@example.com");
//! resume.summary = Some("Mathematician and first programmer.".into());
//!
//! let rendered = render(&resume, "elegant", None).expect("résumé is valid");
//! std::fs::write(rendered.suggested_filename(), rendered.to_pdf_bytes().unwrap()).unwrap();
//! ```
//!
//! Every template shares one pagination engine (see [layout]): text is
//! wrapped and flowed, blocks that no longer fit move to a new page, and the
//! template header is redrawn on every page. Nothing is clipped at the bottom
//! of a page.

mod colour;
pub use colour::*;

/// Profile photo cropping and the placeholder used when a photo is unusable
pub mod compositor;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// The pagination engine: geometry, text flow, list formatting, page breaks
/// and section rendering
pub mod layout;

mod model;
pub use model::*;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod sections;
pub use sections::*;

mod template;
pub use template::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
