use thiserror::Error;

/// All errors that the crate can generate. Only validation failures stop a
/// render; image, template and overflow problems are recovered and logged.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    /// The résumé failed validation before layout started
    Validation(#[from] ValidationError),

    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    #[error("page missing from the document")]
    /// A page id in the page order does not exist in the page arena
    PageMissing,
}

/// Reasons a résumé is refused before rendering starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("`{field}` has an unrecognised date `{value}` (expected MM/YYYY)")]
    InvalidDate { field: String, value: String },
}

/// Why a profile photo could not be used. Never fatal: the compositor logs
/// it and substitutes a placeholder.
#[derive(Error, Debug)]
pub enum ImageDecodeError {
    #[error(transparent)]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels")]
    Empty,
}
