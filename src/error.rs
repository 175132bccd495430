//! Error type shared by the whole crate.

use std::io;

use thiserror::Error;

use crate::verify::OrthogonalityError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The table request did not look like `S<n>` or `H<n>`.
    #[error(
        "malformed table request {0:?}: expected 'S' or 'H' followed by a non-negative integer, \
         e.g. S10 for the symmetric group or H3 for the hyperoctahedral group"
    )]
    MalformedRequest(String),

    #[error("invalid corner geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid corner sequence: {0}")]
    InvalidSequence(String),

    #[error("invalid partition state: {0}")]
    InvalidState(String),

    #[error("table failed verification: {0}")]
    Verification(#[from] OrthogonalityError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
