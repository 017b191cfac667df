use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for colour extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between a filename and a colour.
#[derive(Error, Debug)]
pub enum Error {
    /// The decoded image has a channel layout other than 8-bit RGB or RGBA.
    #[error("Only {} modes supported but got {mode}", crate::SUPPORTED_MODES.join(", "))]
    UnsupportedMode { mode: String },

    /// The extraction loop ran out of crop sizes without ever selecting a colour.
    #[error("Unable to extract colour from image")]
    NoDominantColour,

    /// The supplied image filename is empty or malformed.
    #[error("Invalid image filename: {reason}")]
    InvalidInput { reason: String },

    /// No file exists for the name with any of the supported extensions.
    #[error("Could not find/access: {name}")]
    NotFound { name: String },

    #[error("Failed to open image {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }
}
