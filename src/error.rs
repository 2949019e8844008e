//! Error types for the icon generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons
#[derive(Error, Debug)]
pub enum Error {
    /// Requested canvas size is unusable (zero pixels)
    #[error("Invalid icon size: {0} (must be at least 1)")]
    InvalidSize(u32),

    /// Raster-to-PNG conversion failed
    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    /// Output produced by an external converter could not be read back
    #[error("Failed to decode converter output: {0}")]
    DecodeError(String),

    /// Writing an icon file failed
    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        /// Destination that could not be written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external vector converter is missing or refused the job.
    /// The source chain treats this as recoverable and falls through to
    /// the next provider.
    #[error("External tool unavailable: {0}")]
    ToolUnavailable(String),

    /// Every configured icon source failed or was unavailable
    #[error("No icon source could produce a {0}x{0} canvas")]
    NoSource(u32),
}
