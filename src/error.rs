use std::path::PathBuf;

use thiserror::Error;

/// Errors that can stop an icon generation run.
#[derive(Debug, Error)]
pub enum IconError {
    /// The source image path does not point at an existing file.
    #[error("Image file '{}' not found", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {size}x{size} PNG: {source}")]
    Encode {
        size: u32,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }
}
