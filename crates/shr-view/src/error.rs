use std::io;
use std::path::PathBuf;

use apple_vgc::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a Super Hi-Res screen: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    #[cfg(feature = "window")]
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[cfg(feature = "window")]
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[cfg(feature = "window")]
    #[error("display surface error: {0}")]
    Pixels(#[from] pixels::Error),
}
