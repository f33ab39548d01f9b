// Every variant states *where* things went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing a frame to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// The background image could not be opened or decoded.
    /// Fatal at startup: with no background there is nothing to render.
    #[error("Background load error: {0}")]
    BackgroundLoad(#[from] image::ImageError),

    /// Two buffers that must share dimensions do not.
    #[error("{0}: buffer size mismatch")]
    SizeMismatch(&'static str),
}
