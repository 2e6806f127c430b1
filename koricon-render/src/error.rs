use thiserror::Error;

/// Errors originating from rendering and export.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Core(#[from] koricon_core::CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
