use thiserror::Error;

/// Errors originating from the core icon types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid canvas size: {0}×{0} (must be > 0)")]
    InvalidCanvasSize(u32),
}
