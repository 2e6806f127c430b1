pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;

// Re-export primary types for convenience.
pub use canvas::{blend_over, Canvas};
pub use color::{BrandPalette, MarkStyle, Rgb, Rgba};
pub use error::CoreError;
pub use geometry::{MarkGeometry, Segment};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
