pub mod error;
pub mod export;
pub mod gradient;
pub mod mark;
pub mod resample;

pub use error::RenderError;
pub use export::{export_ico, export_png, ICO_SIZES};
pub use gradient::render_gradient;
pub use mark::draw_mark;
pub use resample::resample;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
