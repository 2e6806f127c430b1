pub mod error;
pub mod iconset;
pub mod layout;
pub mod pipeline;

pub use error::PipelineError;
pub use iconset::{export_icns, IconsetBundler, Iconutil, ICONSET_ENTRIES};
pub use layout::OutputLayout;
pub use pipeline::{run, MASTER_SIZE};

/// Convenience result type for the app crate.
pub type Result<T> = std::result::Result<T, PipelineError>;
