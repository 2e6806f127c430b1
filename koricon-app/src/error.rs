use thiserror::Error;

/// Errors that abort an icon generation run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Render(#[from] koricon_render::RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch icon bundler: {0}")]
    BundlerLaunch(#[source] std::io::Error),

    #[error("icon bundler exited with code {code:?}")]
    BundlerExit { code: Option<i32> },
}
