use std::process::ExitCode;

use tracing::{error, info};

use koricon_app::{pipeline, Iconutil, OutputLayout};
use koricon_core::{BrandPalette, MarkStyle};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Cannot determine working directory: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Generating KorProxy icon assets under {}", root.display());

    let layout = OutputLayout::rooted_at(&root, "KorProxy");
    match pipeline::run(
        &layout,
        &BrandPalette::KORPROXY,
        &MarkStyle::default(),
        &Iconutil,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Icon generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
