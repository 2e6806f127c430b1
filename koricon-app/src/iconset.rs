use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use koricon_core::Canvas;
use koricon_render::{export_png, resample};

use crate::error::PipelineError;

/// The macOS iconset convention: file name to pixel size, covering the
/// standard and `@2x` density variants for 16/32/128/256/512 points.
pub const ICONSET_ENTRIES: [(&str, u32); 10] = [
    ("icon_16x16.png", 16),
    ("icon_16x16@2x.png", 32),
    ("icon_32x32.png", 32),
    ("icon_32x32@2x.png", 64),
    ("icon_128x128.png", 128),
    ("icon_128x128@2x.png", 256),
    ("icon_256x256.png", 256),
    ("icon_256x256@2x.png", 512),
    ("icon_512x512.png", 512),
    ("icon_512x512@2x.png", 1024),
];

/// Packs a populated iconset directory into a single icon-bundle file.
///
/// A narrow seam around the platform tool so the pipeline can run and be
/// tested without it.
pub trait IconsetBundler {
    fn bundle(&self, iconset_dir: &Path, out_path: &Path) -> Result<(), PipelineError>;
}

/// The macOS `iconutil` command-line tool.
pub struct Iconutil;

impl IconsetBundler for Iconutil {
    fn bundle(&self, iconset_dir: &Path, out_path: &Path) -> Result<(), PipelineError> {
        let status = Command::new("iconutil")
            .arg("-c")
            .arg("icns")
            .arg(iconset_dir)
            .arg("-o")
            .arg(out_path)
            .status()
            .map_err(PipelineError::BundlerLaunch)?;
        if !status.success() {
            return Err(PipelineError::BundlerExit {
                code: status.code(),
            });
        }
        Ok(())
    }
}

/// Export the canvas as an icon bundle via a staged iconset directory.
///
/// The staging directory is created fresh (a leftover from an earlier run
/// is removed first), populated with the ten downsampled PNGs, handed to
/// the bundler, and removed once the bundle exists. On bundler failure it
/// is left in place so the failed input can be inspected.
pub fn export_icns(
    canvas: &Canvas,
    out_path: &Path,
    iconset_dir: &Path,
    bundler: &dyn IconsetBundler,
) -> Result<(), PipelineError> {
    if iconset_dir.exists() {
        fs::remove_dir_all(iconset_dir)?;
    }
    fs::create_dir_all(iconset_dir)?;

    for (name, size) in ICONSET_ENTRIES {
        let small = resample(canvas, size)?;
        export_png(&small, &iconset_dir.join(name))?;
    }
    debug!(
        "Staged {} iconset entries in {}",
        ICONSET_ENTRIES.len(),
        iconset_dir.display()
    );

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    bundler.bundle(iconset_dir, out_path)?;

    fs::remove_dir_all(iconset_dir)?;
    Ok(())
}
