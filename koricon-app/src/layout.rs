use std::path::{Path, PathBuf};

/// Destination layout for every generated artifact.
///
/// All paths derive from one root directory and the application name.
/// Passed explicitly into the pipeline so a test run can point everything
/// at a scratch directory.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    app_name: String,
    assets_dir: PathBuf,
    app_assets_dir: PathBuf,
}

impl OutputLayout {
    /// Layout rooted at a repository checkout: the shared `assets/`
    /// directory plus the application project's `src/<name>/Assets/`.
    pub fn rooted_at(root: &Path, app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            assets_dir: root.join("assets"),
            app_assets_dir: root.join("src").join(app_name).join("Assets"),
        }
    }

    /// The full-resolution PNG.
    pub fn png_path(&self) -> PathBuf {
        self.assets_dir.join(format!("{}.png", self.app_name))
    }

    /// The multi-resolution Windows icon.
    pub fn ico_path(&self) -> PathBuf {
        self.assets_dir.join(format!("{}.ico", self.app_name))
    }

    /// The macOS icon bundle.
    pub fn icns_path(&self) -> PathBuf {
        self.assets_dir.join(format!("{}.icns", self.app_name))
    }

    /// Transient staging directory for the iconset.
    pub fn iconset_dir(&self) -> PathBuf {
        self.assets_dir.join(format!("{}.iconset", self.app_name))
    }

    /// The second build target's copy of the Windows icon.
    pub fn synced_ico_path(&self) -> PathBuf {
        self.app_assets_dir.join(format!("{}.ico", self.app_name))
    }
}
