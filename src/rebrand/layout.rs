//! Fixed file locations of the application template

use std::path::{Path, PathBuf};

pub const ICON_PATH: &str = "assets/res/app_icon.png";
pub const LAUNCHER_ICON_DIR: &str = "android/app/src/main/res/mipmap-xxxhdpi";
pub const MANIFEST_PATH: &str = "android/app/src/main/AndroidManifest.xml";
pub const INFO_PLIST_PATH: &str = "ios/Runner/Info.plist";
pub const CONFIG_PATH: &str = "lib/config.dart";
pub const BUILD_GRADLE_PATH: &str = "android/app/build.gradle";

/// Source trees scanned for package declarations, with the glob applied inside each
pub const SOURCE_TREES: &[(&str, &str)] = &[
    ("android/app/src/main/kotlin", "**/*.kt"),
    ("android/app/src/main/java", "**/*.java"),
];

/// Template paths resolved against a project root
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn icon(&self) -> PathBuf {
        self.root.join(ICON_PATH)
    }

    pub fn launcher_icon_dir(&self) -> PathBuf {
        self.root.join(LAUNCHER_ICON_DIR)
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join(MANIFEST_PATH)
    }

    pub fn info_plist(&self) -> PathBuf {
        self.root.join(INFO_PLIST_PATH)
    }

    pub fn config(&self) -> PathBuf {
        self.root.join(CONFIG_PATH)
    }

    pub fn build_gradle(&self) -> PathBuf {
        self.root.join(BUILD_GRADLE_PATH)
    }

    /// Source tree directories paired with their file glob
    pub fn source_trees(&self) -> impl Iterator<Item = (PathBuf, &'static str)> + '_ {
        SOURCE_TREES
            .iter()
            .map(|(dir, pattern)| (self.root.join(dir), *pattern))
    }

    /// Path relative to the project root, with forward slashes, for messages
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
