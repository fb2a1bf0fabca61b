//! Common test utilities for whitelabel integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// 1x1 transparent PNG
#[allow(dead_code)]
pub const LOGO_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

#[allow(dead_code)]
pub const MANIFEST: &str = r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android">
    <uses-permission android:name="android.permission.INTERNET"/>
    <application
        android:label="flutter_template"
        android:name="${applicationName}"
        android:icon="@mipmap/ic_launcher">
    </application>
</manifest>
"#;

#[allow(dead_code)]
pub const INFO_PLIST: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<plist version=\"1.0\">
<dict>
\t<key>CFBundleName</key>
\t<string>flutter_template</string>
\t<key>CFBundleShortVersionString</key>
\t<string>$(FLUTTER_BUILD_NAME)</string>
</dict>
</plist>
";

#[allow(dead_code)]
pub const BUILD_GRADLE: &str = "android {
    namespace \"com.template.app\"
    defaultConfig {
        applicationId \"com.template.app\"
        minSdkVersion flutter.minSdkVersion
    }
}
";

#[allow(dead_code)]
pub const MAIN_ACTIVITY: &str = "package com.template.app

import io.flutter.embedding.android.FlutterActivity

class MainActivity : FlutterActivity()
";

#[allow(dead_code)]
pub const PLUGIN_REGISTRANT: &str = "package io.flutter.plugins;

import androidx.annotation.Keep;

@Keep
public final class GeneratedPluginRegistrant {
}
";

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new, empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace laid out like a Flutter template
    pub fn flutter_template() -> Self {
        let workspace = Self::new();
        workspace.write_file("android/app/src/main/AndroidManifest.xml", MANIFEST);
        workspace.write_file("ios/Runner/Info.plist", INFO_PLIST);
        workspace.write_file("android/app/build.gradle", BUILD_GRADLE);
        workspace.write_file(
            "android/app/src/main/kotlin/com/template/app/MainActivity.kt",
            MAIN_ACTIVITY,
        );
        workspace.write_file(
            "android/app/src/main/java/io/flutter/plugins/GeneratedPluginRegistrant.java",
            PLUGIN_REGISTRANT,
        );
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read a binary file from workspace
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Number of entries anywhere below the workspace root
    pub fn entry_count(&self) -> usize {
        walkdir::WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .count()
    }
}
