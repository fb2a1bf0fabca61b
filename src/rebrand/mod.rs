//! Rebranding steps for a Flutter application template
//!
//! Each sub-module owns one independent patch over a fixed file of the template:
//! - [`logo`]: icon asset
//! - [`manifest`]: Android manifest label
//! - [`plist`]: iOS bundle name
//! - [`config`]: Dart domain constant
//! - [`package`]: Gradle application id and Kotlin/Java package declarations
//!
//! Line-oriented patches share [`rewrite::rewrite_lines`], which is driven by
//! the [`rules::RewriteRule`] table.

pub mod config;
pub mod layout;
pub mod logo;
pub mod manifest;
pub mod package;
pub mod plist;
pub mod rewrite;
pub mod rules;

pub use layout::ProjectLayout;
pub use rules::RewriteRule;

/// Values a template is rebranded with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    /// Human-readable application name
    pub app_name: String,
    /// Application id / package namespace, e.g. `com.example.app`
    pub package_name: String,
    /// Domain injected into `lib/config.dart`
    pub domain: String,
    /// Base64-encoded icon image
    pub logo_base64: String,
}

/// Result of a single patch step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was rewritten; `replaced` counts substituted lines or matches
    Patched { replaced: usize },
    /// Existing content was kept and new content was added to it
    Updated,
    /// The file did not exist and was created
    Created,
    /// The target file does not exist; nothing was written
    Skipped,
}
