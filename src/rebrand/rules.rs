//! Line rewrite rules
//!
//! Every line-oriented patch is one [`RewriteRule`]: a marker substring that
//! selects the line and a formatter that produces its replacement.

use super::Branding;

const LABEL_ATTRIBUTE: &str = "android:label";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteRule {
    /// `android:label="..."` in the Android manifest
    Label,
    /// `applicationId "..."` in the app-level Gradle build file
    ApplicationId,
    /// `package ...` in Kotlin and Java sources
    Package,
}

impl RewriteRule {
    /// Substring a line must contain to be rewritten
    pub fn marker(self) -> &'static str {
        match self {
            RewriteRule::Label => "android:label=\"",
            RewriteRule::ApplicationId => "applicationId ",
            RewriteRule::Package => "package ",
        }
    }

    /// Replacement for a matching `line`, ending with the same terminator (`\r\n` or `\n`)
    pub fn format(self, line: &str, branding: &Branding) -> String {
        let eol = if line.ends_with("\r\n") { "\r\n" } else { "\n" };
        match self {
            RewriteRule::Label => {
                // Anything after the attribute is dropped along with the old value.
                let prefix = line
                    .find(LABEL_ATTRIBUTE)
                    .map_or(line, |index| &line[..index]);
                format!("{prefix}{LABEL_ATTRIBUTE}=\"{}\"{eol}", branding.app_name)
            }
            RewriteRule::ApplicationId => {
                format!("        applicationId \"{}\"{eol}", branding.package_name)
            }
            RewriteRule::Package => format!("package {}{eol}", branding.package_name),
        }
    }
}

/// Whether a line is a comment in any of the patched file types
///
/// Covers `//` and `/* */` (Kotlin, Java, Gradle, Dart) and `<!-- -->` (XML, plist).
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    ["//", "/*", "*", "<!--"]
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}
