//! Android manifest label

use super::rewrite::rewrite_lines;
use super::{Branding, Outcome, ProjectLayout, RewriteRule};
use crate::error::Result;

/// Set `android:label` in `AndroidManifest.xml` to the application name
pub fn patch_label(layout: &ProjectLayout, branding: &Branding) -> Result<Outcome> {
    rewrite_lines(&layout.manifest(), RewriteRule::Label, branding)
}
