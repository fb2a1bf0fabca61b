//! Application id and package declarations
//!
//! Only the declarations are rewritten. Source files stay in their original
//! directories; moving them to match the new package is left to the developer.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::rewrite::rewrite_lines;
use super::{Branding, Outcome, ProjectLayout, RewriteRule};
use crate::error::{Result, WhitelabelError};

/// Set `applicationId` in `android/app/build.gradle`
pub fn patch_application_id(layout: &ProjectLayout, branding: &Branding) -> Result<Outcome> {
    rewrite_lines(&layout.build_gradle(), RewriteRule::ApplicationId, branding)
}

/// Kotlin and Java sources of the Android app, kotlin tree first, each sorted by path
pub fn discover_sources(layout: &ProjectLayout) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for (dir, pattern) in layout.source_trees() {
        sources.extend(discover_in_tree(&dir, pattern)?);
    }
    Ok(sources)
}

fn discover_in_tree(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let glob = Glob::new(pattern).map_err(|e| WhitelabelError::PatternInvalid {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let relative = e
                .path()
                .strip_prefix(dir)
                .unwrap_or(e.path())
                .to_string_lossy()
                .replace('\\', "/");
            glob.matched(&CandidatePath::from(relative.as_str()))
                .is_some()
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    Ok(files)
}

/// Rewrite the package declaration of one source file
pub fn patch_source_package(path: &Path, branding: &Branding) -> Result<Outcome> {
    rewrite_lines(path, RewriteRule::Package, branding)
}
