//! Generic line rewriting
//!
//! Reads a whole file, replaces every non-comment line containing the rule's
//! marker with the rule's template, and writes the file back in place.

use std::path::Path;

use super::rules::{RewriteRule, is_comment_line};
use super::{Branding, Outcome};
use crate::error::{Result, fs as fs_error};

/// Rewrite matching lines of `path` according to `rule`
///
/// A missing file is not an error: nothing is created and [`Outcome::Skipped`]
/// is returned.
pub fn rewrite_lines(path: &Path, rule: RewriteRule, branding: &Branding) -> Result<Outcome> {
    if !path.is_file() {
        return Ok(Outcome::Skipped);
    }

    let content = std::fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, &e))?;
    let (rewritten, replaced) = rewrite_content(&content, rule, branding);
    std::fs::write(path, rewritten).map_err(|e| fs_error::write_failed(path, &e))?;

    Ok(Outcome::Patched { replaced })
}

/// Apply `rule` to in-memory content, returning the new text and the number of replaced lines
pub fn rewrite_content(content: &str, rule: RewriteRule, branding: &Branding) -> (String, usize) {
    let marker = rule.marker();
    let mut output = String::with_capacity(content.len());
    let mut replaced = 0;

    for line in content.split_inclusive('\n') {
        if line.contains(marker) && !is_comment_line(line) {
            output.push_str(&rule.format(line, branding));
            replaced += 1;
        } else {
            output.push_str(line);
        }
    }

    (output, replaced)
}
