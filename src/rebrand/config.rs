//! Domain constant in `lib/config.dart`
//!
//! The declaration is prepended on every run; running twice leaves two
//! declarations at the top of the file.

use super::{Branding, Outcome, ProjectLayout};
use crate::error::{Result, fs as fs_error};

const UPDATE_BANNER: &str = "// Config updated by automation";

/// `const String domainName = '<domain>';` with a trailing newline
pub fn domain_declaration(domain: &str) -> String {
    format!("const String domainName = '{domain}';\n")
}

/// Prepend the domain constant to `lib/config.dart`, or create the file with it
pub fn inject_domain(layout: &ProjectLayout, branding: &Branding) -> Result<Outcome> {
    let path = layout.config();
    let declaration = domain_declaration(&branding.domain);

    if path.is_file() {
        let existing =
            std::fs::read_to_string(&path).map_err(|e| fs_error::read_failed(&path, &e))?;
        let content = format!("{UPDATE_BANNER}\n{declaration}{existing}");
        std::fs::write(&path, content).map_err(|e| fs_error::write_failed(&path, &e))?;
        return Ok(Outcome::Updated);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| fs_error::create_dir_failed(parent, &e))?;
    }
    std::fs::write(&path, declaration).map_err(|e| fs_error::write_failed(&path, &e))?;
    Ok(Outcome::Created)
}
