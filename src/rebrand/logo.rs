//! Icon asset installation

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{Branding, ProjectLayout};
use crate::error::{Result, fs as fs_error};

/// Decode a base64 logo payload
///
/// ASCII whitespace is ignored so that wrapped output of `base64` can be passed as-is.
pub fn decode_logo(payload: &str) -> Result<Vec<u8>> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}

/// Decode the logo and overwrite the template icon with it
///
/// Nothing is written when the payload does not decode.
pub fn install_logo(layout: &ProjectLayout, branding: &Branding) -> Result<PathBuf> {
    let bytes = decode_logo(&branding.logo_base64)?;

    create_dir(&layout.launcher_icon_dir())?;

    let icon = layout.icon();
    if let Some(parent) = icon.parent() {
        create_dir(parent)?;
    }
    std::fs::write(&icon, bytes).map_err(|e| fs_error::write_failed(&icon, &e))?;

    Ok(icon)
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| fs_error::create_dir_failed(path, &e))
}
