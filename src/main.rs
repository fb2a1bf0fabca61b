//! Whitelabel - Flutter template rebranding
//!
//! Patches a Flutter application template in place with a new application name,
//! package identifier, domain and icon.

use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;
mod error;
mod rebrand;
mod ui;

use cli::{Cli, USAGE};
use error::{Result, WhitelabelError};
use rebrand::ProjectLayout;
use ui::Reporter;

/// Resolve the template root, defaulting to the current directory
fn resolve_workspace(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let Some(root) = workspace else {
        return Ok(PathBuf::from("."));
    };

    if !root.is_dir() {
        return Err(WhitelabelError::WorkspaceNotFound {
            path: root.display().to_string(),
        });
    }

    Ok(root)
}

fn main() {
    let cli = Cli::parse();

    // The argument check comes before any file system access
    let Some(branding) = cli.branding() else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    let root = match resolve_workspace(cli.workspace) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let layout = ProjectLayout::new(root);
    commands::process::run(&layout, &branding, Reporter::new(cli.verbose));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_workspace_defaults_to_current_dir() {
        assert_eq!(resolve_workspace(None).unwrap(), PathBuf::from("."));
    }

    #[test]
    fn test_resolve_workspace_existing_dir() {
        let temp = TempDir::new().unwrap();
        let root = resolve_workspace(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(root, temp.path());
    }

    #[test]
    fn test_resolve_workspace_missing_dir() {
        let temp = TempDir::new().unwrap();
        let result = resolve_workspace(Some(temp.path().join("missing")));
        assert!(matches!(
            result.unwrap_err(),
            WhitelabelError::WorkspaceNotFound { .. }
        ));
    }
}
