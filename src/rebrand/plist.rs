//! iOS bundle name
//!
//! `CFBundleName` spans a `<key>` line and a `<string>` line, so it is patched
//! over the whole file text instead of line by line.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{Branding, Outcome, ProjectLayout};
use crate::error::{Result, fs as fs_error};

static BUNDLE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(<key>CFBundleName</key>[\s\n]*<string>)(.*?)(</string>)")
        .expect("Invalid CFBundleName regex")
});

/// Replace every `CFBundleName` string value, returning the new text and the match count
pub fn replace_bundle_name(content: &str, app_name: &str) -> (String, usize) {
    let replaced = BUNDLE_NAME_REGEX.find_iter(content).count();
    let output = BUNDLE_NAME_REGEX.replace_all(content, |caps: &Captures| {
        format!("{}{}{}", &caps[1], app_name, &caps[3])
    });
    (output.into_owned(), replaced)
}

/// Set `CFBundleName` in `Info.plist` to the application name
pub fn patch_bundle_name(layout: &ProjectLayout, branding: &Branding) -> Result<Outcome> {
    let path = layout.info_plist();
    if !path.is_file() {
        return Ok(Outcome::Skipped);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| fs_error::read_failed(&path, &e))?;
    let (patched, replaced) = replace_bundle_name(&content, &branding.app_name);
    std::fs::write(&path, patched).map_err(|e| fs_error::write_failed(&path, &e))?;

    Ok(Outcome::Patched { replaced })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rebrand::test_support::branding;
    use tempfile::TempDir;

    const PLIST: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<plist version=\"1.0\">
<dict>
\t<key>CFBundleDisplayName</key>
\t<string>Template</string>
\t<key>CFBundleName</key>
\t<string>flutter_template</string>
\t<key>CFBundlePackageType</key>
\t<string>APPL</string>
</dict>
</plist>
";

    #[test]
    fn test_replace_bundle_name_only() {
        let (out, replaced) = replace_bundle_name(PLIST, "Acme Shop");

        assert_eq!(replaced, 1);
        assert_eq!(
            out,
            PLIST.replace(
                "<string>flutter_template</string>",
                "<string>Acme Shop</string>"
            )
        );
        assert!(out.contains("<string>Template</string>"));
    }

    #[test]
    fn test_replacement_text_is_literal() {
        let (out, _) = replace_bundle_name(PLIST, "Shop $1 & Co");
        assert!(out.contains("<string>Shop $1 & Co</string>"));
    }

    #[test]
    fn test_no_match_leaves_content() {
        let content = "<dict>\n\t<key>CFBundleIdentifier</key>\n\t<string>x</string>\n</dict>\n";
        let (out, replaced) = replace_bundle_name(content, "Acme Shop");
        assert_eq!(replaced, 0);
        assert_eq!(out, content);
    }

    #[test]
    fn test_patch_bundle_name_file() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        std::fs::create_dir_all(layout.info_plist().parent().unwrap()).unwrap();
        std::fs::write(layout.info_plist(), PLIST).unwrap();

        let outcome = patch_bundle_name(&layout, &branding()).unwrap();

        assert_eq!(outcome, Outcome::Patched { replaced: 1 });
        let patched = std::fs::read_to_string(layout.info_plist()).unwrap();
        assert!(patched.contains("<key>CFBundleName</key>\n\t<string>Acme Shop</string>"));
    }

    #[test]
    fn test_missing_plist_is_skipped() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        assert_eq!(
            patch_bundle_name(&layout, &branding()).unwrap(),
            Outcome::Skipped
        );
    }
}
