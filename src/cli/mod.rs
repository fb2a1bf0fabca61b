//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::rebrand::Branding;

/// Printed on stdout when fewer than four positional values are given
pub const USAGE: &str = "Usage: whitelabel <app_name> <package_name> <domain> <logo_base64>";

/// Whitelabel - rebrand a Flutter application template
#[derive(Parser, Debug)]
#[command(
    name = "whitelabel",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Rebrand a Flutter application template",
    long_about = "Whitelabel patches a Flutter application template in place: the icon asset, \
                  the Android manifest label, the iOS bundle name, the domain constant in \
                  lib/config.dart, the Gradle applicationId and the Kotlin/Java package \
                  declarations.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  whitelabel \"Acme Shop\" com.acme.shop acme.example.com \"$(base64 -w0 logo.png)\"\n   \
                  whitelabel -w ./template \"Acme Shop\" com.acme.shop acme.example.com \"$LOGO\"\n"
)]
pub struct Cli {
    /// Project root of the template (defaults to current directory)
    #[arg(long, short = 'w', env = "WHITELABEL_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Application display name
    #[arg(allow_hyphen_values = true)]
    pub app_name: Option<String>,

    /// Application id and package namespace, e.g. com.example.app
    #[arg(allow_hyphen_values = true)]
    pub package_name: Option<String>,

    /// Domain written to lib/config.dart
    #[arg(allow_hyphen_values = true)]
    pub domain: Option<String>,

    /// Base64-encoded icon image
    #[arg(allow_hyphen_values = true)]
    pub logo_base64: Option<String>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// The four branding values, or `None` if any is missing
    pub fn branding(&self) -> Option<Branding> {
        Some(Branding {
            app_name: self.app_name.clone()?,
            package_name: self.package_name.clone()?,
            domain: self.domain.clone()?,
            logo_base64: self.logo_base64.clone()?,
        })
    }
}
