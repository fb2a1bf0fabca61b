//! Rebrand command implementation
//!
//! Runs every patch step in order. A failing step is reported and the run moves
//! on; only the argument check can stop the run.

use std::path::Path;

use crate::error::Result;
use crate::rebrand::{Branding, Outcome, ProjectLayout, config, logo, manifest, package, plist};
use crate::ui::Reporter;

/// Number of steps that reported an error
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub failures: usize,
}

/// Run all rebranding steps against `layout`
pub fn run(layout: &ProjectLayout, branding: &Branding, reporter: Reporter) -> RunSummary {
    let mut summary = RunSummary::default();

    reporter.info(format!(
        "Processing: {}, {}, {}",
        branding.app_name, branding.package_name, branding.domain
    ));
    reporter.detail(format!("Workspace: {}", layout.root().display()));

    install_logo(layout, branding, reporter, &mut summary);

    let result = manifest::patch_label(layout, branding);
    report_patch(layout, &layout.manifest(), result, reporter, &mut summary);

    let result = plist::patch_bundle_name(layout, branding);
    report_patch(layout, &layout.info_plist(), result, reporter, &mut summary);

    inject_domain(layout, branding, reporter, &mut summary);

    reporter.info("Updating package name in build.gradle...");
    let result = package::patch_application_id(layout, branding);
    report_patch(layout, &layout.build_gradle(), result, reporter, &mut summary);

    patch_sources(layout, branding, reporter, &mut summary);

    if summary.failures > 0 {
        reporter.detail(format!("{} step(s) reported errors", summary.failures));
    }
    reporter.success("Automation script completed.");

    summary
}

fn install_logo(
    layout: &ProjectLayout,
    branding: &Branding,
    reporter: Reporter,
    summary: &mut RunSummary,
) {
    match logo::install_logo(layout, branding) {
        Ok(icon) => reporter.success(format!("Logo saved to {}", layout.display(&icon))),
        Err(e) => {
            summary.failures += 1;
            reporter.failure(format!("Error saving logo: {e}"));
        }
    }
}

fn inject_domain(
    layout: &ProjectLayout,
    branding: &Branding,
    reporter: Reporter,
    summary: &mut RunSummary,
) {
    let path = layout.config();
    let name = layout.display(&path);
    match config::inject_domain(layout, branding) {
        Ok(Outcome::Created) => reporter.info(format!("{name} not found, creating it.")),
        Ok(_) => reporter.success("Updated config.dart"),
        Err(e) => {
            summary.failures += 1;
            reporter.failure(format!("Error updating {name}: {e}"));
        }
    }
}

fn patch_sources(
    layout: &ProjectLayout,
    branding: &Branding,
    reporter: Reporter,
    summary: &mut RunSummary,
) {
    let sources = match package::discover_sources(layout) {
        Ok(sources) => sources,
        Err(e) => {
            summary.failures += 1;
            reporter.failure(format!("Error discovering source files: {e}"));
            return;
        }
    };

    if sources.is_empty() {
        reporter.detail("No Kotlin or Java sources found");
    }

    for source in sources {
        reporter.detail(format!("Found source {}", layout.display(&source)));
        let result = package::patch_source_package(&source, branding);
        report_patch(layout, &source, result, reporter, summary);
    }
}

fn report_patch(
    layout: &ProjectLayout,
    path: &Path,
    result: Result<Outcome>,
    reporter: Reporter,
    summary: &mut RunSummary,
) {
    let name = layout.display(path);
    match result {
        Ok(Outcome::Skipped) => reporter.skipped(format!("File not found: {name} - skipping")),
        Ok(Outcome::Patched { replaced: 0 }) => reporter.detail(format!("No changes in {name}")),
        Ok(Outcome::Patched { replaced }) => {
            reporter.detail(format!("Patched {name} ({replaced} replaced)"));
        }
        Ok(Outcome::Updated | Outcome::Created) => reporter.detail(format!("Wrote {name}")),
        Err(e) => {
            summary.failures += 1;
            reporter.failure(format!("Error updating {name}: {e}"));
        }
    }
}
