//! Project info view.

use crate::config::StarterConfig;
use crate::error::Result;
use crate::manifest::PackageManifest;
use crate::ui::UserInterface;

const NOT_AVAILABLE: &str = "N/A";

/// Print name, version, description, scripts and key dependencies from the
/// project's manifest.
///
/// Nothing is printed when the manifest cannot be read; the error is
/// returned for the caller to report.
pub fn show_project_info(config: &StarterConfig, ui: &mut dyn UserInterface) -> Result<()> {
    let manifest = PackageManifest::load(&config.manifest_path())?;

    ui.show_section("Project info");
    let metadata = [
        ("Name", manifest.name()),
        ("Version", manifest.version()),
        ("Description", manifest.description()),
    ];
    for (key, value) in metadata {
        ui.show_entry(key, value.as_deref().unwrap_or(NOT_AVAILABLE));
    }

    ui.show_section("Available scripts");
    for (name, command) in manifest.scripts() {
        ui.show_entry(name, &command);
    }

    ui.show_section("Key dependencies");
    for (name, version) in manifest.key_dependencies(&config.key_dependencies) {
        ui.show_entry(name, &version);
    }

    Ok(())
}
