use std::fs;
use std::path::Path;

use crate::config::VersionFileConfig;
use crate::error::Result;

/// Renders the Go source holding the release version constant.
///
/// The release string is embedded verbatim; `version::validate` has already
/// rejected anything that could escape the string literal.
pub fn render(package: &str, constant: &str, release: &str) -> String {
    format!(
        "package {}\n\nconst (\n\t{} = \"{}\"\n)\n",
        package, constant, release
    )
}

/// Overwrites the configured version file with the release constant.
///
/// The file is replaced wholesale on every run. The parent directory is
/// created if it does not exist yet.
pub fn write(dir: &Path, cfg: &VersionFileConfig, release: &str) -> Result<()> {
    let path = dir.join(&cfg.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, render(&cfg.package, &cfg.constant, release))?;
    Ok(())
}
