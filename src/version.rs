use regex::Regex;

use crate::error::{ReleaseError, Result};

/// Maps a beta-style tag to its stable identifier.
///
/// If the input looks like `v<something>.beta...` or `v<something>-beta...`,
/// the stable prefix is returned; otherwise the input comes back unchanged.
///
/// # Example
/// ```ignore
/// assert_eq!(stable_of("v1.2.3-beta.1"), "v1.2.3");
/// assert_eq!(stable_of("v1.2.3"), "v1.2.3");
/// ```
pub fn stable_of(release: &str) -> String {
    if let Ok(re) = Regex::new(r"^(v.+?)[.-]beta.*$") {
        if let Some(caps) = re.captures(release) {
            return caps[1].to_string();
        }
    }
    release.to_string()
}

/// Whether the release string carries a beta suffix.
pub fn is_beta(release: &str) -> bool {
    stable_of(release) != release
}

/// Rejects release strings that could not be used verbatim as a git tag or
/// inside the generated version file.
///
/// Whitespace would split the tag name; a double quote or backslash would
/// escape out of the Go string literal the writer emits.
pub fn validate(release: &str) -> Result<()> {
    if release.is_empty() {
        return Err(ReleaseError::version("release string is empty"));
    }
    if release
        .chars()
        .any(|c| c.is_whitespace() || c == '"' || c == '\\')
    {
        return Err(ReleaseError::version(format!(
            "release string '{}' contains characters not allowed in a tag",
            release
        )));
    }
    Ok(())
}

/// Checks the release string against the vX.Y.Z(-pre) convention.
///
/// Only used to warn the operator; an unconventional tag is still released.
pub fn is_well_formed(release: &str) -> bool {
    semver::Version::parse(release.trim_start_matches('v')).is_ok()
}
