//! Release driver
//!
//! Orchestrates the full sequence: inspect the repository, run the guards,
//! write the version file, format, commit, tag, and remind the operator to
//! push. Control flow is strictly sequential; the first failure aborts the
//! remaining steps.

use std::path::Path;

use crate::cmd;
use crate::config::Config;
use crate::error::Result;
use crate::git_cli::GitCli;
use crate::guard;
use crate::ui;
use crate::version;
use crate::version_file;

/// Result of a successful release run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// The tag that was created (or would be, in dry-run mode)
    pub tag: String,

    /// The branch the release was cut from, if one could be determined
    pub branch: Option<String>,

    /// Whether this was a preview run with no mutations
    pub dry_run: bool,
}

/// Runs the release sequence in `dir`.
///
/// Guards run before any mutation: a duplicate target or a protected branch
/// refuses the release with the repository and filesystem untouched.
///
/// # Arguments
/// * `dir` - Repository working directory
/// * `release` - Target release string (e.g. "v1.2.3" or "v1.2.3-beta.1")
/// * `config` - Release policy and version file target
/// * `dry_run` - Preview without mutating
pub fn run_release(
    dir: &Path,
    release: &str,
    config: &Config,
    dry_run: bool,
) -> Result<ReleaseOutcome> {
    version::validate(release)?;
    if !version::is_well_formed(release) {
        ui::display_status(&format!(
            "'{}' does not follow the vX.Y.Z convention, continuing anyway",
            release
        ));
    }

    let git = GitCli::discover(dir)?;

    let branch = git.current_branch()?;
    guard::check_branch(branch.as_deref(), config)?;

    let latest = git.latest_tag()?;
    let all_tags = git.list_tags()?;
    guard::check_duplicate(release, latest.as_deref(), &all_tags)?;

    if dry_run {
        ui::display_status(&format!(
            "dry run: would release {} (latest tag: {})",
            release,
            latest.as_deref().unwrap_or("none")
        ));
        return Ok(ReleaseOutcome {
            tag: release.to_string(),
            branch,
            dry_run: true,
        });
    }

    version_file::write(dir, &config.version_file, release)?;
    ui::display_success(&format!("Wrote {}", config.version_file.path));

    if let Some((program, args)) = split_command(&config.format.command) {
        ui::display_status(&format!("Running {}", config.format.command.join(" ")));
        let out = cmd::run(dir, program, &args)?;
        if !out.trim().is_empty() {
            println!("{}", out.trim_end());
        }
    }

    let message = format!("Release {}", release);
    git.commit_all(&message)?;
    ui::display_success(&format!("Committed: {}", message));

    git.create_tag(release)?;
    ui::display_success(&format!("Created tag {}", release));

    ui::display_push_reminder(&config.remote, release);

    Ok(ReleaseOutcome {
        tag: release.to_string(),
        branch,
        dry_run: false,
    })
}

fn split_command(command: &[String]) -> Option<(&str, Vec<&str>)> {
    let (program, rest) = command.split_first()?;
    Some((program.as_str(), rest.iter().map(String::as_str).collect()))
}
