use std::path::{Path, PathBuf};

use regex::Regex;

use crate::cmd;
use crate::error::{ReleaseError, Result};

/// Runs git subcommands against a fixed working directory.
///
/// All repository access goes through the `git` binary with argument-array
/// invocation; nothing is interpolated into a shell string.
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    /// Verifies that `dir` is inside a git work tree.
    ///
    /// # Returns
    /// * `Ok(GitCli)` - Ready to run git operations in `dir`
    /// * `Err` - If `dir` is not part of a repository
    pub fn discover(dir: &Path) -> Result<Self> {
        cmd::run(dir, "git", &["rev-parse", "--is-inside-work-tree"])
            .map_err(|_| ReleaseError::config(format!("not a git repository: {}", dir.display())))?;
        Ok(GitCli {
            dir: dir.to_path_buf(),
        })
    }

    /// Scans `git status` output for the current branch marker.
    ///
    /// Returns the first `On branch <name>` match, or `None` when no line
    /// matches (detached HEAD prints a different marker).
    pub fn current_branch(&self) -> Result<Option<String>> {
        let out = cmd::run(&self.dir, "git", &["status"])?;
        let re = match Regex::new(r"On branch (\S+)") {
            Ok(re) => re,
            Err(_) => return Ok(None),
        };
        for line in out.lines() {
            if let Some(caps) = re.captures(line) {
                return Ok(Some(caps[1].to_string()));
            }
        }
        Ok(None)
    }

    /// Nearest tag reachable from HEAD, trimmed of surrounding whitespace.
    ///
    /// `git describe` exits nonzero when the repository has no tags at all;
    /// that case maps to `Ok(None)` so a first release can proceed.
    pub fn latest_tag(&self) -> Result<Option<String>> {
        match cmd::run(&self.dir, "git", &["describe", "--tags", "--abbrev=0"]) {
            Ok(out) => {
                let tag = out.trim().to_string();
                if tag.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(tag))
                }
            }
            Err(ReleaseError::Command { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All tag names in the repository.
    pub fn list_tags(&self) -> Result<Vec<String>> {
        let out = cmd::run(&self.dir, "git", &["tag", "--list"])?;
        Ok(out
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }

    /// Commits all tracked changes with the given message.
    pub fn commit_all(&self, message: &str) -> Result<String> {
        cmd::run(&self.dir, "git", &["commit", "-a", "-m", message])
    }

    /// Creates a lightweight tag on the current HEAD commit.
    pub fn create_tag(&self, name: &str) -> Result<()> {
        cmd::run(&self.dir, "git", &["tag", name])?;
        Ok(())
    }
}
