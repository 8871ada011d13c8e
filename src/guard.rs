use std::fmt;

use crate::config::Config;
use crate::error::ReleaseError;
use crate::version;

/// Reasons a release run is refused before any mutation takes place.
/// Each variant formats to the exact message shown to the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Refusal {
    /// The target (or the stable version a beta target maps to) already exists
    AlreadyReleased { tag: String },
    /// The current branch is listed in `protected_branches`
    ProtectedBranch { branch: String },
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::AlreadyReleased { tag } => {
                write!(f, "{} has been released", tag)
            }
            Refusal::ProtectedBranch { branch } => {
                write!(f, "refusing to release from protected branch '{}'", branch)
            }
        }
    }
}

impl From<Refusal> for ReleaseError {
    fn from(refusal: Refusal) -> Self {
        ReleaseError::Refused(refusal.to_string())
    }
}

/// Refuses when the current branch is protected by policy.
///
/// A repository in detached HEAD state has no branch name and passes the
/// check; an empty `protected_branches` list disables the guard.
pub fn check_branch(branch: Option<&str>, config: &Config) -> Result<(), Refusal> {
    if let Some(branch) = branch {
        if config.protected_branches.iter().any(|p| p == branch) {
            return Err(Refusal::ProtectedBranch {
                branch: branch.to_string(),
            });
        }
    }
    Ok(())
}

/// Refuses duplicate releases.
///
/// The target must not equal the current tag or appear anywhere in the tag
/// list. A beta-style target is additionally refused when its derived stable
/// identifier has already been released.
pub fn check_duplicate(
    target: &str,
    latest: Option<&str>,
    all_tags: &[String],
) -> Result<(), Refusal> {
    let released = |tag: &str| latest == Some(tag) || all_tags.iter().any(|t| t == tag);

    if released(target) {
        return Err(Refusal::AlreadyReleased {
            tag: target.to_string(),
        });
    }

    let stable = version::stable_of(target);
    if stable != target && released(&stable) {
        return Err(Refusal::AlreadyReleased { tag: stable });
    }

    Ok(())
}
