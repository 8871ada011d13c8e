pub mod cmd;
pub mod config;
pub mod error;
pub mod git_cli;
pub mod guard;
pub mod release;
pub mod ui;
pub mod version;
pub mod version_file;

pub use error::{ReleaseError, Result};
