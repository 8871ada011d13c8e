use std::path::Path;
use std::process::Command;

use crate::error::{ReleaseError, Result};

/// Runs an external program synchronously and captures its standard output.
///
/// Arguments are passed as an array, never through a shell, so version
/// strings and commit messages are inert tokens on the command line.
/// A nonzero exit status is always an error; the captured stderr is folded
/// into the error message so the operator can see what the program said.
///
/// # Arguments
/// * `dir` - Working directory for the child process
/// * `program` - Program name, resolved via PATH
/// * `args` - Argument array
///
/// # Returns
/// * `Ok(String)` - Captured stdout (UTF-8, lossy)
/// * `Err` - If the program cannot be spawned or exits nonzero
pub fn run(dir: &Path, program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        // Parsers downstream match on English output.
        .env("LC_ALL", "C")
        .output()
        .map_err(|e| ReleaseError::command(program, format!("could not start: {}", e)))?;

    if !output.status.success() {
        let code = output
            .status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReleaseError::command(
            program,
            format!("exit status {}: {}", code, stderr.trim()),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
