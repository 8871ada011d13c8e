use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Prints the manual push reminder. Pushing is a deliberate operator step,
/// never done automatically.
pub fn display_push_reminder(remote: &str, tag: &str) {
    println!("\nDone, it's time to push your tag to remote {}!", remote);
    println!("\n  git push && git push {} {}\n", remote, tag);
}
