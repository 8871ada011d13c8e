use anyhow::Result;
use clap::Parser;

use relcut::{config, release, ui, ReleaseError};

#[derive(clap::Parser)]
#[command(
    name = "relcut",
    about = "Bump the version file, commit, and tag a release"
)]
struct Args {
    #[arg(help = "Target release version, e.g. v1.2.3 or v1.2.3-beta.1")]
    release: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("relcut {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let target = match args.release {
        Some(release) => release,
        None => {
            ui::display_error("Please specify version");
            std::process::exit(1);
        }
    };

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let cwd = std::env::current_dir()?;
    match release::run_release(&cwd, &target, &config, args.dry_run) {
        Ok(_) => Ok(()),
        Err(ReleaseError::Refused(message)) => {
            // Guard refusals are expected outcomes, not failures to trace.
            println!("{}", message);
            std::process::exit(1);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
