//! teamchat - terminal entry point

use std::path::PathBuf;

use clap::Parser;
use teamchat::runner::{run_tui, AppConfig};

/// Team Chats - a terminal chat mock with canned AI helpers
#[derive(Parser, Debug)]
#[command(name = "teamchat")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Change to this directory before running (relative --log-file paths resolve from here)
    #[arg(short = 'C', long, visible_alias = "directory")]
    cwd: Option<String>,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Write logs here instead of the XDG state directory
    #[arg(long, env = "TEAMCHAT_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        AppConfig {
            debug: args.debug,
            verbose: args.verbose,
            log_file: args.log_file.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Change directory if requested
    if let Some(cwd) = &args.cwd {
        std::env::set_current_dir(cwd)?;
    }

    run_tui(AppConfig::from(&args))
}
