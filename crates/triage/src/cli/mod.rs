pub mod report;
pub mod sort;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Sort the files of a directory one by one into private, general and defer buckets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, short = 'd', help = "Directory to sort (defaults to the current directory)")]
    pub dir: Option<PathBuf>,

    #[arg(long, short = 'n', help = "Show what would be moved without touching any file")]
    pub dry_run: bool,

    #[arg(long, help = "Path of the action log (overrides TRIAGE_LOG_FILE)")]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Path to triage.toml")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Read answers from FILE, one per line, instead of the terminal")]
    pub answers: Option<PathBuf>,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,
}

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
