mod cli;

use clap::Parser;
use console::style;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbose);

    ExitCode::from(run(&cli))
}

/// Runs one session and maps its outcome to a process exit status.
fn run(cli: &cli::Cli) -> u8 {
    match cli::sort::handle_sort_command(cli) {
        Ok(summary) => {
            cli::report::print_summary(&summary);
            0
        }
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            1
        }
    }
}
