use console::style;
use triage_lib::{
    Config, ConfigOverrides, LocalFs, Mover, Prompter, Result, RunSummary, ScriptedPrompter,
    Session, SortController, TerminalPrompter,
};

use super::Cli;

pub fn handle_sort_command(cli: &Cli) -> Result<RunSummary> {
    let config = Config::new(ConfigOverrides {
        work_dir: cli.dir.clone(),
        log_file: cli.log_file.clone(),
        config_file: cli.config.clone(),
        dry_run: cli.dry_run,
    })?;

    if cli.verbose {
        if let Some(path) = config.config_path.as_ref() {
            println!("{} Loaded config from {}", style(">>>").cyan(), path.display());
        }
    }

    // Answers are read before the log or any bucket is created.
    let scripted = match cli.answers.as_ref() {
        Some(path) => Some(ScriptedPrompter::from_file(path)?),
        None => None,
    };

    let mut session = Session::prepare(&config)?;

    if config.dry_run {
        println!(
            "{} Dry run: files will not be moved",
            style("!").yellow().bold()
        );
    }
    println!(
        "{} {} files in {}",
        style(">>>").cyan(),
        style(session.items.len()).bold(),
        config.work_dir.display()
    );
    println!(
        "{} Logging moves to {}",
        style(">>>").cyan(),
        session.action_log.path().display()
    );

    match scripted {
        Some(mut prompter) => run_with(&config, &mut session, &mut prompter),
        None => run_with(&config, &mut session, &mut TerminalPrompter::new()),
    }
}

fn run_with<P: Prompter>(
    config: &Config,
    session: &mut Session,
    prompter: &mut P,
) -> Result<RunSummary> {
    let mut stdout = std::io::stdout();

    let mut controller = SortController::new(
        &session.items,
        &config.work_dir,
        &config.buckets,
        Mover::new(LocalFs, config.dry_run),
        prompter,
        &mut session.action_log,
        &mut stdout,
    );

    controller.run()
}
