use clap::Parser;
use colored::Colorize;

use tdo::cli::args::{Cli, Commands};
use tdo::cli::commands;
use tdo::config::Config;
use tdo::error::TdoError;
use tdo::features::interactive::{ExternalEditor, SkimPicker};
use tdo::features::shell::generate_completions;
use tdo::storage::TaskFile;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TdoError> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let path = cli
        .file
        .or_else(|| config.file.clone())
        .unwrap_or_else(|| "todo.txt".into());
    let backup = !cli.no_backup && config.backup;
    let store = TaskFile::new(path, backup);
    let format = cli.output;

    let output = match cli.command {
        Some(Commands::Add(args)) => commands::add(&store, &args.text)?,
        Some(Commands::List) => commands::list(&store, format)?,
        Some(Commands::Quick) | None => commands::quick(&store, format)?,
        Some(Commands::Done(args)) => commands::mark(&store, &args.numbers, true)?,
        Some(Commands::Undone(args)) => commands::mark(&store, &args.numbers, false)?,
        Some(Commands::Rm(args)) => commands::remove(&store, &args.numbers)?,
        Some(Commands::Archive) => commands::archive(&store)?,
        Some(Commands::Edit(args)) => {
            let editor = ExternalEditor::from_env(config.editor.as_deref());
            commands::edit(&store, &args.numbers, &editor)?
        },
        Some(Commands::Find) => commands::find(&store, &SkimPicker)?,
        Some(Commands::Completions { shell }) => generate_completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
