use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tdo")]
#[command(about = "A plain-text todo.txt task manager")]
#[command(long_about = "tdo - a todo.txt CLI

Manages a plain-text task list, one task per line, in the todo.txt
format. Tasks carry an optional priority, creation/completion dates,
free-text description, and an embedded due:YYYY-MM-DD token.

QUICK START:
  tdo                       Tasks due in the last and next seven days
  tdo add \"buy milk due:tomorrow\"
  tdo list                  All tasks, numbered
  tdo done 3                Mark task 3 complete

Task numbers refer to the file's line order, as shown by 'tdo list'.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  tdo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Path to the task file
    ///
    /// Defaults to the file configured in ~/.tdo/config.yaml,
    /// or ./todo.txt if none is configured.
    #[arg(short, long, global = true, env = "TDO_FILE")]
    pub file: Option<PathBuf>,

    /// Skip the automatic .bak copy before destructive writes (dangerous!)
    #[arg(long, global = true)]
    pub no_backup: bool,

    /// Output format for listing commands
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Subcommand; defaults to 'quick' when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    ///
    /// The text is one todo.txt line. Relative due dates are rewritten
    /// before parsing, and today's date is stamped as the creation
    /// date.
    ///
    /// # Examples
    ///
    ///   tdo add "buy milk due:tomorrow"
    ///   tdo add "(A) call plumber +home due:fri"
    #[command(alias = "a")]
    Add(AddArgs),

    /// List all tasks, numbered
    ///
    /// Numbers are 1-based line positions in the task file and are the
    /// numbers accepted by done, undone, rm, and edit.
    #[command(alias = "l")]
    List,

    /// List tasks due in the previous and next seven days
    ///
    /// The default action. Sorted by due date, with a separator line
    /// between past and upcoming days. Each task keeps the number it
    /// has in 'tdo list'.
    #[command(alias = "q")]
    Quick,

    /// Mark the given task(s) as complete
    #[command(visible_alias = "do", alias = "d")]
    Done(NumbersArgs),

    /// Mark the given task(s) as incomplete
    #[command(visible_alias = "undo", alias = "u")]
    Undone(NumbersArgs),

    /// Delete the given task(s) from the file
    #[command(alias = "r")]
    Rm(NumbersArgs),

    /// Move all completed tasks to FILE-done.txt
    #[command(alias = "ar")]
    Archive,

    /// Edit the given task(s) in the default editor
    ///
    /// Each task is written to a scratch file, opened in $EDITOR (or
    /// the configured editor), and re-parsed on save.
    #[command(alias = "e")]
    Edit(NumbersArgs),

    /// Interactively find task(s) with a fuzzy picker
    ///
    /// Multi-select with Tab; prints the selected task numbers.
    #[command(alias = "f")]
    Find,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Task text, joined with spaces
    #[arg(required = true, trailing_var_arg = true)]
    pub text: Vec<String>,
}

/// Task number arguments for numbered commands.
#[derive(Args)]
pub struct NumbersArgs {
    /// 1-based task number(s), as shown by 'tdo list'
    #[arg(required = true)]
    pub numbers: Vec<String>,
}
