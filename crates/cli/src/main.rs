mod cmd;
mod logging;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dmemo", version, about = "Timestamped memos in markdown daily notes")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Post a memo to the daily note
    Post(PostArgs),

    /// List memos of a daily note, newest first
    List(ListArgs),

    /// List checkbox tasks of a daily note
    Tasks(TasksArgs),

    /// Check or uncheck the task starting at a byte offset
    Check(CheckArgs),

    /// Print the path of a daily note
    Path(DateArgs),
}

#[derive(Debug, Args)]
pub struct DateArgs {
    /// Daily note date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct PostArgs {
    /// Memo text; multiple words are joined with spaces
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Add as an open task (`- [ ] ...`) instead of a memo
    #[arg(long)]
    pub task: bool,

    #[command(flatten)]
    pub date: DateArgs,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct TasksArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Only show open tasks
    #[arg(long)]
    pub open: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Byte offset of the task, as shown by `dmemo tasks`
    pub offset: usize,

    /// Clear the checkbox instead of checking it
    #[arg(long)]
    pub undo: bool,

    #[command(flatten)]
    pub date: DateArgs,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Post(args) => cmd::post::run(config, profile, &args),
        Commands::List(args) => cmd::list::run(config, profile, &args),
        Commands::Tasks(args) => cmd::tasks::run(config, profile, &args),
        Commands::Check(args) => cmd::check::run(config, profile, &args),
        Commands::Path(args) => cmd::path::run(config, profile, &args),
    }
}
