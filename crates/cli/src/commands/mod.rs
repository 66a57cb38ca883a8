//! Subcommands

use std::io::{BufRead, Write};

use clap::Subcommand;
use hotelier_app::context::AppContext;

use crate::errors::CliError;

mod add;
mod delete;
mod edit;
mod list;
mod search;
mod show;
mod stats;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List hotels, optionally filtered
    List(list::ListArgs),

    /// Show one hotel
    Show(show::ShowArgs),

    /// Add a hotel
    Add(add::AddArgs),

    /// Change fields of an existing hotel
    Edit(edit::EditArgs),

    /// Delete a hotel after confirmation
    Delete(delete::DeleteArgs),

    /// Summary figures over all hotels
    Stats(stats::StatsArgs),

    /// Replay a sequence of search box edits as a debounced live search
    Search(search::SearchArgs),
}

pub(crate) async fn run(
    command: Command,
    context: &AppContext,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::List(args) => list::run(args, context, out).await,
        Command::Show(args) => show::run(args, context, out).await,
        Command::Add(args) => add::run(args, context, out).await,
        Command::Edit(args) => edit::run(args, context, out).await,
        Command::Delete(args) => delete::run(args, context, input, out).await,
        Command::Stats(args) => stats::run(args, context, out).await,
        Command::Search(args) => search::run(args, context, out).await,
    }
}
