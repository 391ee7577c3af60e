//! Command implementations for all ecorec commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::{
    add, compare, duplicates, feedback, init, list, picks, recommend, search, stats,
};
use ecorec_core::error::Result;
use ecorec_core::store::Store;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Init => init::execute(ctx.cli, ctx.root),
            Commands::List(args) => list::execute(ctx.cli, &open(ctx)?, args),
            Commands::Search(args) => search::execute(ctx.cli, &open(ctx)?, args),
            Commands::Recommend(args) => recommend::execute(ctx.cli, &open(ctx)?, args),
            Commands::Duplicates(args) => duplicates::execute(ctx.cli, &open(ctx)?, args),
            Commands::Compare(args) => compare::execute(ctx.cli, &open(ctx)?, args),
            Commands::Add(args) => add::execute(ctx.cli, &open(ctx)?, args),
            Commands::Stats => stats::execute(ctx.cli, &open(ctx)?),
            Commands::Picks(args) => picks::execute(ctx.cli, &open(ctx)?, args),
            Commands::Feedback(args) => feedback::execute(ctx.cli, &open(ctx)?, args),
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}

fn open(ctx: &CommandContext) -> Result<Store> {
    let store = ctx.open_store()?;
    trace_command!(ctx.cli, ctx.start, "open_store");
    Ok(store)
}
