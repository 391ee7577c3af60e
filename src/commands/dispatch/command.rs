//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use ecorec_core::error::Result;
use ecorec_core::store::Store;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn open_store(&self) -> Result<Store> {
        Store::open(self.root)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("ecorec {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("An eco-friendly product catalog and recommender.");
        println!();
        println!("Run `ecorec --help` for usage information.");
        Ok(())
    }
}
