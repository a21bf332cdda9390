pub mod compare;
pub mod solve;

use compare::Compare;
use solve::Solve;

use clap::Subcommand;
use color_eyre::eyre::Result;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Search a tree and print the value, move and principal variation
    Solve(Solve),
    /// Search a tree with and without pruning and compare the work done
    Compare(Compare),
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::Solve(s) => s.run()?,
            Command::Compare(c) => c.run()?,
        }

        Ok(())
    }
}
