use anyhow::Result;
use clap::Parser;

mod args;
mod commands;
mod repl;

use args::{Cli, Commands};
use commands::eval;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Eval { lhs, rhs, json } => eval::eval_command(lhs, rhs, *json),
        Commands::Repl => repl::run_repl(),
    }
}
