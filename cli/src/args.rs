use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bigcalc")]
#[command(about = "Arbitrary-precision integer calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate every operation on a pair of integers
    Eval {
        /// Left operand (decimal digits, optional leading -)
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        rhs: String,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactively read operand pairs and print reports
    Repl,
}
