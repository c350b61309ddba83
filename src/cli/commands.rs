use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tenantscope", version, about = "MS365/Entra tenant security report normalizer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a raw report export into the processed model
    Process(ProcessArgs),
    /// Check a report export against the structural gate
    Validate(ValidateArgs),
    /// Print a terminal digest of a report's sections
    Summary(SummaryArgs),
}

#[derive(Args, Clone)]
pub struct ProcessArgs {
    /// Raw report JSON file
    pub input: String,

    /// Output file for the processed report (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Process even when the structural gate fails
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Raw report JSON file
    pub input: String,
}

#[derive(Args, Clone)]
pub struct SummaryArgs {
    /// Raw report JSON file
    pub input: String,
}
