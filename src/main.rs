use clap::Parser;
use tenantscope::{cli, errors};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Process(args) => cli::process::handle_process(args),
        cli::Commands::Validate(args) => cli::validate::handle_validate(args),
        cli::Commands::Summary(args) => cli::summary::handle_summary(args),
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                errors::ReportError::Input(_) => 2,
                errors::ReportError::Validation(_) => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
