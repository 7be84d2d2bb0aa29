use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, EnvFilter};
use venv_run::cli::{run, Cli};

fn main() {
    // Initialize logging; default to warn so child output stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Parse CLI
    let cli = Cli::parse();

    // Resolve, activate, execute; the child's exit code becomes ours
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
