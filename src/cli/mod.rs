use crate::config::ConfigManager;
use crate::core::error::{Result, VenvRunError};
use crate::venv::{environment, executor, resolver, ExecStatus};
use clap::Parser;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "venv-run",
    version,
    about = "Run a command inside a named Python virtual environment",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (default: the user config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Virtualenv directory, bypassing the name lookup
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Virtualenv name, instead of taking it from the first argument
    #[arg(short, long)]
    pub name: Option<String>,

    /// Working directory for the command (default: inherit)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Virtualenv name (unless given otherwise) followed by the command to run
    #[arg(
        value_name = "VIRTUALENV | COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub rest: Vec<String>,
}

/// Resolve the virtualenv, build its environment, and run the command.
/// Returns the child's exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    let config = manager.load()?;

    let environ: HashMap<String, String> = env::vars().collect();
    let base = config.virtualenv_base(&environ);
    let cwd = env::current_dir()?;

    let mut rest = cli.rest;
    let venv = resolver::resolve(
        cli.path.as_deref(),
        cli.name.as_deref(),
        &mut rest,
        base.as_deref(),
        &cwd,
    )?;

    if rest.is_empty() {
        return Err(VenvRunError::NoCommand);
    }

    let child_env = environment::make_env(&environ, &config.env, &config.unset, &venv.path);

    match executor::run(&rest, &child_env, cli.cwd.as_deref())? {
        ExecStatus::Exited(code) => Ok(code),
        ExecStatus::NotFound => Err(VenvRunError::CommandNotFound(rest[0].clone())),
    }
}
