use crate::core::error::{Result, VenvRunError};
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Outcome of running the command: the child's exit status, or a marker
/// that the executable could not be located at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStatus {
    Exited(i32),
    NotFound,
}

/// Spawn `command` with exactly the given environment and wait for it.
///
/// Stdio is inherited, so the child owns the terminal until it exits.
/// A missing executable is reported as `ExecStatus::NotFound` rather
/// than an error; other spawn failures propagate.
pub fn run(
    command: &[String],
    env: &HashMap<String, String>,
    cwd: Option<&Path>,
) -> Result<ExecStatus> {
    let (program, args) = command.split_first().ok_or(VenvRunError::NoCommand)?;

    debug!(program = %program, "spawning command");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .env_clear()
        .envs(env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    match cmd.status() {
        // a killed child has no code; report failure
        Ok(status) => Ok(ExecStatus::Exited(status.code().unwrap_or(1))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ExecStatus::NotFound),
        Err(e) => Err(e.into()),
    }
}
