use std::process::{Command, Stdio};

use super::ProcessError;

/// Runs programs that are not builtins.
#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `name` with all three standard streams inherited and blocks
    /// until it exits.
    pub fn run(&self, name: &str, args: &[String]) -> Result<(), ProcessError> {
        log::debug!("spawning {} with {} argument(s)", name, args.len());

        let mut child = Command::new(name)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ProcessError::CommandNotFound(name.to_string())
                } else {
                    ProcessError::Spawn(e)
                }
            })?;

        let status = child.wait()?;
        log::debug!("{} finished: {}", name, status);

        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::Exited {
                name: name.to_string(),
                status,
            })
        }
    }
}
