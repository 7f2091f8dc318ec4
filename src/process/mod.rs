use std::fmt;
use std::process::ExitStatus;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Exited { name: String, status: ExitStatus },
    Spawn(std::io::Error),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Spawn(e)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::Exited { name, status } => write!(f, "{}: {}", name, status),
            ProcessError::Spawn(e) => write!(f, "failed to start process: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
