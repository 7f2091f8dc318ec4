mod host;

#[cfg(test)]
pub(crate) mod fake;

pub use host::HostSystem;

use std::path::{Path, PathBuf};

/// Physical memory totals, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    pub total: u64,
    pub free: u64,
}

/// Process-global state the shell reads and mutates.
///
/// Everything here is queried fresh on each call. Builtins like `cd` and
/// `env` change this state out from under the prompt, so nothing is cached.
pub trait SystemAccess {
    fn current_dir(&self) -> Result<PathBuf, EnvError>;
    fn set_current_dir(&self, path: &Path) -> Result<(), EnvError>;
    fn home_dir(&self) -> Option<PathBuf>;

    fn var(&self, name: &str) -> Option<String>;
    fn set_var(&self, name: &str, value: &str) -> Result<(), EnvError>;
    fn vars(&self) -> Vec<(String, String)>;

    fn username(&self) -> Result<String, EnvError>;

    /// Entry names of `path`, in no particular order.
    fn list_dir(&self, path: &Path) -> Result<Vec<String>, EnvError>;

    fn memory_stats(&self) -> Result<MemoryStats, EnvError>;
}

#[derive(Debug)]
pub enum EnvError {
    HomeDirNotFound,
    UserNotFound(u32),
    InvalidName(String),
    InvalidValue(&'static str),
    Unsupported(&'static str),
    IoError(std::io::Error),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::HomeDirNotFound => write!(f, "Home directory not found"),
            EnvError::UserNotFound(uid) => write!(f, "no user entry for uid {}", uid),
            EnvError::InvalidName(name) => write!(f, "invalid variable name: {:?}", name),
            EnvError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            EnvError::Unsupported(what) => write!(f, "{} is not supported on this platform", what),
            EnvError::IoError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EnvError {}

impl From<std::io::Error> for EnvError {
    fn from(e: std::io::Error) -> Self {
        EnvError::IoError(e)
    }
}

/// Checks a name/value pair before it reaches `std::env::set_var`, which
/// panics on these inputs.
pub fn validate_var(name: &str, value: &str) -> Result<(), EnvError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(EnvError::InvalidName(name.to_string()));
    }
    if value.contains('\0') {
        return Err(EnvError::InvalidValue("value contains a NUL byte"));
    }
    Ok(())
}
