use std::fmt;

mod loader;
mod paths;

use crate::core::env::{EnvError, SystemAccess};
use crate::flags::Flags;
use crate::input::SplitMode;
use loader::ConfigLoader;
use paths::ConfigPaths;

/// Runtime settings: command-line flags plus whatever the rc file applies.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub quiet: bool,
    pub debug: bool,
    pub split_mode: SplitMode,
    pub rc_path: Option<String>,
}

impl Config {
    pub fn from_flags(flags: &Flags) -> Self {
        Config {
            quiet: flags.is_set("quiet"),
            debug: flags.is_set("debug"),
            split_mode: if flags.is_set("exact-split") {
                SplitMode::Exact
            } else {
                SplitMode::Collapse
            },
            rc_path: flags.get_value("config").cloned(),
        }
    }

    /// Sources the rc file into `system`. Returns how many settings applied.
    pub fn load(&self, system: &dyn SystemAccess) -> Result<usize, ConfigError> {
        let paths = ConfigPaths::new(system, self.rc_path.as_deref())?;
        ConfigLoader::new(&paths).load(system)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    ConfigFileNotFound(String),
    IoError(std::io::Error),
    EnvError(EnvError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<EnvError> for ConfigError {
    fn from(e: EnvError) -> Self {
        ConfigError::EnvError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::EnvError(e) => write!(f, "Environment error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
