use super::ConfigError;
use crate::core::env::SystemAccess;
use std::path::PathBuf;

const RC_FILE: &str = ".burrowrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    /// Set when the path came from `--config` rather than the default.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new(system: &dyn SystemAccess, explicit: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Ok(ConfigPaths {
                rc_path: PathBuf::from(path),
                explicit: true,
            });
        }

        let home = system.home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(ConfigPaths {
            rc_path: home.join(RC_FILE),
            explicit: false,
        })
    }
}
