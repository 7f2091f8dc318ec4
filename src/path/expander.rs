use crate::core::env::{EnvError, SystemAccess};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expands a leading `~` or `~/` against the home directory reported by
    /// `system`. Everything else, including `~user`, passes through as is.
    pub fn expand(&self, path: &str, system: &dyn SystemAccess) -> Result<PathBuf, EnvError> {
        if path == "~" {
            return self.home_dir(system);
        }

        match path.strip_prefix("~/") {
            Some(rest) => {
                let mut home = self.home_dir(system)?;
                for part in rest.split('/').filter(|p| !p.is_empty()) {
                    home.push(part);
                }
                Ok(home)
            }
            None => Ok(Path::new(path).to_path_buf()),
        }
    }

    pub fn home_dir(&self, system: &dyn SystemAccess) -> Result<PathBuf, EnvError> {
        system.home_dir().ok_or(EnvError::HomeDirNotFound)
    }
}
