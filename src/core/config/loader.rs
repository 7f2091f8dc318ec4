use std::{fs, path::Path};

use super::{ConfigError, ConfigPaths};
use crate::core::env::SystemAccess;

/// Applies the rc file: `export NAME=VALUE` lines, `#` comments.
pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load(&self, system: &dyn SystemAccess) -> Result<usize, ConfigError> {
        let path = &self.paths.rc_path;
        if !path.exists() {
            if self.paths.explicit {
                return Err(ConfigError::ConfigFileNotFound(path.display().to_string()));
            }
            log::debug!("no rc file at {}", path.display());
            return Ok(0);
        }
        self.source(path, system)
    }

    fn source(&self, path: &Path, system: &dyn SystemAccess) -> Result<usize, ConfigError> {
        let content = fs::read_to_string(path)?;
        let mut applied = 0;

        for (index, line) in content.lines().enumerate() {
            if self.process_line(line, system)? {
                applied += 1;
            } else if !is_blank_or_comment(line) {
                log::warn!("{}:{}: ignoring unrecognised line", path.display(), index + 1);
            }
        }

        log::info!("applied {} setting(s) from {}", applied, path.display());
        Ok(applied)
    }

    fn process_line(&self, line: &str, system: &dyn SystemAccess) -> Result<bool, ConfigError> {
        if is_blank_or_comment(line) {
            return Ok(false);
        }

        match line.trim().strip_prefix("export ") {
            Some(var_def) => self.process_env_var(var_def, system),
            None => Ok(false),
        }
    }

    fn process_env_var(&self, var_def: &str, system: &dyn SystemAccess) -> Result<bool, ConfigError> {
        let Some((name, value)) = var_def.split_once('=') else {
            return Ok(false);
        };

        let name = name.trim();
        let mut value = value.trim();

        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }

        system.set_var(name, value)?;
        Ok(true)
    }
}

fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}
