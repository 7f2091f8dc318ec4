use super::{validate_var, EnvError, MemoryStats, SystemAccess};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory stand-in for the host, so tests never touch process state.
pub(crate) struct FakeSystem {
    cwd: RefCell<PathBuf>,
    dirs: RefCell<BTreeMap<PathBuf, BTreeSet<String>>>,
    vars: RefCell<BTreeMap<String, String>>,
    home: Option<PathBuf>,
    user: Option<String>,
    memory: MemoryStats,
    memory_queries: Cell<usize>,
}

impl FakeSystem {
    pub(crate) fn new() -> Self {
        let mut dirs = BTreeMap::new();
        dirs.insert(PathBuf::from("/"), BTreeSet::new());
        dirs.insert(PathBuf::from("/home/tester"), BTreeSet::new());

        Self {
            cwd: RefCell::new(PathBuf::from("/home/tester")),
            dirs: RefCell::new(dirs),
            vars: RefCell::new(BTreeMap::new()),
            home: Some(PathBuf::from("/home/tester")),
            user: Some("tester".to_string()),
            memory: MemoryStats {
                total: 8_000,
                free: 3_000,
            },
            memory_queries: Cell::new(0),
        }
    }

    pub(crate) fn with_dir(self, path: &str, entries: &[&str]) -> Self {
        self.dirs.borrow_mut().insert(
            PathBuf::from(path),
            entries.iter().map(|e| e.to_string()).collect(),
        );
        self
    }

    pub(crate) fn without_user(mut self) -> Self {
        self.user = None;
        self
    }

    pub(crate) fn without_home(mut self) -> Self {
        self.home = None;
        self
    }

    pub(crate) fn memory_queries(&self) -> usize {
        self.memory_queries.get()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.borrow().join(path)
        };

        let mut resolved = PathBuf::from("/");
        for part in joined.components() {
            match part {
                std::path::Component::ParentDir => {
                    resolved.pop();
                }
                std::path::Component::Normal(p) => resolved.push(p),
                _ => {}
            }
        }
        resolved
    }
}

impl SystemAccess for FakeSystem {
    fn current_dir(&self) -> Result<PathBuf, EnvError> {
        Ok(self.cwd.borrow().clone())
    }

    fn set_current_dir(&self, path: &Path) -> Result<(), EnvError> {
        let target = self.resolve(path);
        if !self.dirs.borrow().contains_key(&target) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory").into());
        }
        *self.cwd.borrow_mut() = target;
        Ok(())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.borrow().get(name).cloned()
    }

    fn set_var(&self, name: &str, value: &str) -> Result<(), EnvError> {
        validate_var(name, value)?;
        self.vars
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn username(&self) -> Result<String, EnvError> {
        self.user.clone().ok_or(EnvError::UserNotFound(1000))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>, EnvError> {
        let target = self.resolve(path);
        self.dirs
            .borrow()
            .get(&target)
            .map(|entries| entries.iter().rev().cloned().collect())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory").into())
    }

    fn memory_stats(&self) -> Result<MemoryStats, EnvError> {
        self.memory_queries.set(self.memory_queries.get() + 1);
        Ok(self.memory)
    }
}
