use super::{validate_var, EnvError, MemoryStats, SystemAccess};
use std::env;
use std::ffi::CStr;
use std::fs;
use std::path::{Path, PathBuf};

// getpwuid_r reports ERANGE until the buffer fits the passwd record.
const PASSWD_BUF_START: usize = 1024;
const PASSWD_BUF_MAX: usize = 1 << 16;

/// The real operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSystem;

impl HostSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemAccess for HostSystem {
    fn current_dir(&self) -> Result<PathBuf, EnvError> {
        Ok(env::current_dir()?)
    }

    fn set_current_dir(&self, path: &Path) -> Result<(), EnvError> {
        Ok(env::set_current_dir(path)?)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn var(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn set_var(&self, name: &str, value: &str) -> Result<(), EnvError> {
        validate_var(name, value)?;
        env::set_var(name, value);
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    fn username(&self) -> Result<String, EnvError> {
        lookup_username()
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>, EnvError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn memory_stats(&self) -> Result<MemoryStats, EnvError> {
        query_memory()
    }
}

fn lookup_username() -> Result<String, EnvError> {
    // SAFETY: getuid has no failure mode and touches no memory.
    let uid = unsafe { libc::getuid() };
    let mut buf: Vec<libc::c_char> = vec![0; PASSWD_BUF_START];

    loop {
        // SAFETY: passwd is plain old data; an all-zero value is valid.
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        // SAFETY: every pointer refers to live storage sized as advertised.
        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
        };

        if rc == libc::ERANGE && buf.len() < PASSWD_BUF_MAX {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 {
            return Err(std::io::Error::from_raw_os_error(rc).into());
        }
        if result.is_null() || pwd.pw_name.is_null() {
            return Err(EnvError::UserNotFound(uid));
        }

        // SAFETY: on success pw_name points into `buf` and is NUL-terminated.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

#[cfg(target_os = "linux")]
fn query_memory() -> Result<MemoryStats, EnvError> {
    // SAFETY: sysinfo is plain old data; an all-zero value is valid.
    let mut info: libc::sysinfo = unsafe { std::mem::zeroed() };

    // SAFETY: `info` is a valid, writable sysinfo struct.
    if unsafe { libc::sysinfo(&mut info) } != 0 {
        return Err(std::io::Error::last_os_error().into());
    }

    let unit = u64::from(info.mem_unit.max(1));
    Ok(MemoryStats {
        total: (info.totalram as u64).saturating_mul(unit),
        free: (info.freeram as u64).saturating_mul(unit),
    })
}

#[cfg(not(target_os = "linux"))]
fn query_memory() -> Result<MemoryStats, EnvError> {
    Err(EnvError::Unsupported("memory statistics"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_set_and_read_var() -> Result<(), EnvError> {
        let system = HostSystem::new();
        system.set_var("BURROW_HOST_TEST", "value with spaces")?;
        assert_eq!(
            system.var("BURROW_HOST_TEST").as_deref(),
            Some("value with spaces")
        );
        assert!(system
            .vars()
            .iter()
            .any(|(k, v)| k == "BURROW_HOST_TEST" && v == "value with spaces"));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_set_var_rejects_bad_name() {
        let system = HostSystem::new();
        assert!(system.set_var("BAD=NAME", "x").is_err());
        assert!(system.set_var("", "x").is_err());
    }

    #[test]
    #[serial]
    fn test_change_directory() -> Result<(), Box<dyn std::error::Error>> {
        let system = HostSystem::new();
        let original = system.current_dir()?;
        let temp = tempdir()?;

        system.set_current_dir(temp.path())?;
        assert_eq!(system.current_dir()?, temp.path().canonicalize()?);

        assert!(system
            .set_current_dir(Path::new("/path/that/does/not/exist"))
            .is_err());
        assert_eq!(system.current_dir()?, temp.path().canonicalize()?);

        system.set_current_dir(&original)?;
        Ok(())
    }

    #[test]
    fn test_list_dir() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.txt"), "a")?;
        fs::create_dir(temp.path().join("sub"))?;

        let mut names = HostSystem::new().list_dir(temp.path())?;
        names.sort();
        assert_eq!(names, vec!["a.txt".to_string(), "sub".to_string()]);
        Ok(())
    }

    #[test]
    fn test_username_resolves() {
        // Containers without a passwd entry for the uid are tolerated.
        match HostSystem::new().username() {
            Ok(name) => assert!(!name.is_empty()),
            Err(e) => assert!(matches!(e, EnvError::UserNotFound(_) | EnvError::IoError(_))),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_memory_stats() -> Result<(), EnvError> {
        let stats = HostSystem::new().memory_stats()?;
        assert!(stats.total > 0);
        assert!(stats.free <= stats.total);
        Ok(())
    }
}
