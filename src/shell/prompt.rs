use std::io::Write;

use crate::core::env::SystemAccess;
use crate::error::ShellError;

/// Shown when the real prompt cannot be built, so input is still read.
pub const FALLBACK_PROMPT: &str = "$ ";

/// Writes `<cwd> [<user>] $ ` and flushes. Both values are looked up on
/// every call.
pub fn render_prompt(out: &mut dyn Write, system: &dyn SystemAccess) -> Result<(), ShellError> {
    let user = system.username()?;
    let cwd = system.current_dir()?;

    write!(out, "{} [{}] $ ", cwd.display(), user)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::fake::FakeSystem;
    use std::path::Path;

    #[test]
    fn test_prompt_format() -> Result<(), ShellError> {
        let mut out = Vec::new();
        render_prompt(&mut out, &FakeSystem::new())?;
        assert_eq!(String::from_utf8_lossy(&out), "/home/tester [tester] $ ");
        Ok(())
    }

    #[test]
    fn test_prompt_tracks_directory() -> Result<(), ShellError> {
        let system = FakeSystem::new().with_dir("/var", &[]);
        system.set_current_dir(Path::new("/var"))?;

        let mut out = Vec::new();
        render_prompt(&mut out, &system)?;
        assert_eq!(String::from_utf8_lossy(&out), "/var [tester] $ ");
        Ok(())
    }

    #[test]
    fn test_prompt_without_user() {
        let mut out = Vec::new();
        let result = render_prompt(&mut out, &FakeSystem::new().without_user());
        assert!(matches!(result, Err(ShellError::Env(_))));
        assert!(out.is_empty());
    }
}
