use super::{Command, CommandContext, CommandError};
use std::io::Write;

#[derive(Clone, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
        let cwd = ctx.system.current_dir()?;
        writeln!(ctx.out, "{}", cwd.display())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::run;
    use crate::core::env::fake::FakeSystem;

    #[test]
    fn test_pwd() {
        let (result, out) = run(&PwdCommand::new(), &FakeSystem::new(), &[]);
        assert!(result.is_ok());
        assert_eq!(out, "/home/tester\n");
    }

    #[test]
    fn test_pwd_ignores_args() {
        let (result, out) = run(&PwdCommand::new(), &FakeSystem::new(), &["-L"]);
        assert!(result.is_ok());
        assert_eq!(out, "/home/tester\n");
    }
}
