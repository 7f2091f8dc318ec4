use super::{Command, CommandContext, CommandError};
use std::io::Write;

#[derive(Clone, Default)]
pub struct AllocCommand;

impl AllocCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for AllocCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        if !args.is_empty() {
            return Err(CommandError::Usage("alloc"));
        }

        let stats = ctx.system.memory_stats()?;
        writeln!(ctx.out, "Total: {}, Free: {}", stats.total, stats.free)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::run;
    use crate::core::env::fake::FakeSystem;

    #[test]
    fn test_alloc_prints_totals() {
        let system = FakeSystem::new();
        let (result, out) = run(&AllocCommand::new(), &system, &[]);
        assert!(result.is_ok());
        assert_eq!(out, "Total: 8000, Free: 3000\n");
        assert_eq!(system.memory_queries(), 1);
    }

    #[test]
    fn test_alloc_with_args_skips_query() {
        let system = FakeSystem::new();
        let (result, out) = run(&AllocCommand::new(), &system, &["1024"]);
        assert!(matches!(result, Err(CommandError::Usage("alloc"))));
        assert!(out.is_empty());
        assert_eq!(system.memory_queries(), 0);
    }
}
