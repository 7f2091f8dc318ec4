use super::{Command, CommandContext, CommandError};

/// Raises the exit signal. The loop says goodbye on its next pass.
#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
        ctx.exit.raise();
        Ok(())
    }
}
