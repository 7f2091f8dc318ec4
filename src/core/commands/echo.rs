use super::{Command, CommandContext, CommandError};
use std::io::Write;

#[derive(Clone, Default)]
pub struct EchoCommand;

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        writeln!(ctx.out, "{}", args.join(" "))?;
        Ok(())
    }
}
