use super::{Command, CommandContext, CommandError};
use std::io::Write;

/// `env` lists, `env NAME` reads, `env NAME VALUE` sets.
#[derive(Clone, Default)]
pub struct EnvCommand;

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        match args {
            [] => {
                let mut vars = ctx.system.vars();
                vars.sort();
                for (name, value) in vars {
                    writeln!(ctx.out, "{}={}", name, value)?;
                }
            }
            [name] => {
                // Unset reads as empty, like `printenv` without the status.
                let value = ctx.system.var(name).unwrap_or_default();
                writeln!(ctx.out, "{}", value)?;
            }
            [name, value] => ctx.system.set_var(name, value)?,
            _ => return Err(CommandError::Usage("env [name [value]]")),
        }
        Ok(())
    }
}
