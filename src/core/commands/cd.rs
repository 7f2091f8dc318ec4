use super::{Command, CommandContext, CommandError};
use crate::path::PathExpander;

#[derive(Clone, Default)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let target = match args {
            [] => self.path_expander.home_dir(ctx.system)?,
            [path] => self.path_expander.expand(path, ctx.system)?,
            _ => return Err(CommandError::Usage("cd [dir]")),
        };

        ctx.system.set_current_dir(&target)?;
        log::debug!("working directory is now {}", target.display());
        Ok(())
    }
}
