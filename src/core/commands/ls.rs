use super::{Command, CommandContext, CommandError};
use std::io::Write;
use std::path::Path;

/// Names in the working directory, sorted, tab separated.
#[derive(Clone, Default)]
pub struct LsCommand;

impl LsCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for LsCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
        let mut names = ctx.system.list_dir(Path::new("."))?;
        names.sort();
        writeln!(ctx.out, "{}", names.join("\t"))?;
        Ok(())
    }
}
