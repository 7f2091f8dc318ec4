use super::{Command, CommandContext, CommandError};
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Clone)]
pub struct HelpCommand {
    topics: BTreeMap<&'static str, &'static str>,
}

impl HelpCommand {
    pub fn new(topics: BTreeMap<&'static str, &'static str>) -> Self {
        Self { topics }
    }
}

impl Command for HelpCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let Some(name) = args.first() else {
            for (name, description) in &self.topics {
                writeln!(ctx.out, "  {}: {}", name, description)?;
            }
            return Ok(());
        };

        match self.topics.get(name.as_str()) {
            Some(description) => writeln!(ctx.out, "Help for {}:\n{}", name, description)?,
            None => writeln!(ctx.out, "Unknown command: {}", name)?,
        }
        Ok(())
    }
}
