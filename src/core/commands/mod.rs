use std::collections::BTreeMap;
use std::io::Write;

mod alloc;
mod cd;
mod echo;
mod env;
mod exit;
mod help;
mod ls;
mod pwd;

pub use alloc::AllocCommand;
pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use env::EnvCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use pwd::PwdCommand;

use crate::core::env::{EnvError, SystemAccess};
use crate::core::state::ExitSignal;
use crate::process::{ProcessError, ProcessExecutor};

/// Builtin names and the text `help` shows for them.
pub const BUILTINS: &[(&str, &str)] = &[
    ("alloc", "Display total and free physical memory"),
    ("cd", "Change the current working directory"),
    ("echo", "Print arguments to the standard output"),
    ("env", "Display or modify environment variables"),
    ("exit", "Exit the shell"),
    ("help", "Display information about available commands"),
    ("ls", "List files in the current directory"),
    ("pwd", "Print the current working directory"),
];

#[derive(Debug)]
pub enum CommandError {
    Usage(&'static str),
    IoError(std::io::Error),
    EnvError(EnvError),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(usage) => write!(f, "usage: {}", usage),
            CommandError::IoError(err) => write!(f, "{}", err),
            CommandError::EnvError(err) => write!(f, "{}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What a builtin may touch while it runs.
pub struct CommandContext<'a> {
    pub out: &'a mut dyn Write,
    pub system: &'a dyn SystemAccess,
    pub exit: &'a ExitSignal,
}

pub trait Command {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Alloc(AllocCommand),
    Cd(CdCommand),
    Echo(EchoCommand),
    Env(EnvCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
    Ls(LsCommand),
    Pwd(PwdCommand),
}

impl Command for CommandType {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        match self {
            CommandType::Alloc(cmd) => cmd.execute(ctx, args),
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Echo(cmd) => cmd.execute(ctx, args),
            CommandType::Env(cmd) => cmd.execute(ctx, args),
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
            CommandType::Help(cmd) => cmd.execute(ctx, args),
            CommandType::Ls(cmd) => cmd.execute(ctx, args),
            CommandType::Pwd(cmd) => cmd.execute(ctx, args),
        }
    }
}

/// Routes a command name to a builtin, or to an external process when no
/// builtin has that name.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(ProcessExecutor::new())
    }
}

impl CommandExecutor {
    pub fn new(process_executor: ProcessExecutor) -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("alloc", CommandType::Alloc(AllocCommand::new()));
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("echo", CommandType::Echo(EchoCommand::new()));
        commands.insert("env", CommandType::Env(EnvCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert(
            "help",
            CommandType::Help(HelpCommand::new(BUILTINS.iter().copied().collect())),
        );
        commands.insert("ls", CommandType::Ls(LsCommand::new()));
        commands.insert("pwd", CommandType::Pwd(PwdCommand::new()));

        Self {
            commands,
            process_executor,
        }
    }

    pub fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        command: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        if let Some(cmd) = self.commands.get(command) {
            log::debug!("builtin {} with {} argument(s)", command, args.len());
            return cmd.execute(ctx, args);
        }

        // The child writes straight to the inherited stdout; anything we
        // buffered must land before it does.
        ctx.out.flush()?;
        self.process_executor.run(command, args)?;
        Ok(())
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn builtin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
