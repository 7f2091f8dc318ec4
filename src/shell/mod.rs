use std::io::{BufRead, IsTerminal, Write};

pub mod prompt;

use crate::{
    core::{
        commands::{CommandContext, CommandExecutor},
        config::Config,
        env::{HostSystem, SystemAccess},
        state::ExitSignal,
    },
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::{parse_line, InputReader},
};

pub const FAREWELL: &str = "exiting gracefully...";

/// The read, dispatch, execute loop.
///
/// Every stage reports its own failure on the error stream and the loop
/// carries on. Only the exit signal or the end of input stops it.
pub struct Shell<S> {
    system: S,
    executor: CommandExecutor,
    exit: ExitSignal,
    config: Config,
    highlighter: SyntaxHighlighter,
}

impl Shell<HostSystem> {
    pub fn new(config: Config) -> Self {
        let highlighter = if std::io::stderr().is_terminal() {
            SyntaxHighlighter::new()
        } else {
            SyntaxHighlighter::plain()
        };
        Self::with_system(HostSystem::new(), config).with_highlighter(highlighter)
    }
}

impl<S: SystemAccess> Shell<S> {
    pub fn with_system(system: S, config: Config) -> Self {
        Shell {
            system,
            executor: CommandExecutor::default(),
            exit: ExitSignal::new(),
            config,
            highlighter: SyntaxHighlighter::plain(),
        }
    }

    pub fn with_highlighter(mut self, highlighter: SyntaxHighlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn exit_signal(&self) -> ExitSignal {
        self.exit.clone()
    }

    pub fn run<R: BufRead, W: Write, E: Write>(
        &self,
        input: R,
        mut out: W,
        mut err: E,
    ) -> Result<(), ShellError> {
        let mut reader = InputReader::new(input);

        loop {
            if self.exit.is_raised() {
                log::info!("exit requested");
                return self.farewell(&mut out);
            }

            if let Err(e) = prompt::render_prompt(&mut out, &self.system) {
                self.report(&mut err, &e);
                // Still read a line, otherwise a broken user lookup spins.
                let _ = write!(out, "{}", prompt::FALLBACK_PROMPT).and_then(|_| out.flush());
            }

            let line = match reader.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    log::info!("end of input");
                    return self.farewell(&mut out);
                }
                Err(e) => {
                    self.report(&mut err, &ShellError::from(e));
                    continue;
                }
            };

            if let Err(e) = self.dispatch(&line, &mut out) {
                self.report(&mut err, &e);
            }
        }
    }

    fn dispatch(&self, line: &str, out: &mut dyn Write) -> Result<(), ShellError> {
        let Some(parsed) = parse_line(line, self.config.split_mode) else {
            return Ok(());
        };

        let mut ctx = CommandContext {
            out,
            system: &self.system,
            exit: &self.exit,
        };
        self.executor.execute(&mut ctx, &parsed.name, &parsed.args)?;
        ctx.out.flush()?;
        Ok(())
    }

    fn report(&self, err: &mut dyn Write, error: &ShellError) {
        log::debug!("command failed: {:?}", error);
        let _ = writeln!(err, "{}", self.highlighter.highlight_error(&error.to_string()));
    }

    fn farewell(&self, out: &mut dyn Write) -> Result<(), ShellError> {
        if !self.config.quiet {
            writeln!(out, "{}", FAREWELL)?;
        }
        out.flush()?;
        Ok(())
    }
}
