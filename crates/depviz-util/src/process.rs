use std::process::{Command, Output};

use crate::errors::DepvizError;

/// Builder for constructing and executing external processes.
///
/// Used to drive the headless browser for PDF export; the fluent API keeps
/// the long argument lists readable at the call site.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Execute the command and return its output.
    pub fn exec(&self) -> Result<Output, DepvizError> {
        tracing::debug!(program = %self.program, args = ?self.args, "spawning process");
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.output().map_err(DepvizError::from)
    }
}
