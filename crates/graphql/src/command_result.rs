use std::fmt;
use std::process::ExitCode;

/// What a subcommand produced. Nothing is printed until [`report`] runs, so
/// commands stay free of direct stdout/stderr writes.
///
/// [`report`]: CommandResult::report
#[derive(Debug)]
pub(crate) struct CommandResult {
    succeeded: bool,
    stdout: Option<String>,
    stderr: Option<String>,
}

impl CommandResult {
    pub fn success(output: fmt::Arguments<'_>) -> Self {
        Self {
            succeeded: true,
            stdout: Some(output.to_string()),
            stderr: None,
        }
    }

    pub fn failure(message: fmt::Arguments<'_>) -> Self {
        Self {
            succeeded: false,
            stdout: None,
            stderr: Some(message.to_string()),
        }
    }

    /// Attaches stdout output to a result, typically a failure that still
    /// has a best-effort rendering to show.
    pub fn with_stdout(self, stdout: String) -> Self {
        Self {
            stdout: Some(stdout),
            ..self
        }
    }

    /// Prints stdout then stderr and converts to the process exit code.
    pub fn report(self) -> ExitCode {
        if let Some(stdout) = &self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = &self.stderr {
            eprintln!("{stderr}");
        }
        if self.succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
