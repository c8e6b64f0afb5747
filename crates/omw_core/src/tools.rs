//! External tool execution.
//!
//! Workflow pages run command-line tools (TOPP tools, or anything on PATH)
//! through this wrapper. Output is either captured whole or streamed line by
//! line to a callback so the shell can fill its log view while the tool is
//! still running.

use std::io::{self, BufRead, BufReader};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors from launching or running an external tool.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The program could not be started at all.
    #[error("Failed to launch {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The program ran and exited with a failure status.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    /// Reading the program's output failed mid-run.
    #[error("I/O error reading {tool} output: {source}")]
    Io {
        tool: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Captured output of a completed tool run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A tool invocation: program name plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Parse a whitespace-separated command line.
    ///
    /// No quoting rules; the free-form subprocess page documents that.
    /// Returns `None` for an empty line.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program).args(parts.map(str::to_string)))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The command as it would appear on a shell prompt.
    pub fn display(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }

    /// Run the tool and capture its output.
    ///
    /// A non-zero exit status is an error carrying the tool's stderr.
    pub fn run(&self) -> ToolResult<ToolOutput> {
        tracing::debug!("Running: {}", self.display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| ToolError::Spawn {
                tool: self.program.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(ToolError::CommandFailed {
                tool: self.program.clone(),
                exit_code: output.status.code().unwrap_or(-1),
                message: stderr,
            });
        }

        Ok(ToolOutput { stdout, stderr })
    }

    /// Run the tool, feeding each stdout line to `on_line` as it arrives.
    ///
    /// Stderr is collected and fed to the callback after the run on success,
    /// or attached to the error on failure.
    pub fn run_streaming<F>(&self, mut on_line: F) -> ToolResult<()>
    where
        F: FnMut(&str),
    {
        tracing::debug!("Running (streaming): {}", self.display());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ToolError::Spawn {
                tool: self.program.clone(),
                source: e,
            })?;

        if let Some(stdout) = child.stdout.take() {
            let reader = BufReader::new(stdout);
            for line in reader.lines() {
                let line = line.map_err(|e| ToolError::Io {
                    tool: self.program.clone(),
                    source: e,
                })?;
                on_line(&line);
            }
        }

        let output = child.wait_with_output().map_err(|e| ToolError::Io {
            tool: self.program.clone(),
            source: e,
        })?;
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(ToolError::CommandFailed {
                tool: self.program.clone(),
                exit_code: output.status.code().unwrap_or(-1),
                message: stderr,
            });
        }

        for line in stderr.lines() {
            on_line(line);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_splits_on_whitespace() {
        let cmd = ToolCommand::parse_line("  echo  hello world ").unwrap();
        assert_eq!(cmd.program(), "echo");
        assert_eq!(cmd.display(), "echo hello world");
    }

    #[test]
    fn parse_empty_line_is_none() {
        assert!(ToolCommand::parse_line("   ").is_none());
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let result = ToolCommand::new("definitely-not-a-real-tool-omw").run();
        assert!(matches!(result, Err(ToolError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout() {
        let output = ToolCommand::new("sh")
            .args(["-c", "echo hello"])
            .run()
            .unwrap();
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn failure_carries_exit_code_and_stderr() {
        let result = ToolCommand::new("sh")
            .args(["-c", "echo oops >&2; exit 3"])
            .run();
        match result {
            Err(ToolError::CommandFailed {
                exit_code, message, ..
            }) => {
                assert_eq!(exit_code, 3);
                assert!(message.contains("oops"));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn streaming_delivers_lines_in_order() {
        let mut lines = Vec::new();
        ToolCommand::new("sh")
            .args(["-c", "printf 'a\\nb\\n'"])
            .run_streaming(|line| lines.push(line.to_string()))
            .unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }
}
