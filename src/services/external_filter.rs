use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::FilterError;
use crate::models::CompressorConfig;

/// An external program that transforms a byte buffer through stdin/stdout.
///
/// Used to pack the tile data with a compressor such as `ucl`.
#[derive(Debug, Clone)]
pub struct ExternalFilter {
    program: String,
    args: Vec<String>,
}

impl ExternalFilter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &CompressorConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Feed `input` to the program and collect its stdout.
    ///
    /// Stdin is written from a separate thread so a program that starts
    /// writing before it has read everything cannot deadlock us.
    pub fn run(&self, input: &[u8]) -> Result<Vec<u8>, FilterError> {
        tracing::debug!(program = %self.program, args = ?self.args, bytes = input.len(), "Running filter");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FilterError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdin = child.stdin.take();
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(input),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = output.map_err(|source| self.pipe_error(source))?;

        if !output.status.success() {
            return Err(FilterError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written.map_err(|source| self.pipe_error(source))?;

        tracing::debug!(
            program = %self.program,
            input = input.len(),
            output = output.stdout.len(),
            "Filter finished"
        );
        Ok(output.stdout)
    }

    fn pipe_error(&self, source: std::io::Error) -> FilterError {
        FilterError::Pipe {
            program: self.program.clone(),
            source,
        }
    }
}
