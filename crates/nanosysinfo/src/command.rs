//! Thin wrapper around `std::process::Command` for the external tools.

use nanosys_common::{Result, SourceError};
use std::process::{Command, Stdio};
use tracing::debug;

/// What a finished tool left behind.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub code: Option<i32>,
    pub text: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Run `program` to completion and capture its stdout. With `merge_stderr`
/// the stderr text is appended, since some tools split their report across
/// both streams. The exit status is returned, not judged.
pub fn capture(program: &str, args: &[&str], merge_stderr: bool) -> Result<ToolOutput> {
    debug!("Running {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::Unavailable(format!("{} is not installed", program))
            } else {
                SourceError::Command {
                    program: program.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if merge_stderr {
        text.push_str(&String::from_utf8_lossy(&output.stderr));
    }

    Ok(ToolOutput {
        code: output.status.code(),
        text,
    })
}

/// Like [`capture`], but a non-zero exit is an error.
pub fn capture_checked(program: &str, args: &[&str], merge_stderr: bool) -> Result<String> {
    let output = capture(program, args, merge_stderr)?;
    if !output.success() {
        return Err(SourceError::NonZeroExit {
            program: program.to_string(),
            code: output.code.unwrap_or(-1),
        });
    }
    Ok(output.text)
}
