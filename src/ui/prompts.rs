//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message.

use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::IoError(e.to_string())
    }
}

/// Check if stdin is attached to a terminal.
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

/// Prompt for confirmation (yes/no) on the terminal.
///
/// Returns `Err(PromptError::NotInteractive)` if not in interactive mode.
pub fn confirm(message: &str, default: bool, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    confirm_with(&mut io::stdin().lock(), &mut io::stderr(), message, default)
}

/// Confirmation over arbitrary reader and writer.
///
/// An empty answer takes `default`. End of input cancels.
pub fn confirm_with<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
    default: bool,
) -> Result<bool, PromptError> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        write!(writer, "{} {} ", message, hint)?;
        writer.flush()?;

        let mut answer = String::new();
        if reader.read_line(&mut answer)? == 0 {
            return Err(PromptError::Cancelled);
        }

        match answer.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(writer, "Please answer y or n.")?,
        }
    }
}

/// Prompt for masked input (e.g., license keys).
///
/// The input is not echoed to the terminal. An empty answer cancels.
pub fn password(message: &str, interactive: bool) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    let value = rpassword::prompt_password(format!("{}: ", message))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(PromptError::Cancelled);
    }
    Ok(value)
}
