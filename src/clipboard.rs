//! System clipboard integration
//!
//! Copies exported documents to the system clipboard by shelling out to the
//! platform's clipboard tool. Backends are behind a trait so the delivery
//! layer can be tested without a real clipboard.

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Clipboard commands tried in order, with their arguments
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("pbcopy", &[]),
];

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to run clipboard command {command}: {source}")]
    CommandIo {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("clipboard command {command} did not expose stdin")]
    StdinUnavailable { command: String },
    #[error("clipboard command {command} exited with non-zero status: {status}")]
    CommandFailed { command: String, status: String },
    #[error("no clipboard command available (tried wl-copy, xclip, pbcopy)")]
    NoBackend,
}

pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardBackend {
    fn copy_text(&self, text: &str) -> ClipboardResult<()>;

    /// Whether a copy attempt can be expected to succeed
    ///
    /// Defaults to true; in-memory backends never fail.
    fn is_available(&self) -> bool {
        true
    }
}

/// Clipboard backend that pipes text into the first available system tool
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn spawn_tool(command: &str, args: &[&str]) -> std::io::Result<std::process::Child> {
        Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
    }

    fn copy_with(command: &str, args: &[&str], text: &str) -> ClipboardResult<()> {
        let mut child =
            Self::spawn_tool(command, args).map_err(|err| ClipboardError::CommandIo {
                command: command.to_string(),
                source: err,
            })?;

        {
            let stdin = child
                .stdin
                .as_mut()
                .ok_or_else(|| ClipboardError::StdinUnavailable {
                    command: command.to_string(),
                })?;
            stdin
                .write_all(text.as_bytes())
                .map_err(|err| ClipboardError::CommandIo {
                    command: command.to_string(),
                    source: err,
                })?;
        }

        let status = child.wait().map_err(|err| ClipboardError::CommandIo {
            command: command.to_string(),
            source: err,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed {
                command: command.to_string(),
                status: status.to_string(),
            })
        }
    }
}

impl ClipboardBackend for SystemClipboard {
    fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        for (command, args) in CLIPBOARD_COMMANDS {
            match Self::copy_with(command, args, text) {
                Ok(()) => return Ok(()),
                // Tool not installed, try the next candidate
                Err(ClipboardError::CommandIo { ref source, .. })
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    continue;
                }
                Err(err) => return Err(err),
            }
        }
        Err(ClipboardError::NoBackend)
    }

    /// True when any candidate tool can be spawned
    fn is_available(&self) -> bool {
        for (command, args) in CLIPBOARD_COMMANDS {
            if let Ok(mut child) = Self::spawn_tool(command, args) {
                // Reap without writing to stdin so the clipboard is left
                // untouched.
                let _ = child.kill();
                let _ = child.wait();
                return true;
            }
        }
        false
    }
}
