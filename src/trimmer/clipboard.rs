use crate::error::{Result, TrimmerError};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Destination for cleaned text.
///
/// Copying is best-effort: callers treat any error as "not copied".
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// The OS clipboard, reached through the platform's command-line utility.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip, or xsel when xclip is not installed
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        copy_linux(text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        let _ = text;
        Err(TrimmerError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn copy_linux(text: &str) -> Result<()> {
    match pipe_to("xclip", &["-selection", "clipboard"], text) {
        Err(TrimmerError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("xclip not found, trying xsel");
            pipe_to("xsel", &["--clipboard", "--input"], text)
        }
        other => other,
    }
}

/// Spawns `program`, writes `text` to its stdin and waits for it to exit.
///
/// Stdin is closed before waiting, and the child is waited for even when the
/// write fails. Stdout and stderr are discarded: xclip keeps running in the
/// background to serve the selection and would otherwise hold our output
/// streams open.
#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    debug!(program, "copying to clipboard");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // xclip without a display exits before reading; report that after reaping it.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait()?;
    if let Err(e) = written {
        return Err(TrimmerError::Clipboard(format!(
            "Failed to write to {}: {}",
            program, e
        )));
    }
    if status.success() {
        Ok(())
    } else {
        Err(TrimmerError::Clipboard(format!(
            "{} exited with {}",
            program, status
        )))
    }
}

/// In-memory clipboard for tests: records every copy, or fails on demand.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    copies: std::cell::RefCell<Vec<String>>,
    fail: bool,
}

#[cfg(any(test, feature = "test_utils"))]
impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every copy fails, as if the utility were missing.
    pub fn failing() -> Self {
        Self {
            copies: Default::default(),
            fail: true,
        }
    }

    pub fn copies(&self) -> Vec<String> {
        self.copies.borrow().clone()
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(TrimmerError::Clipboard("clipboard unavailable".to_string()));
        }
        self.copies.borrow_mut().push(text.to_string());
        Ok(())
    }
}
