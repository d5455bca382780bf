//! # API Facade
//!
//! The API layer is the single entry point the CLI uses to process a submission: it
//! cleans the text, hands the result to the clipboard and reports what happened.
//!
//! It does no terminal I/O. Outcomes come back as a [`TrimResult`] whose messages the
//! caller decides where to print (stdout in the interactive loop, stderr in one-shot
//! mode).
//!
//! ## Generic Over Clipboard
//!
//! `TrimmerApi<C: Clipboard>` is generic over the clipboard backend:
//! - Production: `TrimmerApi<SystemClipboard>`
//! - Testing: `TrimmerApi<MemoryClipboard>`

use crate::clipboard::Clipboard;
use crate::error::{Result, TrimmerError};
use crate::normalize::{clean_text, is_blank};
use tracing::debug;

pub const COPIED_NOTE: &str = "[Copied to clipboard]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimResult {
    pub cleaned: String,
    pub copied: bool,
    pub messages: Vec<CmdMessage>,
}

/// Cleans submissions and copies them to a clipboard.
pub struct TrimmerApi<C: Clipboard> {
    clipboard: C,
    copy_enabled: bool,
}

impl<C: Clipboard> TrimmerApi<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            copy_enabled: true,
        }
    }

    /// Enables or disables the clipboard step.
    pub fn with_copy(mut self, enabled: bool) -> Self {
        self.copy_enabled = enabled;
        self
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Cleans `text` and, when enabled, copies the result.
    ///
    /// Blank input is [`TrimmerError::EmptyInput`]. A failed copy is not an
    /// error: the result just reports `copied: false` and carries no note.
    pub fn trim(&self, text: &str) -> Result<TrimResult> {
        if is_blank(text) {
            return Err(TrimmerError::EmptyInput);
        }

        let cleaned = clean_text(text);
        let copied = self.copy_enabled && self.copy(&cleaned);

        let mut messages = Vec::new();
        if copied {
            messages.push(CmdMessage::success(COPIED_NOTE));
        }

        Ok(TrimResult {
            cleaned,
            copied,
            messages,
        })
    }

    fn copy(&self, text: &str) -> bool {
        match self.clipboard.copy(text) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "clipboard copy failed");
                false
            }
        }
    }
}
