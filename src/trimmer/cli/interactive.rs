//! The interactive paste loop.
//!
//! The loop only talks to a [`LineReader`] and a writer, so it runs the same against
//! the reedline-backed terminal reader and against a scripted reader in tests.

use super::print::{write_banner, write_messages, write_result, FAREWELL, SKIPPED_NOTE};
use reedline::{
    default_emacs_keybindings, EditCommand, Emacs, KeyCode, KeyModifiers, Prompt,
    PromptEditMode, PromptHistorySearch, Reedline, ReedlineEvent, Signal,
};
use std::borrow::Cow;
use std::io::{self, Write};
use tracing::debug;
use trimmer::api::{CmdMessage, TrimmerApi};
use trimmer::clipboard::Clipboard;
use trimmer::error::{Result, TrimmerError};

pub(super) enum ReadOutcome {
    Line(String),
    /// Ctrl+C or Ctrl+D: the user is done.
    Interrupted,
}

pub(super) trait LineReader {
    fn read(&mut self, label: &str) -> io::Result<ReadOutcome>;
}

/// Terminal reader: Enter submits, Ctrl+<newline key> inserts a newline and
/// bracketed paste keeps pasted newlines in the buffer.
pub(super) struct ReedlineReader {
    editor: Reedline,
}

impl ReedlineReader {
    pub(super) fn new(newline_key: char) -> Self {
        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::CONTROL,
            KeyCode::Char(newline_key),
            ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
        );

        let editor = Reedline::create()
            .with_edit_mode(Box::new(Emacs::new(keybindings)))
            .use_bracketed_paste(true);

        Self { editor }
    }
}

impl LineReader for ReedlineReader {
    fn read(&mut self, label: &str) -> io::Result<ReadOutcome> {
        let prompt = PastePrompt { label };
        match self.editor.read_line(&prompt)? {
            Signal::Success(buffer) => Ok(ReadOutcome::Line(buffer)),
            _ => Ok(ReadOutcome::Interrupted),
        }
    }
}

struct PastePrompt<'a> {
    label: &'a str,
}

impl Prompt for PastePrompt<'_> {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.label)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

/// Runs the paste loop until the reader is interrupted.
///
/// Returns the number of submissions processed; blank submissions are skipped
/// and do not advance the counter.
pub(super) fn run_session<R, C, W>(
    reader: &mut R,
    api: &TrimmerApi<C>,
    out: &mut W,
    newline_key: char,
) -> Result<usize>
where
    R: LineReader,
    C: Clipboard,
    W: Write,
{
    write_banner(out, newline_key)?;
    debug!("interactive session started");

    let mut count = 0;
    loop {
        let label = format!("[{}] Paste: ", count + 1);
        writeln!(out)?;
        out.flush()?;

        let text = match reader.read(&label)? {
            ReadOutcome::Line(text) => text,
            ReadOutcome::Interrupted => {
                writeln!(out, "\n\n{}", FAREWELL)?;
                break;
            }
        };

        match api.trim(&text) {
            Ok(result) => {
                count += 1;
                write_result(out, &result)?;
            }
            Err(TrimmerError::EmptyInput) => {
                write_messages(out, &[CmdMessage::info(SKIPPED_NOTE)])?;
            }
            Err(e) => return Err(e),
        }
    }

    out.flush()?;
    debug!(count, "interactive session ended");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use trimmer::api::COPIED_NOTE;
    use trimmer::clipboard::MemoryClipboard;

    /// Replays canned submissions, then reports an interrupt.
    struct ScriptedReader {
        inputs: VecDeque<String>,
        labels: Vec<String>,
    }

    impl ScriptedReader {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                labels: Vec::new(),
            }
        }
    }

    impl LineReader for ScriptedReader {
        fn read(&mut self, label: &str) -> io::Result<ReadOutcome> {
            self.labels.push(label.to_string());
            Ok(match self.inputs.pop_front() {
                Some(text) => ReadOutcome::Line(text),
                None => ReadOutcome::Interrupted,
            })
        }
    }

    fn run(reader: &mut ScriptedReader, api: &TrimmerApi<MemoryClipboard>) -> (usize, String) {
        let mut out = Vec::new();
        let count = run_session(reader, api, &mut out, 'j').unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_cleans_and_copies_each_paste() {
        let mut reader = ScriptedReader::new(&["  hello\nworld  ", "Done.\nNext sentence."]);
        let api = TrimmerApi::new(MemoryClipboard::new());

        let (count, output) = run(&mut reader, &api);

        assert_eq!(count, 2);
        assert!(output.contains("Paste to trim, Ctrl+D to exit"));
        assert!(output.contains(" OUTPUT "));
        assert!(output.contains("\nhello world\n"));
        assert!(output.contains("\nDone.\nNext sentence.\n"));
        assert_eq!(output.matches(COPIED_NOTE).count(), 2);
        assert_eq!(api.clipboard().copies(), vec!["hello world", "Done.\nNext sentence."]);
    }

    #[test]
    fn test_blank_paste_is_skipped_without_advancing_counter() {
        let mut reader = ScriptedReader::new(&["first", "  \n ", "second"]);
        let api = TrimmerApi::new(MemoryClipboard::new());

        let (count, output) = run(&mut reader, &api);

        assert_eq!(count, 2);
        assert!(output.contains(SKIPPED_NOTE));
        assert_eq!(
            reader.labels,
            vec!["[1] Paste: ", "[2] Paste: ", "[2] Paste: ", "[3] Paste: "]
        );
        assert_eq!(api.clipboard().copies(), vec!["first", "second"]);
    }

    #[test]
    fn test_failed_copy_omits_note() {
        let mut reader = ScriptedReader::new(&["foo (\nbar)"]);
        let api = TrimmerApi::new(MemoryClipboard::failing());

        let (count, output) = run(&mut reader, &api);

        assert_eq!(count, 1);
        assert!(output.contains("\nfoo (\nbar)\n"));
        assert!(!output.contains(COPIED_NOTE));
        assert!(!output.contains(&"-".repeat(68)));
        assert!(api.clipboard().copies().is_empty());
    }

    #[test]
    fn test_interrupt_says_goodbye() {
        let mut reader = ScriptedReader::new(&[]);
        let api = TrimmerApi::new(MemoryClipboard::new());

        let (count, output) = run(&mut reader, &api);

        assert_eq!(count, 0);
        assert!(output.ends_with("\n\nBye!\n"));
        assert_eq!(reader.labels, vec!["[1] Paste: "]);
    }
}
