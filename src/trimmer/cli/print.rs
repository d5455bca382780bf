use colored::Colorize;
use std::io::{self, Write};
use trimmer::api::{CmdMessage, MessageLevel, TrimResult};

const BANNER_WIDTH: usize = 50;
const OUTPUT_RULE_WIDTH: usize = 30;
/// Width of the rule closing an output block: both halves of the OUTPUT rule plus its label.
const CLOSING_RULE_WIDTH: usize = 68;

pub(super) const SKIPPED_NOTE: &str = "(empty input, skipped)";
pub(super) const FAREWELL: &str = "Bye!";

pub(super) fn write_messages(out: &mut impl Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
        }
    }
    Ok(())
}

pub(super) fn write_banner(out: &mut impl Write, newline_key: char) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{}",
        "claude-trimmer - Paste to trim, Ctrl+D to exit".bold()
    )?;
    writeln!(
        out,
        "Enter to submit, Ctrl+{} for newline",
        newline_key.to_ascii_uppercase()
    )?;
    writeln!(out, "{}", rule)
}

/// Writes one interactive result: the OUTPUT rule, the text and, if copied, the note.
pub(super) fn write_result(out: &mut impl Write, result: &TrimResult) -> io::Result<()> {
    let half = "-".repeat(OUTPUT_RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{} OUTPUT {}", half, half)?;
    writeln!(out, "{}", result.cleaned)?;

    if result.copied {
        writeln!(out, "{}", "-".repeat(CLOSING_RULE_WIDTH))?;
    }
    write_messages(out, &result.messages)
}
