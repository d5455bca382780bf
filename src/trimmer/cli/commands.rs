//! # CLI Layer
//!
//! The only place in the codebase that knows about terminal I/O, argument parsing and
//! exit codes. Everything here resolves *how* text arrives and *where* output goes;
//! what happens to the text is the API's job.
//!
//! ## Modes
//!
//! - **One-shot**: positional arguments are joined with spaces and cleaned once. The
//!   cleaned text goes to stdout, the clipboard note to stderr.
//! - **Piped**: no arguments and stdin is not a terminal. Stdin is read to the end
//!   and handled like one-shot input. Empty or blank stdin is plain end-of-input:
//!   nothing is printed and the exit status is 0.
//! - **Interactive**: no arguments on a terminal. A paste loop runs until Ctrl+C or
//!   Ctrl+D; everything it prints goes to stdout.
//!
//! Blank positional arguments are an error (exit 1, nothing on stdout).

use super::interactive::{run_session, ReedlineReader};
use super::print::write_messages;
use super::setup::Cli;
use clap::Parser;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;
use tracing::{debug, warn, Level};
use trimmer::api::TrimmerApi;
use trimmer::clipboard::{Clipboard, SystemClipboard};
use trimmer::config::TrimmerConfig;
use trimmer::error::{Result, TrimmerError};
use trimmer::normalize::is_blank;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let copy = config.copy_to_clipboard && !cli.no_copy;
    debug!(copy, newline_key = %config.newline_key(), "configuration resolved");

    let api = TrimmerApi::new(SystemClipboard).with_copy(copy);

    if !cli.text.is_empty() {
        return handle_oneshot(&api, &cli.text.join(" "));
    }

    if !io::stdin().is_terminal() {
        return handle_piped(&api);
    }

    handle_interactive(&api, &config)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// An explicitly named config file must exist and parse. The default one is
/// optional, and a broken default config only costs a warning.
fn load_config(explicit: Option<&Path>) -> Result<TrimmerConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(TrimmerError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        debug!(path = %path.display(), "loading config");
        return TrimmerConfig::load(path);
    }

    let Some(path) = TrimmerConfig::default_path() else {
        return Ok(TrimmerConfig::default());
    };

    debug!(path = %path.display(), "loading config");
    match TrimmerConfig::load(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Ok(TrimmerConfig::default())
        }
    }
}

fn handle_oneshot<C: Clipboard>(api: &TrimmerApi<C>, text: &str) -> Result<()> {
    let result = api.trim(text)?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", result.cleaned)?;
    stdout.flush()?;

    if !result.messages.is_empty() {
        let mut stderr = io::stderr();
        writeln!(stderr)?;
        write_messages(&mut stderr, &result.messages)?;
    }
    Ok(())
}

fn handle_piped<C: Clipboard>(api: &TrimmerApi<C>) -> Result<()> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    debug!(bytes = buffer.len(), "read piped input");

    if is_blank(&buffer) {
        debug!("piped input is blank, nothing to do");
        return Ok(());
    }
    handle_oneshot(api, &buffer)
}

fn handle_interactive<C: Clipboard>(api: &TrimmerApi<C>, config: &TrimmerConfig) -> Result<()> {
    let mut reader = ReedlineReader::new(config.newline_key());
    let mut stdout = io::stdout();
    run_session(&mut reader, api, &mut stdout, config.newline_key())?;
    Ok(())
}
