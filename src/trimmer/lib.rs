//! # claude-trimmer
//!
//! Text copied out of a terminal running a CLI chat client comes back hard-wrapped at
//! the terminal width, with every wrapped line carrying the UI's indentation. This
//! crate turns that back into clean paragraphs and puts the result on the clipboard.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot arguments, piped stdin, interactive paste loop  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Rejects blank input, cleans, copies                      │
//! │  - Returns a structured TrimResult                          │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                           │
//!                  ▼                           ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  normalize.rs                 │ │  clipboard.rs             │
//! │  - Line rejoining rules       │ │  - Clipboard trait        │
//! │  - Pure functions, no I/O     │ │  - pbcopy / xclip / xsel  │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the process.
//!
//! ## Module Overview
//!
//! - [`normalize`]: The line-rejoining heuristic (`clean_text`)
//! - [`api`]: The facade the CLI calls for each submission
//! - [`clipboard`]: Clipboard trait and the system implementation
//! - [`config`]: Optional user configuration
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the interactive loop and printing (binary only)

pub mod api;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod normalize;
