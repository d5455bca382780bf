use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "claude-trimmer", bin_name = "claude-trimmer", version = get_version())]
#[command(
    about = "Rejoin terminal-wrapped text and copy it to the clipboard",
    long_about = "Rejoin terminal-wrapped text and copy it to the clipboard.\n\n\
                  With TEXT, cleans it once and exits. With piped input, cleans stdin. \
                  Otherwise starts an interactive paste loop (Ctrl+D to exit)."
)]
pub struct Cli {
    /// Text to clean (words are joined with spaces); omit to paste interactively
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,

    /// Do not copy the result to the clipboard
    #[arg(long)]
    pub no_copy: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
