//! # Output Configuration
//!
//! Controls how progress lines look: with colors enabled they start with an
//! emoji, otherwise with a bracketed plain-text tag.
//!
//! The `--color` flag decides first (`always`, `never`, `auto`). In `auto`
//! mode the environment is consulted:
//! - `NO_COLOR` (any value) disables colors
//! - `CLICOLOR=0` disables colors
//! - `CLICOLOR_FORCE=1` forces colors even in non-TTY
//! - `TERM=dumb` disables colors
//!
//! ```rust,ignore
//! let out = OutputConfig::from_env_and_flag("auto");
//! println!("{} Cloning aws...", out.marker(Status::Progress));
//! ```

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

/// Kind of progress line being printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Progress,
    Success,
    Failure,
    Warning,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // https://no-color.org/: presence alone disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Leading marker for a line of the given status.
    pub fn marker(&self, status: Status) -> &'static str {
        let (emoji_str, plain) = match status {
            Status::Progress => ("🔄", "[..]"),
            Status::Success => ("✅", "[OK]"),
            Status::Failure => ("❌", "[ERROR]"),
            Status::Warning => ("⚠️", "[WARN]"),
        };
        emoji(self, emoji_str, plain)
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns `emoji_str` when colors are enabled and `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
