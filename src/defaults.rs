//! Default values for provider-docs.
//!
//! This module provides centralized names and fallbacks used across the
//! library and the commands, so the mirror manager, the locator and the CLI
//! agree on them.

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILENAME: &str = "providers.yaml";

/// Directory that receives the mirrors when `target_dir` is not configured.
pub const DEFAULT_TARGET_DIR: &str = "terraform-providers";

/// Branch used when neither a pin nor the remote's default branch is known.
pub const DEFAULT_BRANCH: &str = "main";

/// Name of the generated index page, written at the root of the target directory.
pub const INDEX_FILENAME: &str = "index.md";

/// Name a directory must carry to count as a documentation root.
pub const DOCS_DIR_NAME: &str = "docs";

/// The only parent directory, besides the repository root, allowed to hold docs.
pub const WEBSITE_DIR_NAME: &str = "website";

/// Version control metadata directory, never pruned.
pub const GIT_DIR_NAME: &str = ".git";

/// Environment variable that can replace `--config`.
pub const CONFIG_ENV_VAR: &str = "PROVIDER_DOCS_CONFIG";

/// Expand an `owner/name` shorthand into a GitHub clone URL.
pub fn github_url(shorthand: &str) -> String {
    format!("https://github.com/{}.git", shorthand)
}
