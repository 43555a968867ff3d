//! # Error Suggestions
//!
//! Helpers that build CLI errors telling the user what went wrong and what
//! to run next.
//!
//! ```rust,ignore
//! return Err(suggestions::provider_not_found("aw", config.provider_names()));
//! ```

use std::path::Path;

use crate::defaults::CONFIG_ENV_VAR;

/// Error for a configuration file that does not exist.
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Create a providers.yaml file listing your providers\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Set the {env} environment variable",
        path = path.display(),
        env = CONFIG_ENV_VAR
    )
}

/// Error for a provider name missing from the configuration, with a
/// did-you-mean suggestion when a configured name is close.
pub fn provider_not_found<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> anyhow::Error {
    let available: Vec<&str> = available.into_iter().collect();
    let did_you_mean = find_similar(name, &available)
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();
    let listing = if available.is_empty() {
        "(none)".to_string()
    } else {
        available.join(", ")
    };

    anyhow::anyhow!(
        "Provider '{name}' not found in configuration{did_you_mean}\n\n\
         Configured providers: {listing}\n\
         hint: Run 'provider-docs list' to see all providers"
    )
}

/// Hint appended when an update targets a provider that was never cloned.
pub fn not_cloned_hint(name: &str) -> String {
    format!("hint: Run 'provider-docs clone-one -p {name}' first")
}

/// Hint appended when a mirror directory has no repository of its own.
pub fn not_a_git_mirror_hint(name: &str, path: &Path) -> String {
    format!(
        "hint: Remove {} and run 'provider-docs clone-one -p {name}'",
        path.display()
    )
}

/// Hint appended when a clone targets an existing mirror.
pub fn already_cloned_hint(name: &str) -> String {
    format!(
        "hint: Run 'provider-docs update-one -p {name}' to refresh it\n\
         hint: Run 'provider-docs clean' to start over"
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns the closest candidate within an edit distance of 2.
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|&candidate| (candidate, edit_distance(input, candidate)))
        .filter(|&(_, distance)| distance <= 2 && distance < input.chars().count())
        .min_by_key(|&(_, distance)| distance)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein distance, computed one row at a time.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let substitution = previous[j] + usize::from(a_char != *b_char);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}
