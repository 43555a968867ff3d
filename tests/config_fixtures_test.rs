//! Configuration fixture tests using datatest-stable for test data discovery
//!
//! Every YAML file under `tests/testdata/configs` becomes one test. Files in
//! `valid/` must load and describe a usable configuration; files in
//! `invalid/` must be rejected with a configuration parse error.

use provider_docs::config::{from_file, Config};
use provider_docs::error::Error;
use std::path::Path;

fn is_invalid_fixture(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == "invalid")
}

fn check_valid(path: &Path, config: &Config) {
    assert!(
        !config.target_dir.as_os_str().is_empty(),
        "{} resolved to an empty target directory",
        path.display()
    );
    for (name, provider) in &config.providers {
        assert!(!provider.repo.is_empty(), "{}: '{}' has no repo", path.display(), name);
        assert!(
            !provider.description.is_empty(),
            "{}: '{}' has no description",
            path.display(),
            name
        );
        assert_eq!(config.mirror_dir(name), config.target_dir.join(name));
    }
}

/// Load one fixture and check it against the directory it lives in.
fn test_config_fixture(path: &Path) -> datatest_stable::Result<()> {
    let result = from_file(path);

    if is_invalid_fixture(path) {
        match result {
            Err(Error::ConfigParse { message, .. }) => {
                println!("rejected {}: {}", path.display(), message);
                Ok(())
            }
            Err(other) => Err(format!(
                "{} failed with an unexpected error: {}",
                path.display(),
                other
            )
            .into()),
            Ok(_) => Err(format!("{} should have been rejected", path.display()).into()),
        }
    } else {
        let config = result.map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
        check_valid(path, &config);
        println!(
            "loaded {} ({} providers)",
            path.display(),
            config.providers.len()
        );
        Ok(())
    }
}

datatest_stable::harness!(test_config_fixture, "tests/testdata/configs", r".*\.yaml$");
