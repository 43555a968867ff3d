//! End-to-end tests for the `provider-docs clean` command.

mod common;
use common::prelude::*;

#[test]
fn test_clean_removes_target_dir() {
    let fixture = TestFixture::new().with_config(configs::TWO_PROVIDERS);
    fixture
        .child("mirrors/aws/docs/index.md")
        .write_str("# Docs")
        .unwrap();
    fixture.child("mirrors/index.md").write_str("# Index").unwrap();

    fixture
        .command()
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removing all cloned providers..."))
        .stdout(predicate::str::contains("Cleanup complete"));

    fixture.child("mirrors").assert(predicate::path::missing());
    fixture
        .child("providers.yaml")
        .assert(predicate::path::is_file());
}

#[test]
fn test_clean_missing_target_dir_succeeds() {
    let fixture = TestFixture::new().with_config(configs::TWO_PROVIDERS);
    fixture
        .command()
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers directory found"));
}

#[test]
fn test_clean_then_update_reports_not_cloned() {
    skip_without_git!();
    let upstream = UpstreamRepo::with_docs();
    let fixture = TestFixture::new().with_providers(&[("aws", &upstream)]);

    fixture
        .command()
        .args(["clone-one", "-p", "aws"])
        .assert()
        .success();
    fixture.command().arg("clean").assert().success();

    fixture
        .command()
        .args(["update-one", "-p", "aws"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has not been cloned yet"));
}
