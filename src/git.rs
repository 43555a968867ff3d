//! Git operations backed by the system `git` binary.
//!
//! Using the installed `git` means SSH keys, credential helpers and anything
//! else configured in `~/.gitconfig` work without extra setup. Every command
//! runs with `GIT_TERMINAL_PROMPT=0` so an inaccessible remote fails instead
//! of waiting for a password.
//!
//! Commands that operate on a mirror set `GIT_CEILING_DIRECTORIES` to the
//! mirror's parent, so git never discovers a repository above the mirror.

use std::path::Path;
use std::process::{Command, Output};

use crate::error::Error;

fn git() -> Command {
    let mut cmd = Command::new("git");
    cmd.env("GIT_TERMINAL_PROMPT", "0");
    cmd
}

/// A `git -C <repo_dir>` command confined to `repo_dir`.
fn git_in(repo_dir: &Path) -> Command {
    let mut cmd = git();
    if let Some(parent) = repo_dir.parent().filter(|p| !p.as_os_str().is_empty()) {
        // Relative ceiling entries are ignored by git.
        let parent = std::path::absolute(parent).unwrap_or_else(|_| parent.to_path_buf());
        cmd.env("GIT_CEILING_DIRECTORIES", parent);
    }
    cmd.arg("-C").arg(repo_dir);
    cmd
}

fn run(mut cmd: Command, command: &str, target: &str) -> Result<Output, Error> {
    log::debug!("running git {} for {}", command, target);
    let output = cmd.output().map_err(|e| Error::GitCommand {
        command: command.to_string(),
        target: target.to_string(),
        stderr: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: command.to_string(),
            target: target.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output)
}

/// Clone a single branch of a repository with a depth of one.
///
/// The parent of `target_dir` is created if needed. `target_dir` itself must
/// not exist yet.
pub fn clone_shallow(url: &str, branch: &str, target_dir: &Path) -> Result<(), Error> {
    if let Some(parent) = target_dir.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Execute git clone --depth=1 --single-branch --branch <branch> <url> <target_dir>
    let output = git()
        .args(["clone", "--depth=1", "--single-branch", "--branch", branch, url])
        .arg(target_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            r#ref: branch.to_string(),
            message: e.to_string(),
            hint: Some("Make sure git is installed and on PATH".to_string()),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        let hint = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
            || stderr.contains("terminal prompts disabled")
        {
            Some(
                "Make sure you have access to the repository (SSH key, credential helper or token)"
                    .to_string(),
            )
        } else if stderr.contains("Remote branch") && stderr.contains("not found") {
            Some("Pin the provider to an existing branch with 'branch:' or --branch".to_string())
        } else {
            None
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            r#ref: branch.to_string(),
            message: stderr,
            hint,
        });
    }

    Ok(())
}

/// Ask the remote which branch its `HEAD` points to.
///
/// Returns `Ok(None)` when the remote does not advertise a symbolic `HEAD`.
pub fn default_branch(url: &str) -> Result<Option<String>, Error> {
    let mut cmd = git();
    cmd.args(["ls-remote", "--symref", url, "HEAD"]);
    let output = run(cmd, "ls-remote --symref", url)?;
    Ok(parse_symref_head(&String::from_utf8_lossy(&output.stdout)))
}

/// Extract the branch from `git ls-remote --symref <url> HEAD` output.
///
/// The interesting line looks like `ref: refs/heads/main\tHEAD`.
pub fn parse_symref_head(ls_remote: &str) -> Option<String> {
    ls_remote.lines().find_map(|line| {
        let (reference, name) = line.strip_prefix("ref:")?.split_once('\t')?;
        if name.trim() != "HEAD" {
            return None;
        }
        reference
            .trim()
            .strip_prefix("refs/heads/")
            .filter(|branch| !branch.is_empty())
            .map(str::to_string)
    })
}

/// Name of the branch checked out in `repo_dir`.
pub fn current_branch(repo_dir: &Path) -> Result<String, Error> {
    let target = repo_dir.display().to_string();
    let mut cmd = git_in(repo_dir);
    cmd.args(["symbolic-ref", "--short", "HEAD"]);
    let output = run(cmd, "symbolic-ref --short HEAD", &target)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Fetch the tip of `branch` from `origin`, force-updating its remote-tracking ref.
///
/// A remote with nothing new is a success.
pub fn fetch_branch(repo_dir: &Path, branch: &str) -> Result<(), Error> {
    let target = repo_dir.display().to_string();
    let refspec = format!("+refs/heads/{0}:refs/remotes/origin/{0}", branch);
    let mut cmd = git_in(repo_dir);
    cmd.args(["fetch", "--depth=1", "--force", "origin", &refspec]);
    run(cmd, &format!("fetch origin {}", refspec), &target)?;
    Ok(())
}

/// Check out `branch` in `repo_dir` at `origin/<branch>`.
///
/// The local branch is created or moved with `checkout --force -B`, which
/// discards changes to tracked files like a hard reset and leaves `HEAD` on
/// `branch`.
pub fn checkout_remote(repo_dir: &Path, branch: &str) -> Result<(), Error> {
    let target = repo_dir.display().to_string();
    let rev = format!("refs/remotes/origin/{}", branch);
    let mut cmd = git_in(repo_dir);
    cmd.args(["checkout", "--quiet", "--force", "-B", branch, &rev]);
    run(cmd, &format!("checkout --force -B {} {}", branch, rev), &target)?;
    Ok(())
}
