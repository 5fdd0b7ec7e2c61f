//! Best-effort probing of git state on disk.
//!
//! Every function here returns `None` on any failure. Nothing is logged or
//! propagated: git metadata only refines a fingerprint, it is never required.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Name of the git metadata directory inside a package.
pub(crate) const GIT_DIR: &str = ".git";

/// Staged and unstaged changes against HEAD, with output that does not
/// depend on user color or external diff settings.
const DIFF_ARGS: [&str; 5] = ["--no-pager", "diff", "HEAD", "--no-color", "--no-ext-diff"];

pub(crate) fn try_read(path: &Path) -> Option<Vec<u8>> {
    std::fs::read(path).ok()
}

pub(crate) async fn try_read_async(path: &Path) -> Option<Vec<u8>> {
    tokio::fs::read(path).await.ok()
}

/// Resolve a symbolic `ref: <path>` HEAD to the file it points at.
///
/// Returns `None` for a detached HEAD (a bare commit id) or anything else
/// that is not a single `ref:` line.
pub(crate) fn ref_path(git_dir: &Path, head: &[u8]) -> Option<PathBuf> {
    let text = String::from_utf8_lossy(head);
    let reference = text.trim().strip_prefix("ref: ")?;
    if reference.is_empty() || reference.contains(['\n', '\r']) {
        return None;
    }
    Some(git_dir.join(reference.trim_start_matches('/')))
}

/// Run `git diff HEAD` in `dir`, capturing at most `max_bytes` of output.
pub(crate) fn diff(dir: &Path, git: &Path, max_bytes: usize) -> Option<Vec<u8>> {
    let mut child = Command::new(git)
        .args(DIFF_ARGS)
        .current_dir(dir)
        // Relative to current_dir; keeps git from walking up into a parent repository.
        .env("GIT_DIR", GIT_DIR)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let output = child
        .stdout
        .take()
        .and_then(|stdout| read_capped(stdout, max_bytes));

    let Some(output) = output else {
        let _ = child.kill();
        let _ = child.wait();
        return None;
    };

    let status = child.wait().ok()?;
    status.success().then_some(output)
}

/// Async twin of [`diff`].
pub(crate) async fn diff_async(dir: &Path, git: &Path, max_bytes: usize) -> Option<Vec<u8>> {
    let mut child = tokio::process::Command::new(git)
        .args(DIFF_ARGS)
        .current_dir(dir)
        .env("GIT_DIR", GIT_DIR)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .ok()?;

    let output = match child.stdout.take() {
        Some(stdout) => read_capped_async(stdout, max_bytes).await,
        None => None,
    };

    let Some(output) = output else {
        let _ = child.kill().await;
        return None;
    };

    let status = child.wait().await.ok()?;
    status.success().then_some(output)
}

fn read_capped(reader: impl Read, max_bytes: usize) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .take((max_bytes as u64).saturating_add(1))
        .read_to_end(&mut buf)
        .ok()?;
    (buf.len() <= max_bytes).then_some(buf)
}

async fn read_capped_async(
    reader: impl tokio::io::AsyncRead + Unpin,
    max_bytes: usize,
) -> Option<Vec<u8>> {
    use tokio::io::AsyncReadExt;

    let mut buf = Vec::new();
    reader
        .take((max_bytes as u64).saturating_add(1))
        .read_to_end(&mut buf)
        .await
        .ok()?;
    (buf.len() <= max_bytes).then_some(buf)
}
