use crate::git::{self, GIT_DIR};
use pkghash_core::{Config, Inputs, PkgHashError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Turns a package path into its ordered identity inputs.
///
/// For each package the inputs are, in order: the directory path, the
/// manifest bytes, and when `.git/HEAD` exists, HEAD, `packed-refs`, the
/// file HEAD points at, and the working-tree diff. Missing git pieces are
/// left out; a missing path or manifest is an error.
pub struct Collector<'a> {
    config: &'a Config,
}

impl<'a> Collector<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Collect inputs for the package at or containing `path`.
    pub fn collect(&self, path: &Path) -> Result<Inputs> {
        let metadata = fs::metadata(path).map_err(|e| PkgHashError::from_io(path, e))?;
        let dir = package_dir(path, metadata.is_dir());

        let mut inputs = Inputs::new();
        inputs.push(dir.as_os_str().as_encoded_bytes());

        let manifest = fs::read(dir.join(&self.config.manifest))
            .map_err(|e| PkgHashError::from_manifest_io(&dir, e))?;
        inputs.push(manifest);
        self.push_git(&dir, &mut inputs);

        debug!(dir = %dir.display(), inputs = inputs.len(), "collected package inputs");
        Ok(inputs)
    }

    /// Append HEAD, `packed-refs`, the ref file, and the diff for `dir`.
    ///
    /// Adds nothing unless `.git/HEAD` is readable, so this never fails,
    /// even when `dir` itself does not exist.
    pub(crate) fn push_git(&self, dir: &Path, inputs: &mut Inputs) {
        let git_dir = dir.join(GIT_DIR);
        let Some(head) = git::try_read(&git_dir.join("HEAD")) else {
            return;
        };
        let reference = git::ref_path(&git_dir, &head);
        inputs.push(head);
        inputs.push_opt(git::try_read(&git_dir.join("packed-refs")));
        inputs.push_opt(reference.and_then(|path| git::try_read(&path)));
        inputs.push_opt(
            self.config
                .git
                .as_deref()
                .and_then(|program| git::diff(dir, program, self.config.max_diff_bytes)),
        );
    }

    /// Async twin of [`Collector::collect`]; every step still runs in order.
    pub async fn collect_async(&self, path: &Path) -> Result<Inputs> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| PkgHashError::from_io(path, e))?;
        let dir = package_dir(path, metadata.is_dir());

        let mut inputs = Inputs::new();
        inputs.push(dir.as_os_str().as_encoded_bytes());

        let manifest = tokio::fs::read(dir.join(&self.config.manifest))
            .await
            .map_err(|e| PkgHashError::from_manifest_io(&dir, e))?;
        inputs.push(manifest);

        let git_dir = dir.join(GIT_DIR);
        if let Some(head) = git::try_read_async(&git_dir.join("HEAD")).await {
            let reference = git::ref_path(&git_dir, &head);
            inputs.push(head);
            inputs.push_opt(git::try_read_async(&git_dir.join("packed-refs")).await);
            if let Some(path) = reference {
                inputs.push_opt(git::try_read_async(&path).await);
            }
            if let Some(program) = self.config.git.as_deref() {
                inputs.push_opt(git::diff_async(&dir, program, self.config.max_diff_bytes).await);
            }
        }

        debug!(dir = %dir.display(), inputs = inputs.len(), "collected package inputs");
        Ok(inputs)
    }
}

/// A directory is its own package; a file belongs to its parent.
fn package_dir(path: &Path, is_dir: bool) -> PathBuf {
    if is_dir {
        return path.to_path_buf();
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
