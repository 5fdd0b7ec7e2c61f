//! Content-derived fingerprints for package directories.
//!
//! A fingerprint covers the package's location, its manifest, and, when the
//! package is a git checkout, HEAD, the ref it points at, and the
//! uncommitted diff. Use it as a cache key for build or install artifacts.

mod collect;
mod fingerprinter;
mod git;
pub mod hash;
mod pepper;

pub use collect::Collector;
pub use fingerprinter::Fingerprinter;
pub use pepper::{PepperCache, install_dir};
pub use pkghash_core::{Config, Digest, Inputs, PkgHashError, Result, Salt};

use std::path::Path;
use std::sync::LazyLock;

static DEFAULT: LazyLock<Fingerprinter> = LazyLock::new(Fingerprinter::new);

/// Fingerprint one package with the default configuration.
pub fn fingerprint(path: impl AsRef<Path>, salt: Option<&Salt>) -> Result<String> {
    DEFAULT.fingerprint(path, salt)
}

/// Fingerprint several packages, in order, with the default configuration.
pub fn fingerprint_many<I, P>(paths: I, salt: Option<&Salt>) -> Result<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    DEFAULT.fingerprint_many(paths, salt)
}

pub async fn fingerprint_async(path: impl AsRef<Path>, salt: Option<&Salt>) -> Result<String> {
    DEFAULT.fingerprint_async(path, salt).await
}

pub async fn fingerprint_many_async<I, P>(paths: I, salt: Option<&Salt>) -> Result<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    DEFAULT.fingerprint_many_async(paths, salt).await
}

/// The process-wide pepper used by the free functions.
pub fn pepper() -> Result<Digest> {
    DEFAULT.pepper()
}
