use crate::collect::Collector;
use crate::hash;
use pkghash_core::{Config, Digest, Inputs, Result};
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::debug;

/// This crate's own installation directory.
pub fn install_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// This crate's manifest, embedded at build time so the pepper does not
/// depend on the build tree still existing.
const OWN_MANIFEST: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));

/// Holds the self-fingerprint once it has been computed.
///
/// Readers take the lock-free fast path once the value is set. The first
/// writers serialize on `init`, so the pepper is computed exactly once even
/// when many threads race for it, and a failed attempt leaves the cache
/// empty for the next caller.
#[derive(Debug, Default)]
pub struct PepperCache {
    value: OnceLock<Digest>,
    init: Mutex<()>,
}

impl PepperCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Digest> {
        self.value.get().copied()
    }

    pub fn get_or_try_init(&self, init: impl FnOnce() -> Result<Digest>) -> Result<Digest> {
        if let Some(pepper) = self.get() {
            return Ok(pepper);
        }
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pepper) = self.get() {
            return Ok(pepper);
        }
        let pepper = init()?;
        Ok(*self.value.get_or_init(|| pepper))
    }
}

/// Fingerprint the installation directory: no pepper, no salt.
pub(crate) fn self_fingerprint(config: &Config) -> Digest {
    install_fingerprint(install_dir(), OWN_MANIFEST, config)
}

/// Same inputs as [`Collector::collect`] on `dir`, but with the manifest
/// supplied by the caller. Git state is read from disk when present.
fn install_fingerprint(dir: &Path, manifest: &[u8], config: &Config) -> Digest {
    let mut inputs = Inputs::new();
    inputs.push(dir.as_os_str().as_encoded_bytes());
    inputs.push(manifest);
    Collector::new(config).push_git(dir, &mut inputs);

    let pepper = hash::reduce(inputs.iter());
    debug!(dir = %dir.display(), pepper = %pepper, "computed pepper");
    pepper
}
