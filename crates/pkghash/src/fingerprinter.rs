use crate::collect::Collector;
use crate::hash;
use crate::pepper::{self, PepperCache, install_dir};
use pkghash_core::{Config, Digest, Inputs, Result, Salt};
use std::path::Path;
use std::sync::Arc;

/// Computes package fingerprints under one configuration.
///
/// Each fingerprinter memoizes its own pepper, the fingerprint of this
/// crate's installation directory, and mixes it into every result.
#[derive(Debug, Default)]
pub struct Fingerprinter {
    config: Config,
    pepper: Arc<PepperCache>,
}

impl Fingerprinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            pepper: Arc::new(PepperCache::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Ordered inputs for a single package, without pepper or salt.
    pub fn collect(&self, path: impl AsRef<Path>) -> Result<Inputs> {
        Collector::new(&self.config).collect(path.as_ref())
    }

    pub async fn collect_async(&self, path: impl AsRef<Path>) -> Result<Inputs> {
        Collector::new(&self.config)
            .collect_async(path.as_ref())
            .await
    }

    /// The memoized self-fingerprint, computed on first use.
    pub fn pepper(&self) -> Result<Digest> {
        self.pepper.get_or_try_init(|| Ok(pepper::self_fingerprint(&self.config)))
    }

    /// Async twin of [`Fingerprinter::pepper`]. First-time initialization
    /// runs on the blocking pool so it shares the single-init guard.
    pub async fn pepper_async(&self) -> Result<Digest> {
        if let Some(pepper) = self.pepper.get() {
            return Ok(pepper);
        }
        let cache = Arc::clone(&self.pepper);
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || {
            cache.get_or_try_init(|| Ok(pepper::self_fingerprint(&config)))
        })
        .await?
    }

    /// Fingerprint one package.
    ///
    /// Asking for the installation directory itself without a salt returns
    /// the pepper.
    pub fn fingerprint(&self, path: impl AsRef<Path>, salt: Option<&Salt>) -> Result<String> {
        let path = path.as_ref();
        let pepper = self.pepper()?;
        if salt.is_none() && path == install_dir() {
            return Ok(pepper.to_hex());
        }
        let inputs = self.collect(path)?;
        Ok(hash::reduce_salted(Some(&pepper), salt, &inputs)?.to_hex())
    }

    /// Fingerprint several packages as one unit. Order matters.
    pub fn fingerprint_many<I, P>(&self, paths: I, salt: Option<&Salt>) -> Result<String>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let pepper = self.pepper()?;
        let mut inputs = Inputs::new();
        for path in paths {
            inputs.extend(self.collect(path)?);
        }
        Ok(hash::reduce_salted(Some(&pepper), salt, &inputs)?.to_hex())
    }

    pub async fn fingerprint_async(
        &self,
        path: impl AsRef<Path>,
        salt: Option<&Salt>,
    ) -> Result<String> {
        let path = path.as_ref();
        let pepper = self.pepper_async().await?;
        if salt.is_none() && path == install_dir() {
            return Ok(pepper.to_hex());
        }
        let inputs = self.collect_async(path).await?;
        Ok(hash::reduce_salted(Some(&pepper), salt, &inputs)?.to_hex())
    }

    pub async fn fingerprint_many_async<I, P>(&self, paths: I, salt: Option<&Salt>) -> Result<String>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let pepper = self.pepper_async().await?;
        let mut inputs = Inputs::new();
        for path in paths {
            inputs.extend(self.collect_async(path).await?);
        }
        Ok(hash::reduce_salted(Some(&pepper), salt, &inputs)?.to_hex())
    }
}
