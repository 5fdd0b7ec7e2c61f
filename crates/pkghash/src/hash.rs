use pkghash_core::{DIGEST_LEN, Digest, Inputs, Result, Salt};
use sha2::{Digest as _, Sha256};
use tracing::trace;

/// Incremental SHA-256 over an ordered sequence of byte-strings.
///
/// Every element is framed by its length as a little-endian `u64`, so element
/// boundaries are part of the digest: an empty element still counts, and
/// `["ab", "c"]` never collides with `["a", "bc"]`.
#[derive(Default)]
pub struct Reducer {
    hasher: Sha256,
    elements: usize,
}

impl Reducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: &[u8]) {
        self.hasher.update((element.len() as u64).to_le_bytes());
        self.hasher.update(element);
        self.elements += 1;
    }

    pub fn finish(self) -> Digest {
        trace!(elements = self.elements, "reduced input sequence");
        let bytes: [u8; DIGEST_LEN] = self.hasher.finalize().into();
        Digest::new(bytes)
    }
}

/// Reduce an ordered sequence of byte-strings to a single digest.
pub fn reduce<I, B>(elements: I) -> Digest
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut reducer = Reducer::new();
    for element in elements {
        reducer.push(element.as_ref());
    }
    reducer.finish()
}

/// Reduce `(pepper, salt, inputs)` in that order, skipping absent parts.
pub fn reduce_salted(
    pepper: Option<&Digest>,
    salt: Option<&Salt>,
    inputs: &Inputs,
) -> Result<Digest> {
    let mut reducer = Reducer::new();
    if let Some(pepper) = pepper {
        reducer.push(pepper.as_bytes());
    }
    if let Some(salt) = salt {
        reducer.push(&salt.to_bytes()?);
    }
    for input in inputs.iter() {
        reducer.push(input);
    }
    Ok(reducer.finish())
}
