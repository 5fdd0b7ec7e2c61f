use std::fmt;

/// Length of a fingerprint digest in bytes (SHA-256).
pub const DIGEST_LEN: usize = 32;

/// A fixed-length fingerprint digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The ordered byte-strings that identify one or more packages.
///
/// Order is significant. Optional inputs that are absent are skipped
/// entirely rather than stored as empty entries, so an empty entry always
/// means "present, zero bytes".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs(Vec<Vec<u8>>);

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: impl Into<Vec<u8>>) {
        self.0.push(input.into());
    }

    /// Push an optional input, skipping it when absent.
    pub fn push_opt(&mut self, input: Option<Vec<u8>>) {
        if let Some(input) = input {
            self.0.push(input);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.0.iter().map(Vec::as_slice)
    }
}

impl Extend<Vec<u8>> for Inputs {
    fn extend<T: IntoIterator<Item = Vec<u8>>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Inputs {
    type Item = Vec<u8>;
    type IntoIter = std::vec::IntoIter<Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<B: Into<Vec<u8>>> FromIterator<B> for Inputs {
    fn from_iter<T: IntoIterator<Item = B>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
