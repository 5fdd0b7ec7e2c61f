//! pkghash core domain types, configuration, and errors.

mod config;
mod error;
mod salt;
mod types;

pub use config::{Config, DEFAULT_MANIFEST, DEFAULT_MAX_DIFF_BYTES};
pub use error::{PkgHashError, Result};
pub use salt::Salt;
pub use types::{DIGEST_LEN, Digest, Inputs};
