pub mod crc32;
mod error;
pub mod md5;
pub mod registry;
mod set;
pub mod sha1;
pub mod sha256;
pub mod sha512;
mod state;

pub use error::E;
pub use registry::{new_hasher, supported};
pub use set::{Checksums, Hashers, Session, States};
use std::{fmt, str::FromStr};

/// Hash algorithms supported by the crate. The set is closed: names which cannot be resolved by
/// the registry are rejected with `E::UnsupportedAlgorithm`.
///
/// Ordering follows the lexical order of canonical names, which keeps maps keyed by `Algorithm`
/// sorted the same way as `supported()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Algorithm {
    #[cfg_attr(feature = "serialization", serde(rename = "CRC-32"))]
    Crc32,
    #[cfg_attr(feature = "serialization", serde(rename = "MD5"))]
    Md5,
    #[cfg_attr(feature = "serialization", serde(rename = "SHA-1"))]
    Sha1,
    #[cfg_attr(feature = "serialization", serde(rename = "SHA-256"))]
    Sha256,
    #[cfg_attr(feature = "serialization", serde(rename = "SHA-512"))]
    Sha512,
}

impl Algorithm {
    /// Canonical (upper-case) name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crc32 => "CRC-32",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Creates a fresh accumulator of this algorithm.
    pub fn hasher(&self) -> Box<dyn Hasher> {
        registry::construct_for(*self)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = E;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry::lookup(s)
    }
}

/// A trait that defines the behavior of a digest accumulator.
/// Implementers of this trait must also implement `Send`, because accumulators are moved into
/// the engine's worker thread.
///
/// An accumulator is used as follows:
/// - Create an instance (with method `new()`), optionally loading a saved state (with method `import()`).
/// - Add stream's content during reading (with method `absorb(..)`), possibly many times.
/// - Request the digest (with method `hash()`) when the stream is consumed, or
///   save the state (with method `export()`) to continue later.
///
/// Saving and loading the state are capabilities: an accumulator which cannot snapshot itself
/// keeps the default implementations, which fail.
pub trait Hasher: Send {
    /// Creates a new instance of the accumulator.
    fn new() -> Self
    where
        Self: Sized;

    /// Algorithm implemented by this accumulator.
    fn algorithm(&self) -> Algorithm;

    /// Absorbs data into the hasher. This method processes the input data and updates the hasher
    /// state. This method might be called multiple times during the reading of a stream.
    ///
    /// # Parameters
    ///
    /// - `data`: A reference to a slice of bytes to be absorbed by the hasher.
    fn absorb(&mut self, data: &[u8]);

    /// Returns the digest of all data absorbed so far. It doesn't finish the accumulator: more
    /// data can be absorbed afterwards. The value is a final checksum only once the whole stream
    /// has been absorbed.
    fn hash(&self) -> Vec<u8>;

    /// Serializes the internal state into self-contained bytes.
    ///
    /// # Returns
    ///
    /// - `Result<Vec<u8>, E>`: On success, returns the state. Fails with
    ///   `E::StateExportUnsupported` if the accumulator cannot be snapshotted.
    fn export(&self) -> Result<Vec<u8>, E> {
        Err(E::StateExportUnsupported(self.algorithm()))
    }

    /// Replaces the internal state with a state produced by `export()` of an accumulator of the
    /// same algorithm.
    ///
    /// # Parameters
    ///
    /// - `state`: bytes returned by `export()`.
    ///
    /// # Returns
    ///
    /// - `Result<(), E>`: Fails with `E::StateImportFailed` if the state is malformed.
    fn import(&mut self, _state: &[u8]) -> Result<(), E> {
        Err(E::StateImportFailed(
            self.algorithm(),
            String::from("state import isn't supported"),
        ))
    }
}
