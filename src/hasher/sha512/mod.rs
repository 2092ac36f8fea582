use super::{state, Algorithm, Hasher, E};
use sha2::{Digest, Sha512 as Origin};

const TAG: &[u8; 4] = b"sha\x07";

/// SHA-512 accumulator based on `sha2` crate.
#[derive(Default, Clone)]
pub struct Sha512 {
    hasher: Origin,
}

impl Hasher for Sha512 {
    /// Creates a new instance of `Sha512` hasher.
    fn new() -> Self
    where
        Self: Sized,
    {
        Self::default()
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Sha512
    }

    /// Absorbs input data into the hasher.
    ///
    /// # Parameters
    ///
    /// - `data`: A slice of bytes to be hashed.
    fn absorb(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Returns the hash of all data absorbed so far.
    fn hash(&self) -> Vec<u8> {
        self.hasher.clone().finalize().to_vec()
    }

    /// Returns the binary state: the tag followed by the serialized state of `sha2::Sha512`.
    fn export(&self) -> Result<Vec<u8>, E> {
        Ok(state::export(TAG, &self.hasher))
    }

    fn import(&mut self, state: &[u8]) -> Result<(), E> {
        self.hasher = state::import(Algorithm::Sha512, TAG, state)?;
        Ok(())
    }
}
