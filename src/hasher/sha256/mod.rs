use super::{state, Algorithm, Hasher, E};
use sha2::{Digest, Sha256 as Origin};

const TAG: &[u8; 4] = b"sha\x03";

/// SHA-256 accumulator based on `sha2` crate.
#[derive(Default, Clone)]
pub struct Sha256 {
    hasher: Origin,
}

impl Hasher for Sha256 {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self::default()
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Sha256
    }

    fn absorb(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Hash of data absorbed so far. The accumulator keeps absorbing after the call.
    fn hash(&self) -> Vec<u8> {
        self.hasher.clone().finalize().to_vec()
    }

    fn export(&self) -> Result<Vec<u8>, E> {
        Ok(state::export(TAG, &self.hasher))
    }

    fn import(&mut self, state: &[u8]) -> Result<(), E> {
        self.hasher = state::import(Algorithm::Sha256, TAG, state)?;
        Ok(())
    }
}
