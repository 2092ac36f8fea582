use super::{state, Algorithm, Hasher, E};
use ::sha1::{Digest, Sha1 as Origin};

const TAG: &[u8; 4] = b"sha\x01";

/// SHA-1 accumulator based on `sha1` crate.
#[derive(Default, Clone)]
pub struct Sha1 {
    hasher: Origin,
}

impl Hasher for Sha1 {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self::default()
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Sha1
    }

    fn absorb(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn hash(&self) -> Vec<u8> {
        self.hasher.clone().finalize().to_vec()
    }

    fn export(&self) -> Result<Vec<u8>, E> {
        Ok(state::export(TAG, &self.hasher))
    }

    fn import(&mut self, state: &[u8]) -> Result<(), E> {
        self.hasher = state::import(Algorithm::Sha1, TAG, state)?;
        Ok(())
    }
}
