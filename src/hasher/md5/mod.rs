use super::{state, Algorithm, Hasher, E};
use ::md5::{Digest, Md5 as Origin};

const TAG: &[u8; 4] = b"md5\x01";

/// MD5 accumulator based on `md-5` crate.
#[derive(Default, Clone)]
pub struct Md5 {
    hasher: Origin,
}

impl Hasher for Md5 {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self::default()
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Md5
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
        self.hasher = state::import(Algorithm::Md5, TAG, state)?;
        Ok(())
    }
}
