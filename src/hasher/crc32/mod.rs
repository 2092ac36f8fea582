use super::{Algorithm, Hasher, E};
use crc32fast::Hasher as Origin;

const MAGIC: &[u8; 4] = b"crc\x01";
/// Reversed IEEE polynomial. Stored in the exported state so a CRC state of another
/// polynomial is never accepted.
const POLYNOMIAL: u32 = 0xedb88320;
const MARSHALED_SIZE: usize = 12;

/// CRC-32 (IEEE) accumulator based on `crc32fast` crate.
#[derive(Default, Clone)]
pub struct Crc32 {
    hasher: Origin,
}

impl Hasher for Crc32 {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self::default()
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Crc32
    }

    fn absorb(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn hash(&self) -> Vec<u8> {
        self.hasher.clone().finalize().to_be_bytes().to_vec()
    }

    fn export(&self) -> Result<Vec<u8>, E> {
        let mut state = Vec::with_capacity(MARSHALED_SIZE);
        state.extend_from_slice(MAGIC);
        state.extend_from_slice(&POLYNOMIAL.to_be_bytes());
        state.extend_from_slice(&self.hasher.clone().finalize().to_be_bytes());
        Ok(state)
    }

    fn import(&mut self, state: &[u8]) -> Result<(), E> {
        let failed = |reason: &str| E::StateImportFailed(Algorithm::Crc32, reason.to_owned());
        if state.len() != MARSHALED_SIZE {
            return Err(failed("invalid state size"));
        }
        if &state[..4] != MAGIC {
            return Err(failed("invalid state identifier"));
        }
        if state[4..8] != POLYNOMIAL.to_be_bytes() {
            return Err(failed("different polynomial"));
        }
        let crc = u32::from_be_bytes([state[8], state[9], state[10], state[11]]);
        self.hasher = Origin::new_with_initial(crc);
        Ok(())
    }
}
