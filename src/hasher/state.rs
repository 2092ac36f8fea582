//! Binary states of the RustCrypto digests.
//!
//! ```text
//! tag (4) | serialized state of the digest (SerializableState)
//! ```
//!
//! The tag identifies the algorithm, so a state of one digest is never loaded into another one
//! even if the sizes happen to match.

use super::{Algorithm, E};
use digest::common::hazmat::{SerializableState, SerializedState};

const TAG_SIZE: usize = 4;

pub(crate) fn export<D: SerializableState>(tag: &[u8; TAG_SIZE], hasher: &D) -> Vec<u8> {
    let serialized = hasher.serialize();
    let mut state = Vec::with_capacity(TAG_SIZE + serialized.len());
    state.extend_from_slice(tag);
    state.extend_from_slice(&serialized);
    state
}

pub(crate) fn import<D: SerializableState>(
    alg: Algorithm,
    tag: &[u8; TAG_SIZE],
    state: &[u8],
) -> Result<D, E> {
    let failed = |reason: String| E::StateImportFailed(alg, reason);
    if state.len() < TAG_SIZE || &state[..TAG_SIZE] != tag {
        return Err(failed(String::from("invalid state identifier")));
    }
    let serialized = SerializedState::<D>::try_from(&state[TAG_SIZE..]).map_err(|_| {
        failed(format!(
            "invalid state size {}, expected {}",
            state.len(),
            TAG_SIZE + SerializedState::<D>::default().len()
        ))
    })?;
    D::deserialize(&serialized).map_err(|err| failed(err.to_string()))
}
