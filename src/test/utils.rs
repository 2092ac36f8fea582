use crate::hasher::{Algorithm, Checksums, Hasher, Hashers};
use rand::Rng;

pub const GOPHER: &str = "The tunneling gopher digs downwards, unaware of what he will find.";
pub const GOPHER_SHA256: &str = "57d51a066f3a39942649cd9a76c77e97ceab246756ff3888659e6aa5a07f4a52";

pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::thread_rng().fill(data.as_mut_slice());
    data
}

/// Checksums of `data` hashed in one go.
pub fn checksums_of(data: &[u8], algs: &[Algorithm]) -> Checksums {
    let mut hashers = Hashers::create(algs).expect("hashers are created");
    hashers.write(data).expect("data is written");
    hashers.checksums()
}

/// Splits random data at every offset in `0..=len`, exports the state after the first part,
/// imports it into a fresh accumulator and checks that hashing the rest gives the same digest as
/// hashing everything at once.
pub fn resume_at_every_offset<H: Hasher>(len: usize) {
    let data = random_bytes(len);
    let mut whole = H::new();
    whole.absorb(&data);
    let expected = whole.hash();
    for k in 0..=len {
        let mut first = H::new();
        first.absorb(&data[..k]);
        let state = first.export().expect("state is exported");
        let mut second = H::new();
        second.import(&state).expect("state is imported");
        second.absorb(&data[k..]);
        assert_eq!(second.hash(), expected, "split at {k}");
    }
}
