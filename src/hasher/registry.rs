//! Process-wide table of supported algorithms. Built once on first use and never mutated.

use super::{crc32::Crc32, md5::Md5, sha1::Sha1, sha256::Sha256, sha512::Sha512};
use super::{Algorithm, Hasher, E};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

type Constructor = fn() -> Box<dyn Hasher>;

fn construct<H: Hasher + 'static>() -> Box<dyn Hasher> {
    Box::new(H::new())
}

/// Keyed by canonical name, so iteration order is the lexical order of names.
static REGISTRY: Lazy<BTreeMap<&'static str, (Algorithm, Constructor)>> = Lazy::new(|| {
    BTreeMap::from([
        ("CRC-32", (Algorithm::Crc32, construct::<Crc32> as Constructor)),
        ("MD5", (Algorithm::Md5, construct::<Md5> as Constructor)),
        ("SHA-1", (Algorithm::Sha1, construct::<Sha1> as Constructor)),
        ("SHA-256", (Algorithm::Sha256, construct::<Sha256> as Constructor)),
        ("SHA-512", (Algorithm::Sha512, construct::<Sha512> as Constructor)),
    ])
});

/// Returns supported algorithms sorted by their canonical names.
pub fn supported() -> Vec<Algorithm> {
    REGISTRY.values().map(|(alg, _)| *alg).collect()
}

/// Resolves a name to an algorithm. The case is ignored, nothing else is normalized.
pub fn lookup(name: &str) -> Result<Algorithm, E> {
    REGISTRY
        .get(name.to_ascii_uppercase().as_str())
        .map(|(alg, _)| *alg)
        .ok_or_else(|| E::UnsupportedAlgorithm(name.to_owned()))
}

/// Creates a fresh accumulator for the given name.
pub fn new_hasher(name: &str) -> Result<Box<dyn Hasher>, E> {
    let alg = lookup(name)?;
    Ok(alg.hasher())
}

pub(crate) fn construct_for(alg: Algorithm) -> Box<dyn Hasher> {
    match REGISTRY.get(alg.name()) {
        Some((_, constructor)) => constructor(),
        None => unreachable!("Each algorithm is registered"),
    }
}
