use super::{Algorithm, Hasher, E};
use std::{collections::BTreeMap, fmt};

/// Exported states of accumulators. The key is the algorithm and the value is the
/// binary state of its accumulator.
pub type States = BTreeMap<Algorithm, Vec<u8>>;

/// Everything needed to continue an interrupted computation: the number of bytes hashed so far
/// (the offset at which the resumed stream has to start) and the states of accumulators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Session {
    pub computed: u64,
    pub states: States,
}

impl Session {
    pub fn new(computed: u64, states: States) -> Self {
        Self { computed, states }
    }

    /// Algorithms stored in the session.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.states.keys().copied().collect()
    }
}

/// Digests computed by `Hashers`, keyed by algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Checksums(BTreeMap<Algorithm, Vec<u8>>);

impl Checksums {
    pub fn get(&self, alg: &Algorithm) -> Option<&[u8]> {
        self.0.get(alg).map(|checksum| checksum.as_slice())
    }

    /// Checksums as lower-case hex strings.
    pub fn strings(&self) -> BTreeMap<Algorithm, String> {
        self.0
            .iter()
            .map(|(alg, checksum)| (*alg, hex::encode(checksum)))
            .collect()
    }

    /// Checks if the given hex string matches the checksum of any algorithm. The comparison is
    /// case-insensitive.
    ///
    /// # Returns
    ///
    /// - `Some(Algorithm)` of the matched checksum, `None` if nothing matches.
    pub fn matches(&self, checksum: &str) -> Option<Algorithm> {
        let expected = hex::decode(checksum.trim()).ok()?;
        self.0
            .iter()
            .find_map(|(alg, actual)| (*actual == expected).then_some(*alg))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Algorithm, &Vec<u8>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<Algorithm, Vec<u8>> {
        self.0
    }
}

impl fmt::Display for Checksums {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.strings()
                .iter()
                .map(|(alg, checksum)| format!("{alg}: {checksum}"))
                .collect::<Vec<String>>()
                .join("; ")
        )
    }
}

/// `Hashers` is a set of accumulators which absorb the same stream in lockstep.
///
/// `Hashers` is always bound to at least one algorithm. It can be created from scratch with
/// `create()` / `from_names()`, or continue a previous computation with `restore()` /
/// `resume()`. In the second case the algorithms are defined by the keys of the saved states.
///
/// The set tracks two counters:
/// - `written()` - bytes written since the set was created or restored (its lineage);
/// - `computed()` - `written()` plus the offset of the session the set was resumed from, i.e.
///   the absolute position in the stream.
///
/// Exporting the states ends the lineage: the set is sealed and rejects any further data with
/// `E::ConsumerProtocolViolation`. To continue, a new set has to be restored from the exported
/// states.
pub struct Hashers {
    hashers: BTreeMap<Algorithm, Box<dyn Hasher>>,
    offset: u64,
    written: u64,
    sealed: bool,
}

impl fmt::Debug for Hashers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hashers")
            .field("algorithms", &self.algorithms())
            .field("offset", &self.offset)
            .field("written", &self.written)
            .field("sealed", &self.sealed)
            .finish()
    }
}

impl Hashers {
    /// Creates a new set of accumulators.
    ///
    /// # Errors
    ///
    /// - `E::NoAlgorithmSpecified` if `algs` is empty.
    pub fn create(algs: &[Algorithm]) -> Result<Self, E> {
        if algs.is_empty() {
            return Err(E::NoAlgorithmSpecified);
        }
        Ok(Self {
            hashers: algs.iter().map(|alg| (*alg, alg.hasher())).collect(),
            offset: 0,
            written: 0,
            sealed: false,
        })
    }

    /// Creates a new set of accumulators from algorithm names. All names are resolved before
    /// anything is constructed.
    ///
    /// # Errors
    ///
    /// - `E::NoAlgorithmSpecified` if `names` is empty.
    /// - `E::UnsupportedAlgorithm` if any of names is unknown.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, E> {
        let algs = names
            .iter()
            .map(|name| name.as_ref().parse::<Algorithm>())
            .collect::<Result<Vec<Algorithm>, E>>()?;
        Self::create(&algs)
    }

    /// Restores a set from exported states. The keys of `states` define the algorithms.
    ///
    /// # Errors
    ///
    /// - `E::NoStateProvided` if `states` is empty.
    /// - `E::StateImportFailed` if any state cannot be loaded.
    pub fn restore(states: &States) -> Result<Self, E> {
        if states.is_empty() {
            return Err(E::NoStateProvided);
        }
        let mut hashers = BTreeMap::new();
        for (alg, state) in states.iter() {
            let mut hasher = alg.hasher();
            hasher.import(state)?;
            hashers.insert(*alg, hasher);
        }
        Ok(Self {
            hashers,
            offset: 0,
            written: 0,
            sealed: false,
        })
    }

    /// Restores a set from a saved session. The offset of the session is kept, so
    /// `computed()` continues from `session.computed`.
    pub fn resume(session: &Session) -> Result<Self, E> {
        let mut hashers = Self::restore(&session.states)?;
        hashers.offset = session.computed;
        Ok(hashers)
    }

    #[cfg(test)]
    pub(crate) fn from_boxed(hashers: Vec<Box<dyn Hasher>>) -> Self {
        Self {
            hashers: hashers
                .into_iter()
                .map(|hasher| (hasher.algorithm(), hasher))
                .collect(),
            offset: 0,
            written: 0,
            sealed: false,
        }
    }

    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.hashers.keys().copied().collect()
    }

    /// Bytes written since creation or restoring.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Absolute position in the stream: offset of the resumed session plus written bytes.
    pub fn computed(&self) -> u64 {
        self.offset + self.written
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Feeds the same chunk to every accumulator. Counters advance once all of them have
    /// absorbed it.
    ///
    /// # Errors
    ///
    /// - `E::ConsumerProtocolViolation` if states have already been exported.
    pub fn write(&mut self, chunk: &[u8]) -> Result<(), E> {
        if self.sealed {
            return Err(E::ConsumerProtocolViolation);
        }
        self.hashers
            .values_mut()
            .for_each(|hasher| hasher.absorb(chunk));
        self.written += chunk.len() as u64;
        Ok(())
    }

    /// Digests of data written so far. They're final checksums only if the whole stream has
    /// been written.
    pub fn checksums(&self) -> Checksums {
        Checksums(
            self.hashers
                .iter()
                .map(|(alg, hasher)| (*alg, hasher.hash()))
                .collect(),
        )
    }

    /// Exports states of all accumulators and seals the set.
    ///
    /// # Errors
    ///
    /// - `E::StateExportUnsupported` if any accumulator cannot be snapshotted. The set is sealed
    ///   in this case as well.
    pub fn export(&mut self) -> Result<States, E> {
        self.sealed = true;
        self.hashers
            .iter()
            .map(|(alg, hasher)| hasher.export().map(|state| (*alg, state)))
            .collect()
    }

    /// Exports states (see `export()`) together with the absolute position.
    pub fn session(&mut self) -> Result<Session, E> {
        let states = self.export()?;
        Ok(Session::new(self.computed(), states))
    }
}
