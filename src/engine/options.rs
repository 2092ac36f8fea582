use super::{Engine, DEFAULT_BUFFER_SIZE, E, MAX_BUFFER_SIZE, MIN_BUFFER_SIZE};
use crate::{
    hasher::{self, Algorithm, Hashers, Session},
    reader::{buffering::Buffering, strings::Strings},
    Breaker, Reader,
};
use log::debug;
use std::{
    mem,
    path::Path,
    time::{Duration, Instant},
};

/// Builder of `Engine`.
///
/// Algorithms can be given by name with `algs()` or directly with `algorithms()`. To continue a
/// stopped computation a `Session` is given with `session()`; in this case algorithms are taken
/// from the session, and if algorithms are given as well, both sets have to be equal.
///
/// Configuration errors are reported by the terminal builders (`engine()`, `file()`,
/// `strings()`) before any thread is started.
#[derive(Default, Debug)]
pub struct Options {
    pub(crate) algs: Vec<Algorithm>,
    pub(crate) session: Option<Session>,
    pub(crate) buffer_size: Option<usize>,
    pub(crate) interval: Option<Duration>,
    pub(crate) total: Option<u64>,
    pub(crate) close_source: bool,
    pub(crate) breaker: Option<Breaker>,
    pub(crate) deadline: Option<Instant>,
}

impl Options {
    pub fn new() -> Self {
        Self {
            algs: Vec::new(),
            session: None,
            buffer_size: None,
            interval: None,
            total: None,
            close_source: false,
            breaker: None,
            deadline: None,
        }
    }

    /// Adds algorithms by names. Names are case-insensitive ("sha-256", "SHA-256").
    ///
    /// # Errors
    ///
    /// - `hasher::E::UnsupportedAlgorithm` if any name is unknown. Nothing is added in this case.
    pub fn algs<S: AsRef<str>>(&mut self, names: &[S]) -> Result<&mut Self, hasher::E> {
        let algs = names
            .iter()
            .map(|name| name.as_ref().parse::<Algorithm>())
            .collect::<Result<Vec<Algorithm>, hasher::E>>()?;
        self.algs.extend(algs);
        Ok(self)
    }

    pub fn algorithms(&mut self, algs: &[Algorithm]) -> &mut Self {
        self.algs.extend_from_slice(algs);
        self
    }

    /// Continues a computation from the saved session.
    pub fn session(&mut self, session: Session) -> &mut Self {
        self.session = Some(session);
        self
    }

    /// Size of the read buffer. The value is clamped to `MIN_BUFFER_SIZE..=MAX_BUFFER_SIZE`.
    pub fn buffer_size(&mut self, size: usize) -> &mut Self {
        self.buffer_size = Some(size);
        self
    }

    /// Enables `Event::Progress`, produced not more often than once per `interval`.
    pub fn interval(&mut self, interval: Duration) -> &mut Self {
        self.interval = Some(interval);
        self
    }

    /// Advisory size of the whole stream, used only to calculate percent in progress events.
    pub fn total(&mut self, total: u64) -> &mut Self {
        self.total = Some(total);
        self
    }

    /// Makes the engine close the source when the run is over.
    pub fn close_source(&mut self, close: bool) -> &mut Self {
        self.close_source = close;
        self
    }

    /// Uses the given breaker instead of a new one, so the run can be stopped from outside.
    pub fn breaker(&mut self, breaker: Breaker) -> &mut Self {
        self.breaker = Some(breaker);
        self
    }

    /// Stops the run with `Event::Stop` once `timeout` has passed (counted from now).
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn deadline(&mut self, deadline: Instant) -> &mut Self {
        self.deadline = Some(deadline);
        self
    }

    /// Creates an engine hashing the given reader.
    ///
    /// # Errors
    ///
    /// - `E::Hasher(NoAlgorithmSpecified)` if neither algorithms nor a session are given.
    /// - `E::Hasher(AlgorithmSetMismatch)` if algorithms differ from the session's ones.
    /// - `E::Hasher(NoStateProvided)` / `E::Hasher(StateImportFailed)` if the session cannot
    ///   be restored.
    pub fn engine<R: Reader>(&mut self, reader: R) -> Result<Engine<R>, E> {
        let hashers = self.hashers()?;
        Ok(self.build(reader, hashers))
    }

    /// Creates an engine hashing the file. The total is set to the size of the file, reading
    /// starts at the offset of the session (if any) and the file is closed when the run is
    /// over.
    ///
    /// # Errors
    ///
    /// Same as `engine()`, plus:
    /// - `E::IO` if the file's metadata cannot be read.
    /// - `E::OffsetBeyondEnd` if the session's offset exceeds the size of the file.
    pub fn file<P: AsRef<Path>>(&mut self, path: P) -> Result<Engine<Buffering>, E> {
        let hashers = self.hashers()?;
        let offset = hashers.computed();
        let reader = Buffering::new(path).at(offset);
        let size = reader.size()?;
        if offset > size {
            return Err(E::OffsetBeyondEnd(offset, size));
        }
        self.total = Some(size);
        self.close_source = true;
        Ok(self.build(reader, hashers))
    }

    /// Creates an engine hashing the concatenation of strings. The total is set to their
    /// length in bytes.
    pub fn strings<S: AsRef<str>>(&mut self, strs: &[S]) -> Result<Engine<Strings>, E> {
        let hashers = self.hashers()?;
        let reader = Strings::new(strs);
        self.total = Some(reader.len());
        Ok(self.build(reader, hashers))
    }

    fn hashers(&mut self) -> Result<Hashers, hasher::E> {
        let mut algs = mem::take(&mut self.algs);
        let Some(session) = self.session.take() else {
            return Hashers::create(&algs);
        };
        if !algs.is_empty() {
            algs.sort();
            algs.dedup();
            let saved = session.algorithms();
            if saved != algs {
                return Err(hasher::E::AlgorithmSetMismatch(saved, algs));
            }
        }
        Hashers::resume(&session)
    }

    fn build<R: Reader>(&mut self, reader: R, hashers: Hashers) -> Engine<R> {
        let mut breaker = self.breaker.take().unwrap_or_default();
        if let Some(deadline) = self.deadline.take() {
            breaker.set_deadline(deadline);
        }
        let buffer_size = self
            .buffer_size
            .take()
            .unwrap_or(DEFAULT_BUFFER_SIZE)
            .clamp(MIN_BUFFER_SIZE, MAX_BUFFER_SIZE);
        debug!(
            "engine for {:?} from {} bytes; buffer: {buffer_size} bytes",
            hashers.algorithms(),
            hashers.computed()
        );
        Engine {
            reader,
            hashers,
            breaker,
            buffer_size,
            interval: self.interval.take(),
            total: self.total.take(),
            close_source: mem::take(&mut self.close_source),
        }
    }
}
