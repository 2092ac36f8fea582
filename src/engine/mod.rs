mod error;
pub mod event;
pub(crate) mod options;
mod worker;

use crate::{
    hasher::{Algorithm, Checksums, Hashers, Session},
    Breaker, Reader,
};
pub use error::E;
pub use event::{Done, Event, Failure, Progress, Stop};
use log::error;
pub use options::Options;
use std::{
    sync::mpsc::{sync_channel, Receiver},
    thread::{self, JoinHandle},
    time::Duration,
};

/// The smallest accepted size of the read buffer. Smaller values are raised to it.
pub const MIN_BUFFER_SIZE: usize = 64;
/// The biggest accepted size of the read buffer. Bigger values are lowered to it.
pub const MAX_BUFFER_SIZE: usize = 16 * 1024 * 1024;
/// The default size of the read buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 32;

/// `Engine` reads a source and computes checksums of several algorithms in one pass.
///
/// The computation is done in a dedicated thread started by `start()`. Progress and outcome are
/// reported as `Event`s over a rendezvous channel: the worker waits on each send until the
/// consumer takes the event, so at most one event is in flight.
///
/// Every run ends with exactly one terminal event:
/// - `Event::Ok` - the stream has been consumed, checksums are final;
/// - `Event::Stop` - the run has been stopped with `Breaker` (explicit `abort()` or deadline);
///   the event carries the states of the accumulators and the number of computed bytes, which
///   form a `Session` to continue the computation later, possibly in another process;
/// - `Event::Error` - reading the source failed (or the states couldn't be exported on stop).
///
/// `Breaker` is checked before each read. A chunk which has been read is always hashed
/// completely, so the states in `Event::Stop` always match the reported number of bytes.
///
/// The most convenient way to create an instance of `Engine` is to use `Options`.
///
/// # Example
///
/// ```
/// use streamhasher::{engine::Event, reader::strings::Strings, Options};
///
/// # fn main() -> Result<(), streamhasher::E> {
/// let events = Options::new()
///     .algs(&["MD5", "SHA-256"])?
///     .engine(Strings::from("The tunneling gopher digs downwards, unaware of what he will find."))?
///     .start();
/// for event in events {
///     if let Event::Ok(done) = event {
///         println!("{}", done.checksums);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Engine<R: Reader> {
    pub(crate) reader: R,
    pub(crate) hashers: Hashers,
    pub(crate) breaker: Breaker,
    pub(crate) buffer_size: usize,
    pub(crate) interval: Option<Duration>,
    pub(crate) total: Option<u64>,
    pub(crate) close_source: bool,
}

impl<R: Reader + 'static> Engine<R> {
    /// Creates an engine with default settings: buffer of `DEFAULT_BUFFER_SIZE`, no progress
    /// reports, no deadline, the source isn't closed on exit.
    pub fn new(reader: R, hashers: Hashers) -> Self {
        Self {
            reader,
            hashers,
            breaker: Breaker::new(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            interval: None,
            total: None,
            close_source: false,
        }
    }

    /// Returns a `Breaker` bound to this engine. Calling `abort()` stops the run at the next
    /// chunk boundary with `Event::Stop`.
    pub fn breaker(&self) -> Breaker {
        self.breaker.clone()
    }

    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.hashers.algorithms()
    }

    /// Starts hashing in a new thread.
    ///
    /// # Returns
    ///
    /// - `Events`: blocking iterator over events of the run. It ends right after the terminal
    ///   event.
    pub fn start(self) -> Events {
        let (tx, rx) = sync_channel(0);
        let handle = thread::spawn(move || worker::run(self, tx));
        Events {
            rx,
            handle: Some(handle),
        }
    }

    /// Runs the engine and blocks until the terminal event.
    ///
    /// # Returns
    ///
    /// - `Ok(Outcome::Completed(..))` with checksums if the stream has been consumed.
    /// - `Ok(Outcome::Stopped(..))` with a resumable session if the run has been stopped.
    /// - `Err(E)` if the run has failed.
    pub fn compute(self) -> Result<Outcome, E> {
        self.compute_with(|_| {})
    }

    /// Same as `compute()`, but calls `on_progress` for each progress event. Progress events
    /// are produced only if an interval has been set with `Options::interval()`.
    pub fn compute_with<F: FnMut(&Progress)>(self, mut on_progress: F) -> Result<Outcome, E> {
        let mut events = self.start();
        let terminal = loop {
            match events.next() {
                Some(Event::Progress(progress)) => on_progress(&progress),
                next => break next,
            }
        };
        events.wait();
        match terminal {
            Some(Event::Ok(done)) => Ok(Outcome::Completed(done)),
            Some(Event::Stop(stop)) => Ok(Outcome::Stopped(stop)),
            Some(Event::Error(failure)) => Err(failure.error),
            Some(Event::Progress(..)) | None => Err(E::NoTerminalEvent),
        }
    }
}

/// Result of a run which hasn't failed.
#[derive(Debug, Clone)]
pub enum Outcome {
    Completed(Done),
    Stopped(Stop),
}

impl Outcome {
    /// Checksums if the stream has been consumed completely.
    pub fn checksums(&self) -> Option<&Checksums> {
        match self {
            Self::Completed(done) => Some(&done.checksums),
            Self::Stopped(..) => None,
        }
    }

    /// Session to continue with if the run has been stopped.
    pub fn session(&self) -> Option<Session> {
        match self {
            Self::Completed(..) => None,
            Self::Stopped(stop) => Some(stop.session()),
        }
    }

    /// Absolute number of hashed bytes.
    pub fn computed(&self) -> u64 {
        match self {
            Self::Completed(done) => done.computed,
            Self::Stopped(stop) => stop.computed,
        }
    }
}

/// Blocking iterator over events of a run. The iteration ends after the terminal event, when the
/// worker closes the channel.
///
/// Dropping `Events` before the end makes the worker stop at its next send; the thread isn't
/// joined in this case.
pub struct Events {
    rx: Receiver<Event>,
    handle: Option<JoinHandle<()>>,
}

impl Events {
    /// Waits for the worker thread. Should be called after the terminal event has been received,
    /// otherwise it blocks until the worker is able to send it.
    pub fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Hashing worker has panicked");
            }
        }
    }
}

impl Iterator for Events {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        self.rx.recv().ok()
    }
}
