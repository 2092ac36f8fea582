use super::E;
use crate::hasher::{Checksums, Session, States};
use std::{fmt, time::SystemTime};

/// Events produced by a running `Engine`.
///
/// A run produces zero or more `Progress` events followed by exactly one terminal event
/// (`Stop`, `Error` or `Ok`). Nothing follows the terminal event: the channel is closed and
/// iteration over `Events` ends.
#[derive(Debug)]
pub enum Event {
    /// Data has been hashed. Sent not more often than the configured interval.
    Progress(Progress),
    /// The run has been stopped with `Breaker`. Carries states to continue later.
    Stop(Stop),
    /// The run has failed. No resumable states are attached.
    Error(Failure),
    /// The stream has been consumed; checksums are final.
    Ok(Done),
}

impl Event {
    pub(crate) fn progress(total: Option<u64>, computed: u64) -> Self {
        Event::Progress(Progress::new(total, computed))
    }

    pub(crate) fn stop(computed: u64, written: u64, states: States) -> Self {
        Event::Stop(Stop {
            when: SystemTime::now(),
            computed,
            written,
            states,
        })
    }

    pub(crate) fn error(error: E) -> Self {
        Event::Error(Failure {
            when: SystemTime::now(),
            error,
        })
    }

    pub(crate) fn ok(computed: u64, written: u64, checksums: Checksums) -> Self {
        Event::Ok(Done {
            when: SystemTime::now(),
            computed,
            written,
            checksums,
        })
    }

    /// Time when the event was created.
    pub fn when(&self) -> SystemTime {
        match self {
            Self::Progress(ev) => ev.when,
            Self::Stop(ev) => ev.when,
            Self::Error(ev) => ev.when,
            Self::Ok(ev) => ev.when,
        }
    }

    /// `true` for `Stop`, `Error` and `Ok`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Progress(..))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Progress(ev) => write!(f, "{ev}"),
            Self::Stop(ev) => write!(f, "stopped at {} bytes", ev.computed),
            Self::Error(ev) => write!(f, "failed: {}", ev.error),
            Self::Ok(ev) => write!(f, "done {} bytes; {}", ev.computed, ev.checksums),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Progress {
    pub when: SystemTime,
    /// Advisory size of the whole stream, if known.
    pub total: Option<u64>,
    /// Absolute position in the stream (includes bytes of a resumed session).
    pub computed: u64,
    /// `0.0` if the total is unknown or zero.
    pub percent: f32,
}

impl Progress {
    pub(crate) fn new(total: Option<u64>, computed: u64) -> Self {
        let percent = match total {
            Some(total) if total > 0 => ((computed as f64 / total as f64) * 100f64) as f32,
            _ => 0.0,
        };
        Self {
            when: SystemTime::now(),
            total,
            computed,
            percent,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total {
            Some(total) => write!(
                f,
                "hashing done {:.2}% ({} / {})",
                self.percent, self.computed, total
            ),
            None => write!(f, "hashing done {} bytes", self.computed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stop {
    pub when: SystemTime,
    /// Absolute position in the stream. A resumed source has to start at this offset.
    pub computed: u64,
    /// Bytes hashed by this run.
    pub written: u64,
    pub states: States,
}

impl Stop {
    /// Session to pass to `Options::session()` to continue.
    pub fn session(&self) -> Session {
        Session::new(self.computed, self.states.clone())
    }
}

#[derive(Debug)]
pub struct Failure {
    pub when: SystemTime,
    pub error: E,
}

#[derive(Debug, Clone)]
pub struct Done {
    pub when: SystemTime,
    /// Absolute position in the stream, i.e. the size of the whole stream.
    pub computed: u64,
    /// Bytes hashed by this run.
    pub written: u64,
    pub checksums: Checksums,
}
