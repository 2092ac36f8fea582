use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

/// `Breaker` is used for stopping a running `Engine`. The engine checks it once per chunk, so
/// an in-flight chunk is always hashed completely before the stop is honored.
///
/// A `Breaker` can be aborted explicitly with `abort()` or can carry a deadline; once the deadline
/// has passed the breaker reports itself as aborted.
///
/// Cloning: An instance of `Breaker` can be cloned; the cloned instance will be bound with the parent
/// instance (the deadline is copied). `Breaker` is safe to be shared between threads.
#[derive(Default, Debug, Clone)]
pub struct Breaker {
    state: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Breaker {
    /// Creates a new instance of `Breaker` without deadline.
    ///
    /// # Returns
    ///
    /// - A new `Breaker` instance.
    pub fn new() -> Self {
        Self {
            state: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    /// Creates a new instance of `Breaker` which will be aborted automatically at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            state: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Creates a new instance of `Breaker` which will be aborted automatically after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Sets (or moves) the deadline of this instance. Bound clones made before the call keep
    /// their own deadline but still share the explicit abort state.
    pub(crate) fn set_deadline(&mut self, deadline: Instant) {
        self.deadline = Some(deadline);
    }

    /// Returns a closure that, when called, will abort the operation.
    ///
    /// # Returns
    ///
    /// - A closure that sets the internal state to `true`, indicating that an abort has been requested.
    pub fn breaker(&self) -> impl Fn() {
        let signal = self.state.clone();
        move || signal.store(true, Ordering::SeqCst)
    }

    /// Checks if the operation has been aborted, either explicitly or because the deadline
    /// has been reached.
    ///
    /// # Returns
    ///
    /// - `true` if the operation has been aborted, `false` otherwise.
    pub fn is_aborted(&self) -> bool {
        self.state.load(Ordering::SeqCst)
            || self
                .deadline
                .map(|deadline| Instant::now() >= deadline)
                .unwrap_or(false)
    }

    /// Aborts the operation by setting the internal state to `true`.
    pub fn abort(&self) {
        self.state.store(true, Ordering::SeqCst)
    }
}
