pub mod buffering;
pub mod plain;
pub mod strings;

use std::io::{self, Read};

/// A trait that extends the standard `Read` trait with the capabilities the engine needs from a
/// byte source. Implementers of this trait must also implement `Send`, since the source is moved
/// into the engine's worker thread.
///
/// The engine uses a reader as follows:
/// - Read the source chunk by chunk until `read()` returns `Ok(0)`, which is the only accepted
///   end-of-stream signal.
/// - If the engine was configured to close the source, call `close()` once the run is over
///   (completed, stopped or failed).
///
/// When a computation is resumed, the reader has to start exactly at the position reported as
/// computed bytes by the previous run. The engine cannot detect a misaligned source.
pub trait Reader: Read + Send {
    /// Releases the underlying resource. The default implementation does nothing.
    ///
    /// # Returns
    ///
    /// - `io::Result<()>`: the error is logged by the engine, it doesn't change the outcome of
    ///   the run.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
