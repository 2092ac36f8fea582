use super::{Engine, Event, E};
use crate::Reader;
use log::{debug, error, warn};
use std::{
    io::ErrorKind,
    sync::mpsc::SyncSender,
    time::Instant,
};

/// Body of the engine's worker thread. Reads the source chunk by chunk, writes chunks into the
/// hashers and reports through `tx`. Exactly one terminal event is sent unless the consumer has
/// gone away.
pub(crate) fn run<R: Reader>(engine: Engine<R>, tx: SyncSender<Event>) {
    let now = Instant::now();
    let Engine {
        mut reader,
        mut hashers,
        breaker,
        buffer_size,
        interval,
        total,
        close_source,
    } = engine;
    let mut buffer = vec![0u8; buffer_size];
    let mut reported = Instant::now();
    let terminal: Option<Event> = loop {
        if breaker.is_aborted() {
            break Some(match hashers.export() {
                Ok(states) => Event::stop(hashers.computed(), hashers.written(), states),
                Err(err) => Event::error(err.into()),
            });
        }
        let read = match reader.read(&mut buffer) {
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                error!("Fail to read source after {} bytes: {err}", hashers.written());
                break Some(Event::error(E::SourceRead(err)));
            }
        };
        if read == 0 {
            break Some(Event::ok(
                hashers.computed(),
                hashers.written(),
                hashers.checksums(),
            ));
        }
        if let Err(err) = hashers.write(&buffer[..read]) {
            break Some(Event::error(err.into()));
        }
        let Some(interval) = interval else {
            continue;
        };
        if reported.elapsed() < interval {
            continue;
        }
        reported = Instant::now();
        if tx
            .send(Event::progress(total, hashers.computed()))
            .is_err()
        {
            warn!("Fail to send progress because the consumer has gone. Hashing is stopped.");
            break None;
        }
    };
    if close_source {
        if let Err(err) = reader.close() {
            warn!("Fail to close source: {err}");
        }
    }
    debug!(
        "hashed {} bytes with {} in {}µs / {}ms / {}s",
        hashers.written(),
        hashers
            .algorithms()
            .iter()
            .map(|alg| alg.name())
            .collect::<Vec<&str>>()
            .join(", "),
        now.elapsed().as_micros(),
        now.elapsed().as_millis(),
        now.elapsed().as_secs()
    );
    if let Some(event) = terminal {
        if tx.send(event).is_err() {
            warn!("Fail to send terminal event because the consumer has gone.");
        }
    }
}
