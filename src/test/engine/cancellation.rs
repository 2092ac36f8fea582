use super::drain;
use crate::{
    engine::{Event, Outcome},
    hasher::{self, Algorithm},
    reader::plain::Plain,
    test::{
        prankster::{Prankster, Trick},
        utils,
    },
    Breaker, Options, E,
};
use std::{
    io::Cursor,
    time::{Duration, Instant},
};

#[test]
fn cancel_mid_stream() -> Result<(), E> {
    let data = utils::random_bytes(10_000);
    let breaker = Breaker::new();
    let events = drain(
        Options::new()
            .algorithms(&hasher::supported())
            .breaker(breaker.clone())
            .engine(Prankster::new(&data, 100, Trick::AbortAfter(25, breaker)))?,
    );
    assert_eq!(events.len(), 1);
    let Some(Event::Stop(stop)) = events.last() else {
        panic!("hashing isn't stopped");
    };
    assert_eq!(stop.computed, 2500);
    assert_eq!(stop.written, 2500);
    assert_eq!(
        stop.states.keys().copied().collect::<Vec<Algorithm>>(),
        hasher::supported()
    );
    Ok(())
}

#[test]
fn abort_from_consumer() -> Result<(), E> {
    let data = utils::random_bytes(10_000);
    let engine = Options::new()
        .algs(&["SHA-256"])?
        .buffer_size(64)
        .interval(Duration::ZERO)
        .engine(Plain::new(Cursor::new(data)))?;
    let breaker = engine.breaker();
    let mut events = engine.start();
    let mut last = 0;
    let mut stop = None;
    for event in events.by_ref() {
        match event {
            Event::Progress(progress) => {
                last = progress.computed;
                if progress.computed >= 1024 {
                    breaker.abort();
                }
            }
            Event::Stop(event) => stop = Some(event),
            other => panic!("unexpected event: {other}"),
        }
    }
    events.wait();
    let Some(stop) = stop else {
        panic!("hashing isn't stopped");
    };
    assert!(stop.computed >= 1024);
    assert!(stop.computed < 10_000);
    // Every chunk is reported, so the stop matches the last reported position.
    assert_eq!(stop.computed, last);
    Ok(())
}

#[test]
fn deadline_already_passed() -> Result<(), E> {
    let data = utils::random_bytes(1000);
    let outcome = Options::new()
        .algs(&["MD5", "CRC-32"])?
        .timeout(Duration::ZERO)
        .engine(Plain::new(Cursor::new(data.clone())))?
        .compute()?;
    let Outcome::Stopped(stop) = outcome else {
        panic!("hashing isn't stopped");
    };
    assert_eq!(stop.computed, 0);
    assert_eq!(stop.states.len(), 2);
    let outcome = Options::new()
        .session(stop.session())
        .engine(Plain::new(Cursor::new(data.clone())))?
        .compute()?;
    assert_eq!(
        outcome.checksums(),
        Some(&utils::checksums_of(&data, &[Algorithm::Md5, Algorithm::Crc32]))
    );
    Ok(())
}

#[test]
fn deadline_during_run() -> Result<(), E> {
    let data = utils::random_bytes(10_000);
    let outcome = Options::new()
        .algs(&["SHA-1"])?
        .deadline(Instant::now() + Duration::from_millis(100))
        .engine(Prankster::new(
            &data,
            10,
            Trick::Slow(Duration::from_millis(5)),
        ))?
        .compute()?;
    let Some(session) = outcome.session() else {
        panic!("hashing isn't stopped");
    };
    assert!(session.computed > 0);
    assert!(session.computed < data.len() as u64);
    assert_eq!(session.computed % 10, 0);
    let offset = session.computed as usize;
    let outcome = Options::new()
        .session(session)
        .engine(Plain::new(Cursor::new(data[offset..].to_vec())))?
        .compute()?;
    assert_eq!(outcome.computed(), data.len() as u64);
    assert_eq!(
        outcome.checksums(),
        Some(&utils::checksums_of(&data, &[Algorithm::Sha1]))
    );
    Ok(())
}
