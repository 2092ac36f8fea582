mod cancellation;
mod progress;

use crate::{
    engine::{Event, Outcome},
    hasher::{self, Algorithm, Hashers},
    reader::{plain::Plain, strings::Strings},
    test::{
        prankster::{Prankster, Trick},
        utils,
    },
    Engine, Options, E,
};
use ::md5::Digest;
use std::io::Cursor;

/// Consumes all events of a run and checks that the last one (and only the last one) is
/// terminal.
pub(crate) fn drain(engine: Engine<impl crate::Reader + 'static>) -> Vec<Event> {
    let mut events = engine.start();
    let collected: Vec<Event> = events.by_ref().collect();
    events.wait();
    assert_eq!(
        collected.iter().filter(|event| event.is_terminal()).count(),
        1
    );
    assert!(collected.last().map(|event| event.is_terminal()).unwrap_or(false));
    collected
}

#[test]
fn gopher() -> Result<(), E> {
    let outcome = Options::new()
        .algs(&["MD5", "SHA-256"])?
        .strings(&[utils::GOPHER])?
        .compute()?;
    let Outcome::Completed(done) = outcome else {
        panic!("hashing isn't completed");
    };
    assert_eq!(done.computed, utils::GOPHER.len() as u64);
    assert_eq!(done.written, done.computed);
    assert_eq!(done.checksums.len(), 2);
    assert_eq!(
        done.checksums
            .strings()
            .get(&Algorithm::Sha256)
            .map(String::as_str),
        Some(utils::GOPHER_SHA256)
    );
    assert_eq!(
        done.checksums.get(&Algorithm::Md5),
        Some(::md5::Md5::digest(utils::GOPHER.as_bytes()).as_slice())
    );
    Ok(())
}

#[test]
fn all_algorithms_in_one_pass() -> Result<(), E> {
    let data = utils::random_bytes(100_000);
    let outcome = Options::new()
        .algorithms(&hasher::supported())
        .buffer_size(1000)
        .engine(Plain::new(Cursor::new(data.clone())))?
        .compute()?;
    let Some(checksums) = outcome.checksums() else {
        panic!("hashing isn't completed");
    };
    assert_eq!(outcome.computed(), data.len() as u64);
    assert_eq!(
        checksums.get(&Algorithm::Crc32),
        Some(crc32fast::hash(&data).to_be_bytes().as_slice())
    );
    assert_eq!(
        checksums.get(&Algorithm::Md5),
        Some(::md5::Md5::digest(&data).as_slice())
    );
    assert_eq!(
        checksums.get(&Algorithm::Sha1),
        Some(::sha1::Sha1::digest(&data).as_slice())
    );
    assert_eq!(
        checksums.get(&Algorithm::Sha256),
        Some(::sha2::Sha256::digest(&data).as_slice())
    );
    assert_eq!(
        checksums.get(&Algorithm::Sha512),
        Some(::sha2::Sha512::digest(&data).as_slice())
    );
    Ok(())
}

#[test]
fn empty_source() -> Result<(), E> {
    let empty: [&str; 0] = [];
    let outcome = Options::new()
        .algs(&["SHA-256", "CRC-32"])?
        .strings(&empty)?
        .compute()?;
    let Outcome::Completed(done) = outcome else {
        panic!("hashing isn't completed");
    };
    assert_eq!(done.computed, 0);
    assert_eq!(
        done.checksums.strings().get(&Algorithm::Sha256).map(String::as_str),
        Some("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
    assert_eq!(
        done.checksums.strings().get(&Algorithm::Crc32).map(String::as_str),
        Some("00000000")
    );
    Ok(())
}

#[test]
fn engine_without_options() -> Result<(), E> {
    let data = utils::random_bytes(5000);
    let engine = Engine::new(
        Plain::new(Cursor::new(data.clone())),
        Hashers::from_names(&["crc-32", "sha-1"])?,
    );
    assert_eq!(engine.algorithms(), vec![Algorithm::Crc32, Algorithm::Sha1]);
    let outcome = engine.compute()?;
    assert_eq!(
        outcome.checksums(),
        Some(&utils::checksums_of(&data, &[Algorithm::Crc32, Algorithm::Sha1]))
    );
    assert!(outcome.session().is_none());
    Ok(())
}

#[test]
fn interrupted_reads_are_retried() -> Result<(), E> {
    let data = utils::random_bytes(3000);
    let outcome = Options::new()
        .algs(&["MD5"])?
        .engine(Prankster::new(&data, 7, Trick::Interrupt(3)))?
        .compute()?;
    assert_eq!(outcome.computed(), data.len() as u64);
    assert_eq!(
        outcome.checksums(),
        Some(&utils::checksums_of(&data, &[Algorithm::Md5]))
    );
    Ok(())
}

#[test]
fn nothing_after_terminal() -> Result<(), E> {
    let events = drain(
        Options::new()
            .algs(&["SHA-512"])?
            .interval(std::time::Duration::ZERO)
            .engine(Strings::new(&["abc", "def", "ghi"]))?,
    );
    assert!(matches!(events.last(), Some(Event::Ok(done)) if done.computed == 9));
    Ok(())
}
