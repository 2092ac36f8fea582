use super::drain;
use crate::{
    engine::Event,
    hasher::Hashers,
    test::{
        prankster::{Prankster, Trick},
        utils,
    },
    Options, E,
};
use std::time::Duration;

#[test]
fn progress_on_every_chunk() -> Result<(), E> {
    let data = utils::random_bytes(1000);
    let events = drain(
        Options::new()
            .algs(&["MD5"])?
            .interval(Duration::ZERO)
            .total(1000)
            .engine(Prankster::new(&data, 100, Trick::Nothing))?,
    );
    assert_eq!(events.len(), 11);
    let computed = events
        .iter()
        .filter_map(|event| match event {
            Event::Progress(progress) => Some(progress.computed),
            _ => None,
        })
        .collect::<Vec<u64>>();
    assert_eq!(computed, (1..=10).map(|n| n * 100).collect::<Vec<u64>>());
    let Some(Event::Progress(last)) = events.get(9) else {
        panic!("no progress before the end");
    };
    assert_eq!(last.total, Some(1000));
    assert_eq!(last.percent, 100.0);
    assert!(matches!(events.last(), Some(Event::Ok(done)) if done.computed == 1000));
    Ok(())
}

#[test]
fn no_progress_without_interval() -> Result<(), E> {
    let data = utils::random_bytes(1000);
    let events = drain(
        Options::new()
            .algs(&["MD5"])?
            .engine(Prankster::new(&data, 100, Trick::Nothing))?,
    );
    assert_eq!(events.len(), 1);
    Ok(())
}

#[test]
fn rare_progress() -> Result<(), E> {
    let data = utils::random_bytes(1000);
    let events = drain(
        Options::new()
            .algs(&["MD5"])?
            .interval(Duration::from_secs(3600))
            .engine(Prankster::new(&data, 100, Trick::Nothing))?,
    );
    assert_eq!(events.len(), 1);
    Ok(())
}

#[test]
fn compute_with_progress() -> Result<(), E> {
    let mut ticks = 0;
    let outcome = Options::new()
        .algs(&["CRC-32"])?
        .interval(Duration::ZERO)
        .buffer_size(64)
        .strings(&[utils::GOPHER, utils::GOPHER])?
        .compute_with(|progress| {
            ticks += 1;
            assert!(progress.percent > 0.0);
        })?;
    assert!(ticks >= 2);
    assert_eq!(outcome.computed(), (utils::GOPHER.len() * 2) as u64);
    Ok(())
}

#[test]
fn progress_is_absolute_on_resume() -> Result<(), E> {
    let data = utils::random_bytes(1000);
    let mut hashers = Hashers::from_names(&["SHA-256"])?;
    hashers.write(&data[..500])?;
    let session = hashers.session()?;
    let events = drain(
        Options::new()
            .session(session)
            .interval(Duration::ZERO)
            .total(1000)
            .engine(Prankster::new(&data[500..], 100, Trick::Nothing))?,
    );
    let Some(Event::Progress(first)) = events.first() else {
        panic!("no progress");
    };
    assert_eq!(first.computed, 600);
    assert_eq!(first.percent, 60.0);
    let Some(Event::Ok(done)) = events.last() else {
        panic!("hashing isn't completed");
    };
    assert_eq!(done.computed, 1000);
    assert_eq!(done.written, 500);
    Ok(())
}
