use crate::{engine, hasher};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("{0}")]
    Hasher(hasher::E),
    #[error("{0}")]
    Engine(engine::E),
    #[error("IO: {0}")]
    IO(#[from] io::Error),
}

impl From<hasher::E> for E {
    fn from(err: hasher::E) -> Self {
        E::Hasher(err)
    }
}

impl From<engine::E> for E {
    fn from(err: engine::E) -> Self {
        E::Engine(err)
    }
}
