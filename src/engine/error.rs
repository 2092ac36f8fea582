use crate::hasher;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("{0}")]
    Hasher(hasher::E),
    #[error("Fail to read source: {0}")]
    SourceRead(io::Error),
    #[error("IO: {0}")]
    IO(#[from] io::Error),
    #[error("Offset {0} is beyond the end of source ({1} bytes)")]
    OffsetBeyondEnd(u64, u64),
    #[error("Events channel has been closed without terminal event")]
    NoTerminalEvent,
}

impl From<hasher::E> for E {
    fn from(err: hasher::E) -> Self {
        E::Hasher(err)
    }
}
