#![doc = include_str!("../README.md")]

mod breaker;
pub mod engine;
mod error;
pub mod hasher;
pub mod reader;

pub use breaker::Breaker;
pub use engine::{Engine, Event, Events, Options, Outcome};
pub use error::E;
pub use hasher::{Algorithm, Checksums, Hasher, Hashers, Session, States};
pub use reader::Reader;
