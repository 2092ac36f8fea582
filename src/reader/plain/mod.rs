use super::Reader;
use std::io::{self, Read};

/// Adapter which turns any `Read + Send` into a `Reader`. Closing does nothing; the wrapped
/// value is released when the engine drops it.
#[derive(Debug)]
pub struct Plain<R: Read + Send>(R);

impl<R: Read + Send> Plain<R> {
    pub fn new(inner: R) -> Self {
        Self(inner)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Read + Send> Reader for Plain<R> {}

impl<R: Read + Send> Read for Plain<R> {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        self.0.read(buffer)
    }
}
