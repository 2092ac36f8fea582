use super::Reader;
use std::{
    collections::VecDeque,
    io::{self, Cursor, Read},
};

/// Reads a sequence of in-memory strings as one stream.
#[derive(Debug, Default)]
pub struct Strings {
    parts: VecDeque<Cursor<Vec<u8>>>,
    len: u64,
}

impl Strings {
    pub fn new<S: AsRef<str>>(strs: &[S]) -> Self {
        let parts: VecDeque<Cursor<Vec<u8>>> = strs
            .iter()
            .map(|s| Cursor::new(s.as_ref().as_bytes().to_vec()))
            .collect();
        let len = parts.iter().map(|part| part.get_ref().len() as u64).sum();
        Self { parts, len }
    }

    /// Total length of all strings in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<&str> for Strings {
    fn from(s: &str) -> Self {
        Self::new(&[s])
    }
}

impl Reader for Strings {}

impl Read for Strings {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        while let Some(part) = self.parts.front_mut() {
            let n = part.read(buffer)?;
            if n > 0 || buffer.is_empty() {
                return Ok(n);
            }
            self.parts.pop_front();
        }
        Ok(0)
    }
}
