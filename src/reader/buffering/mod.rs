use super::Reader;
use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

/// File reader. The file is opened on the first read and, if an offset is set, positioned at it,
/// which is how a computation continues from a saved session.
#[derive(Debug)]
pub struct Buffering {
    path: PathBuf,
    offset: u64,
    file: Option<File>,
    closed: bool,
}

impl Buffering {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            offset: 0,
            file: None,
            closed: false,
        }
    }

    /// Sets the position to start reading from.
    pub fn at(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the file in bytes.
    pub fn size(&self) -> io::Result<u64> {
        Ok(self.path.metadata()?.len())
    }
}

impl Reader for Buffering {
    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        self.file = None;
        Ok(())
    }
}

impl Read for Buffering {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        if self.closed {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("Reader of {} has been closed", self.path.display()),
            ));
        }
        if self.file.is_none() {
            let mut file = File::open(&self.path)?;
            if self.offset > 0 {
                file.seek(SeekFrom::Start(self.offset))?;
            }
            self.file = Some(file);
        }
        if let Some(file) = self.file.as_mut() {
            file.read(buffer)
        } else {
            Ok(0)
        }
    }
}
