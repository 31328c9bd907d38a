use std::io::{Read, Seek, SeekFrom, Take, Write};

use crate::error::{PakError, Result};
use crate::pak::PakEntry;

/// Bounded reader over one entry's bytes.
///
/// Yields at most `entry.size` bytes. Use [`Self::read_all`] or
/// [`Self::copy_to`] to also verify that all of them were present.
pub struct PakEntryReader<R> {
    inner: Take<R>,
    name: String,
    expected: u32,
    consumed: u64,
}

impl<R> PakEntryReader<R>
where
    R: Read + Seek,
{
    /// Seek `reader` to the entry's data and limit it to the entry's size.
    pub fn new(mut reader: R, data_offset: u32, entry: &PakEntry) -> Result<Self> {
        reader.seek(SeekFrom::Start(entry.absolute_offset(data_offset)))?;
        Ok(Self {
            inner: reader.take(entry.size() as u64),
            name: entry.name().to_string(),
            expected: entry.size(),
            consumed: 0,
        })
    }
}

impl<R> PakEntryReader<R>
where
    R: Read,
{
    pub fn read_all(mut self) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(initial_capacity(self.expected));
        self.read_to_end(&mut data)?;
        self.check_complete()?;
        Ok(data)
    }

    pub fn copy_to<W>(mut self, writer: &mut W) -> Result<u64>
    where
        W: Write,
    {
        let copied = std::io::copy(&mut self, writer)?;
        self.check_complete()?;
        Ok(copied)
    }

    fn check_complete(&self) -> Result<()> {
        if self.consumed < self.expected as u64 {
            return Err(PakError::ShortRead {
                name: self.name.clone(),
                expected: self.expected,
                actual: self.consumed,
            });
        }
        Ok(())
    }
}

/// The size comes from the index, so grow past 1 MiB only as bytes arrive.
fn initial_capacity(expected: u32) -> usize {
    (expected as usize).min(1 << 20)
}

impl<R> Read for PakEntryReader<R>
where
    R: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.consumed += n as u64;
        Ok(n)
    }
}
