use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{PakError, Result};
use crate::pak::{PakArchive, PakEntry, PakHeader};
use crate::spec;

mod builder;
mod map;

pub use builder::*;
pub use map::*;

/// Serializes an archive onto a seekable sink in a single pass:
/// index first, then each entry's data in index order.
pub struct PakWriter<W: Write + Seek> {
    pub(crate) inner: W,
}

impl<W> PakWriter<W>
where
    W: Write + Seek,
{
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write header and index, then patch `data_offset` in place.
    ///
    /// The stream is left at its end, ready for [`Self::write_entry_data`].
    pub fn write_index(&mut self, entries: &[PakEntry]) -> Result<PakArchive> {
        let entry_count = check_entry_count(entries.len())?;

        let placeholder = PakHeader::new(0, entry_count);
        spec::Header::from(&placeholder).write_to(&mut self.inner)?;
        for entry in entries {
            spec::Entry::from(entry).write_to(&mut self.inner)?;
        }

        let data_offset = self.inner.stream_position()?;
        let data_offset = u32::try_from(data_offset).map_err(|_| PakError::ArchiveTooLarge)?;
        self.inner.seek(SeekFrom::Start(spec::DATA_OFFSET_POS))?;
        self.inner.write_u32::<LittleEndian>(data_offset)?;
        self.inner.seek(SeekFrom::End(0))?;

        Ok(PakArchive::new(
            PakHeader::new(data_offset, entry_count),
            entries.to_vec(),
        ))
    }

    /// Append exactly `entry.size` bytes taken from `reader`.
    ///
    /// Returns the number of bytes actually copied, which is less than
    /// `entry.size` if the reader ran dry.
    pub fn write_entry_data<R>(&mut self, entry: &PakEntry, reader: R) -> Result<u64>
    where
        R: Read,
    {
        let mut limited = reader.take(entry.size() as u64);
        let copied = std::io::copy(&mut limited, &mut self.inner)?;
        log::trace!("Wrote {} bytes for {}", copied, entry.name());
        Ok(copied)
    }

    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Reject counts the reader would refuse as corrupted.
pub fn check_entry_count(count: usize) -> Result<u32> {
    match u32::try_from(count) {
        Ok(n) if n <= spec::MAX_ENTRY_COUNT => Ok(n),
        _ => Err(PakError::TooManyEntries {
            count,
            limit: spec::MAX_ENTRY_COUNT,
        }),
    }
}
