use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{PakError, Result};
use crate::pak::{MIN_VERSION, Version};

use super::{MAGIC, MAX_ENTRY_COUNT, eof_as};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 9],
    pub version: [u8; 3],
    pub data_offset: u32,
    pub entry_count: u32,
}

impl Header {
    /// Parse the header field by field, stopping at the first violation.
    pub fn from_reader<R>(reader: &mut R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0u8; 9];
        reader
            .read_exact(&mut magic)
            .map_err(|e| eof_as(e, PakError::TruncatedHeader))?;
        if magic[8] != 0 {
            return Err(PakError::BadTerminator);
        }
        if magic[..8] != MAGIC[..8] {
            let mut found = [0u8; 8];
            found.copy_from_slice(&magic[..8]);
            let mut expected = [0u8; 8];
            expected.copy_from_slice(&MAGIC[..8]);
            return Err(PakError::BadMagic { expected, found });
        }

        let mut version = [0u8; 3];
        reader
            .read_exact(&mut version)
            .map_err(|e| eof_as(e, PakError::TruncatedHeader))?;
        let found = Version::from(version);
        if !found.is_supported() {
            return Err(PakError::UnsupportedVersion {
                found,
                minimum: MIN_VERSION,
            });
        }

        let data_offset = reader
            .read_u32::<LittleEndian>()
            .map_err(|e| eof_as(e, PakError::TruncatedHeader))?;
        let entry_count = reader
            .read_u32::<LittleEndian>()
            .map_err(|e| eof_as(e, PakError::TruncatedHeader))?;
        if entry_count > MAX_ENTRY_COUNT {
            return Err(PakError::SuspiciousEntryCount(entry_count));
        }

        Ok(Self {
            magic,
            version,
            data_offset,
            entry_count,
        })
    }

    pub fn write_to<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        writer.write_all(&self.magic)?;
        writer.write_all(&self.version)?;
        writer.write_u32::<LittleEndian>(self.data_offset)?;
        writer.write_u32::<LittleEndian>(self.entry_count)
    }
}
