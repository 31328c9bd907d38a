use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{PakError, Result};

use super::{MAX_NAME_LEN, eof_as};

/// Raw index record. The name carries no length field, the NUL is authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: Vec<u8>,
    pub size: u32,
    pub offset: u32,
}

impl Entry {
    pub fn from_reader<R>(reader: &mut R, index: u32) -> Result<Self>
    where
        R: Read,
    {
        let truncated = || PakError::TruncatedIndex { index };

        let mut name = Vec::new();
        loop {
            let byte = reader.read_u8().map_err(|e| eof_as(e, truncated()))?;
            if byte == 0 {
                break;
            }
            name.push(byte);
            if name.len() > MAX_NAME_LEN {
                return Err(PakError::NameTooLong {
                    index,
                    limit: MAX_NAME_LEN,
                });
            }
        }

        let size = reader
            .read_u32::<LittleEndian>()
            .map_err(|e| eof_as(e, truncated()))?;
        let offset = reader
            .read_u32::<LittleEndian>()
            .map_err(|e| eof_as(e, truncated()))?;

        Ok(Self { name, size, offset })
    }

    pub fn write_to<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        writer.write_all(&self.name)?;
        writer.write_u8(0)?;
        writer.write_u32::<LittleEndian>(self.size)?;
        writer.write_u32::<LittleEndian>(self.offset)
    }

    /// Bytes this record occupies on disk.
    pub fn encoded_len(&self) -> u64 {
        self.name.len() as u64 + 1 + 8
    }
}
