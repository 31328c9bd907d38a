use serde::Serialize;

use crate::error::PakError;
use crate::spec;

/// One file in the index. `offset` is relative to the start of the data section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PakEntry {
    pub(crate) name: String,
    pub(crate) size: u32,
    pub(crate) offset: u32,
}

impl PakEntry {
    pub fn new(name: String, size: u32, offset: u32) -> Self {
        Self { name, size, offset }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Absolute position of the entry's bytes in the archive.
    pub fn absolute_offset(&self, data_offset: u32) -> u64 {
        data_offset as u64 + self.offset as u64
    }
}

impl TryFrom<spec::Entry> for PakEntry {
    type Error = PakError;

    fn try_from(value: spec::Entry) -> Result<Self, Self::Error> {
        let name = String::from_utf8(value.name).map_err(|e| PakError::InvalidEntryName {
            path: String::from_utf8_lossy(e.as_bytes()).into_owned().into(),
            reason: "name is not valid UTF-8",
        })?;

        Ok(Self {
            name,
            size: value.size,
            offset: value.offset,
        })
    }
}

impl From<&PakEntry> for spec::Entry {
    fn from(value: &PakEntry) -> Self {
        Self {
            name: value.name.as_bytes().to_vec(),
            size: value.size,
            offset: value.offset,
        }
    }
}
