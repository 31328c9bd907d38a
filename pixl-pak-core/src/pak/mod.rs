mod entry;
mod header;

use serde::Serialize;

pub use entry::*;
pub use header::*;

/// Pak Archive, stores the header and entries.
#[derive(Debug, Clone, Serialize)]
pub struct PakArchive {
    header: PakHeader,
    entries: Vec<PakEntry>,
}

impl PakArchive {
    pub fn new(header: PakHeader, entries: Vec<PakEntry>) -> Self {
        PakArchive { header, entries }
    }

    pub fn header(&self) -> &PakHeader {
        &self.header
    }

    pub fn entries(&self) -> &[PakEntry] {
        &self.entries
    }

    /// Linear lookup by exact name. Duplicate names resolve to the first match.
    pub fn entry(&self, name: &str) -> Option<&PakEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Total bytes of file data.
    pub fn data_size(&self) -> u64 {
        self.entries.iter().map(|entry| entry.size() as u64).sum()
    }

    /// Expected size of the archive on disk, derived from its own index.
    pub fn archive_size(&self) -> u64 {
        self.header.data_offset() as u64 + self.data_size()
    }
}
