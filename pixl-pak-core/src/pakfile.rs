use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{PakError, Result};
use crate::pak::{PakArchive, PakEntry, PakHeader};
use crate::read::{self, PakEntryReader};

/// An open pak archive: the parsed index plus a read handle for entry data.
///
/// The handle owns the file; dropping it closes the archive. Reads take
/// `&mut self` because every read seeks the shared handle.
#[derive(Debug)]
pub struct PakFile {
    path: PathBuf,
    archive: PakArchive,
    reader: BufReader<File>,
}

impl PakFile {
    /// Open and validate an archive, loading its whole index.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let archive = {
            let file = File::open(path).map_err(|source| PakError::CannotOpenArchive {
                path: path.to_path_buf(),
                source,
            })?;
            let mut reader = BufReader::new(file);
            read::read_archive(&mut reader)?
        };
        log::debug!(
            "Opened {}: version {}, {} entries, data at {}",
            path.display(),
            archive.header().version(),
            archive.header().entry_count(),
            archive.header().data_offset()
        );

        // parse handle is closed above, data reads get a fresh one
        let file = File::open(path).map_err(|source| PakError::CannotReopenArchive {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            archive,
            reader: BufReader::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn archive(&self) -> &PakArchive {
        &self.archive
    }

    pub fn header(&self) -> &PakHeader {
        self.archive.header()
    }

    pub fn entries(&self) -> &[PakEntry] {
        self.archive.entries()
    }

    /// First entry with exactly this name.
    pub fn entry(&self, name: &str) -> Option<&PakEntry> {
        self.archive.entry(name)
    }

    /// Reader limited to `entry`'s bytes. Borrows the archive handle until dropped.
    pub fn open_entry(&mut self, entry: &PakEntry) -> Result<PakEntryReader<&mut BufReader<File>>> {
        PakEntryReader::new(&mut self.reader, self.archive.header().data_offset(), entry)
    }

    /// Read one entry by name. With duplicate names the first one wins.
    pub fn read_entry(&mut self, name: &str) -> Result<Vec<u8>> {
        let entry = self
            .archive
            .entry(name)
            .ok_or_else(|| PakError::EntryNotFound(name.to_string()))?;
        PakEntryReader::new(&mut self.reader, self.archive.header().data_offset(), entry)?.read_all()
    }

    pub(crate) fn parts_mut(&mut self) -> (&PakArchive, &mut BufReader<File>) {
        (&self.archive, &mut self.reader)
    }
}
