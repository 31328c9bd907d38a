use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{PakError, Result};
use crate::filename;
use crate::pak::{PakArchive, PakEntry};
use crate::scan;

use super::{PakWriter, check_entry_count};
use super::map;

/// A scanned file paired with the index entry it will become.
#[derive(Debug, Clone)]
pub struct PackSource {
    pub path: PathBuf,
    pub entry: PakEntry,
}

#[derive(Debug)]
pub struct PackReport {
    pub archive: PakArchive,
    /// Size of the written archive in bytes.
    pub archive_size: u64,
    pub map_path: Option<PathBuf>,
}

/// Pack a directory into a new archive.
#[derive(Debug, Clone)]
pub struct PackBuilder {
    source_dir: PathBuf,
    output: PathBuf,
    emit_map: bool,
    overwrite: bool,
    allow_empty: bool,
}

impl PackBuilder {
    pub fn new(source_dir: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            emit_map: false,
            overwrite: true,
            allow_empty: true,
        }
    }

    /// Also write a `<archive>.map` report next to the archive.
    pub fn emit_map(mut self, emit_map: bool) -> Self {
        self.emit_map = emit_map;
        self
    }

    /// Replace an existing archive. When off, the destination must not exist.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Accept a source without files, producing an archive with an empty index.
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Scan the source and assign offsets, without touching the destination.
    pub fn collect(&self) -> Result<Vec<PackSource>> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(PakError::EmptySource(self.source_dir.clone()));
        }

        let files = scan::scan_dir(&self.source_dir);
        if files.is_empty() && !self.allow_empty {
            return Err(PakError::EmptySource(self.source_dir.clone()));
        }

        build_sources(&self.source_dir, files)
    }

    pub fn run(self) -> Result<PackReport> {
        let sources = self.collect()?;
        self.write(sources)
    }

    /// Create the destination and write `sources`, as returned by [`Self::collect`].
    ///
    /// Sources are opened again at copy time. A failure while copying leaves
    /// a partial archive on disk.
    pub fn write(self, sources: Vec<PackSource>) -> Result<PackReport> {
        let entries: Vec<PakEntry> = sources.iter().map(|s| s.entry.clone()).collect();

        let mut open_options = OpenOptions::new();
        if self.overwrite {
            open_options.create(true).write(true).truncate(true);
        } else {
            open_options.create_new(true).write(true);
        }
        let file = open_options
            .open(&self.output)
            .map_err(|source| PakError::CannotCreateArchive {
                path: self.output.clone(),
                source,
            })?;

        let mut writer = PakWriter::new(BufWriter::new(file));
        let archive = writer.write_index(&entries)?;
        log::debug!(
            "Wrote index of {} entries, data starts at {}",
            archive.header().entry_count(),
            archive.header().data_offset()
        );

        for source in &sources {
            let input = File::open(&source.path).map_err(|e| PakError::SourceFileUnreadable {
                path: source.path.clone(),
                source: e,
            })?;
            let copied = writer.write_entry_data(&source.entry, input)?;
            if copied != source.entry.size() as u64 {
                return Err(PakError::SourceSizeChanged {
                    path: source.path.clone(),
                    expected: source.entry.size(),
                    actual: copied,
                });
            }
            log::debug!("Packed {} ({} bytes)", source.entry.name(), copied);
        }

        let file = writer
            .finish()?
            .into_inner()
            .map_err(|e| PakError::IO(e.into_error()))?;
        let archive_size = file.metadata()?.len();
        drop(file);

        let map_path = if self.emit_map {
            let map_path = map::map_path(&self.output);
            map::write_map(&map_path, &self.output, &archive, archive_size)?;
            Some(map_path)
        } else {
            None
        };

        log::info!(
            "Packed {} files into {} ({} bytes)",
            archive.entries().len(),
            self.output.display(),
            archive_size
        );

        Ok(PackReport {
            archive,
            archive_size,
            map_path,
        })
    }
}

/// Relativize scanned paths and assign each entry the running sum of the
/// sizes before it as its offset.
pub fn build_sources(root: &Path, files: Vec<PathBuf>) -> Result<Vec<PackSource>> {
    check_entry_count(files.len())?;

    let mut sources = Vec::with_capacity(files.len());
    let mut offset: u32 = 0;

    for path in files {
        let name = filename::entry_name(root, &path)?;
        let len = std::fs::metadata(&path)
            .map_err(|source| PakError::SourceFileUnreadable {
                path: path.clone(),
                source,
            })?
            .len();
        let size = u32::try_from(len).map_err(|_| PakError::EntryTooLarge {
            path: path.clone(),
            size: len,
        })?;

        let entry = PakEntry::new(name, size, offset);
        offset = offset.checked_add(size).ok_or(PakError::ArchiveTooLarge)?;
        sources.push(PackSource { path, entry });
    }

    Ok(sources)
}

/// Pack `source_dir` into `archive_path` with default options.
pub fn pack(source_dir: impl AsRef<Path>, archive_path: impl AsRef<Path>, emit_map: bool) -> Result<PackReport> {
    PackBuilder::new(source_dir, archive_path).emit_map(emit_map).run()
}
