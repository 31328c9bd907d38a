use std::path::PathBuf;

use crate::pak::Version;

pub type Result<T> = std::result::Result<T, PakError>;

#[derive(Debug, thiserror::Error)]
pub enum PakError {
    #[error("Upstream IO Error: {0}")]
    IO(#[from] std::io::Error),

    // pack
    #[error("Source directory contains no files: {}", .0.display())]
    EmptySource(PathBuf),
    #[error("Path {} is not inside source directory {}", path.display(), root.display())]
    PathOutsideSource { path: PathBuf, root: PathBuf },
    #[error("Invalid entry name for {}: {reason}", path.display())]
    InvalidEntryName { path: PathBuf, reason: &'static str },
    #[error("File {} is too large for a pak entry: {size} bytes", path.display())]
    EntryTooLarge { path: PathBuf, size: u64 },
    #[error("Archive exceeds the 4 GiB addressable limit")]
    ArchiveTooLarge,
    #[error("Too many entries: {count}, limit is {limit}")]
    TooManyEntries { count: usize, limit: u32 },
    #[error("Cannot create archive {}: {source}", path.display())]
    CannotCreateArchive { path: PathBuf, source: std::io::Error },
    #[error("Cannot read source file {}: {source}", path.display())]
    SourceFileUnreadable { path: PathBuf, source: std::io::Error },
    #[error("Source file {} changed while packing: expected {expected} bytes, got {actual}", path.display())]
    SourceSizeChanged { path: PathBuf, expected: u32, actual: u64 },
    #[error("Cannot write map file {}: {source}", path.display())]
    MapFile { path: PathBuf, source: std::io::Error },

    // open
    #[error("Cannot open archive {}: {source}", path.display())]
    CannotOpenArchive { path: PathBuf, source: std::io::Error },
    #[error("Truncated pak header")]
    TruncatedHeader,
    #[error("Pak magic is not NUL terminated")]
    BadTerminator,
    #[error("Invalid Pak file magic: expected {expected:X?}, found {found:X?}")]
    BadMagic { expected: [u8; 8], found: [u8; 8] },
    #[error("Unsupported Pak version: {found}, minimum is {minimum}")]
    UnsupportedVersion { found: Version, minimum: Version },
    #[error("Suspicious entry count {0}, archive is probably corrupted")]
    SuspiciousEntryCount(u32),
    #[error("Name of entry {index} exceeds {limit} bytes")]
    NameTooLong { index: u32, limit: usize },
    #[error("Truncated index at entry {index}")]
    TruncatedIndex { index: u32 },
    #[error("Cannot reopen archive {} for reading: {source}", path.display())]
    CannotReopenArchive { path: PathBuf, source: std::io::Error },

    // extract
    #[error("Archive has no entries to extract")]
    EmptyArchive,
    #[error("Output directory is empty")]
    EmptyOutputDir,
    #[error("Entry name `{0}` escapes the output directory")]
    UnsafeEntryName(String),
    #[error("Short read on entry `{name}`: expected {expected} bytes, got {actual}")]
    ShortRead { name: String, expected: u32, actual: u64 },
    #[error("Entry `{0}` not found in pak")]
    EntryNotFound(String),
}

impl PakError {
    /// Whether the error means the archive ended before its header or index did.
    pub fn is_truncation(&self) -> bool {
        matches!(self, PakError::TruncatedHeader | PakError::TruncatedIndex { .. })
    }
}
