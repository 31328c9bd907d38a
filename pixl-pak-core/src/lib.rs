//! Flat single-file "pak" archives: pack a directory tree into one blob with
//! a small index, then open it and read entries back by byte range.

pub mod error;
pub mod extract;
pub mod filename;
pub mod pak;
pub mod pakfile;
pub mod read;
pub mod scan;
pub mod spec;
pub mod write;

mod serde_util;

pub use error::{PakError, Result};
pub use extract::{ExtractEvent, ExtractReport, PakExtractBuilder};
pub use pak::{CURRENT_VERSION, MIN_VERSION, PakArchive, PakEntry, PakHeader, Version};
pub use pakfile::PakFile;
pub use write::{PackBuilder, PackReport, PakWriter, pack};

/// Open and validate an archive.
pub fn open_archive(path: impl AsRef<std::path::Path>) -> Result<PakFile> {
    PakFile::open(path)
}
