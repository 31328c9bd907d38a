use std::io::Read;

use crate::error::Result;
use crate::pak::{PakArchive, PakEntry, PakHeader};
use crate::spec;

mod entry;

pub use entry::PakEntryReader;

/// Parse header and index. Leaves `reader` positioned at the end of the index.
pub fn read_archive<R>(reader: &mut R) -> Result<PakArchive>
where
    R: Read,
{
    // read header
    let spec_header = spec::Header::from_reader(reader)?;
    let header = PakHeader::from(spec_header);

    // read entries
    let entries = read_entries(reader, header.entry_count())?;

    Ok(PakArchive::new(header, entries))
}

fn read_entries<R>(reader: &mut R, entry_count: u32) -> Result<Vec<PakEntry>>
where
    R: Read,
{
    // the count is capped by the header check, but don't trust it for allocation
    let mut entries = Vec::with_capacity(entry_count.min(4096) as usize);
    for index in 0..entry_count {
        let spec_entry = spec::Entry::from_reader(reader, index)?;
        let entry = PakEntry::try_from(spec_entry)?;
        entries.push(entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::PakError;

    fn index_bytes(names: &[&str]) -> Vec<u8> {
        let mut bytes = spec::MAGIC.to_vec();
        bytes.extend_from_slice(&[1, 0, 0]);
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&(names.len() as u32).to_le_bytes());
        for (i, name) in names.iter().enumerate() {
            bytes.extend_from_slice(name.as_bytes());
            bytes.push(0);
            bytes.extend_from_slice(&(i as u32 + 1).to_le_bytes());
            bytes.extend_from_slice(&(i as u32 * 10).to_le_bytes());
        }
        bytes
    }

    #[test]
    fn preserves_index_order() {
        let bytes = index_bytes(&["z", "a", "m/n"]);
        let archive = read_archive(&mut Cursor::new(&bytes)).unwrap();
        let names: Vec<_> = archive.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["z", "a", "m/n"]);
        assert_eq!(archive.entries()[2].size(), 3);
        assert_eq!(archive.entries()[2].offset(), 20);
    }

    #[test]
    fn count_larger_than_index() {
        let mut bytes = index_bytes(&["a"]);
        bytes[16..20].copy_from_slice(&2u32.to_le_bytes());
        let err = read_archive(&mut Cursor::new(&bytes)).unwrap_err();
        assert!(matches!(err, PakError::TruncatedIndex { index: 1 }));
    }
}
