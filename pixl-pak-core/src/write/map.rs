use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PakError, Result};
use crate::pak::PakArchive;

/// `<archive>.map`, next to the archive.
pub fn map_path(archive_path: &Path) -> PathBuf {
    let mut path = archive_path.as_os_str().to_owned();
    path.push(".map");
    PathBuf::from(path)
}

/// Human readable dump of an archive's header and index. Never read back.
pub fn render_map<W>(out: &mut W, archive_path: &Path, archive: &PakArchive, archive_size: u64) -> std::io::Result<()>
where
    W: Write,
{
    let header = archive.header();
    let size_mb = archive_size as f64 / (1024.0 * 1024.0);

    writeln!(out, "Pak file: {}", archive_path.display())?;
    writeln!(out, "Size: {size_mb:.6} MB")?;
    writeln!(out, "Header:")?;
    writeln!(out, "Magic: {}", header.magic_str())?;
    writeln!(out, "Version: {}", header.version())?;
    writeln!(out, "Data Offset: {}", header.data_offset())?;
    writeln!(out, "File Count: {}", header.entry_count())?;
    writeln!(out, "Files:")?;
    for entry in archive.entries() {
        writeln!(
            out,
            "  Name: {}, Size: {}, Offset: {}",
            entry.name(),
            entry.size(),
            entry.offset()
        )?;
    }
    Ok(())
}

pub fn write_map(map_path: &Path, archive_path: &Path, archive: &PakArchive, archive_size: u64) -> Result<()> {
    let to_err = |source: std::io::Error| PakError::MapFile {
        path: map_path.to_path_buf(),
        source,
    };

    let file = File::create(map_path).map_err(to_err)?;
    let mut out = BufWriter::new(file);
    render_map(&mut out, archive_path, archive, archive_size).map_err(to_err)?;
    out.flush().map_err(to_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pak::{PakEntry, PakHeader};

    #[test]
    fn map_layout() {
        let archive = PakArchive::new(
            PakHeader::new(52, 2),
            vec![
                PakEntry::new("a.txt".to_string(), 2, 0),
                PakEntry::new("dir/b.bin".to_string(), 0, 2),
            ],
        );
        let mut out = Vec::new();
        render_map(&mut out, Path::new("out.pak"), &archive, 1024 * 1024 + 524_288).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "\
Pak file: out.pak
Size: 1.500000 MB
Header:
Magic: PIXL_PAK
Version: 1.0.0
Data Offset: 52
File Count: 2
Files:
  Name: a.txt, Size: 2, Offset: 0
  Name: dir/b.bin, Size: 0, Offset: 2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn sibling_path() {
        assert_eq!(map_path(Path::new("/tmp/game.pak")), PathBuf::from("/tmp/game.pak.map"));
    }
}
