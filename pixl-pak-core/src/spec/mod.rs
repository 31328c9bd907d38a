//! On-disk layout of a pak archive.
//!
//! ```text
//! 0           magic "PIXL_PAK\0"     9 bytes
//! 9           major, minor, patch    3 bytes
//! 12          data_offset            u32 LE
//! 16          entry_count            u32 LE
//! 20          entries                { name\0, size: u32 LE, offset: u32 LE } * entry_count
//! data_offset file data, in entry order
//! ```

mod entry;
mod header;

pub use entry::Entry;
pub use header::Header;

/// Format tag plus its NUL terminator.
pub const MAGIC: [u8; 9] = *b"PIXL_PAK\0";
pub const HEADER_SIZE: u64 = 20;
/// Byte position of the `data_offset` field, patched after the index is written.
pub const DATA_OFFSET_POS: u64 = 12;
pub const MAX_ENTRY_COUNT: u32 = 1_000_000;
pub const MAX_NAME_LEN: usize = 1024;

/// Map an unexpected EOF to a format error, pass anything else through as IO.
pub(crate) fn eof_as(err: std::io::Error, on_eof: crate::error::PakError) -> crate::error::PakError {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        on_eof
    } else {
        crate::error::PakError::IO(err)
    }
}
