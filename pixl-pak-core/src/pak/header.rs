use serde::Serialize;

use crate::serde_util::serialize_magic;
use crate::spec;

/// Version written by this crate.
pub const CURRENT_VERSION: Version = Version::new(1, 0, 0);
/// Oldest version the reader accepts. Patch is informational only.
pub const MIN_VERSION: Version = Version::new(CURRENT_VERSION.major, CURRENT_VERSION.minor, 0);

/// Format version, ordered by major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Version {
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self { major, minor, patch }
    }

    pub fn is_supported(&self) -> bool {
        *self >= MIN_VERSION
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.major, self.minor, self.patch]
    }
}

impl From<[u8; 3]> for Version {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Clone, Serialize)]
pub struct PakHeader {
    #[serde(serialize_with = "serialize_magic")]
    magic: [u8; 9],
    version: Version,
    data_offset: u32,
    entry_count: u32,
}

impl PakHeader {
    /// Header for a freshly written archive at the current version.
    pub fn new(data_offset: u32, entry_count: u32) -> Self {
        Self {
            magic: spec::MAGIC,
            version: CURRENT_VERSION,
            data_offset,
            entry_count,
        }
    }

    #[inline]
    pub fn magic(&self) -> [u8; 9] {
        self.magic
    }

    /// Magic without its NUL terminator.
    pub fn magic_str(&self) -> &str {
        std::str::from_utf8(&self.magic[..8]).unwrap_or("")
    }

    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    pub fn data_offset(&self) -> u32 {
        self.data_offset
    }

    #[inline]
    pub fn entry_count(&self) -> u32 {
        self.entry_count
    }
}

impl From<spec::Header> for PakHeader {
    fn from(value: spec::Header) -> Self {
        Self {
            magic: value.magic,
            version: Version::from(value.version),
            data_offset: value.data_offset,
            entry_count: value.entry_count,
        }
    }
}

impl From<&PakHeader> for spec::Header {
    fn from(value: &PakHeader) -> Self {
        Self {
            magic: value.magic,
            version: value.version.to_bytes(),
            data_offset: value.data_offset,
            entry_count: value.entry_count,
        }
    }
}

impl std::fmt::Debug for PakHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PakHeader")
            .field("magic", &self.magic_str())
            .field("version", &format_args!("{}", self.version))
            .field("data_offset", &self.data_offset)
            .field("entry_count", &self.entry_count)
            .finish()
    }
}
