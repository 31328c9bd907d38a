mod common;

use std::fs;

use common::Fixture;
use pixl_pak_core::spec::{HEADER_SIZE, MAX_NAME_LEN};
use pixl_pak_core::{PakError, open_archive, pack};

fn packed(fx: &Fixture) -> Vec<u8> {
    let pak_path = fx.path("good.pak");
    pack(fx.src(), &pak_path, false).unwrap();
    fs::read(pak_path).unwrap()
}

fn open_bytes(fx: &Fixture, name: &str, bytes: &[u8]) -> Result<pixl_pak_core::PakFile, PakError> {
    let path = fx.path(name);
    fs::write(&path, bytes).unwrap();
    open_archive(&path)
}

#[test]
fn truncation_anywhere_in_index() {
    let fx = Fixture::new(&[("a.txt", b"hi"), ("dir/b.bin", b""), ("c", b"data")]);
    let bytes = packed(&fx);
    let data_offset = u32::from_le_bytes(bytes[12..16].try_into().unwrap()) as usize;

    for len in 0..data_offset {
        let err = open_bytes(&fx, "cut.pak", &bytes[..len]).unwrap_err();
        assert!(err.is_truncation(), "cut at {len}: {err:?}");
        if (len as u64) < HEADER_SIZE {
            assert!(matches!(err, PakError::TruncatedHeader), "cut at {len}: {err:?}");
        } else {
            assert!(matches!(err, PakError::TruncatedIndex { .. }), "cut at {len}: {err:?}");
        }
    }

    // the index alone is enough to open; data is checked on read
    let mut pak = open_bytes(&fx, "cut.pak", &bytes[..data_offset]).unwrap();
    assert_eq!(pak.entries().len(), 3);
    let err = pak.read_entry("a.txt").unwrap_err();
    assert!(matches!(err, PakError::ShortRead { expected: 2, actual: 0, .. }));
}

#[test]
fn truncated_data_fails_extraction() {
    let fx = Fixture::new(&[("a.txt", b"hi"), ("c", b"data")]);
    let bytes = packed(&fx);

    let mut pak = open_bytes(&fx, "short.pak", &bytes[..bytes.len() - 1]).unwrap();
    let out = fx.path("out");
    let err = pak.extract_all(&out).unwrap_err();
    assert!(matches!(err, PakError::ShortRead { ref name, expected: 4, actual: 3 } if name == "c"));
    // earlier entries were already written
    assert_eq!(fs::read(out.join("a.txt")).unwrap(), b"hi");
}

#[test]
fn bad_magic() {
    let fx = Fixture::new(&[("a", b"1")]);
    let mut bytes = packed(&fx);
    bytes[..8].copy_from_slice(b"NOT_APAK");

    let err = open_bytes(&fx, "magic.pak", &bytes).unwrap_err();
    assert!(matches!(err, PakError::BadMagic { found, .. } if &found == b"NOT_APAK"));

    // garbage after a wrong magic does not matter
    let mut junk = b"pixl_pak\0".to_vec();
    junk.extend_from_slice(&[0xFF; 64]);
    let err = open_bytes(&fx, "junk.pak", &junk).unwrap_err();
    assert!(matches!(err, PakError::BadMagic { .. }));
}

#[test]
fn bad_terminator() {
    let fx = Fixture::new(&[("a", b"1")]);
    let mut bytes = packed(&fx);
    bytes[8] = b'!';
    let err = open_bytes(&fx, "term.pak", &bytes).unwrap_err();
    assert!(matches!(err, PakError::BadTerminator));
}

#[test]
fn version_gate() {
    let fx = Fixture::new(&[("a", b"1")]);
    let bytes = packed(&fx);

    let mut old = bytes.clone();
    old[9..12].copy_from_slice(&[0, 9, 9]);
    let err = open_bytes(&fx, "old.pak", &old).unwrap_err();
    assert!(matches!(err, PakError::UnsupportedVersion { found, .. } if found.major == 0));

    for version in [[1, 0, 0], [1, 0, 5], [1, 4, 0], [3, 0, 0]] {
        let mut newer = bytes.clone();
        newer[9..12].copy_from_slice(&version);
        let mut pak = open_bytes(&fx, "newer.pak", &newer).unwrap();
        assert_eq!(pak.header().version().to_bytes(), version);
        assert_eq!(pak.read_entry("a").unwrap(), b"1");
    }
}

#[test]
fn suspicious_entry_count() {
    let fx = Fixture::new(&[("a", b"1")]);
    let mut bytes = packed(&fx);
    bytes[16..20].copy_from_slice(&u32::MAX.to_le_bytes());
    let err = open_bytes(&fx, "count.pak", &bytes).unwrap_err();
    assert!(matches!(err, PakError::SuspiciousEntryCount(u32::MAX)));
}

#[test]
fn name_too_long() {
    let fx = Fixture::new(&[]);
    let mut bytes = b"PIXL_PAK\0".to_vec();
    bytes.extend_from_slice(&[1, 0, 0]);
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend(std::iter::repeat_n(b'n', MAX_NAME_LEN + 10));
    bytes.push(0);
    bytes.extend_from_slice(&[0; 8]);

    let err = open_bytes(&fx, "name.pak", &bytes).unwrap_err();
    assert!(matches!(err, PakError::NameTooLong { index: 0, limit: MAX_NAME_LEN }));
}

#[test]
fn unsafe_names_are_not_extracted() {
    let fx = Fixture::new(&[]);
    let mut bytes = b"PIXL_PAK\0".to_vec();
    bytes.extend_from_slice(&[1, 0, 0]);
    let name = b"../escape.txt";
    let data_offset = HEADER_SIZE as u32 + name.len() as u32 + 1 + 8;
    bytes.extend_from_slice(&data_offset.to_le_bytes());
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(name);
    bytes.push(0);
    bytes.extend_from_slice(&3u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(b"bad");

    let mut pak = open_bytes(&fx, "evil.pak", &bytes).unwrap();
    // reading by name is fine, writing it to disk is not
    assert_eq!(pak.read_entry("../escape.txt").unwrap(), b"bad");
    let out = fx.path("out");
    let err = pak.extract_all(&out).unwrap_err();
    assert!(matches!(err, PakError::UnsafeEntryName(_)));
    assert!(!fx.path("escape.txt").exists());
}

#[test]
fn missing_archive() {
    let fx = Fixture::new(&[]);
    let err = open_archive(fx.path("nope.pak")).unwrap_err();
    assert!(matches!(err, PakError::CannotOpenArchive { .. }));
}
