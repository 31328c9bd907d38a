use serde::Serializer;

/// Serialize a NUL-terminated magic tag as its text part.
pub fn serialize_magic<S>(value: &[u8; 9], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let end = value.iter().position(|&b| b == 0).unwrap_or(value.len());
    serializer.serialize_str(&String::from_utf8_lossy(&value[..end]))
}
