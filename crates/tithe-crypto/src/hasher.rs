use tithe_types::LinkHash;

/// Fixed 256-bit digest over raw bytes.
///
/// BLAKE3, unkeyed and untagged: callers hand in the exact byte string to be
/// digested and nothing is prepended. The chain formula depends on the input
/// being hashed as-is.
pub fn digest(data: &[u8]) -> LinkHash {
    LinkHash::from_hash(*blake3::hash(data).as_bytes())
}
