//! Stable token hashing for the fallback embedder.
//!
//! Fallback vectors must come out identical across processes, machines and releases, so the
//! hash is BLAKE3 (fully specified, unseeded) rather than a randomized `std` hasher.

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// The first 8 bytes of the digest are read little-endian. Truncation is fine here: the value
/// only picks an embedding bucket, and bucket collisions are already expected because
/// `hash % dim` folds 2^64 values into a few hundred buckets.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Hashes a single token string.
#[inline]
pub fn hash_token(token: &str) -> u64 {
    hash_to_u64(token.as_bytes())
}

/// Maps a token to a bucket in `[0, dim)`.
///
/// Returns `None` when `dim` is zero.
#[inline]
pub fn token_bucket(token: &str, dim: usize) -> Option<usize> {
    if dim == 0 {
        return None;
    }
    Some((hash_token(token) % dim as u64) as usize)
}
