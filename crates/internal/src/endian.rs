//! Endianness utility functions

/// Read a little-endian u64 from the first eight bytes of `bytes`
///
/// Panics if `bytes` is shorter than eight bytes.
#[inline]
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Load a 32-byte little-endian integer into four u64 limbs
#[inline]
pub fn u64x4_from_le_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    [
        u64_from_le_bytes(&bytes[0..8]),
        u64_from_le_bytes(&bytes[8..16]),
        u64_from_le_bytes(&bytes[16..24]),
        u64_from_le_bytes(&bytes[24..32]),
    ]
}

/// Store four u64 limbs as a 32-byte little-endian integer
#[inline]
pub fn u64x4_to_le_bytes(limbs: &[u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    out
}
