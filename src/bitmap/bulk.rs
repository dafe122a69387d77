//! Whole-tier operations: zeroing, inversion and growth.

use crate::constants::BYTE_TIER_LEN;
use alloc::vec::Vec;

/// Clear every flag in the byte tier.
#[inline]
pub fn clear_flags(flags: &mut [bool; BYTE_TIER_LEN]) {
    flags.fill(false);
}

/// Zero every packed byte, keeping the slice length.
#[inline]
pub fn clear_all(bytes: &mut [u8]) {
    bytes.fill(0);
}

/// Write the complement of `src` flags into `dst`.
#[inline]
pub fn invert_flags(src: &[bool; BYTE_TIER_LEN], dst: &mut [bool; BYTE_TIER_LEN]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d = !*s;
    }
}

/// Write the complement of `src` into the front of `dst`.
///
/// Bytes of `dst` past `src.len()` are set to `0xFF`, since code points
/// outside the source tier are not members of the source.
///
/// # Performance
/// O(dst.len())
pub fn invert_into(src: &[u8], dst: &mut [u8]) {
    debug_assert!(src.len() <= dst.len());
    let (head, tail) = dst.split_at_mut(src.len());
    for (d, s) in head.iter_mut().zip(src.iter()) {
        *d = !*s;
    }
    tail.fill(0xFF);
}

/// Grow `bytes` to exactly `new_len`, zero-filling the new tail.
///
/// Existing content is preserved. Does nothing if `bytes` is already at
/// least `new_len` long; the tier never shrinks.
pub fn grow_zeroed(bytes: &mut Vec<u8>, new_len: usize) {
    if new_len <= bytes.len() {
        return;
    }
    bytes.reserve_exact(new_len - bytes.len());
    bytes.resize(new_len, 0);
}
