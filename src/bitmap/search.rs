//! Search operations for finding members in either tier.
//!
//! Used by enumeration and by `first`/`last`. Packed bytes are MSB-first,
//! so the lowest member of a byte is found with `leading_zeros` and the
//! highest with `trailing_zeros`.

use crate::bitmap::basic::{slot_base, slot_of};
use crate::constants::{BYTE_TIER_LEN, GROUP_MASK};

/// Find the first set flag at index `>= from` in the byte tier.
///
/// # Returns
/// Code point of the flag, or None if no flag at or after `from` is set
#[inline]
pub fn next_set_flag(flags: &[bool; BYTE_TIER_LEN], from: u32) -> Option<u32> {
    let from = from as usize;
    if from >= BYTE_TIER_LEN {
        return None;
    }
    flags[from..]
        .iter()
        .position(|&f| f)
        .map(|offset| (from + offset) as u32)
}

/// Find the last set flag at index `<= upto` in the byte tier.
#[inline]
pub fn prev_set_flag(flags: &[bool; BYTE_TIER_LEN], upto: u32) -> Option<u32> {
    let end = (upto as usize).min(BYTE_TIER_LEN - 1);
    flags[..=end].iter().rposition(|&f| f).map(|idx| idx as u32)
}

/// Find the smallest member `>= from` in the packed wide tier.
///
/// `from` below 256 starts the search at the first wide code point.
///
/// # Performance
/// O(n) in the number of bytes skipped; one `leading_zeros` per hit
pub fn next_set_bit(bytes: &[u8], from: u32) -> Option<u32> {
    let from = from.max(BYTE_TIER_LEN as u32);
    let start = slot_of(from);
    if start >= bytes.len() {
        return None;
    }

    // Drop bits for code points below `from` in the first byte
    let first = bytes[start] & (0xFFu8 >> (from & GROUP_MASK));
    if first != 0 {
        return Some(slot_base(start) + first.leading_zeros());
    }

    bytes[start + 1..]
        .iter()
        .position(|&b| b != 0)
        .map(|offset| {
            let slot = start + 1 + offset;
            slot_base(slot) + bytes[slot].leading_zeros()
        })
}

/// Find the largest member `<= upto` in the packed wide tier.
///
/// Returns None for `upto < 256`.
pub fn prev_set_bit(bytes: &[u8], upto: u32) -> Option<u32> {
    if upto < BYTE_TIER_LEN as u32 || bytes.is_empty() {
        return None;
    }

    let slot = slot_of(upto);
    let (end, first) = if slot < bytes.len() {
        // Keep bits for code points up to and including `upto`
        (slot, bytes[slot] & (0xFFu8 << (7 - (upto & GROUP_MASK))))
    } else {
        let last = bytes.len() - 1;
        (last, bytes[last])
    };

    if first != 0 {
        return Some(slot_base(end) + 7 - first.trailing_zeros());
    }

    bytes[..end]
        .iter()
        .rposition(|&b| b != 0)
        .map(|slot| slot_base(slot) + 7 - bytes[slot].trailing_zeros())
}
