//! Index and bitmask arithmetic for the packed wide tier.
//!
//! Every wide-tier byte packs 8 consecutive code points. Bit 7 (MSB) holds
//! the lowest code point of the group and bit 0 (LSB) the highest, so a
//! group's members read left to right in ascending order.
//!
//! All functions here take code points `>= 256`; the byte tier is handled
//! by the caller.

use crate::constants::{BYTE_TIER_LEN, GROUP_MASK, GROUP_SHIFT, WIDE_GROUP_OFFSET};

/// Number of wide-tier bytes required to hold `cp`.
///
/// Equal to the 1-based position of the byte that packs `cp`.
///
/// # Performance
/// O(1) - one shift and one subtraction
#[inline(always)]
pub fn required_len(cp: u32) -> usize {
    debug_assert!(cp >= BYTE_TIER_LEN as u32);
    ((cp >> GROUP_SHIFT) - WIDE_GROUP_OFFSET) as usize
}

/// 0-based wide-tier slot that packs `cp`.
#[inline(always)]
pub fn slot_of(cp: u32) -> usize {
    required_len(cp) - 1
}

/// Single-bit selector for `cp` within its packed byte: bit `7 - (cp & 7)`.
///
/// # Performance
/// O(1) - one mask and one shift
#[inline(always)]
pub fn bit_mask(cp: u32) -> u8 {
    1u8 << (7 - (cp & GROUP_MASK))
}

/// First (lowest) code point packed into wide-tier `slot`.
#[inline(always)]
pub fn slot_base(slot: usize) -> u32 {
    (slot as u32 + WIDE_GROUP_OFFSET + 1) << GROUP_SHIFT
}

/// Set the bit for `cp`.
///
/// The caller must have grown `bytes` to at least [`required_len`]`(cp)`.
///
/// # Returns
/// `true` if the bit was previously clear
#[inline]
pub fn set_bit(bytes: &mut [u8], cp: u32) -> bool {
    let byte = &mut bytes[slot_of(cp)];
    let mask = bit_mask(cp);
    let was_clear = *byte & mask == 0;
    *byte |= mask;
    was_clear
}

/// Clear the bit for `cp`.
///
/// Code points beyond the end of `bytes` are treated as already clear.
///
/// # Returns
/// `true` if the bit was previously set
#[inline]
pub fn clear_bit(bytes: &mut [u8], cp: u32) -> bool {
    let Some(byte) = bytes.get_mut(slot_of(cp)) else {
        return false;
    };
    let mask = bit_mask(cp);
    let was_set = *byte & mask != 0;
    *byte &= !mask;
    was_set
}

/// Check whether the bit for `cp` is set.
///
/// Code points beyond the end of `bytes` are reported as clear; the tier is
/// never grown by a query.
#[inline]
pub fn is_set(bytes: &[u8], cp: u32) -> bool {
    match bytes.get(slot_of(cp)) {
        Some(byte) => byte & bit_mask(cp) != 0,
        None => false,
    }
}
