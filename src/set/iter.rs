//! Iterator support for CodePointSet traversal.
//!
//! # Optimizations
//! - Byte tier scanned as a flat `[bool; 256]`
//! - Wide tier walked one packed byte at a time; empty bytes are skipped
//!   with a single compare
//! - `leading_zeros` picks the lowest remaining member of a byte
//!
//! # Performance
//! - O(1) amortized per member, plus one compare per empty wide byte

use crate::bitmap;
use crate::constants::{BYTE_TIER_LEN, MAX_CODE_POINT};
use crate::set::CodePointSet;
use core::iter::FusedIterator;
use core::ops::{Bound, RangeBounds};

/// Iterator over members in ascending order.
///
/// Created by [`CodePointSet::iter`]. Knows the exact number of members
/// left, so `len()` and `size_hint()` are exact.
///
/// # Algorithm
/// 1. Scan byte-tier flags 0..256
/// 2. For each wide-tier byte, copy it into `remaining_bits`
/// 3. Yield `slot_base + leading_zeros` and clear that bit until the
///    byte is exhausted, then move to the next slot
///
/// # Example
/// ```rust
/// use codepoint_set::CodePointSet;
///
/// let set: CodePointSet = "hello".chars().collect();
/// let letters: Vec<u32> = set.iter().collect();
/// assert_eq!(letters, vec![0x65, 0x68, 0x6C, 0x6F]);
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    byte_tier: &'a [bool; BYTE_TIER_LEN],

    wide_tier: &'a [u8],

    /// Next byte-tier index to inspect (256 once the tier is done)
    byte_pos: usize,

    /// Wide-tier slot that `remaining_bits` was loaded from
    slot: usize,

    /// Unvisited bits of the current wide byte
    remaining_bits: u8,

    /// Members not yet yielded
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(set: &'a CodePointSet) -> Self {
        let wide_tier = set.wide_tier().unwrap_or(&[]);
        Self {
            byte_tier: set.byte_tier(),
            wide_tier,
            byte_pos: 0,
            slot: 0,
            remaining_bits: wide_tier.first().copied().unwrap_or(0),
            remaining: set.len(),
        }
    }

    #[inline(always)]
    fn advance(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }

        while self.byte_pos < BYTE_TIER_LEN {
            let cp = self.byte_pos;
            self.byte_pos += 1;
            if self.byte_tier[cp] {
                self.remaining -= 1;
                return Some(cp as u32);
            }
        }

        loop {
            if self.remaining_bits != 0 {
                let offset = self.remaining_bits.leading_zeros();
                self.remaining_bits &= !(0x80u8 >> offset);
                self.remaining -= 1;
                return Some(bitmap::slot_base(self.slot) + offset);
            }

            self.slot += 1;
            // `remaining` is exact, so a member is always ahead of us here
            self.remaining_bits = *self.wide_tier.get(self.slot)?;
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over members within a window, in ascending order.
///
/// Created by [`CodePointSet::range`]. Each step is a forward search from
/// the last yielded code point.
///
/// # Example
/// ```rust
/// use codepoint_set::CodePointSet;
///
/// let set: CodePointSet = ('a'..='z').collect();
/// let window: Vec<u32> = set.range(0x78..).collect();
/// assert_eq!(window, vec![0x78, 0x79, 0x7A]);
/// ```
#[derive(Clone)]
pub struct RangeIter<'a> {
    set: &'a CodePointSet,

    /// Next candidate code point (inclusive)
    next: u32,

    /// Last code point in the window (inclusive)
    end: u32,

    done: bool,
}

impl<'a> RangeIter<'a> {
    pub(crate) fn new<R: RangeBounds<u32>>(set: &'a CodePointSet, range: R) -> Self {
        let start = match range.start_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => n.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => Some(n.min(MAX_CODE_POINT)),
            Bound::Excluded(&n) => n.checked_sub(1).map(|n| n.min(MAX_CODE_POINT)),
            Bound::Unbounded => Some(MAX_CODE_POINT),
        };

        match (start, end) {
            (Some(start), Some(end)) if start <= end => Self {
                set,
                next: start,
                end,
                done: false,
            },
            _ => Self {
                set,
                next: 0,
                end: 0,
                done: true,
            },
        }
    }
}

impl Iterator for RangeIter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.set.next_member(self.next) {
            Some(cp) if cp <= self.end => {
                // `end` is clamped to U+10FFFF, so `cp + 1` cannot overflow
                self.next = cp + 1;
                self.done = cp == self.end;
                Some(cp)
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for RangeIter<'_> {}
