//! Main CodePointSet structure.

use crate::bitmap;
use crate::constants::{
    BITS_PER_BYTE, BYTE_TIER_LEN, CODESPACE_LEN, GROWTH_DENOMINATOR, GROWTH_NUMERATOR, HASH_TAG,
    MAX_CODE_POINT, MAX_WIDE_BYTES,
};
use crate::error::{CodePointSetError, Result};
use crate::set::{Iter, RangeIter};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{RangeBounds, RangeInclusive};

/// Set of Unicode code points with O(1) membership and mutation.
///
/// Built for character classification tables in parsers: filled once from
/// a handful of ranges, then queried many times per parse.
///
/// # Architecture
/// - Byte tier: `[bool; 256]` flags for U+0000..=U+00FF, always present
/// - Wide tier: optional `Vec<u8>` packing 8 code points per byte from
///   U+0100 upward, grown on insertion only
/// - Cardinality: counter kept in step with every mutation, never rescanned
///
/// # Performance Characteristics
/// - contains: O(1), no allocation
/// - insert: O(1) amortized; growth is 1.5x the required length
/// - remove: O(1), never shrinks the wide tier
/// - len: O(1)
///
/// # Example
/// ```rust
/// use codepoint_set::CodePointSet;
///
/// let mut set = CodePointSet::new();
/// set.insert('A' as u32).unwrap();
/// assert!(set.contains(0x41));
/// assert!(!set.contains(0x42));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone)]
pub struct CodePointSet {
    /// Flags for code points 0-255, indexed directly
    byte_tier: [bool; BYTE_TIER_LEN],

    /// Packed flags for code points >= 256; None until first wide insert
    wide_tier: Option<Vec<u8>>,

    /// Number of members across both tiers
    len: usize,
}

impl CodePointSet {
    /// Create an empty set with no wide tier.
    ///
    /// # Performance
    /// O(1) - no heap allocation
    pub fn new() -> Self {
        Self {
            byte_tier: [false; BYTE_TIER_LEN],
            wide_tier: None,
            len: 0,
        }
    }

    /// Create an empty set pre-sized to hold code points below `capacity`.
    ///
    /// Hints of 256 or less allocate nothing. Larger hints allocate the wide
    /// tier up front, capped at the full Unicode range, so that
    /// [`capacity`](Self::capacity) is at least `capacity` rounded up to a
    /// multiple of 8.
    ///
    /// # Example
    /// ```rust
    /// use codepoint_set::CodePointSet;
    ///
    /// let set = CodePointSet::with_capacity(0x3000);
    /// assert!(set.capacity() >= 0x3000);
    /// assert!(set.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let mut set = Self::new();
        if capacity > BYTE_TIER_LEN {
            let highest = (capacity - 1).min(MAX_CODE_POINT as usize) as u32;
            set.wide_tier = Some(vec![0; bitmap::required_len(highest)]);
        }
        set
    }

    /// Build a set from inclusive `char` ranges.
    ///
    /// Inverted ranges (`lo > hi`) contribute nothing.
    ///
    /// # Example
    /// ```rust
    /// use codepoint_set::CodePointSet;
    ///
    /// let name_start = CodePointSet::from_ranges(&[('A', 'Z'), ('_', '_'), ('a', 'z')]);
    /// assert_eq!(name_start.len(), 53);
    /// ```
    pub fn from_ranges(ranges: &[(char, char)]) -> Self {
        let mut set = Self::new();
        for &(lo, hi) in ranges {
            set.extend(lo..=hi);
        }
        set
    }

    /// Check whether `cp` is a member.
    ///
    /// Never fails and never grows the set. Code points past the current
    /// wide tier, including values above U+10FFFF, are not members.
    ///
    /// # Performance
    /// O(1) - one array load, or one shift/mask test on a packed byte
    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        if cp < BYTE_TIER_LEN as u32 {
            return self.byte_tier[cp as usize];
        }
        match &self.wide_tier {
            Some(wide) => bitmap::is_set(wide, cp),
            None => false,
        }
    }

    /// Insert `cp` into the set.
    ///
    /// Grows the wide tier when `cp` lies past its end. The new length is
    /// `ceil(need * 1.5)` bytes, capped at the size needed for U+10FFFF.
    ///
    /// # Returns
    /// * `Ok(true)` if `cp` was newly inserted
    /// * `Ok(false)` if `cp` was already a member
    ///
    /// # Errors
    /// [`CodePointSetError::OutOfRange`] if `cp > 0x10FFFF`. The set is left
    /// unchanged.
    ///
    /// # Example
    /// ```rust
    /// use codepoint_set::CodePointSet;
    ///
    /// let mut set = CodePointSet::new();
    /// assert_eq!(set.insert(0x1F600), Ok(true));
    /// assert_eq!(set.insert(0x1F600), Ok(false));
    /// assert!(set.insert(0x110000).is_err());
    /// ```
    pub fn insert(&mut self, cp: u32) -> Result<bool> {
        if cp > MAX_CODE_POINT {
            tracing::debug!(code_point = cp, "rejecting insert above U+10FFFF");
            return Err(CodePointSetError::OutOfRange { code_point: cp });
        }
        Ok(self.insert_valid(cp))
    }

    /// Insert a code point in `0x100..=0x10FFFF`, growing the wide tier.
    fn insert_wide(&mut self, cp: u32) -> bool {
        let wide = self.reserve_wide(bitmap::required_len(cp));
        let inserted = bitmap::set_bit(wide, cp);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Insert a code point already known to be in the codespace.
    fn insert_valid(&mut self, cp: u32) -> bool {
        if cp >= BYTE_TIER_LEN as u32 {
            return self.insert_wide(cp);
        }
        let flag = &mut self.byte_tier[cp as usize];
        if *flag {
            return false;
        }
        *flag = true;
        self.len += 1;
        true
    }

    /// Make sure the wide tier is at least `need` bytes long.
    fn reserve_wide(&mut self, need: usize) -> &mut Vec<u8> {
        debug_assert!(need <= MAX_WIDE_BYTES);
        let wide = self.wide_tier.get_or_insert_with(Vec::new);
        if wide.len() < need {
            let new_len = grown_len(need);
            tracing::trace!(from = wide.len(), to = new_len, "growing wide tier");
            bitmap::grow_zeroed(wide, new_len);
        }
        wide
    }

    /// Remove `cp` from the set.
    ///
    /// # Returns
    /// * `Some(cp)` if `cp` was a member
    /// * `None` if it was absent
    pub fn remove(&mut self, cp: u32) -> Option<u32> {
        if cp < BYTE_TIER_LEN as u32 {
            let flag = &mut self.byte_tier[cp as usize];
            if !*flag {
                return None;
            }
            *flag = false;
            self.len -= 1;
            return Some(cp);
        }

        let wide = self.wide_tier.as_deref_mut()?;
        if !bitmap::clear_bit(wide, cp) {
            return None;
        }
        self.len -= 1;
        Some(cp)
    }

    /// Remove `cp`, falling back to `on_absent` when it is not a member.
    ///
    /// A removed code point is converted into `R`; otherwise the handler's
    /// result is returned as-is. Lets call sites pick an ignore, sentinel or
    /// optional policy without branching.
    ///
    /// # Example
    /// ```rust
    /// use codepoint_set::CodePointSet;
    ///
    /// let mut set = CodePointSet::new();
    /// set.insert(0x41).unwrap();
    /// set.insert(0x42).unwrap();
    /// assert_eq!(set.remove_or_else(0x41, || u32::MAX), 0x41);
    /// assert_eq!(set.remove_or_else(0x41, || u32::MAX), u32::MAX);
    ///
    /// let removed: Option<u32> = set.remove_or_else(0x42, || None);
    /// assert_eq!(removed, Some(0x42));
    /// ```
    pub fn remove_or_else<R, F>(&mut self, cp: u32, on_absent: F) -> R
    where
        R: From<u32>,
        F: FnOnce() -> R,
    {
        match self.remove(cp) {
            Some(cp) => R::from(cp),
            None => on_absent(),
        }
    }

    /// Remove `cp`, reporting absence as an error.
    ///
    /// # Errors
    /// [`CodePointSetError::NotFound`] if `cp` was not a member.
    pub fn try_remove(&mut self, cp: u32) -> Result<u32> {
        self.remove(cp)
            .ok_or(CodePointSetError::NotFound { code_point: cp })
    }

    /// Insert every code point in `range`, in ascending order.
    ///
    /// An inverted range is a no-op. Cost is linear in the range length.
    ///
    /// # Errors
    /// [`CodePointSetError::OutOfRange`] on the first code point above
    /// U+10FFFF. Code points before it stay inserted.
    pub fn insert_range(&mut self, range: RangeInclusive<u32>) -> Result<()> {
        for cp in range {
            self.insert(cp)?;
        }
        Ok(())
    }

    /// Remove every code point in `range`, ignoring absent ones.
    ///
    /// An inverted or already exhausted range is a no-op.
    pub fn remove_range(&mut self, range: RangeInclusive<u32>) {
        // An exhausted range still reports its original bounds
        if range.is_empty() {
            return;
        }
        // Nothing above U+10FFFF can be a member
        let hi = (*range.end()).min(MAX_CODE_POINT);
        for cp in *range.start()..=hi {
            self.remove(cp);
        }
    }

    /// Check whether every code point in `range` is a member.
    ///
    /// Vacuously `true` for an inverted range. Stops at the first missing
    /// code point.
    pub fn contains_range(&self, range: RangeInclusive<u32>) -> bool {
        if range.is_empty() {
            return true;
        }
        if *range.end() > MAX_CODE_POINT {
            return false;
        }
        range.into_iter().all(|cp| self.contains(cp))
    }

    /// Number of members.
    ///
    /// # Performance
    /// O(1) - returns the maintained counter
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of code points the set can hold without growing.
    ///
    /// `256 + 8 * wide_tier.len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        BYTE_TIER_LEN + self.wide_len() * BITS_PER_BYTE as usize
    }

    #[inline]
    fn wide_len(&self) -> usize {
        self.wide_tier.as_ref().map_or(0, Vec::len)
    }

    /// Remove every member, keeping allocated storage.
    ///
    /// [`capacity`](Self::capacity) is unchanged afterwards.
    pub fn clear(&mut self) {
        bitmap::clear_flags(&mut self.byte_tier);
        if let Some(wide) = self.wide_tier.as_deref_mut() {
            bitmap::clear_all(wide);
        }
        self.len = 0;
    }

    /// Build the set of all code points in U+0000..=U+10FFFF not in `self`.
    ///
    /// Always allocates a full-extent wide tier (~136 KiB). Meant for
    /// occasional use when building tables, not for hot paths.
    ///
    /// # Example
    /// ```rust
    /// use codepoint_set::CodePointSet;
    ///
    /// let mut set = CodePointSet::new();
    /// set.insert(0x41).unwrap();
    /// let not_a = set.complement();
    /// assert!(!not_a.contains(0x41));
    /// assert!(not_a.contains(0x10FFFF));
    /// assert_eq!(not_a.len(), 0x110000 - 1);
    /// ```
    pub fn complement(&self) -> Self {
        let mut byte_tier = [false; BYTE_TIER_LEN];
        bitmap::invert_flags(&self.byte_tier, &mut byte_tier);

        let mut wide = vec![0u8; MAX_WIDE_BYTES];
        bitmap::invert_into(self.wide_tier.as_deref().unwrap_or(&[]), &mut wide);

        tracing::trace!(members = CODESPACE_LEN - self.len, "built complement");
        Self {
            byte_tier,
            wide_tier: Some(wide),
            len: CODESPACE_LEN - self.len,
        }
    }

    /// Smallest member, or None if the set is empty.
    pub fn first(&self) -> Option<u32> {
        self.next_member(0)
    }

    /// Largest member, or None if the set is empty.
    pub fn last(&self) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        self.wide_tier
            .as_deref()
            .and_then(|wide| bitmap::prev_set_bit(wide, MAX_CODE_POINT))
            .or_else(|| bitmap::prev_set_flag(&self.byte_tier, MAX_CODE_POINT))
    }

    /// Smallest member `>= from`.
    pub(crate) fn next_member(&self, from: u32) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        bitmap::next_set_flag(&self.byte_tier, from).or_else(|| {
            self.wide_tier
                .as_deref()
                .and_then(|wide| bitmap::next_set_bit(wide, from))
        })
    }

    /// Iterate over members in ascending order.
    ///
    /// Byte-tier members come first, then wide-tier members. The iterator
    /// borrows the set, so iterating again yields the same sequence.
    ///
    /// # Example
    /// ```rust
    /// use codepoint_set::CodePointSet;
    ///
    /// let mut set = CodePointSet::new();
    /// set.insert(0x1F600).unwrap();
    /// set.insert(0x41).unwrap();
    /// let members: Vec<u32> = set.iter().collect();
    /// assert_eq!(members, vec![0x41, 0x1F600]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Iterate over members within `range` in ascending order.
    ///
    /// Bounds beyond U+10FFFF are clamped.
    pub fn range<R>(&self, range: R) -> RangeIter<'_>
    where
        R: RangeBounds<u32>,
    {
        RangeIter::new(self, range)
    }

    /// Raw byte-tier flags, indexed by code point.
    pub fn byte_tier(&self) -> &[bool; BYTE_TIER_LEN] {
        &self.byte_tier
    }

    /// Raw packed wide tier, or None if it was never grown.
    ///
    /// Byte `k` covers `256 + 8k ..= 256 + 8k + 7`, MSB first.
    pub fn wide_tier(&self) -> Option<&[u8]> {
        self.wide_tier.as_deref()
    }
}

/// Wide-tier length after growing to hold `need` bytes.
#[inline]
fn grown_len(need: usize) -> usize {
    let scaled = (need * GROWTH_NUMERATOR).div_ceil(GROWTH_DENOMINATOR);
    scaled.max(need).min(MAX_WIDE_BYTES)
}

impl Default for CodePointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for CodePointSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|cp| other.contains(cp))
    }
}

impl Eq for CodePointSet {}

impl Hash for CodePointSet {
    /// Hashes the type tag, the cardinality and the byte tier.
    ///
    /// Wide-tier bits are left out, so sets that differ only above U+00FF
    /// collide. Equal sets always hash equally.
    fn hash<H: Hasher>(&self, state: &mut H) {
        HASH_TAG.hash(state);
        self.len.hash(state);
        self.byte_tier.hash(state);
    }
}

impl fmt::Debug for CodePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(DebugCodePoint))
            .finish()
    }
}

struct DebugCodePoint(u32);

impl fmt::Debug for DebugCodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

impl Extend<char> for CodePointSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert_valid(u32::from(c));
        }
    }
}

impl FromIterator<char> for CodePointSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a CodePointSet {
    type Item = u32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
