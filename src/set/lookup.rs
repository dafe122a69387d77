//! Narrow membership capability for character classifiers.

use crate::set::CodePointSet;
use core::ops::RangeInclusive;

/// Anything that can answer "is this code point in the class?".
///
/// Parsers take `&impl CodePointLookup` rather than a concrete set so that
/// tables, closures over tables, and borrowed sets are interchangeable.
///
/// # Example
/// ```rust
/// use codepoint_set::{CodePointLookup, CodePointSet};
///
/// fn leading_run<L: CodePointLookup>(class: &L, input: &str) -> usize {
///     input.chars().take_while(|&c| class.matches(c)).count()
/// }
///
/// let digits = CodePointSet::from_ranges(&[('0', '9')]);
/// assert_eq!(leading_run(&digits, "2024-10-19"), 4);
/// ```
pub trait CodePointLookup {
    /// Check whether `cp` is in the class.
    fn contains(&self, cp: u32) -> bool;

    /// Check whether the character `c` is in the class.
    #[inline]
    fn matches(&self, c: char) -> bool {
        self.contains(u32::from(c))
    }

    /// Check whether every code point in `range` is in the class.
    ///
    /// Vacuously `true` for an inverted range.
    fn contains_range(&self, range: RangeInclusive<u32>) -> bool {
        range.into_iter().all(|cp| self.contains(cp))
    }
}

impl CodePointLookup for CodePointSet {
    #[inline]
    fn contains(&self, cp: u32) -> bool {
        CodePointSet::contains(self, cp)
    }

    fn contains_range(&self, range: RangeInclusive<u32>) -> bool {
        CodePointSet::contains_range(self, range)
    }
}

impl<T: CodePointLookup + ?Sized> CodePointLookup for &T {
    #[inline]
    fn contains(&self, cp: u32) -> bool {
        (**self).contains(cp)
    }

    fn contains_range(&self, range: RangeInclusive<u32>) -> bool {
        (**self).contains_range(range)
    }
}
