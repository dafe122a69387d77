//! # codepoint-set
//!
//! Set of Unicode code points (U+0000..=U+10FFFF) for character
//! classification in text and markup parsers.
//!
//! ## Features
//! - O(1) contains, insert and remove
//! - O(1) cardinality, maintained incrementally
//! - Two-tier layout: 256 flags for Latin-1, packed bits above
//! - Ascending iteration, range iteration, complement
//! - no_std compatible (requires alloc)
//!
//! ## Cargo features
//! - `std` (default): links the standard library, forwards `std` to
//!   `tracing` and `thiserror`, and adds `From<CodePointSetError>` for
//!   `std::io::Error`. Disable default features for `no_std` + `alloc`
//!   targets; the set itself behaves identically either way.
//!
//! ## Example
//! ```rust
//! use codepoint_set::CodePointSet;
//!
//! let mut name_start = CodePointSet::from_ranges(&[('A', 'Z'), ('a', 'z')]);
//! name_start.insert(':' as u32)?;
//! name_start.insert_range(0x370..=0x37D)?;
//!
//! assert!(name_start.contains('q' as u32));
//! assert!(name_start.contains(0x37A));
//! assert!(!name_start.contains('-' as u32));
//! # Ok::<(), codepoint_set::CodePointSetError>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod bitmap;
pub mod constants;
mod error;
mod set;

#[cfg(test)]
mod tests_props;

pub use error::{CodePointSetError, Result};
pub use set::{CodePointLookup, CodePointSet, Iter, RangeIter};
