//! Low-level bit operations over the two storage tiers.
//!
//! The byte tier is a plain `[bool; 256]`. The wide tier is a byte slice
//! where each byte packs 8 code points MSB-first, starting at U+0100.

mod basic;
mod bulk;
mod search;

pub use basic::{clear_bit, is_set, required_len, set_bit, slot_base};
pub use bulk::{clear_all, clear_flags, grow_zeroed, invert_flags, invert_into};
pub use search::{next_set_bit, next_set_flag, prev_set_bit, prev_set_flag};
