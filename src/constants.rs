//! Core constants for the two-tier code point layout.

/// Largest valid Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Number of code points in the Unicode codespace (0..=0x10FFFF).
pub const CODESPACE_LEN: usize = MAX_CODE_POINT as usize + 1;

/// Number of slots in the byte tier (code points 0-255).
pub const BYTE_TIER_LEN: usize = 256;

/// Code points packed into one wide-tier byte.
pub const BITS_PER_BYTE: u32 = 8;

/// Shift that maps a code point to its 8-code-point group (`cp >> 3`).
pub const GROUP_SHIFT: u32 = 3;

/// Mask that selects a code point's position inside its group (`cp & 7`).
pub const GROUP_MASK: u32 = 7;

/// Group offset of the wide tier.
///
/// `(cp >> 3) - WIDE_GROUP_OFFSET` is the number of wide-tier bytes needed
/// to hold `cp`, which is also the 1-based position of its byte. Code point
/// 256 is group 32 and lives in byte 1.
pub const WIDE_GROUP_OFFSET: u32 = 31;

/// Maximum wide-tier length in bytes: `(0x10FFFF >> 3) - 31`.
///
/// The last byte covers 0x10FFF8..=0x10FFFF exactly.
pub const MAX_WIDE_BYTES: usize = ((MAX_CODE_POINT >> GROUP_SHIFT) - WIDE_GROUP_OFFSET) as usize;

/// Wide-tier growth factor numerator (growth is `ceil(need * 3 / 2)`).
pub const GROWTH_NUMERATOR: usize = 3;

/// Wide-tier growth factor denominator.
pub const GROWTH_DENOMINATOR: usize = 2;

/// Type tag mixed into every set hash so an empty set does not hash like
/// an empty sequence of integers.
pub const HASH_TAG: u64 = 0x6370_7365_7400_0001;
