//! Error type for fallible set operations.

use thiserror::Error;

/// Errors produced by [`CodePointSet`](crate::CodePointSet) mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodePointSetError {
    /// The code point lies above U+10FFFF and cannot be stored.
    #[error("code point {code_point:#X} is outside the Unicode range (max 0x10FFFF)")]
    OutOfRange { code_point: u32 },

    /// The code point was not a member when removal was requested.
    #[error("code point {code_point:#X} is not in the set")]
    NotFound { code_point: u32 },
}

/// A specialized Result type for code point set operations.
pub type Result<T> = core::result::Result<T, CodePointSetError>;

#[cfg(feature = "std")]
impl From<CodePointSetError> for std::io::Error {
    fn from(err: CodePointSetError) -> Self {
        let kind = match err {
            CodePointSetError::OutOfRange { .. } => std::io::ErrorKind::InvalidInput,
            CodePointSetError::NotFound { .. } => std::io::ErrorKind::NotFound,
        };
        std::io::Error::new(kind, err)
    }
}
