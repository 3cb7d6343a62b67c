//! Crate-level error types.

use std::fmt;

/// Errors produced by the folio crate.
///
/// Every variant is raised while building or configuring a book. The
/// per-frame animation path is total and never produces one.
#[derive(Debug)]
pub enum FolioError {
    /// A bone chain does not have the shape the book was configured for.
    BoneCountMismatch {
        /// Bone count the configuration calls for.
        expected: usize,
        /// Bone count actually supplied.
        actual: usize,
    },
    /// A bone chain whose parent links are not a single root-first chain.
    MalformedChain(String),
    /// A content slot id outside `1..=pages`.
    SlotOutOfRange {
        /// Offending slot id.
        slot: usize,
        /// Content pages in the book.
        pages: usize,
    },
    /// Options failed validation.
    InvalidOptions(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoneCountMismatch { expected, actual } => write!(
                f,
                "bone chain has {actual} bones, expected {expected}"
            ),
            Self::MalformedChain(msg) => {
                write!(f, "malformed bone chain: {msg}")
            }
            Self::SlotOutOfRange { slot, pages } => write!(
                f,
                "slot {slot} out of range (content slots are 1..={pages})"
            ),
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
