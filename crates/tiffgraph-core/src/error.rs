//! Error and diagnostic types.
//!
//! Two separate channels carry bad news out of this crate, matching the
//! fatal/skippable split in the failure-semantics design: [`Error`] is
//! returned from a `Result` and aborts the call that produced it;
//! [`Diagnostic`] is pushed onto a caller-supplied list and never stops
//! anything. A malformed tag inside an otherwise-readable directory is
//! a diagnostic. A header that isn't TIFF at all is an error.

use thiserror::Error as ThisError;

/// Failures that abort the operation in progress.
#[derive(Debug, ThisError)]
#[must_use]
pub enum Error {
    #[error("unexpected end of data: need {need} bytes, have {have}")]
    UnexpectedEof { need: usize, have: usize },

    #[error("invalid TIFF magic: expected 0x002A, got 0x{0:04X}")]
    InvalidTiffMagic(u16),

    #[error("invalid byte order marker: expected 'II' or 'MM', got {0:?}")]
    InvalidByteOrder([u8; 2]),

    #[error("IFD offset {0} is out of bounds (buffer length {1})")]
    IfdOffsetOutOfBounds(u32, usize),

    #[error("IFD chain revisits offset {0}; refusing to loop forever")]
    RecursiveIfd(u32),

    #[error("no decodable root directory: {0}")]
    NoRootDirectory(String),

    #[error("value size overflow: type size {type_size} * count {count} overflows usize")]
    ValueSizeOverflow { type_size: usize, count: u32 },

    #[error("serialized size {0} exceeds the 4-byte offset field's reach (u32::MAX)")]
    WriteSizeExceeded(u64),

    #[error("path {tag:#06x}/{group:?} has no row in the structure table and cannot be created")]
    NoSuchPath { tag: u16, group: crate::structure::Group },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias used throughout this workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// A non-fatal event raised while walking or rewriting a tree. Reader,
/// decoder and encoder passes collect these into a `Vec<Diagnostic>`
/// rather than abort; see the failure-semantics notes on each visitor.
#[derive(Debug, Clone, ThisError)]
pub enum Diagnostic {
    #[error("entry {tag:#06x}/{group:?} skipped: {reason}")]
    EntrySkipped {
        tag: u16,
        group: crate::structure::Group,
        reason: String,
    },

    #[error("entry {tag:#06x}/{group:?} value truncated: wanted {wanted} bytes, clamped to {available}")]
    ValueTruncated {
        tag: u16,
        group: crate::structure::Group,
        wanted: u32,
        available: u32,
    },

    #[error("duplicate entry {tag:#06x}/{group:?} dropped, keeping the first occurrence")]
    DuplicateDropped { tag: u16, group: crate::structure::Group },

    #[error("data/size entry pair for {tag:#06x}/{group:?} has non-contiguous strips; stored as read")]
    NonContiguousStrips { tag: u16, group: crate::structure::Group },

    #[error("metadata key {family}:{group}:{tag} has no structure-table path; dropped")]
    UnknownPath {
        family: String,
        group: String,
        tag: String,
    },

    #[error("makernote header not recognized for Make {make:?}; stored as opaque undefined data")]
    MakernoteUnrecognized { make: Option<String> },

    #[error("directory at offset {offset} declares {count} entries, exceeding the sanity limit of {limit}; directory skipped")]
    DirectoryRejected { offset: u32, count: u16, limit: u16 },

    #[error("entry {tag:#06x}/{group:?} has type code {type_code}, which isn't special-cased; value kept as undefined bytes")]
    SemanticSkipped {
        tag: u16,
        group: crate::structure::Group,
        type_code: u16,
    },
}
