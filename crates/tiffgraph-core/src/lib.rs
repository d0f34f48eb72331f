//! Core primitives for a TIFF/EXIF composite metadata engine.
//!
//! - [`byte_order`] - endian-aware integer reads/writes
//! - [`format`] - the wire type-code table ([`format::TiffType`])
//! - [`value`] - typed scalar/array payloads ([`value::Value`])
//! - [`structure`] - the static `(tag, group) -> node kind` table
//! - [`tree`] - the composite tree ([`tree::Node`]) and its `Visitor`
//! - [`makernote`] - the vendor makernote factory interface
//! - [`reader`] - builds a tree from raw bytes
//! - [`decoder`] - flattens a tree into a [`metadata::MetadataMap`]
//! - [`encoder`] - reconciles a `MetadataMap` back into a tree
//! - [`writer`] - serializes a tree back to TIFF bytes
//! - [`error`] - the fatal/diagnostic error split
//!
//! # Example
//!
//! ```
//! use tiffgraph_core::{reader, ReadOptions};
//!
//! let tiff_data = [
//!     0x49, 0x49,             // "II" = little-endian
//!     0x2A, 0x00,             // TIFF magic (42)
//!     0x08, 0x00, 0x00, 0x00, // IFD0 offset = 8
//!     0x00, 0x00,             // zero entries
//!     0x00, 0x00, 0x00, 0x00, // no next IFD
//! ];
//!
//! let (_root, diagnostics) = reader::read(&tiff_data, ReadOptions::default(), &[]).unwrap();
//! assert!(diagnostics.is_empty());
//! ```

pub mod byte_order;
pub mod charset;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod makernote;
pub mod metadata;
pub mod reader;
pub mod structure;
pub mod tree;
pub mod value;
pub mod writer;

pub use byte_order::ByteOrder;
pub use decoder::{decode, IrbDecoder};
pub use encoder::{encode, Encoded};
pub use error::{Diagnostic, Error, Result};
pub use format::TiffType;
pub use makernote::{MakernoteHeader, MakernoteVendor};
pub use metadata::{MetadataKey, MetadataMap};
pub use reader::ReadOptions;
pub use structure::{ExtendedTag, Group, NodeKind, StructureRow};
pub use tree::{Node, Payload, TagId, Visitor};
pub use value::{SRational, URational, Value};
pub use writer::write_tree;
