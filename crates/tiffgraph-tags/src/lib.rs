//! EXIF tag definitions.
//!
//! This crate contains tag definitions for:
//! - Standard EXIF tags (IFD0, ExifIFD, GPS, Interop)
//! - Vendor MakerNotes (Canon, Nikon, Sony, Fuji, etc.)
//!
//! Tag tables are generated ahead of time and checked in; see
//! `generated/` for the per-vendor name/value tables.

mod exif;
pub mod generated;
pub mod interp;

pub use exif::{TagDef, TagGroup, EXIF_TAGS, GPS_TAGS, IFD0_TAGS};
