//! The makernote vendor factory interface.
//!
//! A makernote's internal layout is vendor-specific but falls into one
//! of two archetypes: a fixed ASCII prefix followed directly by an IFD
//! sharing the outer TIFF's byte order and offset base (Canon, most of
//! Nikon's older bodies), or a prefix followed by its own embedded
//! TIFF-style header that declares a new byte order and resets the
//! offset base to wherever that header starts (Nikon's Type 3, Sony's
//! newer bodies). [`MakernoteVendor::parse_header`] covers both: it
//! either returns `None` (header not recognized — stored as opaque
//! `Undefined`) or a [`MakernoteHeader`] describing where the IFD
//! starts and what offset corrections apply to it.
//!
//! This crate depends on no concrete vendor. Callers (the reader's
//! caller) supply a `&[&dyn MakernoteVendor]` list; the `tiffgraph-
//! makernotes` crate is where Canon/Nikon/Olympus/Sony implementations
//! live, avoiding a core -> vendor dependency edge.

use crate::byte_order::ByteOrder;

/// The outcome of successfully recognizing a makernote header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakernoteHeader {
    /// Byte order the makernote's own IFD is encoded in. Usually the
    /// outer TIFF's order, but a vendor embedding its own TIFF header
    /// (Nikon Type 3) may declare a different one.
    pub byte_order: ByteOrder,
    /// Offset, from the start of the makernote's raw bytes, at which
    /// the IFD's entry-count field begins.
    pub ifd_offset: u32,
    /// Value added to every offset field read from within this
    /// makernote's IFD before it is used to index back into the
    /// makernote's own byte range. Nonzero exactly when the vendor
    /// established a new base (an embedded TIFF header always does;
    /// a bare prefix+version header never does).
    pub base_offset: i64,
}

/// A concrete vendor's makernote recognizer.
pub trait MakernoteVendor: Send + Sync {
    /// Human-readable vendor name, used for diagnostics and as the
    /// `Group::MakernoteMain` directory's reported make.
    fn name(&self) -> &'static str;

    /// Does the TIFF `Make` tag's value identify this vendor?
    fn detect(&self, make: &str) -> bool;

    /// Recognize and locate this vendor's IFD inside the makernote's
    /// raw bytes. `parent_order` is the outer TIFF's byte order, used
    /// by archetypes that don't declare their own.
    fn parse_header(&self, data: &[u8], parent_order: ByteOrder) -> Option<MakernoteHeader>;
}

/// Find the first vendor in `vendors` whose [`MakernoteVendor::detect`]
/// matches `make`.
pub fn detect_vendor<'a>(vendors: &[&'a dyn MakernoteVendor], make: &str) -> Option<&'a dyn MakernoteVendor> {
    vendors.iter().find(|v| v.detect(make)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeVendor;
    impl MakernoteVendor for FakeVendor {
        fn name(&self) -> &'static str {
            "Fake"
        }
        fn detect(&self, make: &str) -> bool {
            make.eq_ignore_ascii_case("FAKE CORP")
        }
        fn parse_header(&self, data: &[u8], parent_order: ByteOrder) -> Option<MakernoteHeader> {
            if data.len() < 4 {
                return None;
            }
            Some(MakernoteHeader { byte_order: parent_order, ifd_offset: 0, base_offset: 0 })
        }
    }

    #[test]
    fn detect_vendor_matches_case_insensitively() {
        let fake = FakeVendor;
        let vendors: Vec<&dyn MakernoteVendor> = vec![&fake];
        assert!(detect_vendor(&vendors, "Fake Corp").is_some());
        assert!(detect_vendor(&vendors, "Other").is_none());
    }
}
