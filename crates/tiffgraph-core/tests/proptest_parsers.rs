//! Property-based tests for the byte codec and the directory reader.
//!
//! These tests verify that parsing arbitrary input never panics and
//! never reads outside the input buffer.

use proptest::prelude::*;
use tiffgraph_core::format::TiffType;
use tiffgraph_core::{reader, ByteOrder, ReadOptions};

proptest! {
    /// The reader should never panic on arbitrary byte sequences.
    #[test]
    fn reader_no_panic(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let _ = reader::read(&data, ReadOptions::default(), &[]);
    }

    /// A valid header with a garbage directory should still come back
    /// as either a parsed (possibly diagnostic-laden) tree or an error,
    /// never a panic.
    #[test]
    fn reader_survives_garbage_directory(
        mut tail in prop::collection::vec(any::<u8>(), 0..512),
        big_endian in any::<bool>(),
    ) {
        let mut data = if big_endian {
            vec![0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]
        } else {
            vec![0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]
        };
        data.append(&mut tail);
        let _ = reader::read(&data, ReadOptions::default(), &[]);
    }

    /// ByteOrder::from_marker should handle any 2-byte input.
    #[test]
    fn byte_order_parse_no_panic(b0 in any::<u8>(), b1 in any::<u8>()) {
        let _ = ByteOrder::from_marker([b0, b1]);
    }

    /// TiffType::from_u16 should handle any u16 value.
    #[test]
    fn tiff_type_from_u16_no_panic(val in any::<u16>()) {
        let _ = TiffType::from_u16(val);
    }

    /// A well-formed empty-directory header always parses to a root
    /// with no diagnostics.
    #[test]
    fn empty_ifd0_parses_cleanly(next_ifd in 0u32..4) {
        let mut data = vec![0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&next_ifd.to_le_bytes());

        let (_, diagnostics) = reader::read(&data, ReadOptions::default(), &[]).unwrap();
        assert!(diagnostics.is_empty());
    }
}

#[cfg(test)]
mod edge_cases {
    use super::*;

    #[test]
    fn empty_data() {
        assert!(reader::read(&[], ReadOptions::default(), &[]).is_err());
    }

    #[test]
    fn too_short_header() {
        let data = [0x49, 0x49, 0x2A];
        assert!(reader::read(&data, ReadOptions::default(), &[]).is_err());
    }

    #[test]
    fn invalid_magic() {
        let data = [0x49, 0x49, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00];
        assert!(reader::read(&data, ReadOptions::default(), &[]).is_err());
    }

    #[test]
    fn offset_beyond_data_is_rejected() {
        let data = [0x49, 0x49, 0x2A, 0x00, 0xFF, 0xFF, 0x00, 0x00];
        assert!(reader::read(&data, ReadOptions::default(), &[]).is_err());
    }
}
