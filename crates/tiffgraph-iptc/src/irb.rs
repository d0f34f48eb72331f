//! Photoshop Image Resource Block (IRB) scanning.
//!
//! A Photoshop `ImageResources` entry (TIFF/EXIF tag 0x8649, JPEG APP13
//! under a `"Photoshop 3.0\0"` header) is a sequence of 8BIM resources:
//!
//! ```text
//! "8BIM" | resource_id:u16be | pascal_name | size:u32be | data[size, padded to even]
//! ```
//!
//! Resource `0x0404` carries an embedded IPTC-IIM block, which is what
//! this module pulls out and hands to [`crate::IptcParser`].

use crate::IptcParser;
use tiffgraph_core::Value;

const IRB_SIGNATURE: &[u8] = b"8BIM";
const IPTC_RESOURCE_ID: u16 = 0x0404;

/// Scan a raw Image Resource Block (no `"Photoshop 3.0"` header — that
/// belongs to the JPEG APP13 container, not the block itself) and
/// return the IPTC dataset it carries, if any.
pub fn find_iptc_block(data: &[u8]) -> Option<&[u8]> {
    let mut pos = 0;
    while pos + 8 <= data.len() {
        if &data[pos..pos + 4] != IRB_SIGNATURE {
            break;
        }
        pos += 4;

        let resource_id = u16::from_be_bytes([data[pos], data[pos + 1]]);
        pos += 2;

        let name_len = data[pos] as usize;
        pos += 1 + name_len;
        if !(1 + name_len).is_multiple_of(2) {
            pos += 1;
        }

        if pos + 4 > data.len() {
            break;
        }
        let size = u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]) as usize;
        pos += 4;

        if pos + size > data.len() {
            break;
        }

        if resource_id == IPTC_RESOURCE_ID {
            return Some(&data[pos..pos + size]);
        }

        pos += size;
        if !size.is_multiple_of(2) {
            pos += 1;
        }
    }
    None
}

/// Decode a raw Image Resource Block straight into `(packed_tag, value)`
/// pairs, matching [`tiffgraph_core::IrbDecoder`]'s signature. Malformed
/// input yields an empty list rather than an error — this is a
/// best-effort side channel off the main TIFF tree, not load-bearing.
pub fn decode_image_resources(data: &[u8]) -> Vec<(u16, Value)> {
    find_iptc_block(data).and_then(|iptc| IptcParser::parse(iptc).ok()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn irb_resource(id: u16, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(IRB_SIGNATURE);
        out.extend_from_slice(&id.to_be_bytes());
        out.push(0); // empty pascal name
        out.push(0); // pad
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        out.extend_from_slice(payload);
        if !payload.len().is_multiple_of(2) {
            out.push(0);
        }
        out
    }

    #[test]
    fn finds_the_iptc_resource_among_others() {
        let iptc_data = [0x1C, 0x02, 105, 0x00, 0x04, b'T', b'e', b's', b't'];
        let mut data = irb_resource(0x03ED, &[1, 2, 3]);
        data.extend(irb_resource(IPTC_RESOURCE_ID, &iptc_data));

        assert_eq!(find_iptc_block(&data), Some(&iptc_data[..]));
    }

    #[test]
    fn decodes_straight_to_values() {
        let iptc_data = [0x1C, 0x02, 105, 0x00, 0x04, b'T', b'e', b's', b't'];
        let data = irb_resource(IPTC_RESOURCE_ID, &iptc_data);

        let entries = decode_image_resources(&data);
        assert_eq!(entries, vec![(crate::pack_tag(2, 105), Value::Ascii("Test".into()))]);
    }

    #[test]
    fn missing_resource_yields_empty() {
        let data = irb_resource(0x03ED, &[1, 2, 3]);
        assert!(decode_image_resources(&data).is_empty());
    }
}
