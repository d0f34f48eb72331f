//! IPTC-IIM metadata parser and writer.
//!
//! IPTC-IIM (International Press Telecommunications Council - Information Interchange Model)
//! is a standard for storing metadata in image files, commonly embedded in:
//! - JPEG APP13 segment (inside a Photoshop Image Resource Block)
//! - TIFF IFD tag 33723 (0x83BB)
//! - PSD Image Resources
//!
//! Structure: Each dataset is encoded as:
//! ```text
//! 0x1C | record | dataset | size_hi | size_lo | data[size]
//! ```
//!
//! Records:
//! - Record 1: Envelope (transmission info)
//! - Record 2: Application (content metadata) - most commonly used
//! - Record 3: NewsPhoto (image-specific)

mod error;
pub mod irb;
mod tags;

pub use error::{Error, Result};
pub use irb::decode_image_resources;
pub use tags::*;

use std::collections::BTreeMap;
use tiffgraph_core::Value;

/// IPTC record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Record {
    Envelope = 1,
    Application = 2,
    NewsPhoto = 3,
    PreObjectData = 7,
    ObjectData = 8,
    PostObjectData = 9,
    FotoStation = 240,
}

impl Record {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::Envelope),
            2 => Some(Self::Application),
            3 => Some(Self::NewsPhoto),
            7 => Some(Self::PreObjectData),
            8 => Some(Self::ObjectData),
            9 => Some(Self::PostObjectData),
            240 => Some(Self::FotoStation),
            _ => None,
        }
    }
}

/// Parsed IPTC dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub record: u8,
    pub tag: u8,
    pub data: Vec<u8>,
}

/// A dataset's `(record, tag)` packed into one u16, used as the flat
/// key this crate hands back to callers that don't want to carry a
/// `Dataset` around (the decoder's [`IrbDecoder`](tiffgraph_core::IrbDecoder) callback, for one).
pub fn pack_tag(record: u8, tag: u8) -> u16 {
    (record as u16) << 8 | tag as u16
}

pub fn unpack_tag(packed: u16) -> (u8, u8) {
    ((packed >> 8) as u8, packed as u8)
}

/// IPTC parser.
pub struct IptcParser;

impl IptcParser {
    /// Parse an IPTC-IIM block into `(packed_tag, value)` pairs, joining
    /// repeated list-type datasets (Keywords, By-line, ...) with `\0`
    /// since a single metadata slot holds one value.
    pub fn parse(data: &[u8]) -> Result<Vec<(u16, Value)>> {
        let datasets = Self::parse_datasets(data)?;
        Ok(Self::datasets_to_values(&datasets))
    }

    /// Parse raw datasets from an IPTC-IIM block.
    pub fn parse_datasets(data: &[u8]) -> Result<Vec<Dataset>> {
        let mut datasets = Vec::new();
        let mut pos = 0;

        while pos + 5 <= data.len() {
            if data[pos] != 0x1C {
                pos += 1;
                continue;
            }

            let record = data[pos + 1];
            let tag = data[pos + 2];

            let size_indicator = u16::from_be_bytes([data[pos + 3], data[pos + 4]]);
            let (size, header_len) = if size_indicator & 0x8000 != 0 {
                let size_bytes = (size_indicator & 0x7FFF) as usize;
                if pos + 5 + size_bytes > data.len() {
                    break;
                }
                let mut size: usize = 0;
                for i in 0..size_bytes {
                    size = (size << 8) | data[pos + 5 + i] as usize;
                }
                (size, 5 + size_bytes)
            } else {
                (size_indicator as usize, 5)
            };

            pos += header_len;

            if pos + size > data.len() {
                break;
            }

            datasets.push(Dataset { record, tag, data: data[pos..pos + size].to_vec() });
            pos += size;
        }

        Ok(datasets)
    }

    fn datasets_to_values(datasets: &[Dataset]) -> Vec<(u16, Value)> {
        let mut strings: BTreeMap<u16, Vec<String>> = BTreeMap::new();
        let mut scalars: BTreeMap<u16, Value> = BTreeMap::new();

        for ds in datasets {
            let tag_info = match ds.record {
                1 => tags::envelope_tag(ds.tag),
                2 => tags::application_tag(ds.tag),
                3 => tags::newsphoto_tag(ds.tag),
                _ => continue,
            };
            let Some(info) = tag_info else { continue };
            let packed = pack_tag(ds.record, ds.tag);

            match info.format {
                TagFormat::String | TagFormat::Text | TagFormat::Digits => {
                    strings.entry(packed).or_default().push(decode_iptc_string(&ds.data));
                }
                TagFormat::Int16u => {
                    if ds.data.len() >= 2 {
                        let v = u16::from_be_bytes([ds.data[0], ds.data[1]]);
                        scalars.insert(packed, Value::UInt16(vec![v]));
                    }
                }
                TagFormat::Binary => {
                    scalars.insert(packed, Value::Undefined(ds.data.clone()));
                }
            }
        }

        let mut out: Vec<(u16, Value)> = strings
            .into_iter()
            .map(|(tag, parts)| (tag, Value::Ascii(parts.join("\0"))))
            .chain(scalars)
            .collect();
        out.sort_by_key(|(tag, _)| *tag);
        out
    }
}

/// IPTC writer.
pub struct IptcWriter;

impl IptcWriter {
    /// Serialize `(packed_tag, value)` pairs back into an IPTC-IIM block.
    pub fn write(entries: &[(u16, Value)]) -> Result<Vec<u8>> {
        let mut datasets: Vec<Dataset> = Vec::new();

        for &(packed, ref value) in entries {
            let (record, tag) = unpack_tag(packed);
            let tag_info = match record {
                1 => tags::envelope_tag(tag),
                2 => tags::application_tag(tag),
                3 => tags::newsphoto_tag(tag),
                _ => None,
            };
            let Some(info) = tag_info else { continue };

            match value {
                Value::Ascii(s) if info.is_list => {
                    for part in s.split('\0') {
                        datasets.push(Dataset { record, tag, data: encode_iptc_string(part) });
                    }
                }
                Value::Ascii(s) => {
                    datasets.push(Dataset { record, tag, data: encode_iptc_string(s) });
                }
                Value::UInt16(v) if v.len() == 1 => {
                    datasets.push(Dataset { record, tag, data: v[0].to_be_bytes().to_vec() });
                }
                Value::Undefined(bytes) => {
                    datasets.push(Dataset { record, tag, data: bytes.clone() });
                }
                _ => continue,
            }
        }

        datasets.sort_by_key(|d| (d.record, d.tag));

        let mut data = Vec::new();
        for ds in datasets {
            data.push(0x1C);
            data.push(ds.record);
            data.push(ds.tag);

            let size = ds.data.len();
            if size > 0x7FFF {
                let size_bytes = if size > 0xFFFFFF { 4 } else if size > 0xFFFF { 3 } else { 2 };
                data.push(0x80 | size_bytes);
                for i in (0..size_bytes).rev() {
                    data.push((size >> (i * 8)) as u8);
                }
            } else {
                data.extend_from_slice(&(size as u16).to_be_bytes());
            }

            data.extend_from_slice(&ds.data);
        }

        Ok(data)
    }
}

/// Decode IPTC string (handles UTF-8 and Latin-1).
fn decode_iptc_string(data: &[u8]) -> String {
    if let Ok(s) = std::str::from_utf8(data) {
        return s.trim_end_matches('\0').to_string();
    }
    data.iter().filter(|&&b| b != 0).map(|&b| b as char).collect()
}

fn encode_iptc_string(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_headline() {
        let data = [0x1C, 0x02, 105, 0x00, 0x04, b'T', b'e', b's', b't'];
        let entries = IptcParser::parse(&data).unwrap();
        assert_eq!(entries, vec![(pack_tag(2, 105), Value::Ascii("Test".into()))]);
    }

    #[test]
    fn keywords_list_joins_with_nul() {
        let data = [
            0x1C, 0x02, 25, 0x00, 0x03, b'c', b'a', b't', 0x1C, 0x02, 25, 0x00, 0x03, b'd', b'o', b'g',
        ];
        let entries = IptcParser::parse(&data).unwrap();
        assert_eq!(entries, vec![(pack_tag(2, 25), Value::Ascii("cat\0dog".into()))]);
    }

    #[test]
    fn roundtrips_through_writer() {
        let entries = vec![
            (pack_tag(2, 25), Value::Ascii("test\0example".into())),
            (pack_tag(2, 105), Value::Ascii("Test Headline".into())),
        ];
        let data = IptcWriter::write(&entries).unwrap();
        let parsed = IptcParser::parse(&data).unwrap();
        assert_eq!(parsed, entries);
    }
}
