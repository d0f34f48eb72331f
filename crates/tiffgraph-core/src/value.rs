//! The value model: typed scalar/array payloads with a uniform
//! decode/encode contract, shared by every entry-shaped node.

use crate::byte_order::ByteOrder;
use crate::format::TiffType;
use serde::{Deserialize, Serialize};

/// Unsigned rational number (numerator/denominator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct URational {
    pub num: u32,
    pub den: u32,
}

impl URational {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    pub fn to_f64(self) -> f64 {
        if self.den == 0 { 0.0 } else { self.num as f64 / self.den as f64 }
    }
}

impl std::fmt::Display for URational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Signed rational number (numerator/denominator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct SRational {
    pub num: i32,
    pub den: i32,
}

impl SRational {
    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    pub fn to_f64(self) -> f64 {
        if self.den == 0 { 0.0 } else { self.num as f64 / self.den as f64 }
    }
}

impl std::fmt::Display for SRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Value parsed from (or destined for) an entry's data.
///
/// Single values and arrays are unified: a scalar is an array of
/// length 1. `Comment` carries the decoded (charset-code-stripped)
/// text of a UserComment entry; it has no wire type code of its own
/// and is re-encoded back through [`TiffType::Undefined`] with an
/// 8-byte charset prefix by the encoder's UserComment special case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub enum Value {
    UInt8(Vec<u8>),
    Ascii(String),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    URational(Vec<URational>),
    Int8(Vec<i8>),
    Undefined(Vec<u8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    SRational(Vec<SRational>),
    Comment(String),
}

impl Value {
    pub fn wire_type(&self) -> TiffType {
        match self {
            Value::UInt8(_) => TiffType::UInt8,
            Value::Ascii(_) => TiffType::Ascii,
            Value::UInt16(_) => TiffType::UInt16,
            Value::UInt32(_) => TiffType::UInt32,
            Value::URational(_) => TiffType::URational,
            Value::Int8(_) => TiffType::Int8,
            Value::Undefined(_) => TiffType::Undefined,
            Value::Int16(_) => TiffType::Int16,
            Value::Int32(_) => TiffType::Int32,
            Value::SRational(_) => TiffType::SRational,
            Value::Comment(_) => TiffType::Comment,
        }
    }

    /// Element count (an ASCII string's count includes the NUL terminator).
    pub fn count(&self) -> usize {
        match self {
            Value::UInt8(v) => v.len(),
            Value::Ascii(s) => s.len() + 1,
            Value::UInt16(v) => v.len(),
            Value::UInt32(v) => v.len(),
            Value::URational(v) => v.len(),
            Value::Int8(v) => v.len(),
            Value::Undefined(v) => v.len(),
            Value::Int16(v) => v.len(),
            Value::Int32(v) => v.len(),
            Value::SRational(v) => v.len(),
            Value::Comment(s) => 8 + s.len(),
        }
    }

    /// Total encoded size in bytes.
    pub fn byte_len(&self) -> usize {
        self.count() * self.wire_type().element_size()
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::UInt8(v) if v.len() == 1 => Some(v[0] as u32),
            Value::UInt16(v) if v.len() == 1 => Some(v[0] as u32),
            Value::UInt32(v) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }

    pub fn as_u32_vec(&self) -> Option<Vec<u32>> {
        match self {
            Value::UInt8(v) => Some(v.iter().map(|&x| x as u32).collect()),
            Value::UInt16(v) => Some(v.iter().map(|&x| x as u32).collect()),
            Value::UInt32(v) => Some(v.clone()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Ascii(s) => Some(s.as_str()),
            Value::Comment(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Undefined(v) => Some(v.as_slice()),
            Value::UInt8(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Decode a value of the given type and count from a byte slice,
    /// per invariant 6: returns `None` for an unrepresented type code
    /// rather than guessing a layout for it.
    pub fn decode(type_code: u16, count: u32, bytes: &[u8], order: ByteOrder) -> Option<Value> {
        let ty = TiffType::from_u16(type_code)?;
        let n = count as usize;
        Some(match ty {
            TiffType::UInt8 => Value::UInt8(bytes[..n].to_vec()),
            TiffType::Ascii => {
                let raw = &bytes[..n];
                let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
                Value::Ascii(String::from_utf8_lossy(&raw[..end]).into_owned())
            }
            TiffType::UInt16 => Value::UInt16(
                bytes.chunks_exact(2).take(n).map(|c| order.read_u16([c[0], c[1]])).collect(),
            ),
            TiffType::UInt32 => Value::UInt32(
                bytes.chunks_exact(4).take(n).map(|c| order.read_u32([c[0], c[1], c[2], c[3]])).collect(),
            ),
            TiffType::URational => Value::URational(
                bytes
                    .chunks_exact(8)
                    .take(n)
                    .map(|c| {
                        let num = order.read_u32([c[0], c[1], c[2], c[3]]);
                        let den = order.read_u32([c[4], c[5], c[6], c[7]]);
                        URational::new(num, den)
                    })
                    .collect(),
            ),
            TiffType::Int8 => Value::Int8(bytes[..n].iter().map(|&b| b as i8).collect()),
            TiffType::Undefined => Value::Undefined(bytes[..n].to_vec()),
            TiffType::Int16 => Value::Int16(
                bytes.chunks_exact(2).take(n).map(|c| order.read_i16([c[0], c[1]])).collect(),
            ),
            TiffType::Int32 => Value::Int32(
                bytes.chunks_exact(4).take(n).map(|c| order.read_i32([c[0], c[1], c[2], c[3]])).collect(),
            ),
            TiffType::SRational => Value::SRational(
                bytes
                    .chunks_exact(8)
                    .take(n)
                    .map(|c| {
                        let num = order.read_i32([c[0], c[1], c[2], c[3]]);
                        let den = order.read_i32([c[4], c[5], c[6], c[7]]);
                        SRational::new(num, den)
                    })
                    .collect(),
            ),
            TiffType::Comment => return None,
        })
    }

    /// Encode this value's bytes in the given order. `Comment` is not
    /// directly encodable — the encoder re-expresses it as `Undefined`
    /// with a charset prefix before calling this.
    pub fn encode(&self, order: ByteOrder) -> Vec<u8> {
        match self {
            Value::UInt8(v) => v.clone(),
            Value::Ascii(s) => {
                let mut out = s.as_bytes().to_vec();
                out.push(0);
                out
            }
            Value::UInt16(v) => v.iter().flat_map(|&x| order.write_u16(x)).collect(),
            Value::UInt32(v) => v.iter().flat_map(|&x| order.write_u32(x)).collect(),
            Value::URational(v) => v
                .iter()
                .flat_map(|r| {
                    let mut b = order.write_u32(r.num).to_vec();
                    b.extend_from_slice(&order.write_u32(r.den));
                    b
                })
                .collect(),
            Value::Int8(v) => v.iter().map(|&x| x as u8).collect(),
            Value::Undefined(v) => v.clone(),
            Value::Int16(v) => v.iter().flat_map(|&x| order.write_i16(x)).collect(),
            Value::Int32(v) => v.iter().flat_map(|&x| order.write_i32(x)).collect(),
            Value::SRational(v) => v
                .iter()
                .flat_map(|r| {
                    let mut b = order.write_i32(r.num).to_vec();
                    b.extend_from_slice(&order.write_i32(r.den));
                    b
                })
                .collect(),
            Value::Comment(s) => s.as_bytes().to_vec(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Ascii(s) | Value::Comment(s) => write!(f, "{}", s),
            Value::UInt8(v) if v.len() == 1 => write!(f, "{}", v[0]),
            Value::UInt16(v) if v.len() == 1 => write!(f, "{}", v[0]),
            Value::UInt32(v) if v.len() == 1 => write!(f, "{}", v[0]),
            Value::URational(v) if v.len() == 1 => write!(f, "{}", v[0]),
            Value::SRational(v) if v.len() == 1 => write!(f, "{}", v[0]),
            Value::Undefined(v) => write!(f, "<{} bytes>", v.len()),
            _ => write!(f, "<{} x {}>", self.count(), self.wire_type().name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_u16_array() {
        let v = Value::UInt16(vec![1, 2, 300]);
        let bytes = v.encode(ByteOrder::LittleEndian);
        let decoded = Value::decode(3, 3, &bytes, ByteOrder::LittleEndian).unwrap();
        assert_eq!(v, decoded);
    }

    #[test]
    fn ascii_strips_terminator_on_decode_and_restores_on_encode() {
        let bytes = b"Canon\0";
        let v = Value::decode(2, 6, bytes, ByteOrder::LittleEndian).unwrap();
        assert_eq!(v, Value::Ascii("Canon".into()));
        assert_eq!(v.encode(ByteOrder::LittleEndian), bytes);
    }

    #[test]
    fn unknown_type_code_decodes_to_none() {
        assert!(Value::decode(11, 1, &[0, 0, 0, 0], ByteOrder::LittleEndian).is_none());
    }

    #[test]
    fn rational_round_trip() {
        let v = Value::URational(vec![URational::new(72, 1)]);
        let bytes = v.encode(ByteOrder::BigEndian);
        assert_eq!(Value::decode(5, 1, &bytes, ByteOrder::BigEndian).unwrap(), v);
    }
}
