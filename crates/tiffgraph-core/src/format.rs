//! TIFF/EXIF value type codes.
//!
//! Only the type codes this engine assigns decode semantics to are
//! represented as enum variants. Anything else — float, double, the
//! BigTIFF 64-bit family, EXIF 3.0's UTF-8 type — is a type code this
//! crate has no row for; [`type_size`] returns `0` for those and every
//! call site treats a zero size as "skip this entry" rather than
//! guessing a layout for a type it was never taught.

/// TIFF/EXIF value type codes this engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum TiffType {
    /// Unsigned 8-bit integer (BYTE).
    UInt8 = 1,
    /// ASCII string, null-terminated.
    Ascii = 2,
    /// Unsigned 16-bit integer (SHORT).
    UInt16 = 3,
    /// Unsigned 32-bit integer (LONG); also used for sub-IFD pointers.
    UInt32 = 4,
    /// Unsigned rational: two LONG values (numerator/denominator).
    URational = 5,
    /// Signed 8-bit integer (SBYTE).
    Int8 = 6,
    /// Undefined byte sequence (UNDEFINED).
    Undefined = 7,
    /// Signed 16-bit integer (SSHORT).
    Int16 = 8,
    /// Signed 32-bit integer (SLONG).
    Int32 = 9,
    /// Signed rational: two SLONG values (numerator/denominator).
    SRational = 10,
    /// Internal retype applied only to UserComment (0x9286): an
    /// 8-byte charset code followed by charset-encoded text. Never
    /// appears on the wire as a type code — the decoder assigns it
    /// after recognizing the tag.
    Comment,
}

impl TiffType {
    /// Parse a wire type code, if this engine has decode semantics for it.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(TiffType::UInt8),
            2 => Some(TiffType::Ascii),
            3 => Some(TiffType::UInt16),
            4 => Some(TiffType::UInt32),
            5 => Some(TiffType::URational),
            6 => Some(TiffType::Int8),
            7 => Some(TiffType::Undefined),
            8 => Some(TiffType::Int16),
            9 => Some(TiffType::Int32),
            10 => Some(TiffType::SRational),
            _ => None,
        }
    }

    /// Wire type code. `Comment` has none — it never reaches the wire.
    pub fn to_u16(self) -> Option<u16> {
        match self {
            TiffType::UInt8 => Some(1),
            TiffType::Ascii => Some(2),
            TiffType::UInt16 => Some(3),
            TiffType::UInt32 => Some(4),
            TiffType::URational => Some(5),
            TiffType::Int8 => Some(6),
            TiffType::Undefined => Some(7),
            TiffType::Int16 => Some(8),
            TiffType::Int32 => Some(9),
            TiffType::SRational => Some(10),
            TiffType::Comment => None,
        }
    }

    /// Size in bytes of one element (a rational's two halves count as one element).
    #[inline]
    pub const fn element_size(self) -> usize {
        match self {
            TiffType::UInt8 | TiffType::Ascii | TiffType::Int8 | TiffType::Undefined => 1,
            TiffType::UInt16 | TiffType::Int16 => 2,
            TiffType::UInt32 | TiffType::Int32 => 4,
            TiffType::URational | TiffType::SRational => 8,
            TiffType::Comment => 1,
        }
    }

    pub const fn is_rational(self) -> bool {
        matches!(self, TiffType::URational | TiffType::SRational)
    }

    pub const fn name(self) -> &'static str {
        match self {
            TiffType::UInt8 => "int8u",
            TiffType::Ascii => "string",
            TiffType::UInt16 => "int16u",
            TiffType::UInt32 => "int32u",
            TiffType::URational => "rational64u",
            TiffType::Int8 => "int8s",
            TiffType::Undefined => "undef",
            TiffType::Int16 => "int16s",
            TiffType::Int32 => "int32s",
            TiffType::SRational => "rational64s",
            TiffType::Comment => "comment",
        }
    }
}

impl std::fmt::Display for TiffType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-element byte size of a wire type code, or `0` if this engine has
/// no decode semantics for it. This is the primary validity probe used
/// by the reader: a zero return means skip the entry rather than error
/// the whole directory (invariant: unknown types are elided, not fatal).
pub fn type_size(type_code: u16) -> u32 {
    TiffType::from_u16(type_code)
        .map(|t| t.element_size() as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_sizes() {
        assert_eq!(TiffType::UInt8.element_size(), 1);
        assert_eq!(TiffType::UInt16.element_size(), 2);
        assert_eq!(TiffType::UInt32.element_size(), 4);
        assert_eq!(TiffType::URational.element_size(), 8);
    }

    #[test]
    fn unknown_type_has_zero_size() {
        assert_eq!(type_size(11), 0); // float — not in this engine's type table
        assert_eq!(type_size(129), 0); // EXIF 3.0 UTF-8 — likewise
        assert_eq!(type_size(0), 0);
    }

    #[test]
    fn round_trips_wire_code() {
        for code in [1u16, 2, 3, 4, 5, 6, 7, 8, 9, 10] {
            let t = TiffType::from_u16(code).unwrap();
            assert_eq!(t.to_u16(), Some(code));
        }
        assert_eq!(TiffType::Comment.to_u16(), None);
    }
}
