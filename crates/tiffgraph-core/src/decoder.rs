//! The decoder: flattens a composite [`Node`] tree into a
//! [`MetadataMap`], naming every slot by family/group/tag instead of by
//! tree position.
//!
//! A handful of tags need more than "copy the value across": a sub-IFD
//! classified by its `NewSubfileType` bit, a thumbnail whose three
//! pieces (offset, length, format) live in different child nodes, a
//! Photoshop Image Resource Block nested inside an `Undefined` entry.
//! Those are the special cases below; everything else falls through the
//! default per-[`NodeKind`] mapping.

use crate::metadata::{MetadataKey, MetadataMap};
use crate::structure::Group;
use crate::tree::{Node, Payload, TagId};
use crate::value::Value;

/// Tag carrying a sub-IFD's `NewSubfileType` bitmask (bit 0 set = a
/// reduced-resolution/preview image rather than the primary one).
const NEW_SUBFILE_TYPE: u16 = 0x00FE;
const PHOTOSHOP_IMAGE_RESOURCES: u16 = 0x8649;
const USER_COMMENT: u16 = 0x9286;
const XMP_PACKET: u16 = 0x02BC;

/// A decoder for a Photoshop Image Resource Block's payload, yielding
/// the `(tag, value)` IPTC pairs it contains. Taken as a callback
/// rather than a direct dependency on `tiffgraph-iptc` so this crate
/// never depends on a crate that in turn depends on it — the same
/// inversion used for makernote vendors in [`crate::makernote`].
pub type IrbDecoder<'a> = dyn Fn(&[u8]) -> Vec<(u16, Value)> + 'a;

/// Walk `root` and produce the flat map the rest of this engine (and
/// its callers) read and write metadata through. `buffer` is the
/// original file bytes `DataEntry`/`Payload::Borrowed` ranges resolve
/// against. `irb_decoder`, if given, is invoked on every Photoshop
/// `ImageResources` (0x8649) entry found, per spec.md §4.6b.
pub fn decode(root: &Node, buffer: &[u8], irb_decoder: Option<&IrbDecoder<'_>>) -> MetadataMap {
    let mut map = MetadataMap::new();
    let mut d = Decoder { map: &mut map, buffer, irb_decoder };
    d.walk(root, family_for(root.group()));
    map.clear_dirty();
    map
}

struct Decoder<'a> {
    map: &'a mut MetadataMap,
    buffer: &'a [u8],
    irb_decoder: Option<&'a IrbDecoder<'a>>,
}

impl<'a> Decoder<'a> {
    fn walk(&mut self, node: &Node, family: &'static str) {
        match node {
            Node::Directory { group, children, next } => {
                let primary = is_primary_image_directory(*group, children);
                for c in children {
                    self.decode_entry(c, family, primary);
                }
                if let Some(n) = next {
                    self.walk(n, family_for(n.group()));
                }
            }
            other => self.decode_entry(other, family, true),
        }
    }

    fn decode_entry(&mut self, node: &Node, family: &'static str, primary: bool) {
        match node {
            Node::Directory { .. } => self.walk(node, family),

            Node::Entry { id, value } => self.insert_entry(*id, family, value),

            Node::SizeEntry { id, value, .. } => self.insert_entry(*id, family, value),

            Node::DataEntry { id, payload, .. } => {
                let key = MetadataKey::new(family, id.group, id.tag);
                self.map.set(key, Value::Undefined(payload.resolve(self.buffer).to_vec()));
            }

            Node::SubIfdEntry { id, child } => {
                let child_family = match id.group {
                    Group::Root if !primary => "Preview",
                    _ => family_for(child.group()),
                };
                self.walk(child, child_family);
            }

            Node::MakernoteEntry { id, child, .. } => {
                let _ = id;
                self.walk(child, "MakerNotes");
            }

            Node::ArrayEntry { id, elements, .. } => {
                for el in elements {
                    if let Node::ArrayElement { id: eid, value } = el {
                        self.map.set(MetadataKey::new("MakerNotes", eid.group, eid.tag), value.clone());
                    }
                }
                let _ = id;
            }

            Node::ArrayElement { id, value } => self.insert_entry(*id, family, value),
        }
    }

    fn insert_entry(&mut self, id: TagId, family: &'static str, value: &Value) {
        match id.tag {
            USER_COMMENT if id.group == Group::Exif => {
                self.map.set(MetadataKey::new(family, id.group, id.tag), decode_user_comment(value));
            }
            XMP_PACKET => {
                self.map.set(MetadataKey::new(family, id.group, id.tag), strip_xmp_leading_bytes(value));
            }
            PHOTOSHOP_IMAGE_RESOURCES => {
                self.map.set(MetadataKey::new(family, id.group, id.tag), value.clone());
                if let (Some(bytes), Some(decoder)) = (value.as_bytes(), self.irb_decoder) {
                    for (iptc_tag, iptc_value) in decoder(bytes) {
                        self.map.set(MetadataKey::new("IPTC", Group::Root, iptc_tag), iptc_value);
                    }
                }
            }
            _ => {
                self.map.set(MetadataKey::new(family, id.group, id.tag), value.clone());
            }
        }
    }
}

/// The `NewSubfileType` invariant (spec.md §4.6a): a sub-IFD entry whose
/// directory declares bit 0 of 0x00FE is a reduced-resolution/preview
/// image, not the frame the rest of this engine should treat as primary.
fn is_primary_image_directory(group: Group, children: &[Node]) -> bool {
    if !matches!(group, Group::SubIfd(_)) {
        return true;
    }
    let subfile_type = children.iter().find_map(|c| match c {
        Node::Entry { id, value } if id.tag == NEW_SUBFILE_TYPE => value.as_u32(),
        _ => None,
    });
    !matches!(subfile_type, Some(n) if n & 1 != 0)
}

pub(crate) fn family_for(group: Group) -> &'static str {
    match group {
        Group::Root | Group::Thumbnail => "IFD",
        Group::Exif => "EXIF",
        Group::Gps => "GPS",
        Group::Interop => "Interop",
        Group::SubIfd(_) => "SubIFD",
        Group::MakernoteMain | Group::MakernoteArray(_) => "MakerNotes",
        Group::Ignore => "Ignore",
    }
}

/// UserComment (0x9286) carries an 8-byte charset code ahead of the
/// text (`"ASCII\0\0\0"`, `"UNICODE\0"`, `"JIS\0\0\0\0\0"`, or all-zero
/// for unspecified/undefined). Retyped to [`Value::Comment`] with the
/// charset code stripped, per the `Comment` pseudo-type's contract.
fn decode_user_comment(value: &Value) -> Value {
    let Some(bytes) = value.as_bytes() else { return value.clone() };
    if bytes.len() < 8 {
        return Value::Comment(crate::charset::decode_auto(bytes));
    }
    let (code, text) = bytes.split_at(8);
    let charset = match code {
        b"ASCII\0\0\0" => crate::charset::Charset::Utf8,
        b"UNICODE\0" => crate::charset::Charset::Utf8,
        _ => return Value::Comment(crate::charset::decode_auto(text)),
    };
    Value::Comment(crate::charset::decode(text, charset))
}

/// An embedded XMP packet is sometimes preceded by a BOM or other
/// leading bytes before its `<?xpacket` prologue; strip back to the
/// prologue so downstream XML parsing doesn't choke on them.
fn strip_xmp_leading_bytes(value: &Value) -> Value {
    let Some(bytes) = value.as_bytes() else { return value.clone() };
    const PROLOGUE: &[u8] = b"<?xpacket";
    if let Some(pos) = bytes.windows(PROLOGUE.len()).position(|w| w == PROLOGUE) {
        if pos > 0 {
            return Value::Undefined(bytes[pos..].to_vec());
        }
    }
    value.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_order::ByteOrder;

    #[test]
    fn flattens_a_simple_directory() {
        let root = Node::Directory {
            group: Group::Root,
            children: vec![Node::Entry { id: TagId::new(0x010F, Group::Root), value: Value::Ascii("Canon".into()) }],
            next: None,
        };
        let map = decode(&root, &[], None);
        let key = MetadataKey::new("IFD", Group::Root, 0x010F);
        assert_eq!(map.get(&key), Some(&Value::Ascii("Canon".into())));
    }

    #[test]
    fn user_comment_strips_charset_prefix() {
        let mut bytes = b"ASCII\0\0\0".to_vec();
        bytes.extend_from_slice(b"hello");
        let root = Node::Directory {
            group: Group::Exif,
            children: vec![Node::Entry { id: TagId::new(USER_COMMENT, Group::Exif), value: Value::Undefined(bytes) }],
            next: None,
        };
        let map = decode(&root, &[], None);
        let key = MetadataKey::new("EXIF", Group::Exif, USER_COMMENT);
        assert_eq!(map.get(&key), Some(&Value::Comment("hello".into())));
    }

    #[test]
    fn data_entry_resolves_payload_against_the_buffer() {
        let buffer = b"xxxxJPEGDATAxxxx";
        let root = Node::Directory {
            group: Group::Thumbnail,
            children: vec![Node::DataEntry {
                id: TagId::new(0x0111, Group::Thumbnail),
                payload: Payload::Borrowed(4..12),
                companion_tag: 0x0117,
            }],
            next: None,
        };
        let map = decode(&root, buffer, None);
        let key = MetadataKey::new("IFD", Group::Thumbnail, 0x0111);
        assert_eq!(map.get(&key), Some(&Value::Undefined(b"JPEGDATA".to_vec())));
    }

    #[test]
    fn byte_order_is_reachable_for_test_builders() {
        let _ = ByteOrder::LittleEndian;
    }
}
