//! The writer: serializes a [`Node`] tree back to TIFF bytes.
//!
//! Mirrors the reader in reverse. A directory's serialization is four
//! regions in file order: `[entry_count][entries][next_ifd]` (the
//! header, sized by [`Node::size`]), a value pool (entries whose value
//! doesn't fit in the entry's inline 4-byte slot), a data pool (strip
//! payloads and binary arrays), and finally the recursively-serialized
//! sub-IFDs/makernotes/next-directory those entries point at. `Node`'s
//! own `write` method emits exactly one thing: its 12-byte directory
//! slot for a leaf, or the full four-region body for a directory.
//! `value_idx`/`data_idx` are the enclosing directory's running
//! cursors into its own value/data regions, advanced as each child is
//! emitted so the next child's overflow lands right after the last.

use crate::byte_order::ByteOrder;
use crate::error::{Error, Result};
use crate::format::TiffType;
use crate::tree::{Node, Payload};
use crate::value::Value;

/// Serialize `root` (the tree's outermost directory) to a complete
/// TIFF byte stream: the 8-byte header followed by the directory
/// chain, written at the conventional `ifd0` offset of 8. `buffer` is
/// the original file this tree was read from, needed to resolve any
/// surviving [`Payload::Borrowed`] data-entry ranges — `Node::write`
/// itself only ever sees [`Payload::Owned`] bytes, so those ranges are
/// materialized against `buffer` in a pre-pass before laying out.
pub fn write_tree(root: &Node, order: ByteOrder, buffer: &[u8]) -> Result<Vec<u8>> {
    const IFD0_OFFSET: u32 = 8;
    let materialized = materialize(root, buffer);
    let mut blob = Vec::with_capacity(materialized.size() as usize + materialized.size_data() as usize + IFD0_OFFSET as usize);
    blob.extend_from_slice(&order.marker());
    blob.extend_from_slice(&order.write_u16(0x002A));
    blob.extend_from_slice(&order.write_u32(IFD0_OFFSET));
    debug_assert_eq!(blob.len() as u32, IFD0_OFFSET);

    let mut value_idx = IFD0_OFFSET;
    let mut data_idx = IFD0_OFFSET;
    materialized.write(&mut blob, order, IFD0_OFFSET, &mut value_idx, &mut data_idx)?;
    Ok(blob)
}

/// Clone `node`, resolving every [`Payload::Borrowed`] range against
/// `buffer` into a [`Payload::Owned`] copy so the writer never needs
/// to carry the source buffer through its recursive layout pass.
fn materialize(node: &Node, buffer: &[u8]) -> Node {
    match node {
        Node::Directory { group, children, next } => Node::Directory {
            group: *group,
            children: children.iter().map(|c| materialize(c, buffer)).collect(),
            next: next.as_ref().map(|n| Box::new(materialize(n, buffer))),
        },
        Node::DataEntry { id, payload, companion_tag } => Node::DataEntry {
            id: *id,
            payload: Payload::Owned(payload.resolve(buffer).to_vec()),
            companion_tag: *companion_tag,
        },
        Node::SubIfdEntry { id, child } => Node::SubIfdEntry { id: *id, child: Box::new(materialize(child, buffer)) },
        Node::MakernoteEntry { id, vendor, byte_order, base_offset, child } => Node::MakernoteEntry {
            id: *id,
            vendor: *vendor,
            byte_order: *byte_order,
            base_offset: *base_offset,
            child: Box::new(materialize(child, buffer)),
        },
        Node::ArrayEntry { id, element_size, elements } => Node::ArrayEntry {
            id: *id,
            element_size: *element_size,
            elements: elements.iter().map(|e| materialize(e, buffer)).collect(),
        },
        Node::Entry { .. } | Node::SizeEntry { .. } | Node::ArrayElement { .. } => node.clone(),
    }
}

impl Node {
    /// Emit this node's 12-byte directory slot (leaf nodes), or its
    /// full directory body (directories), into `blob` at `offset`.
    /// `offset` must equal `blob.len()` at the point of the call — a
    /// node is always appended at the growing buffer's current end,
    /// never inserted. Returns the number of bytes this call appended.
    pub fn write(
        &self,
        blob: &mut Vec<u8>,
        order: ByteOrder,
        offset: u32,
        value_idx: &mut u32,
        data_idx: &mut u32,
    ) -> Result<u32> {
        let start = blob.len() as u32;
        if start != offset {
            return Err(Error::WriteSizeExceeded(offset as u64));
        }

        match self {
            Node::Directory { children, next, .. } => self.write_directory(blob, order, children, next.as_deref()),

            Node::Entry { id, value } => {
                reserve_entry_slot(blob);
                write_value_into_slot(blob, order, start, id.tag, value, value_idx)
            }
            Node::SizeEntry { id, value, .. } => {
                reserve_entry_slot(blob);
                write_value_into_slot(blob, order, start, id.tag, value, value_idx)
            }

            Node::DataEntry { id, payload, .. } => {
                reserve_entry_slot(blob);
                write_payload_into_slot(blob, order, start, id.tag, payload, data_idx)
            }

            Node::SubIfdEntry { id, child } => {
                reserve_entry_slot(blob);
                let child_offset = *data_idx;
                child.write(blob, order, child_offset, &mut 0, data_idx)?;
                *data_idx = blob.len() as u32;
                patch_entry(blob, start, order, id.tag, TiffType::UInt32, 1, order.write_u32(child_offset));
                Ok(blob.len() as u32 - start)
            }

            Node::MakernoteEntry { id, byte_order, child, .. } => {
                reserve_entry_slot(blob);
                let child_offset = *data_idx;
                child.write(blob, *byte_order, child_offset, &mut 0, data_idx)?;
                *data_idx = blob.len() as u32;
                patch_entry(blob, start, order, id.tag, TiffType::Undefined, child.size(), order.write_u32(child_offset));
                Ok(blob.len() as u32 - start)
            }

            Node::ArrayEntry { id, elements, .. } => {
                reserve_entry_slot(blob);
                let array_offset = *data_idx;
                for el in elements {
                    if let Node::ArrayElement { value, .. } = el {
                        blob.extend_from_slice(&value.encode(order));
                    }
                }
                *data_idx = blob.len() as u32;
                let byte_len = *data_idx - array_offset;
                patch_entry(blob, start, order, id.tag, TiffType::Undefined, byte_len, order.write_u32(array_offset));
                Ok(blob.len() as u32 - start)
            }

            Node::ArrayElement { id, value } => {
                reserve_entry_slot(blob);
                write_value_into_slot(blob, order, start, id.tag, value, value_idx)
            }
        }
    }

    /// Lay out a directory's four regions and recurse into its
    /// pointer-shaped entries and its `next` link.
    fn write_directory(&self, blob: &mut Vec<u8>, order: ByteOrder, children: &[Node], next: Option<&Node>) -> Result<u32> {
        let header_start = blob.len() as u32;
        let n = children.len() as u16;
        blob.extend_from_slice(&order.write_u16(n));
        for _ in children {
            blob.extend_from_slice(&[0u8; 12]);
        }
        let next_ifd_pos = blob.len() as u32;
        blob.extend_from_slice(&[0u8; 4]);

        let mut value_idx = blob.len() as u32;
        let mut unused = value_idx;
        // Plain entries that overflow land in the value pool first...
        for (idx, child) in children.iter().enumerate() {
            if matches!(child, Node::Entry { .. } | Node::SizeEntry { .. } | Node::ArrayElement { .. }) {
                let slot = header_start + 2 + idx as u32 * 12;
                child.write(blob, order, slot, &mut value_idx, &mut unused)?;
            }
        }
        let mut data_idx = blob.len() as u32;
        // ...then data entries, pointer entries, and binary arrays.
        for (idx, child) in children.iter().enumerate() {
            if !matches!(child, Node::Entry { .. } | Node::SizeEntry { .. } | Node::ArrayElement { .. }) {
                let slot = header_start + 2 + idx as u32 * 12;
                child.write(blob, order, slot, &mut unused, &mut data_idx)?;
            }
        }

        let next_offset = match next {
            Some(n) => {
                let pos = blob.len() as u32;
                n.write(blob, order, pos, &mut unused, &mut data_idx)?;
                pos
            }
            None => 0,
        };
        blob[next_ifd_pos as usize..next_ifd_pos as usize + 4].copy_from_slice(&order.write_u32(next_offset));

        Ok(blob.len() as u32 - header_start)
    }
}

/// Push a zeroed 12-byte placeholder for one directory entry.
fn reserve_entry_slot(blob: &mut Vec<u8>) {
    blob.extend_from_slice(&[0u8; 12]);
}

/// Patch a previously-reserved 12-byte slot at `slot_start` with its
/// final `(tag, type, count, value_or_offset)` fields.
fn patch_entry(blob: &mut [u8], slot_start: u32, order: ByteOrder, tag: u16, ty: TiffType, count: u32, value_or_offset: [u8; 4]) {
    let pos = slot_start as usize;
    blob[pos..pos + 2].copy_from_slice(&order.write_u16(tag));
    blob[pos + 2..pos + 4].copy_from_slice(&order.write_u16(ty.to_u16().unwrap_or(7)));
    blob[pos + 4..pos + 8].copy_from_slice(&order.write_u32(count));
    blob[pos + 8..pos + 12].copy_from_slice(&value_or_offset);
}

/// Write `value`'s bytes either inline (≤4 bytes, zero-padded) or into
/// the value pool at `*value_idx`, advancing the cursor on overflow.
fn write_value_into_slot(blob: &mut Vec<u8>, order: ByteOrder, slot_start: u32, tag: u16, value: &Value, value_idx: &mut u32) -> Result<u32> {
    let bytes = value.encode(order);
    let count = value.count() as u32;
    let ty = value.wire_type();
    if bytes.len() <= 4 {
        let mut inline = [0u8; 4];
        inline[..bytes.len()].copy_from_slice(&bytes);
        patch_entry(blob, slot_start, order, tag, ty, count, inline);
    } else {
        if bytes.len() as u64 > u32::MAX as u64 {
            return Err(Error::WriteSizeExceeded(bytes.len() as u64));
        }
        let pool_offset = *value_idx;
        blob.extend_from_slice(&bytes);
        *value_idx = blob.len() as u32;
        patch_entry(blob, slot_start, order, tag, ty, count, order.write_u32(pool_offset));
    }
    Ok(12)
}

/// Write a `DataEntry`'s backing bytes into the data pool at
/// `*data_idx`. `payload` never inlines — strip/tile data is always
/// out-of-line even when it happens to be ≤4 bytes, since its
/// companion `SizeEntry` is what callers expect to carry the count.
fn write_payload_into_slot(blob: &mut Vec<u8>, order: ByteOrder, slot_start: u32, tag: u16, payload: &Payload, data_idx: &mut u32) -> Result<u32> {
    let pool_offset = *data_idx;
    let Payload::Owned(bytes) = payload else {
        unreachable!("writer.rs::materialize resolves every Payload::Borrowed before write() sees it")
    };
    blob.extend_from_slice(bytes);
    *data_idx = blob.len() as u32;
    patch_entry(blob, slot_start, order, tag, TiffType::UInt32, bytes.len() as u32, order.write_u32(pool_offset));
    Ok(12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::Group;
    use crate::tree::TagId;

    #[test]
    fn writes_a_minimal_single_entry_directory() {
        let root = Node::Directory {
            group: Group::Root,
            children: vec![Node::Entry { id: TagId::new(0x010F, Group::Root), value: Value::Ascii("Canon".into()) }],
            next: None,
        };
        let bytes = write_tree(&root, ByteOrder::LittleEndian, &[]).unwrap();
        assert_eq!(&bytes[0..2], b"II");
        assert_eq!(ByteOrder::LittleEndian.read_u16([bytes[2], bytes[3]]), 0x002A);
        assert_eq!(ByteOrder::LittleEndian.read_u32([bytes[4], bytes[5], bytes[6], bytes[7]]), 8);
        assert_eq!(ByteOrder::LittleEndian.read_u16([bytes[8], bytes[9]]), 1);
        let tag = ByteOrder::LittleEndian.read_u16([bytes[10], bytes[11]]);
        assert_eq!(tag, 0x010F);
    }

    #[test]
    fn overflowing_value_moves_to_the_value_pool() {
        let long_string = "a".repeat(40);
        let root = Node::Directory {
            group: Group::Root,
            children: vec![Node::Entry { id: TagId::new(0x010E, Group::Root), value: Value::Ascii(long_string.clone()) }],
            next: None,
        };
        let bytes = write_tree(&root, ByteOrder::LittleEndian, &[]).unwrap();
        let offset = ByteOrder::LittleEndian.read_u32([bytes[16], bytes[17], bytes[18], bytes[19]]);
        assert!(offset >= 8 + 2 + 12 + 4);
        let stored = &bytes[offset as usize..offset as usize + long_string.len()];
        assert_eq!(std::str::from_utf8(stored).unwrap(), long_string);
    }

    #[test]
    fn sub_ifd_pointer_resolves_to_its_child_directory() {
        let exif = Node::Directory {
            group: Group::Exif,
            children: vec![Node::Entry {
                id: TagId::new(0x829A, Group::Exif),
                value: Value::URational(vec![crate::value::URational::new(1, 100)]),
            }],
            next: None,
        };
        let root = Node::Directory {
            group: Group::Root,
            children: vec![Node::SubIfdEntry { id: TagId::new(0x8769, Group::Root), child: Box::new(exif) }],
            next: None,
        };
        let bytes = write_tree(&root, ByteOrder::LittleEndian, &[]).unwrap();
        let pointer = ByteOrder::LittleEndian.read_u32([bytes[16], bytes[17], bytes[18], bytes[19]]);
        assert!(pointer as usize + 2 <= bytes.len());
        let exif_entry_count = ByteOrder::LittleEndian.read_u16([bytes[pointer as usize], bytes[pointer as usize + 1]]);
        assert_eq!(exif_entry_count, 1);
    }
}
