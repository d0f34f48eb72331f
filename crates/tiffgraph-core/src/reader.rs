//! The reader: walks a TIFF/EXIF byte buffer into a composite [`Node`]
//! tree, depth-first, resolving sub-IFDs and makernotes as it goes.
//!
//! Every malformed thing a directory can contain — a bad type code, a
//! dangling offset, a runaway entry count, a duplicate tag — is elided
//! with a [`Diagnostic`] pushed to the caller's list rather than
//! aborting the read. Only a broken header (no "II"/"MM", wrong magic,
//! truncated past recovery) is a hard [`Error`].

use std::collections::HashSet;

use crate::byte_order::ByteOrder;
use crate::error::{Diagnostic, Error, Result};
use crate::format::TiffType;
use crate::makernote::{detect_vendor, MakernoteVendor};
use crate::structure::{self, Group, NodeKind};
use crate::tree::{Node, Payload, TagId};
use crate::value::Value;

/// The reader's only configuration surface: how much of a hostile file
/// it is willing to trust before giving up on a directory or a value.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// A directory declaring more entries than this is rejected outright
    /// (spec's open question, resolved in favor of exiv2's newer-branch
    /// value rather than its older 256-entry one).
    pub directory_entry_limit: u16,
    /// A single entry's value is never trusted past this many bytes,
    /// regardless of what its count field claims.
    pub max_entry_span: u32,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { directory_entry_limit: 512, max_entry_span: 1 << 28 }
    }
}

/// Push a diagnostic and log it. The single choke point for every
/// non-fatal issue this module raises, so every one of them is both
/// visible to a `tracing` subscriber and collected for the caller.
fn record(diagnostics: &mut Vec<Diagnostic>, diag: Diagnostic) {
    tracing::warn!(%diag, "tiff directory issue");
    diagnostics.push(diag);
}

/// One parsed 12-byte entry, before it's dispatched to a [`Node`] shape.
struct ParsedEntry {
    tag: u16,
    value: Value,
}

/// Depth-first reader state. Immutable across a directory walk — each
/// recursive call (sub-IFD, makernote) either reuses `data`/`byte_order`
/// or builds a fresh `Reader` over a narrower slice (a makernote's own
/// byte range, under its own byte order).
struct Reader<'a> {
    data: &'a [u8],
    byte_order: ByteOrder,
    options: ReadOptions,
    vendors: &'a [&'a dyn MakernoteVendor],
}

/// Parse a full TIFF/EXIF buffer into its root directory chain.
///
/// Returns the root `Node::Directory` (IFD0, linked to IFD1 via `next`
/// if present) plus every non-fatal issue encountered along the way.
pub fn read(
    data: &[u8],
    options: ReadOptions,
    vendors: &[&dyn MakernoteVendor],
) -> Result<(Node, Vec<Diagnostic>)> {
    if data.len() < 8 {
        return Err(Error::UnexpectedEof { need: 8, have: data.len() });
    }
    let marker = [data[0], data[1]];
    let byte_order = ByteOrder::from_marker(marker)?;
    let magic = byte_order.read_u16([data[2], data[3]]);
    if magic != 42 {
        return Err(Error::InvalidTiffMagic(magic));
    }
    let first_offset = byte_order.read_u32([data[4], data[5], data[6], data[7]]);

    let reader = Reader { data, byte_order, options, vendors };
    let mut diagnostics = Vec::new();
    let mut visited = HashSet::new();
    let mut offset = first_offset;
    let mut idx = 0usize;
    let mut dirs = Vec::new();

    while offset != 0 && idx < 100 {
        let group = if idx == 0 { Group::Root } else { Group::Thumbnail };
        let (node, next) = reader.read_directory(offset, group, None, &mut visited, &mut diagnostics)?;
        dirs.push(node);
        offset = next;
        idx += 1;
    }

    let mut iter = dirs.into_iter().rev();
    let mut acc = iter.next();
    for mut d in iter {
        if let Some(n) = acc.take() {
            d.add_next(n);
        }
        acc = Some(d);
    }
    acc.ok_or_else(|| Error::NoRootDirectory("IFD chain is empty".into()))
        .map(|root| (root, diagnostics))
}

impl<'a> Reader<'a> {
    /// Read one directory at `offset`, recursing into any sub-IFDs or
    /// makernotes it names. Returns the directory node plus the raw
    /// `next` offset (0 if none) for the caller to chain or discard.
    fn read_directory(
        &self,
        offset: u32,
        group: Group,
        make: Option<&str>,
        visited: &mut HashSet<u32>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<(Node, u32)> {
        let offset_usize = offset as usize;
        if offset_usize >= self.data.len() {
            return Err(Error::IfdOffsetOutOfBounds(offset, self.data.len()));
        }
        if !visited.insert(offset) {
            return Err(Error::RecursiveIfd(offset));
        }

        let declared_count = self.read_u16(offset_usize)?;
        if declared_count > self.options.directory_entry_limit {
            record(diagnostics, Diagnostic::DirectoryRejected {
                offset,
                count: declared_count,
                limit: self.options.directory_entry_limit,
            });
            return Ok((Node::Directory { group, children: Vec::new(), next: None }, 0));
        }

        let entries_start = offset_usize + 2;
        let mut seen = HashSet::new();
        let mut parsed: Vec<ParsedEntry> = Vec::with_capacity(declared_count as usize);
        let mut current_make = make.map(str::to_owned);

        for i in 0..declared_count as usize {
            let entry_offset = entries_start + i * 12;
            if entry_offset + 12 > self.data.len() {
                record(diagnostics, Diagnostic::EntrySkipped {
                    tag: 0,
                    group,
                    reason: "entry table runs past end of buffer".into(),
                });
                break;
            }
            let tag = self.read_u16(entry_offset)?;
            let type_code = self.read_u16(entry_offset + 2)?;
            let raw_count = self.read_u32(entry_offset + 4)?;
            let value_field = [
                self.data[entry_offset + 8],
                self.data[entry_offset + 9],
                self.data[entry_offset + 10],
                self.data[entry_offset + 11],
            ];

            if !seen.insert(tag) {
                record(diagnostics, Diagnostic::DuplicateDropped { tag, group });
                continue;
            }

            let type_size = crate::format::type_size(type_code);
            if type_size == 0 {
                record(diagnostics, Diagnostic::SemanticSkipped { tag, group, type_code });
                continue;
            }

            let wanted = (type_size as u64).saturating_mul(raw_count as u64);
            if wanted > u32::MAX as u64 {
                record(diagnostics, Diagnostic::EntrySkipped {
                    tag,
                    group,
                    reason: format!("value size {wanted} overflows a 32-bit offset field"),
                });
                continue;
            }

            let mut count = raw_count;
            let mut size = wanted as u32;
            if size > self.options.max_entry_span {
                record(diagnostics, Diagnostic::ValueTruncated {
                    tag,
                    group,
                    wanted: size,
                    available: self.options.max_entry_span,
                });
                size = self.options.max_entry_span;
                count = size / type_size;
            }

            let bytes: &[u8] = if size <= 4 {
                &value_field[..size as usize]
            } else {
                let data_offset = self.byte_order.read_u32(value_field) as usize;
                let end = data_offset.saturating_add(size as usize);
                if data_offset >= self.data.len() || end > self.data.len() {
                    let available = self.data.len().saturating_sub(data_offset) as u32;
                    record(diagnostics, Diagnostic::ValueTruncated { tag, group, wanted: size, available });
                    if available == 0 {
                        record(diagnostics, Diagnostic::EntrySkipped {
                            tag,
                            group,
                            reason: "value offset lies outside the buffer".into(),
                        });
                        continue;
                    }
                    count = available / type_size;
                    &self.data[data_offset..self.data.len()]
                } else {
                    &self.data[data_offset..end]
                }
            };

            let Some(value) = Value::decode(type_code, count, bytes, self.byte_order) else {
                record(diagnostics, Diagnostic::SemanticSkipped { tag, group, type_code });
                continue;
            };

            if group == Group::Root && tag == 0x010F {
                current_make = value.as_str().map(str::to_owned);
            }

            parsed.push(ParsedEntry { tag, value });
        }

        let next_pos = entries_start + declared_count as usize * 12;
        let next_ifd = if next_pos + 4 <= self.data.len() { self.read_u32(next_pos)? } else { 0 };

        let mut children = Vec::with_capacity(parsed.len());
        for (i, entry) in parsed.iter().enumerate() {
            let id = TagId::new(entry.tag, group);
            let row = structure::lookup(entry.tag, group);
            let kind = row.map(|r| r.kind).unwrap_or(NodeKind::Entry);

            let node = match kind {
                NodeKind::Entry | NodeKind::Directory => Node::Entry { id, value: entry.value.clone() },

                NodeKind::SizeEntry => {
                    let companion_tag = row.and_then(|r| r.companion).map(|(t, _)| t).unwrap_or(0);
                    Node::SizeEntry { id, value: entry.value.clone(), companion_tag }
                }

                NodeKind::DataEntry => {
                    let companion_tag = row.and_then(|r| r.companion).map(|(t, _)| t).unwrap_or(0);
                    let len = parsed
                        .iter()
                        .find(|e| e.tag == companion_tag)
                        .and_then(|e| e.value.as_u32())
                        .unwrap_or(0) as usize;
                    let data_offset = entry.value.as_u32().unwrap_or(0) as usize;
                    let end = data_offset.saturating_add(len);
                    let payload = if end > self.data.len() {
                        record(diagnostics, Diagnostic::NonContiguousStrips { tag: entry.tag, group });
                        Payload::Borrowed(data_offset.min(self.data.len())..self.data.len())
                    } else {
                        Payload::Borrowed(data_offset..end)
                    };
                    Node::DataEntry { id, payload, companion_tag }
                }

                NodeKind::SubIfdEntry => {
                    let child_group = row.and_then(|r| r.child_group).unwrap_or(group);
                    let child_offset = entry.value.as_u32().unwrap_or(0);
                    match self.read_directory(child_offset, child_group, current_make.as_deref(), visited, diagnostics) {
                        Ok((child, _)) => Node::SubIfdEntry { id, child: Box::new(child) },
                        Err(_) => {
                            record(diagnostics, Diagnostic::EntrySkipped {
                                tag: entry.tag,
                                group,
                                reason: "sub-IFD could not be read".into(),
                            });
                            Node::Entry { id, value: entry.value.clone() }
                        }
                    }
                }

                NodeKind::MakernoteEntry => {
                    self.read_makernote(id, entry, current_make.as_deref(), diagnostics)
                }

                NodeKind::ArrayEntry => self.read_array_entry(id, entry),
            };

            let _ = i;
            children.push(node);
        }

        Ok((Node::Directory { group, children, next: None }, next_ifd))
    }

    fn read_makernote(
        &self,
        id: TagId,
        entry: &ParsedEntry,
        make: Option<&str>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Node {
        let blob = entry.value.as_bytes().unwrap_or(&[]);
        let vendor = make.and_then(|m| detect_vendor(self.vendors, m));
        let Some(vendor) = vendor else {
            record(diagnostics, Diagnostic::MakernoteUnrecognized { make: make.map(str::to_owned) });
            return Node::Entry { id, value: entry.value.clone() };
        };
        let Some(header) = vendor.parse_header(blob, self.byte_order) else {
            record(diagnostics, Diagnostic::MakernoteUnrecognized { make: make.map(str::to_owned) });
            return Node::Entry { id, value: entry.value.clone() };
        };

        let sub = Reader { data: blob, byte_order: header.byte_order, options: self.options, vendors: self.vendors };
        let mut sub_visited = HashSet::new();
        match sub.read_directory(header.ifd_offset, Group::MakernoteMain, None, &mut sub_visited, diagnostics) {
            Ok((child, _)) => Node::MakernoteEntry {
                id,
                vendor: Some(vendor.name()),
                byte_order: header.byte_order,
                base_offset: header.base_offset,
                child: Box::new(child),
            },
            Err(_) => {
                record(diagnostics, Diagnostic::EntrySkipped {
                    tag: id.tag,
                    group: id.group,
                    reason: "recognized makernote header but its IFD did not parse".into(),
                });
                Node::Entry { id, value: entry.value.clone() }
            }
        }
    }

    fn read_array_entry(&self, id: TagId, entry: &ParsedEntry) -> Node {
        let bytes = entry.value.as_bytes().unwrap_or(&[]);
        let elem_type = array_element_type(id.tag, id.group);
        let elem_size = elem_type.element_size();
        let elements = bytes
            .chunks_exact(elem_size)
            .enumerate()
            .map(|(i, chunk)| {
                let value = elem_type
                    .to_u16()
                    .and_then(|code| Value::decode(code, 1, chunk, self.byte_order))
                    .unwrap_or_else(|| Value::Undefined(chunk.to_vec()));
                Node::ArrayElement { id: TagId::new(i as u16, Group::MakernoteArray(id.tag)), value }
            })
            .collect();
        Node::ArrayEntry { id, element_size: elem_size, elements }
    }

    fn read_u16(&self, offset: usize) -> Result<u16> {
        if offset + 2 > self.data.len() {
            return Err(Error::UnexpectedEof { need: offset + 2, have: self.data.len() });
        }
        Ok(self.byte_order.read_u16([self.data[offset], self.data[offset + 1]]))
    }

    fn read_u32(&self, offset: usize) -> Result<u32> {
        if offset + 4 > self.data.len() {
            return Err(Error::UnexpectedEof { need: offset + 4, have: self.data.len() });
        }
        Ok(self.byte_order.read_u32([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]))
    }
}

/// Canon's `CameraSettings` (0x0001) and `ShotInfo` (0x0004) are both
/// arrays of signed 16-bit elements; every other array-shaped tag falls
/// back to raw bytes since this engine has no other array vendor wired
/// in yet.
fn array_element_type(tag: u16, group: Group) -> TiffType {
    match (group, tag) {
        (Group::MakernoteMain, 0x0001) | (Group::MakernoteMain, 0x0004) => TiffType::Int16,
        _ => TiffType::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le_header(first_ifd: u32) -> Vec<u8> {
        let mut v = vec![0x49, 0x49, 0x2A, 0x00];
        v.extend_from_slice(&first_ifd.to_le_bytes());
        v
    }

    #[test]
    fn rejects_bad_magic() {
        let mut data = vec![0x49, 0x49, 0x2B, 0x00];
        data.extend_from_slice(&8u32.to_le_bytes());
        data.extend_from_slice(&[0, 0]);
        let err = read(&data, ReadOptions::default(), &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidTiffMagic(0x2B)));
    }

    #[test]
    fn reads_single_entry_ifd0() {
        let mut data = le_header(8);
        // one entry: tag 0x0112 (Orientation), type 3 (UInt16), count 1, value 1
        data.extend_from_slice(&1u16.to_le_bytes()); // count
        data.extend_from_slice(&0x0112u16.to_le_bytes());
        data.extend_from_slice(&3u16.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&[1, 0, 0, 0]);
        data.extend_from_slice(&0u32.to_le_bytes()); // next ifd

        let (root, diags) = read(&data, ReadOptions::default(), &[]).unwrap();
        assert!(diags.is_empty());
        match root {
            Node::Directory { group, children, next } => {
                assert_eq!(group, Group::Root);
                assert_eq!(children.len(), 1);
                assert!(next.is_none());
                match &children[0] {
                    Node::Entry { id, value } => {
                        assert_eq!(id.tag, 0x0112);
                        assert_eq!(value.as_u32(), Some(1));
                    }
                    other => panic!("unexpected node {other:?}"),
                }
            }
            other => panic!("expected directory, got {other:?}"),
        }
    }

    #[test]
    fn oversized_directory_is_rejected_not_fatal() {
        let mut data = le_header(8);
        data.extend_from_slice(&u16::MAX.to_le_bytes());
        data.resize(data.len() + 16, 0);

        let mut opts = ReadOptions::default();
        opts.directory_entry_limit = 4;
        let (root, diags) = read(&data, opts, &[]).unwrap();
        assert!(diags.iter().any(|d| matches!(d, Diagnostic::DirectoryRejected { .. })));
        match root {
            Node::Directory { children, .. } => assert!(children.is_empty()),
            other => panic!("expected directory, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_tag_is_dropped_with_diagnostic() {
        let mut data = le_header(8);
        data.extend_from_slice(&2u16.to_le_bytes()); // count
        for _ in 0..2 {
            data.extend_from_slice(&0x0112u16.to_le_bytes());
            data.extend_from_slice(&3u16.to_le_bytes());
            data.extend_from_slice(&1u32.to_le_bytes());
            data.extend_from_slice(&[1, 0, 0, 0]);
        }
        data.extend_from_slice(&0u32.to_le_bytes());

        let (root, diags) = read(&data, ReadOptions::default(), &[]).unwrap();
        assert!(diags.iter().any(|d| matches!(d, Diagnostic::DuplicateDropped { .. })));
        match root {
            Node::Directory { children, .. } => assert_eq!(children.len(), 1),
            other => panic!("expected directory, got {other:?}"),
        }
    }

    #[test]
    fn unknown_type_code_is_skipped_with_diagnostic() {
        let mut data = le_header(8);
        data.extend_from_slice(&1u16.to_le_bytes());
        data.extend_from_slice(&0x0112u16.to_le_bytes());
        data.extend_from_slice(&129u16.to_le_bytes()); // EXIF 3.0 UTF-8, not in this engine's type table
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(&0u32.to_le_bytes());

        let (root, diags) = read(&data, ReadOptions::default(), &[]).unwrap();
        assert!(diags.iter().any(|d| matches!(d, Diagnostic::SemanticSkipped { type_code: 129, .. })));
        match root {
            Node::Directory { children, .. } => assert!(children.is_empty()),
            other => panic!("expected directory, got {other:?}"),
        }
    }
}
