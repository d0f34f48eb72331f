//! The encoder: reconciles a target [`MetadataMap`] against an existing
//! tree, producing the tree [`crate::writer::write_tree`] should
//! serialize.
//!
//! Unlike the decoder, this isn't a pure walk of one input — it's a
//! diff between two. For every entry already in the tree: if the
//! metadata map carries no key at that entry's `(family, group, tag)`,
//! the entry is dropped (deleted). If it does, the entry's value is
//! replaced by the map's; the replacement is flagged as non-patchable
//! the moment any surviving value's wire size grows past what it
//! previously occupied, or anything is deleted or added, since a
//! byte-patching writer can only overwrite in place when nothing moved.
//! For every map key with no matching tree entry, the path from the
//! root down to its group is synthesized from the structure table
//! (mirroring [`crate::structure::parent_of`]'s chain), creating
//! whatever intermediate directories and pointer entries are missing,
//! and the new entry is appended as a child of the directory at the
//! end of that path.

use std::collections::BTreeSet;

use crate::decoder::family_for;
use crate::metadata::{MetadataKey, MetadataMap};
use crate::structure::{self, ExtendedTag, Group, NodeKind};
use crate::tree::{Node, Payload, TagId};
use crate::value::Value;

const USER_COMMENT: u16 = 0x9286;

/// The tree that should now be written, plus whether every surviving
/// value fit in its old footprint — a byte-patching writer can use
/// `in_place_patchable` to skip straight to overwriting old entry
/// slots rather than re-laying out the whole directory chain.
pub struct Encoded {
    pub root: Node,
    pub in_place_patchable: bool,
}

/// Reconcile `root` against `target`. `root` must be the tree's
/// outermost `Directory` (its `Group::Root` node) — the function panics
/// on anything else, since a metadata map with no entries under that
/// root still needs *some* directory to hang newly-added keys off of.
pub fn encode(root: &Node, target: &MetadataMap) -> Encoded {
    assert!(matches!(root, Node::Directory { group: Group::Root, .. }), "encode() reconciles the outermost IFD0 directory");

    let mut seen = BTreeSet::new();
    let mut patchable = true;
    let mut new_root = reconcile(root, target, &mut seen, &mut patchable)
        .expect("the root directory is never deleted by reconciliation");
    add_missing(&mut new_root, target, &seen, &mut patchable);
    Encoded { root: new_root, in_place_patchable: patchable }
}

fn reconcile(node: &Node, target: &MetadataMap, seen: &mut BTreeSet<MetadataKey>, patchable: &mut bool) -> Option<Node> {
    match node {
        Node::Directory { group, children, next } => {
            let new_children = children.iter().filter_map(|c| reconcile(c, target, seen, patchable)).collect();
            let new_next = next.as_deref().and_then(|n| reconcile(n, target, seen, patchable)).map(Box::new);
            Some(Node::Directory { group: *group, children: new_children, next: new_next })
        }

        Node::Entry { id, value } => {
            let new_value = reconcile_value(*id, value, target, seen, patchable)?;
            Some(Node::Entry { id: *id, value: new_value })
        }

        Node::SizeEntry { id, value, companion_tag } => {
            let new_value = reconcile_value(*id, value, target, seen, patchable)?;
            Some(Node::SizeEntry { id: *id, value: new_value, companion_tag: *companion_tag })
        }

        Node::ArrayElement { id, value } => {
            let new_value = reconcile_value(*id, value, target, seen, patchable)?;
            Some(Node::ArrayElement { id: *id, value: new_value })
        }

        Node::DataEntry { id, payload, companion_tag } => {
            let key = MetadataKey::new(family_for(id.group), id.group, id.tag);
            seen.insert(key.clone());
            match target.get(&key) {
                None => {
                    *patchable = false;
                    None
                }
                Some(new_value) => {
                    let bytes = new_value.as_bytes().map(<[u8]>::to_vec).unwrap_or_default();
                    if bytes.len() > payload.len() {
                        *patchable = false;
                    }
                    Some(Node::DataEntry { id: *id, payload: Payload::Owned(bytes), companion_tag: *companion_tag })
                }
            }
        }

        Node::SubIfdEntry { id, child } => {
            let new_child = reconcile(child, target, seen, patchable)?;
            Some(Node::SubIfdEntry { id: *id, child: Box::new(new_child) })
        }

        Node::MakernoteEntry { id, vendor, byte_order, base_offset, child } => {
            let new_child = reconcile(child, target, seen, patchable)?;
            Some(Node::MakernoteEntry { id: *id, vendor: *vendor, byte_order: *byte_order, base_offset: *base_offset, child: Box::new(new_child) })
        }

        Node::ArrayEntry { id, element_size, elements } => {
            let new_elements = elements.iter().filter_map(|e| reconcile(e, target, seen, patchable)).collect();
            Some(Node::ArrayEntry { id: *id, element_size: *element_size, elements: new_elements })
        }
    }
}

/// Look up `id`'s key in `target`, mark it seen, and return its
/// replacement value (reversing the decoder's UserComment special case
/// per spec.md §4.6c), or `None` if the key has been removed.
fn reconcile_value(id: TagId, old: &Value, target: &MetadataMap, seen: &mut BTreeSet<MetadataKey>, patchable: &mut bool) -> Option<Value> {
    let key = MetadataKey::new(family_for(id.group), id.group, id.tag);
    seen.insert(key.clone());
    let new_value = target.get(&key)?;
    let wire_value = to_wire(id, new_value);
    if wire_value.byte_len() > old.byte_len() {
        *patchable = false;
    }
    Some(wire_value)
}

/// Undo [`crate::decoder`]'s UserComment retyping: a `Comment` destined
/// for `(ExifIFD, 0x9286)` goes back out as `Undefined` with an
/// `"ASCII\0\0\0"` charset prefix, matching the inverse of
/// `decoder::decode_user_comment`.
fn to_wire(id: TagId, value: &Value) -> Value {
    match value {
        Value::Comment(text) if id.tag == USER_COMMENT && id.group == Group::Exif => {
            let mut bytes = b"ASCII\0\0\0".to_vec();
            bytes.extend_from_slice(text.as_bytes());
            Value::Undefined(bytes)
        }
        other => other.clone(),
    }
}

/// Append every `target` key not already accounted for in `seen`,
/// synthesizing whatever directory path its group needs.
fn add_missing(root: &mut Node, target: &MetadataMap, seen: &BTreeSet<MetadataKey>, patchable: &mut bool) {
    for (key, value) in target.iter() {
        if seen.contains(key) {
            continue;
        }
        let Ok(group) = key.group.parse::<Group>() else { continue };
        let Some(dir) = ensure_path(root, group) else { continue };
        dir.add_child(leaf_for(TagId::new(key.tag, group), value.clone()));
        *patchable = false;
    }
}

/// Build (or find) the directory for `target`, creating every
/// intermediate pointer entry and directory the structure table says
/// lies between the tree root and it.
fn ensure_path(root: &mut Node, target: Group) -> Option<&mut Node> {
    if target == Group::Root {
        return Some(root);
    }
    if root.find_directory_mut(target).is_some() {
        return root.find_directory_mut(target);
    }
    let mut current = root;
    for row in path_to(target) {
        let ExtendedTag::Tag(tag) = row.ext_tag else { return None };
        let child_group = row.child_group?;
        current = ensure_step(current, tag, row.group, row.kind, child_group)?;
    }
    Some(current)
}

/// The chain of structure-table rows from the root down to `target`,
/// found by walking [`structure::parent_of`] backwards from `target`
/// and reversing.
fn path_to(target: Group) -> Vec<&'static structure::StructureRow> {
    let mut chain = Vec::new();
    let mut current = target;
    while let Some(row) = structure::parent_of(current) {
        chain.push(row);
        current = row.group;
    }
    chain.reverse();
    chain
}

/// Find `dir`'s existing pointer entry for `tag`, or create one
/// (together with its empty child directory) and return the child.
fn ensure_step(dir: &mut Node, tag: u16, group: Group, kind: NodeKind, child_group: Group) -> Option<&mut Node> {
    let Node::Directory { children, .. } = dir else { return None };

    let existing = children.iter().position(|c| match c {
        Node::SubIfdEntry { id, .. } | Node::MakernoteEntry { id, .. } => id.tag == tag && id.group == group,
        _ => false,
    });

    let idx = existing.unwrap_or_else(|| {
        let empty = Node::Directory { group: child_group, children: Vec::new(), next: None };
        let pointer = match kind {
            NodeKind::MakernoteEntry => Node::MakernoteEntry {
                id: TagId::new(tag, group),
                vendor: None,
                byte_order: crate::byte_order::ByteOrder::LittleEndian,
                base_offset: 0,
                child: Box::new(empty),
            },
            _ => Node::SubIfdEntry { id: TagId::new(tag, group), child: Box::new(empty) },
        };
        children.push(pointer);
        children.len() - 1
    });

    match &mut children[idx] {
        Node::SubIfdEntry { child, .. } | Node::MakernoteEntry { child, .. } => Some(child.as_mut()),
        _ => None,
    }
}

fn leaf_for(id: TagId, value: Value) -> Node {
    match structure::lookup(id.tag, id.group) {
        Some(row) if row.kind == NodeKind::DataEntry => {
            let companion_tag = row.companion.map_or(0, |(tag, _)| tag);
            let bytes = value.as_bytes().map(<[u8]>::to_vec).unwrap_or_default();
            Node::DataEntry { id, payload: Payload::Owned(bytes), companion_tag }
        }
        Some(row) if row.kind == NodeKind::SizeEntry => {
            let companion_tag = row.companion.map_or(0, |(tag, _)| tag);
            Node::SizeEntry { id, value, companion_tag }
        }
        _ => Node::Entry { id, value },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_with(entries: Vec<Node>) -> Node {
        Node::Directory { group: Group::Root, children: entries, next: None }
    }

    #[test]
    fn entry_with_no_matching_key_is_deleted() {
        let root = root_with(vec![Node::Entry { id: TagId::new(0x010F, Group::Root), value: Value::Ascii("Canon".into()) }]);
        let target = MetadataMap::new();
        let encoded = encode(&root, &target);
        let Node::Directory { children, .. } = &encoded.root else { unreachable!() };
        assert!(children.is_empty());
        assert!(!encoded.in_place_patchable);
    }

    #[test]
    fn same_size_overwrite_stays_patchable() {
        let root = root_with(vec![Node::Entry { id: TagId::new(0x010F, Group::Root), value: Value::Ascii("Canon".into()) }]);
        let mut target = MetadataMap::new();
        target.set(MetadataKey::new(family_for(Group::Root), Group::Root, 0x010F), Value::Ascii("Nikon".into()));
        let encoded = encode(&root, &target);
        assert!(encoded.in_place_patchable);
        let Node::Directory { children, .. } = &encoded.root else { unreachable!() };
        assert_eq!(children.len(), 1);
        assert_eq!(children[0], Node::Entry { id: TagId::new(0x010F, Group::Root), value: Value::Ascii("Nikon".into()) });
    }

    #[test]
    fn growing_a_value_marks_not_patchable() {
        let root = root_with(vec![Node::Entry { id: TagId::new(0x010F, Group::Root), value: Value::Ascii("x".into()) }]);
        let mut target = MetadataMap::new();
        target.set(MetadataKey::new(family_for(Group::Root), Group::Root, 0x010F), Value::Ascii("a much longer maker name".into()));
        let encoded = encode(&root, &target);
        assert!(!encoded.in_place_patchable);
    }

    #[test]
    fn new_key_under_exif_synthesizes_the_subifd_path() {
        let root = root_with(vec![]);
        let mut target = MetadataMap::new();
        target.set(MetadataKey::new("EXIF", Group::Exif, 0x829A), Value::URational(vec![crate::value::URational::new(1, 200)]));
        let encoded = encode(&root, &target);
        let Node::Directory { children, .. } = &encoded.root else { unreachable!() };
        assert_eq!(children.len(), 1);
        let Node::SubIfdEntry { id, child } = &children[0] else { panic!("expected a synthesized ExifIFD pointer") };
        assert_eq!(id.tag, 0x8769);
        let Node::Directory { group, children, .. } = child.as_ref() else { unreachable!() };
        assert_eq!(*group, Group::Exif);
        assert_eq!(children.len(), 1);
        assert!(!encoded.in_place_patchable);
    }

    #[test]
    fn reusing_an_existing_subifd_does_not_duplicate_it() {
        let exif = Node::Directory {
            group: Group::Exif,
            children: vec![Node::Entry { id: TagId::new(0x829A, Group::Exif), value: Value::URational(vec![crate::value::URational::new(1, 100)]) }],
            next: None,
        };
        let root = root_with(vec![Node::SubIfdEntry { id: TagId::new(0x8769, Group::Root), child: Box::new(exif) }]);
        let mut target = MetadataMap::new();
        target.set(MetadataKey::new("EXIF", Group::Exif, 0x829A), Value::URational(vec![crate::value::URational::new(1, 100)]));
        target.set(MetadataKey::new("EXIF", Group::Exif, 0x9202), Value::URational(vec![crate::value::URational::new(28, 10)]));
        let encoded = encode(&root, &target);
        let Node::Directory { children, .. } = &encoded.root else { unreachable!() };
        assert_eq!(children.len(), 1, "a second ExifIFD pointer must not be created");
        let Node::SubIfdEntry { child, .. } = &children[0] else { unreachable!() };
        let Node::Directory { children, .. } = child.as_ref() else { unreachable!() };
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn user_comment_round_trips_through_the_charset_prefix() {
        let mut bytes = b"ASCII\0\0\0".to_vec();
        bytes.extend_from_slice(b"hi");
        let root = root_with(vec![Node::Entry { id: TagId::new(USER_COMMENT, Group::Exif), value: Value::Undefined(bytes) }]);
        let mut target = MetadataMap::new();
        target.set(MetadataKey::new("EXIF", Group::Exif, USER_COMMENT), Value::Comment("hello".into()));
        let encoded = encode(&root, &target);
        let Node::Directory { children, .. } = &encoded.root else { unreachable!() };
        let Node::Entry { value, .. } = &children[0] else { unreachable!() };
        assert_eq!(value.as_bytes().map(|b| &b[8..]), Some(b"hello".as_slice()));
    }
}
