//! The composite tree: an in-memory mirror of a TIFF/EXIF directory
//! hierarchy, built by the reader, walked by the decoder and writer,
//! and rebuilt by the encoder.
//!
//! The source this engine is descended from expresses each slot as a
//! class in an inheritance hierarchy dispatched through a virtual
//! `accept(visitor)`. A tagged sum with one `match` is the same idea
//! without the vtable: [`Node`] is the sum, [`Node::accept`] is the
//! single dispatch point, and [`Visitor`] is the interface a pass
//! implements. Adding a ninth node kind is a compiler error at every
//! `match` until every visitor handles it — the enum does the job a
//! pile of `dyn Trait` objects would do, and does it at compile time.

use crate::structure::Group;
use crate::value::Value;

/// `(tag, group)` — the coordinate a decoder/encoder key maps to and
/// the key the structure table is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId {
    pub tag: u16,
    pub group: Group,
}

impl TagId {
    pub const fn new(tag: u16, group: Group) -> Self {
        Self { tag, group }
    }
}

/// An entry's payload, tracking whether it still borrows the original
/// file buffer or was reallocated by the encoder. This is the concrete
/// expression of the borrow/own duality a `Cow<[u8]>` would carry, kept
/// as plain byte ranges into a buffer held once at the tree root
/// instead of threading a lifetime through every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Byte range into the buffer the tree was read from.
    Borrowed(std::ops::Range<usize>),
    /// Bytes the encoder allocated (new or modified content).
    Owned(Vec<u8>),
}

impl Payload {
    pub fn len(&self) -> usize {
        match self {
            Payload::Borrowed(r) => r.len(),
            Payload::Owned(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn resolve<'a>(&'a self, buffer: &'a [u8]) -> &'a [u8] {
        match self {
            Payload::Borrowed(r) => &buffer[r.clone()],
            Payload::Owned(v) => v,
        }
    }
}

/// One slot in the composite tree. See the module doc for the
/// dispatch model; see each variant for the invariant it upholds.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A directory: an ordered list of entries plus an optional link
    /// to the next directory in the chain (IFD0 -> IFD1).
    Directory { group: Group, children: Vec<Node>, next: Option<Box<Node>> },

    /// A plain scalar/array entry fully decoded in place.
    Entry { id: TagId, value: Value },

    /// The offset half of a strip/tile pair: points at bytes living
    /// outside the directory's value pool. Always has a `SizeEntry`
    /// companion at `(companion_tag, id.group)`; the writer emits both
    /// from one contiguous byte run.
    DataEntry { id: TagId, payload: Payload, companion_tag: u16 },

    /// The count half of a strip/tile pair.
    SizeEntry { id: TagId, value: Value, companion_tag: u16 },

    /// A pointer entry whose value is the offset of another directory,
    /// carrying that directory as a child rather than a raw u32.
    SubIfdEntry { id: TagId, child: Box<Node> },

    /// The vendor makernote: an opaque pointer entry until the
    /// makernote factory recognizes the header, after which `child` is
    /// the vendor directory read under its own (possibly shifted)
    /// byte order and base offset.
    MakernoteEntry {
        id: TagId,
        vendor: Option<&'static str>,
        byte_order: crate::byte_order::ByteOrder,
        base_offset: i64,
        child: Box<Node>,
    },

    /// A binary blob decomposed into fixed-size elements (e.g. Canon's
    /// CameraSettings), each looked up by index rather than by TIFF
    /// tag semantics.
    ArrayEntry { id: TagId, element_size: usize, elements: Vec<Node> },

    /// One element of an `ArrayEntry`; `id.tag` is the element's index,
    /// `id.group` is `Group::MakernoteArray(container_tag)`.
    ArrayElement { id: TagId, value: Value },
}

impl Node {
    pub fn group(&self) -> Group {
        match self {
            Node::Directory { group, .. } => *group,
            Node::Entry { id, .. }
            | Node::DataEntry { id, .. }
            | Node::SizeEntry { id, .. }
            | Node::SubIfdEntry { id, .. }
            | Node::MakernoteEntry { id, .. }
            | Node::ArrayEntry { id, .. }
            | Node::ArrayElement { id, .. } => id.group,
        }
    }

    /// Append a child entry to a directory (or the array elements of an
    /// array entry), returning the pushed child. Every other variant is
    /// a no-op returning `None` — only directories, sub-IFDs, array
    /// entries, and (via delegation) makernote entries accept children.
    pub fn add_child(&mut self, child: Node) -> Option<&mut Node> {
        match self {
            Node::Directory { children, .. } => {
                children.push(child);
                children.last_mut()
            }
            Node::ArrayEntry { elements, .. } => {
                elements.push(child);
                elements.last_mut()
            }
            _ => None,
        }
    }

    /// Link the next directory in the IFD chain. A no-op returning
    /// `None` on anything but a directory.
    pub fn add_next(&mut self, next: Node) -> Option<&mut Node> {
        match self {
            Node::Directory { next: slot, .. } => {
                *slot = Some(Box::new(next));
                slot.as_deref_mut()
            }
            _ => None,
        }
    }

    /// Find the directory carrying `target` somewhere in this subtree,
    /// descending through sub-IFD and makernote pointer entries (whose
    /// own `group()` is their parent's, not their child's) and across
    /// the next-IFD chain. Used by the encoder's `add_path` (see
    /// `encoder.rs`) to locate the insertion point for a metadata key
    /// whose group already has a directory somewhere in the tree.
    pub fn find_directory_mut(&mut self, target: Group) -> Option<&mut Node> {
        if matches!(self, Node::Directory { .. }) && self.group() == target {
            return Some(self);
        }
        match self {
            Node::Directory { children, next, .. } => {
                for c in children.iter_mut() {
                    if let Some(found) = c.find_directory_mut(target) {
                        return Some(found);
                    }
                }
                next.as_deref_mut().and_then(|n| n.find_directory_mut(target))
            }
            Node::SubIfdEntry { child, .. } | Node::MakernoteEntry { child, .. } => child.find_directory_mut(target),
            _ => None,
        }
    }

    /// Size in bytes this node occupies in a directory's 12-byte-entry
    /// table plus whatever it contributes to the value pool when its
    /// value doesn't fit inline (>4 bytes).
    pub fn size(&self) -> u32 {
        match self {
            Node::Directory { children, .. } => 2 + children.len() as u32 * 12 + 4,
            Node::Entry { .. } | Node::SizeEntry { .. } | Node::DataEntry { .. } | Node::SubIfdEntry { .. } | Node::MakernoteEntry { .. } => 12,
            Node::ArrayEntry { .. } => 12,
            Node::ArrayElement { value, .. } => value.byte_len() as u32,
        }
    }

    /// Bytes this node contributes to the value/data pool beyond its
    /// inline 12-byte entry (0 if the value fits inline).
    pub fn size_data(&self) -> u32 {
        match self {
            Node::Entry { value, .. } | Node::SizeEntry { value, .. } => {
                let len = value.byte_len() as u32;
                if len > 4 { len } else { 0 }
            }
            Node::DataEntry { payload, .. } => payload.len() as u32,
            Node::SubIfdEntry { child, .. } | Node::MakernoteEntry { child, .. } => child.size(),
            Node::ArrayEntry { elements, .. } => elements.iter().map(Node::size_data_inline).sum(),
            Node::Directory { .. } | Node::ArrayElement { .. } => 0,
        }
    }

    fn size_data_inline(&self) -> u32 {
        match self {
            Node::ArrayElement { value, .. } => value.byte_len() as u32,
            other => other.size(),
        }
    }

    /// Dispatch to the matching visitor method. Container nodes are
    /// responsible for recursing into their own children from inside
    /// their visitor method — this is what lets a visitor skip a
    /// subtree (the decoder's Ignore group) just by not recursing.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Node::Directory { group, children, next } => visitor.visit_directory(*group, children, next.as_deref()),
            Node::Entry { id, value } => visitor.visit_entry(*id, value),
            Node::DataEntry { id, payload, companion_tag } => visitor.visit_data_entry(*id, payload, *companion_tag),
            Node::SizeEntry { id, value, companion_tag } => visitor.visit_size_entry(*id, value, *companion_tag),
            Node::SubIfdEntry { id, child } => visitor.visit_subifd_entry(*id, child),
            Node::MakernoteEntry { id, vendor, byte_order, base_offset, child } => {
                visitor.visit_makernote_entry(*id, *vendor, *byte_order, *base_offset, child)
            }
            Node::ArrayEntry { id, element_size, elements } => visitor.visit_array_entry(*id, *element_size, elements),
            Node::ArrayElement { id, value } => visitor.visit_array_element(*id, value),
        }
    }
}

/// One method per node kind, matching [`Node::accept`]'s dispatch.
/// Implemented by the decoder and writer; the encoder is a
/// reconciliation pass over the old tree and a metadata map rather
/// than a pure reader of one, so it walks `Node` directly instead of
/// implementing this trait (see `encoder.rs`).
pub trait Visitor {
    fn visit_directory(&mut self, group: Group, children: &[Node], next: Option<&Node>);
    fn visit_entry(&mut self, id: TagId, value: &Value);
    fn visit_data_entry(&mut self, id: TagId, payload: &Payload, companion_tag: u16);
    fn visit_size_entry(&mut self, id: TagId, value: &Value, companion_tag: u16);
    fn visit_subifd_entry(&mut self, id: TagId, child: &Node);
    fn visit_makernote_entry(
        &mut self,
        id: TagId,
        vendor: Option<&'static str>,
        byte_order: crate::byte_order::ByteOrder,
        base_offset: i64,
        child: &Node,
    );
    fn visit_array_entry(&mut self, id: TagId, element_size: usize, elements: &[Node]);
    fn visit_array_element(&mut self, id: TagId, value: &Value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_order::ByteOrder;

    struct CountingVisitor {
        directories: usize,
        entries: usize,
    }

    impl Visitor for CountingVisitor {
        fn visit_directory(&mut self, _group: Group, children: &[Node], next: Option<&Node>) {
            self.directories += 1;
            for c in children {
                c.accept(self);
            }
            if let Some(n) = next {
                n.accept(self);
            }
        }
        fn visit_entry(&mut self, _id: TagId, _value: &Value) {
            self.entries += 1;
        }
        fn visit_data_entry(&mut self, _id: TagId, _payload: &Payload, _companion_tag: u16) {}
        fn visit_size_entry(&mut self, _id: TagId, _value: &Value, _companion_tag: u16) {}
        fn visit_subifd_entry(&mut self, _id: TagId, child: &Node) {
            child.accept(self);
        }
        fn visit_makernote_entry(
            &mut self,
            _id: TagId,
            _vendor: Option<&'static str>,
            _byte_order: ByteOrder,
            _base_offset: i64,
            child: &Node,
        ) {
            child.accept(self);
        }
        fn visit_array_entry(&mut self, _id: TagId, _element_size: usize, _elements: &[Node]) {}
        fn visit_array_element(&mut self, _id: TagId, _value: &Value) {}
    }

    #[test]
    fn accept_recurses_through_subifd() {
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
        let mut v = CountingVisitor { directories: 0, entries: 0 };
        root.accept(&mut v);
        assert_eq!(v.directories, 2);
        assert_eq!(v.entries, 1);
    }

    #[test]
    fn add_child_on_a_leaf_is_a_no_op() {
        let mut entry = Node::Entry { id: TagId::new(0x010F, Group::Root), value: Value::Ascii("Canon".into()) };
        let pushed = entry.add_child(Node::Entry { id: TagId::new(0x0110, Group::Root), value: Value::Ascii("x".into()) });
        assert!(pushed.is_none());
    }

    #[test]
    fn add_next_on_a_non_directory_is_a_no_op() {
        let mut entry = Node::Entry { id: TagId::new(0x010F, Group::Root), value: Value::Ascii("Canon".into()) };
        let linked = entry.add_next(Node::Directory { group: Group::Thumbnail, children: vec![], next: None });
        assert!(linked.is_none());
    }

    #[test]
    fn find_directory_mut_descends_through_subifd_entries() {
        let exif = Node::Directory { group: Group::Exif, children: vec![], next: None };
        let mut root = Node::Directory {
            group: Group::Root,
            children: vec![Node::SubIfdEntry { id: TagId::new(0x8769, Group::Root), child: Box::new(exif) }],
            next: None,
        };
        let found = root.find_directory_mut(Group::Exif).unwrap();
        assert_eq!(found.group(), Group::Exif);
        assert!(root.find_directory_mut(Group::Gps).is_none());
    }
}
