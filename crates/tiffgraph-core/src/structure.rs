//! The structure table: the static map from `(tag, group)` to how that
//! slot should be represented in the tree and who its children belong
//! to. The reader consults it to pick a node variant, the encoder
//! consults it to synthesize a missing path (`add_path`), and the
//! decoder consults it (via [`lookup`]) to name a key.

use std::fmt;

/// Where in the IFD hierarchy an entry lives. Closed set: every slot
/// this engine reads or writes is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Root,
    Thumbnail,
    Exif,
    Gps,
    Interop,
    /// One of the tag-0x014A `SubIFDs` array entries, indexed from 0.
    SubIfd(u8),
    /// A vendor makernote's own top-level directory.
    MakernoteMain,
    /// A binary array region inside a makernote (e.g. Canon
    /// CameraSettings), keyed by the tag that introduced it.
    MakernoteArray(u16),
    /// Recognized but deliberately not decoded (e.g. a thumbnail
    /// strip's raw bytes, handled as an opaque data entry instead).
    Ignore,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Root => write!(f, "IFD0"),
            Group::Thumbnail => write!(f, "IFD1"),
            Group::Exif => write!(f, "ExifIFD"),
            Group::Gps => write!(f, "GPS"),
            Group::Interop => write!(f, "Interop"),
            Group::SubIfd(i) => write!(f, "SubIFD{i}"),
            Group::MakernoteMain => write!(f, "MakerNotes"),
            Group::MakernoteArray(tag) => write!(f, "MakerNotes:{tag:#06x}"),
            Group::Ignore => write!(f, "Ignore"),
        }
    }
}

/// Parse a [`Group`] back out of its [`Display`](fmt::Display) form. The
/// encoder needs this because [`crate::metadata::MetadataKey::group`] is
/// stored as that display string, not the enum, so reconciling a
/// metadata map entry against the tree means inverting it first.
impl std::str::FromStr for Group {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("SubIFD") {
            return rest.parse::<u8>().map(Group::SubIfd).map_err(|_| ());
        }
        if let Some(rest) = s.strip_prefix("MakerNotes:") {
            let tag = u16::from_str_radix(rest.trim_start_matches("0x"), 16).map_err(|_| ())?;
            return Ok(Group::MakernoteArray(tag));
        }
        match s {
            "IFD0" => Ok(Group::Root),
            "IFD1" => Ok(Group::Thumbnail),
            "ExifIFD" => Ok(Group::Exif),
            "GPS" => Ok(Group::Gps),
            "Interop" => Ok(Group::Interop),
            "MakerNotes" => Ok(Group::MakernoteMain),
            "Ignore" => Ok(Group::Ignore),
            _ => Err(()),
        }
    }
}

/// The superset of tag values usable inside structure-table rows.
/// `Tag` is a normal wire tag; the other three are sentinels meaningful
/// only to [`lookup`]/[`path_to`] and are never read or written as an
/// actual entry's tag — there is no code path that could put one on
/// the wire, since [`crate::tree::Node`] construction always takes a
/// concrete `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendedTag {
    Tag(u16),
    /// Matches the directory itself, not an entry inside it.
    Root,
    /// The chained next-IFD link.
    Next,
    /// Matches any tag not otherwise listed in this group (wildcard).
    All,
    /// No row applies; used as a not-found sentinel by lookups.
    None,
}

/// What kind of node a structure-table row produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    Entry,
    /// Paired with a [`NodeKind::SizeEntry`] row via `companion`.
    DataEntry,
    SizeEntry,
    SubIfdEntry,
    MakernoteEntry,
    ArrayEntry,
}

/// One row of the structure table.
#[derive(Debug, Clone, Copy)]
pub struct StructureRow {
    pub ext_tag: ExtendedTag,
    pub group: Group,
    pub name: &'static str,
    pub kind: NodeKind,
    /// For `SubIfdEntry`/`MakernoteEntry`: the group assigned to the
    /// directory this entry points into.
    pub child_group: Option<Group>,
    /// For `DataEntry`/`SizeEntry`: the `(tag, group)` of the paired
    /// companion row (size-entry <-> data-entry).
    pub companion: Option<(u16, Group)>,
}

const fn row(
    ext_tag: ExtendedTag,
    group: Group,
    name: &'static str,
    kind: NodeKind,
) -> StructureRow {
    StructureRow { ext_tag, group, name, kind, child_group: None, companion: None }
}

const fn subifd_row(
    tag: u16,
    group: Group,
    name: &'static str,
    child_group: Group,
) -> StructureRow {
    StructureRow {
        ext_tag: ExtendedTag::Tag(tag),
        group,
        name,
        kind: NodeKind::SubIfdEntry,
        child_group: Some(child_group),
        companion: None,
    }
}

const fn data_size_pair(
    data_tag: u16,
    size_tag: u16,
    group: Group,
    data_name: &'static str,
    size_name: &'static str,
) -> [StructureRow; 2] {
    [
        StructureRow {
            ext_tag: ExtendedTag::Tag(data_tag),
            group,
            name: data_name,
            kind: NodeKind::DataEntry,
            child_group: None,
            companion: Some((size_tag, group)),
        },
        StructureRow {
            ext_tag: ExtendedTag::Tag(size_tag),
            group,
            name: size_name,
            kind: NodeKind::SizeEntry,
            child_group: None,
            companion: Some((data_tag, group)),
        },
    ]
}

/// The static structure table. Order doesn't matter to [`lookup`] (it
/// scans for an exact tag match before falling back to `All`), but
/// rows are grouped by IFD for readability.
pub static STRUCTURE_TABLE: &[StructureRow] = &[
    // Root IFD0
    row(ExtendedTag::Tag(0x8769), Group::Root, "ExifIFDPointer", NodeKind::Entry),
    subifd_row(0x8769, Group::Root, "ExifIFD", Group::Exif),
    subifd_row(0x8825, Group::Root, "GPSIFD", Group::Gps),
    row(ExtendedTag::Tag(0x014A), Group::Root, "SubIFDs", NodeKind::ArrayEntry),
    row(ExtendedTag::Next, Group::Root, "IFD1", NodeKind::Directory),
    row(ExtendedTag::All, Group::Root, "", NodeKind::Entry),

    // Thumbnail IFD1 — strip data lives here as a data/size pair.
    data_size_pair(
        0x0111, 0x0117, Group::Thumbnail,
        "ThumbnailOffset", "ThumbnailLength",
    )[0],
    data_size_pair(
        0x0111, 0x0117, Group::Thumbnail,
        "ThumbnailOffset", "ThumbnailLength",
    )[1],
    row(ExtendedTag::All, Group::Thumbnail, "", NodeKind::Entry),

    // Exif sub-IFD
    subifd_row(0xA005, Group::Exif, "InteropIFD", Group::Interop),
    row(ExtendedTag::Tag(0x927C), Group::Exif, "MakerNote", NodeKind::MakernoteEntry),
    row(ExtendedTag::All, Group::Exif, "", NodeKind::Entry),

    // GPS, Interop: flat entries only.
    row(ExtendedTag::All, Group::Gps, "", NodeKind::Entry),
    row(ExtendedTag::All, Group::Interop, "", NodeKind::Entry),

    // Makernote main directory and Canon's two named binary arrays.
    row(ExtendedTag::Tag(0x0001), Group::MakernoteMain, "CanonCameraSettings", NodeKind::ArrayEntry),
    row(ExtendedTag::Tag(0x0004), Group::MakernoteMain, "CanonShotInfo", NodeKind::ArrayEntry),
    row(ExtendedTag::All, Group::MakernoteMain, "", NodeKind::Entry),

    // Array element rows match any tag inside a MakernoteArray group;
    // the vendor table in tiffgraph-tags supplies the per-index name.
    row(ExtendedTag::All, Group::MakernoteArray(0x0001), "", NodeKind::Entry),
    row(ExtendedTag::All, Group::MakernoteArray(0x0004), "", NodeKind::Entry),
];

/// Look up the row governing `(tag, group)`, falling back to the
/// group's wildcard (`All`) row if no exact tag match exists.
pub fn lookup(tag: u16, group: Group) -> Option<&'static StructureRow> {
    STRUCTURE_TABLE
        .iter()
        .find(|r| r.group == group && r.ext_tag == ExtendedTag::Tag(tag))
        .or_else(|| STRUCTURE_TABLE.iter().find(|r| r.group == group && r.ext_tag == ExtendedTag::All))
}

/// Find the row that introduces `group` as a child (its `SubIfdEntry`/
/// `MakernoteEntry` parent row), used by the encoder's `add_path` to
/// walk from a target group back up toward the root when a key names
/// a group with no directory yet in the tree.
pub fn parent_of(group: Group) -> Option<&'static StructureRow> {
    STRUCTURE_TABLE.iter().find(|r| r.child_group == Some(group))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exif_pointer_resolves_to_subifd_entry() {
        let row = lookup(0x8769, Group::Root).unwrap();
        assert_eq!(row.kind, NodeKind::SubIfdEntry);
        assert_eq!(row.child_group, Some(Group::Exif));
    }

    #[test]
    fn unknown_tag_falls_back_to_wildcard_entry() {
        let row = lookup(0xBEEF, Group::Gps).unwrap();
        assert_eq!(row.kind, NodeKind::Entry);
    }

    #[test]
    fn strip_offsets_and_counts_are_companions() {
        let offsets = lookup(0x0111, Group::Thumbnail).unwrap();
        let counts = lookup(0x0117, Group::Thumbnail).unwrap();
        assert_eq!(offsets.companion, Some((0x0117, Group::Thumbnail)));
        assert_eq!(counts.companion, Some((0x0111, Group::Thumbnail)));
    }

    #[test]
    fn parent_of_exif_is_the_ifd0_pointer_row() {
        let row = parent_of(Group::Exif).unwrap();
        assert_eq!(row.ext_tag, ExtendedTag::Tag(0x8769));
        assert_eq!(row.group, Group::Root);
    }

    #[test]
    fn group_display_round_trips_through_parse() {
        for group in [
            Group::Root,
            Group::Thumbnail,
            Group::Exif,
            Group::Gps,
            Group::Interop,
            Group::SubIfd(2),
            Group::MakernoteMain,
            Group::MakernoteArray(0x0001),
            Group::Ignore,
        ] {
            let parsed: Group = group.to_string().parse().unwrap();
            assert_eq!(parsed, group);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("NotAGroup".parse::<Group>().is_err());
    }
}
