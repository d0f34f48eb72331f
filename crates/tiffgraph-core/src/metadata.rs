//! The decoder's output / encoder's input: a flat, serializable map from
//! `family:group:tag` key to decoded [`Value`], with dirty tracking so
//! the writer can choose an in-place patch over a full re-layout.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::structure::Group;
use crate::value::Value;

/// One decoded key: the family a consumer would group it under in a
/// UI (`"EXIF"`, `"GPS"`, `"MakerNotes"`, ...), the structural [`Group`]
/// it was read from, and its tag number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetadataKey {
    pub family: String,
    pub group: String,
    pub tag: u16,
}

impl MetadataKey {
    pub fn new(family: impl Into<String>, group: Group, tag: u16) -> Self {
        Self { family: family.into(), group: group.to_string(), tag }
    }

    /// `"EXIF:ExifIFD:0x829a"`-shaped path string, the format
    /// [`MetadataMap::get_path`]/`set_path` accept.
    pub fn path(&self) -> String {
        format!("{}:{}:{:#06x}", self.family, self.group, self.tag)
    }
}

/// A flat decoded metadata map. Keys are ordered (`BTreeMap`) so
/// serialization and diffing are deterministic.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetadataMap {
    entries: BTreeMap<MetadataKey, Value>,

    /// Set whenever an entry is inserted, changed, or removed since the
    /// last [`MetadataMap::clear_dirty`]. The writer treats a clean map
    /// as eligible for an in-place patch; a dirty one forces a full
    /// directory re-layout, since sizes may have changed.
    #[serde(skip, default)]
    dirty: AtomicBool,
}

impl Default for MetadataMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataMap {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new(), dirty: AtomicBool::new(false) }
    }

    pub fn set(&mut self, key: MetadataKey, value: Value) {
        let changed = self.entries.get(&key) != Some(&value);
        self.entries.insert(key, value);
        if changed {
            self.dirty.store(true, Ordering::Relaxed);
        }
    }

    pub fn get(&self, key: &MetadataKey) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &MetadataKey) -> Option<Value> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.dirty.store(true, Ordering::Relaxed);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MetadataKey, &Value)> {
        self.entries.iter()
    }

    /// Look up by the same `"family:group:tag"` string `MetadataKey::path`
    /// produces, without requiring the caller to reconstruct the key.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let key = parse_path(path)?;
        self.get(&key)
    }

    pub fn set_path(&mut self, path: &str, value: Value) -> bool {
        match parse_path(path) {
            Some(key) => {
                self.set(key, value);
                true
            }
            None => false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Relaxed)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::Relaxed);
    }
}

impl Clone for MetadataMap {
    fn clone(&self) -> Self {
        Self { entries: self.entries.clone(), dirty: AtomicBool::new(self.dirty.load(Ordering::Relaxed)) }
    }
}

fn parse_path(path: &str) -> Option<MetadataKey> {
    let mut parts = path.splitn(3, ':');
    let family = parts.next()?.to_string();
    let group = parts.next()?.to_string();
    let tag_str = parts.next()?;
    let tag = u16::from_str_radix(tag_str.trim_start_matches("0x"), 16)
        .ok()
        .or_else(|| tag_str.parse().ok())?;
    Some(MetadataKey { family, group, tag })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trips_through_the_key() {
        let key = MetadataKey::new("EXIF", Group::Exif, 0x829a);
        let path = key.path();
        assert_eq!(path, "EXIF:ExifIFD:0x829a");
        assert_eq!(parse_path(&path), Some(key));
    }

    #[test]
    fn set_marks_dirty_only_on_change() {
        let mut map = MetadataMap::new();
        let key = MetadataKey::new("EXIF", Group::Exif, 0x829a);
        map.set(key.clone(), Value::UInt32(vec![1]));
        assert!(map.is_dirty());
        map.clear_dirty();
        map.set(key.clone(), Value::UInt32(vec![1]));
        assert!(!map.is_dirty());
        map.set(key, Value::UInt32(vec![2]));
        assert!(map.is_dirty());
    }

    #[test]
    fn get_path_matches_get() {
        let mut map = MetadataMap::new();
        let key = MetadataKey::new("GPS", Group::Gps, 0x0002);
        map.set(key.clone(), Value::Ascii("N".into()));
        assert_eq!(map.get_path(&key.path()), map.get(&key));
    }
}
