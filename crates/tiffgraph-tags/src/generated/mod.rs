//! Auto-generated tag tables - DO NOT EDIT

pub mod canon;
pub mod exif;
pub mod gps;
pub mod nikon;
pub mod olympus;
