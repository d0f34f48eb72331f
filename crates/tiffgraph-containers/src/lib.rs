//! Container formats (JPEG, MP4) that embed a TIFF/EXIF block.

pub mod jpeg;
pub mod jpeg_writer;
pub mod mp4;
