//! File format detection
//!
//! Label maps and seed maps are exchanged as PGM or PNG; images and
//! volumes as headerless raw dumps. Raw data carries no magic number, so it
//! is only ever selected by file extension.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// Binary PGM
    pub const PGM_BINARY: &[u8] = b"P5";
}

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Headerless binary dump
    Raw,
    /// Binary portable graymap (P5)
    Pgm,
    /// PNG, 8-bit grayscale
    Png,
}

impl FileFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Raw => "raw",
            FileFormat::Pgm => "pgm",
            FileFormat::Png => "png",
        }
    }

    /// Select a format from a path's extension (case-insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "raw" | "bin" | "dat" => Some(FileFormat::Raw),
            "pgm" | "pnm" => Some(FileFormat::Pgm),
            "png" => Some(FileFormat::Png),
            _ => None,
        }
    }
}

/// Detect the format of an image file from its header.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<FileFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect an image format from leading bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<FileFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }
    if data.starts_with(magic::PGM_BINARY) {
        return Ok(FileFormat::Pgm);
    }
    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(FileFormat::Png);
    }
    Err(IoError::UnsupportedFormat(
        "unrecognized image header".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(FileFormat::from_path("a/b/seeds.PNG"), Some(FileFormat::Png));
        assert_eq!(FileFormat::from_path("labels.pgm"), Some(FileFormat::Pgm));
        assert_eq!(FileFormat::from_path("image_data.raw"), Some(FileFormat::Raw));
        assert_eq!(FileFormat::from_path("image.tif"), None);
        assert_eq!(FileFormat::from_path("noext"), None);
    }

    #[test]
    fn test_detect_from_bytes() {
        assert_eq!(
            detect_format_from_bytes(b"P5\n4 4\n255\n").unwrap(),
            FileFormat::Pgm
        );
        assert_eq!(
            detect_format_from_bytes(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]).unwrap(),
            FileFormat::Png
        );
        assert!(detect_format_from_bytes(b"P").is_err());
        assert!(detect_format_from_bytes(b"GIF89a").is_err());
    }
}
