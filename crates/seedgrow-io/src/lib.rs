//! seedgrow-io - Volume and label-map I/O
//!
//! - **Raw volumes**: headerless element dumps of any supported pixel type,
//!   2D or 3D, with the shape and byte order supplied by the caller
//! - **PGM / PNG**: 8-bit grayscale seed maps in, 2D label maps out
//!
//! # Example
//!
//! ```no_run
//! use seedgrow_io::{RawLayout, read_raw, write_label_slice};
//!
//! let layout = RawLayout::new([256, 256, 256]);
//! let image = read_raw::<u16, _, 3>("image_data.raw", &layout).unwrap();
//! let seeds = read_raw::<u8, _, 3>("seeds.raw", &layout).unwrap();
//! # let labels = seeds.clone();
//! write_label_slice(&labels, 50, "labels_050.png").unwrap();
//! # let _ = image;
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;
pub mod raw;

pub use error::{IoError, IoResult};
pub use format::{FileFormat, detect_format, detect_format_from_bytes};
pub use raw::{RawLayout, read_raw, read_raw_from, write_raw, write_raw_to};

use seedgrow_core::Volume;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a 2D 8-bit seed map from a PGM or PNG file.
///
/// The format is detected from the file header.
pub fn read_seed_map<P: AsRef<Path>>(path: P) -> IoResult<Volume<u8, 2>> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    match format {
        #[cfg(feature = "pnm")]
        FileFormat::Pgm => pnm::read_pgm(reader),
        #[cfg(feature = "png-format")]
        FileFormat::Png => png::read_png(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write a 2D 8-bit label map, choosing the format from the extension.
pub fn write_label_map<P: AsRef<Path>>(labels: &Volume<u8, 2>, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path).ok_or_else(|| {
        IoError::UnsupportedFormat(format!("no known extension: {}", path.display()))
    })?;
    write_label_map_as(labels, path, format)
}

/// Write a 2D 8-bit label map in an explicit format.
pub fn write_label_map_as<P: AsRef<Path>>(
    labels: &Volume<u8, 2>,
    path: P,
    format: FileFormat,
) -> IoResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    match format {
        FileFormat::Raw => raw::write_raw_to(labels, writer, seedgrow_core::ByteOrder::native()),
        #[cfg(feature = "pnm")]
        FileFormat::Pgm => pnm::write_pgm(labels, writer),
        #[cfg(feature = "png-format")]
        FileFormat::Png => png::write_png(labels, writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write one outermost-axis plane of a 3D 8-bit label map.
pub fn write_label_slice<P: AsRef<Path>>(
    labels: &Volume<u8, 3>,
    index: usize,
    path: P,
) -> IoResult<()> {
    let plane = labels.slice(index)?;
    write_label_map(&plane, path)
}
