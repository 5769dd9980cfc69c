//! Headerless raw volumes
//!
//! A raw file is the bare element buffer of a volume in memory order, with
//! no header: the shape, element type and byte order travel out of band.
//! This is the layout produced by dumping an array's memory straight to
//! disk.

use crate::{IoError, IoResult};
use seedgrow_core::{ByteOrder, Pixel, Shape, Volume};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Out-of-band description of a raw file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLayout<const D: usize> {
    /// Extents, outermost axis first
    pub shape: Shape<D>,
    /// Byte order of multi-byte elements
    pub byte_order: ByteOrder,
}

impl<const D: usize> RawLayout<D> {
    /// Layout with native byte order.
    pub fn new(dims: [usize; D]) -> Self {
        Self {
            shape: Shape::new(dims),
            byte_order: ByteOrder::native(),
        }
    }

    /// Set the byte order.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Expected file size in bytes for element type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] if the size does not fit in `usize`.
    pub fn byte_len<T: Pixel>(&self) -> IoResult<usize> {
        self.shape
            .checked_len()
            .and_then(|len| len.checked_mul(T::TYPE.byte_width()))
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "raw {} volume {} is too large to address",
                    T::TYPE,
                    self.shape
                ))
            })
    }
}

/// Read a raw volume from a reader.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the stream length differs from the
/// size implied by `layout` and `T`, or if that size overflows.
pub fn read_raw_from<T: Pixel, R: Read, const D: usize>(
    reader: R,
    layout: &RawLayout<D>,
) -> IoResult<Volume<T, D>> {
    let expected = layout.byte_len::<T>()?;
    // One byte past the expected size is enough to detect a longer stream.
    let mut bytes = Vec::new();
    reader
        .take((expected as u64).saturating_add(1))
        .read_to_end(&mut bytes)?;
    if bytes.len() != expected {
        return Err(IoError::InvalidData(format!(
            "raw {} volume {} needs {} bytes, got {}{}",
            T::TYPE,
            layout.shape,
            expected,
            bytes.len(),
            if bytes.len() > expected { " or more" } else { "" }
        )));
    }

    let width = T::TYPE.byte_width();
    let data = bytes
        .chunks_exact(width)
        .map(|chunk| T::decode(chunk, layout.byte_order))
        .collect();
    Ok(Volume::from_vec(layout.shape, data)?)
}

/// Read a raw volume from a file.
pub fn read_raw<T: Pixel, P: AsRef<Path>, const D: usize>(
    path: P,
    layout: &RawLayout<D>,
) -> IoResult<Volume<T, D>> {
    let file = File::open(path)?;
    read_raw_from(BufReader::new(file), layout)
}

/// Write a volume's buffer to a writer.
pub fn write_raw_to<T: Pixel, W: Write, const D: usize>(
    volume: &Volume<T, D>,
    mut writer: W,
    byte_order: ByteOrder,
) -> IoResult<()> {
    let mut bytes = Vec::with_capacity(volume.len() * T::TYPE.byte_width());
    for &v in volume.as_slice() {
        v.encode(byte_order, &mut bytes);
    }
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Write a volume's buffer to a file.
pub fn write_raw<T: Pixel, P: AsRef<Path>, const D: usize>(
    volume: &Volume<T, D>,
    path: P,
    byte_order: ByteOrder,
) -> IoResult<()> {
    let file = File::create(path)?;
    write_raw_to(volume, BufWriter::new(file), byte_order)
}
