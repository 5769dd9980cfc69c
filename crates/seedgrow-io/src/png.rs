//! PNG format support
//!
//! Only 8-bit grayscale is handled: seed maps are read from it and 2D
//! label maps are written to it.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder};
use seedgrow_core::{Shape, Volume};
use std::io::{BufRead, Seek, Write};

/// Read an 8-bit grayscale PNG into a `(rows, cols)` volume.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Volume<u8, 2>> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width as usize;
    let height = info.height as usize;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if (color_type, bit_depth) != (ColorType::Grayscale, BitDepth::Eight) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?} (expected 8-bit grayscale)",
            color_type, bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        let row_start = y * bytes_per_row;
        data.extend_from_slice(&buf[row_start..row_start + width]);
    }
    Ok(Volume::from_vec(Shape::new([height, width]), data)?)
}

/// Write a `(rows, cols)` 8-bit volume as grayscale PNG.
pub fn write_png<W: Write>(volume: &Volume<u8, 2>, writer: W) -> IoResult<()> {
    let [rows, cols] = volume.dims();
    let width = u32::try_from(cols)
        .map_err(|_| IoError::EncodeError(format!("width {} exceeds PNG limit", cols)))?;
    let height = u32::try_from(rows)
        .map_err(|_| IoError::EncodeError(format!("height {} exceeds PNG limit", rows)))?;

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(volume.as_slice())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    Ok(())
}
