//! PGM (portable graymap) support
//!
//! Reads and writes binary 8-bit PGM (P5). Seed maps drawn in an external
//! editor can be loaded this way, and 2D label maps are written with one
//! gray level per region id. ASCII PGM (P2) and 16-bit maxvals are not
//! supported.

use crate::{IoError, IoResult};
use seedgrow_core::{Shape, Volume};
use std::io::{BufRead, Read, Write};

/// Read one whitespace-delimited header token, skipping `#` comments.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        let b = byte[0];
        if b == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
            continue;
        }
        if b.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(b);
    }
    if token.is_empty() {
        return Err(IoError::DecodeError("truncated PGM header".to_string()));
    }
    String::from_utf8(token).map_err(|_| IoError::DecodeError("non-ASCII PGM header".to_string()))
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<usize> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::DecodeError(format!("invalid PGM {}: {:?}", what, token)))
}

/// Read a binary PGM into a `(rows, cols)` volume.
pub fn read_pgm<R: BufRead>(mut reader: R) -> IoResult<Volume<u8, 2>> {
    let magic = read_token(&mut reader)?;
    if magic != "P5" {
        return Err(IoError::UnsupportedFormat(format!(
            "PGM magic {:?} (only P5 is supported)",
            magic
        )));
    }
    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PGM maxval {} (only 8-bit is supported)",
            maxval
        )));
    }

    let len = width
        .checked_mul(height)
        .ok_or_else(|| IoError::DecodeError("PGM dimensions overflow".to_string()))?;

    // Bounded by the declared size.
    let mut data = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut data)?;
    if data.len() != len {
        return Err(IoError::DecodeError(format!(
            "PGM pixel data: expected {} bytes, got {}",
            len,
            data.len()
        )));
    }
    Ok(Volume::from_vec(Shape::new([height, width]), data)?)
}

/// Write a `(rows, cols)` 8-bit volume as binary PGM.
pub fn write_pgm<W: Write>(volume: &Volume<u8, 2>, mut writer: W) -> IoResult<()> {
    let [rows, cols] = volume.dims();
    write!(writer, "P5\n{} {}\n255\n", cols, rows)?;
    writer.write_all(volume.as_slice())?;
    writer.flush()?;
    Ok(())
}
