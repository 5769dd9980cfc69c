//! Pixel element types
//!
//! Images handed to the segmentation engine hold one of a closed set of
//! fixed-width integer element types. [`PixelType`] is the runtime tag for
//! that set and [`Pixel`] is the compile-time capability the engine is
//! generic over: every pixel converts losslessly to `f64` and is ordered.

use std::fmt;

/// Runtime tag for the supported element types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    /// Unsigned 8-bit
    U8,
    /// Signed 8-bit
    I8,
    /// Unsigned 16-bit
    U16,
    /// Signed 16-bit
    I16,
    /// Unsigned 32-bit
    U32,
}

impl PixelType {
    /// Element width in bytes.
    pub fn byte_width(self) -> usize {
        match self {
            PixelType::U8 | PixelType::I8 => 1,
            PixelType::U16 | PixelType::I16 => 2,
            PixelType::U32 => 4,
        }
    }

    /// Whether the element type is signed.
    pub fn is_signed(self) -> bool {
        matches!(self, PixelType::I8 | PixelType::I16)
    }

    /// Short name, used as a suffix when naming typed variants.
    pub fn suffix(self) -> &'static str {
        match self {
            PixelType::U8 => "u8",
            PixelType::I8 => "i8",
            PixelType::U16 => "u16",
            PixelType::I16 => "i16",
            PixelType::U32 => "u32",
        }
    }

    /// Parse a suffix such as `"u16"`.
    pub fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "u8" => Some(PixelType::U8),
            "i8" => Some(PixelType::I8),
            "u16" => Some(PixelType::U16),
            "i16" => Some(PixelType::I16),
            "u32" => Some(PixelType::U32),
            _ => None,
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelType::U8 => "uint8",
            PixelType::I8 => "int8",
            PixelType::U16 => "uint16",
            PixelType::I16 => "int16",
            PixelType::U32 => "uint32",
        };
        f.write_str(name)
    }
}

/// Byte order of serialized pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Least significant byte first
    #[default]
    LittleEndian,
    /// Most significant byte first
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the running platform.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }
}

/// Borrowed, runtime-typed element buffer
///
/// This is the element half of a foreign array handed across the boundary;
/// see [`crate::ArrayRef`] for the shaped form.
#[derive(Debug, Clone, Copy)]
pub enum ArrayData<'a> {
    U8(&'a [u8]),
    I8(&'a [i8]),
    U16(&'a [u16]),
    I16(&'a [i16]),
    U32(&'a [u32]),
}

impl ArrayData<'_> {
    /// Element type tag of the buffer.
    pub fn pixel_type(&self) -> PixelType {
        match self {
            ArrayData::U8(_) => PixelType::U8,
            ArrayData::I8(_) => PixelType::I8,
            ArrayData::U16(_) => PixelType::U16,
            ArrayData::I16(_) => PixelType::I16,
            ArrayData::U32(_) => PixelType::U32,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            ArrayData::U8(d) => d.len(),
            ArrayData::I8(d) => d.len(),
            ArrayData::U16(d) => d.len(),
            ArrayData::I16(d) => d.len(),
            ArrayData::U32(d) => d.len(),
        }
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fixed-width integer element the engine can segment
///
/// Implemented for `u8`, `i8`, `u16`, `i16` and `u32`.
pub trait Pixel: Copy + PartialOrd + Default + fmt::Debug + Send + Sync + 'static {
    /// Runtime tag of this type
    const TYPE: PixelType;

    /// Lossless widening to `f64`.
    fn to_f64(self) -> f64;

    /// Borrow the typed slice if `data` holds this element type.
    fn from_data<'a>(data: ArrayData<'a>) -> Option<&'a [Self]>;

    /// Wrap a typed slice as runtime-typed data.
    fn into_data(slice: &[Self]) -> ArrayData<'_>;

    /// Decode one element from exactly `TYPE.byte_width()` bytes.
    fn decode(bytes: &[u8], order: ByteOrder) -> Self;

    /// Append the encoded element to `out`.
    fn encode(self, order: ByteOrder, out: &mut Vec<u8>);
}

macro_rules! impl_pixel {
    ($t:ty, $tag:ident) => {
        impl Pixel for $t {
            const TYPE: PixelType = PixelType::$tag;

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn from_data<'a>(data: ArrayData<'a>) -> Option<&'a [Self]> {
                match data {
                    ArrayData::$tag(slice) => Some(slice),
                    _ => None,
                }
            }

            fn into_data(slice: &[Self]) -> ArrayData<'_> {
                ArrayData::$tag(slice)
            }

            fn decode(bytes: &[u8], order: ByteOrder) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(&bytes[..std::mem::size_of::<$t>()]);
                match order {
                    ByteOrder::LittleEndian => <$t>::from_le_bytes(raw),
                    ByteOrder::BigEndian => <$t>::from_be_bytes(raw),
                }
            }

            fn encode(self, order: ByteOrder, out: &mut Vec<u8>) {
                match order {
                    ByteOrder::LittleEndian => out.extend_from_slice(&self.to_le_bytes()),
                    ByteOrder::BigEndian => out.extend_from_slice(&self.to_be_bytes()),
                }
            }
        }
    };
}

impl_pixel!(u8, U8);
impl_pixel!(i8, I8);
impl_pixel!(u16, U16);
impl_pixel!(i16, I16);
impl_pixel!(u32, U32);

impl<'a> From<&'a [u8]> for ArrayData<'a> {
    fn from(slice: &'a [u8]) -> Self {
        ArrayData::U8(slice)
    }
}

impl<'a> From<&'a [i8]> for ArrayData<'a> {
    fn from(slice: &'a [i8]) -> Self {
        ArrayData::I8(slice)
    }
}

impl<'a> From<&'a [u16]> for ArrayData<'a> {
    fn from(slice: &'a [u16]) -> Self {
        ArrayData::U16(slice)
    }
}

impl<'a> From<&'a [i16]> for ArrayData<'a> {
    fn from(slice: &'a [i16]) -> Self {
        ArrayData::I16(slice)
    }
}

impl<'a> From<&'a [u32]> for ArrayData<'a> {
    fn from(slice: &'a [u32]) -> Self {
        ArrayData::U32(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_widths() {
        assert_eq!(PixelType::U8.byte_width(), 1);
        assert_eq!(PixelType::I8.byte_width(), 1);
        assert_eq!(PixelType::U16.byte_width(), 2);
        assert_eq!(PixelType::I16.byte_width(), 2);
        assert_eq!(PixelType::U32.byte_width(), 4);
        assert_eq!(u16::TYPE.byte_width(), std::mem::size_of::<u16>());
    }

    #[test]
    fn test_suffix_parse() {
        for t in [
            PixelType::U8,
            PixelType::I8,
            PixelType::U16,
            PixelType::I16,
            PixelType::U32,
        ] {
            assert_eq!(PixelType::from_suffix(t.suffix()), Some(t));
        }
        assert_eq!(PixelType::from_suffix("f32"), None);
    }

    #[test]
    fn test_signed_to_f64() {
        assert_eq!((-128i8).to_f64(), -128.0);
        assert_eq!((-300i16).to_f64(), -300.0);
        assert_eq!(u32::MAX.to_f64(), 4294967295.0);
    }

    #[test]
    fn test_from_data_checks_type() {
        let bytes = [1u8, 2, 3];
        let data = ArrayData::from(&bytes[..]);
        assert_eq!(u8::from_data(data), Some(&bytes[..]));
        assert!(u16::from_data(data).is_none());
        assert!(i8::from_data(data).is_none());
    }

    #[test]
    fn test_decode_byte_order() {
        assert_eq!(u16::decode(&[0x01, 0x02], ByteOrder::LittleEndian), 0x0201);
        assert_eq!(u16::decode(&[0x01, 0x02], ByteOrder::BigEndian), 0x0102);
        assert_eq!(i16::decode(&[0xff, 0xff], ByteOrder::BigEndian), -1);

        let mut out = Vec::new();
        0x0A0B0C0Du32.encode(ByteOrder::BigEndian, &mut out);
        assert_eq!(out, vec![0x0A, 0x0B, 0x0C, 0x0D]);
    }
}
