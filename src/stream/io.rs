//! Low-level byte order conversion for the fixed-width wire formats.
//!
//! This module provides the [`WireIO`] trait, a unified interface for converting the
//! primitive types of the wire format to and from byte arrays in both big-endian and
//! little-endian order, together with bounds-checked slice decoders that advance an
//! external offset. Everything here is a pure transformation over byte windows; cursor
//! state lives in [`crate::stream::buffer::ByteBuffer`].
//!
//! # Supported Types
//!
//! The [`WireIO`] trait is implemented for:
//! - **Unsigned integers**: `u8`, `u16`, `u32`, `u64`
//! - **Signed integers**: `i8`, `i16`, `i32`, `i64`
//! - **Floating point**: `f32`, `f64`
//!
//! Bit widths are always explicit. There are deliberately no `usize`/`isize`
//! implementations: the wire format never depends on host integer width.
//!
//! # Errors
//!
//! The decoding functions return [`crate::Error::BufferUnderrun`] when fewer bytes remain
//! than the target width requires. The offset is only advanced on success, so a failed
//! decode leaves the caller's position untouched.

use crate::{Error::BufferUnderrun, Result};

/// Trait for type-specific, endian-aware binary conversion.
///
/// Each implementation defines a `Bytes` associated type that is the fixed-size byte
/// array for that particular type (e.g. `[u8; 4]` for `u32`). The trait methods convert
/// between that array and the typed value in the requested byte order.
pub trait WireIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    ///
    /// Must be convertible from a byte slice (for decoding) and viewable as one
    /// (for appending to a buffer).
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte array in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Read T from a byte array in big-endian
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Convert T to a byte array in little-endian
    fn to_le_bytes(self) -> Self::Bytes;
    /// Convert T to a byte array in big-endian
    fn to_be_bytes(self) -> Self::Bytes;
}

macro_rules! impl_wire_io {
    ($($ty:ty => $width:expr),+ $(,)?) => {
        $(
            impl WireIO for $ty {
                type Bytes = [u8; $width];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }

                fn to_be_bytes(self) -> Self::Bytes {
                    <$ty>::to_be_bytes(self)
                }
            }
        )+
    };
}

impl_wire_io! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

/// Safely reads a value of type `T` in little-endian byte order at the given offset.
///
/// The offset is advanced by the width of `T`, but only on success.
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if fewer than `size_of::<T>()` bytes remain.
pub fn read_le_at<T: WireIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(BufferUnderrun);
    };
    if end > data.len() {
        return Err(BufferUnderrun);
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(BufferUnderrun);
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}

/// Safely reads a value of type `T` in big-endian byte order at the given offset.
///
/// The offset is advanced by the width of `T`, but only on success.
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if fewer than `size_of::<T>()` bytes remain.
pub fn read_be_at<T: WireIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(BufferUnderrun);
    };
    if end > data.len() {
        return Err(BufferUnderrun);
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(BufferUnderrun);
    };

    *offset = end;

    Ok(T::from_be_bytes(read))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_values() {
        let mut offset = 0;
        let result: u16 = read_le_at(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0201);
        assert_eq!(offset, 2);

        offset = 0;
        let result: u32 = read_le_at(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0403_0201);

        offset = 0;
        let result: u64 = read_le_at(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0807_0605_0403_0201);
    }

    #[test]
    fn read_be_values() {
        let mut offset = 0;
        let result: u16 = read_be_at(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0102);
        assert_eq!(offset, 2);

        offset = 0;
        let result: u32 = read_be_at(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0102_0304);

        offset = 0;
        let result: u64 = read_be_at(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0102_0304_0506_0708);
    }

    #[test]
    fn read_at_nonzero_offset() {
        let mut offset = 2_usize;
        let result: u16 = read_be_at(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0304);
        assert_eq!(offset, 4);

        let mut offset = 2_usize;
        let result: u16 = read_le_at(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0403);
    }

    #[test]
    fn endianness_is_byte_reversal() {
        // The BE and LE encodings of any multi-byte value are byte reversals of each other.
        let value = 0x1122_3344_5566_7788_u64;
        let mut be = WireIO::to_be_bytes(value).to_vec();
        be.reverse();
        assert_eq!(be, WireIO::to_le_bytes(value).to_vec());

        let value = -1000_i16;
        let mut be = WireIO::to_be_bytes(value).to_vec();
        be.reverse();
        assert_eq!(be, WireIO::to_le_bytes(value).to_vec());

        let value = 3.5_f32;
        let mut be = WireIO::to_be_bytes(value).to_vec();
        be.reverse();
        assert_eq!(be, WireIO::to_le_bytes(value).to_vec());
    }

    #[test]
    fn read_floats() {
        let data = [0x3F, 0x80, 0x00, 0x00];
        let mut offset = 0;
        let result: f32 = read_be_at(&data, &mut offset).unwrap();
        assert_eq!(result, 1.0);

        let data = [0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let mut offset = 0;
        let result: f64 = read_be_at(&data, &mut offset).unwrap();
        assert_eq!(result, 1.0);
    }

    #[test]
    fn underrun_leaves_offset_unchanged() {
        let buffer = [0xFF, 0xFF, 0xFF, 0xFF];

        let mut offset = 0;
        let result: Result<u64> = read_le_at(&buffer, &mut offset);
        assert!(matches!(result, Err(BufferUnderrun)));
        assert_eq!(offset, 0);

        let mut offset = 3;
        let result: Result<u16> = read_be_at(&buffer, &mut offset);
        assert!(matches!(result, Err(BufferUnderrun)));
        assert_eq!(offset, 3);
    }

    #[test]
    fn offset_overflow_is_underrun() {
        let buffer = [0x00_u8; 4];
        let mut offset = usize::MAX;
        let result: Result<u32> = read_le_at(&buffer, &mut offset);
        assert!(matches!(result, Err(BufferUnderrun)));
        assert_eq!(offset, usize::MAX);
    }
}
