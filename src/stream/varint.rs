//! LEB128 variable-length integer codecs and the zigzag signed mapping.
//!
//! Two independent capabilities, composed by the stream:
//!
//! - **Unsigned LEB128**: each byte carries 7 value bits (least-significant group first)
//!   plus a continuation bit in the high position. A 32-bit value encodes to 1..=5 bytes,
//!   a 64-bit value to 1..=10 bytes.
//! - **Zigzag mapping**: a bijection from signed to unsigned integers that maps
//!   `0, -1, 1, -2, 2, …` to `0, 1, 2, 3, 4, …`, so small-magnitude negative values
//!   encode as compactly as small positive ones.
//!
//! The decoders take `(&[u8], &mut usize)` and only advance the offset when a complete,
//! well-formed sequence was consumed. Truncated input yields
//! [`crate::Error::BufferUnderrun`]; input whose continuation bits are still set past the
//! maximum width yields [`crate::Error::MalformedVarint`] rather than wrapping around.

use crate::{Error, Result};

/// Maximum encoded length of a 32-bit unsigned varint.
pub const VAR_INT_MAX_BYTES: usize = 5;

/// Maximum encoded length of a 64-bit unsigned varlong.
pub const VAR_LONG_MAX_BYTES: usize = 10;

/// Encode a 32-bit unsigned varint into `out`, returning the number of bytes written.
///
/// Value 0 encodes as the single byte `0x00`.
pub fn encode_unsigned_var_int(mut value: u32, out: &mut [u8; VAR_INT_MAX_BYTES]) -> usize {
    let mut len = 0;
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;

        if value == 0 {
            out[len] = byte;
            return len + 1;
        }

        out[len] = byte | 0x80;
        len += 1;
    }
}

/// Encode a 64-bit unsigned varlong into `out`, returning the number of bytes written.
pub fn encode_unsigned_var_long(mut value: u64, out: &mut [u8; VAR_LONG_MAX_BYTES]) -> usize {
    let mut len = 0;
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;

        if value == 0 {
            out[len] = byte;
            return len + 1;
        }

        out[len] = byte | 0x80;
        len += 1;
    }
}

/// Decode a 32-bit unsigned varint at the given offset, advancing it on success.
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if the data ends before a terminating byte,
/// or [`crate::Error::MalformedVarint`] if no terminating byte appears within
/// [`VAR_INT_MAX_BYTES`]. The offset does not move on failure.
pub fn decode_unsigned_var_int(data: &[u8], offset: &mut usize) -> Result<u32> {
    let mut pos = *offset;
    let mut value = 0_u32;
    let mut shift = 0_u32;

    loop {
        let Some(&byte) = data.get(pos) else {
            return Err(Error::BufferUnderrun);
        };
        pos += 1;

        value |= u32::from(byte & 0x7F) << shift;

        if byte & 0x80 == 0 {
            *offset = pos;
            return Ok(value);
        }

        shift += 7;
        if shift >= 7 * VAR_INT_MAX_BYTES as u32 {
            return Err(Error::MalformedVarint {
                max_bytes: VAR_INT_MAX_BYTES,
            });
        }
    }
}

/// Decode a 64-bit unsigned varlong at the given offset, advancing it on success.
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if the data ends before a terminating byte,
/// or [`crate::Error::MalformedVarint`] if no terminating byte appears within
/// [`VAR_LONG_MAX_BYTES`]. The offset does not move on failure.
pub fn decode_unsigned_var_long(data: &[u8], offset: &mut usize) -> Result<u64> {
    let mut pos = *offset;
    let mut value = 0_u64;
    let mut shift = 0_u32;

    loop {
        let Some(&byte) = data.get(pos) else {
            return Err(Error::BufferUnderrun);
        };
        pos += 1;

        value |= u64::from(byte & 0x7F) << shift;

        if byte & 0x80 == 0 {
            *offset = pos;
            return Ok(value);
        }

        shift += 7;
        if shift >= 7 * VAR_LONG_MAX_BYTES as u32 {
            return Err(Error::MalformedVarint {
                max_bytes: VAR_LONG_MAX_BYTES,
            });
        }
    }
}

/// Map a signed 32-bit value onto the unsigned domain, keeping small magnitudes small.
#[must_use]
pub fn zigzag_encode_32(value: i32) -> u32 {
    // Arithmetic right shift smears the sign bit across all 32 positions.
    ((value << 1) ^ (value >> 31)) as u32
}

/// Invert [`zigzag_encode_32`].
#[must_use]
pub fn zigzag_decode_32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Map a signed 64-bit value onto the unsigned domain, keeping small magnitudes small.
#[must_use]
pub fn zigzag_encode_64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Invert [`zigzag_encode_64`].
#[must_use]
pub fn zigzag_decode_64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded_var_int(value: u32) -> Vec<u8> {
        let mut out = [0_u8; VAR_INT_MAX_BYTES];
        let len = encode_unsigned_var_int(value, &mut out);
        out[..len].to_vec()
    }

    fn encoded_var_long(value: u64) -> Vec<u8> {
        let mut out = [0_u8; VAR_LONG_MAX_BYTES];
        let len = encode_unsigned_var_long(value, &mut out);
        out[..len].to_vec()
    }

    #[test]
    fn var_int_known_encodings() {
        assert_eq!(encoded_var_int(0), vec![0x00]);
        assert_eq!(encoded_var_int(1), vec![0x01]);
        assert_eq!(encoded_var_int(127), vec![0x7F]);
        assert_eq!(encoded_var_int(128), vec![0x80, 0x01]);
        assert_eq!(encoded_var_int(300), vec![0xAC, 0x02]);
        assert_eq!(encoded_var_int(16383), vec![0xFF, 0x7F]);
        assert_eq!(encoded_var_int(16384), vec![0x80, 0x80, 0x01]);
        assert_eq!(
            encoded_var_int(u32::MAX),
            vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F]
        );
    }

    #[test]
    fn var_int_round_trip() {
        for value in [
            0_u32,
            1,
            127,
            128,
            16383,
            16384,
            2_097_151,
            2_097_152,
            2_147_483_647,
            u32::MAX,
        ] {
            let bytes = encoded_var_int(value);
            let mut offset = 0;
            assert_eq!(decode_unsigned_var_int(&bytes, &mut offset).unwrap(), value);
            assert_eq!(offset, bytes.len());
        }
    }

    #[test]
    fn var_int_byte_length_rule() {
        // ceil(bits_needed / 7) bytes, bounded by 5.
        assert_eq!(encoded_var_int(0x7F).len(), 1);
        assert_eq!(encoded_var_int(0x80).len(), 2);
        assert_eq!(encoded_var_int(0x3FFF).len(), 2);
        assert_eq!(encoded_var_int(0x4000).len(), 3);
        assert_eq!(encoded_var_int(0x1F_FFFF).len(), 3);
        assert_eq!(encoded_var_int(0x20_0000).len(), 4);
        assert_eq!(encoded_var_int(0xFFF_FFFF).len(), 4);
        assert_eq!(encoded_var_int(0x1000_0000).len(), 5);
        assert_eq!(encoded_var_int(u32::MAX).len(), 5);
    }

    #[test]
    fn var_long_round_trip() {
        for value in [
            0_u64,
            1,
            127,
            128,
            16384,
            u64::from(u32::MAX),
            u64::from(u32::MAX) + 1,
            i64::MAX as u64,
            u64::MAX,
        ] {
            let bytes = encoded_var_long(value);
            let mut offset = 0;
            assert_eq!(
                decode_unsigned_var_long(&bytes, &mut offset).unwrap(),
                value
            );
            assert_eq!(offset, bytes.len());
        }
        assert_eq!(encoded_var_long(u64::MAX).len(), VAR_LONG_MAX_BYTES);
    }

    #[test]
    fn truncated_var_int_is_underrun() {
        let mut offset = 0;
        let result = decode_unsigned_var_int(&[0x80, 0x80], &mut offset);
        assert!(matches!(result, Err(Error::BufferUnderrun)));
        assert_eq!(offset, 0);
    }

    #[test]
    fn non_terminating_var_int_is_malformed() {
        // Five continuation bytes: the terminator (if any) would be a sixth byte.
        let data = [0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
        let mut offset = 0;
        let result = decode_unsigned_var_int(&data, &mut offset);
        assert!(matches!(
            result,
            Err(Error::MalformedVarint { max_bytes: 5 })
        ));
        assert_eq!(offset, 0);
    }

    #[test]
    fn non_terminating_var_long_is_malformed() {
        let data = [0x80_u8; 11];
        let mut offset = 0;
        let result = decode_unsigned_var_long(&data, &mut offset);
        assert!(matches!(
            result,
            Err(Error::MalformedVarint { max_bytes: 10 })
        ));
        assert_eq!(offset, 0);
    }

    #[test]
    fn decode_at_nonzero_offset() {
        let data = [0xFF, 0xAC, 0x02, 0xFF];
        let mut offset = 1;
        assert_eq!(decode_unsigned_var_int(&data, &mut offset).unwrap(), 300);
        assert_eq!(offset, 3);
    }

    #[test]
    fn zigzag_small_magnitudes() {
        // 0, -1, 1, -2, 2 map to 0, 1, 2, 3, 4.
        assert_eq!(zigzag_encode_32(0), 0);
        assert_eq!(zigzag_encode_32(-1), 1);
        assert_eq!(zigzag_encode_32(1), 2);
        assert_eq!(zigzag_encode_32(-2), 3);
        assert_eq!(zigzag_encode_32(2), 4);

        assert_eq!(zigzag_encode_64(-1), 1);
        assert_eq!(zigzag_encode_64(i64::MIN), u64::MAX);
    }

    #[test]
    fn zigzag_round_trip() {
        for value in [0_i32, -1, 1, -2, 2, i32::MIN, i32::MAX] {
            assert_eq!(zigzag_decode_32(zigzag_encode_32(value)), value);
        }
        for value in [0_i64, -1, 1, i64::MIN, i64::MAX] {
            assert_eq!(zigzag_decode_64(zigzag_encode_64(value)), value);
        }
    }
}
