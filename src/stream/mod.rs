//! The binary stream cursor and its supporting codecs.
//!
//! This module provides [`BinaryStream`], a cursor-based reader/writer over an owned byte
//! buffer, designed for producing and consuming network-protocol payloads. The cursor
//! maintains a single read offset; decode operations consume bytes at that offset while
//! encode operations always append at the logical end of the buffer, independent of the
//! offset.
//!
//! # Key Components
//!
//! ## Core Type
//! - [`BinaryStream`] - the typed get/put cursor
//!
//! ## Supporting Modules
//! - [`buffer`] - [`ByteBuffer`](buffer::ByteBuffer), the owned growable storage
//! - [`io`] - endian-aware conversion for the fixed-width wire formats
//! - [`varint`] - LEB128 varint/varlong codecs and the zigzag signed mapping
//!
//! # Usage Examples
//!
//! ```rust
//! use binstream::BinaryStream;
//!
//! let mut stream = BinaryStream::new();
//! stream.put_bool(true);
//! stream.put_short(0xCAFE);
//! stream.put_var_int(-1000);
//!
//! stream.rewind();
//! assert!(stream.get_bool()?);
//! assert_eq!(stream.get_short()?, 0xCAFE);
//! assert_eq!(stream.get_var_int()?, -1000);
//! assert!(stream.is_at_end());
//! # Ok::<(), binstream::Error>(())
//! ```

pub(crate) mod buffer;
pub(crate) mod io;
pub(crate) mod varint;

use crate::{Error::BufferUnderrun, Result};
use buffer::ByteBuffer;
use io::WireIO;
use varint::{VAR_INT_MAX_BYTES, VAR_LONG_MAX_BYTES};

/// Largest value representable in a 3-byte (24-bit) triad field.
const TRIAD_MAX: u32 = 0x00FF_FFFF;

/// Default capacity reserved when a stream is created empty.
const DEFAULT_CAPACITY: usize = 32;

/// A read/write cursor over an owned byte buffer.
///
/// `BinaryStream` exposes typed get/put operations for every fixed-width wire format
/// (both byte orders) and for LEB128 variable-length integers with zigzag signed
/// mapping. Internally it owns exactly one [`ByteBuffer`](buffer::ByteBuffer); callers
/// never receive a handle that can mutate the stream's state behind its back.
///
/// # Cursor Semantics
///
/// - The read offset is advanced only by decode operations (and explicit
///   [`set_offset`](BinaryStream::set_offset) / [`rewind`](BinaryStream::rewind)).
/// - Encode operations append at the logical end of the buffer and never touch the
///   read offset, so a stream can be read and extended interleaved.
/// - Failed reads are atomic: on any `Err` the offset is exactly where it was before
///   the call, and the stream remains usable.
///
/// # Concurrency
///
/// Every operation is a direct, synchronous transformation of in-memory state. The
/// stream is a single-owner value; pass it by exclusive reference through a call chain
/// (one stream per message being built or parsed) rather than sharing it across threads.
///
/// # Examples
///
/// ```rust
/// use binstream::BinaryStream;
///
/// // Parse a received payload.
/// let mut stream = BinaryStream::from_bytes(vec![0x00, 0x2A, 0xAC, 0x02]);
/// assert!(!stream.get_bool()?);
/// assert_eq!(stream.get_byte()?, 42);
/// assert_eq!(stream.get_unsigned_var_int()?, 300);
/// assert!(stream.is_at_end());
/// # Ok::<(), binstream::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BinaryStream {
    buf: ByteBuffer,
}

impl Default for BinaryStream {
    fn default() -> Self {
        BinaryStream::new()
    }
}

impl BinaryStream {
    /// Create an empty stream with a small default capacity, offset 0.
    #[must_use]
    pub fn new() -> Self {
        BinaryStream {
            buf: ByteBuffer::alloc(DEFAULT_CAPACITY),
        }
    }

    /// Create a stream over existing bytes, offset 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::BinaryStream;
    ///
    /// let mut stream = BinaryStream::from_bytes(vec![0x01, 0x02]);
    /// assert_eq!(stream.get_short()?, 0x0102);
    /// # Ok::<(), binstream::Error>(())
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        BinaryStream {
            buf: ByteBuffer::from_bytes(bytes),
        }
    }

    /// Create a stream over existing bytes with the read offset already placed.
    ///
    /// The offset is not validated; an out-of-range value surfaces as
    /// [`crate::Error::BufferUnderrun`] on the next read.
    #[must_use]
    pub fn from_bytes_at(bytes: Vec<u8>, offset: usize) -> Self {
        let mut buf = ByteBuffer::from_bytes(bytes);
        buf.set_position(offset);
        BinaryStream { buf }
    }

    /// The full current byte contents, regardless of the read offset.
    ///
    /// Snapshot semantics: the returned view does not track later mutation of the stream.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Replace the byte contents entirely. The read offset resets to 0.
    pub fn set_buffer(&mut self, bytes: Vec<u8>) {
        self.buf = ByteBuffer::from_bytes(bytes);
    }

    /// Consume the stream and return the underlying bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_bytes()
    }

    /// The current read offset.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.buf.position()
    }

    /// Move the read offset directly.
    ///
    /// No bounds validation happens at call time; an out-of-range offset becomes
    /// observable as [`crate::Error::BufferUnderrun`] on the next read.
    pub fn set_offset(&mut self, offset: usize) {
        self.buf.set_position(offset);
    }

    /// Rewind the read offset to the start of the buffer.
    pub fn rewind(&mut self) {
        self.buf.set_position(0);
    }

    /// Returns `true` once the read offset has reached the end of the buffer.
    ///
    /// This is a pure comparison; nothing enforces it automatically. Callers use it to
    /// detect message-boundary completion.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.buf.position() >= self.buf.len()
    }

    /// Number of bytes left between the read offset and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.buf.position())
    }

    /// The next byte, without advancing the read offset.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if the offset is at or past the end.
    pub fn peek_byte(&self) -> Result<u8> {
        self.buf
            .as_slice()
            .get(self.buf.position())
            .copied()
            .ok_or(BufferUnderrun)
    }

    /// Consume exactly `len` raw bytes, advancing the read offset by `len`.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than `len` bytes remain; the
    /// offset does not move on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::BinaryStream;
    ///
    /// let mut stream = BinaryStream::from_bytes(vec![0x01, 0x02, 0x03]);
    /// assert_eq!(stream.get(2)?, &[0x01, 0x02]);
    /// assert_eq!(stream.offset(), 2);
    /// # Ok::<(), binstream::Error>(())
    /// ```
    pub fn get(&mut self, len: usize) -> Result<&[u8]> {
        self.buf.read(len)
    }

    /// Consume every byte from the read offset to the end.
    ///
    /// Returns an empty slice when already at the end; this is never an error.
    pub fn get_remaining(&mut self) -> &[u8] {
        self.buf.read_remaining()
    }

    /// Append raw bytes at the logical end of the buffer. The read offset is untouched.
    pub fn put(&mut self, bytes: &[u8]) {
        self.buf.write(bytes);
    }

    /// Decode a boolean: `0x00` is `false`, any other byte is `true`.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if no byte remains.
    pub fn get_bool(&mut self) -> Result<bool> {
        Ok(self.buf.read(1)?[0] != 0x00)
    }

    /// Encode a boolean as a single byte, `false` as `0x00` and `true` as `0x01`.
    pub fn put_bool(&mut self, value: bool) {
        self.buf.write(&[u8::from(value)]);
    }

    /// Decode an unsigned 8-bit integer.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if no byte remains.
    pub fn get_byte(&mut self) -> Result<u8> {
        Ok(self.buf.read(1)?[0])
    }

    /// Encode an unsigned 8-bit integer.
    pub fn put_byte(&mut self, value: u8) {
        self.buf.write(&[value]);
    }

    /// Decode an unsigned 16-bit integer, big-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn get_short(&mut self) -> Result<u16> {
        self.get_be::<u16>()
    }

    /// Decode a signed 16-bit integer, big-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn get_signed_short(&mut self) -> Result<i16> {
        self.get_be::<i16>()
    }

    /// Encode an unsigned 16-bit integer, big-endian.
    pub fn put_short(&mut self, value: u16) {
        self.put_be(value);
    }

    /// Encode a signed 16-bit integer, big-endian.
    pub fn put_signed_short(&mut self, value: i16) {
        self.put_be(value);
    }

    /// Decode an unsigned 16-bit integer, little-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn get_l_short(&mut self) -> Result<u16> {
        self.get_le::<u16>()
    }

    /// Decode a signed 16-bit integer, little-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn get_signed_l_short(&mut self) -> Result<i16> {
        self.get_le::<i16>()
    }

    /// Encode an unsigned 16-bit integer, little-endian.
    pub fn put_l_short(&mut self, value: u16) {
        self.put_le(value);
    }

    /// Encode a signed 16-bit integer, little-endian.
    pub fn put_signed_l_short(&mut self, value: i16) {
        self.put_le(value);
    }

    /// Decode an unsigned 24-bit integer (triad), big-endian. No sign extension.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 3 bytes remain.
    pub fn get_triad(&mut self) -> Result<u32> {
        let raw = self.buf.read(3)?;
        Ok(u32::from_be_bytes([0, raw[0], raw[1], raw[2]]))
    }

    /// Encode an unsigned 24-bit integer (triad), big-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `value` does not fit in 24 bits.
    /// Nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::BinaryStream;
    ///
    /// let mut stream = BinaryStream::new();
    /// stream.put_triad(0x0A0B0C)?;
    /// assert_eq!(stream.buffer(), &[0x0A, 0x0B, 0x0C]);
    /// assert!(stream.put_triad(0x0100_0000).is_err());
    /// # Ok::<(), binstream::Error>(())
    /// ```
    pub fn put_triad(&mut self, value: u32) -> Result<()> {
        if value > TRIAD_MAX {
            return Err(invalid_argument_error!(
                "triad value {:#x} exceeds 24 bits",
                value
            ));
        }

        let bytes = value.to_be_bytes();
        self.buf.write(&bytes[1..4]);
        Ok(())
    }

    /// Decode an unsigned 24-bit integer (triad), little-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 3 bytes remain.
    pub fn get_l_triad(&mut self) -> Result<u32> {
        let raw = self.buf.read(3)?;
        Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], 0]))
    }

    /// Encode an unsigned 24-bit integer (triad), little-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `value` does not fit in 24 bits.
    /// Nothing is written in that case.
    pub fn put_l_triad(&mut self, value: u32) -> Result<()> {
        if value > TRIAD_MAX {
            return Err(invalid_argument_error!(
                "triad value {:#x} exceeds 24 bits",
                value
            ));
        }

        let bytes = value.to_le_bytes();
        self.buf.write(&bytes[0..3]);
        Ok(())
    }

    /// Decode a signed 32-bit integer, big-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn get_int(&mut self) -> Result<i32> {
        self.get_be::<i32>()
    }

    /// Encode a signed 32-bit integer, big-endian.
    pub fn put_int(&mut self, value: i32) {
        self.put_be(value);
    }

    /// Decode a signed 32-bit integer, little-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn get_l_int(&mut self) -> Result<i32> {
        self.get_le::<i32>()
    }

    /// Encode a signed 32-bit integer, little-endian.
    pub fn put_l_int(&mut self, value: i32) {
        self.put_le(value);
    }

    /// Decode an IEEE-754 single-precision float, big-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn get_float(&mut self) -> Result<f32> {
        self.get_be::<f32>()
    }

    /// Decode a big-endian float and round it to the given number of fractional digits.
    ///
    /// This is a convenience transform over [`get_float`](BinaryStream::get_float), not a
    /// distinct wire format.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn get_rounded_float(&mut self, precision: i32) -> Result<f32> {
        Ok(round_to(self.get_be::<f32>()?, precision))
    }

    /// Encode an IEEE-754 single-precision float, big-endian.
    pub fn put_float(&mut self, value: f32) {
        self.put_be(value);
    }

    /// Decode an IEEE-754 single-precision float, little-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn get_l_float(&mut self) -> Result<f32> {
        self.get_le::<f32>()
    }

    /// Decode a little-endian float and round it to the given number of fractional digits.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn get_rounded_l_float(&mut self, precision: i32) -> Result<f32> {
        Ok(round_to(self.get_le::<f32>()?, precision))
    }

    /// Encode an IEEE-754 single-precision float, little-endian.
    pub fn put_l_float(&mut self, value: f32) {
        self.put_le(value);
    }

    /// Decode an IEEE-754 double-precision float, big-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 8 bytes remain.
    pub fn get_double(&mut self) -> Result<f64> {
        self.get_be::<f64>()
    }

    /// Encode an IEEE-754 double-precision float, big-endian.
    pub fn put_double(&mut self, value: f64) {
        self.put_be(value);
    }

    /// Decode an IEEE-754 double-precision float, little-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 8 bytes remain.
    pub fn get_l_double(&mut self) -> Result<f64> {
        self.get_le::<f64>()
    }

    /// Encode an IEEE-754 double-precision float, little-endian.
    pub fn put_l_double(&mut self, value: f64) {
        self.put_le(value);
    }

    /// Decode a signed 64-bit integer, big-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 8 bytes remain.
    pub fn get_long(&mut self) -> Result<i64> {
        self.get_be::<i64>()
    }

    /// Encode a signed 64-bit integer, big-endian.
    pub fn put_long(&mut self, value: i64) {
        self.put_be(value);
    }

    /// Decode a signed 64-bit integer, little-endian.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 8 bytes remain.
    pub fn get_l_long(&mut self) -> Result<i64> {
        self.get_le::<i64>()
    }

    /// Encode a signed 64-bit integer, little-endian.
    pub fn put_l_long(&mut self, value: i64) {
        self.put_le(value);
    }

    /// Decode a 32-bit variable-length unsigned integer.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if the buffer ends before a terminating
    /// byte, or [`crate::Error::MalformedVarint`] if the sequence exceeds 5 bytes. The
    /// offset does not move on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::BinaryStream;
    ///
    /// let mut stream = BinaryStream::from_bytes(vec![0xAC, 0x02]);
    /// assert_eq!(stream.get_unsigned_var_int()?, 300);
    /// # Ok::<(), binstream::Error>(())
    /// ```
    pub fn get_unsigned_var_int(&mut self) -> Result<u32> {
        let mut pos = self.buf.position();
        let value = varint::decode_unsigned_var_int(self.buf.as_slice(), &mut pos)?;
        self.buf.set_position(pos);
        Ok(value)
    }

    /// Encode a 32-bit variable-length unsigned integer at the end of the buffer.
    pub fn put_unsigned_var_int(&mut self, value: u32) {
        let mut encoded = [0_u8; VAR_INT_MAX_BYTES];
        let len = varint::encode_unsigned_var_int(value, &mut encoded);
        self.buf.write(&encoded[..len]);
    }

    /// Decode a 32-bit zigzag-encoded variable-length integer.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if the buffer ends before a terminating
    /// byte, or [`crate::Error::MalformedVarint`] if the sequence exceeds 5 bytes.
    pub fn get_var_int(&mut self) -> Result<i32> {
        Ok(varint::zigzag_decode_32(self.get_unsigned_var_int()?))
    }

    /// Encode a 32-bit zigzag-encoded variable-length integer at the end of the buffer.
    pub fn put_var_int(&mut self, value: i32) {
        self.put_unsigned_var_int(varint::zigzag_encode_32(value));
    }

    /// Decode a 64-bit variable-length unsigned integer.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if the buffer ends before a terminating
    /// byte, or [`crate::Error::MalformedVarint`] if the sequence exceeds 10 bytes. The
    /// offset does not move on failure.
    pub fn get_unsigned_var_long(&mut self) -> Result<u64> {
        let mut pos = self.buf.position();
        let value = varint::decode_unsigned_var_long(self.buf.as_slice(), &mut pos)?;
        self.buf.set_position(pos);
        Ok(value)
    }

    /// Encode a 64-bit variable-length unsigned integer at the end of the buffer.
    pub fn put_unsigned_var_long(&mut self, value: u64) {
        let mut encoded = [0_u8; VAR_LONG_MAX_BYTES];
        let len = varint::encode_unsigned_var_long(value, &mut encoded);
        self.buf.write(&encoded[..len]);
    }

    /// Decode a 64-bit zigzag-encoded variable-length integer.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if the buffer ends before a terminating
    /// byte, or [`crate::Error::MalformedVarint`] if the sequence exceeds 10 bytes.
    pub fn get_var_long(&mut self) -> Result<i64> {
        Ok(varint::zigzag_decode_64(self.get_unsigned_var_long()?))
    }

    /// Encode a 64-bit zigzag-encoded variable-length integer at the end of the buffer.
    pub fn put_var_long(&mut self, value: i64) {
        self.put_unsigned_var_long(varint::zigzag_encode_64(value));
    }

    /// Decode a value of type `T` at the read offset in big-endian format.
    fn get_be<T: WireIO>(&mut self) -> Result<T> {
        let mut pos = self.buf.position();
        let value = io::read_be_at(self.buf.as_slice(), &mut pos)?;
        self.buf.set_position(pos);
        Ok(value)
    }

    /// Decode a value of type `T` at the read offset in little-endian format.
    fn get_le<T: WireIO>(&mut self) -> Result<T> {
        let mut pos = self.buf.position();
        let value = io::read_le_at(self.buf.as_slice(), &mut pos)?;
        self.buf.set_position(pos);
        Ok(value)
    }

    /// Append a value of type `T` in big-endian format.
    fn put_be<T: WireIO>(&mut self, value: T) {
        self.buf.write(value.to_be_bytes().as_ref());
    }

    /// Append a value of type `T` in little-endian format.
    fn put_le<T: WireIO>(&mut self, value: T) {
        self.buf.write(value.to_le_bytes().as_ref());
    }
}

/// Round to `precision` fractional decimal digits, computed in f64.
fn round_to(value: f32, precision: i32) -> f32 {
    let factor = 10_f64.powi(precision);
    ((f64::from(value) * factor).round() / factor) as f32
}
