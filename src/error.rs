use thiserror::Error;

macro_rules! invalid_argument_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidArgument {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The variants split failures into two distinct audiences: [`Error::BufferUnderrun`] and
/// [`Error::MalformedVarint`] indicate that externally supplied payload data is truncated or
/// malformed, while [`Error::InvalidArgument`] indicates caller misuse (a value that cannot be
/// represented in the requested wire width). Code that decodes untrusted input should treat the
/// first two as bad input, not as programming errors.
///
/// # Examples
///
/// ```rust
/// use binstream::{BinaryStream, Error};
///
/// let mut stream = BinaryStream::from_bytes(vec![0x01, 0x02]);
/// match stream.get(3) {
///     Ok(_) => unreachable!(),
///     Err(Error::BufferUnderrun) => { /* truncated input */ }
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A read requested more bytes than remain between the read offset and the end of the data.
    ///
    /// This applies to raw reads, every fixed-width decode, and variable-length sequences that
    /// are cut off before their terminating byte. Reads are atomic: when this error is returned
    /// the read offset has not moved.
    #[error("Not enough bytes remaining in the buffer to complete the read")]
    BufferUnderrun,

    /// The caller supplied a value outside the representable domain for a fixed-width encode.
    ///
    /// This is a precondition violation by the caller (for example a triad value wider than
    /// 24 bits), not a property of the input data. The error includes the source location where
    /// the violation was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of the rejected value
    /// * `file` - Source file in which the error was raised
    /// * `line` - Source line in which the error was raised
    #[error("Invalid argument - {file}:{line}: {message}")]
    InvalidArgument {
        /// The message to be printed for the InvalidArgument error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A variable-length integer did not terminate within its maximum encoded width.
    ///
    /// Unsigned varints are bounded at 5 bytes (32-bit domain) and varlongs at 10 bytes
    /// (64-bit domain). Input whose continuation bits are still set past that bound is
    /// rejected explicitly instead of wrapping around. The read offset has not moved when
    /// this error is returned.
    #[error("Variable-length integer did not terminate within {max_bytes} bytes")]
    MalformedVarint {
        /// Maximum encoded width that was exceeded
        max_bytes: usize,
    },
}
