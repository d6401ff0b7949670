//! # binstream Prelude
//!
//! Convenient re-exports of the types nearly every user of the crate touches. Import
//! this module to get quick access to the cursor, its storage, and the error types.
//!
//! ```rust
//! use binstream::prelude::*;
//!
//! let mut stream = BinaryStream::new();
//! stream.put_unsigned_var_int(300);
//! ```

/// The main error type for all binstream operations
pub use crate::Error;

/// The result type used throughout binstream
pub use crate::Result;

/// The binary stream cursor, the main entry point
pub use crate::BinaryStream;

/// The owned growable storage backing a stream
pub use crate::ByteBuffer;
