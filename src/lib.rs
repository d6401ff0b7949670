// Copyright 2026 the binstream authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! # binstream
//!
//! An endian-aware binary stream cursor for encoding and decoding network-protocol
//! payloads. `binstream` provides a single cursor type, [`BinaryStream`], with typed
//! get/put operations for booleans, fixed-width integers in both byte orders, IEEE-754
//! floats, 24-bit triads, and LEB128 variable-length integers with zigzag signed mapping.
//!
//! ## Features
//!
//! - **Bit-exact wire formats** - big- and little-endian fixed-width encodings, 24-bit
//!   triads, and standard LEB128 varints that interoperate byte-for-byte with other
//!   implementations
//! - **Append-only writes** - encode operations extend the logical end of the buffer and
//!   never disturb the read cursor, so one stream can be parsed and extended interleaved
//! - **Atomic reads** - a failed decode leaves the read offset untouched; the stream
//!   stays usable and the failure is a typed error, never a panic or a short result
//! - **Explicit malformed-input handling** - truncated data surfaces as
//!   [`Error::BufferUnderrun`], non-terminating varints as [`Error::MalformedVarint`],
//!   both distinct from caller misuse ([`Error::InvalidArgument`])
//!
//! ## Quick Start
//!
//! Add `binstream` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! binstream = "0.1"
//! ```
//!
//! ### Building a payload
//!
//! ```rust
//! use binstream::BinaryStream;
//!
//! let mut stream = BinaryStream::new();
//! stream.put_bool(true);
//! stream.put_byte(42);
//! stream.put_signed_short(-1000);
//! stream.put_unsigned_var_int(300);
//!
//! let payload = stream.into_bytes();
//! assert_eq!(payload, [0x01, 0x2A, 0xFC, 0x18, 0xAC, 0x02]);
//! ```
//!
//! ### Parsing a payload
//!
//! ```rust
//! use binstream::BinaryStream;
//!
//! let mut stream = BinaryStream::from_bytes(vec![0x01, 0x2A, 0xFC, 0x18, 0xAC, 0x02]);
//! assert!(stream.get_bool()?);
//! assert_eq!(stream.get_byte()?, 42);
//! assert_eq!(stream.get_signed_short()?, -1000);
//! assert_eq!(stream.get_unsigned_var_int()?, 300);
//! assert!(stream.is_at_end());
//! # Ok::<(), binstream::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`BinaryStream`] - the typed get/put cursor, the main entry point
//! - [`ByteBuffer`] - the owned growable storage the cursor is built on
//! - [`Error`] and [`Result`] - typed error handling for every decode
//! - [`prelude`] - convenient re-exports of the above
//!
//! ## Error Handling
//!
//! All decode operations return [`Result<T, Error>`](Result). When decoding externally
//! supplied payloads, [`Error::BufferUnderrun`] and [`Error::MalformedVarint`] mean the
//! input is truncated or malformed; [`Error::InvalidArgument`] is only ever produced by
//! an encode whose argument cannot be represented in the requested width (caller misuse).
//!
//! ```rust
//! use binstream::{BinaryStream, Error};
//!
//! let mut stream = BinaryStream::from_bytes(vec![0x80, 0x80]);
//! match stream.get_unsigned_var_int() {
//!     Err(Error::BufferUnderrun) => { /* truncated input */ }
//!     other => panic!("expected underrun, got {other:?}"),
//! }
//! ```
//!
//! ## Concurrency
//!
//! Every operation is synchronous and completes in time proportional to the bytes
//! processed. A stream is a single-owner value: pass it by exclusive reference through a
//! call chain (one stream per message being built or parsed) rather than sharing it
//! across threads.

#[macro_use]
pub(crate) mod error;
pub(crate) mod stream;

/// Convenient re-exports of the most commonly used types.
pub mod prelude;

/// The specialized `Result` type used throughout binstream.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all stream operations.
pub use error::Error;

/// The cursor and its backing storage.
pub use stream::{buffer::ByteBuffer, BinaryStream};
