//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! # Streaming Compression Engine
//!
//! Incremental compression and decompression of byte streams into
//! [`ByteBuffer`](cinder_buffer::ByteBuffer)s. Data may arrive in chunks of any size; every
//! call consumes its whole input and hands back whatever output is ready.
//!
//! ## Features
//!
//! - **Streaming**: Feed input chunk by chunk, collect output chunk by chunk
//! - **Bounded working memory**: Algorithm output is staged in a fixed working buffer
//!   (default 512 bytes, minimum 32) and drained into the caller's buffer when full
//! - **Direction by verb**: [`CompressionStream::compress`] and
//!   [`CompressionStream::decompress`] set up the codec for their direction on first use
//! - **Algorithm slots**: DEFLATE today, with LZMA2 and BZip2 reserved behind the same API
//! - **Shared handles**: [`SharedCompressionStream`] lets several holders drive one stream
//!
//! ## Basic Usage
//!
//! ### Streaming Compression
//!
//! ```rust
//! use cinder_buffer::ByteBuffer;
//! use cinder_compress::{Algorithm, CompressionStream};
//!
//! # fn example() -> cinder_compress::CodecResult<()> {
//! let mut stream = CompressionStream::new(Algorithm::Deflate)?;
//! let mut out = ByteBuffer::new();
//! let mut compressed = Vec::new();
//!
//! stream.compress(b"hello hello hello hello", &mut out)?;
//! compressed.extend_from_slice(out.as_slice());
//!
//! // Flush held-back data and write the stream trailer
//! stream.finish(&mut out)?;
//! compressed.extend_from_slice(out.as_slice());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ### One-shot Helpers
//!
//! ```rust
//! use cinder_compress::{Algorithm, CompressionStream};
//!
//! # fn example() -> cinder_compress::CodecResult<()> {
//! let mut stream = CompressionStream::new(Algorithm::Deflate)?;
//! let compressed = stream.compress_all(b"level geometry")?;
//! let restored = stream.decompress_all(compressed.as_slice())?;
//! assert_eq!(restored.as_slice(), b"level geometry");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ### Tuning the Codec
//!
//! ```rust
//! use cinder_compress::{Algorithm, CodecConfig, CompressionStream};
//!
//! let config = CodecConfig::default().with_buffer_size(4096).with_level(9);
//! let stream = CompressionStream::with_config(Algorithm::Deflate, config).unwrap();
//! assert_eq!(stream.buffer_size(), 4096);
//! ```
//!
//! ## Algorithm Selection
//!
//! - **`Algorithm::Deflate`**: DEFLATE, zlib-wrapped unless
//!   [`CodecConfig::zlib_header`] is turned off
//! - **`Algorithm::Lzma2`**: Reserved, fails with [`CodecError::Unsupported`]
//! - **`Algorithm::Bzip2`**: Reserved, fails with [`CodecError::Unsupported`]
//!
//! ## Important Notes
//!
//! ### Stream Finalization
//!
//! Always call [`CompressionStream::finish`] when a stream is done:
//! - A compressor emits the data it held back and the stream trailer
//! - A decompressor verifies that the compressed stream was complete
//! - The codec returns to [`Mode::Uninitialized`] and may be reused
//!
//! ### Direction Switching
//!
//! Calling `decompress` on a stream that is compressing (or the reverse) discards the
//! unfinished stream and starts a new one in the other direction.
//!
//! ### Errors
//!
//! After any [`CodecError`] other than [`CodecError::NotInitialized`], the codec state is
//! unreliable. Discard the stream or call `init` before using it again.

mod algorithm;
mod codec;
mod config;
mod deflate;
mod result;
mod stream;

pub use self::algorithm::{Algorithm, Mode};
pub use self::codec::CompressionCodec;
pub use self::config::{
    CodecConfig, DEFAULT_BUFFER_SIZE, DEFAULT_LEVEL, MAX_LEVEL, MIN_BUFFER_SIZE,
};
pub use self::result::{CodecError, CodecResult};
pub use self::stream::{CompressionStream, SharedCompressionStream};
