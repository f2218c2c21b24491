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

//! # Cinder Byte Buffer
//!
//! A growable, seekable, in-memory byte buffer used throughout the engine as both a sink and
//! a source of bytes. Asset loaders, the compression engine, and the hashing layer all hand
//! data around as [`ByteBuffer`]s.
//!
//! ## Features
//!
//! - **Power-of-two growth**: Capacity doubles to the next power of two on demand and never
//!   shrinks implicitly
//! - **Data preservation**: Bytes below the logical size survive every resize
//! - **File-like cursor**: `read`, `write` and `seek` with begin/current/end origins
//! - **Explicit failures**: Allocation failures and invalid arguments are returned as
//!   [`BufferError`], never panics
//! - **I/O interop**: Implements `std::io::{Read, Write, Seek}` and
//!   `tokio::io::{AsyncRead, AsyncWrite}`
//!
//! ## Basic Usage
//!
//! ```rust
//! use cinder_buffer::{ByteBuffer, SeekOrigin};
//!
//! # fn example() -> cinder_buffer::BufferResult<()> {
//! let mut buffer = ByteBuffer::new();
//! buffer.write(b"level-01")?;
//! buffer.append(b".map")?;
//!
//! buffer.seek(-4, SeekOrigin::End)?;
//! let mut extension = [0u8; 4];
//! assert_eq!(buffer.read(&mut extension), 4);
//! assert_eq!(&extension, b".map");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Ownership
//!
//! A `ByteBuffer` exclusively owns its storage. Share one by moving it, borrowing it, or
//! wrapping it in the standard shared-ownership types at the call site.

mod buffer;
mod growth;
mod io;
mod result;

pub use self::buffer::{ByteBuffer, SeekOrigin};
pub use self::growth::grow_capacity;
pub use self::result::{BufferError, BufferResult};
