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

use crate::growth::grow_capacity;
use crate::{BufferError, BufferResult};
use bytes::Bytes;
use tracing::trace;

/// Reference point for [`ByteBuffer::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekOrigin {
    /// Offset is measured from the start of the buffer.
    Begin,
    /// Offset is measured from the current cursor.
    Current,
    /// Offset is measured from the logical end of the buffer. Only zero and negative
    /// offsets are accepted.
    End,
}

/// Growable, seekable, in-memory byte buffer.
///
/// A `ByteBuffer` tracks three positions over its storage:
///
/// - **capacity**: the number of bytes allocated. Capacity only grows, and growth always
///   rounds up to a power of two (see [`grow_capacity`]).
/// - **size**: the number of valid bytes, `size <= capacity`.
/// - **cursor**: the stream position used by [`read`](Self::read) and
///   [`write`](Self::write), `cursor <= size`.
///
/// Every byte below `size` survives any later growth unchanged. Bytes exposed by growing the
/// logical size through [`resize`](Self::resize) have unspecified content.
///
/// # Stream Semantics
///
/// Reads and writes behave like a file opened for update. A read that cannot be fully
/// satisfied copies what is available and sets the end-of-stream flag; a read that exactly
/// reaches the end does not. Writes past the end grow the buffer.
///
/// # Examples
///
/// ```rust
/// use cinder_buffer::{ByteBuffer, SeekOrigin};
///
/// let mut buffer = ByteBuffer::new();
/// buffer.write(b"hello").unwrap();
/// assert_eq!(buffer.len(), 5);
/// assert_eq!(buffer.position(), 5);
///
/// buffer.seek(0, SeekOrigin::Begin).unwrap();
/// let mut dest = [0u8; 5];
/// assert_eq!(buffer.read(&mut dest), 5);
/// assert_eq!(&dest, b"hello");
/// assert!(!buffer.is_at_end());
///
/// assert_eq!(buffer.read(&mut dest[..1]), 0);
/// assert!(buffer.is_at_end());
/// ```
#[derive(Clone, Default)]
pub struct ByteBuffer {
    /// Backing storage; its length is the capacity
    data: Vec<u8>,
    /// Number of valid bytes
    size: usize,
    /// Stream position
    cursor: usize,
    /// Set when a read came up short
    at_end: bool,
}

impl ByteBuffer {
    /// Creates an empty buffer with no storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding exactly `size` bytes of unspecified content.
    ///
    /// Capacity equals `size`; it is not rounded. A zero size creates an empty buffer without
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if the storage cannot be obtained.
    pub fn with_size(size: usize) -> BufferResult<Self> {
        let data = allocate(size)?;
        Ok(Self {
            data,
            size,
            cursor: 0,
            at_end: false,
        })
    }

    /// Creates a buffer holding a copy of `source`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::EmptySource`] if `source` is empty.
    /// - [`BufferError::Allocation`] if the storage cannot be obtained.
    pub fn from_slice(source: &[u8]) -> BufferResult<Self> {
        if source.is_empty() {
            return Err(BufferError::EmptySource {
                operation: "from_slice",
            });
        }
        let mut buffer = Self::with_size(source.len())?;
        buffer.data.copy_from_slice(source);
        Ok(buffer)
    }

    /// Number of valid bytes.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the buffer holds no valid bytes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of bytes allocated.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current stream position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of bytes between the cursor and the logical end.
    pub fn remaining(&self) -> usize {
        self.size - self.cursor
    }

    /// Returns `true` once a read failed to satisfy its full request. Cleared by a successful
    /// [`seek`](Self::seek) or any [`write`](Self::write).
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// The valid bytes of the buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.size]
    }

    /// The valid bytes of the buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.size]
    }

    /// Sets the logical size to `new_size`.
    ///
    /// Capacity grows (see [`reserve`](Self::reserve)) when `new_size` exceeds it. Shrinking
    /// keeps the storage and pulls the cursor back to the new end if it was beyond it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if growth fails. The buffer is unchanged.
    pub fn resize(&mut self, new_size: usize) -> BufferResult<()> {
        if new_size > self.capacity() {
            self.reserve(new_size)?;
        }
        self.size = new_size;
        self.cursor = self.cursor.min(new_size);
        Ok(())
    }

    /// Ensures capacity is at least `new_capacity` without touching the logical size.
    ///
    /// Growth rounds `new_capacity` up to the next power of two. Requests at or below the
    /// current capacity do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if growth fails. The buffer is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> BufferResult<()> {
        let current = self.capacity();
        if new_capacity <= current {
            return Ok(());
        }
        let target = grow_capacity(new_capacity);
        self.data
            .try_reserve_exact(target - current)
            .map_err(|_| BufferError::Allocation { requested: target })?;
        self.data.resize(target, 0);
        trace!(from = current, to = target, size = self.size, "Grew buffer");
        Ok(())
    }

    /// Replaces the content of the buffer with a copy of `source`.
    ///
    /// The logical size becomes `source.len()`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::EmptySource`] if `source` is empty.
    /// - [`BufferError::Allocation`] if growth fails.
    pub fn assign(&mut self, source: &[u8]) -> BufferResult<()> {
        if source.is_empty() {
            return Err(BufferError::EmptySource {
                operation: "assign",
            });
        }
        self.resize(source.len())?;
        self.data[..source.len()].copy_from_slice(source);
        Ok(())
    }

    /// Appends a copy of `source` at the logical end. The cursor does not move.
    ///
    /// # Errors
    ///
    /// - [`BufferError::EmptySource`] if `source` is empty.
    /// - [`BufferError::Allocation`] if growth fails.
    pub fn append(&mut self, source: &[u8]) -> BufferResult<()> {
        if source.is_empty() {
            return Err(BufferError::EmptySource {
                operation: "append",
            });
        }
        let start = self.size;
        let end = start
            .checked_add(source.len())
            .ok_or(BufferError::Allocation {
                requested: usize::MAX,
            })?;
        self.resize(end)?;
        self.data[start..end].copy_from_slice(source);
        Ok(())
    }

    /// Copies bytes from the cursor into `dest` and advances the cursor.
    ///
    /// Returns the number of bytes copied. When fewer than `dest.len()` bytes are available
    /// the end-of-stream flag is set. An empty `dest` is a no-op.
    pub fn read(&mut self, dest: &mut [u8]) -> usize {
        if dest.is_empty() {
            return 0;
        }
        let count = self.remaining().min(dest.len());
        dest[..count].copy_from_slice(&self.data[self.cursor..self.cursor + count]);
        self.cursor += count;
        if count < dest.len() {
            self.at_end = true;
        }
        count
    }

    /// Copies `source` to the cursor, growing the buffer if it runs past the end, and
    /// advances the cursor. Clears the end-of-stream flag.
    ///
    /// Returns the number of bytes written, always `source.len()`. An empty `source` is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if growth fails.
    pub fn write(&mut self, source: &[u8]) -> BufferResult<usize> {
        if source.is_empty() {
            return Ok(0);
        }
        let end = self
            .cursor
            .checked_add(source.len())
            .ok_or(BufferError::Allocation {
                requested: usize::MAX,
            })?;
        if end > self.size {
            self.resize(end)?;
        }
        self.data[self.cursor..end].copy_from_slice(source);
        self.cursor = end;
        self.at_end = false;
        Ok(source.len())
    }

    /// Moves the cursor to `offset` relative to `origin`.
    ///
    /// The target must lie within `[0, len()]`. Seeking past the end is never allowed, so
    /// [`SeekOrigin::End`] only accepts zero or negative offsets. On success the
    /// end-of-stream flag is cleared and the new position is returned.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::SeekOutOfRange`] and leaves the cursor unchanged when the
    /// target is out of range.
    pub fn seek(&mut self, offset: i64, origin: SeekOrigin) -> BufferResult<usize> {
        let base = match origin {
            SeekOrigin::Begin => 0,
            SeekOrigin::Current => self.cursor,
            SeekOrigin::End => self.size,
        };
        let target = base as i128 + offset as i128;
        if target < 0 || target > self.size as i128 {
            return Err(BufferError::SeekOutOfRange {
                offset,
                origin,
                size: self.size,
            });
        }
        self.cursor = target as usize;
        self.at_end = false;
        Ok(self.cursor)
    }

    /// Releases the storage and resets size, capacity and cursor to zero.
    pub fn clear(&mut self) {
        self.data = Vec::new();
        self.size = 0;
        self.cursor = 0;
        self.at_end = false;
    }

    /// Empties the buffer but keeps its storage for reuse.
    pub fn reset(&mut self) {
        self.size = 0;
        self.cursor = 0;
        self.at_end = false;
    }

    /// Consumes the buffer and returns its valid bytes.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.truncate(self.size);
        self.data
    }

    /// Consumes the buffer and returns its valid bytes as immutable [`Bytes`].
    pub fn freeze(self) -> Bytes {
        Bytes::from(self.into_vec())
    }
}

impl std::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("cursor", &self.cursor)
            .field("at_end", &self.at_end)
            .finish()
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ByteBuffer {}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        let size = data.len();
        Self {
            data,
            size,
            cursor: 0,
            at_end: false,
        }
    }
}

impl TryFrom<&[u8]> for ByteBuffer {
    type Error = BufferError;

    fn try_from(source: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(source)
    }
}

fn allocate(capacity: usize) -> BufferResult<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)
        .map_err(|_| BufferError::Allocation {
            requested: capacity,
        })?;
    data.resize(capacity, 0);
    Ok(data)
}
