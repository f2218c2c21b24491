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

use crate::SeekOrigin;
use thiserror::Error;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors produced by [`ByteBuffer`](crate::ByteBuffer) operations.
///
/// Every failing operation leaves the buffer exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Storage for the requested capacity could not be obtained.
    #[error("unable to allocate {requested} bytes of buffer storage")]
    Allocation {
        /// Capacity that was being allocated when the failure occurred
        requested: usize,
    },

    /// An operation that copies from a source slice was given nothing to copy.
    #[error("{operation} requires a non-empty source")]
    EmptySource {
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// A seek computed a position outside `[0, size]`.
    #[error("seek to {offset} from {origin:?} is outside of [0, {size}]")]
    SeekOutOfRange {
        /// Requested offset
        offset: i64,
        /// Origin the offset was relative to
        origin: SeekOrigin,
        /// Logical size of the buffer at the time of the seek
        size: usize,
    },
}

impl From<BufferError> for std::io::Error {
    fn from(error: BufferError) -> Self {
        let kind = match error {
            BufferError::Allocation { .. } => std::io::ErrorKind::OutOfMemory,
            BufferError::EmptySource { .. } | BufferError::SeekOutOfRange { .. } => {
                std::io::ErrorKind::InvalidInput
            }
        };
        std::io::Error::new(kind, error)
    }
}
