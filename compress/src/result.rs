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

use crate::{Algorithm, Mode};
use cinder_buffer::BufferError;
use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors produced by codecs and compression streams.
///
/// "Need more input" and "output full" are not errors; the codec handles them internally.
/// A [`Fault`](CodecError::Fault), [`TrailingInput`](CodecError::TrailingInput) or
/// [`UnexpectedEnd`](CodecError::UnexpectedEnd) leaves the codec unusable; discard it or
/// call `init` again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The output or working buffer could not grow
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// `consume` or `close` was called without a successful `init`
    #[error("Codec is not initialized")]
    NotInitialized,

    /// The algorithm slot exists but has no implementation
    #[error("Compression algorithm {0} is not implemented")]
    Unsupported(Algorithm),

    /// The algorithm refused to set up state for the requested mode
    #[error("Failed to initialize {algorithm} codec for {mode}: {reason}")]
    InitFailed {
        /// Algorithm being initialized
        algorithm: Algorithm,
        /// Requested mode
        mode: Mode,
        /// Description of the failure
        reason: String,
    },

    /// The algorithm reported an unrecoverable internal error
    #[error("{algorithm} codec fault: {reason}")]
    Fault {
        /// Algorithm that failed
        algorithm: Algorithm,
        /// Description reported by the algorithm
        reason: String,
    },

    /// The compressed stream ended before all input was consumed
    #[error("{remaining} bytes of input follow the end of the compressed stream")]
    TrailingInput {
        /// Number of input bytes left unconsumed
        remaining: usize,
    },

    /// The compressed stream was finished before its end marker was seen
    #[error("Compressed stream ended unexpectedly")]
    UnexpectedEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_buffer_error() {
        let error: CodecError = BufferError::Allocation { requested: 8 }.into();
        assert!(matches!(
            error,
            CodecError::Buffer(BufferError::Allocation { requested: 8 })
        ));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CodecError::Unsupported(Algorithm::Lzma2).to_string(),
            "Compression algorithm lzma2 is not implemented"
        );
        assert_eq!(
            CodecError::Fault {
                algorithm: Algorithm::Deflate,
                reason: "invalid stored block lengths".to_string(),
            }
            .to_string(),
            "deflate codec fault: invalid stored block lengths"
        );
        assert_eq!(
            CodecError::TrailingInput { remaining: 3 }.to_string(),
            "3 bytes of input follow the end of the compressed stream"
        );
        assert_eq!(
            CodecError::InitFailed {
                algorithm: Algorithm::Deflate,
                mode: Mode::Uninitialized,
                reason: "no direction".to_string(),
            }
            .to_string(),
            "Failed to initialize deflate codec for uninitialized: no direction"
        );
    }
}
