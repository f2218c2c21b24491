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

//! Codec configuration
//!
//! ```
//! use cinder_compress::CodecConfig;
//!
//! let config = CodecConfig::default()
//!     .with_buffer_size(4096)
//!     .with_level(9)
//!     .with_zlib_header(false);
//! assert_eq!(config.buffer_size, 4096);
//! ```

/// Working buffer size used when none is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 512;

/// Smallest working buffer a codec accepts.
pub const MIN_BUFFER_SIZE: usize = 32;

/// Compression level used when none (or an out-of-range one) is configured.
pub const DEFAULT_LEVEL: u32 = 6;

/// Highest accepted compression level.
pub const MAX_LEVEL: u32 = 9;

/// Tuning knobs for a [`CompressionCodec`](crate::CompressionCodec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Size of the working buffer in bytes. Values below [`MIN_BUFFER_SIZE`] are ignored in
    /// favor of [`DEFAULT_BUFFER_SIZE`].
    pub buffer_size: usize,

    /// Compression level, 0 (store) through 9 (best). Out-of-range values fall back to
    /// [`DEFAULT_LEVEL`].
    pub level: u32,

    /// Wrap the DEFLATE stream in a zlib header and Adler-32 trailer. Both sides of a
    /// stream must agree on this setting.
    pub zlib_header: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            level: DEFAULT_LEVEL,
            zlib_header: true,
        }
    }
}

impl CodecConfig {
    /// Set the working buffer size
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Set the compression level
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable the zlib container
    pub fn with_zlib_header(mut self, enabled: bool) -> Self {
        self.zlib_header = enabled;
        self
    }

    /// Working buffer size after applying the minimum.
    pub(crate) fn effective_buffer_size(&self) -> usize {
        if self.buffer_size < MIN_BUFFER_SIZE {
            DEFAULT_BUFFER_SIZE
        } else {
            self.buffer_size
        }
    }

    /// Compression level after applying the accepted range.
    pub(crate) fn effective_level(&self) -> u32 {
        if self.level > MAX_LEVEL {
            DEFAULT_LEVEL
        } else {
            self.level
        }
    }
}
