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

/// Compression algorithm selection for codecs and streams.
///
/// Every variant is a slot in the codec family, but only the algorithms reporting
/// [`is_implemented`](Self::is_implemented) can be initialized. Selecting a reserved slot is
/// allowed; the failure surfaces as [`CodecError::Unsupported`](crate::CodecError::Unsupported)
/// when the codec is first initialized.
///
/// | Algorithm | Status      | Format                                   |
/// |-----------|-------------|------------------------------------------|
/// | `Deflate` | Implemented | DEFLATE (RFC 1951), optionally zlib-wrapped (RFC 1950) |
/// | `Lzma2`   | Reserved    | -                                        |
/// | `Bzip2`   | Reserved    | -                                        |
///
/// # Examples
///
/// ```rust
/// use cinder_compress::Algorithm;
///
/// assert!(Algorithm::Deflate.is_implemented());
/// assert!(!Algorithm::Lzma2.is_implemented());
/// assert_eq!(Algorithm::default(), Algorithm::Deflate);
/// assert_eq!(Algorithm::Bzip2.to_string(), "bzip2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Deflate,
    Lzma2,
    Bzip2,
}

impl Algorithm {
    /// All algorithm slots, implemented or not.
    pub const ALL: [Algorithm; 3] = [Algorithm::Deflate, Algorithm::Lzma2, Algorithm::Bzip2];

    /// Returns `true` if a codec for this algorithm can be initialized.
    pub fn is_implemented(self) -> bool {
        matches!(self, Algorithm::Deflate)
    }

    /// Short lowercase name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Deflate => "deflate",
            Algorithm::Lzma2 => "lzma2",
            Algorithm::Bzip2 => "bzip2",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction a codec is currently set up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// No algorithm state is held.
    #[default]
    Uninitialized,
    /// Input bytes are compressed.
    Compress,
    /// Input bytes are decompressed.
    Decompress,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Uninitialized => f.write_str("uninitialized"),
            Mode::Compress => f.write_str("compress"),
            Mode::Decompress => f.write_str("decompress"),
        }
    }
}
