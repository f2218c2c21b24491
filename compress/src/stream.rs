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

use crate::{Algorithm, CodecConfig, CodecResult, CompressionCodec, Mode};
use cinder_buffer::ByteBuffer;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// A [`CompressionStream`] shared between several holders.
///
/// The stream and any open codec state are released when the last clone is dropped.
pub type SharedCompressionStream = Rc<RefCell<CompressionStream>>;

/// The public handle for compressing and decompressing byte streams.
///
/// `CompressionStream` binds an [`Algorithm`] to one [`CompressionCodec`] and picks the
/// codec's direction from the verb used: [`compress`](Self::compress) and
/// [`decompress`](Self::decompress) initialize the codec for their direction when it is not
/// already set up for it. Switching verbs mid-stream discards the unfinished stream.
///
/// # Examples
///
/// ```rust
/// use cinder_buffer::ByteBuffer;
/// use cinder_compress::{Algorithm, CompressionStream};
///
/// # fn example() -> cinder_compress::CodecResult<()> {
/// let mut stream = CompressionStream::new(Algorithm::Deflate)?;
/// let mut compressed = Vec::new();
/// let mut out = ByteBuffer::new();
///
/// for chunk in [&b"chunk one "[..], &b"chunk two"[..]] {
///     stream.compress(chunk, &mut out)?;
///     compressed.extend_from_slice(out.as_slice());
/// }
/// stream.finish(&mut out)?;
/// compressed.extend_from_slice(out.as_slice());
///
/// let restored = stream.decompress_all(&compressed)?;
/// assert_eq!(restored.as_slice(), b"chunk one chunk two");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
///
/// ## Sharing
///
/// ```rust
/// use cinder_compress::{Algorithm, CompressionStream};
///
/// let shared = CompressionStream::new(Algorithm::Deflate).unwrap().into_shared();
/// let other = shared.clone();
/// other.borrow_mut().set_buffer_size(1024).unwrap();
/// assert_eq!(shared.borrow().buffer_size(), 1024);
/// ```
#[derive(Debug)]
pub struct CompressionStream {
    codec: CompressionCodec,
}

impl CompressionStream {
    /// Creates a stream for `algorithm` with the default configuration.
    pub fn new(algorithm: Algorithm) -> CodecResult<Self> {
        Self::with_config(algorithm, CodecConfig::default())
    }

    /// Creates a stream for `algorithm` with `config`.
    pub fn with_config(algorithm: Algorithm, config: CodecConfig) -> CodecResult<Self> {
        Ok(Self {
            codec: CompressionCodec::with_config(algorithm, config)?,
        })
    }

    /// Wraps this stream for shared ownership.
    pub fn into_shared(self) -> SharedCompressionStream {
        Rc::new(RefCell::new(self))
    }

    /// The algorithm this stream runs.
    pub fn algorithm(&self) -> Algorithm {
        self.codec.algorithm()
    }

    /// Current direction of the underlying codec.
    pub fn mode(&self) -> Mode {
        self.codec.mode()
    }

    /// Returns `true` while a stream is open.
    pub fn is_initialized(&self) -> bool {
        self.codec.is_initialized()
    }

    /// The underlying codec.
    pub fn codec(&self) -> &CompressionCodec {
        &self.codec
    }

    /// Explicitly (re)initializes the codec for `mode`.
    pub fn init(&mut self, mode: Mode) -> CodecResult<()> {
        self.codec.init(mode)
    }

    /// Size of the codec's working buffer in bytes.
    pub fn buffer_size(&self) -> usize {
        self.codec.buffer_size()
    }

    /// Changes the working buffer size; sizes below the 32-byte minimum are ignored.
    ///
    /// See [`CompressionCodec::set_buffer_size`].
    pub fn set_buffer_size(&mut self, size: usize) -> CodecResult<()> {
        self.codec.set_buffer_size(size)
    }

    /// Compresses `input`, replacing the content of `out` with the bytes produced.
    ///
    /// See [`CompressionCodec::consume`].
    pub fn compress(&mut self, input: &[u8], out: &mut ByteBuffer) -> CodecResult<()> {
        self.ensure_mode(Mode::Compress)?;
        self.codec.consume(input, out)
    }

    /// Decompresses `input`, replacing the content of `out` with the bytes produced.
    ///
    /// See [`CompressionCodec::consume`].
    pub fn decompress(&mut self, input: &[u8], out: &mut ByteBuffer) -> CodecResult<()> {
        self.ensure_mode(Mode::Decompress)?;
        self.codec.consume(input, out)
    }

    /// Finishes the open stream, replacing the content of `out` with the final bytes.
    ///
    /// See [`CompressionCodec::close`]. Fails with
    /// [`CodecError::NotInitialized`](crate::CodecError::NotInitialized) when no stream is
    /// open, since there is no direction to finish.
    pub fn finish(&mut self, out: &mut ByteBuffer) -> CodecResult<()> {
        self.codec.close(out)
    }

    /// Compresses `input` as one complete stream.
    ///
    /// Any stream already open is discarded first.
    pub fn compress_all(&mut self, input: &[u8]) -> CodecResult<ByteBuffer> {
        self.codec.init(Mode::Compress)?;
        self.run_all(input)
    }

    /// Decompresses `input` as one complete stream.
    ///
    /// Any stream already open is discarded first.
    pub fn decompress_all(&mut self, input: &[u8]) -> CodecResult<ByteBuffer> {
        self.codec.init(Mode::Decompress)?;
        self.run_all(input)
    }

    fn run_all(&mut self, input: &[u8]) -> CodecResult<ByteBuffer> {
        let mut output = ByteBuffer::new();
        let mut chunk = ByteBuffer::new();

        self.codec.consume(input, &mut chunk)?;
        if !chunk.is_empty() {
            output.append(chunk.as_slice())?;
        }
        self.codec.close(&mut chunk)?;
        if !chunk.is_empty() {
            output.append(chunk.as_slice())?;
        }
        Ok(output)
    }

    fn ensure_mode(&mut self, mode: Mode) -> CodecResult<()> {
        if self.codec.mode() != mode {
            if self.codec.is_initialized() {
                debug!(
                    from = %self.codec.mode(),
                    to = %mode,
                    "Switching stream direction, discarding open stream"
                );
            }
            self.codec.init(mode)?;
        }
        Ok(())
    }
}

impl Drop for CompressionStream {
    fn drop(&mut self) {
        if self.codec.is_initialized() {
            warn!(
                algorithm = %self.codec.algorithm(),
                mode = %self.codec.mode(),
                "Dropping stream with unfinished codec state"
            );
        }
    }
}
