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

use crate::deflate::DeflateState;
use crate::{Algorithm, CodecConfig, CodecError, CodecResult, MIN_BUFFER_SIZE, Mode};
use cinder_buffer::ByteBuffer;
use tracing::{debug, trace, warn};

/// Outcome of a single call into an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    /// Input bytes taken by the algorithm
    pub consumed: usize,
    /// Output bytes written by the algorithm
    pub produced: usize,
    /// The algorithm reached the end of its stream
    pub ended: bool,
}

impl Step {
    pub(crate) fn ended() -> Self {
        Self {
            consumed: 0,
            produced: 0,
            ended: true,
        }
    }
}

/// Incremental interface every algorithm variant implements.
///
/// A step feeds as much of `input` as the algorithm accepts and writes as much output as
/// fits in `output`. `finish` asks the algorithm to flush everything and terminate the
/// stream.
pub(crate) trait StreamAlgorithm {
    fn step(&mut self, input: &[u8], output: &mut [u8], finish: bool) -> CodecResult<Step>;
    fn total_in(&self) -> u64;
    fn total_out(&self) -> u64;
}

/// Live algorithm state, one variant per implemented algorithm.
enum InnerCodec {
    Deflate { inner: DeflateState },
}

impl InnerCodec {
    fn new(algorithm: Algorithm, mode: Mode, config: &CodecConfig) -> CodecResult<Self> {
        match algorithm {
            Algorithm::Deflate => Ok(Self::Deflate {
                inner: DeflateState::new(mode, config)?,
            }),
            Algorithm::Lzma2 | Algorithm::Bzip2 => Err(CodecError::Unsupported(algorithm)),
        }
    }

    fn totals(&self) -> (u64, u64) {
        match self {
            Self::Deflate { inner } => (inner.total_in(), inner.total_out()),
        }
    }
}

/// A stateful compressor/decompressor with a fixed-size working buffer.
///
/// The codec moves through a small state machine:
///
/// ```text
/// Uninitialized --init--> Compress | Decompress --consume*--> ... --close--> Uninitialized
/// ```
///
/// [`init`](Self::init) may also be called while initialized to discard the current state and
/// start over in either direction.
///
/// # Working Buffer
///
/// Algorithm output is staged in a working buffer of [`buffer_size`](Self::buffer_size)
/// bytes. Whenever it fills, its content is appended to the caller's output buffer and
/// it is reused, so any input length works with any working buffer size. The size can be
/// changed between streams; changing it between a `consume` sequence and its `close` is
/// not supported.
///
/// # Examples
///
/// ```rust
/// use cinder_buffer::ByteBuffer;
/// use cinder_compress::{Algorithm, CompressionCodec, Mode};
///
/// # fn example() -> cinder_compress::CodecResult<()> {
/// let mut codec = CompressionCodec::new(Algorithm::Deflate)?;
/// codec.init(Mode::Compress)?;
///
/// let mut compressed = Vec::new();
/// let mut out = ByteBuffer::new();
/// codec.consume(b"some level data", &mut out)?;
/// compressed.extend_from_slice(out.as_slice());
/// codec.close(&mut out)?;
/// compressed.extend_from_slice(out.as_slice());
///
/// assert_eq!(codec.mode(), Mode::Uninitialized);
///
/// codec.init(Mode::Decompress)?;
/// codec.consume(&compressed, &mut out)?;
/// assert_eq!(out.as_slice(), b"some level data");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct CompressionCodec {
    algorithm: Algorithm,
    config: CodecConfig,
    mode: Mode,
    inner: Option<InnerCodec>,
    working: ByteBuffer,
}

impl CompressionCodec {
    /// Creates an uninitialized codec for `algorithm` with the default configuration.
    ///
    /// Reserved algorithms are accepted here and rejected by [`init`](Self::init).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Buffer`] if the working buffer cannot be allocated.
    pub fn new(algorithm: Algorithm) -> CodecResult<Self> {
        Self::with_config(algorithm, CodecConfig::default())
    }

    /// Creates an uninitialized codec for `algorithm` with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Buffer`] if the working buffer cannot be allocated.
    pub fn with_config(algorithm: Algorithm, config: CodecConfig) -> CodecResult<Self> {
        let working = ByteBuffer::with_size(config.effective_buffer_size())?;
        Ok(Self {
            algorithm,
            config,
            mode: Mode::Uninitialized,
            inner: None,
            working,
        })
    }

    /// The algorithm this codec runs.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The configuration the next [`init`](Self::init) will use.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Current direction, [`Mode::Uninitialized`] when no state is held.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` while algorithm state is held.
    pub fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    /// Size of the working buffer in bytes.
    pub fn buffer_size(&self) -> usize {
        self.working.len()
    }

    /// Changes the working buffer size.
    ///
    /// Sizes below [`MIN_BUFFER_SIZE`] are ignored. The new size applies from the next
    /// [`consume`](Self::consume) or [`close`](Self::close).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Buffer`] if the working buffer cannot grow. The previous size
    /// is kept.
    pub fn set_buffer_size(&mut self, size: usize) -> CodecResult<()> {
        if size < MIN_BUFFER_SIZE {
            debug!(
                requested = size,
                minimum = MIN_BUFFER_SIZE,
                "Ignoring working buffer size below minimum"
            );
            return Ok(());
        }
        self.working.resize(size)?;
        self.config.buffer_size = size;
        Ok(())
    }

    /// Total input bytes fed since the last [`init`](Self::init), zero when uninitialized.
    pub fn total_in(&self) -> u64 {
        self.inner.as_ref().map_or(0, |inner| inner.totals().0)
    }

    /// Total output bytes produced since the last [`init`](Self::init), zero when
    /// uninitialized.
    pub fn total_out(&self) -> u64 {
        self.inner.as_ref().map_or(0, |inner| inner.totals().1)
    }

    /// Discards any current state and sets up fresh state for `mode`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::Unsupported`] if the algorithm is a reserved slot.
    /// - [`CodecError::InitFailed`] if `mode` is [`Mode::Uninitialized`] or the algorithm
    ///   rejects initialization. The codec is left uninitialized and `init` may be retried.
    pub fn init(&mut self, mode: Mode) -> CodecResult<()> {
        self.teardown();
        let inner = InnerCodec::new(self.algorithm, mode, &self.config)?;
        self.inner = Some(inner);
        self.mode = mode;
        debug!(
            algorithm = %self.algorithm,
            %mode,
            buffer_size = self.buffer_size(),
            "Initialized codec"
        );
        Ok(())
    }

    /// Feeds `input` through the algorithm, replacing the content of `out` with the bytes
    /// produced.
    ///
    /// All of `input` is consumed before returning. Output may lag behind input; whatever
    /// the algorithm holds back is emitted by later calls or by [`close`](Self::close).
    ///
    /// # Errors
    ///
    /// - [`CodecError::NotInitialized`] without a prior successful [`init`](Self::init).
    /// - [`CodecError::Fault`] if the algorithm fails. Output appended before the fault is
    ///   kept in `out`.
    /// - [`CodecError::TrailingInput`] if a decompressed stream ends before `input` does.
    /// - [`CodecError::Buffer`] if `out` cannot grow.
    pub fn consume(&mut self, input: &[u8], out: &mut ByteBuffer) -> CodecResult<()> {
        if self.inner.is_none() {
            return Err(CodecError::NotInitialized);
        }
        out.reset();
        self.drive(input, false, out)
    }

    /// Finishes the stream, replacing the content of `out` with the final bytes, and returns
    /// the codec to [`Mode::Uninitialized`].
    ///
    /// A compressor flushes held-back data and writes the stream trailer. A decompressor
    /// confirms that the end of the compressed stream was reached.
    ///
    /// # Errors
    ///
    /// - [`CodecError::NotInitialized`] without a prior successful [`init`](Self::init).
    /// - [`CodecError::UnexpectedEnd`] if a decompressed stream is incomplete.
    /// - [`CodecError::Fault`] if the algorithm fails.
    ///
    /// After an error the codec state is unreliable; discard it or call
    /// [`init`](Self::init).
    pub fn close(&mut self, out: &mut ByteBuffer) -> CodecResult<()> {
        if self.inner.is_none() {
            return Err(CodecError::NotInitialized);
        }
        out.reset();
        self.drive(&[], true, out)?;
        debug!(
            algorithm = %self.algorithm,
            mode = %self.mode,
            total_in = self.total_in(),
            total_out = self.total_out(),
            "Finished codec stream"
        );
        self.teardown();
        Ok(())
    }

    /// Runs the algorithm against the working buffer until the input is consumed (and, when
    /// finishing, until the algorithm reports the end of its stream).
    fn drive(&mut self, input: &[u8], finish: bool, out: &mut ByteBuffer) -> CodecResult<()> {
        let Self {
            algorithm,
            mode,
            inner,
            working,
            ..
        } = self;
        let pass = Pass {
            algorithm: *algorithm,
            mode: *mode,
            finish,
        };
        match inner.as_mut() {
            Some(InnerCodec::Deflate { inner }) => {
                fill_drain(inner, pass, input, working.as_mut_slice(), out)
            }
            None => Err(CodecError::NotInitialized),
        }
    }

    fn teardown(&mut self) {
        if self.inner.take().is_some() {
            debug!(algorithm = %self.algorithm, mode = %self.mode, "Released codec state");
        }
        self.mode = Mode::Uninitialized;
    }
}

/// Identity of one `consume` or `close` call, used for logging and error reporting.
#[derive(Debug, Clone, Copy)]
struct Pass {
    algorithm: Algorithm,
    mode: Mode,
    finish: bool,
}

/// Fill-drain loop shared by every algorithm variant.
///
/// Every time `scratch` fills, its content is appended to `out` and it is reused. The partial
/// tail is appended once the input is consumed or the algorithm reports the end of its stream.
fn fill_drain<S: StreamAlgorithm>(
    state: &mut S,
    pass: Pass,
    mut input: &[u8],
    scratch: &mut [u8],
    out: &mut ByteBuffer,
) -> CodecResult<()> {
    let Pass {
        algorithm,
        mode,
        finish,
    } = pass;
    let capacity = scratch.len();
    let mut filled = 0;

    loop {
        let step = match state.step(input, &mut scratch[filled..], finish) {
            Ok(step) => step,
            Err(error) => {
                warn!(%algorithm, %mode, %error, "Codec fault");
                return Err(error);
            }
        };
        input = &input[step.consumed..];
        filled += step.produced;

        let full = filled == capacity;
        if full {
            trace!(bytes = filled, "Draining full working buffer");
            out.append(&scratch[..filled])?;
            filled = 0;
        }

        if step.ended {
            break;
        }
        if !full {
            if input.is_empty() && !finish {
                break;
            }
            if step.consumed == 0 && step.produced == 0 {
                if finish && mode == Mode::Decompress {
                    warn!(%algorithm, "Compressed stream is incomplete");
                    return Err(CodecError::UnexpectedEnd);
                }
                warn!(%algorithm, %mode, "Codec stopped making progress");
                return Err(CodecError::Fault {
                    algorithm,
                    reason: "no progress".to_string(),
                });
            }
        }
    }

    if filled > 0 {
        trace!(bytes = filled, "Draining partial working buffer");
        out.append(&scratch[..filled])?;
    }

    if !input.is_empty() {
        warn!(%algorithm, remaining = input.len(), "Input follows end of stream");
        return Err(CodecError::TrailingInput {
            remaining: input.len(),
        });
    }
    Ok(())
}

impl std::fmt::Debug for CompressionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompressionCodec")
            .field("algorithm", &self.algorithm)
            .field("mode", &self.mode)
            .field("buffer_size", &self.buffer_size())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
