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

//! DEFLATE algorithm state backed by `flate2`'s raw stream API.

use crate::codec::{Step, StreamAlgorithm};
use crate::{Algorithm, CodecConfig, CodecError, CodecResult, Mode};
use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

pub(crate) enum DeflateState {
    Compress { inner: Compress, finished: bool },
    Decompress { inner: Decompress, finished: bool },
}

impl DeflateState {
    pub(crate) fn new(mode: Mode, config: &CodecConfig) -> CodecResult<Self> {
        match mode {
            Mode::Compress => Ok(Self::Compress {
                inner: Compress::new(
                    Compression::new(config.effective_level()),
                    config.zlib_header,
                ),
                finished: false,
            }),
            Mode::Decompress => Ok(Self::Decompress {
                inner: Decompress::new(config.zlib_header),
                finished: false,
            }),
            Mode::Uninitialized => Err(CodecError::InitFailed {
                algorithm: Algorithm::Deflate,
                mode,
                reason: "a direction is required".to_string(),
            }),
        }
    }
}

impl StreamAlgorithm for DeflateState {
    fn step(&mut self, input: &[u8], output: &mut [u8], finish: bool) -> CodecResult<Step> {
        match self {
            Self::Compress { inner, finished } => {
                if *finished {
                    return Ok(Step::ended());
                }
                let (before_in, before_out) = (inner.total_in(), inner.total_out());
                let flush = if finish {
                    FlushCompress::Finish
                } else {
                    FlushCompress::None
                };
                let status = inner.compress(input, output, flush).map_err(fault)?;
                *finished = status == Status::StreamEnd;
                Ok(Step {
                    consumed: (inner.total_in() - before_in) as usize,
                    produced: (inner.total_out() - before_out) as usize,
                    ended: *finished,
                })
            }
            // Decompression is never driven with `Finish`; the end marker in the stream is
            // what ends it.
            Self::Decompress { inner, finished } => {
                if *finished {
                    return Ok(Step::ended());
                }
                let (before_in, before_out) = (inner.total_in(), inner.total_out());
                let status = inner
                    .decompress(input, output, FlushDecompress::None)
                    .map_err(fault)?;
                *finished = status == Status::StreamEnd;
                Ok(Step {
                    consumed: (inner.total_in() - before_in) as usize,
                    produced: (inner.total_out() - before_out) as usize,
                    ended: *finished,
                })
            }
        }
    }

    fn total_in(&self) -> u64 {
        match self {
            Self::Compress { inner, .. } => inner.total_in(),
            Self::Decompress { inner, .. } => inner.total_in(),
        }
    }

    fn total_out(&self) -> u64 {
        match self {
            Self::Compress { inner, .. } => inner.total_out(),
            Self::Decompress { inner, .. } => inner.total_out(),
        }
    }
}

fn fault(error: impl std::fmt::Display) -> CodecError {
    CodecError::Fault {
        algorithm: Algorithm::Deflate,
        reason: error.to_string(),
    }
}
