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

//! Stream façade tests for cinder-compress
//!
//! These tests cover direction selection, finalization, shared handles and recovery after
//! failures.

use cinder_buffer::ByteBuffer;
use cinder_compress::{
    Algorithm, CodecConfig, CodecError, CompressionStream, Mode, SharedCompressionStream,
};
use std::rc::Rc;

fn collect_compress(stream: &mut CompressionStream, chunks: &[&[u8]]) -> Vec<u8> {
    let mut compressed = Vec::new();
    let mut out = ByteBuffer::new();
    for chunk in chunks {
        stream.compress(chunk, &mut out).unwrap();
        compressed.extend_from_slice(out.as_slice());
    }
    stream.finish(&mut out).unwrap();
    compressed.extend_from_slice(out.as_slice());
    compressed
}

// ============================================================================
// Finalization Tests
// ============================================================================

#[test]
fn test_empty_finalize_is_decompressible() {
    let mut stream = CompressionStream::new(Algorithm::Deflate).unwrap();
    let mut out = ByteBuffer::new();

    stream.init(Mode::Compress).unwrap();
    stream.finish(&mut out).unwrap();
    let compressed = out.as_slice().to_vec();
    assert!(!compressed.is_empty());

    let mut other = CompressionStream::new(Algorithm::Deflate).unwrap();
    let restored = other.decompress_all(&compressed).unwrap();
    assert!(restored.is_empty());
}

#[test]
fn test_empty_compress_call_then_finalize() {
    let mut stream = CompressionStream::new(Algorithm::Deflate).unwrap();
    let compressed = collect_compress(&mut stream, &[b""]);
    assert!(stream.decompress_all(&compressed).unwrap().is_empty());
}

#[test]
fn test_stream_is_reusable_after_finish() {
    let mut stream = CompressionStream::new(Algorithm::Deflate).unwrap();
    let first = collect_compress(&mut stream, &[b"first stream"]);
    assert_eq!(stream.mode(), Mode::Uninitialized);
    let second = collect_compress(&mut stream, &[b"second ", b"stream"]);

    assert_eq!(
        stream.decompress_all(&first).unwrap().as_slice(),
        b"first stream"
    );
    assert_eq!(
        stream.decompress_all(&second).unwrap().as_slice(),
        b"second stream"
    );
}

#[test]
fn test_finish_before_use_is_not_initialized() {
    let mut stream = CompressionStream::new(Algorithm::Deflate).unwrap();
    let mut out = ByteBuffer::new();
    assert_eq!(stream.finish(&mut out), Err(CodecError::NotInitialized));
}

// ============================================================================
// Direction Tests
// ============================================================================

#[test]
fn test_streaming_decompress_in_small_pieces() {
    let data = b"pieces of a compressed stream arrive one byte at a time".repeat(4);
    let mut stream = CompressionStream::new(Algorithm::Deflate).unwrap();
    let compressed = stream.compress_all(&data).unwrap();

    let mut restored = Vec::new();
    let mut out = ByteBuffer::new();
    for byte in compressed.as_slice().chunks(1) {
        stream.decompress(byte, &mut out).unwrap();
        assert_eq!(stream.mode(), Mode::Decompress);
        restored.extend_from_slice(out.as_slice());
    }
    stream.finish(&mut out).unwrap();
    restored.extend_from_slice(out.as_slice());
    assert_eq!(restored, data);
}

#[test]
fn test_switching_direction_discards_open_stream() {
    let mut stream = CompressionStream::new(Algorithm::Deflate).unwrap();
    let mut out = ByteBuffer::new();
    stream.compress(b"never finished", &mut out).unwrap();

    let compressed = {
        let mut other = CompressionStream::new(Algorithm::Deflate).unwrap();
        other.compress_all(b"finished elsewhere").unwrap()
    };
    let mut restored = Vec::new();
    stream.decompress(compressed.as_slice(), &mut out).unwrap();
    restored.extend_from_slice(out.as_slice());
    stream.finish(&mut out).unwrap();
    restored.extend_from_slice(out.as_slice());
    assert_eq!(restored, b"finished elsewhere");
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_truncated_input_is_reported_on_finish() {
    let mut stream = CompressionStream::new(Algorithm::Deflate).unwrap();
    let compressed = stream.compress_all(&[42u8; 4096]).unwrap();
    let truncated = &compressed.as_slice()[..compressed.len() / 2];

    assert_eq!(
        stream.decompress_all(truncated),
        Err(CodecError::UnexpectedEnd)
    );
}

#[test]
fn test_recovers_after_fault_with_init() {
    let mut stream = CompressionStream::new(Algorithm::Deflate).unwrap();
    let mut out = ByteBuffer::new();
    let result = stream.decompress(&[0x78, 0x9C, 0xFF, 0xFF, 0xFF, 0xFF], &mut out);
    assert!(matches!(
        result,
        Err(CodecError::Fault {
            algorithm: Algorithm::Deflate,
            ..
        })
    ));

    stream.init(Mode::Compress).unwrap();
    let compressed = collect_compress(&mut stream, &[b"recovered"]);
    assert_eq!(
        stream.decompress_all(&compressed).unwrap().as_slice(),
        b"recovered"
    );
}

#[test]
fn test_mismatched_container_setting_fails() {
    let mut zlib = CompressionStream::new(Algorithm::Deflate).unwrap();
    let compressed = zlib.compress_all(b"wrapped in zlib").unwrap();

    let config = CodecConfig::default().with_zlib_header(false);
    let mut raw = CompressionStream::with_config(Algorithm::Deflate, config).unwrap();
    assert!(raw.decompress_all(compressed.as_slice()).is_err());
}

#[test]
fn test_reserved_algorithms_report_unsupported() {
    for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_implemented()) {
        let mut stream = CompressionStream::new(algorithm).unwrap();
        let mut out = ByteBuffer::new();
        assert_eq!(
            stream.compress(b"data", &mut out),
            Err(CodecError::Unsupported(algorithm))
        );
        assert_eq!(
            stream.decompress(b"data", &mut out),
            Err(CodecError::Unsupported(algorithm))
        );
        assert!(!stream.is_initialized());
    }
}

// ============================================================================
// Shared Handle Tests
// ============================================================================

fn feed(handle: &SharedCompressionStream, chunk: &[u8], sink: &mut Vec<u8>) {
    let mut out = ByteBuffer::new();
    handle.borrow_mut().compress(chunk, &mut out).unwrap();
    sink.extend_from_slice(out.as_slice());
}

#[test]
fn test_shared_stream_across_holders() {
    let shared = CompressionStream::new(Algorithm::Deflate)
        .unwrap()
        .into_shared();
    let holders: Vec<SharedCompressionStream> = (0..3).map(|_| Rc::clone(&shared)).collect();
    assert_eq!(Rc::strong_count(&shared), 4);

    let mut compressed = Vec::new();
    for (index, holder) in holders.iter().enumerate() {
        feed(holder, format!("part {index};").as_bytes(), &mut compressed);
    }
    let mut out = ByteBuffer::new();
    holders[0].borrow_mut().finish(&mut out).unwrap();
    compressed.extend_from_slice(out.as_slice());
    drop(holders);

    assert_eq!(Rc::strong_count(&shared), 1);
    let restored = shared.borrow_mut().decompress_all(&compressed).unwrap();
    assert_eq!(restored.as_slice(), b"part 0;part 1;part 2;");
}

#[test]
fn test_shared_buffer_size_is_visible_to_all_holders() {
    let shared = CompressionStream::new(Algorithm::Deflate)
        .unwrap()
        .into_shared();
    let other = Rc::clone(&shared);

    other.borrow_mut().set_buffer_size(16).unwrap();
    assert_eq!(shared.borrow().buffer_size(), 512);

    other.borrow_mut().set_buffer_size(2048).unwrap();
    assert_eq!(shared.borrow().buffer_size(), 2048);
    assert_eq!(shared.borrow().codec().config().buffer_size, 2048);
}
