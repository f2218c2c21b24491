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

//! Property tests for buffer growth and cursor behavior

use cinder_buffer::{ByteBuffer, SeekOrigin};
use proptest::prelude::*;

// ============================================================================
// Helper Types
// ============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Write(Vec<u8>),
    Resize(usize),
    Reserve(usize),
    Append(Vec<u8>),
    Seek(i64, SeekOrigin),
}

fn origin_strategy() -> impl Strategy<Value = SeekOrigin> {
    prop_oneof![
        Just(SeekOrigin::Begin),
        Just(SeekOrigin::Current),
        Just(SeekOrigin::End),
    ]
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..200).prop_map(Operation::Write),
        (0usize..2048).prop_map(Operation::Resize),
        (0usize..4096).prop_map(Operation::Reserve),
        prop::collection::vec(any::<u8>(), 1..200).prop_map(Operation::Append),
        (-300i64..300, origin_strategy()).prop_map(|(o, r)| Operation::Seek(o, r)),
    ]
}

/// A plain `Vec<u8>` model of the buffer. Bytes exposed by growth are unspecified, so the
/// model tracks which bytes are known.
#[derive(Debug, Default)]
struct Model {
    bytes: Vec<Option<u8>>,
    cursor: usize,
}

impl Model {
    fn apply(&mut self, operation: &Operation) {
        match operation {
            Operation::Write(data) => {
                let end = self.cursor + data.len();
                if end > self.bytes.len() {
                    self.bytes.resize(end, None);
                }
                for (i, byte) in data.iter().enumerate() {
                    self.bytes[self.cursor + i] = Some(*byte);
                }
                self.cursor = end;
            }
            Operation::Resize(size) => {
                self.bytes.resize(*size, None);
                self.cursor = self.cursor.min(*size);
            }
            Operation::Reserve(_) => {}
            Operation::Append(data) => {
                self.bytes.extend(data.iter().copied().map(Some));
            }
            Operation::Seek(offset, origin) => {
                let base = match origin {
                    SeekOrigin::Begin => 0,
                    SeekOrigin::Current => self.cursor as i64,
                    SeekOrigin::End => self.bytes.len() as i64,
                };
                let target = base + offset;
                if target >= 0 && target as usize <= self.bytes.len() {
                    self.cursor = target as usize;
                }
            }
        }
    }
}

fn apply(buffer: &mut ByteBuffer, operation: &Operation) {
    match operation {
        Operation::Write(data) => {
            buffer.write(data).unwrap();
        }
        Operation::Resize(size) => buffer.resize(*size).unwrap(),
        Operation::Reserve(capacity) => buffer.reserve(*capacity).unwrap(),
        Operation::Append(data) => buffer.append(data).unwrap(),
        Operation::Seek(offset, origin) => {
            let _ = buffer.seek(*offset, *origin);
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn growth_preserves_written_bytes(operations in prop::collection::vec(operation_strategy(), 1..40)) {
        let mut buffer = ByteBuffer::new();
        let mut model = Model::default();

        for operation in &operations {
            apply(&mut buffer, operation);
            model.apply(operation);

            prop_assert_eq!(buffer.len(), model.bytes.len());
            prop_assert_eq!(buffer.position(), model.cursor);
            prop_assert!(buffer.capacity() >= buffer.len());
            for (index, expected) in model.bytes.iter().enumerate() {
                if let Some(expected) = expected {
                    prop_assert_eq!(buffer.as_slice()[index], *expected);
                }
            }
        }
    }

    #[test]
    fn capacity_never_shrinks(sizes in prop::collection::vec(0usize..5000, 1..30)) {
        let mut buffer = ByteBuffer::new();
        let mut last = 0;
        for size in sizes {
            buffer.resize(size).unwrap();
            prop_assert!(buffer.capacity() >= last);
            last = buffer.capacity();
        }
    }

    #[test]
    fn grown_capacity_is_power_of_two(initial in 1usize..64, request in 65usize..100_000) {
        let mut buffer = ByteBuffer::with_size(initial).unwrap();
        buffer.reserve(request).unwrap();
        prop_assert!(buffer.capacity().is_power_of_two());
        prop_assert!(buffer.capacity() >= request);
        prop_assert!(buffer.capacity() / 2 < request);
    }

    #[test]
    fn read_returns_what_was_written(data in prop::collection::vec(any::<u8>(), 1..1000), chunk in 1usize..64) {
        let mut buffer = ByteBuffer::new();
        for piece in data.chunks(chunk) {
            buffer.write(piece).unwrap();
        }
        buffer.seek(0, SeekOrigin::Begin).unwrap();

        let mut out = Vec::new();
        let mut scratch = vec![0u8; chunk];
        loop {
            let count = buffer.read(&mut scratch);
            out.extend_from_slice(&scratch[..count]);
            if count < chunk {
                break;
            }
        }
        prop_assert_eq!(out, data);
        prop_assert!(buffer.is_at_end());
    }

    #[test]
    fn failed_seek_leaves_cursor(len in 0usize..100, position in 0usize..100, offset in 1i64..1000) {
        let position = position.min(len);
        let mut buffer = ByteBuffer::with_size(len).unwrap();
        buffer.seek(position as i64, SeekOrigin::Begin).unwrap();

        prop_assert!(buffer.seek(offset, SeekOrigin::End).is_err());
        prop_assert!(buffer.seek(len as i64 + offset, SeekOrigin::Begin).is_err());
        prop_assert!(buffer.seek(-offset, SeekOrigin::Begin).is_err());
        prop_assert_eq!(buffer.position(), position);
    }
}
