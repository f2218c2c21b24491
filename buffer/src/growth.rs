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

/// Computes the capacity a buffer grows to when `requested` bytes are needed.
///
/// The result is the smallest power of two greater than or equal to `requested`.
///
/// # Edge Cases
///
/// - **Zero**: A request for zero bytes yields zero. An empty buffer holds no storage and
///   growing to zero never allocates.
/// - **Overflow**: When no power of two fits in a `usize` (requests above `usize::MAX / 2 + 1`),
///   the request itself is returned unrounded. Allocating that much is expected to fail and
///   surface as [`BufferError::Allocation`](crate::BufferError::Allocation).
///
/// # Examples
///
/// ```rust
/// use cinder_buffer::grow_capacity;
///
/// assert_eq!(grow_capacity(0), 0);
/// assert_eq!(grow_capacity(1), 1);
/// assert_eq!(grow_capacity(5), 8);
/// assert_eq!(grow_capacity(512), 512);
/// assert_eq!(grow_capacity(513), 1024);
/// ```
pub fn grow_capacity(requested: usize) -> usize {
    if requested == 0 {
        return 0;
    }
    requested.checked_next_power_of_two().unwrap_or(requested)
}
