// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Bloom filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to
//! test whether an element is a member of a set. False positive matches are
//! possible, but false negatives are not: a query returns either "possibly
//! in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: once an item is added, `contains()` returns
//!   `true` for it, unconditionally and forever
//! - **Possible false positives**: `contains()` may return `true` for items
//!   never added; the rate is a function of the filter's size, its hash
//!   count, and how many items have been added
//! - **Fixed size**: the bit count and hash count are immutable after
//!   construction; the filter never resizes
//! - **Monotonic bits**: bits only transition from unset to set; items
//!   cannot be removed
//!
//! # Usage
//!
//! ```rust
//! use bloomset::bloom::BloomFilterBuilder;
//!
//! // Create a filter optimized for 1000 items with 1% false positive rate
//! let mut filter = BloomFilterBuilder::with_accuracy(1000, 0.01)
//!     .build()
//!     .unwrap();
//!
//! // Add items
//! filter.add("apple");
//! filter.add("banana");
//!
//! // Check membership
//! assert!(filter.contains("apple")); // true - definitely added
//! assert!(!filter.contains("grape")); // false - never added (probably)
//!
//! // Get statistics
//! println!("Capacity: {} bits", filter.capacity());
//! println!("Bits used: {}", filter.bits_used());
//! println!("Est. FPP: {:.4}%", filter.estimated_fpp() * 100.0);
//! ```
//!
//! # Item types and hash strategies
//!
//! The filter is parameterized by its item type. Text and integer items come
//! with built-in secondary hash strategies (Jenkins one-at-a-time and Thomas
//! Wang's 32-bit mix); any other type must supply a custom strategy at
//! construction:
//!
//! ```rust
//! use bloomset::bloom::BloomFilterBuilder;
//! use bloomset::hash::SecondaryHash;
//!
//! #[derive(Hash)]
//! struct DeviceId([u8; 16]);
//!
//! let strategy = SecondaryHash::custom(|id: &DeviceId| {
//!     u32::from_le_bytes([id.0[0], id.0[1], id.0[2], id.0[3]])
//! });
//! let mut filter = BloomFilterBuilder::with_size(4096, 4)
//!     .build_with_strategy(strategy)
//!     .unwrap();
//!
//! filter.add(&DeviceId([7; 16]));
//! assert!(filter.contains(&DeviceId([7; 16])));
//! ```
//!
//! # Concurrency
//!
//! The filter is a plain in-memory structure with no interior mutability.
//! Share it behind a lock when mutated from several threads: a lost update
//! on a racing `add` can drop one of the item's bits and break the
//! no-false-negative guarantee for that item. Concurrent `contains` calls
//! are freely shareable (`&self`), but must not be assumed consistent with
//! an in-flight `add` of the same item.
//!
//! # Implementation details
//!
//! - Primary hash: seeded XXH3-64 over the item's `std::hash::Hash` stream
//! - Secondary hash: injectable strategy (Jenkins / Wang built-ins)
//! - Double hashing (Dillinger-Manolios) derives all `k` probe positions
//!   from the two hashes, so each operation costs two hash computations
//!   regardless of `k`
//! - Bits packed in `u64` words; exactly `m` bits are addressable
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with
//!   allowable errors"
//! - Dillinger and Manolios (2004). "Bloom Filters in Probabilistic
//!   Verification"

mod builder;
mod filter;

pub use self::builder::BloomFilterBuilder;
pub use self::filter::BloomFilter;
