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

//! # Bloomset
//!
//! A probabilistic set-membership filter for Rust.
//!
//! Bloomset provides a single data structure, the [`bloom::BloomFilter`]: a
//! compact bit array that answers "definitely absent" or "possibly present"
//! for arbitrary items, trading a tunable false-positive rate for large
//! constant-factor space savings over an exact set.
//!
//! The filter derives its `k` probe positions from only two hash
//! computations per item (double hashing), so both insertion and lookup run
//! in `O(k)` regardless of filter size or item count.
//!
//! ```rust
//! use bloomset::bloom::BloomFilterBuilder;
//!
//! let mut filter = BloomFilterBuilder::with_accuracy(1000, 0.01)
//!     .build()
//!     .unwrap();
//!
//! filter.add("alpha");
//! assert!(filter.contains("alpha"));
//! assert!(!filter.contains("omega"));
//! ```

#![deny(missing_docs)]

pub mod bloom;
pub mod error;
pub mod hash;
