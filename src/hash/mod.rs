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

//! Hash strategies for the membership filter.
//!
//! The filter computes two independent seed hashes per item:
//!
//! - the *primary* hash, derived from the item's natural [`std::hash::Hash`]
//!   stream through a seeded XXH3 hasher, and
//! - the *secondary* hash, produced by a [`SecondaryHash`] strategy: the
//!   built-in Jenkins text hash, the built-in Wang integer mix, or a custom
//!   function supplied at construction.
//!
//! Both hashes must be deterministic and stable across calls for the same
//! item; violating this is a caller contract breach, not a runtime check.

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

use xxhash_rust::xxh3::Xxh3;

mod jenkins;
mod wang;

pub use self::jenkins::jenkins_one_at_a_time;
pub use self::wang::wang_mix32;

/// The seed 9001 used for the primary hash is a prime number that was chosen
/// very early on in experimental testing of this family of sketches.
///
/// Choosing a seed is somewhat arbitrary; what matters is that two filters
/// can only produce identical bit arrays when their seeds are identical, so
/// the seed is fixed at construction and never changes.
pub(crate) const DEFAULT_PRIMARY_SEED: u64 = 9001;

/// Computes the primary hash of an item: its natural `Hash` stream fed
/// through a seeded XXH3-64 hasher.
pub(crate) fn primary_hash<T: Hash + ?Sized>(item: &T, seed: u64) -> u64 {
    let mut hasher = Xxh3::with_seed(seed);
    item.hash(&mut hasher);
    hasher.finish()
}

/// Item types with a built-in secondary hash.
///
/// Text uses [`jenkins_one_at_a_time`]; integers use [`wang_mix32`]. Any
/// other item type must supply a custom [`SecondaryHash`] at construction,
/// or implement this trait itself.
pub trait BuiltinHash {
    /// Returns the built-in secondary hash of this item.
    fn secondary_hash(&self) -> u32;
}

impl BuiltinHash for str {
    fn secondary_hash(&self) -> u32 {
        jenkins_one_at_a_time(self)
    }
}

impl BuiltinHash for String {
    fn secondary_hash(&self) -> u32 {
        jenkins_one_at_a_time(self)
    }
}

impl BuiltinHash for u32 {
    fn secondary_hash(&self) -> u32 {
        wang_mix32(*self)
    }
}

impl BuiltinHash for i32 {
    fn secondary_hash(&self) -> u32 {
        wang_mix32(*self as u32)
    }
}

impl BuiltinHash for u64 {
    fn secondary_hash(&self) -> u32 {
        // Fold the halves before the 32-bit mix.
        wang_mix32((*self ^ (*self >> 32)) as u32)
    }
}

impl BuiltinHash for i64 {
    fn secondary_hash(&self) -> u32 {
        (*self as u64).secondary_hash()
    }
}

/// A secondary hash strategy: a pure function mapping an item to a 32-bit
/// seed, injected into the filter at construction.
///
/// The strategy is the second of the two hashes the filter's double hashing
/// scheme derives its probe positions from. It must be independent of the
/// item's primary hash for the false-positive analysis to hold.
///
/// # Examples
///
/// ```
/// use bloomset::hash::SecondaryHash;
///
/// // Built-in strategy, resolved from the item type.
/// let text = SecondaryHash::<str>::builtin();
///
/// // Custom strategy for a type without a built-in hash.
/// struct DeviceId([u8; 16]);
/// let custom = SecondaryHash::custom(|id: &DeviceId| {
///     u32::from_le_bytes([id.0[0], id.0[1], id.0[2], id.0[3]])
/// });
/// ```
pub struct SecondaryHash<T: ?Sized> {
    func: Arc<dyn Fn(&T) -> u32 + Send + Sync>,
}

impl<T: BuiltinHash + ?Sized + 'static> SecondaryHash<T> {
    /// Returns the built-in strategy for the item type.
    pub fn builtin() -> Self {
        SecondaryHash {
            func: Arc::new(T::secondary_hash),
        }
    }
}

impl<T: ?Sized> SecondaryHash<T> {
    /// Wraps a caller-supplied hash function.
    ///
    /// Required when the item type is neither text nor an integer (and does
    /// not implement [`BuiltinHash`] itself).
    pub fn custom<F>(func: F) -> Self
    where
        F: Fn(&T) -> u32 + Send + Sync + 'static,
    {
        SecondaryHash {
            func: Arc::new(func),
        }
    }

    /// Applies the strategy to an item.
    pub(crate) fn hash_item(&self, item: &T) -> u32 {
        (self.func)(item)
    }
}

impl<T: ?Sized> Clone for SecondaryHash<T> {
    fn clone(&self) -> Self {
        SecondaryHash {
            func: Arc::clone(&self.func),
        }
    }
}

impl<T: ?Sized> fmt::Debug for SecondaryHash<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecondaryHash").finish_non_exhaustive()
    }
}
