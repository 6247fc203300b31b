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

use std::fmt;
use std::hash::Hash;

use crate::hash::primary_hash;
use crate::hash::SecondaryHash;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (added items always return `true`)
/// - Tunable false positive rate
/// - Constant space usage
///
/// The filter is parameterized by its item type `T` and carries the
/// secondary hash strategy injected at construction. Use
/// [`super::BloomFilterBuilder`] to construct instances.
pub struct BloomFilter<T: ?Sized> {
    /// Seed of the primary hash
    pub(super) seed: u64,
    /// Number of hash probes per operation (k)
    pub(super) num_hashes: u32,
    /// Number of addressable bits in the filter (m)
    pub(super) num_bits: u64,
    /// Count of bits set to 1 (for statistics)
    pub(super) num_bits_set: u64,
    /// Bit array packed into u64 words
    /// Length = ceil(num_bits / 64)
    pub(super) bit_array: Box<[u64]>,
    /// Secondary hash strategy
    pub(super) secondary: SecondaryHash<T>,
}

impl<T: Hash + ?Sized> BloomFilter<T> {
    /// Adds an item to the filter. It cannot be removed.
    ///
    /// After adding, `contains(item)` will always return `true`. Adding the
    /// same item twice has no additional observable effect.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)
    ///     .build()
    ///     .unwrap();
    ///
    /// filter.add("apple");
    /// assert!(filter.contains("apple"));
    /// ```
    pub fn add(&mut self, item: &T) {
        let (h0, h1) = self.seed_hashes(item);
        self.set_bits(h0, h1);
    }

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Item was **possibly** added (or false positive)
    /// - `false`: Item was **definitely not** added
    ///
    /// Read-only; short-circuits on the first unset probe.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)
    ///     .build()
    ///     .unwrap();
    /// filter.add("apple");
    ///
    /// assert!(filter.contains("apple")); // true - was added
    /// assert!(!filter.contains("grape")); // false - never added
    /// ```
    pub fn contains(&self, item: &T) -> bool {
        if self.is_empty() {
            return false;
        }

        let (h0, h1) = self.seed_hashes(item);
        self.check_bits(h0, h1)
    }

    /// Tests and adds an item in a single operation.
    ///
    /// Returns whether the item was possibly already in the set before the
    /// add. This is more efficient than calling `contains()` then `add()`
    /// separately because the hashes are computed once.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(!filter.contains_and_add(&7_u64)); // first add
    /// assert!(filter.contains_and_add(&7_u64)); // now present
    /// ```
    pub fn contains_and_add(&mut self, item: &T) -> bool {
        let (h0, h1) = self.seed_hashes(item);
        let was_present = self.check_bits(h0, h1);
        self.set_bits(h0, h1);
        was_present
    }

    /// Computes the two seed hashes of an item.
    ///
    /// The primary hash is the item's natural `Hash` stream through a seeded
    /// XXH3-64; the secondary hash is the injected strategy, widened to u64.
    fn seed_hashes(&self, item: &T) -> (u64, u64) {
        let h0 = primary_hash(item, self.seed);
        let h1 = u64::from(self.secondary.hash_item(item));
        (h0, h1)
    }
}

impl<T: ?Sized> BloomFilter<T> {
    /// Returns whether the filter is empty (no items added).
    pub fn is_empty(&self) -> bool {
        self.num_bits_set == 0
    }

    /// Returns the number of bits set to 1.
    ///
    /// Useful for monitoring filter saturation.
    pub fn bits_used(&self) -> u64 {
        self.num_bits_set
    }

    /// Returns the total number of addressable bits in the filter (m).
    pub fn capacity(&self) -> u64 {
        self.num_bits
    }

    /// Returns the number of hash probes per operation (k).
    pub fn num_hashes(&self) -> u32 {
        self.num_hashes
    }

    /// Returns the primary hash seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the current load factor (fraction of bits set).
    ///
    /// Values near 0.5 indicate the filter is approaching saturation.
    /// Values above 0.5 indicate degraded false positive rates.
    pub fn load_factor(&self) -> f64 {
        self.num_bits_set as f64 / self.num_bits as f64
    }

    /// Estimates the current false positive probability.
    ///
    /// Uses the approximation `load_factor^k`, which assumes uniform bit
    /// distribution.
    pub fn estimated_fpp(&self) -> f64 {
        let k = f64::from(self.num_hashes);
        self.load_factor().powf(k)
    }

    /// Checks if all k bits are set for the given hash values.
    fn check_bits(&self, h0: u64, h1: u64) -> bool {
        for i in 0..self.num_hashes {
            let bit_index = self.probe_index(h0, h1, i);
            if !self.get_bit(bit_index) {
                return false;
            }
        }
        true
    }

    /// Sets all k bits for the given hash values.
    fn set_bits(&mut self, h0: u64, h1: u64) {
        for i in 0..self.num_hashes {
            let bit_index = self.probe_index(h0, h1, i);
            self.set_bit(bit_index);
        }
    }

    /// Computes the i-th probe position using double hashing
    /// (Dillinger-Manolios).
    ///
    /// Formula:
    /// ```text
    /// index_i = (h0 + i * h1) mod m
    /// ```
    ///
    /// Arithmetic wraps in u64, which subsumes the signed-overflow-and-abs
    /// dance of two's-complement formulations. A degenerate secondary hash
    /// of 0 collapses all probes onto `h0 mod m`; that weakens the
    /// false-positive bound for such items but never their membership.
    fn probe_index(&self, h0: u64, h1: u64, i: u32) -> u64 {
        h0.wrapping_add(u64::from(i).wrapping_mul(h1)) % self.num_bits
    }

    /// Gets the value of a single bit.
    fn get_bit(&self, bit_index: u64) -> bool {
        let word_index = (bit_index >> 6) as usize; // bit_index / 64
        let mask = 1u64 << (bit_index & 63); // bit_index % 64
        (self.bit_array[word_index] & mask) != 0
    }

    /// Sets a single bit and updates the count if it wasn't already set.
    fn set_bit(&mut self, bit_index: u64) {
        let word_index = (bit_index >> 6) as usize; // bit_index / 64
        let mask = 1u64 << (bit_index & 63); // bit_index % 64

        if (self.bit_array[word_index] & mask) == 0 {
            self.bit_array[word_index] |= mask;
            self.num_bits_set += 1;
        }
    }
}

impl<T: ?Sized> Clone for BloomFilter<T> {
    fn clone(&self) -> Self {
        BloomFilter {
            seed: self.seed,
            num_hashes: self.num_hashes,
            num_bits: self.num_bits,
            num_bits_set: self.num_bits_set,
            bit_array: self.bit_array.clone(),
            secondary: self.secondary.clone(),
        }
    }
}

/// Equality compares the configuration and the bit array. The secondary
/// strategy is a function value and is not comparable; two filters are
/// assumed to share a strategy when their configurations and contents agree.
impl<T: ?Sized> PartialEq for BloomFilter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seed == other.seed
            && self.num_hashes == other.num_hashes
            && self.num_bits == other.num_bits
            && self.bit_array == other.bit_array
    }
}

impl<T: ?Sized> fmt::Debug for BloomFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("seed", &self.seed)
            .field("num_hashes", &self.num_hashes)
            .field("num_bits", &self.num_bits)
            .field("num_bits_set", &self.num_bits_set)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::bloom::BloomFilterBuilder;

    #[test]
    fn test_probe_indices_stay_in_range() {
        // m deliberately not a multiple of the word size.
        let mut filter = BloomFilterBuilder::with_size(100, 3).build().unwrap();
        for i in 0..1000u64 {
            filter.add(&i);
        }
        // Two words allocated, bits 100..127 of the second word never set.
        assert!(filter.bits_used() <= 100);
    }

    #[test]
    fn test_set_bit_counts_once() {
        let mut filter = BloomFilterBuilder::with_size(64, 1).build().unwrap();
        filter.add("x");
        let used = filter.bits_used();
        filter.add("x");
        assert_eq!(filter.bits_used(), used);
    }

    #[test]
    fn test_equality_tracks_contents() {
        let mut a = BloomFilterBuilder::with_size(256, 4).build().unwrap();
        let mut b = BloomFilterBuilder::with_size(256, 4).build().unwrap();
        a.add("apple");
        b.add("apple");
        assert_eq!(a, b);

        b.add("banana");
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_preserves_contents() {
        let mut filter = BloomFilterBuilder::with_size(512, 3).build().unwrap();
        filter.add("apple");
        let copy = filter.clone();
        assert_eq!(filter, copy);
        assert!(copy.contains("apple"));
    }
}
