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
use std::marker::PhantomData;

use super::BloomFilter;
use crate::error::Error;
use crate::hash::BuiltinHash;
use crate::hash::SecondaryHash;
use crate::hash::DEFAULT_PRIMARY_SEED;

/// Minimum number of bits a filter can be built with.
pub const MIN_NUM_BITS: u64 = 1;
/// Minimum number of hash probes per operation.
pub const MIN_NUM_HASHES: u32 = 1;

/// Builder for creating [`BloomFilter`] instances.
///
/// Provides two construction modes:
/// - [`with_accuracy()`](Self::with_accuracy): Specify target items and false
///   positive rate (recommended)
/// - [`with_size()`](Self::with_size): Specify bit count and hash functions
///   (manual)
///
/// Sizing math lives entirely in the builder; the filter itself allocates
/// exactly the requested number of bits and performs no sizing of its own.
pub struct BloomFilterBuilder<T: ?Sized> {
    num_bits: u64,
    num_hashes: u32,
    seed: u64,
    _item: PhantomData<fn(&T) -> u32>,
}

impl<T: ?Sized> BloomFilterBuilder<T> {
    /// Creates a builder with optimal parameters for a target accuracy.
    ///
    /// Automatically calculates the optimal number of bits and hash
    /// functions to achieve the desired false positive probability for a
    /// given number of items.
    ///
    /// # Arguments
    ///
    /// - `max_items`: Maximum expected number of distinct items
    /// - `fpp`: Target false positive probability (e.g., 0.01 for 1%)
    ///
    /// # Panics
    ///
    /// Panics if `max_items` is 0 or `fpp` is not in (0.0, 1.0].
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// // Optimal for 10,000 items with 1% FPP
    /// let filter = BloomFilterBuilder::<str>::with_accuracy(10_000, 0.01)
    ///     .seed(42)
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn with_accuracy(max_items: u64, fpp: f64) -> Self {
        assert!(max_items > 0, "max_items must be greater than 0");
        assert!(
            fpp > 0.0 && fpp <= 1.0,
            "fpp must be between 0.0 and 1.0 (inclusive of 1.0)"
        );

        let num_bits = Self::suggest_num_bits(max_items, fpp);
        let num_hashes = Self::suggest_num_hashes_from_accuracy(max_items, num_bits);

        BloomFilterBuilder {
            num_bits,
            num_hashes,
            seed: DEFAULT_PRIMARY_SEED,
            _item: PhantomData,
        }
    }

    /// Creates a builder with manual size specification.
    ///
    /// Use this when you want precise control over the filter size, or when
    /// working with pre-calculated parameters. The filter addresses exactly
    /// `num_bits` bits; its word-packed storage rounds the allocation (not
    /// the addressable range) up to a multiple of 64 bits.
    ///
    /// Values are validated when the filter is built: `num_bits` below
    /// [`MIN_NUM_BITS`] or `num_hashes` below [`MIN_NUM_HASHES`] make
    /// [`build()`](Self::build) fail with a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::<str>::with_size(10_000, 7)
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn with_size(num_bits: u64, num_hashes: u32) -> Self {
        BloomFilterBuilder {
            num_bits,
            num_hashes,
            seed: DEFAULT_PRIMARY_SEED,
            _item: PhantomData,
        }
    }

    /// Sets a custom primary hash seed (default: 9001).
    ///
    /// Two filters only produce identical bit arrays for the same adds when
    /// their seeds (and strategies) are identical.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::<str>::with_accuracy(100, 0.01)
    ///     .seed(12345)
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the filter with the built-in secondary hash strategy for the
    /// item type.
    ///
    /// Item types without a built-in strategy (anything that is not text or
    /// an integer) do not satisfy the [`BuiltinHash`] bound; constructing a
    /// filter for them requires
    /// [`build_with_strategy()`](Self::build_with_strategy). The missing
    /// strategy is rejected before the filter exists:
    ///
    /// ```compile_fail
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// struct Opaque(u8);
    /// // No built-in strategy and none supplied: refuses to build.
    /// let filter = BloomFilterBuilder::<Opaque>::with_size(64, 2).build();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `num_bits` or `num_hashes` is below
    /// its minimum.
    pub fn build(self) -> Result<BloomFilter<T>, Error>
    where
        T: BuiltinHash + 'static,
    {
        self.build_with_strategy(SecondaryHash::builtin())
    }

    /// Builds the filter with a caller-supplied secondary hash strategy.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `num_bits` or `num_hashes` is below
    /// its minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// # use bloomset::hash::SecondaryHash;
    /// #[derive(Hash)]
    /// struct Claim(u128);
    ///
    /// let filter = BloomFilterBuilder::with_size(1 << 20, 5)
    ///     .build_with_strategy(SecondaryHash::custom(|c: &Claim| c.0 as u32))
    ///     .unwrap();
    /// # let _ = filter.capacity();
    /// ```
    pub fn build_with_strategy(self, strategy: SecondaryHash<T>) -> Result<BloomFilter<T>, Error> {
        if self.num_bits < MIN_NUM_BITS {
            return Err(Error::configuration(format!(
                "num_bits must be at least {MIN_NUM_BITS}"
            ))
            .with_context("num_bits", self.num_bits));
        }
        if self.num_hashes < MIN_NUM_HASHES {
            return Err(Error::configuration(format!(
                "num_hashes must be at least {MIN_NUM_HASHES}"
            ))
            .with_context("num_hashes", self.num_hashes));
        }

        let num_words = self.num_bits.div_ceil(64) as usize;
        let bit_array = vec![0u64; num_words].into_boxed_slice();

        Ok(BloomFilter {
            seed: self.seed,
            num_hashes: self.num_hashes,
            num_bits: self.num_bits,
            num_bits_set: 0,
            bit_array,
            secondary: strategy,
        })
    }

    /// Suggests optimal number of bits given max items and target FPP.
    ///
    /// Formula: `m = -n * ln(p) / (ln(2)^2)`
    /// where n = max_items, p = fpp
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let bits = BloomFilterBuilder::<str>::suggest_num_bits(1000, 0.01);
    /// assert!(bits > 9000 && bits < 10000); // ~9586 bits
    /// ```
    pub fn suggest_num_bits(max_items: u64, fpp: f64) -> u64 {
        let n = max_items as f64;
        let p = fpp;
        let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;

        let bits = (-n * p.ln() / ln2_squared).ceil() as u64;

        bits.max(MIN_NUM_BITS)
    }

    /// Suggests optimal number of hash functions given max items and bit
    /// count.
    ///
    /// Formula: `k = (m/n) * ln(2)`
    /// where m = num_bits, n = max_items
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let hashes = BloomFilterBuilder::<str>::suggest_num_hashes_from_accuracy(1000, 10000);
    /// assert_eq!(hashes, 7); // Optimal k ≈ 6.93
    /// ```
    pub fn suggest_num_hashes_from_accuracy(max_items: u64, num_bits: u64) -> u32 {
        let m = num_bits as f64;
        let n = max_items as f64;

        // Ceil to avoid selecting too few hashes.
        let k = (m / n * std::f64::consts::LN_2).ceil() as u32;
        k.max(MIN_NUM_HASHES)
    }

    /// Suggests optimal number of hash functions from target FPP.
    ///
    /// Formula: `k = -log2(p)`
    /// where p = fpp
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let hashes = BloomFilterBuilder::<str>::suggest_num_hashes_from_fpp(0.01);
    /// assert_eq!(hashes, 7); // -log2(0.01) ≈ 6.64
    /// ```
    pub fn suggest_num_hashes_from_fpp(fpp: f64) -> u32 {
        // Ceil to avoid selecting too few hashes.
        let k = (-fpp.log2()).ceil() as u32;
        k.max(MIN_NUM_HASHES)
    }
}

impl<T: ?Sized> Clone for BloomFilterBuilder<T> {
    fn clone(&self) -> Self {
        BloomFilterBuilder {
            num_bits: self.num_bits,
            num_hashes: self.num_hashes,
            seed: self.seed,
            _item: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for BloomFilterBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilterBuilder")
            .field("num_bits", &self.num_bits)
            .field("num_hashes", &self.num_hashes)
            .field("seed", &self.seed)
            .finish()
    }
}
