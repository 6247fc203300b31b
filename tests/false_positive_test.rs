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

use bloomset::bloom::BloomFilter;
use bloomset::bloom::BloomFilterBuilder;
use googletest::assert_that;
use googletest::prelude::ge;
use googletest::prelude::le;

const TARGET_FPP: f64 = 0.01;
const NUM_ITEMS: usize = 1000;
const NUM_PROBES: usize = 10_000;

fn filled_filter() -> BloomFilter<str> {
    let mut filter = BloomFilterBuilder::with_accuracy(NUM_ITEMS as u64, TARGET_FPP)
        .build()
        .unwrap();
    for i in 0..NUM_ITEMS {
        let item = format!("item_{i}");
        filter.add(item.as_str());
    }
    filter
}

#[test]
fn test_observed_rate_consistent_with_target() {
    let filter = filled_filter();

    let mut false_positives = 0usize;
    for i in 0..NUM_PROBES {
        let probe = format!("other_{i}");
        if filter.contains(probe.as_str()) {
            false_positives += 1;
        }
    }

    // A single deterministic trial; the tolerance leaves room for sampling
    // noise on both sides of the 1% target.
    let observed = false_positives as f64 / NUM_PROBES as f64;
    assert_that!(observed, le(0.02));
    assert_that!(observed, ge(0.002));
}

#[test]
fn test_load_factor_near_half_at_design_capacity() {
    let filter = filled_filter();

    // A filter sized optimally for n items holds roughly half its bits set
    // after n adds.
    assert_that!(filter.load_factor(), ge(0.40));
    assert_that!(filter.load_factor(), le(0.60));
}

#[test]
fn test_estimated_fpp_tracks_target() {
    let filter = filled_filter();

    assert_that!(filter.estimated_fpp(), ge(0.001));
    assert_that!(filter.estimated_fpp(), le(0.05));
}

#[test]
fn test_oversized_filter_rarely_lies() {
    // Ten times more bits than the design point: false positives should all
    // but vanish.
    let mut filter = BloomFilterBuilder::with_accuracy(10 * NUM_ITEMS as u64, TARGET_FPP)
        .build()
        .unwrap();
    for i in 0..NUM_ITEMS {
        let item = format!("item_{i}");
        filter.add(item.as_str());
    }

    let mut false_positives = 0usize;
    for i in 0..NUM_PROBES {
        let probe = format!("other_{i}");
        if filter.contains(probe.as_str()) {
            false_positives += 1;
        }
    }

    assert_that!(false_positives, le(5usize));
}
