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

use bloomset::bloom::BloomFilterBuilder;
use bloomset::hash::jenkins_one_at_a_time;
use bloomset::hash::BuiltinHash;
use bloomset::hash::SecondaryHash;

/// A 128-bit identifier with no built-in hash strategy.
#[derive(Hash, Clone, Copy)]
struct ClaimId([u8; 16]);

fn claim_strategy() -> SecondaryHash<ClaimId> {
    SecondaryHash::custom(|id: &ClaimId| {
        id.0.chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .fold(0u32, |acc, word| acc.rotate_left(7) ^ word)
    })
}

#[test]
fn test_custom_strategy_round_trip() {
    let mut filter = BloomFilterBuilder::with_accuracy(1000, 0.01)
        .build_with_strategy(claim_strategy())
        .unwrap();

    let ids: Vec<ClaimId> = (0..200u8).map(|i| ClaimId([i; 16])).collect();
    for id in &ids {
        filter.add(id);
    }
    for id in &ids {
        assert!(filter.contains(id));
    }
}

#[test]
fn test_custom_strategy_is_deterministic() {
    let mut left = BloomFilterBuilder::with_size(4096, 4)
        .build_with_strategy(claim_strategy())
        .unwrap();
    let mut right = BloomFilterBuilder::with_size(4096, 4)
        .build_with_strategy(claim_strategy())
        .unwrap();

    for i in 0..50u8 {
        left.add(&ClaimId([i; 16]));
        right.add(&ClaimId([i; 16]));
    }

    assert_eq!(left, right);
}

#[test]
fn test_builtin_strategy_override() {
    // A strategy can be injected even for a type with a built-in hash;
    // the injected one wins.
    let constant = SecondaryHash::custom(|_: &str| 1);
    let mut overridden = BloomFilterBuilder::with_size(2048, 3)
        .build_with_strategy(constant)
        .unwrap();
    let mut builtin = BloomFilterBuilder::with_size(2048, 3).build().unwrap();

    overridden.add("alpha");
    builtin.add("alpha");

    assert!(overridden.contains("alpha"));
    assert!(builtin.contains("alpha"));
    assert_ne!(overridden, builtin);
}

#[test]
fn test_user_implemented_builtin_hash() {
    struct Tag(&'static str);

    impl BuiltinHash for Tag {
        fn secondary_hash(&self) -> u32 {
            jenkins_one_at_a_time(self.0)
        }
    }

    impl std::hash::Hash for Tag {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            self.0.hash(state);
        }
    }

    let mut filter = BloomFilterBuilder::with_size(1024, 3).build().unwrap();
    filter.add(&Tag("release"));
    assert!(filter.contains(&Tag("release")));
    assert!(!filter.contains(&Tag("debug")));
}

#[test]
fn test_text_and_owned_text_agree() {
    // str and String share the Jenkins built-in, and str's Hash impl is
    // forwarded by String, so the two filter types see identical streams.
    let mut borrowed = BloomFilterBuilder::<str>::with_size(2048, 4).build().unwrap();
    let mut owned = BloomFilterBuilder::<String>::with_size(2048, 4).build().unwrap();

    borrowed.add("alpha");
    owned.add(&"alpha".to_string());

    assert!(borrowed.contains("alpha"));
    assert!(owned.contains(&"alpha".to_string()));
    assert_eq!(borrowed.bits_used(), owned.bits_used());
}
