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

/// Hashes text using Bob Jenkins' "one-at-a-time" method.
///
/// Each character is folded into the accumulator before a three-step
/// finalization avalanche. All arithmetic wraps; overflow is part of the
/// algorithm, not an error. Runtime is linear in the number of characters.
///
/// This is the built-in secondary hash for text items.
///
/// # Examples
///
/// ```
/// # use bloomset::hash::jenkins_one_at_a_time;
/// assert_eq!(jenkins_one_at_a_time("alpha"), 0x2db8_d1aa);
/// // The empty string degenerates to 0.
/// assert_eq!(jenkins_one_at_a_time(""), 0);
/// ```
pub fn jenkins_one_at_a_time(text: &str) -> u32 {
    let mut hash: u32 = 0;

    for ch in text.chars() {
        hash = hash.wrapping_add(ch as u32);
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }

    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash = hash.wrapping_add(hash << 15);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(jenkins_one_at_a_time(""), 0);
        assert_eq!(jenkins_one_at_a_time("a"), 0xca2e_9442);
        assert_eq!(jenkins_one_at_a_time("alpha"), 0x2db8_d1aa);
        assert_eq!(
            jenkins_one_at_a_time("The quick brown fox jumps over the lazy dog"),
            0x519e_91f5
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            jenkins_one_at_a_time("membership"),
            jenkins_one_at_a_time("membership")
        );
    }

    #[test]
    fn test_distinct_inputs_diverge() {
        assert_ne!(jenkins_one_at_a_time("alpha"), jenkins_one_at_a_time("beta"));
        // One changed character avalanches.
        assert_ne!(jenkins_one_at_a_time("alpha"), jenkins_one_at_a_time("alphb"));
    }

    #[test]
    fn test_long_input_wraps_without_panic() {
        let long = "x".repeat(1 << 16);
        let _ = jenkins_one_at_a_time(&long);
    }
}
