// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A minimal, completely insecure PRNG used to sample and order the question
/// pool. Seedable so that tests can pin down the exact pool a session gets.
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }

    /// Generate a uniform number in `[0, bound)`. Rejection sampling keeps
    /// the distribution exact even when `bound` does not divide `2^32`.
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        let threshold = u32::MAX - (u32::MAX % bound);
        loop {
            let r = self.next_u32();
            if r < threshold {
                return r % bound;
            }
        }
    }
}

/// Draw `count` distinct elements from `items`, uniformly and in uniformly
/// random relative order. This is a partial Fisher-Yates pass: drawing all
/// `items.len()` elements is a full shuffle, so sampling and shuffling are
/// indistinguishable in distribution.
pub fn sample<T>(mut items: Vec<T>, count: usize, rng: &mut TinyRng) -> Vec<T> {
    let n = items.len();
    let count = count.min(n);
    for i in 0..count {
        let j = i + rng.below((n - i) as u32) as usize;
        items.swap(i, j);
    }
    items.truncate(count);
    items
}

/// Uniformly reorder `items`.
pub fn shuffle<T>(items: Vec<T>, rng: &mut TinyRng) -> Vec<T> {
    let n = items.len();
    sample(items, n, rng)
}
