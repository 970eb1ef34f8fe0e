// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use park_alloc_core::id::TicketId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Builder;

/// Produces random (version 4) UUID ticket ids.
///
/// A seeded generator yields the same id sequence on every run, which keeps tests
/// and replays deterministic. Unseeded generators draw their seed from the OS.
#[derive(Debug, Clone)]
pub struct TicketIdGenerator {
    rng: ChaCha8Rng,
}

impl TicketIdGenerator {
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn from_os_rng() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    #[inline]
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_os_rng(),
        }
    }

    pub fn next_id(&mut self) -> TicketId {
        let bytes: [u8; 16] = self.rng.random();
        TicketId::new(Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl Default for TicketIdGenerator {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = TicketIdGenerator::from_seed(7);
        let mut b = TicketIdGenerator::from_seed(7);
        for _ in 0..16 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }

    #[test]
    fn test_ids_are_v4_and_distinct() {
        let mut g = TicketIdGenerator::from_seed(42);
        let ids: HashSet<TicketId> = (0..1_000).map(|_| g.next_id()).collect();
        assert_eq!(ids.len(), 1_000);
        assert!(ids.iter().all(|id| id.value().get_version_num() == 4));
    }

    #[test]
    fn test_unseeded_generators_differ() {
        let mut a = TicketIdGenerator::default();
        let mut b = TicketIdGenerator::default();
        assert_ne!(a.next_id(), b.next_id());
    }
}
