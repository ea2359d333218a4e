//! Breakout group snapshots and the random partition helper.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A snapshot of one random partition of the roster.
///
/// `group_ids` holds student ids captured at generation time. Snapshots are
/// deliberately not repaired when students are later removed; consumers
/// skip missing ids when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakoutGroups {
    pub group_size: usize,
    pub group_ids: Vec<Vec<String>>,
    pub created_at: u64,
}

/// Partition `candidate_ids` into random groups of `group_size`.
///
/// Uniform shuffle (Fisher–Yates via [`SliceRandom::shuffle`]) followed by
/// consecutive chunking; the last group may be shorter. Every candidate is
/// placed exactly once. Unlike the generator and quiz-play draws there is
/// no no-repeat constraint across invocations: each call is a fresh
/// partition.
///
/// Returns `None` when `group_size` is zero or there is nobody to place.
pub fn generate_groups<R: Rng>(
    candidate_ids: &[String],
    group_size: usize,
    created_at: u64,
    rng: &mut R,
) -> Option<BreakoutGroups> {
    if group_size == 0 || candidate_ids.is_empty() {
        return None;
    }
    let mut shuffled = candidate_ids.to_vec();
    shuffled.shuffle(rng);
    let group_ids = shuffled
        .chunks(group_size)
        .map(|chunk| chunk.to_vec())
        .collect();
    Some(BreakoutGroups {
        group_size,
        group_ids,
        created_at,
    })
}
