//! Cost model.
//!
//! Growing into a tier gets dearer the more trees I already have in that
//! tier, and each extra seed costs one sun per seed I already own.

use crate::board::{Action, TreeMap, TREE_SIZES};

/// Sun cost of COMPLETE, independent of population.
pub const COMPLETE_COST: u32 = 4;

/// Base cost of growing from size `i` to `i + 1`.
pub const GROW_BASE_COSTS: [u32; 3] = [1, 3, 7];

/// Action costs derived from my tree population this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostProfile {
    /// My trees per size tier, seeds first.
    pub tree_counts: [u32; TREE_SIZES],
    pub seed: u32,
    /// Cost of growing out of size 0, 1 and 2.
    pub grow: [u32; 3],
    pub complete: u32,
}

impl CostProfile {
    /// Counts my trees and derives every cost from the counts.
    pub fn from_trees(trees: &TreeMap) -> CostProfile {
        let mut counts = [0u32; TREE_SIZES];
        for tree in trees.mine() {
            counts[tree.size as usize] += 1;
        }
        CostProfile::from_counts(counts)
    }

    /// Derives costs from per-tier counts.
    pub fn from_counts(tree_counts: [u32; TREE_SIZES]) -> CostProfile {
        let mut grow = [0u32; 3];
        for (size, cost) in grow.iter_mut().enumerate() {
            *cost = GROW_BASE_COSTS[size] + tree_counts[size + 1];
        }
        CostProfile {
            tree_counts,
            seed: tree_counts[0],
            grow,
            complete: COMPLETE_COST,
        }
    }

    /// Number of my trees of `size`.
    #[inline]
    pub fn count(&self, size: u8) -> u32 {
        self.tree_counts.get(size as usize).copied().unwrap_or(0)
    }

    /// Sun cost of `action`, or `None` for a GROW with no growable tree.
    pub fn cost_of(&self, action: &Action, trees: &TreeMap) -> Option<u32> {
        match action {
            Action::Wait => Some(0),
            Action::Seed { .. } => Some(self.seed),
            Action::Grow { target } => trees
                .get(*target)
                .and_then(|t| self.grow.get(t.size as usize).copied()),
            Action::Complete { .. } => Some(self.complete),
        }
    }

    /// Returns true if `sun` covers the cost of `action`.
    pub fn can_afford(&self, action: &Action, trees: &TreeMap, sun: u32) -> bool {
        self.cost_of(action, trees).is_some_and(|c| c <= sun)
    }
}
