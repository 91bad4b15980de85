//! Search configuration

use crate::eval::OPENING_DISC_LIMIT;
use crate::game::GameState;
use serde::{Deserialize, Serialize};

/// Deepest search any configuration can request
pub const MAX_DEPTH: u32 = 64;

/// Depth policy and execution options for the root search.
///
/// Missing fields deserialize to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched in a normal position
    pub base_depth: u32,
    /// Roots with more legal moves than this use `wide_depth`
    pub wide_branching_threshold: usize,
    /// Depth used at wide roots
    pub wide_depth: u32,
    /// Fixed depth overriding the policy
    pub depth_override: Option<u32>,
    /// Score root candidates on the rayon pool
    pub parallel_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_depth: 6,
            wide_branching_threshold: 16,
            wide_depth: 4,
            depth_override: None,
            parallel_root: false,
        }
    }
}

impl SearchConfig {
    /// Search every position at a fixed depth
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth_override = Some(depth);
        self
    }

    /// Set root-parallel scoring
    pub fn with_parallel_root(mut self, parallel: bool) -> Self {
        self.parallel_root = parallel;
        self
    }

    /// Plies to search from `state`, within `1..=MAX_DEPTH`.
    ///
    /// Opening positions search one ply per disc, on the same disc limit
    /// the heuristic uses to switch to its material-only form.
    pub fn depth_for(&self, state: &GameState) -> u32 {
        let depth = match self.depth_override {
            Some(depth) => depth,
            None => self.policy_depth(state),
        };
        depth.clamp(1, MAX_DEPTH)
    }

    fn policy_depth(&self, state: &GameState) -> u32 {
        let mut depth = self.base_depth;
        let placed = state.discs_placed();
        if placed <= OPENING_DISC_LIMIT {
            depth = placed as u32;
        }
        if state.legal_moves().len() > self.wide_branching_threshold {
            depth = self.wide_depth;
        }
        depth
    }
}
