use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::agent::Agent;
use crate::error::SearchError;
use crate::game::GameState;

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::GameOver);
        }
        state
            .legal_actions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoLegalColumns)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
