use rand::rngs::StdRng;
use rand::SeedableRng;

use super::heuristic::{Heuristic, WindowHeuristic};
use super::search::{Minimax, SearchStats};
use crate::error::SearchError;
use crate::game::GameState;

/// Universal interface for anything that picks columns.
pub trait Agent {
    /// Select a column for the player to move in `state`.
    ///
    /// Fails with [`SearchError::GameOver`] when the game is already over.
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Fixed-depth alpha-beta agent. Plays whichever side is to move.
pub struct MinimaxAgent {
    depth: usize,
    pruning: bool,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
    last_stats: SearchStats,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(WindowHeuristic::default()))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            depth,
            pruning: true,
            heuristic,
            rng: StdRng::from_os_rng(),
            last_stats: SearchStats::default(),
        }
    }

    /// Reseed the tie-break generator so games replay exactly.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Counters from the most recent search.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::GameOver);
        }

        let mut search = Minimax::new(self.heuristic.as_ref(), state.current_player())
            .pruning(self.pruning);
        let result = search.run(state.board(), self.depth, &mut self.rng)?;
        self.last_stats = search.stats();

        result.column.ok_or(SearchError::NoLegalColumns)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{GameOutcome, Player};

    fn play(first: &mut dyn Agent, second: &mut dyn Agent, first_player: Player) -> GameState {
        let mut state = GameState::initial(first_player);
        let mut turn = 0;
        while !state.is_terminal() {
            let action = if turn % 2 == 0 {
                first.select_action(&state).unwrap()
            } else {
                second.select_action(&state).unwrap()
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }
        state
    }

    #[test]
    fn selects_legal_action() {
        let mut agent = MinimaxAgent::new(4).with_seed(1);
        let state = GameState::initial(Player::Engine);
        let legal = state.legal_actions();
        let action = agent.select_action(&state).unwrap();
        assert!(legal.contains(&action), "Action {action} is not legal");
        assert!(agent.last_stats().nodes > 0);
    }

    #[test]
    fn plays_for_the_side_to_move() {
        // Human to move with three on the bottom row: the agent should finish it.
        let mut state = GameState::initial(Player::Human);
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Human
            state = state.apply_move(col).unwrap(); // Engine
        }
        assert_eq!(state.current_player(), Player::Human);
        let mut agent = MinimaxAgent::new(3).with_seed(0);
        assert_eq!(agent.select_action(&state).unwrap(), 3);
    }

    #[test]
    fn refuses_finished_game() {
        let mut state = GameState::initial(Player::Engine);
        for _ in 0..3 {
            state = state.apply_move(0).unwrap(); // Engine
            state = state.apply_move(1).unwrap(); // Human
        }
        state = state.apply_move(0).unwrap();
        assert!(state.is_terminal());

        let mut agent = MinimaxAgent::new(2);
        assert_eq!(
            agent.select_action(&state),
            Err(SearchError::GameOver)
        );
    }

    #[test]
    fn full_game_vs_self_completes() {
        let mut agent1 = MinimaxAgent::new(3).with_seed(1);
        let mut agent2 = MinimaxAgent::new(3).with_seed(2);
        let state = play(&mut agent1, &mut agent2, Player::Human);
        assert!(state.outcome().is_some());
    }

    #[test]
    fn beats_random_agent() {
        let games_per_side = 10;
        let mut wins = 0;

        for game in 0..games_per_side {
            let mut minimax = MinimaxAgent::new(4).with_seed(game);
            let mut random = RandomAgent::with_seed(1000 + game);
            let state = play(&mut minimax, &mut random, Player::Engine);
            if state.outcome() == Some(GameOutcome::Winner(Player::Engine)) {
                wins += 1;
            }
        }

        for game in 0..games_per_side {
            let mut random = RandomAgent::with_seed(2000 + game);
            let mut minimax = MinimaxAgent::new(4).with_seed(game);
            let state = play(&mut random, &mut minimax, Player::Human);
            if state.outcome() == Some(GameOutcome::Winner(Player::Engine)) {
                wins += 1;
            }
        }

        let total = games_per_side * 2;
        assert!(
            wins * 10 >= total * 8,
            "Minimax should beat random at least 80% of the time, got {wins}/{total}"
        );
    }

    #[test]
    fn name_is_minimax() {
        let agent = MinimaxAgent::new(5);
        assert_eq!(agent.name(), "Minimax");
        assert_eq!(agent.depth(), 5);
    }
}
