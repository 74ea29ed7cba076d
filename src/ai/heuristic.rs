use crate::game::{Board, Cell, Player, WINDOW};

/// Trait for evaluating a board position from a player's perspective.
///
/// Only consulted for non-terminal positions; wins, losses and draws are
/// scored by the search itself.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Hand-tuned weights for [`WindowHeuristic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Window fully owned by the player.
    pub four: i64,
    /// Three own pieces and one empty cell.
    pub three: i64,
    /// Two own pieces and two empty cells.
    pub two: i64,
    /// Three opponent pieces and one empty cell. Applied on top of the
    /// own-piece rules.
    pub opponent_three: i64,
    /// Per own piece in the center column.
    pub center: i64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            four: 100,
            three: 5,
            two: 2,
            opponent_three: -4,
            center: 3,
        }
    }
}

/// Default heuristic that scans all 4-cell windows and scores threats.
#[derive(Debug, Clone, Default)]
pub struct WindowHeuristic {
    weights: EvalWeights,
}

impl WindowHeuristic {
    pub fn new(weights: EvalWeights) -> Self {
        WindowHeuristic { weights }
    }

    /// Score a single window for `player`.
    pub fn score_window(&self, window: &[Cell; WINDOW], player: Player) -> i64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let own = window.iter().filter(|&&c| c == own_cell).count();
        let opp = window.iter().filter(|&&c| c == opp_cell).count();
        let empty = WINDOW - own - opp;

        let mut score = match (own, empty) {
            (4, _) => self.weights.four,
            (3, 1) => self.weights.three,
            (2, 2) => self.weights.two,
            _ => 0,
        };

        if opp == 3 && empty == 1 {
            score += self.weights.opponent_three;
        }

        score
    }

    /// Sum of every window score plus the center-column bonus.
    pub fn score_position(&self, board: &Board, player: Player) -> i64 {
        let own_cell = player.to_cell();
        let center = board.center_column();
        let center_count = (0..board.rows())
            .filter(|&row| board.get(row, center) == own_cell)
            .count() as i64;

        let windows: i64 = board
            .windows()
            .map(|window| self.score_window(&window, player))
            .sum();

        center_count * self.weights.center + windows
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        self.score_position(board, player)
    }
}
