use rand::Rng;

use super::heuristic::{Heuristic, WindowHeuristic};
use super::search::{Minimax, SearchResult};
use crate::error::SearchError;
use crate::game::{Board, Player};

/// Pick the engine's column for `board`, searching `depth` plies.
///
/// Ties between equally scored columns are broken at random from a
/// thread-local generator. Returns `Ok(None)` only if the board is already
/// terminal.
pub fn choose_move(board: &Board, depth: usize) -> Result<Option<usize>, SearchError> {
    let heuristic = WindowHeuristic::default();
    let result = choose_move_with(board, depth, Player::Engine, &heuristic, &mut rand::rng())?;
    Ok(result.column)
}

/// Like [`choose_move`], with the maximizing side, evaluator and random
/// source supplied by the caller.
pub fn choose_move_with<H, R>(
    board: &Board,
    depth: usize,
    side: Player,
    heuristic: &H,
    rng: &mut R,
) -> Result<SearchResult, SearchError>
where
    H: Heuristic + ?Sized,
    R: Rng + ?Sized,
{
    Minimax::new(heuristic, side).run(board, depth, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn takes_winning_column() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::Engine).unwrap();
        }
        for depth in 1..=5 {
            assert_eq!(choose_move(&board, depth).unwrap(), Some(3));
        }
    }

    #[test]
    fn blocks_threat_with_enough_depth() {
        let mut board = Board::new();
        for col in 4..7 {
            board.drop_piece(col, Player::Human).unwrap();
        }
        for depth in 2..=5 {
            assert_eq!(choose_move(&board, depth).unwrap(), Some(3));
        }
    }

    #[test]
    fn prefers_win_over_block() {
        // Engine on the bottom row, human on the row above: both need col 3.
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::Engine).unwrap();
            board.drop_piece(col, Player::Human).unwrap();
        }
        assert_eq!(choose_move(&board, 4).unwrap(), Some(3));
    }

    #[test]
    fn terminal_board_has_no_move() {
        assert_eq!(choose_move(&Board::drawn(), 3).unwrap(), None);
    }

    #[test]
    fn empty_board_move_is_legal() {
        let column = choose_move(&Board::new(), 3).unwrap().unwrap();
        assert!(column < Board::new().cols());
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let mut board = Board::new();
        board.drop_piece(3, Player::Human).unwrap();
        let heuristic = WindowHeuristic::default();
        let first = choose_move_with(
            &board,
            3,
            Player::Engine,
            &heuristic,
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();
        let second = choose_move_with(
            &board,
            3,
            Player::Engine,
            &heuristic,
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn works_on_wider_boards() {
        let mut board = Board::with_dimensions(6, 9).unwrap();
        for col in 5..8 {
            board.drop_piece(col, Player::Engine).unwrap();
        }
        // Either end completes four.
        let column = choose_move(&board, 2).unwrap();
        assert!(matches!(column, Some(4) | Some(8)), "got {column:?}");
    }
}
