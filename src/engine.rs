//! The player-facing engine.
//!
//! An [`Engine`] owns a board, its color, and the two piece budgets, and
//! exposes the three operations a surrounding game harness needs:
//!
//! - [`Engine::choose_move`] searches for and commits the engine's own
//!   move,
//! - [`Engine::opponent_move`] validates and commits a move reported for
//!   the other side,
//! - [`Engine::force_move`] validates and commits a move attributed to
//!   the engine itself, used to set up positions.
//!
//! Rejected moves leave the board untouched; these are the only two code
//! paths (besides `choose_move`) where a board mutation is permanent.

use crate::board::{Board, Color};
use crate::constants::{DEFAULT_SEARCH_DEPTH, PIECE_BUDGET};
use crate::moves::{self, Move};
use crate::network::has_network;
use crate::rules::{check_move, MoveError};
use crate::search::Searcher;

/// A machine player for one side of the game.
pub struct Engine {
    color: Color,
    depth: u32,
    board: Board,
    budgets: [u32; 2],
}

impl Engine {
    /// Create an engine playing `color` with the default search depth.
    pub fn new(color: Color) -> Self {
        Self::with_depth(color, DEFAULT_SEARCH_DEPTH)
    }

    /// Create an engine playing `color` searching `depth` plies.
    pub fn with_depth(color: Color, depth: u32) -> Self {
        Self {
            color,
            depth,
            board: Board::new(),
            budgets: [PIECE_BUDGET; 2],
        }
    }

    /// The engine's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Read access to the internal board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Remaining placements for `color`.
    pub fn pieces_left(&self, color: Color) -> u32 {
        self.budgets[color.index()]
    }

    /// Whether `color` has completed a network on the internal board.
    pub fn has_won(&self, color: Color) -> bool {
        has_network(&self.board, color)
    }

    /// Reset to an empty board and full budgets, keeping color and depth.
    pub fn clear(&mut self) {
        self.board = Board::new();
        self.budgets = [PIECE_BUDGET; 2];
    }

    /// Search for the engine's own move and commit it. Returns
    /// [`Move::Quit`] without touching the board in the degenerate case
    /// where no legal move exists.
    pub fn choose_move(&mut self) -> Move {
        let searcher = Searcher::new(self.color, self.depth);
        let best = searcher.best_move(&mut self.board, self.budgets);
        if best.mv == Move::Quit {
            return Move::Quit;
        }
        self.commit(best.mv, self.color);
        best.mv
    }

    /// Validate and commit a move by the opposing side. On rejection the
    /// board is left exactly as it was.
    pub fn opponent_move(&mut self, mv: Move) -> bool {
        self.try_move(mv, self.color.opponent()).is_ok()
    }

    /// Validate and commit a move attributed to this engine. On rejection
    /// the board is left exactly as it was.
    pub fn force_move(&mut self, mv: Move) -> bool {
        self.try_move(mv, self.color).is_ok()
    }

    /// Shared validate-then-commit path for externally supplied moves.
    pub(crate) fn try_move(&mut self, mv: Move, color: Color) -> Result<(), MoveError> {
        check_move(&mut self.board, mv, color)?;
        self.commit(mv, color);
        Ok(())
    }

    fn commit(&mut self, mv: Move, color: Color) {
        moves::apply(&mut self.board, mv, color);
        if matches!(mv, Move::Add { .. }) {
            let left = &mut self.budgets[color.index()];
            *left = left.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_move_tracks_budget() {
        let mut engine = Engine::new(Color::Black);
        assert_eq!(engine.pieces_left(Color::Black), PIECE_BUDGET);
        assert!(engine.force_move(Move::Add { x: 3, y: 3 }));
        assert_eq!(engine.pieces_left(Color::Black), PIECE_BUDGET - 1);
        assert_eq!(engine.pieces_left(Color::White), PIECE_BUDGET);
        // A relocation does not consume budget.
        assert!(engine.force_move(Move::Step {
            x: 5,
            y: 3,
            from_x: 3,
            from_y: 3
        }));
        assert_eq!(engine.pieces_left(Color::Black), PIECE_BUDGET - 1);
    }

    #[test]
    fn test_opponent_move_rejection_leaves_board_unchanged() {
        let mut engine = Engine::new(Color::Black);
        assert!(engine.force_move(Move::Add { x: 4, y: 4 }));
        let before = engine.board().clone();
        // White may not play on row 0 or on an occupied cell.
        assert!(!engine.opponent_move(Move::Add { x: 3, y: 0 }));
        assert!(!engine.opponent_move(Move::Add { x: 4, y: 4 }));
        assert!(!engine.opponent_move(Move::Quit));
        assert_eq!(*engine.board(), before);
        assert_eq!(engine.pieces_left(Color::White), PIECE_BUDGET);
        assert!(engine.opponent_move(Move::Add { x: 0, y: 4 }));
        assert_eq!(engine.pieces_left(Color::White), PIECE_BUDGET - 1);
    }

    #[test]
    fn test_choose_move_commits_exactly_one_move() {
        let mut engine = Engine::with_depth(Color::White, 1);
        let mv = engine.choose_move();
        match mv {
            Move::Add { x, y } => {
                assert_eq!(
                    engine.board().contents(x, y).map(|p| p.color),
                    Some(Color::White)
                );
            }
            other => panic!("expected a placement, got {other}"),
        }
        assert_eq!(engine.board().count(Color::White), 1);
        assert_eq!(engine.board().count(Color::Black), 0);
        assert_eq!(engine.pieces_left(Color::White), PIECE_BUDGET - 1);
    }

    #[test]
    fn test_clear_resets_game_state() {
        let mut engine = Engine::with_depth(Color::Black, 1);
        engine.force_move(Move::Add { x: 2, y: 2 });
        engine.clear();
        assert_eq!(*engine.board(), Board::new());
        assert_eq!(engine.pieces_left(Color::Black), PIECE_BUDGET);
    }
}
