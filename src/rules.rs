//! Move legality and legal-move enumeration.
//!
//! Legality checks run in a fixed order and stop at the first failure:
//! bounds, occupancy, corners, opponent goal zone, then the adjacency
//! (cluster) rule. The cluster rule is tested by speculatively placing the
//! piece, inspecting its neighborhood, and reverting; the board compares
//! equal before and after the check whatever the outcome.
//!
//! A `Step` first vacates its source cell (so the moving piece does not
//! count against its own adjacency check), validates the destination like a
//! placement, and restores the source before returning.

use std::fmt;

use crate::board::{Board, Color, Piece};
use crate::constants::{CORNERS, DIM};
use crate::moves::Move;

/// Why a move is illegal. All variants are recoverable rejections; no
/// failed check leaves any trace on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Destination outside the grid.
    OutOfBounds,
    /// Destination cell already holds a piece.
    Occupied,
    /// Destination is one of the four corner cells.
    Corner,
    /// Destination lies in the opponent's goal lines.
    OpponentGoal,
    /// Placement would cluster three pieces (two of the mover's neighbors
    /// already linked into the surrounding group).
    Cluster,
    /// Step source is off the board, empty, not the mover's piece, or the
    /// same cell as the destination.
    BadStepSource,
    /// The quit sentinel cannot be committed to the board.
    NoMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "illegal move: out of bounds"),
            MoveError::Occupied => write!(f, "illegal move: cell occupied"),
            MoveError::Corner => write!(f, "illegal move: corner cell"),
            MoveError::OpponentGoal => write!(f, "illegal move: opponent goal line"),
            MoveError::Cluster => write!(f, "illegal move: would cluster three pieces"),
            MoveError::BadStepSource => write!(f, "illegal move: bad step source"),
            MoveError::NoMove => write!(f, "illegal move: no move"),
        }
    }
}

/// Check a candidate move for `color`. Needs `&mut Board` for the
/// speculative adjacency probe, but always restores the board exactly.
pub fn check_move(board: &mut Board, mv: Move, color: Color) -> Result<(), MoveError> {
    match mv {
        Move::Add { x, y } => check_placement(board, x, y, color),
        Move::Step { x, y, from_x, from_y } => {
            match board.contents(from_x, from_y) {
                Some(p) if p.color == color => {}
                _ => return Err(MoveError::BadStepSource),
            }
            if (from_x, from_y) == (x, y) {
                return Err(MoveError::BadStepSource);
            }
            board.remove(from_x, from_y);
            let verdict = check_placement(board, x, y, color);
            board.put(from_x, from_y, color);
            verdict
        }
        Move::Quit => Err(MoveError::NoMove),
    }
}

/// Boolean wrapper over [`check_move`].
pub fn is_legal(board: &mut Board, mv: Move, color: Color) -> bool {
    check_move(board, mv, color).is_ok()
}

fn check_placement(board: &mut Board, x: usize, y: usize, color: Color) -> Result<(), MoveError> {
    if x >= DIM || y >= DIM {
        return Err(MoveError::OutOfBounds);
    }
    if board.contents(x, y).is_some() {
        return Err(MoveError::Occupied);
    }
    if CORNERS.contains(&(x, y)) {
        return Err(MoveError::Corner);
    }
    let in_opponent_goal = match color {
        Color::Black => x == 0 || x == DIM - 1,
        Color::White => y == 0 || y == DIM - 1,
    };
    if in_opponent_goal {
        return Err(MoveError::OpponentGoal);
    }

    // Cluster rule, on the hypothetical board: among the new piece's
    // same-colored neighbors, at most one may already have a same-colored
    // neighbor other than the new piece.
    board.put(x, y, color);
    let probe = Piece { color, x, y };
    let mut linked = 0;
    for n in board.neighbors(probe).into_iter().flatten() {
        if n.color != color {
            continue;
        }
        let has_other = board
            .neighbors(n)
            .into_iter()
            .flatten()
            .any(|m| m.color == color && (m.x, m.y) != (x, y));
        if has_other {
            linked += 1;
        }
    }
    board.remove(x, y);

    if linked > 1 {
        return Err(MoveError::Cluster);
    }
    Ok(())
}

/// All legal moves for `color`: placements while `pieces_left` is
/// positive, relocations of each of `color`'s pieces afterwards.
/// Enumeration order (x outer, y inner) is stable; the search breaks score
/// ties in favor of earlier moves.
pub fn legal_moves(board: &mut Board, color: Color, pieces_left: u32) -> Vec<Move> {
    let mut moves = Vec::new();
    if pieces_left > 0 {
        for x in 0..DIM {
            for y in 0..DIM {
                let mv = Move::Add { x, y };
                if is_legal(board, mv, color) {
                    moves.push(mv);
                }
            }
        }
        return moves;
    }
    let mut own: Vec<Piece> = Vec::new();
    for x in 0..DIM {
        for y in 0..DIM {
            match board.contents(x, y) {
                Some(p) if p.color == color => own.push(p),
                _ => {}
            }
        }
    }
    for piece in own {
        for x in 0..DIM {
            for y in 0..DIM {
                let mv = Move::Step {
                    x,
                    y,
                    from_x: piece.x,
                    from_y: piece.y,
                };
                if is_legal(board, mv, color) {
                    moves.push(mv);
                }
            }
        }
    }
    moves
}
