//! Move representation, application, and text form.
//!
//! A move is one of three kinds:
//! - `Add` places a new piece (placement phase, while budget remains),
//! - `Step` relocates an existing piece (once the budget is spent),
//! - `Quit` is a sentinel "no move" value used to seed search results; it
//!   is never applied to the board.
//!
//! [`apply`] and [`undo`] are the mutation pair the search wraps around
//! every recursive call: `apply` then `undo` restores the board exactly.
//!
//! The text form is used by the protocol layer:
//! `add <x> <y>`, `step <x> <y> <from_x> <from_y>` (destination first),
//! and `quit`.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Color};

/// A move by one side. `Step` names the destination first, then the cell
/// being vacated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Add {
        x: usize,
        y: usize,
    },
    Step {
        x: usize,
        y: usize,
        from_x: usize,
        from_y: usize,
    },
    Quit,
}

/// Apply `mv` for `color` to the board. Callers must only pass validated
/// `Add`/`Step` moves; `Quit` is a no-op.
pub fn apply(board: &mut Board, mv: Move, color: Color) {
    match mv {
        Move::Add { x, y } => board.put(x, y, color),
        Move::Step { x, y, from_x, from_y } => {
            board.remove(from_x, from_y);
            board.put(x, y, color);
        }
        Move::Quit => {}
    }
}

/// Revert a previously applied `mv`, restoring the board to its exact
/// prior state.
pub fn undo(board: &mut Board, mv: Move, color: Color) {
    match mv {
        Move::Add { x, y } => board.remove(x, y),
        Move::Step { x, y, from_x, from_y } => {
            board.remove(x, y);
            board.put(from_x, from_y, color);
        }
        Move::Quit => {}
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Add { x, y } => write!(f, "add {x} {y}"),
            Move::Step { x, y, from_x, from_y } => write!(f, "step {x} {y} {from_x} {from_y}"),
            Move::Quit => write!(f, "quit"),
        }
    }
}

/// Error parsing the text form of a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError;

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 'add x y', 'step x y from_x from_y', or 'quit'")
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let coord = |t: &str| t.parse::<usize>().map_err(|_| ParseMoveError);
        match parts.as_slice() {
            ["quit"] => Ok(Move::Quit),
            ["add", x, y] => Ok(Move::Add {
                x: coord(x)?,
                y: coord(y)?,
            }),
            ["step", x, y, fx, fy] => Ok(Move::Step {
                x: coord(x)?,
                y: coord(y)?,
                from_x: coord(fx)?,
                from_y: coord(fy)?,
            }),
            _ => Err(ParseMoveError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_undo_add_restores_board() {
        let mut board = Board::new();
        board.place(2, 2, Color::White).unwrap();
        let before = board.clone();
        let mv = Move::Add { x: 4, y: 4 };
        apply(&mut board, mv, Color::Black);
        assert!(board.contents(4, 4).is_some());
        undo(&mut board, mv, Color::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_undo_step_restores_board() {
        let mut board = Board::new();
        board.place(3, 3, Color::Black).unwrap();
        board.place(6, 6, Color::White).unwrap();
        let before = board.clone();
        let mv = Move::Step {
            x: 5,
            y: 3,
            from_x: 3,
            from_y: 3,
        };
        apply(&mut board, mv, Color::Black);
        assert_eq!(board.contents(3, 3), None);
        assert_eq!(board.contents(5, 3).map(|p| p.color), Some(Color::Black));
        undo(&mut board, mv, Color::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn test_quit_is_never_a_board_mutation() {
        let mut board = Board::new();
        board.place(1, 1, Color::Black).unwrap();
        let before = board.clone();
        apply(&mut board, Move::Quit, Color::Black);
        assert_eq!(board, before);
        undo(&mut board, Move::Quit, Color::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_text_form() {
        assert_eq!("add 3 4".parse::<Move>(), Ok(Move::Add { x: 3, y: 4 }));
        assert_eq!(
            "step 1 2 3 4".parse::<Move>(),
            Ok(Move::Step {
                x: 1,
                y: 2,
                from_x: 3,
                from_y: 4
            })
        );
        assert_eq!("quit".parse::<Move>(), Ok(Move::Quit));
        assert!("add 3".parse::<Move>().is_err());
        assert!("hop 1 2".parse::<Move>().is_err());
        let mv = Move::Step {
            x: 1,
            y: 2,
            from_x: 3,
            from_y: 4,
        };
        assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
    }
}
