//! Network detection: constrained depth-first path search.
//!
//! A network for a color is a path of at least six of its pieces whose
//! first piece sits on that color's 0-side goal line and whose last piece
//! sits on the 7-side goal line. Consecutive path segments follow the
//! pieces' line of sight (king-move rays that skip empty cells and stop at
//! the first piece) and may use neither the previous segment's direction
//! nor its exact opposite.
//!
//! The scan treats landing on row 0 or column 0 as leaving the board, even
//! when the landing cell is occupied. Pieces on a color's near goal line
//! therefore act only as chain starts, and a chain re-enters goal
//! territory only at the far end, where it is judged on the spot: six or
//! more pieces win, fewer end that chain state immediately.

use crate::board::{Board, Color, Piece};
use crate::constants::{DELTA, DIM, MIN_NETWORK, NUM_DIRECTIONS};

/// Whether `color` currently has a completed network on `board`.
///
/// Seeds a fresh single-piece chain from every piece of `color` in
/// row-major order and runs the recursive extension below; the first chain
/// to reach the far goal line with enough pieces decides.
pub fn has_network(board: &Board, color: Color) -> bool {
    for y in 0..DIM {
        for x in 0..DIM {
            match board.contents(x, y) {
                Some(p) if p.color == color => {
                    let mut chain = vec![p];
                    if extend(board, &mut chain, color, None) {
                        return true;
                    }
                }
                _ => {}
            }
        }
    }
    false
}

/// Walk one cell at a time from `(x, y)` along direction `dir`, skipping
/// empty cells, and return the first piece hit.
///
/// Returns `None` when the ray leaves the open region (0, DIM) x (0, DIM)
/// before hitting anything. Landing on row 0 or column 0 counts as out
/// even if a piece is there, while the 7-side edges are reachable.
pub(crate) fn line_scan(board: &Board, x: usize, y: usize, dir: usize) -> Option<Piece> {
    let (dx, dy) = DELTA[dir];
    let (mut cx, mut cy) = (x as isize, y as isize);
    loop {
        cx += dx;
        cy += dy;
        if cx <= 0 || cy <= 0 || cx >= DIM as isize || cy >= DIM as isize {
            return None;
        }
        if let Some(p) = board.contents(cx as usize, cy as usize) {
            return Some(p);
        }
    }
}

/// Recursive core: try to grow `chain` from its tail into a network.
///
/// On success the chain holds the winning path; on failure it is restored
/// to its state at entry. `last_dir` is the direction of the segment that
/// produced the current tail (`None` for a freshly seeded chain).
fn extend(board: &Board, chain: &mut Vec<Piece>, color: Color, last_dir: Option<usize>) -> bool {
    let head = chain[0];
    let tail = chain[chain.len() - 1];

    // Judged the moment the tail reaches the far goal line with the head
    // on the near one: enough pieces is a win, otherwise this chain state
    // is a dead end.
    let spans = match color {
        Color::Black => head.y == 0 && tail.y == DIM - 1,
        Color::White => head.x == 0 && tail.x == DIM - 1,
    };
    if spans {
        return chain.len() >= MIN_NETWORK;
    }

    for dir in 0..NUM_DIRECTIONS {
        if let Some(last) = last_dir {
            if dir == last || dir == NUM_DIRECTIONS - 1 - last {
                continue;
            }
        }
        let Some(found) = line_scan(board, tail.x, tail.y, dir) else {
            continue;
        };
        if found.color != color || chain.contains(&found) {
            continue;
        }
        chain.push(found);
        if extend(board, chain, color, Some(dir)) {
            return true;
        }
        chain.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[(usize, usize)], white: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(x, y) in black {
            board.place(x, y, Color::Black).unwrap();
        }
        for &(x, y) in white {
            board.place(x, y, Color::White).unwrap();
        }
        board
    }

    /// A six-piece zig-zag from row 0 to row 7 for Black:
    /// (1,0) S (1,2) SE (3,4) S (3,6) E (5,6) SE (6,7).
    const BLACK_NET: [(usize, usize); 6] = [(1, 0), (1, 2), (3, 4), (3, 6), (5, 6), (6, 7)];

    #[test]
    fn test_empty_board_has_no_network() {
        let board = Board::new();
        assert!(!has_network(&board, Color::Black));
        assert!(!has_network(&board, Color::White));
    }

    #[test]
    fn test_zigzag_network_detected() {
        let board = board_with(&BLACK_NET, &[]);
        assert!(has_network(&board, Color::Black));
        assert!(!has_network(&board, Color::White));
    }

    #[test]
    fn test_five_pieces_never_network() {
        // Same chain with one interior piece missing: too short even
        // though both goal lines are touched.
        let short: Vec<(usize, usize)> = BLACK_NET
            .iter()
            .copied()
            .filter(|&c| c != (3, 6))
            .collect();
        let board = board_with(&short, &[]);
        assert!(!has_network(&board, Color::Black));
    }

    #[test]
    fn test_straight_line_blocked_by_direction_rule() {
        // Six Black pieces straight down column 2 span both goal rows,
        // but every segment runs S, so no two consecutive segments are
        // allowed and no network exists.
        let board = board_with(
            &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 6), (2, 7)],
            &[],
        );
        assert!(!has_network(&board, Color::Black));
    }

    #[test]
    fn test_opponent_piece_blocks_line_of_sight() {
        // Cut the (3,6) -> (5,6) segment of the zig-zag with a White
        // piece in between.
        let board = board_with(&BLACK_NET, &[(4, 6)]);
        assert!(!has_network(&board, Color::Black));
    }

    #[test]
    fn test_network_symmetric_under_transpose() {
        // Transposing coordinates and swapping colors swaps the goal
        // axes, so detection must agree with the original board.
        let cases: [(&[(usize, usize)], &[(usize, usize)]); 3] = [
            (&BLACK_NET, &[]),
            (&BLACK_NET, &[(4, 6)]),
            (&[(2, 0), (2, 3), (4, 5)], &[(3, 4)]),
        ];
        for (black, white) in cases {
            let board = board_with(black, white);
            let mut mirror = Board::new();
            for &(x, y) in black {
                mirror.place(y, x, Color::White).unwrap();
            }
            for &(x, y) in white {
                mirror.place(y, x, Color::Black).unwrap();
            }
            assert_eq!(
                has_network(&board, Color::Black),
                has_network(&mirror, Color::White)
            );
            assert_eq!(
                has_network(&board, Color::White),
                has_network(&mirror, Color::Black)
            );
        }
    }

    #[test]
    fn test_line_scan_skips_empties_and_stops_at_piece() {
        let board = board_with(&[(1, 2), (6, 2)], &[]);
        // E from (1,2) skips four empty cells and lands on (6,2).
        let hit = line_scan(&board, 1, 2, 6).unwrap();
        assert_eq!((hit.x, hit.y), (6, 2));
        // N from (1,2) runs off the top edge.
        assert!(line_scan(&board, 1, 2, 3).is_none());
    }

    #[test]
    fn test_line_scan_zero_edges_are_blind() {
        // A piece sitting on column 0 is never found by a scan; the ray
        // is abandoned at the edge instead.
        let board = board_with(&[], &[(0, 3), (5, 3)]);
        assert!(line_scan(&board, 5, 3, 1).is_none());
        // The 7-side edge is reachable.
        let board = board_with(&[], &[(7, 3), (2, 3)]);
        let hit = line_scan(&board, 2, 3, 6).unwrap();
        assert_eq!((hit.x, hit.y), (7, 3));
    }
}
