//! Position evaluation: the connection-count heuristic.
//!
//! A piece's connections are the directions in which its line of sight
//! (see [`crate::network::line_scan`]) reaches another piece of the same
//! color. Pieces are visited as scan origins in column-major order, and a
//! target that has already served as an origin is not counted again, so
//! each mutually visible pair contributes once. The scan's zero-edge
//! blindness makes some pairs one-way, which is why the origin order is
//! fixed.
//!
//! The position score is the cubed difference of the two sides' counts;
//! cubing widens the gap between well-connected and scattered positions.

use crate::board::{Board, Color, Piece};
use crate::constants::{DIM, NUM_DIRECTIONS};
use crate::network::line_scan;

/// Count line-of-sight connections between pieces of `color`.
pub fn connections(board: &Board, color: Color) -> i32 {
    let mut visited: Vec<Piece> = Vec::new();
    let mut count = 0;
    for x in 0..DIM {
        for y in 0..DIM {
            let piece = match board.contents(x, y) {
                Some(p) if p.color == color => p,
                _ => continue,
            };
            visited.push(piece);
            for dir in 0..NUM_DIRECTIONS {
                match line_scan(board, x, y, dir) {
                    Some(hit) if hit.color == color && !visited.contains(&hit) => count += 1,
                    _ => {}
                }
            }
        }
    }
    count
}

/// Heuristic score of `board` from `my_color`'s perspective:
/// `connections(my_color)^3 - connections(opp_color)^3`.
pub fn score(board: &Board, my_color: Color, opp_color: Color) -> i32 {
    let mine = connections(board, my_color);
    let theirs = connections(board, opp_color);
    mine.pow(3) - theirs.pow(3)
}
