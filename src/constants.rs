//! Constants for board geometry, game rules, and search parameters.
//!
//! The game is played on a fixed 8x8 grid. Black's goal lines are the top
//! and bottom rows (y = 0 and y = 7); White's are the left and right
//! columns (x = 0 and x = 7). Each side may place at most ten pieces over
//! the course of a game; once the budget is spent, moves relocate an
//! existing piece instead of adding a new one.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (DIM x DIM).
pub const DIM: usize = 8;

/// Number of king-move directions radiating from a cell.
pub const NUM_DIRECTIONS: usize = 8;

/// Per-direction (dx, dy) steps, indexed 0..8 as NW, W, SW, N, S, NE, E, SE.
///
/// The opposite of direction `d` is `7 - d`; the chain search relies on
/// this to forbid both straight-through continuation and doubling back.
pub const DELTA: [(isize, isize); NUM_DIRECTIONS] = [
    (-1, -1), // NW
    (-1, 0),  // W
    (-1, 1),  // SW
    (0, -1),  // N
    (0, 1),   // S
    (1, -1),  // NE
    (1, 0),   // E
    (1, 1),   // SE
];

/// The four corner cells, which no piece may ever occupy.
pub const CORNERS: [(usize, usize); 4] = [(0, 0), (DIM - 1, 0), (0, DIM - 1), (DIM - 1, DIM - 1)];

// =============================================================================
// Game Rules
// =============================================================================

/// Total pieces each side may place over a game. Once spent, further moves
/// are relocations.
pub const PIECE_BUDGET: u32 = 10;

/// Minimum number of pieces in a winning network.
pub const MIN_NETWORK: usize = 6;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search horizon in plies.
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Upper score bound; a win found at `depth` scores `SCORE_MAX - depth`,
/// so shallower wins rank higher.
pub const SCORE_MAX: i32 = i32::MAX;

/// Lower score bound, returned for a position already lost.
pub const SCORE_MIN: i32 = i32::MIN;
