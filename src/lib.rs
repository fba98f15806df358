//! network-rs: a deterministic adversarial search engine for the Network
//! connection game.
//!
//! Two players place and later relocate pieces on an 8x8 grid; a player
//! wins by forming a network, a path of at least six same-colored pieces
//! linking that side's two goal lines with a direction change between
//! consecutive segments. The engine enumerates legal moves, detects
//! networks, and picks moves with depth-bounded alpha-beta search over a
//! single mutated board.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, rule limits, search parameters
//! - [`board`] - The 8x8 grid of pieces
//! - [`moves`] - Move kinds, apply/undo pairs, text form
//! - [`rules`] - Move legality and legal-move enumeration
//! - [`network`] - Network detection (constrained path search)
//! - [`eval`] - Connection-count heuristic
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`engine`] - The player-facing engine
//! - [`protocol`] - Text protocol for harness play
//!
//! ## Example
//!
//! ```
//! use network_rs::board::Color;
//! use network_rs::engine::Engine;
//! use network_rs::moves::Move;
//!
//! let mut engine = Engine::with_depth(Color::Black, 2);
//!
//! // Set up the engine's side, then report an opponent move.
//! assert!(engine.force_move(Move::Add { x: 3, y: 3 }));
//! assert!(!engine.opponent_move(Move::Add { x: 3, y: 0 })); // Black's goal row
//! assert!(engine.opponent_move(Move::Add { x: 0, y: 3 }));
//!
//! // Ask the engine for its reply.
//! let mv = engine.choose_move();
//! assert!(matches!(mv, Move::Add { .. }));
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod eval;
pub mod moves;
pub mod network;
pub mod protocol;
pub mod rules;
pub mod search;
