//! network-rs: an adversarial search engine for the Network board game.
//!
//! ## Usage
//!
//! - `network-rs protocol` - Start the text protocol loop for harness play
//! - `network-rs demo` - Watch the engine play a random opponent

use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};

use network_rs::board::{Board, Color};
use network_rs::constants::PIECE_BUDGET;
use network_rs::engine::Engine;
use network_rs::moves::{self, Move};
use network_rs::network::has_network;
use network_rs::protocol::ProtocolEngine;
use network_rs::rules::legal_moves;

/// network-rs: a Network game engine
#[derive(Parser)]
#[command(name = "network-rs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Black,
    White,
}

impl std::fmt::Display for ColorArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorArg::Black => write!(f, "black"),
            ColorArg::White => write!(f, "white"),
        }
    }
}

impl From<ColorArg> for Color {
    fn from(arg: ColorArg) -> Color {
        match arg {
            ColorArg::Black => Color::Black,
            ColorArg::White => Color::White,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the line protocol on stdin/stdout for use with a referee
    Protocol {
        /// Side the engine plays
        #[arg(long, value_enum, default_value_t = ColorArg::Black)]
        color: ColorArg,
        /// Search horizon in plies
        #[arg(long, default_value_t = 3)]
        depth: u32,
    },
    /// Play the engine against a random legal mover and print the game
    Demo {
        /// Search horizon in plies
        #[arg(long, default_value_t = 2)]
        depth: u32,
        /// Maximum number of full rounds to play
        #[arg(long, default_value_t = 20)]
        rounds: usize,
        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Protocol { color, depth }) => {
            let mut engine = ProtocolEngine::new(color.into(), depth);
            engine.run()
        }
        Some(Commands::Demo {
            depth,
            rounds,
            seed,
        }) => run_demo(depth, rounds, seed),
        None => run_demo(2, 20, None),
    }
}

/// Engine (Black) versus a uniformly random legal mover (White). The demo
/// keeps its own board in step with the engine's, the way an external
/// player would.
fn run_demo(depth: u32, rounds: usize, seed: Option<u64>) -> anyhow::Result<()> {
    if let Some(seed) = seed {
        fastrand::seed(seed);
    }
    println!("network-rs demo: engine (black, depth {depth}) vs random (white)\n");

    let mut engine = Engine::with_depth(Color::Black, depth);
    let mut board = Board::new();
    let mut white_left = PIECE_BUDGET;

    for round in 1..=rounds {
        let mv = engine.choose_move();
        if mv == Move::Quit {
            println!("engine has no move; stopping");
            break;
        }
        moves::apply(&mut board, mv, Color::Black);
        println!("round {round}: black plays {mv}");
        if report_network(&board) {
            break;
        }

        let candidates = legal_moves(&mut board, Color::White, white_left);
        if candidates.is_empty() {
            println!("random player has no move; stopping");
            break;
        }
        let reply = candidates[fastrand::usize(..candidates.len())];
        moves::apply(&mut board, reply, Color::White);
        if matches!(reply, Move::Add { .. }) {
            white_left -= 1;
        }
        if !engine.opponent_move(reply) {
            bail!("engine rejected a generated legal move: {reply}");
        }
        println!("round {round}: white plays {reply}");
        if report_network(&board) {
            break;
        }
    }

    println!("\nfinal position:\n{board}");
    Ok(())
}

fn report_network(board: &Board) -> bool {
    for color in [Color::Black, Color::White] {
        if has_network(board, color) {
            println!("{color} has completed a network");
            return true;
        }
    }
    false
}
