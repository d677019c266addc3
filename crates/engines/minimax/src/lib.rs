//! Minimax Draughts Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over the material+kings
//! evaluation. Used both as the AI opponent and as the hint generator.

mod search;

use draughts_core::{Board, Color, Engine, SearchResult};

pub use search::search;

/// Draughts engine backed by [`search`].
///
/// The engine is stateless apart from a node counter; search runs to
/// completion at the requested depth with no time limit or cancellation.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn choose_move(&mut self, board: &Board, to_move: Color, depth: u8) -> SearchResult {
        self.nodes = 0;

        let maximizing = to_move == Color::Black;
        let (score, best_move) = search(
            board,
            depth,
            f32::NEG_INFINITY,
            f32::INFINITY,
            maximizing,
            &mut self.nodes,
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
