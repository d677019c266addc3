//! Random Move Draughts Engine
//!
//! A simple engine that selects moves uniformly at random from all legal
//! moves. Useful for:
//! - Baseline comparisons (the minimax engine should easily beat this)
//! - Stress testing move generation
//!
//! The forced-capture rule still applies: the legal MoveSet it draws from
//! is capture-only whenever a jump exists.

use draughts_core::{Board, Color, Engine, SearchResult, legal_moves};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A draughts engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board, to_move: Color, _depth: u8) -> SearchResult {
        self.nodes = 1;

        let set = legal_moves(board, to_move);
        let best_move = set.moves().choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
