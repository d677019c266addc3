//! Turn sequencing, selection state and undo history

use draughts_core::{Board, Color, Engine, Move, jumps_from, legal_moves};
use minimax_engine::MinimaxEngine;

use crate::config::{Config, GameMode};

/// Where the director is in the turn cycle.
///
/// `AwaitingFurtherJump` behaves like `PieceSelected` restricted to the
/// capture continuation: the turn has not passed and only the chained
/// jumps of the landed piece are playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected,
    AwaitingFurtherJump,
    GameOver,
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    RedWins,
    BlackWins,
}

/// One undo step: the board and side to move as they were before a single
/// landing was applied. A jump chain pushes one snapshot per landing, so
/// undo unwinds chains one landing at a time.
#[derive(Clone, Debug)]
struct Snapshot {
    board: Board,
    turn: Color,
}

/// Drives a game of draughts over the rules core.
///
/// Owns the live board; the search engine only ever sees clones of it.
#[derive(Debug)]
pub struct GameDirector {
    board: Board,
    turn: Color,
    phase: Phase,
    selected: Option<u8>,
    selection: Vec<Move>,
    result: GameResult,
    history: Vec<Snapshot>,
    hint: Option<Move>,
    engine: MinimaxEngine,
    config: Config,
}

impl Default for GameDirector {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl GameDirector {
    /// Fresh game from the standard starting position, Black to move.
    pub fn new(config: Config) -> Self {
        Self::from_position(Board::startpos(), Color::Black, config)
    }

    /// Start from an arbitrary position (custom setups, tests).
    pub fn from_position(board: Board, turn: Color, config: Config) -> Self {
        Self {
            board,
            turn,
            phase: Phase::AwaitingSelection,
            selected: None,
            selection: Vec::new(),
            result: GameResult::InProgress,
            history: Vec::new(),
            hint: None,
            engine: MinimaxEngine::new(),
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    /// Legal moves of the current selection (empty when nothing is selected).
    pub fn selection_moves(&self) -> &[Move] {
        &self.selection
    }

    pub fn hint(&self) -> Option<Move> {
        self.hint
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Whether the collaborator should ask for an AI move now. The AI owns
    /// Black in the single-player modes.
    pub fn ai_to_move(&self) -> bool {
        self.result == GameResult::InProgress
            && match self.config.mode {
                GameMode::HumanVsAi | GameMode::Training => self.turn == Color::Black,
                GameMode::HumanVsHuman => false,
            }
    }

    /// Select the piece on `origin` for the side to move.
    ///
    /// Succeeds only if the piece has a legal move under the current
    /// MoveSet - during a forced capture a piece without a jump is not
    /// selectable even when it could step. Re-clicking the selected piece
    /// deselects it. A no-op mid jump chain and after game over.
    pub fn select_origin(&mut self, origin: u8) -> bool {
        if !matches!(self.phase, Phase::AwaitingSelection | Phase::PieceSelected) {
            return false;
        }
        if self.selected == Some(origin) {
            self.clear_selection();
            return true;
        }

        let from_origin = legal_moves(&self.board, self.turn).from_origin(origin);
        if from_origin.is_empty() {
            return false;
        }
        self.selected = Some(origin);
        self.selection = from_origin;
        self.phase = Phase::PieceSelected;
        true
    }

    /// Play the selected piece to `destination`.
    ///
    /// Pushes an undo snapshot, applies the move, then either stays on the
    /// piece for a mandatory jump continuation or ends the turn.
    pub fn choose_destination(&mut self, destination: u8) -> bool {
        if !matches!(self.phase, Phase::PieceSelected | Phase::AwaitingFurtherJump) {
            return false;
        }
        let Some(mv) = self.selection.iter().copied().find(|m| m.to == destination) else {
            return false;
        };

        self.history.push(Snapshot {
            board: self.board.clone(),
            turn: self.turn,
        });
        let captured = self.board.apply_move(mv.from, mv.to);
        self.hint = None;

        if captured {
            let continuations = jumps_from(&self.board, mv.to);
            if !continuations.is_empty() {
                // The capture must continue; the turn does not pass.
                self.selected = Some(mv.to);
                self.selection = continuations;
                self.phase = Phase::AwaitingFurtherJump;
                return true;
            }
        }

        self.end_turn();
        true
    }

    /// Search for the side to move and play the result, continuing any
    /// mandatory jump chain with the first available continuation - the
    /// same rule a human follows, only without the per-landing clicks.
    /// Returns the root move.
    pub fn request_ai_move(&mut self, depth: u8) -> Option<Move> {
        if !matches!(self.phase, Phase::AwaitingSelection | Phase::PieceSelected) {
            return None;
        }
        self.clear_selection();

        let result = self.engine.choose_move(&self.board, self.turn, depth);
        let root = result.best_move?;

        if !self.select_origin(root.from) || !self.choose_destination(root.to) {
            return None;
        }
        while self.phase == Phase::AwaitingFurtherJump {
            let next = self.selection[0];
            self.choose_destination(next.to);
        }
        Some(root)
    }

    /// Search for the side to move without touching game state; the result
    /// is cached until the next state-changing operation.
    pub fn request_hint(&mut self, depth: u8) -> Option<Move> {
        if self.phase == Phase::GameOver {
            return None;
        }
        let result = self.engine.choose_move(&self.board, self.turn, depth);
        self.hint = result.best_move;
        self.hint
    }

    /// Restore the most recent snapshot: one landing at a time, exactly as
    /// it was pushed. A no-op when there is no history.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.board = snapshot.board;
        self.turn = snapshot.turn;
        self.result = GameResult::InProgress;
        self.hint = None;
        self.selected = None;
        self.selection.clear();
        self.phase = Phase::AwaitingSelection;
        true
    }

    /// Discard everything and start over, Black to move.
    pub fn reset(&mut self) {
        self.board = Board::startpos();
        self.turn = Color::Black;
        self.phase = Phase::AwaitingSelection;
        self.selected = None;
        self.selection.clear();
        self.result = GameResult::InProgress;
        self.history.clear();
        self.hint = None;
        self.engine.new_game();
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.selection.clear();
        if self.phase != Phase::GameOver {
            self.phase = Phase::AwaitingSelection;
        }
    }

    fn end_turn(&mut self) {
        self.selected = None;
        self.selection.clear();
        self.turn = self.turn.other();
        self.hint = None;
        match self.board.winner() {
            Some(Color::Red) => {
                self.result = GameResult::RedWins;
                self.phase = Phase::GameOver;
            }
            Some(Color::Black) => {
                self.result = GameResult::BlackWins;
                self.phase = Phase::GameOver;
            }
            None => self.phase = Phase::AwaitingSelection,
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
