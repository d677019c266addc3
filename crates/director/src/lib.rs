//! Game Director for draughts
//!
//! Sits between the rules core and a presentation collaborator:
//! - turn sequencing and the selection state machine
//! - snapshot-based undo history
//! - AI move and hint orchestration through the minimax engine
//!
//! The collaborator queries state (`board`, `turn`, `phase`, `hint`, ...)
//! and issues commands (`select_origin`, `choose_destination`,
//! `request_ai_move`, `undo`, `reset`). Illegal commands are rejected as
//! boolean no-ops - misclicks are routine, not exceptional.

mod config;
mod game;

pub use config::*;
pub use game::*;
