//! Minimax search with alpha-beta pruning

use draughts_core::{Board, Color, Move, evaluate, legal_moves};

/// Search `board` to `depth` plies and return the best score with the move
/// that achieves it. Black is the maximizing side.
///
/// The game tree is explored clone-per-branch: every candidate move is
/// applied to a private copy, so the caller's board is never touched.
/// Candidates are visited in MoveSet order (row-major origins, fixed
/// direction order) and only a strictly better score replaces the current
/// best — the first move reaching the final score wins, which keeps results
/// reproducible. `nodes` counts visited positions.
///
/// A terminal position (depth exhausted or game decided) returns its static
/// evaluation and no move; calling this on an already-decided board is
/// well-defined, not an error.
pub fn search(
    board: &Board,
    depth: u8,
    mut alpha: f32,
    mut beta: f32,
    maximizing_for_black: bool,
    nodes: &mut u64,
) -> (f32, Option<Move>) {
    *nodes += 1;

    if depth == 0 || board.winner().is_some() {
        return (evaluate(board), None);
    }

    let mover = if maximizing_for_black {
        Color::Black
    } else {
        Color::Red
    };
    let set = legal_moves(board, mover);

    let mut best_move = None;
    if maximizing_for_black {
        let mut best = f32::NEG_INFINITY;
        for &mv in set.moves() {
            let mut child = board.clone();
            child.apply_move(mv.from, mv.to);
            let (score, _) = search(&child, depth - 1, alpha, beta, false, nodes);
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        (best, best_move)
    } else {
        let mut best = f32::INFINITY;
        for &mv in set.moves() {
            let mut child = board.clone();
            child.apply_move(mv.from, mv.to);
            let (score, _) = search(&child, depth - 1, alpha, beta, true, nodes);
            if score < best {
                best = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        (best, best_move)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
