use crate::{board::Board, types::Color};

/// Positional score: piece difference plus a 1.5 weight per king.
/// Higher favors Black.
pub fn evaluate(board: &Board) -> f32 {
    let men = board.count(Color::Black) as f32 - board.count(Color::Red) as f32;
    let kings = board.kings(Color::Black) as f32 - board.kings(Color::Red) as f32;
    men + 1.5 * kings
}
