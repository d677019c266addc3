use crate::{board::Board, types::*};

/// The legal moves for one side, in a fixed order: row-major scan over
/// origins, then the piece's direction order. When `captures` is set the
/// set holds capture jumps only (forced-capture rule).
#[derive(Clone, Debug, Default)]
pub struct MoveSet {
    moves: Vec<Move>,
    captures: bool,
}

impl MoveSet {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when the set is restricted to capture jumps.
    pub fn is_capture_set(&self) -> bool {
        self.captures
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Origin squares that have at least one legal destination, deduped,
    /// in generation order.
    pub fn origins(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for mv in &self.moves {
            if out.last() != Some(&mv.from) {
                out.push(mv.from);
            }
        }
        out
    }

    pub fn from_origin(&self, from: u8) -> Vec<Move> {
        self.moves.iter().copied().filter(|m| m.from == from).collect()
    }

    pub fn find(&self, from: u8, to: u8) -> Option<Move> {
        self.moves.iter().copied().find(|m| m.from == from && m.to == to)
    }
}

/// Generate all legal moves for `color`.
///
/// Two passes: first a global scan for any available capture jump. If one
/// exists anywhere, only jumps are generated — a piece without a jump
/// contributes nothing, even if it could step. Otherwise every piece's
/// simple diagonal steps are collected.
pub fn legal_moves(board: &Board, color: Color) -> MoveSet {
    let mut has_jump = false;
    for from in 0..64u8 {
        if owns(board, from, color) && !jumps_from(board, from).is_empty() {
            has_jump = true;
            break;
        }
    }

    let mut moves = Vec::with_capacity(32);
    for from in 0..64u8 {
        if !owns(board, from, color) {
            continue;
        }
        if has_jump {
            moves.extend(jumps_from(board, from));
        } else {
            simple_moves_into(board, from, &mut moves);
        }
    }
    MoveSet {
        moves,
        captures: has_jump,
    }
}

/// Capture jumps available to the piece on `from`: a two-square diagonal
/// landing on an empty square, over an adjacent opposing piece. Public
/// because multi-jump continuation is decided from the landing square.
pub fn jumps_from(board: &Board, from: u8) -> Vec<Move> {
    let Some(pc) = board.piece_at(from) else {
        return Vec::new();
    };
    let r = row_of(from);
    let c = col_of(from);
    let mut out = Vec::new();
    for &(dr, dc) in pc.directions() {
        let over = sq(r + dr, c + dc);
        let to = sq(r + 2 * dr, c + 2 * dc);
        if let (Some(over), Some(to)) = (over, to)
            && board.piece_at(to).is_none()
            && board.piece_at(over).is_some_and(|mid| mid.color != pc.color)
        {
            out.push(Move::jump(from, to, over));
        }
    }
    out
}

fn simple_moves_into(board: &Board, from: u8, out: &mut Vec<Move>) {
    let Some(pc) = board.piece_at(from) else {
        return;
    };
    let r = row_of(from);
    let c = col_of(from);
    for &(dr, dc) in pc.directions() {
        if let Some(to) = sq(r + dr, c + dc)
            && board.piece_at(to).is_none()
        {
            out.push(Move::new(from, to));
        }
    }
}

fn owns(board: &Board, from: u8, color: Color) -> bool {
    board.piece_at(from).is_some_and(|pc| pc.color == color)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
