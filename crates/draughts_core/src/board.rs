use crate::movegen::legal_moves;
use crate::types::*;

/// The 8x8 grid plus live-piece and king counts. King counts are derived:
/// every mutation ends with a full-grid recount, they are never adjusted
/// independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    red_count: u8,
    black_count: u8,
    red_kings: u8,
    black_kings: u8,
}

impl Board {
    /// Standard starting layout: 12 Black men on rows 0..3, 12 Red men on
    /// rows 5..8, dark squares only.
    pub fn startpos() -> Self {
        let mut squares = [None; 64];
        for s in 0..64u8 {
            if !is_dark(s) {
                continue;
            }
            let row = row_of(s);
            if row < 3 {
                squares[s as usize] = Some(Piece::man(Color::Black));
            } else if row > 4 {
                squares[s as usize] = Some(Piece::man(Color::Red));
            }
        }
        Board {
            squares,
            red_count: 12,
            black_count: 12,
            red_kings: 0,
            black_kings: 0,
        }
    }

    /// Parse an 8-line board diagram used by tests and the CLI:
    /// `.` empty, `r`/`R` red man/king, `b`/`B` black man/king.
    /// Whitespace inside a line is ignored; counts are rebuilt from the
    /// parsed grid.
    pub fn from_diagram(text: &str) -> Self {
        let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert!(rows.len() == 8, "Invalid diagram: expected 8 rows");

        let mut squares = [None; 64];
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            assert!(cells.len() == 8, "Invalid diagram: row {} needs 8 cells", row);
            for (col, ch) in cells.iter().enumerate() {
                let pc = match ch {
                    '.' => None,
                    'r' => Some(Piece::man(Color::Red)),
                    'R' => Some(Piece::king(Color::Red)),
                    'b' => Some(Piece::man(Color::Black)),
                    'B' => Some(Piece::king(Color::Black)),
                    _ => panic!("Invalid diagram char: {}", ch),
                };
                squares[row * 8 + col] = pc;
            }
        }

        let mut board = Board {
            squares,
            red_count: 0,
            black_count: 0,
            red_kings: 0,
            black_kings: 0,
        };
        board.red_count = board.count_color(Color::Red);
        board.black_count = board.count_color(Color::Black);
        board.recount_kings();
        board
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }

    pub fn count(&self, color: Color) -> u8 {
        match color {
            Color::Red => self.red_count,
            Color::Black => self.black_count,
        }
    }

    pub fn kings(&self, color: Color) -> u8 {
        match color {
            Color::Red => self.red_kings,
            Color::Black => self.black_kings,
        }
    }

    /// Relocate the piece on `from` to `to`, removing the jumped piece when
    /// the move spans two rows. Promotion is re-evaluated for the landing
    /// square and king counts are rebuilt from the grid. Returns whether a
    /// piece was captured.
    ///
    /// Legality is the caller's responsibility; this only mutates the grid
    /// and counts.
    pub fn apply_move(&mut self, from: u8, to: u8) -> bool {
        let piece = self.squares[from as usize].take();
        self.squares[to as usize] = piece;

        let is_capture = (row_of(from) - row_of(to)).abs() == 2;
        if is_capture {
            let mid_row = (row_of(from) + row_of(to)) / 2;
            let mid_col = (col_of(from) + col_of(to)) / 2;
            let mid = (mid_row as u8) * 8 + (mid_col as u8);
            if let Some(taken) = self.squares[mid as usize].take() {
                match taken.color {
                    Color::Red => self.red_count -= 1,
                    Color::Black => self.black_count -= 1,
                }
            }
        }

        self.check_for_promotion(to);
        self.recount_kings();
        is_capture
    }

    /// Red is promoted on row 0, Black on row 7.
    fn check_for_promotion(&mut self, sq: u8) {
        if let Some(pc) = self.squares[sq as usize]
            && pc.kind == PieceKind::Man
        {
            let row = row_of(sq);
            if (pc.color == Color::Red && row == 0) || (pc.color == Color::Black && row == 7) {
                self.squares[sq as usize] = Some(Piece::king(pc.color));
            }
        }
    }

    fn recount_kings(&mut self) {
        self.red_kings = 0;
        self.black_kings = 0;
        for pc in self.squares.iter().flatten() {
            if pc.is_king() {
                match pc.color {
                    Color::Red => self.red_kings += 1,
                    Color::Black => self.black_kings += 1,
                }
            }
        }
    }

    fn count_color(&self, color: Color) -> u8 {
        self.squares
            .iter()
            .flatten()
            .filter(|pc| pc.color == color)
            .count() as u8
    }

    /// A side loses when it has no pieces left or no legal moves. Checked
    /// between moves only, never in the middle of a jump chain.
    pub fn winner(&self) -> Option<Color> {
        if self.red_count == 0 || legal_moves(self, Color::Red).is_empty() {
            return Some(Color::Black);
        }
        if self.black_count == 0 || legal_moves(self, Color::Black).is_empty() {
            return Some(Color::Red);
        }
        None
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let ch = match self.squares[row * 8 + col] {
                    None => '.',
                    Some(pc) => match (pc.color, pc.kind) {
                        (Color::Red, PieceKind::Man) => 'r',
                        (Color::Red, PieceKind::King) => 'R',
                        (Color::Black, PieceKind::Man) => 'b',
                        (Color::Black, PieceKind::King) => 'B',
                    },
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
