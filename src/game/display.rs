use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::color::Color;
use crate::board::square::{Square, COLS, ROWS};
use crate::board::Board;
use crate::chess_move::Move;

const FILES: &str = "     a  b  c  d  e  f  g  h  i\n";

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        // writing to a String cannot fail
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    /// Draws the board into the buffer: ranks 9 to 0 top to bottom, the river
    /// between rows 4 and 5, palace squares marked with `+` and the squares of
    /// the last move wrapped in brackets.
    pub fn draw_board(&mut self, board: &Board, last_move: Option<Move>) {
        self.buffer.push_str(FILES);
        for row in 0..ROWS {
            let _ = write!(self.buffer, "  {} ", 9 - row);
            for col in 0..COLS {
                let square = Square::new(row, col);
                let marked = last_move.map_or(false, |mv| mv.from == square || mv.to == square);
                let symbol = match board.get(square) {
                    Some((piece, color)) => piece.to_fen_char(color),
                    None if square.is_in_palace(Color::Red) || square.is_in_palace(Color::Black) => '+',
                    None => '.',
                };
                if marked {
                    let _ = write!(self.buffer, "[{}]", symbol);
                } else {
                    let _ = write!(self.buffer, " {} ", symbol);
                }
            }
            let _ = writeln!(self.buffer, " {}", 9 - row);
            if row == 4 {
                self.buffer.push_str("    ~~~~~~~~~~~~~~~~~~~~~~~~~~~\n");
            }
        }
        self.buffer.push_str(FILES);
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Color,
        last_move: Option<Move>,
        stats: Option<&str>,
    ) {
        self.clear();
        self.draw_board(board, last_move);

        let _ = writeln!(self.buffer, "\nTurn: {}", current_turn);
        if let Some(mv) = last_move {
            let _ = writeln!(self.buffer, "Last move: {}", mv);
        }
        if let Some(stats) = stats {
            let _ = writeln!(self.buffer, "\n{}", stats);
        }

        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
