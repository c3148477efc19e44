use core::fmt;

use smallvec::SmallVec;

use crate::board::square::Square;

/// Move lists rarely exceed this many entries, so they stay on the stack.
pub type MoveList = SmallVec<[Move; 64]>;

/// A (from, to) pair of grid coordinates. The null move has both ends off the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const NULL: Move = Move {
        from: Square::NONE,
        to: Square::NONE,
    };

    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn from_coords(from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> Self {
        Self::new(Square::new(from_row, from_col), Square::new(to_row, to_col))
    }

    pub fn is_null(&self) -> bool {
        self.from.row < 0
    }

    /// Dense index used by the history heuristic.
    pub fn history_index(&self) -> usize {
        debug_assert!(!self.is_null(), "null move has no history index");
        self.from.index() * 90 + self.to.index()
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NULL
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "0000")
        } else {
            write!(f, "{}{}", self.from, self.to)
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_move() {
        assert!(Move::NULL.is_null());
        assert!(!Move::from_coords(7, 7, 7, 4).is_null());
        assert_eq!(Move::default(), Move::NULL);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::from_coords(7, 7, 7, 4).to_string(), "h2e2");
        assert_eq!(Move::NULL.to_string(), "0000");
    }

    #[test]
    fn test_history_index_is_unique() {
        let a = Move::from_coords(0, 0, 0, 1);
        let b = Move::from_coords(0, 1, 0, 0);
        assert_ne!(a.history_index(), b.history_index());
        assert!(Move::from_coords(9, 8, 9, 8).history_index() < 90 * 90);
    }
}
