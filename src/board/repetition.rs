use super::Board;

/// Result of a repetition scan as a small bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Repetition(u8);

impl Repetition {
    pub const NONE: Repetition = Repetition(0);
    pub const REPEATED: u8 = 1;
    /// The side to move gave check with every one of its moves in the cycle.
    pub const SELF_PERPETUAL_CHECK: u8 = 2;
    /// The opponent gave check with every one of its moves in the cycle.
    pub const OPPONENT_PERPETUAL_CHECK: u8 = 4;

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_repeated(&self) -> bool {
        self.0 & Self::REPEATED != 0
    }

    pub fn self_perpetual_check(&self) -> bool {
        self.0 & Self::SELF_PERPETUAL_CHECK != 0
    }

    pub fn opponent_perpetual_check(&self) -> bool {
        self.0 & Self::OPPONENT_PERPETUAL_CHECK != 0
    }
}

impl Board {
    /// Walks back through reversible plies looking for `required_occurrences`
    /// earlier positions with the current key, tracking whether either side
    /// checked on every one of its moves along the way.
    pub fn repetition_status(&self, required_occurrences: u32) -> Repetition {
        debug_assert!(required_occurrences > 0, "repetition needs at least one occurrence");
        let mut remaining = required_occurrences;
        let mut self_side = false;
        let mut self_perpetual = true;
        let mut opponent_perpetual = true;

        let mut index = self.history.len() - 1;
        while !self.history.move_at(index).is_null() && self.history.capture_at(index).is_none() {
            if self_side {
                self_perpetual &= self.history.check_at(index);
                if self.history.key_at(index) == self.key {
                    remaining -= 1;
                    if remaining == 0 {
                        let mut bits = Repetition::REPEATED;
                        if self_perpetual {
                            bits |= Repetition::SELF_PERPETUAL_CHECK;
                        }
                        if opponent_perpetual {
                            bits |= Repetition::OPPONENT_PERPETUAL_CHECK;
                        }
                        return Repetition(bits);
                    }
                }
            } else {
                opponent_perpetual &= self.history.check_at(index);
            }
            self_side = !self_side;
            index -= 1;
        }

        Repetition::NONE
    }

    /// Score of a repeated position for the side to move: perpetual check loses
    /// for the checking side, anything else is a draw.
    pub fn repetition_value(&self, status: Repetition) -> i32 {
        let mut value = 0;
        if status.self_perpetual_check() {
            value += self.ban_value();
        }
        if status.opponent_perpetual_check() {
            value -= self.ban_value();
        }
        if value == 0 {
            self.draw_value()
        } else {
            value
        }
    }
}
