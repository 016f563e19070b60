use crate::player::Player;

/// Contents of one board square. The packed board layout stores the
/// two-bit codes returned by [`Cell::to_bits`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    pub fn to_char(&self) -> char {
        match self.player() {
            Some(p) => p.to_char(),
            None => '.',
        }
    }

    #[inline]
    pub(crate) const fn to_bits(self) -> u32 {
        match self {
            Cell::Empty => 0b00,
            Cell::Black => 0b01,
            Cell::White => 0b10,
        }
    }

    #[inline]
    pub(crate) fn from_bits(bits: u32) -> Cell {
        // 0b11 is never written by set, so it only shows up on corruption;
        // treat it as Empty rather than widening the return type.
        match bits & 0b11 {
            0b01 => Cell::Black,
            0b10 => Cell::White,
            _ => Cell::Empty,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_round_trip() {
        for cell in [Cell::Empty, Cell::Black, Cell::White] {
            assert_eq!(Cell::from_bits(cell.to_bits()), cell);
        }
    }

    #[test]
    fn test_bit_codes() {
        assert_eq!(Cell::Empty.to_bits(), 0);
        assert_eq!(Cell::Black.to_bits(), 1);
        assert_eq!(Cell::White.to_bits(), 2);
    }

    #[test]
    fn test_player() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::Black.player(), Some(Player::Black));
        assert_eq!(Cell::White.player(), Some(Player::White));
        assert_eq!(Cell::from(Player::White), Cell::White);
    }
}
