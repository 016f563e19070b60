#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opposite(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Board glyph: `*` for Black, `o` for White.
    pub fn to_char(&self) -> char {
        match self {
            Player::Black => '*',
            Player::White => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Player> {
        match c {
            '*' | 'B' | 'b' => Some(Player::Black),
            'o' | 'W' | 'w' => Some(Player::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let player_str = match self {
            Player::Black => "Black",
            Player::White => "White",
        };
        write!(f, "{}", player_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Player::Black.opposite(), Player::White);
        assert_eq!(Player::White.opposite(), Player::Black);
    }

    #[test]
    fn test_char_round_trip() {
        assert_eq!(
            Player::from_char(Player::Black.to_char()),
            Some(Player::Black)
        );
        assert_eq!(
            Player::from_char(Player::White.to_char()),
            Some(Player::White)
        );
        assert_eq!(Player::from_char('.'), None);
    }
}
