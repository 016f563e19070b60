use crate::notation;

/// One turn's worth of input: a column drop or one of the two special moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Drop { col: u16 },
    Disarray,
    Offset,
}

impl Move {
    pub fn drop(col: u16) -> Self {
        Move::Drop { col }
    }

    /// Map a single input character to a move: `^` for disarray, `!` for
    /// offset, a column label (`0-9A-Za-z`) for a drop.
    pub fn from_token(token: char) -> Option<Move> {
        match token {
            '^' => Some(Move::Disarray),
            '!' => Some(Move::Offset),
            _ => notation::label_index(token).map(|col| Move::Drop { col }),
        }
    }

    pub fn col(&self) -> Option<u16> {
        match self {
            Move::Drop { col } => Some(*col),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Drop { col } => write!(f, "Drop({})", col),
            Move::Disarray => write!(f, "Disarray"),
            Move::Offset => write!(f, "Offset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_specials() {
        assert_eq!(Move::from_token('^'), Some(Move::Disarray));
        assert_eq!(Move::from_token('!'), Some(Move::Offset));
    }

    #[test]
    fn test_from_token_columns() {
        assert_eq!(Move::from_token('0'), Some(Move::drop(0)));
        assert_eq!(Move::from_token('9'), Some(Move::drop(9)));
        assert_eq!(Move::from_token('A'), Some(Move::drop(10)));
        assert_eq!(Move::from_token('z'), Some(Move::drop(61)));
        assert_eq!(Move::from_token(' '), None);
        assert_eq!(Move::from_token('?'), None);
    }

    #[test]
    fn test_col() {
        assert_eq!(Move::drop(3).col(), Some(3));
        assert_eq!(Move::Disarray.col(), None);
        assert_eq!(Move::Offset.col(), None);
    }
}
