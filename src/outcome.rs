use crate::player::Player;

/// Result of scanning the current board. Computed on demand; the game never
/// caches it, so callers decide when a decisive value ends play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    BlackWin,
    WhiteWin,
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::BlackWin => Some(Player::Black),
            Outcome::WhiteWin => Some(Player::White),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::BlackWin => write!(f, "win for black"),
            Outcome::WhiteWin => write!(f, "win for white"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner() {
        assert_eq!(Outcome::BlackWin.winner(), Some(Player::Black));
        assert_eq!(Outcome::WhiteWin.winner(), Some(Player::White));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
    }

    #[test]
    fn test_is_decided() {
        assert!(!Outcome::InProgress.is_decided());
        assert!(Outcome::BlackWin.is_decided());
        assert!(Outcome::WhiteWin.is_decided());
        assert!(Outcome::Draw.is_decided());
        assert!(Outcome::Draw.is_draw());
    }
}
