/// A board square. Row 0 is the top of the board; row `height - 1` is the
/// floor that dropped pieces come to rest on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    pub fn new(row: u16, col: u16) -> Self {
        Position { row, col }
    }

    pub fn is_valid(&self, width: u16, height: u16) -> bool {
        self.row < height && self.col < width
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
