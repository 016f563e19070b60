use std::fmt;

use crate::board::{Board, Layout};
use crate::cell::Cell;
use crate::error::GameError;
use crate::outcome::Outcome;
use crate::player::Player;
use crate::position::Position;
use crate::queue::PositionQueue;
use crate::r#move::Move;

/// Direction vectors scanned for runs, as (row, col) steps: diagonal
/// down-right, horizontal, vertical, diagonal down-left.
const RUN_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (0, 1), (1, 0), (1, -1)];

/// A Topsy-Turvy game: one board, one placement queue per color, and the
/// alternating mover. The game owns all three for its whole lifetime; a
/// failed move leaves all of them untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    black_queue: PositionQueue,
    white_queue: PositionQueue,
    turn: Player,
    run: u16,
}

impl Game {
    /// Start a game on an empty `width x height` board where `run`
    /// consecutive pieces win. Errors if a dimension is zero or if no
    /// straight line of `run` cells fits on the board at all.
    pub fn new(run: u16, width: u16, height: u16, layout: Layout) -> Result<Game, GameError> {
        let board = Board::new(width, height, layout)?;
        if run == 0 || (run > width && run > height) {
            return Err(GameError::RunLength { run, width, height });
        }
        Ok(Game {
            board,
            black_queue: PositionQueue::new(),
            white_queue: PositionQueue::new(),
            turn: Player::Black,
            run,
        })
    }

    pub fn width(&self) -> u16 {
        self.board.width()
    }

    pub fn height(&self) -> u16 {
        self.board.height()
    }

    pub fn run(&self) -> u16 {
        self.run
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn get_piece(&self, pos: Position) -> Result<Cell, GameError> {
        self.board.get(pos)
    }

    /// Chronological positions of `player`'s pieces currently on the board,
    /// oldest first.
    pub fn queue(&self, player: Player) -> &PositionQueue {
        match player {
            Player::Black => &self.black_queue,
            Player::White => &self.white_queue,
        }
    }

    fn queue_mut(&mut self, player: Player) -> &mut PositionQueue {
        match player {
            Player::Black => &mut self.black_queue,
            Player::White => &mut self.white_queue,
        }
    }

    /// Dispatch a parsed move. Disarray always succeeds; the other two
    /// report whether they changed anything.
    pub fn apply(&mut self, mv: Move) -> bool {
        match mv {
            Move::Drop { col } => self.drop_piece(col),
            Move::Disarray => {
                self.disarray();
                true
            }
            Move::Offset => self.offset(),
        }
    }

    /// Drop the mover's piece into `column`, landing on the lowest empty
    /// square. Returns `false` without changing anything if the column is
    /// out of range or full.
    pub fn drop_piece(&mut self, column: u16) -> bool {
        if column >= self.board.width() {
            return false;
        }

        for row in (0..self.board.height()).rev() {
            if self.board.cell_unchecked(row, column).is_empty() {
                let mover = self.turn;
                self.board.set_unchecked(row, column, mover.into());
                self.queue_mut(mover).push(Position::new(row, column));
                self.turn = mover.opposite();
                return true;
            }
        }
        false
    }

    /// Reverse the stacking order of every column independently — the net
    /// effect of flipping the board upside down and letting the pieces
    /// re-settle. Always succeeds; a no-op board still costs the turn.
    pub fn disarray(&mut self) {
        let heights = self.board.reverse_column_stacks();
        let board_height = self.board.height();
        remap_rows(&mut self.black_queue, board_height, &heights);
        remap_rows(&mut self.white_queue, board_height, &heights);
        self.turn = self.turn.opposite();
    }

    /// Remove the mover's oldest piece and the opponent's newest, then let
    /// the pieces above each removed square fall one row. Returns `false`
    /// without changing anything if either side has no pieces on the board.
    pub fn offset(&mut self) -> bool {
        if self.black_queue.is_empty() || self.white_queue.is_empty() {
            return false;
        }

        let (own_oldest, opp_newest) = match self.turn {
            Player::Black => (
                self.black_queue.pop_oldest(),
                self.white_queue.pop_newest(),
            ),
            Player::White => (
                self.white_queue.pop_oldest(),
                self.black_queue.pop_newest(),
            ),
        };
        // Both queues were just verified non-empty.
        let (Some(c1), Some(c2)) = (own_oldest, opp_newest) else {
            return false;
        };

        self.board.set_unchecked(c1.row, c1.col, Cell::Empty);
        self.board.set_unchecked(c2.row, c2.col, Cell::Empty);
        self.settle_column(c1);
        self.settle_column(c2);

        shift_rows_below(&mut self.black_queue, c1, c2);
        shift_rows_below(&mut self.white_queue, c1, c2);

        self.turn = self.turn.opposite();
        true
    }

    /// Shift every cell above `removed` down one row; the top of the column
    /// becomes empty.
    fn settle_column(&mut self, removed: Position) {
        for row in (1..=removed.row).rev() {
            let above = self.board.cell_unchecked(row - 1, removed.col);
            self.board.set_unchecked(row, removed.col, above);
        }
        self.board.set_unchecked(0, removed.col, Cell::Empty);
    }

    /// Scan the whole board for completed runs. Both colors completing a
    /// run in the same scan is a draw, as is a full board with no run.
    pub fn outcome(&self) -> Outcome {
        let mut black_runs = false;
        let mut white_runs = false;
        let mut none_empty = true;

        for row in 0..self.board.height() {
            for col in 0..self.board.width() {
                let cell = self.board.cell_unchecked(row, col);
                let Some(player) = cell.player() else {
                    none_empty = false;
                    continue;
                };

                let made_run = RUN_DIRECTIONS
                    .iter()
                    .any(|&(dir_row, dir_col)| self.check_run(row, col, dir_row, dir_col, cell));
                if made_run {
                    match player {
                        Player::Black => black_runs = true,
                        Player::White => white_runs = true,
                    }
                }
            }
        }

        match (black_runs, white_runs) {
            (true, true) => Outcome::Draw,
            (true, false) => Outcome::BlackWin,
            (false, true) => Outcome::WhiteWin,
            (false, false) if none_empty => Outcome::Draw,
            (false, false) => Outcome::InProgress,
        }
    }

    /// `run` consecutive cells of `cell`'s color starting at (row, col) in
    /// one direction; fails on the first mismatch or out-of-bounds square.
    fn check_run(&self, row: u16, col: u16, dir_row: i32, dir_col: i32, cell: Cell) -> bool {
        let height = self.board.height() as i32;
        let width = self.board.width() as i32;

        for i in 0..self.run as i32 {
            let r = row as i32 + i * dir_row;
            let c = col as i32 + i * dir_col;
            if r < 0 || c < 0 || r >= height || c >= width {
                return false;
            }
            if self.board.cell_unchecked(r as u16, c as u16) != cell {
                return false;
            }
        }
        true
    }
}

/// Rewrite queue rows after the column stacks were reversed. One pass over
/// the queue, driven by the stack heights recorded during reversal rather
/// than the live board. The doubled midpoint keeps the arithmetic integral:
/// an entry sitting exactly on the center of an odd stack does not move.
fn remap_rows(queue: &mut PositionQueue, board_height: u16, stack_heights: &[u16]) {
    let height = board_height as u32;
    for pos in queue.iter_mut() {
        let stack = stack_heights[pos.col as usize] as u32;
        let row = pos.row as u32;
        let mid = 2 * height - (stack - 1) - 2;
        if 2 * row < mid {
            pos.row = ((height - 1) - (row - (height - stack))) as u16;
        } else if 2 * row > mid {
            pos.row = ((height - stack) + (height - 1 - row)) as u16;
        }
    }
}

/// After an offset removed `c1` and `c2`, every entry above a removed square
/// in its column fell one row. Both conditions test the entry's row as it
/// was before either increment: an entry above both removals in a shared
/// column falls twice.
fn shift_rows_below(queue: &mut PositionQueue, c1: Position, c2: Position) {
    for pos in queue.iter_mut() {
        let original = *pos;
        if original.col == c1.col && original.row < c1.row {
            pos.row += 1;
        }
        if original.col == c2.col && original.row < c2.row {
            pos.row += 1;
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game(turn: {}, outcome: {})\n{}",
            self.turn,
            self.outcome(),
            self.board
        )
    }
}
