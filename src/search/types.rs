//! 8-puzzle board and moves.

use rand::Rng;
use std::fmt;

use super::SearchError;

/// Number of cells on the 3×3 board.
pub const CELLS: usize = 9;

const WIDTH: usize = 3;

/// Symbol for the blank cell.
pub const BLANK: u8 = 0;

/// The solved configuration.
pub const GOAL: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, BLANK];

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order used by the solver.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The move that undoes this one.
    pub fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Target index of the blank, or `None` if the move leaves the grid.
    fn target(self, blank: usize) -> Option<usize> {
        match self {
            Move::Up => blank.checked_sub(WIDTH),
            Move::Down => Some(blank + WIDTH).filter(|&i| i < CELLS),
            Move::Left if blank % WIDTH != 0 => Some(blank - 1),
            Move::Right if blank % WIDTH != WIDTH - 1 => Some(blank + 1),
            Move::Left | Move::Right => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        f.write_str(name)
    }
}

/// A 3×3 sliding-puzzle configuration in row-major order.
///
/// Always holds exactly one blank and each tile 1–8 exactly once.
///
/// With the `serde` feature, a board is stored as its nine cells and
/// validated by [`Board::from_cells`] on the way back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[u8; 9]", into = "[u8; 9]")
)]
pub struct Board {
    cells: [u8; CELLS],
    blank: u8,
}

impl Board {
    /// The solved board `123456780`.
    pub fn goal() -> Self {
        Self {
            cells: GOAL,
            blank: (CELLS - 1) as u8,
        }
    }

    /// Validates a cell array.
    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self, SearchError> {
        let mut seen = [false; CELLS];
        for &c in &cells {
            let idx = c as usize;
            if idx >= CELLS {
                return Err(SearchError::InvalidBoard(format!("symbol {c} out of range 0-8")));
            }
            if seen[idx] {
                return Err(SearchError::InvalidBoard(format!("symbol {c} appears twice")));
            }
            seen[idx] = true;
        }
        let blank = cells
            .iter()
            .position(|&c| c == BLANK)
            .ok_or_else(|| SearchError::InvalidBoard("no blank".into()))?;
        Ok(Self {
            cells,
            blank: blank as u8,
        })
    }

    /// Parses a nine-digit string such as `"123456780"` (0 is the blank).
    pub fn parse(s: &str) -> Result<Self, SearchError> {
        let digits: Vec<u8> = s
            .chars()
            .map(|ch| {
                ch.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| SearchError::InvalidBoard(format!("unexpected symbol {ch:?}")))
            })
            .collect::<Result<_, _>>()?;
        let cells: [u8; CELLS] = digits.try_into().map_err(|v: Vec<u8>| {
            SearchError::InvalidBoard(format!("expected {CELLS} symbols, got {}", v.len()))
        })?;
        Self::from_cells(cells)
    }

    /// Uniformly shuffles all nine symbols.
    ///
    /// Half of the results cannot reach the goal; see
    /// [`is_solvable`](Self::is_solvable).
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = GOAL;
        crate::random::shuffle(&mut cells, rng);
        let blank = cells.iter().position(|&c| c == BLANK).unwrap_or(CELLS - 1);
        Self {
            cells,
            blank: blank as u8,
        }
    }

    /// Shuffles until the board is solvable.
    pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let board = Self::shuffled(rng);
            if board.is_solvable() {
                return board;
            }
        }
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Index of the blank cell.
    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    pub fn is_goal(&self) -> bool {
        self.cells == GOAL
    }

    /// Whether the goal is reachable: on a 3-wide board the tile
    /// inversion count must be even.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&c| c != BLANK).collect();
        let inversions = tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|&b| b < a).count())
            .sum::<usize>();
        inversions % 2 == 0
    }

    /// Slides the blank in direction `mv`, or `None` if it would leave the grid.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let from = self.blank();
        let to = mv.target(from)?;
        let mut cells = self.cells;
        cells.swap(from, to);
        Some(Board {
            cells,
            blank: to as u8,
        })
    }

    /// Moves that keep the blank on the grid, in [`Move::ALL`] order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL
            .into_iter()
            .filter(move |mv| mv.target(self.blank()).is_some())
    }

    /// Neighbouring boards paired with the move that produces them.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |mv| self.apply(mv).map(|b| (mv, b)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cells {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl TryFrom<[u8; CELLS]> for Board {
    type Error = SearchError;

    fn try_from(cells: [u8; CELLS]) -> Result<Self, Self::Error> {
        Board::from_cells(cells)
    }
}

impl From<Board> for [u8; CELLS] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl std::str::FromStr for Board {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}
