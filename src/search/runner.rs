//! Breadth-first search over board configurations.

use log::{debug, info, trace};
use std::collections::{HashSet, VecDeque};

use super::config::SearchConfig;
use super::types::{Board, Move};
use super::SearchError;

/// A shortest move sequence from `start` to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The board the search started from.
    pub start: Board,

    /// Moves of the blank, in order.
    pub moves: Vec<Move>,

    /// Number of distinct boards dequeued and expanded.
    pub expanded: usize,
}

impl Solution {
    /// Number of moves in the solution.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Replays the solution one move at a time.
    pub fn playback(&self) -> Playback {
        Playback::new(self.start, self.moves.clone())
    }
}

/// One replayed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub mv: Move,
    /// Board after the move.
    pub board: Board,
    /// Moves made so far, including this one.
    pub move_count: usize,
}

/// Finite, single-pass replay of a move sequence.
///
/// Interactive front ends pull one [`Step`] per timer tick instead of
/// jumping straight to the goal.
#[derive(Debug, Clone)]
pub struct Playback {
    board: Board,
    moves: std::vec::IntoIter<Move>,
    move_count: usize,
}

impl Playback {
    pub fn new(start: Board, moves: Vec<Move>) -> Self {
        Self {
            board: start,
            moves: moves.into_iter(),
            move_count: 0,
        }
    }

    /// Board after the moves replayed so far.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Moves still to replay.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Iterator for Playback {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let mv = self.moves.next()?;
        // Solver output is legal by construction; a foreign illegal move
        // ends the replay.
        self.board = self.board.apply(mv)?;
        self.move_count += 1;
        Some(Step {
            mv,
            board: self.board,
            move_count: self.move_count,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.moves.len()))
    }
}

/// Applies `moves` in order, or `None` if any of them is illegal.
pub fn apply_moves(start: Board, moves: &[Move]) -> Option<Board> {
    moves.iter().try_fold(start, |board, &mv| board.apply(mv))
}

/// Solves `start` with the default (unbounded) configuration.
pub fn solve(start: &Board) -> Result<Solution, SearchError> {
    solve_with(start, &SearchConfig::default())
}

/// Finds a shortest move sequence from `start` to `123456780`.
///
/// Boards are expanded in FIFO order, so the first goal dequeued has a
/// minimal path length.
///
/// # Errors
///
/// - [`SearchError::Unsolvable`] if `start` has the wrong inversion
///   parity. Without this check the search would sweep the whole
///   reachable half of the state space before giving up.
/// - [`SearchError::NodeLimit`] if `config.max_expanded` is exceeded.
/// - [`SearchError::Exhausted`] if the frontier runs dry.
pub fn solve_with(start: &Board, config: &SearchConfig) -> Result<Solution, SearchError> {
    config.validate()?;
    if !start.is_solvable() {
        return Err(SearchError::Unsolvable(*start));
    }

    info!("bfs: solving {start}");

    let mut frontier: VecDeque<(Board, Vec<Move>)> = VecDeque::new();
    frontier.push_back((*start, Vec::new()));
    let mut visited: HashSet<Board> = HashSet::new();
    let mut expanded = 0usize;

    while let Some((board, path)) = frontier.pop_front() {
        if board.is_goal() {
            info!(
                "bfs: solved in {} moves, {expanded} boards expanded",
                path.len()
            );
            return Ok(Solution {
                start: *start,
                moves: path,
                expanded,
            });
        }
        if !visited.insert(board) {
            continue;
        }

        expanded += 1;
        if let Some(limit) = config.max_expanded {
            if expanded > limit {
                debug!("bfs: node limit {limit} reached at depth {}", path.len());
                return Err(SearchError::NodeLimit { limit });
            }
        }
        trace!("bfs: expand {board} at depth {}", path.len());

        for (mv, next) in board.successors() {
            if visited.contains(&next) {
                continue;
            }
            let mut next_path = Vec::with_capacity(path.len() + 1);
            next_path.extend_from_slice(&path);
            next_path.push(mv);
            frontier.push_back((next, next_path));
        }
    }

    Err(SearchError::Exhausted { expanded })
}
