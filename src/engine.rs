//! Move selection
//!
//! The engine scores every empty cell with the single-ply heuristic in
//! [`crate::eval`] plus a center bias, then picks uniformly at random among
//! the cells that share the maximum score.
//!
//! # Example
//!
//! ```
//! use lordline::{AIEngine, Board, Piece, Player, Pos, Unit};
//!
//! let mut engine = AIEngine::with_seed(7);
//! let mut board = Board::new();
//! board.place_piece(Pos::new(4, 4), Piece::lord(Player::Black));
//!
//! let result = engine.choose_move(&board, Unit::Lord, Player::White);
//! assert!(board.is_empty(result.best_move));
//! println!("Best move: {:?} (score {:?})", result.best_move, result.score);
//! ```

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::board::{Board, Player, Pos, Unit};
use crate::eval::{center_bias, evaluate_move, ScoreWeights};

/// Returned when the board has no empty cell left
pub const FALLBACK_MOVE: Pos = Pos { row: 5, col: 5 };

/// Result of a move selection with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen cell
    pub best_move: Pos,
    /// Score of the chosen cell including center bias; `None` for the fallback
    pub score: Option<i64>,
    /// Every cell that reached the maximum, row-major
    pub ties: Vec<Pos>,
    /// Number of empty cells scored
    pub candidates: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn fallback(time_ms: u64) -> Self {
        Self {
            best_move: FALLBACK_MOVE,
            score: None,
            ties: Vec::new(),
            candidates: 0,
            time_ms,
        }
    }

    /// True when no candidate existed and the fixed fallback was returned
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.candidates == 0
    }
}

/// Single-ply move selector.
///
/// # Configuration
///
/// - Scoring weights (see [`ScoreWeights`])
/// - Whether candidate cells are scored on the rayon pool
/// - The random source used for tie-breaking
pub struct AIEngine {
    weights: ScoreWeights,
    parallel: bool,
    rng: SmallRng,
}

impl AIEngine {
    /// Create an engine with default weights, parallel scoring and an
    /// entropy-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
            parallel: true,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create an engine with custom weights.
    ///
    /// # Example
    ///
    /// ```
    /// use lordline::{AIEngine, ScoreWeights};
    ///
    /// let weights = ScoreWeights { center_bias: 500, ..ScoreWeights::default() };
    /// let engine = AIEngine::with_config(weights, false);
    /// assert!(!engine.is_parallel());
    /// ```
    #[must_use]
    pub fn with_config(weights: ScoreWeights, parallel: bool) -> Self {
        Self {
            weights,
            parallel,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create an engine with default weights and a deterministic random source
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            weights: ScoreWeights::default(),
            parallel: true,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Choose a cell for `mover` holding `hand`, breaking ties with the
    /// engine's own random source.
    pub fn choose_move(&mut self, board: &Board, hand: Unit, mover: Player) -> MoveResult {
        select_move(board, hand, mover, &self.weights, self.parallel, &mut self.rng)
    }

    /// Choose a cell, breaking ties with the supplied random source
    pub fn choose_move_with_rng<R: Rng + ?Sized>(
        &self,
        board: &Board,
        hand: Unit,
        mover: Player,
        rng: &mut R,
    ) -> MoveResult {
        select_move(board, hand, mover, &self.weights, self.parallel, rng)
    }

    /// Score every empty cell (heuristic plus center bias), row-major
    pub fn score_candidates(&self, board: &Board, hand: Unit, mover: Player) -> Vec<(Pos, i64)> {
        score_candidates(board, hand, mover, &self.weights, self.parallel)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn score_candidates(
    board: &Board,
    hand: Unit,
    mover: Player,
    weights: &ScoreWeights,
    parallel: bool,
) -> Vec<(Pos, i64)> {
    let empties: Vec<Pos> = board.empty_cells().collect();
    // Each evaluation clones its own scratch board from the shared live one
    let score = |&pos: &Pos| {
        (
            pos,
            evaluate_move(board, pos, hand, mover, weights) + center_bias(pos, weights),
        )
    };

    if parallel {
        empties.par_iter().map(score).collect()
    } else {
        empties.iter().map(score).collect()
    }
}

fn select_move<R: Rng + ?Sized>(
    board: &Board,
    hand: Unit,
    mover: Player,
    weights: &ScoreWeights,
    parallel: bool,
    rng: &mut R,
) -> MoveResult {
    let start = Instant::now();
    let scored = score_candidates(board, hand, mover, weights, parallel);

    let Some(best) = scored.iter().map(|&(_, score)| score).max() else {
        tracing::warn!("no empty cell left, returning fallback move");
        return MoveResult::fallback(start.elapsed().as_millis() as u64);
    };

    let ties: Vec<Pos> = scored
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(pos, _)| pos)
        .collect();

    // Drawn once, after every candidate has been scored
    let best_move = ties.choose(rng).copied().unwrap_or(FALLBACK_MOVE);
    let time_ms = start.elapsed().as_millis() as u64;

    tracing::debug!(
        mover = mover.name(),
        hand = hand.name(),
        row = best_move.row,
        col = best_move.col,
        score = best,
        ties = ties.len(),
        candidates = scored.len(),
        time_ms,
        "move selected"
    );

    MoveResult {
        best_move,
        score: Some(best),
        ties,
        candidates: scored.len(),
        time_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Facing, MageAxis, Piece};
    use crate::eval::PatternScore;

    const B: Player = Player::Black;
    const W: Player = Player::White;

    fn lords(board: &mut Board, player: Player, cells: &[(u8, u8)]) {
        for &(r, c) in cells {
            board.place_piece(Pos::new(r, c), Piece::lord(player));
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert!(engine.is_parallel());
        assert_eq!(*engine.weights(), ScoreWeights::default());
    }

    #[test]
    fn test_empty_board_prefers_center() {
        let board = Board::new();
        let mut engine = AIEngine::with_seed(1);
        let result = engine.choose_move(&board, Unit::Lord, B);

        let center = [Pos::new(4, 4), Pos::new(4, 5), Pos::new(5, 4), Pos::new(5, 5)];
        assert_eq!(result.ties, center.to_vec());
        assert!(center.contains(&result.best_move));
        assert_eq!(result.candidates, 100);
    }

    #[test]
    fn test_tie_break_covers_whole_set() {
        let board = Board::new();
        let engine = AIEngine::with_config(ScoreWeights::default(), false);
        let mut rng = SmallRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(engine.choose_move_with_rng(&board, Unit::Lord, B, &mut rng).best_move);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let a = AIEngine::with_seed(42).choose_move(&board, Unit::Lord, W);
        let b = AIEngine::with_seed(42).choose_move(&board, Unit::Lord, W);
        assert_eq!(a.best_move, b.best_move);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut board = Board::new();
        lords(&mut board, W, &[(2, 2), (2, 3), (3, 3)]);
        lords(&mut board, B, &[(5, 5), (6, 5)]);
        board.place_piece(Pos::new(7, 1), Piece::mage(W, MageAxis::Vertical));

        let hand = Unit::Knight { facing: Facing::Left };
        let par = AIEngine::with_config(ScoreWeights::default(), true);
        let seq = AIEngine::with_config(ScoreWeights::default(), false);
        assert_eq!(
            par.score_candidates(&board, hand, B),
            seq.score_candidates(&board, hand, B)
        );
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        lords(&mut board, B, &[(7, 2), (7, 3), (7, 4), (7, 5)]);
        board.place_piece(Pos::new(7, 1), Piece::lord(W));
        let mut engine = AIEngine::with_seed(3);
        let result = engine.choose_move(&board, Unit::Lord, B);
        assert_eq!(result.best_move, Pos::new(7, 6));
        assert!(result.score.unwrap() > PatternScore::BLOCK_LIVE_FOUR);
    }

    #[test]
    fn test_blocks_single_live_four() {
        let mut board = Board::new();
        lords(&mut board, W, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        // Mover has attacking material elsewhere
        lords(&mut board, B, &[(6, 3), (6, 4), (6, 5)]);
        let mut engine = AIEngine::with_seed(11);
        let result = engine.choose_move(&board, Unit::Lord, B);
        assert_eq!(result.best_move, Pos::new(0, 4));
        assert_eq!(result.ties, vec![Pos::new(0, 4)]);
    }

    #[test]
    fn test_avoids_trapped_cells() {
        let mut board = Board::new();
        board.place_piece(Pos::new(4, 4), Piece::mage(W, MageAxis::Horizontal));
        let mut engine = AIEngine::with_seed(5);
        let result = engine.choose_move(&board, Unit::Lord, B);
        let trapped = [Pos::new(3, 4), Pos::new(5, 4), Pos::new(4, 3), Pos::new(4, 5)];
        assert!(!trapped.contains(&result.best_move));
    }

    #[test]
    fn test_fallback_on_full_board() {
        let mut board = Board::new();
        for pos in Pos::all() {
            board.place_piece(pos, Piece::lord(if (pos.row + pos.col) % 2 == 0 { B } else { W }));
        }
        let mut engine = AIEngine::new();
        let result = engine.choose_move(&board, Unit::Lord, B);
        assert!(result.is_fallback());
        assert_eq!(result.best_move, FALLBACK_MOVE);
        assert_eq!(result.score, None);
    }

    #[test]
    fn test_chosen_cell_is_empty() {
        let mut board = Board::new();
        lords(&mut board, B, &[(4, 4), (4, 5), (5, 4)]);
        lords(&mut board, W, &[(5, 5)]);
        let mut engine = AIEngine::with_seed(8);
        let result = engine.choose_move(&board, Unit::Mage { axis: MageAxis::Vertical }, W);
        assert!(board.is_empty(result.best_move));
    }
}
