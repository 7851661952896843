//! Line threat classification
//!
//! From every lord of a player, each of the four line directions is walked
//! both ways (up to four steps) and classified as a live four, a four, or a
//! live three. Every lord on a line runs its own scan, so one physical line
//! is counted once per lord on it. The totals are therefore only meaningful
//! as before/after comparisons, not as a count of distinct threats.

use std::ops::{Add, AddAssign};

use crate::board::{Board, Player, Pos};
use crate::rules::win::DIRECTIONS;

/// Aggregate threat counts for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreatStats {
    pub live_four: u32,
    pub four: u32,
    pub live_three: u32,
}

impl ThreatStats {
    #[inline]
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }

    fn record(&mut self, shape: LineShape) {
        match shape {
            LineShape::LiveFour => self.live_four += 1,
            LineShape::Four => self.four += 1,
            LineShape::LiveThree => self.live_three += 1,
        }
    }
}

impl AddAssign for ThreatStats {
    fn add_assign(&mut self, rhs: Self) {
        self.live_four += rhs.live_four;
        self.four += rhs.four;
        self.live_three += rhs.live_three;
    }
}

impl Add for ThreatStats {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Shape of one line through a lord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    /// Exactly four with at least one open end
    LiveFour,
    /// Four or more with both ends closed (boxed four or overline)
    Four,
    /// Exactly three with both ends open
    LiveThree,
}

/// Walk from `pos` along `(dr, dc)` for up to 4 steps.
///
/// Returns the number of same-owner lords passed and whether the walk was
/// stopped by an empty cell. Off-board and any other piece close the end.
fn walk(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> (u32, bool) {
    let mut count = 0;
    for i in 1..5 {
        let Some(next) = pos.offset(dr, dc, i) else {
            return (count, false);
        };
        match board.get(next) {
            Some(piece) if piece.is_lord_of(player) => count += 1,
            Some(_) => return (count, false),
            None => return (count, true),
        }
    }
    (count, false)
}

/// Classify the line through `pos` along one direction
pub fn classify_line(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> Option<LineShape> {
    let (forward, forward_open) = walk(board, pos, dr, dc, player);
    let (backward, backward_open) = walk(board, pos, -dr, -dc, player);
    let count = 1 + forward + backward;

    if count == 4 && (forward_open || backward_open) {
        Some(LineShape::LiveFour)
    } else if count >= 4 && !forward_open && !backward_open {
        Some(LineShape::Four)
    } else if count == 3 && forward_open && backward_open {
        Some(LineShape::LiveThree)
    } else {
        None
    }
}

/// Classify all four lines through the lord at `pos`
pub fn classify_lines(board: &Board, pos: Pos, player: Player) -> ThreatStats {
    let mut stats = ThreatStats::default();
    for &(dr, dc) in &DIRECTIONS {
        if let Some(shape) = classify_line(board, pos, dr, dc, player) {
            stats.record(shape);
        }
    }
    stats
}

/// Sum the line classifications of every lord `player` owns
pub fn analyze_threats(board: &Board, player: Player) -> ThreatStats {
    board.lords(player).fold(ThreatStats::default(), |acc, pos| {
        acc + classify_lines(board, pos, player)
    })
}
