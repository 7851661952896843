//! Board representation for Lordline
//!
//! A 10x10 grid where each cell is either empty or holds one [`Piece`].
//! A piece is a [`Unit`] (Lord, Knight or Mage) owned by one [`Player`].

use rand::Rng;

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Board size (10x10)
pub const BOARD_SIZE: usize = 10;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 100

/// The two sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Build a position from signed coordinates, `None` when off-board
    #[inline]
    pub fn checked(row: i32, col: i32) -> Option<Pos> {
        if Self::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Step `steps` times along `(dr, dc)`, `None` when the step leaves the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Option<Pos> {
        Self::checked(
            self.row as i32 + dr * steps,
            self.col as i32 + dc * steps,
        )
    }

    /// Iterate every position in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Orthogonal facing of a knight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    /// Unit vector as `(dr, dc)`
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Facing::Up => (-1, 0),
            Facing::Down => (1, 0),
            Facing::Left => (0, -1),
            Facing::Right => (0, 1),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Facing::Up => "↑",
            Facing::Down => "↓",
            Facing::Left => "←",
            Facing::Right => "→",
        }
    }
}

/// Conversion axis of a mage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MageAxis {
    Horizontal,
    Vertical,
}

impl MageAxis {
    /// The two neighbor offsets the mage reaches
    #[inline]
    pub fn deltas(self) -> [(i32, i32); 2] {
        match self {
            MageAxis::Horizontal => [(0, -1), (0, 1)],
            MageAxis::Vertical => [(-1, 0), (1, 0)],
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            MageAxis::Horizontal => "↔",
            MageAxis::Vertical => "↕",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MageAxis::Horizontal => "horizontal",
            MageAxis::Vertical => "vertical",
        }
    }
}

/// Unit kind with its kind-specific payload.
///
/// Only a knight carries a facing and only a mage carries an axis.
/// The same type describes the hand a player is about to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Lord,
    Knight { facing: Facing },
    Mage { axis: MageAxis },
}

impl Unit {
    #[inline]
    pub fn is_lord(self) -> bool {
        matches!(self, Unit::Lord)
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Lord => "Lord",
            Unit::Knight { .. } => "Knight",
            Unit::Mage { .. } => "Mage",
        }
    }
}

impl Unit {
    /// Draw a hand: 20% mage, 15% knight, 65% lord.
    ///
    /// A mage's axis is a fair coin; a knight's facing is uniform.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Unit {
        let roll: f64 = rng.gen();
        if roll < 0.2 {
            let axis = if rng.gen_bool(0.5) {
                MageAxis::Horizontal
            } else {
                MageAxis::Vertical
            };
            Unit::Mage { axis }
        } else if roll < 0.35 {
            let facing = Facing::ALL[rng.gen_range(0..Facing::ALL.len())];
            Unit::Knight { facing }
        } else {
            Unit::Lord
        }
    }
}

/// Occupant of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub unit: Unit,
    /// Set once a mage has turned this piece to its current owner
    pub converted: bool,
}

impl Piece {
    #[inline]
    pub fn new(owner: Player, unit: Unit) -> Self {
        Self {
            owner,
            unit,
            converted: false,
        }
    }

    #[inline]
    pub fn lord(owner: Player) -> Self {
        Self::new(owner, Unit::Lord)
    }

    #[inline]
    pub fn knight(owner: Player, facing: Facing) -> Self {
        Self::new(owner, Unit::Knight { facing })
    }

    #[inline]
    pub fn mage(owner: Player, axis: MageAxis) -> Self {
        Self::new(owner, Unit::Mage { axis })
    }

    /// True for a lord owned by `player`, the only piece that counts toward lines
    #[inline]
    pub fn is_lord_of(&self, player: Player) -> bool {
        self.owner == player && self.unit.is_lord()
    }
}
