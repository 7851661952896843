//! Board structure holding optional pieces

use super::{Piece, Player, Pos, BOARD_SIZE};

/// Game board.
///
/// Cloning produces a fully independent copy; evaluation relies on this to
/// build scratch boards that never alias the live one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell slot at position, `None` when `pos` lies off the board
    #[inline]
    fn cell(&self, pos: Pos) -> Option<&Option<Piece>> {
        self.cells.get(pos.row as usize)?.get(pos.col as usize)
    }

    #[inline]
    fn cell_mut(&mut self, pos: Pos) -> Option<&mut Option<Piece>> {
        self.cells.get_mut(pos.row as usize)?.get_mut(pos.col as usize)
    }

    /// Get the piece at position; off-board reads are `None`
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.cell(pos).copied().flatten()
    }

    /// Get the piece at signed coordinates; off-board reads are `None`
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Piece> {
        Pos::checked(row, col).and_then(|pos| self.get(pos))
    }

    /// Mutable access to the piece at position
    #[inline]
    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut Piece> {
        self.cell_mut(pos)?.as_mut()
    }

    #[inline]
    pub fn has_piece(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Place a piece, replacing whatever was there; off-board writes are ignored
    #[inline]
    pub fn place_piece(&mut self, pos: Pos, piece: Piece) {
        if let Some(cell) = self.cell_mut(pos) {
            *cell = Some(piece);
        }
    }

    /// Place a piece at signed coordinates; off-board writes are ignored
    pub fn place_at(&mut self, row: i32, col: i32, piece: Piece) {
        if let Some(pos) = Pos::checked(row, col) {
            self.place_piece(pos, piece);
        }
    }

    /// Remove the piece at position, returning it
    #[inline]
    pub fn remove_piece(&mut self, pos: Pos) -> Option<Piece> {
        self.cell_mut(pos)?.take()
    }

    /// Occupied cells in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        Pos::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Positions of every lord owned by `player`, row-major
    pub fn lords(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.is_lord_of(player))
            .map(|(pos, _)| pos)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }

    /// Total pieces on board
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Pieces owned by `player`
    pub fn count_owned(&self, player: Player) -> usize {
        self.pieces().filter(|(_, piece)| piece.owner == player).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.pieces().next().is_none()
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
