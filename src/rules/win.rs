//! Win condition checking
//!
//! A player wins with five or more of their own lords in a contiguous
//! horizontal, vertical or diagonal run. Knights and mages never count,
//! and overlines still win.

use crate::board::{Board, Player, Pos};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if there's 5+ lords in a row for the given player
pub fn has_five_in_row(board: &Board, player: Player) -> bool {
    board
        .lords(player)
        .any(|pos| has_five_at_pos(board, pos, player))
}

/// Five-in-a-row check through a specific lord.
///
/// Counts up to 4 steps each way along every direction. Off-board cells and
/// anything other than a same-owner lord end the count the same way.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let mut count = 1;
        for sign in [1, -1] {
            for i in 1..5 {
                match pos.offset(dr * sign, dc * sign, i).and_then(|p| board.get(p)) {
                    Some(piece) if piece.is_lord_of(player) => count += 1,
                    _ => break,
                }
            }
        }
        count >= 5
    })
}

/// Find the positions of a 5-in-a-row if exists
///
/// Returns Some(Vec<Pos>) with at least 5 positions ordered along the line,
/// None otherwise.
pub fn find_five_positions(board: &Board, player: Player) -> Option<Vec<Pos>> {
    for pos in board.lords(player) {
        for &(dr, dc) in &DIRECTIONS {
            let mut line = vec![pos];

            // Extend in negative direction first
            for i in 1..5 {
                match pos.offset(-dr, -dc, i) {
                    Some(prev) if board.get(prev).is_some_and(|p| p.is_lord_of(player)) => {
                        line.insert(0, prev)
                    }
                    _ => break,
                }
            }

            // Extend in positive direction
            for i in 1..5 {
                match pos.offset(dr, dc, i) {
                    Some(next) if board.get(next).is_some_and(|p| p.is_lord_of(player)) => {
                        line.push(next)
                    }
                    _ => break,
                }
            }

            if line.len() >= 5 {
                return Some(line);
            }
        }
    }
    None
}

/// Check for a winner, testing `first` before its opponent.
///
/// A single conversion can complete lines for both sides at once; the side
/// checked first takes the game.
pub fn check_winner(board: &Board, first: Player) -> Option<Player> {
    [first, first.opponent()]
        .into_iter()
        .find(|&player| has_five_in_row(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Facing, MageAxis, Piece};

    fn lords(board: &mut Board, player: Player, cells: &[(u8, u8)]) {
        for &(r, c) in cells {
            board.place_piece(Pos::new(r, c), Piece::lord(player));
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        lords(&mut board, Player::Black, &[(5, 0), (5, 1), (5, 2), (5, 3), (5, 4)]);
        assert!(has_five_in_row(&board, Player::Black));
        assert!(!has_five_in_row(&board, Player::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_piece(Pos::new(i, 9), Piece::lord(Player::Black));
        }
        assert!(has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_piece(Pos::new(i, i), Piece::lord(Player::White));
        }
        assert!(has_five_in_row(&board, Player::White));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::new();
        // Diagonal from (1, 8) to (5, 4)
        for i in 0..5 {
            board.place_piece(Pos::new(1 + i, 8 - i), Piece::lord(Player::White));
        }
        assert!(has_five_in_row(&board, Player::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_piece(Pos::new(9, i), Piece::lord(Player::Black));
        }
        assert!(has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_piece(Pos::new(9, i), Piece::lord(Player::Black));
        }
        assert!(!has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_non_lords_do_not_count() {
        let mut board = Board::new();
        lords(&mut board, Player::Black, &[(2, 0), (2, 1), (2, 3), (2, 4)]);
        board.place_piece(Pos::new(2, 2), Piece::knight(Player::Black, Facing::Up));
        assert!(!has_five_in_row(&board, Player::Black));

        board.place_piece(Pos::new(2, 2), Piece::mage(Player::Black, MageAxis::Vertical));
        assert!(!has_five_in_row(&board, Player::Black));

        board.place_piece(Pos::new(2, 2), Piece::lord(Player::Black));
        assert!(has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_opponent_lord_breaks_run() {
        let mut board = Board::new();
        lords(&mut board, Player::Black, &[(4, 0), (4, 1), (4, 3), (4, 4), (4, 5)]);
        board.place_piece(Pos::new(4, 2), Piece::lord(Player::White));
        assert!(!has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_find_five_positions_ordered() {
        let mut board = Board::new();
        lords(&mut board, Player::Black, &[(7, 5), (7, 3), (7, 4), (7, 6), (7, 7)]);
        let line = find_five_positions(&board, Player::Black).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Pos::new(7, 3));
        assert_eq!(line[4], Pos::new(7, 7));
    }

    #[test]
    fn test_empty_not_five() {
        let board = Board::new();
        assert!(!has_five_in_row(&board, Player::Black));
        assert!(find_five_positions(&board, Player::White).is_none());
        assert_eq!(check_winner(&board, Player::Black), None);
    }

    #[test]
    fn test_check_winner_order() {
        let mut board = Board::new();
        lords(&mut board, Player::Black, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        lords(&mut board, Player::White, &[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4)]);

        assert_eq!(check_winner(&board, Player::White), Some(Player::White));
        assert_eq!(check_winner(&board, Player::Black), Some(Player::Black));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_piece(Pos::new(5 + i, 5 + i), Piece::lord(Player::White));
        }
        assert!(has_five_at_pos(&board, Pos::new(9, 9), Player::White));
        assert_eq!(check_winner(&board, Player::Black), Some(Player::White));
    }
}
