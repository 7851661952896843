use super::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(4, 5);
    assert_eq!(pos.to_index(), 45);

    let pos2 = Pos::from_index(45);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(9, 9));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(10, 0));
    assert!(!Pos::is_valid(0, 10));
}

#[test]
fn test_pos_offset_leaves_board() {
    let corner = Pos::new(0, 0);
    assert_eq!(corner.offset(0, -1, 1), None);
    assert_eq!(corner.offset(1, 1, 3), Some(Pos::new(3, 3)));
    assert_eq!(Pos::new(9, 9).offset(1, 0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 10);
    assert_eq!(TOTAL_CELLS, 100);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_place_get_remove() {
    let mut board = Board::new();
    let pos = Pos::new(3, 7);
    assert!(!board.has_piece(pos));

    board.place_piece(pos, Piece::knight(Player::White, Facing::Left));
    assert!(board.has_piece(pos));
    assert_eq!(
        board.get(pos).map(|p| p.unit),
        Some(Unit::Knight { facing: Facing::Left })
    );

    let removed = board.remove_piece(pos);
    assert_eq!(removed.map(|p| p.owner), Some(Player::White));
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_out_of_range_access_is_absent() {
    let mut board = Board::new();
    assert_eq!(board.get_at(-1, 4), None);
    assert_eq!(board.get_at(4, 10), None);

    // Ignored rather than panicking
    board.place_at(10, 10, Piece::lord(Player::Black));
    assert!(board.is_board_empty());
}

#[test]
fn test_unchecked_pos_off_board() {
    let mut board = Board::new();
    let below = Pos { row: 10, col: 0 };
    let right = Pos { row: 0, col: 12 };

    assert_eq!(board.get(below), None);
    assert!(board.is_empty(below));
    assert!(board.get_mut(right).is_none());
    assert_eq!(board.remove_piece(right), None);

    board.place_piece(below, Piece::lord(Player::White));
    board.place_piece(right, Piece::lord(Player::White));
    assert!(board.is_board_empty());
}

#[test]
fn test_clone_is_independent() {
    let mut live = Board::new();
    live.place_piece(Pos::new(1, 1), Piece::lord(Player::Black));

    let mut scratch = live.clone();
    scratch.remove_piece(Pos::new(1, 1));
    scratch.place_piece(Pos::new(2, 2), Piece::lord(Player::White));

    assert!(live.has_piece(Pos::new(1, 1)));
    assert!(live.is_empty(Pos::new(2, 2)));
}

#[test]
fn test_lords_and_counts() {
    let mut board = Board::new();
    board.place_piece(Pos::new(0, 0), Piece::lord(Player::Black));
    board.place_piece(Pos::new(0, 1), Piece::mage(Player::Black, MageAxis::Vertical));
    board.place_piece(Pos::new(5, 5), Piece::lord(Player::White));

    let black_lords: Vec<_> = board.lords(Player::Black).collect();
    assert_eq!(black_lords, vec![Pos::new(0, 0)]);
    assert_eq!(board.count_owned(Player::Black), 2);
    assert_eq!(board.piece_count(), 3);
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS - 3);
    assert!(!board.is_full());
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for pos in Pos::all() {
        board.place_piece(pos, Piece::lord(Player::Black));
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_mage_axis_deltas() {
    assert_eq!(MageAxis::Horizontal.deltas(), [(0, -1), (0, 1)]);
    assert_eq!(MageAxis::Vertical.deltas(), [(-1, 0), (1, 0)]);
    assert_eq!(Facing::Up.delta(), (-1, 0));
}

#[test]
fn test_hand_distribution() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let (mut mages, mut knights, mut lords) = (0, 0, 0);
    let n = 20_000;
    for _ in 0..n {
        match Unit::draw(&mut rng) {
            Unit::Mage { .. } => mages += 1,
            Unit::Knight { .. } => knights += 1,
            Unit::Lord => lords += 1,
        }
    }
    let share = |k: i32| f64::from(k) / f64::from(n);
    assert!((share(mages) - 0.20).abs() < 0.02);
    assert!((share(knights) - 0.15).abs() < 0.02);
    assert!((share(lords) - 0.65).abs() < 0.02);
}
