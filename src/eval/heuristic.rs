//! Single-ply move evaluation
//!
//! A candidate placement is scored by simulating it on a scratch copy of the
//! live board:
//! - the placed unit's own skill fires once if it can (no full cascade)
//! - an immediate five-in-row for the mover short-circuits to the win score
//! - the opponent's threat counts before and after decide the defensive bonus
//! - a cell in reach of an opposing knight or mage is penalized
//! - the mover's own line shapes on the scratch board add attack potential

use crate::board::{Board, Piece, Player, Pos, Unit, BOARD_SIZE};
use crate::rules::{has_five_in_row, is_under_skill_threat, trigger_at, SkillEvent, SkillKind};

use super::patterns::ScoreWeights;
use super::threats::{analyze_threats, classify_lines, ThreatStats};

/// Which drop in the opponent's threat counts earned the defensive bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    LiveFour,
    Four,
    LiveThree,
}

/// Breakdown of one evaluated placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEvaluation {
    /// Final score, without the center bias
    pub score: i64,
    /// The placement completes five-in-row for the mover
    pub wins: bool,
    pub attack: i64,
    /// Block bonus plus trap penalty
    pub defense: i64,
    pub skill: i64,
    pub block: Option<Block>,
    pub trapped: bool,
    /// The placed unit's own trigger, if it fired
    pub skill_event: Option<SkillEvent>,
}

/// Score placing `hand` at `pos` for `mover`.
///
/// `pos` must be empty on `board`. The live board is never modified.
#[must_use]
pub fn evaluate_move(board: &Board, pos: Pos, hand: Unit, mover: Player, weights: &ScoreWeights) -> i64 {
    evaluate_move_detailed(board, pos, hand, mover, weights).score
}

/// Like [`evaluate_move`], keeping every scoring term
pub fn evaluate_move_detailed(
    board: &Board,
    pos: Pos,
    hand: Unit,
    mover: Player,
    weights: &ScoreWeights,
) -> MoveEvaluation {
    let opponent = mover.opponent();

    // 1. Opponent's threats on the real board
    let baseline = analyze_threats(board, opponent);

    // 2. Simulate the placement and only this unit's own skill
    let mut scratch = board.clone();
    scratch.place_piece(pos, Piece::new(mover, hand));
    let skill_event = trigger_at(&mut scratch, pos);
    let skill = skill_event
        .as_ref()
        .map_or(0, |event| skill_bonus(event, weights));

    // 3. Immediate win
    if has_five_in_row(&scratch, mover) {
        return MoveEvaluation {
            score: weights.win,
            wins: true,
            attack: 0,
            defense: 0,
            skill,
            block: None,
            trapped: false,
            skill_event,
        };
    }

    // 4. Defensive bonus, first drop wins
    let after = analyze_threats(&scratch, opponent);
    let block = compare_threats(&baseline, &after);
    let mut defense = match block {
        Some(Block::LiveFour) => weights.block_live_four,
        Some(Block::Four) => weights.block_four,
        Some(Block::LiveThree) => weights.block_three,
        None => 0,
    };

    // 5. Trap check against the real board
    let trapped = defense < weights.block_live_four && is_under_skill_threat(board, pos, opponent);
    if trapped {
        defense += weights.danger_zone;
    }

    // 6. Attack potential of the mover after the placement
    let attack = attack_potential(&scratch, mover, weights);

    MoveEvaluation {
        score: attack + defense + skill,
        wins: false,
        attack,
        defense,
        skill,
        block,
        trapped,
        skill_event,
    }
}

/// Decide which threat category dropped, checked live four, four, live three
pub fn compare_threats(before: &ThreatStats, after: &ThreatStats) -> Option<Block> {
    if after.live_four < before.live_four {
        Some(Block::LiveFour)
    } else if after.four < before.four {
        Some(Block::Four)
    } else if after.live_three < before.live_three {
        Some(Block::LiveThree)
    } else {
        None
    }
}

/// Weighted sum of line shapes over every lord `player` owns
pub fn attack_potential(board: &Board, player: Player, weights: &ScoreWeights) -> i64 {
    board
        .lords(player)
        .map(|pos| {
            let stats = classify_lines(board, pos, player);
            i64::from(stats.live_four) * weights.attack_live_four
                + i64::from(stats.four) * weights.attack_four
                + i64::from(stats.live_three) * weights.attack_live_three
        })
        .sum()
}

/// Bonus for the placed unit's own trigger
fn skill_bonus(event: &SkillEvent, weights: &ScoreWeights) -> i64 {
    let per_unit = match event.kind {
        SkillKind::KnightCharge { .. } => weights.knight_capture,
        SkillKind::MageConversion { .. } => weights.mage_conversion,
    };
    per_unit * event.affected() as i64
}

/// Center preference, highest on the four middle cells.
///
/// `(N - manhattan distance to (4.5, 4.5)) * scale`, computed on doubled
/// coordinates to stay in integers.
#[inline]
pub fn center_bias(pos: Pos, weights: &ScoreWeights) -> i64 {
    let span = BOARD_SIZE as i64 - 1;
    let doubled_dist = (2 * i64::from(pos.row) - span).abs() + (2 * i64::from(pos.col) - span).abs();
    (2 * BOARD_SIZE as i64 - doubled_dist) * weights.center_bias / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Facing, MageAxis};
    use crate::eval::patterns::PatternScore;

    const B: Player = Player::Black;
    const W: Player = Player::White;

    fn weights() -> ScoreWeights {
        ScoreWeights::default()
    }

    fn lords(board: &mut Board, player: Player, cells: &[(u8, u8)]) {
        for &(r, c) in cells {
            board.place_piece(Pos::new(r, c), Piece::lord(player));
        }
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        let eval = evaluate_move_detailed(&board, Pos::new(4, 4), Unit::Lord, B, &weights());
        assert_eq!(eval.score, 0);
        assert!(!eval.wins);
        assert_eq!(eval.block, None);
    }

    #[test]
    fn test_winning_placement_returns_sentinel() {
        let mut board = Board::new();
        lords(&mut board, B, &[(5, 1), (5, 2), (5, 3), (5, 4)]);
        let w = weights();
        let eval = evaluate_move_detailed(&board, Pos::new(5, 5), Unit::Lord, B, &w);
        assert!(eval.wins);
        assert_eq!(eval.score, w.win);
    }

    #[test]
    fn test_knight_cannot_complete_five() {
        let mut board = Board::new();
        lords(&mut board, B, &[(5, 1), (5, 2), (5, 3), (5, 4)]);
        let hand = Unit::Knight { facing: Facing::Up };
        let eval = evaluate_move_detailed(&board, Pos::new(5, 5), hand, B, &weights());
        assert!(!eval.wins);
    }

    #[test]
    fn test_live_four_block_bonus_exact() {
        let mut board = Board::new();
        lords(&mut board, W, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        let w = weights();
        let eval = evaluate_move_detailed(&board, Pos::new(0, 4), Unit::Lord, B, &w);
        assert_eq!(eval.block, Some(Block::LiveFour));
        assert_eq!(eval.defense, w.block_live_four);
        assert_eq!(eval.skill, 0);
    }

    #[test]
    fn test_four_block_bonus() {
        let mut board = Board::new();
        // Closed on the left, open on the right: filling the right end
        // turns the live four into a four, so the live-four drop is reported
        lords(&mut board, W, &[(2, 1), (2, 2), (2, 3), (2, 4)]);
        board.place_piece(Pos::new(2, 0), Piece::lord(B));
        let eval = evaluate_move_detailed(&board, Pos::new(2, 5), Unit::Lord, B, &weights());
        assert_eq!(eval.block, Some(Block::LiveFour));

        // A boxed four broken by a knight charge drops the four count
        let mut boxed = Board::new();
        lords(&mut boxed, W, &[(6, 1), (6, 2), (6, 3), (6, 4)]);
        boxed.place_piece(Pos::new(6, 0), Piece::lord(B));
        boxed.place_piece(Pos::new(6, 5), Piece::lord(B));
        let hand = Unit::Knight { facing: Facing::Up };
        let eval = evaluate_move_detailed(&boxed, Pos::new(7, 4), hand, B, &weights());
        assert_eq!(eval.block, Some(Block::Four));
        assert_eq!(eval.defense, PatternScore::BLOCK_FOUR);
        assert_eq!(eval.skill, PatternScore::KNIGHT_CAPTURE);
    }

    #[test]
    fn test_three_block_bonus() {
        let mut board = Board::new();
        lords(&mut board, W, &[(4, 3), (4, 4), (4, 5)]);
        let eval = evaluate_move_detailed(&board, Pos::new(4, 6), Unit::Lord, B, &weights());
        assert_eq!(eval.block, Some(Block::LiveThree));
        assert_eq!(eval.defense, PatternScore::BLOCK_THREE);
    }

    #[test]
    fn test_mage_conversion_bonus_and_removal() {
        let mut board = Board::new();
        board.place_piece(Pos::new(3, 3), Piece::lord(W));
        board.place_piece(Pos::new(3, 5), Piece::lord(W));
        let hand = Unit::Mage { axis: MageAxis::Horizontal };
        let eval = evaluate_move_detailed(&board, Pos::new(3, 4), hand, B, &weights());
        assert_eq!(eval.skill, 2 * PatternScore::MAGE_CONVERSION);
        assert!(matches!(
            eval.skill_event.as_ref().map(|e| &e.kind),
            Some(SkillKind::MageConversion { .. })
        ));
        // Live board untouched
        assert_eq!(board.get(Pos::new(3, 3)).map(|p| p.owner), Some(W));
    }

    #[test]
    fn test_trap_penalty() {
        let mut board = Board::new();
        board.place_piece(Pos::new(5, 5), Piece::mage(W, MageAxis::Vertical));
        let w = weights();
        let eval = evaluate_move_detailed(&board, Pos::new(5, 6), Unit::Lord, B, &w);
        assert!(eval.trapped);
        assert_eq!(eval.defense, w.danger_zone);

        let safe = evaluate_move_detailed(&board, Pos::new(7, 7), Unit::Lord, B, &w);
        assert!(!safe.trapped);
        assert!(safe.score > eval.score);
    }

    #[test]
    fn test_trap_waived_for_live_four_block() {
        let mut board = Board::new();
        lords(&mut board, W, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        board.place_piece(Pos::new(1, 4), Piece::knight(W, Facing::Up));
        let w = weights();
        let eval = evaluate_move_detailed(&board, Pos::new(0, 4), Unit::Lord, B, &w);
        assert!(!eval.trapped);
        assert_eq!(eval.defense, w.block_live_four);
    }

    #[test]
    fn test_attack_potential_counts_own_shapes() {
        let mut board = Board::new();
        lords(&mut board, B, &[(4, 3), (4, 4)]);
        let w = weights();
        let eval = evaluate_move_detailed(&board, Pos::new(4, 5), Unit::Lord, B, &w);
        assert_eq!(eval.attack, 3 * w.attack_live_three);
        assert_eq!(attack_potential(&board, B, &w), 0);
    }

    #[test]
    fn test_center_bias_ordering() {
        let w = weights();
        let middle = center_bias(Pos::new(4, 4), &w);
        assert_eq!(middle, center_bias(Pos::new(5, 5), &w));
        assert_eq!(middle, center_bias(Pos::new(4, 5), &w));
        assert_eq!(middle, 18_000);
        assert!(middle > center_bias(Pos::new(3, 4), &w));
        assert_eq!(center_bias(Pos::new(0, 0), &w), 2_000);
    }

    #[test]
    fn test_compare_threats_priority() {
        let before = ThreatStats { live_four: 2, four: 2, live_three: 2 };
        let after = ThreatStats { live_four: 1, four: 0, live_three: 0 };
        assert_eq!(compare_threats(&before, &after), Some(Block::LiveFour));

        let after = ThreatStats { live_four: 3, four: 1, live_three: 0 };
        assert_eq!(compare_threats(&before, &after), Some(Block::Four));

        assert_eq!(compare_threats(&before, &before), None);
    }
}
