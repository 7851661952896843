//! Scoring weights for move evaluation
//!
//! Defense outweighs attack: blocking an opponent's live four is worth more
//! than any single attacking shape. The trap penalty is waived only for a
//! live-four block.

/// Fixed pattern scores
pub struct PatternScore;

impl PatternScore {
    /// Immediate five-in-row for the mover. Far above any sum of other terms.
    pub const WIN: i64 = i64::MAX / 4;

    // Defensive bonuses, at most one applies per move
    /// Opponent's live-four count dropped
    pub const BLOCK_LIVE_FOUR: i64 = 300_000_000;
    /// Opponent's four count dropped
    pub const BLOCK_FOUR: i64 = 250_000_000;
    /// Opponent's live-three count dropped
    pub const BLOCK_THREE: i64 = 2_000_000;

    /// Cell is reachable by an opposing knight or mage
    pub const DANGER_ZONE: i64 = -10_000_000;

    // Attack potential, per classification of each own lord
    pub const ATTACK_LIVE_FOUR: i64 = 20_000_000;
    pub const ATTACK_FOUR: i64 = 1_000_000;
    pub const ATTACK_LIVE_THREE: i64 = 100_000;

    // Immediate skill effect of the placed unit, per opposing piece
    pub const KNIGHT_CAPTURE: i64 = 100_000;
    pub const MAGE_CONVERSION: i64 = 200_000;

    /// Scale of the center preference added by the move selector
    pub const CENTER_BIAS: i64 = 2_000;
}

/// Weights used by an engine instance.
///
/// `Default` yields the [`PatternScore`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub win: i64,
    pub block_live_four: i64,
    pub block_four: i64,
    pub block_three: i64,
    pub danger_zone: i64,
    pub attack_live_four: i64,
    pub attack_four: i64,
    pub attack_live_three: i64,
    pub knight_capture: i64,
    pub mage_conversion: i64,
    pub center_bias: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            win: PatternScore::WIN,
            block_live_four: PatternScore::BLOCK_LIVE_FOUR,
            block_four: PatternScore::BLOCK_FOUR,
            block_three: PatternScore::BLOCK_THREE,
            danger_zone: PatternScore::DANGER_ZONE,
            attack_live_four: PatternScore::ATTACK_LIVE_FOUR,
            attack_four: PatternScore::ATTACK_FOUR,
            attack_live_three: PatternScore::ATTACK_LIVE_THREE,
            knight_capture: PatternScore::KNIGHT_CAPTURE,
            mage_conversion: PatternScore::MAGE_CONVERSION,
            center_bias: PatternScore::CENTER_BIAS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defense_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::BLOCK_LIVE_FOUR);
        assert!(PatternScore::BLOCK_LIVE_FOUR > PatternScore::BLOCK_FOUR);
        assert!(PatternScore::BLOCK_FOUR > PatternScore::BLOCK_THREE);
    }

    #[test]
    fn test_attack_hierarchy() {
        assert!(PatternScore::ATTACK_LIVE_FOUR > PatternScore::ATTACK_FOUR);
        assert!(PatternScore::ATTACK_FOUR > PatternScore::ATTACK_LIVE_THREE);
        // A full live-four line counted from all four lords is still below the block
        assert!(4 * PatternScore::ATTACK_LIVE_FOUR < PatternScore::BLOCK_LIVE_FOUR);
    }

    #[test]
    fn test_center_scale_distinct() {
        let w = ScoreWeights::default();
        for other in [
            w.block_live_four,
            w.block_four,
            w.block_three,
            w.danger_zone,
            w.attack_live_four,
            w.attack_four,
            w.attack_live_three,
            w.knight_capture,
            w.mage_conversion,
        ] {
            assert_ne!(w.center_bias, other);
        }
    }

    #[test]
    fn test_win_has_headroom() {
        // Adding the largest center bias must not overflow
        let w = ScoreWeights::default();
        assert!(w.win.checked_add(20 * w.center_bias).is_some());
    }
}
