//! Evaluation module for Lordline placements
//!
//! This module provides threat recognition and scoring for candidate moves.
//! The evaluation considers:
//! - Line shapes (live fours, fours, live threes) of both players
//! - The placed unit's immediate skill effect
//! - Defensive weighting and skill traps
//! - Positional bonuses (center control)

pub mod heuristic;
pub mod patterns;
pub mod threats;

pub use heuristic::{
    attack_potential, center_bias, compare_threats, evaluate_move, evaluate_move_detailed, Block,
    MoveEvaluation,
};
pub use patterns::{PatternScore, ScoreWeights};
pub use threats::{analyze_threats, classify_line, classify_lines, LineShape, ThreatStats};
