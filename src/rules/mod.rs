//! Game rules for Lordline
//!
//! This module implements the rule set including:
//! - Win conditions (five lords in a row)
//! - Knight charges and mage conversions
//! - Skill exposure of a cell

pub mod exposure;
pub mod skills;
pub mod win;

// Re-exports for convenient access
pub use exposure::is_under_skill_threat;
pub use skills::{
    apply_skill_step, resolve_cascade, trigger_at, CascadeOutcome, SkillEvent, SkillKind,
};
pub use win::{check_winner, find_five_positions, has_five_at_pos, has_five_in_row};
