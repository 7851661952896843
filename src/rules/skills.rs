//! Skill resolution for knights and mages
//!
//! - Knight: if the cell it faces holds an opposing piece, both the knight
//!   and that piece leave the board.
//! - Mage: every opposing piece on its two axis neighbors switches to the
//!   mage's owner, then the mage leaves the board.
//!
//! [`apply_skill_step`] applies at most one trigger per call. Every trigger
//! removes at least one piece, so repeated calls always reach quiescence.

use std::fmt;

use crate::board::{Board, MageAxis, Player, Pos, Unit};

use super::win::check_winner;

/// What a trigger did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillKind {
    /// The knight and the piece it charged were both removed
    KnightCharge { target: Pos },
    /// These pieces now belong to the mage's owner; the mage was removed
    MageConversion { axis: MageAxis, converted: Vec<Pos> },
}

/// One applied trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEvent {
    /// Cell the knight or mage stood on
    pub origin: Pos,
    pub owner: Player,
    pub kind: SkillKind,
}

impl SkillEvent {
    /// Number of opposing pieces removed or converted
    pub fn affected(&self) -> usize {
        match &self.kind {
            SkillKind::KnightCharge { .. } => 1,
            SkillKind::MageConversion { converted, .. } => converted.len(),
        }
    }

    /// Human-readable description, passed up to whoever shows messages
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SkillEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SkillKind::KnightCharge { target } => write!(
                f,
                "Knight charge! {} knight at ({}, {}) takes ({}, {})",
                self.owner.name(),
                self.origin.row,
                self.origin.col,
                target.row,
                target.col
            ),
            SkillKind::MageConversion { axis, converted } => write!(
                f,
                "Mage conversion ({})! {} mage at ({}, {}) converts {} unit{}",
                axis.name(),
                self.owner.name(),
                self.origin.row,
                self.origin.col,
                converted.len(),
                if converted.len() == 1 { "" } else { "s" }
            ),
        }
    }
}

/// Apply the skill of the unit at `pos`, if it is eligible.
///
/// Lords, empty cells and units without an opposing target do nothing and
/// leave the board untouched.
pub fn trigger_at(board: &mut Board, pos: Pos) -> Option<SkillEvent> {
    let piece = board.get(pos)?;
    let owner = piece.owner;

    match piece.unit {
        Unit::Lord => None,
        Unit::Knight { facing } => {
            let (dr, dc) = facing.delta();
            let target = pos.offset(dr, dc, 1)?;
            if board.get(target)?.owner == owner {
                return None;
            }
            board.remove_piece(target);
            board.remove_piece(pos);
            Some(SkillEvent {
                origin: pos,
                owner,
                kind: SkillKind::KnightCharge { target },
            })
        }
        Unit::Mage { axis } => {
            let converted: Vec<Pos> = axis
                .deltas()
                .iter()
                .filter_map(|&(dr, dc)| pos.offset(dr, dc, 1))
                .filter(|&target| board.get(target).is_some_and(|p| p.owner != owner))
                .collect();
            if converted.is_empty() {
                return None;
            }
            for &target in &converted {
                if let Some(victim) = board.get_mut(target) {
                    victim.owner = owner;
                    victim.converted = true;
                }
            }
            board.remove_piece(pos);
            Some(SkillEvent {
                origin: pos,
                owner,
                kind: SkillKind::MageConversion { axis, converted },
            })
        }
    }
}

/// Apply the first eligible trigger in row-major order.
///
/// Returns `None` at quiescence, in which case the board is unchanged.
pub fn apply_skill_step(board: &mut Board) -> Option<SkillEvent> {
    Pos::all().find_map(|pos| trigger_at(board, pos))
}

/// Result of driving the cascade to quiescence or to a win
#[derive(Debug, Clone, Default)]
pub struct CascadeOutcome {
    /// Triggers in the order they were applied
    pub events: Vec<SkillEvent>,
    /// Board after each trigger, one per event
    pub frames: Vec<Board>,
    /// Set when a trigger completed a five-in-row
    pub winner: Option<Player>,
}

/// Repeatedly apply [`apply_skill_step`], checking both players for a
/// five-in-row after every step. Stops at the first win.
pub fn resolve_cascade(board: &mut Board, mover: Player) -> CascadeOutcome {
    let mut outcome = CascadeOutcome::default();

    while let Some(event) = apply_skill_step(board) {
        tracing::debug!(step = outcome.events.len() + 1, "{}", event);
        outcome.events.push(event);
        outcome.frames.push(board.clone());

        if let Some(winner) = check_winner(board, mover) {
            outcome.winner = Some(winner);
            break;
        }
    }

    outcome
}
