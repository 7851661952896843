//! Skill exposure of an empty cell
//!
//! Used by move evaluation to avoid placing a piece where the opponent's
//! existing knights or mages could immediately take or turn it.

use crate::board::{Board, Facing, Player, Pos, Unit};

/// Check whether a piece placed at `pos` sits in reach of `opponent`'s skills.
///
/// A mage on any orthogonal neighbor counts regardless of its axis. A knight
/// on an orthogonal neighbor counts only when it faces `pos`.
pub fn is_under_skill_threat(board: &Board, pos: Pos, opponent: Player) -> bool {
    Facing::ALL.iter().any(|facing| {
        let (dr, dc) = facing.delta();
        let Some(neighbor) = pos.offset(dr, dc, 1) else {
            return false;
        };
        match board.get(neighbor) {
            Some(piece) if piece.owner == opponent => match piece.unit {
                Unit::Mage { .. } => true,
                Unit::Knight { facing: charge } => {
                    let (kr, kc) = charge.delta();
                    neighbor.offset(kr, kc, 1) == Some(pos)
                }
                Unit::Lord => false,
            },
            _ => false,
        }
    })
}
