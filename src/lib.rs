//! Lordline game engine
//!
//! A two-player placement game on a 10x10 board:
//! - Each turn the side to move places the unit it was dealt (Lord, Knight or Mage)
//! - Knights capture the enemy piece they face, mages convert adjacent enemies
//! - Skills resolve one at a time until the board is quiet
//! - Five or more of a player's own lords in a row wins
//!
//! # Architecture
//!
//! - [`board`]: Grid model and piece types
//! - [`rules`]: Win detection, skill resolution and skill exposure
//! - [`eval`]: Threat analysis and single-ply move scoring
//! - [`engine`]: Move selection with randomized tie-breaking
//! - [`session`]: Turn orchestration for a full match
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use lordline::{AIEngine, Session};
//!
//! let mut session = Session::with_seed(1);
//! let mut engine = AIEngine::with_seed(1);
//!
//! let hint = session.hint(&mut engine);
//! let report = session.play(hint.best_move).unwrap();
//! println!("{} placed a {} at ({}, {})",
//!     report.mover.name(), report.piece.unit.name(), report.pos.row, report.pos.col);
//! ```
//!
//! # Move Priority
//!
//! The engine scores every empty cell in this order of magnitude:
//! 1. Immediate five-in-row
//! 2. Blocking an opposing live four, then a four
//! 3. Own attacking shapes and the placed unit's skill effect
//! 4. Blocking a live three
//! 5. Center preference, with a uniform random pick among equal scores

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Facing, MageAxis, Piece, Player, Pos, Unit, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, FALLBACK_MOVE};
pub use eval::{PatternScore, ScoreWeights};
pub use session::{GameOutcome, Hand, PlayError, Session, TurnReport};
