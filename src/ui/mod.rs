//! GUI module for the Lordline game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::LordlineApp;
pub use game_state::{GameMode, GameState, PLACEMENT_DELAY, SKILL_STEP_DELAY};
