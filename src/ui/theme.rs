//! Theme constants for the Lordline GUI

use egui::Color32;

// Board colors - slate field
pub const BOARD_BG: Color32 = Color32::from_rgb(58, 66, 80);
pub const CELL_BG: Color32 = Color32::from_rgb(72, 82, 98);
pub const GRID_LINE: Color32 = Color32::from_rgb(36, 40, 50);
pub const LABEL: Color32 = Color32::from_rgb(170, 178, 192);

// Owner colors
pub const BLACK_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_PIECE_RIM: Color32 = Color32::from_rgb(90, 90, 100);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(245, 245, 248);
pub const WHITE_PIECE_RIM: Color32 = Color32::from_rgb(180, 180, 188);

// Unit accents
pub const KNIGHT_ACCENT: Color32 = Color32::from_rgb(230, 120, 60);
pub const MAGE_ACCENT: Color32 = Color32::from_rgb(150, 110, 230);
pub const CONVERTED_MARK: Color32 = Color32::from_rgb(240, 200, 60);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(200, 200, 210, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 32.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.40;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
