//! Board rendering for the Lordline GUI

use crate::{Board, Piece, Player, Pos, Unit, BOARD_SIZE};
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view needs to draw one frame
pub struct BoardScene<'a> {
    pub board: &'a Board,
    pub turn: Player,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Clicks are ignored while the game is over, a cascade is replaying or
    /// the AI is thinking
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.layout(response.rect);

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_cells(&painter);
        self.draw_coordinates(&painter);
        self.draw_pieces(&painter, scene.board);

        if let Some(pos) = scene.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = scene.winning_line {
            self.draw_winning_line(&painter, line);
        }
        if let Some(pos) = scene.suggested_move {
            self.draw_suggestion(&painter, pos, scene.turn);
        }

        let mut clicked_pos = None;
        if scene.accepts_input {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_valid = scene.board.is_empty(board_pos);
                let color = if is_valid { hover_valid() } else { hover_invalid() };
                painter.rect_filled(self.cell_rect(board_pos).shrink(2.0), CornerRadius::same(4), color);

                if response.clicked() && is_valid {
                    clicked_pos = Some(board_pos);
                }
            }
        }

        clicked_pos
    }

    /// Fit the 10x10 cell grid inside `rect`
    pub fn layout(&mut self, rect: Rect) {
        self.board_rect = rect;
        self.cell_size = (rect.width().min(rect.height()) - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size))
    }

    fn draw_cells(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        for pos in Pos::all() {
            let rect = self.cell_rect(pos);
            painter.rect_filled(rect, CornerRadius::ZERO, CELL_BG);
            painter.rect_stroke(rect, CornerRadius::ZERO, stroke, egui::StrokeKind::Inside);
        }
    }

    /// Row and column indices along the top and left edges
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(12.0);
        for i in 0..BOARD_SIZE as u8 {
            let top = self.board_to_screen(Pos::new(0, i));
            painter.text(
                Pos2::new(top.x, self.board_rect.min.y + BOARD_MARGIN * 0.5),
                Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                LABEL,
            );

            let left = self.board_to_screen(Pos::new(i, 0));
            painter.text(
                Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, left.y),
                Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                LABEL,
            );
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for (pos, piece) in board.pieces() {
            self.draw_piece(painter, pos, piece);
        }
    }

    /// Disc in the owner's color, unit glyph, facing or axis arrow, and a
    /// ring for converted pieces
    fn draw_piece(&self, painter: &Painter, pos: Pos, piece: Piece) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        let (fill, rim, ink) = match piece.owner {
            Player::Black => (BLACK_PIECE, BLACK_PIECE_RIM, WHITE_PIECE),
            Player::White => (WHITE_PIECE, WHITE_PIECE_RIM, BLACK_PIECE),
        };

        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius, Stroke::new(1.5, rim));

        let (glyph, arrow, accent) = match piece.unit {
            Unit::Lord => ("L", None, ink),
            Unit::Knight { facing } => ("K", Some(facing.arrow()), KNIGHT_ACCENT),
            Unit::Mage { axis } => ("M", Some(axis.arrow()), MAGE_ACCENT),
        };

        let glyph_size = self.cell_size * 0.38;
        let glyph_center = if arrow.is_some() {
            center - Vec2::new(0.0, radius * 0.25)
        } else {
            center
        };
        painter.text(glyph_center, Align2::CENTER_CENTER, glyph, FontId::proportional(glyph_size), ink);

        if let Some(arrow) = arrow {
            painter.text(
                center + Vec2::new(0.0, radius * 0.45),
                Align2::CENTER_CENTER,
                arrow,
                FontId::proportional(glyph_size * 0.8),
                accent,
            );
        }

        if piece.converted {
            painter.circle_stroke(center, radius + 3.0, Stroke::new(2.0, CONVERTED_MARK));
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        painter.circle_filled(rect.min + Vec2::splat(LAST_MOVE_MARKER_RADIUS + 2.0), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }

        let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        let (fill, ink) = match turn {
            Player::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_PIECE),
            Player::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_PIECE),
        };

        painter.circle_filled(center, radius, fill);
        painter.text(center, Align2::CENTER_CENTER, "?", FontId::proportional(14.0), ink);
    }

    /// Convert screen coordinates to the cell under them
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;
        Pos::checked(row, col)
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
