//! Main application for the Lordline GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardScene, BoardView};
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::session::GameOutcome;
use crate::{Player, Unit};

/// Main Lordline application
pub struct LordlineApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for LordlineApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl LordlineApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.state = GameState::new(GameMode::PvE { human: Player::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.state = GameState::new(GameMode::PvE { human: Player::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state = GameState::new(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Rematch (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {}", human.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_hand_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.outcome().cloned() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }

                if !self.state.skill_log.is_empty() {
                    ui.add_space(10.0);
                    self.render_skill_log(ui);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("LORDLINE").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five lords in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.turn();
            let (fill, ink) = match turn {
                Player::Black => (BLACK_PIECE, WHITE_PIECE),
                Player::White => (WHITE_PIECE, BLACK_PIECE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &turn.name()[..1],
                    egui::FontId::proportional(24.0),
                    ink,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_BUSY)
                    } else if self.state.is_replaying() {
                        ("Resolving skills...", STATUS_BUSY)
                    } else if self.state.outcome().is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("Waiting", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// The unit the side to move is holding
    fn render_hand_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("HAND").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let piece = self.state.hand_piece();
            let (detail, accent, rule) = match piece.unit {
                Unit::Lord => (String::new(), TEXT_PRIMARY, "Counts toward five in a row"),
                Unit::Knight { facing } => (
                    facing.arrow().to_string(),
                    KNIGHT_ACCENT,
                    "Captures the enemy piece it faces",
                ),
                Unit::Mage { axis } => (
                    format!("{} {}", axis.arrow(), axis.name()),
                    MAGE_ACCENT,
                    "Converts adjacent enemies on its axis",
                ),
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(piece.unit.name()).size(20.0).strong().color(accent));
                if !detail.is_empty() {
                    ui.add_space(6.0);
                    ui.label(RichText::new(detail).size(18.0).color(accent));
                }
            });
            ui.label(RichText::new(rule).size(10.0).color(TEXT_SECONDARY));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui.add(egui::Label::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                        self.state.reset();
                    }
                });

                ui.add_space(4.0);

                if self.state.mode == GameMode::PvP {
                    btn_frame.show(ui, |ui| {
                        if ui.add(egui::Label::new(RichText::new("Hint").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                            self.state.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.session.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                    ui.label(RichText::new(format!("Thinking {:.2}s", elapsed.as_secs_f32())).size(10.0).color(STATUS_BUSY));
                }

                if let Some(result) = &self.state.last_ai_result {
                    let score = result.score.map_or("fallback".to_string(), |s| s.to_string());
                    ui.label(RichText::new(format!("Score: {score}")).size(10.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!(
                            "{} ties / {} cells, {}ms",
                            result.ties.len(),
                            result.candidates,
                            result.time_ms
                        ))
                        .size(10.0)
                        .color(TEXT_MUTED),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("-> ({}, {})", result.best_move.row, result.best_move.col))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &GameOutcome) {
        let (headline, detail) = match outcome {
            GameOutcome::Win { winner, .. } => {
                let detail = match self.state.mode {
                    GameMode::PvE { human } if human == *winner => "You win!",
                    GameMode::PvE { .. } => "AI wins",
                    GameMode::PvP => "wins!",
                };
                (winner.name().to_uppercase(), detail)
            }
            GameOutcome::Draw => ("DRAW".to_string(), "Board full"),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(14.0).color(WIN_HIGHLIGHT));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui.add(egui::Label::new(
                                RichText::new("Rematch").size(14.0).strong().color(TEXT_PRIMARY)
                            ).sense(egui::Sense::click())).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Most recent skill messages
    fn render_skill_log(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SKILLS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for line in self.state.skill_log.iter().rev().take(6) {
                ui.label(RichText::new(line).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = match self.state.outcome() {
                Some(GameOutcome::Win { line, .. }) => line.clone(),
                _ => None,
            };

            let scene = BoardScene {
                board: self.state.display_board(),
                turn: self.state.turn(),
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                winning_line: winning_line.as_deref(),
                accepts_input: self.state.accepts_input(),
            };
            let clicked = self.board_view.show(ui, &scene);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Hint (PvP mode)
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }

            // N - Rematch
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for LordlineApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let replaying = self.state.tick_playback();
        self.state.check_ai_result();

        if !replaying && self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || self.state.is_replaying() {
            ctx.request_repaint();
        }
    }
}
