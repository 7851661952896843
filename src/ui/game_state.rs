//! Game state management for the Lordline GUI

use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::session::{GameOutcome, Hand, TurnReport};
use crate::{AIEngine, Board, MoveResult, Piece, Player, Pos, Session};

/// Placed piece stays on screen this long before the first skill resolves
pub const PLACEMENT_DELAY: Duration = Duration::from_millis(400);
/// Pause after each skill trigger
pub const SKILL_STEP_DELAY: Duration = Duration::from_millis(300);

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::Black }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// One frame of a turn replay
struct Frame {
    board: Board,
    message: Option<String>,
    hold: Duration,
}

/// Paced replay of a resolved turn
struct Playback {
    frames: VecDeque<Frame>,
    shown_at: Instant,
}

/// Main game state
pub struct GameState {
    pub session: Session,
    pub mode: GameMode,
    pub last_move: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    /// Skill messages, newest last
    pub skill_log: Vec<String>,
    playback: Option<Playback>,
    hint_engine: AIEngine,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            session: Session::new(),
            mode,
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            skill_log: Vec::new(),
            playback: None,
            hint_engine: AIEngine::new(),
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.last_move = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.suggested_move = None;
        self.message = None;
        self.skill_log.clear();
        self.playback = None;
    }

    pub fn turn(&self) -> Player {
        self.session.turn()
    }

    pub fn hand(&self) -> Hand {
        self.session.hand()
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        // The result is revealed once the replay reaches it
        if self.is_replaying() {
            None
        } else {
            self.session.outcome()
        }
    }

    /// Board to draw: the current replay frame, or the live board
    pub fn display_board(&self) -> &Board {
        self.playback
            .as_ref()
            .and_then(|p| p.frames.front())
            .map_or(self.session.board(), |frame| &frame.board)
    }

    pub fn is_replaying(&self) -> bool {
        self.playback.is_some()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.turn() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.turn() != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn accepts_input(&self) -> bool {
        !self.session.is_over() && !self.is_replaying() && !self.is_ai_thinking() && self.is_human_turn()
    }

    /// Attempt to place the current hand at the given position
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if self.is_replaying() {
            return Err("Skills are still resolving".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| e.to_string())
    }

    /// Play a move for whichever side is to move (human or AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), crate::PlayError> {
        let before = self.session.board().clone();
        let report = self.session.play(pos)?;

        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.start_playback(before, &report);
        Ok(())
    }

    fn start_playback(&mut self, mut before: Board, report: &TurnReport) {
        before.place_piece(report.pos, report.piece);

        let mut frames = VecDeque::with_capacity(report.frames.len() + 1);
        frames.push_back(Frame {
            board: before,
            message: None,
            hold: PLACEMENT_DELAY,
        });
        for (board, event) in report.frames.iter().zip(&report.events) {
            frames.push_back(Frame {
                board: board.clone(),
                message: Some(event.message()),
                hold: SKILL_STEP_DELAY,
            });
        }

        self.playback = Some(Playback {
            frames,
            shown_at: Instant::now(),
        });
    }

    /// Advance the replay; returns true while frames remain
    pub fn tick_playback(&mut self) -> bool {
        let Some(playback) = &mut self.playback else {
            return false;
        };

        let due = playback
            .frames
            .front()
            .is_some_and(|frame| playback.shown_at.elapsed() >= frame.hold);
        if due {
            playback.frames.pop_front();
            playback.shown_at = Instant::now();
            if let Some(message) = playback.frames.front().and_then(|f| f.message.clone()) {
                self.message = Some(message.clone());
                self.skill_log.push(message);
            }
        }

        if playback.frames.is_empty() {
            self.playback = None;
            return false;
        }
        true
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_replaying() || self.session.is_over() {
            return;
        }

        let board = self.session.board().clone();
        let hand = self.hand();
        let mover = self.turn();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::new();
            let result = engine.choose_move(&board, hand, mover);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            let pos = move_result.best_move;
            self.last_ai_result = Some(move_result);

            if let Err(e) = self.execute_move(pos) {
                tracing::warn!(error = %e, "AI move rejected");
                self.message = Some(format!("AI move rejected: {e}"));
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine where the side to move should play
    pub fn request_suggestion(&mut self) {
        if self.session.is_over() || self.is_ai_thinking() || self.is_replaying() {
            return;
        }

        let result = self.session.hint(&mut self.hint_engine);
        self.suggested_move = Some(result.best_move);
        self.last_ai_result = Some(result);
    }

    /// Piece the side to move would place, for the hand card
    pub fn hand_piece(&self) -> Piece {
        Piece::new(self.turn(), self.hand())
    }
}
