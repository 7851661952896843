//! Game session
//!
//! Owns the live board, the side to move and the unit it holds, and applies
//! one full turn per [`Session::play`]: placement, skill cascade, win and draw
//! checks, then turn change with a freshly drawn hand.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Board, Piece, Player, Pos, Unit, BOARD_SIZE};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::{check_winner, find_five_positions, resolve_cascade, SkillEvent};

/// The unit the side to move is about to place
pub type Hand = Unit;

/// Why a play was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("the game is already over")]
    GameOver,
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Win {
        winner: Player,
        /// Winning run, ordered along its direction
        line: Option<Vec<Pos>>,
    },
    Draw,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win { winner, .. } => Some(*winner),
            GameOutcome::Draw => None,
        }
    }
}

/// Everything that happened during one turn
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub mover: Player,
    pub pos: Pos,
    pub piece: Piece,
    /// Skill triggers in application order
    pub events: Vec<SkillEvent>,
    /// Board after each trigger, one per event
    pub frames: Vec<Board>,
    pub outcome: Option<GameOutcome>,
}

/// A single match between Black and White
pub struct Session {
    board: Board,
    turn: Player,
    hand: Hand,
    outcome: Option<GameOutcome>,
    rng: SmallRng,
    history: Vec<(Player, Pos)>,
}

impl Session {
    /// Start a match with an entropy-seeded hand source
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Start a match with a deterministic hand source
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    /// Resume from an arbitrary position
    pub fn with_position(board: Board, turn: Player, hand: Hand, seed: u64) -> Self {
        Self {
            board,
            turn,
            hand,
            outcome: None,
            rng: SmallRng::seed_from_u64(seed),
            history: Vec::new(),
        }
    }

    fn from_rng(mut rng: SmallRng) -> Self {
        let hand = Hand::draw(&mut rng);
        Self {
            board: Board::new(),
            turn: Player::Black,
            hand,
            outcome: None,
            rng,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// Override the current hand
    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Placements made so far, oldest first
    pub fn history(&self) -> &[(Player, Pos)] {
        &self.history
    }

    /// Play at signed coordinates
    pub fn play_at(&mut self, row: i32, col: i32) -> Result<TurnReport, PlayError> {
        let pos = Pos::checked(row, col).ok_or(PlayError::OutOfBounds { row, col })?;
        self.play(pos)
    }

    /// Place the current hand at `pos` for the side to move and resolve the turn
    pub fn play(&mut self, pos: Pos) -> Result<TurnReport, PlayError> {
        if self.outcome.is_some() {
            return Err(PlayError::GameOver);
        }
        if pos.row as usize >= BOARD_SIZE || pos.col as usize >= BOARD_SIZE {
            return Err(PlayError::OutOfBounds {
                row: i32::from(pos.row),
                col: i32::from(pos.col),
            });
        }
        if self.board.has_piece(pos) {
            return Err(PlayError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let mover = self.turn;
        let piece = Piece::new(mover, self.hand);
        self.board.place_piece(pos, piece);
        self.history.push((mover, pos));
        tracing::debug!(player = mover.name(), unit = piece.unit.name(), row = pos.row, col = pos.col, "placed");

        let cascade = resolve_cascade(&mut self.board, mover);
        for event in &cascade.events {
            tracing::info!("{}", event);
        }

        let winner = cascade.winner.or_else(|| check_winner(&self.board, mover));
        let outcome = match winner {
            Some(winner) => Some(GameOutcome::Win {
                winner,
                line: find_five_positions(&self.board, winner),
            }),
            None if self.board.is_full() => Some(GameOutcome::Draw),
            None => None,
        };

        match &outcome {
            Some(GameOutcome::Win { winner, .. }) => {
                tracing::info!(winner = winner.name(), moves = self.history.len(), "game over");
            }
            Some(GameOutcome::Draw) => {
                tracing::info!(moves = self.history.len(), "game drawn on a full board");
            }
            None => {
                self.turn = mover.opponent();
                self.hand = Hand::draw(&mut self.rng);
            }
        }
        self.outcome = outcome.clone();

        Ok(TurnReport {
            mover,
            pos,
            piece,
            events: cascade.events,
            frames: cascade.frames,
            outcome,
        })
    }

    /// Ask `engine` where the side to move should place its hand
    pub fn hint(&self, engine: &mut AIEngine) -> MoveResult {
        engine.choose_move(&self.board, self.hand, self.turn)
    }

    /// Empty board, Black to move, fresh hand
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Player::Black;
        self.hand = Hand::draw(&mut self.rng);
        self.outcome = None;
        self.history.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
