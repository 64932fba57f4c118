//! Data structures for one Uno session.

use crate::cards::card::Card;
use crate::cards::deck::Deck;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Lobby,
    Active,
    Finished,
}

/// One participant. Owned exclusively by its game: created on join,
/// dropped only when the game is destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Opaque caller-supplied id, unique within a game.
    pub id: String,
    pub name: String,
    pub score: u32,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score: 0,
            hand: Vec::new(),
        }
    }
}

/// One session's full state. Transitions live in `game.rs`; this file only
/// holds the data layout and small read helpers.
pub struct UnoGame {
    /// Opaque session key, e.g. a chat channel id.
    pub session: String,
    pub phase: GamePhase,
    /// Seating order is join order and never changes after start.
    pub players: Vec<Player>,
    /// Top of the pile is the end of the vector, same as the discard.
    pub deck: Deck,
    pub discard: Vec<Card>,
    pub turn_count: u32,
    pub current_player_index: usize,
    /// +1 plays through the seats in join order, -1 backwards.
    pub direction: i8,
    /// Whether the current player has drawn this turn; gates `pass`.
    pub drew_this_turn: bool,
    /// Winning player's id once the game finishes by a winning play.
    pub winner: Option<String>,
}

impl UnoGame {
    pub const MIN_PLAYERS: usize = 2;
    pub const MAX_PLAYERS: usize = 4;
    pub const HAND_SIZE: usize = 7;

    /// A fresh lobby containing only the creating player.
    pub fn new(session: impl Into<String>, host: Player) -> Self {
        Self {
            session: session.into(),
            phase: GamePhase::Lobby,
            players: vec![host],
            deck: Deck::empty(),
            discard: Vec::new(),
            turn_count: 0,
            current_player_index: 0,
            direction: 1,
            drew_this_turn: false,
            winner: None,
        }
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn top_of_discard(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    pub fn seat_of(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }
}
