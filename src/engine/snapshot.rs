//! Read-only projections returned to callers. The engine does no text
//! formatting; these carry everything a dispatcher needs to render a reply.

use crate::cards::card::Card;
use crate::uno::state::GamePhase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    /// Hand size only; hands themselves are private to `HandView`.
    pub cards_held: usize,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub session: String,
    pub phase: GamePhase,
    /// In seating (join) order.
    pub players: Vec<PlayerSummary>,
    /// Id of the player whose turn it is, while the game is active.
    pub current_player: Option<String>,
    pub top_of_discard: Option<Card>,
    pub deck_size: usize,
    pub discard_size: usize,
    pub turn_count: u32,
    pub direction: i8,
    /// Id of the winning player, if the game finished by a winning play.
    pub winner: Option<String>,
}

/// One player's own cards, shown only to that player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    pub player_id: String,
    pub cards: Vec<Card>,
}

/// What a successfully handled intent hands back to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineReply {
    State(GameSnapshot),
    /// A turn draw: the card goes to the caller privately, the snapshot to
    /// the table.
    Drew { card: Card, state: GameSnapshot },
    Hand(HandView),
}
