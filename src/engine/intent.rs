//! The closed set of intents a caller may dispatch. Routing by enum rather
//! than by command string means adding an intent is a compile-time-checked
//! change everywhere it is matched.

use crate::cards::card::{Card, Color};

/// The acting player as the caller knows them: a stable opaque id plus a
/// display name used only for lobby listings and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    pub id: String,
    pub name: String,
}

impl PlayerRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Open a lobby for the session with the acting player seated.
    Create,
    Join,
    Start,
    Play {
        card: Card,
        /// Required when the card is wild-ranked, ignored otherwise.
        chosen_color: Option<Color>,
    },
    /// Draw one card from the pile; the turn does not advance.
    Draw,
    /// Yield the turn; legal only after drawing this turn.
    Pass,
    Status,
    /// The acting player's own cards.
    Hand,
    /// End the game early with no winner.
    Quit,
}
