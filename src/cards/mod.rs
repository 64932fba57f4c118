//! Cards, the draw pile, and the pure play rules shared by every session.

pub mod card;
pub mod deck;
pub mod rules;

pub use card::{Card, Color, ParseCardError, Rank};
pub use deck::{Deck, DECK_SIZE};
pub use rules::{effect_of, is_playable, points, Effect};
