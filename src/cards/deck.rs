//! The draw pile: a 60-card Uno deck with one copy of each colored rank
//! plus four Wild and four Wild Draw Four cards.

use super::card::{Card, Color, Rank};
use rand::seq::SliceRandom;

/// 4 colors x 13 ranks, plus 8 wild-ranked cards.
pub const DECK_SIZE: usize = 60;

pub struct Deck {
    // Private so every mutation goes through the pile discipline below;
    // the top of the pile is the end of the vector.
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Builds the canonical multiset in a deterministic order.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &color in &Color::CONCRETE {
            for &rank in &Rank::COLORED {
                cards.push(Card { rank, color });
            }
        }
        for _ in 0..4 {
            cards.push(Card::wild(Rank::Wild));
            cards.push(Card::wild(Rank::WildDrawFour));
        }
        Deck { cards }
    }

    /// An empty pile, for games that have not been dealt yet.
    pub fn empty() -> Self {
        Deck { cards: Vec::new() }
    }

    /// Uniformly random permutation (Fisher-Yates via `rand`).
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::rng());
    }

    /// Pops the top card. `None` means the pile ran dry; callers decide
    /// whether that is an error, the deck never reshuffles itself.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Slides a card under the pile. Used when the starting flip turns up
    /// a wild that may not open the discard.
    pub fn tuck_under(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
