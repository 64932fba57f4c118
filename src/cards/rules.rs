//! Pure decision support: play legality, card effects, and scoring values.
//! Nothing here mutates game state.

use super::card::{Card, Rank};

/// The rule-defined consequence of playing a card beyond discarding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SkipNext,
    ReverseOrder,
    DrawTwoForNext,
    DrawFourForNext,
    RecolorWild,
}

/// A card may be played when it is wild-ranked, or shares a color or rank
/// with the top of the discard. Everything is playable onto an empty
/// discard (only relevant before the starting card is flipped).
pub fn is_playable(card: Card, top_of_discard: Option<Card>) -> bool {
    match top_of_discard {
        None => true,
        Some(top) => card.rank.is_wild() || card.color == top.color || card.rank == top.rank,
    }
}

pub fn effect_of(card: Card) -> Effect {
    match card.rank {
        Rank::Skip => Effect::SkipNext,
        Rank::Reverse => Effect::ReverseOrder,
        Rank::DrawTwo => Effect::DrawTwoForNext,
        Rank::Wild => Effect::RecolorWild,
        Rank::WildDrawFour => Effect::DrawFourForNext,
        _ => Effect::None,
    }
}

/// Standard Uno scoring value, used to tally the winner's score from the
/// cards opponents are left holding.
pub fn points(card: Card) -> u32 {
    match card.rank.digit() {
        Some(n) => u32::from(n),
        None => match card.rank {
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => 20,
            _ => 50,
        },
    }
}
