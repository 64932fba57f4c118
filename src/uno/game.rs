//! State-machine transitions for an Uno session.
//!
//! Every operation validates fully before touching state: a rejected
//! transition leaves the game exactly as it found it.

use tracing::{debug, info, warn};

use super::state::{GamePhase, Player, UnoGame};
use crate::cards::card::{Card, Color};
use crate::cards::deck::Deck;
use crate::cards::rules::{self, Effect};
use crate::engine::error::GameError;
use crate::engine::snapshot::{GameSnapshot, HandView, PlayerSummary};

impl UnoGame {
    fn ensure_active(&self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Active => Ok(()),
            GamePhase::Lobby => Err(GameError::GameNotStarted),
            GamePhase::Finished => Err(GameError::GameFinished),
        }
    }

    /// Seats a new player while the lobby is open.
    pub fn join(&mut self, player: Player) -> Result<(), GameError> {
        if self.phase != GamePhase::Lobby {
            return Err(GameError::SessionAlreadyActive);
        }
        if self.players.len() >= Self::MAX_PLAYERS {
            return Err(GameError::LobbyFull);
        }
        if self.seat_of(&player.id).is_some() {
            return Err(GameError::AlreadyJoined);
        }
        debug!(target: "uno.game", session = %self.session, player = %player.name, "player joined");
        self.players.push(player);
        Ok(())
    }

    /// Deals seven cards to each player in join order, flips the starting
    /// discard, and opens play with the first joiner.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Lobby {
            return Err(GameError::SessionAlreadyActive);
        }
        if self.players.len() < Self::MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }

        let mut deck = Deck::new();
        deck.shuffle();
        for player in self.players.iter_mut() {
            for _ in 0..Self::HAND_SIZE {
                if let Some(card) = deck.draw() {
                    player.hand.push(card);
                }
            }
        }

        // The starting discard must never be wild: turn 1 would otherwise
        // open on an unresolved color. Wild flips go back under the pile;
        // only eight wilds exist, so a non-wild always surfaces.
        while let Some(card) = deck.draw() {
            if card.is_wild() {
                deck.tuck_under(card);
            } else {
                self.discard.push(card);
                break;
            }
        }

        self.deck = deck;
        self.phase = GamePhase::Active;
        self.current_player_index = 0;
        self.direction = 1;
        self.turn_count = 1;
        self.drew_this_turn = false;
        info!(
            target: "uno.game",
            session = %self.session,
            players = self.players.len(),
            "game started"
        );
        Ok(())
    }

    /// Plays one card for `player_id`. Checks run in a fixed order and the
    /// first failure wins; state is only mutated once every check passes.
    pub fn play(
        &mut self,
        player_id: &str,
        card: Card,
        chosen_color: Option<Color>,
    ) -> Result<(), GameError> {
        self.ensure_active()?;
        let seat = self.seat_of(player_id).ok_or(GameError::NotInGame)?;
        if seat != self.current_player_index {
            return Err(GameError::NotYourTurn);
        }

        // Wild cards in hand are colorless, so identity there is rank-only;
        // colored cards must match on both fields.
        let held_index = self.players[seat]
            .hand
            .iter()
            .position(|c| {
                c.rank == card.rank && (card.rank.is_wild() || c.color == card.color)
            })
            .ok_or(GameError::CardNotInHand)?;
        let held = self.players[seat].hand[held_index];

        if !rules::is_playable(held, self.top_of_discard()) {
            return Err(GameError::InvalidCard);
        }

        let effect = rules::effect_of(held);
        let recolor = if held.is_wild() {
            match chosen_color {
                Some(color) if color.is_concrete() => Some(color),
                _ => return Err(GameError::MissingOrInvalidColor),
            }
        } else {
            None
        };

        // All checks passed; commit.
        let mut played = self.players[seat].hand.remove(held_index);
        if let Some(color) = recolor {
            played.color = color;
        }
        self.discard.push(played);
        self.drew_this_turn = false;

        let mut advance = 1;
        match effect {
            Effect::None | Effect::RecolorWild => {}
            Effect::SkipNext => advance = 2,
            Effect::ReverseOrder => {
                // Flip first, then advance in the new direction. With two
                // players a Reverse doubles as a Skip, so the acting player
                // goes again.
                self.direction = -self.direction;
                if self.players.len() == 2 {
                    advance = 2;
                }
            }
            Effect::DrawTwoForNext => {
                self.penalty_draw(2);
                advance = 2;
            }
            Effect::DrawFourForNext => {
                self.penalty_draw(4);
                advance = 2;
            }
        }

        if self.players[seat].hand.is_empty() {
            self.finish_with_winner(seat);
            return Ok(());
        }

        self.turn_count += 1;
        self.advance_turn(advance);
        Ok(())
    }

    /// Draws one card into the current player's hand. The turn does not
    /// advance: the player may still play the drawn card, or `pass`.
    pub fn draw_for_turn(&mut self, player_id: &str) -> Result<Card, GameError> {
        self.ensure_active()?;
        let seat = self.seat_of(player_id).ok_or(GameError::NotInGame)?;
        if seat != self.current_player_index {
            return Err(GameError::NotYourTurn);
        }
        let card = self.deck.draw().ok_or(GameError::DeckEmpty)?;
        self.players[seat].hand.push(card);
        self.drew_this_turn = true;
        Ok(card)
    }

    /// Yields the turn without playing. Only legal after at least one draw
    /// this turn, so a turn always ends through an explicit action. An
    /// empty draw pile waives the draw requirement, otherwise a player with
    /// no playable card could never yield.
    pub fn pass(&mut self, player_id: &str) -> Result<(), GameError> {
        self.ensure_active()?;
        let seat = self.seat_of(player_id).ok_or(GameError::NotInGame)?;
        if seat != self.current_player_index {
            return Err(GameError::NotYourTurn);
        }
        if !self.drew_this_turn && !self.deck.is_empty() {
            return Err(GameError::MustDrawFirst);
        }
        self.drew_this_turn = false;
        self.turn_count += 1;
        self.advance_turn(1);
        Ok(())
    }

    /// Caller-initiated early termination: the game finishes with no
    /// winner. Any seated player may end the game in any phase.
    pub fn abort(&mut self, player_id: &str) -> Result<(), GameError> {
        if self.phase == GamePhase::Finished {
            return Err(GameError::GameFinished);
        }
        self.seat_of(player_id).ok_or(GameError::NotInGame)?;
        self.phase = GamePhase::Finished;
        self.winner = None;
        info!(target: "uno.game", session = %self.session, by = %player_id, "game ended early");
        Ok(())
    }

    /// The next player in the current direction draws penalty cards. A
    /// short deck is not fatal here: the player takes what remains.
    fn penalty_draw(&mut self, count: usize) {
        let target = self.seat_at(1);
        for drawn in 0..count {
            match self.deck.draw() {
                Some(card) => self.players[target].hand.push(card),
                None => {
                    warn!(
                        target: "uno.game",
                        session = %self.session,
                        player = %self.players[target].name,
                        short = count - drawn,
                        "draw pile exhausted during penalty draw"
                    );
                    break;
                }
            }
        }
    }

    fn finish_with_winner(&mut self, seat: usize) {
        let tally: u32 = self
            .players
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != seat)
            .flat_map(|(_, p)| p.hand.iter())
            .map(|&c| rules::points(c))
            .sum();
        self.players[seat].score += tally;
        self.winner = Some(self.players[seat].id.clone());
        self.phase = GamePhase::Finished;
        info!(
            target: "uno.game",
            session = %self.session,
            winner = %self.players[seat].name,
            score = tally,
            "game finished"
        );
    }

    /// Seat `steps` ahead of the current player in the current direction.
    fn seat_at(&self, steps: usize) -> usize {
        let len = self.players.len() as i64;
        let offset = self.direction as i64 * steps as i64;
        (self.current_player_index as i64 + offset).rem_euclid(len) as usize
    }

    fn advance_turn(&mut self, steps: usize) {
        self.current_player_index = self.seat_at(steps);
    }

    /// Read-only projection of the session; never mutates.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            session: self.session.clone(),
            phase: self.phase,
            players: self
                .players
                .iter()
                .map(|p| PlayerSummary {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    cards_held: p.hand.len(),
                    score: p.score,
                })
                .collect(),
            current_player: match self.phase {
                GamePhase::Active => Some(self.current_player().id.clone()),
                _ => None,
            },
            top_of_discard: self.top_of_discard(),
            deck_size: self.deck.cards_remaining(),
            discard_size: self.discard.len(),
            turn_count: self.turn_count,
            direction: self.direction,
            winner: self.winner.clone(),
        }
    }

    /// The acting player's own cards; the only view that exposes a hand.
    pub fn hand_view(&self, player_id: &str) -> Result<HandView, GameError> {
        let seat = self.seat_of(player_id).ok_or(GameError::NotInGame)?;
        Ok(HandView {
            player_id: self.players[seat].id.clone(),
            cards: self.players[seat].hand.clone(),
        })
    }
}
