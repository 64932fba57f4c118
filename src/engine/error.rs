//! Typed rejection reasons. Every expected rule violation is one of these;
//! the engine never panics for a bad play, and the caller decides how to
//! render each kind.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no game exists for this session")]
    SessionNotFound,
    #[error("a game is already running for this session")]
    SessionAlreadyActive,
    #[error("the lobby already holds the maximum of four players")]
    LobbyFull,
    #[error("player is already in this game")]
    AlreadyJoined,
    #[error("at least two players are required to start")]
    NotEnoughPlayers,
    #[error("the game has not started yet")]
    GameNotStarted,
    #[error("the game has already finished")]
    GameFinished,
    #[error("player is not part of this game")]
    NotInGame,
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("player does not hold that card")]
    CardNotInHand,
    #[error("that card cannot be played on the current discard")]
    InvalidCard,
    #[error("a wild play requires choosing red, blue, green, or yellow")]
    MissingOrInvalidColor,
    #[error("passing requires drawing a card first")]
    MustDrawFirst,
    #[error("the draw pile is empty")]
    DeckEmpty,
}
