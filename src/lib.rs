//! Turn-based multiplayer Uno-variant game engine.
//!
//! The engine is transport-agnostic: a chat dispatcher (or anything else)
//! feeds it structured intents keyed by an opaque session id plus an acting
//! player identity, and renders the snapshots or typed rejections it gets
//! back. No text formatting, delivery, or persistence happens here; games
//! live in process memory for the process lifetime.
//!
//! Typical flow: build one [`UnoEngine`], then call [`UnoEngine::dispatch`]
//! (or the per-intent methods) from however many concurrent callers you
//! like. Sessions on different keys run in parallel; transitions within one
//! session are serialized on that game's own lock.

pub mod cards;
pub mod engine;
pub mod uno;

// Convenient re-exports for the types nearly every caller touches.
pub use cards::card::{Card, Color, ParseCardError, Rank};
pub use engine::error::GameError;
pub use engine::facade::UnoEngine;
pub use engine::intent::{Intent, PlayerRef};
pub use engine::snapshot::{EngineReply, GameSnapshot, HandView, PlayerSummary};
pub use uno::state::{GamePhase, Player, UnoGame};
