//! One Uno session: its data layout (`state`) and its state-machine
//! transitions (`game`).

pub mod game;
pub mod state;

pub use state::{GamePhase, Player, UnoGame};
