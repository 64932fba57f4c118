//! The caller-facing layer: intents in, snapshots or typed rejections out.

pub mod error;
pub mod facade;
pub mod intent;
pub mod registry;
pub mod snapshot;

pub use error::GameError;
pub use facade::UnoEngine;
pub use intent::{Intent, PlayerRef};
pub use registry::{GameHandle, GameRegistry};
pub use snapshot::{EngineReply, GameSnapshot, HandView, PlayerSummary};
