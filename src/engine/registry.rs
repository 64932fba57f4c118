//! Tracks every live session and hands out per-game handles.
//!
//! The map's `RwLock` makes create/evict atomic across callers; each game
//! behind its own `Mutex` serializes transitions for that session while
//! games on different keys proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::engine::error::GameError;
use crate::uno::state::{Player, UnoGame};

pub type GameHandle = Arc<Mutex<UnoGame>>;

#[derive(Default)]
pub struct GameRegistry {
    games: RwLock<HashMap<String, GameHandle>>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fresh lobby for `session`. Two racing creates for one key
    /// resolve under the write lock: exactly one wins, the other sees
    /// `SessionAlreadyActive`.
    pub async fn create(&self, session: &str, host: Player) -> Result<GameHandle, GameError> {
        let mut games = self.games.write().await;
        if games.contains_key(session) {
            return Err(GameError::SessionAlreadyActive);
        }
        let handle = Arc::new(Mutex::new(UnoGame::new(session, host)));
        games.insert(session.to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    pub async fn get(&self, session: &str) -> Result<GameHandle, GameError> {
        self.games
            .read()
            .await
            .get(session)
            .cloned()
            .ok_or(GameError::SessionNotFound)
    }

    /// Finished games are removed outright, never left as tombstones; the
    /// key becomes immediately reusable.
    pub async fn remove(&self, session: &str) {
        self.games.write().await.remove(session);
    }

    pub async fn session_count(&self) -> usize {
        self.games.read().await.len()
    }
}
