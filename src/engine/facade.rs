//! The single entry point external callers use: one operation per intent,
//! resolving the session, serializing on the game's own lock, and mapping
//! the outcome into a reply or a typed rejection.

use tracing::info;

use crate::cards::card::{Card, Color};
use crate::engine::error::GameError;
use crate::engine::intent::{Intent, PlayerRef};
use crate::engine::registry::GameRegistry;
use crate::engine::snapshot::{EngineReply, GameSnapshot, HandView};
use crate::uno::state::{GamePhase, Player};

#[derive(Default)]
pub struct UnoEngine {
    registry: GameRegistry,
}

impl UnoEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes one intent. Exhaustive over `Intent`, so a new intent cannot
    /// be added without deciding its handling here.
    pub async fn dispatch(
        &self,
        session: &str,
        player: &PlayerRef,
        intent: Intent,
    ) -> Result<EngineReply, GameError> {
        match intent {
            Intent::Create => self.create(session, player).await.map(EngineReply::State),
            Intent::Join => self.join(session, player).await.map(EngineReply::State),
            Intent::Start => self.start(session, player).await.map(EngineReply::State),
            Intent::Play { card, chosen_color } => self
                .play(session, player, card, chosen_color)
                .await
                .map(EngineReply::State),
            Intent::Draw => self
                .draw(session, player)
                .await
                .map(|(card, state)| EngineReply::Drew { card, state }),
            Intent::Pass => self.pass(session, player).await.map(EngineReply::State),
            Intent::Status => self.status(session).await.map(EngineReply::State),
            Intent::Hand => self.hand(session, player).await.map(EngineReply::Hand),
            Intent::Quit => self.quit(session, player).await.map(EngineReply::State),
        }
    }

    pub async fn create(
        &self,
        session: &str,
        player: &PlayerRef,
    ) -> Result<GameSnapshot, GameError> {
        let host = Player::new(&player.id, &player.name);
        let handle = self.registry.create(session, host).await?;
        let game = handle.lock().await;
        info!(target: "uno.engine", session, host = %player.name, "game created");
        Ok(game.snapshot())
    }

    pub async fn join(&self, session: &str, player: &PlayerRef) -> Result<GameSnapshot, GameError> {
        let handle = self.registry.get(session).await?;
        let mut game = handle.lock().await;
        game.join(Player::new(&player.id, &player.name))?;
        Ok(game.snapshot())
    }

    pub async fn start(
        &self,
        session: &str,
        _player: &PlayerRef,
    ) -> Result<GameSnapshot, GameError> {
        let handle = self.registry.get(session).await?;
        let mut game = handle.lock().await;
        game.start()?;
        Ok(game.snapshot())
    }

    /// A winning play finishes the game; the finished session is evicted in
    /// the same call, so later calls on the key see `SessionNotFound`.
    pub async fn play(
        &self,
        session: &str,
        player: &PlayerRef,
        card: Card,
        chosen_color: Option<Color>,
    ) -> Result<GameSnapshot, GameError> {
        let handle = self.registry.get(session).await?;
        let snapshot = {
            let mut game = handle.lock().await;
            game.play(&player.id, card, chosen_color)?;
            game.snapshot()
        };
        if snapshot.phase == GamePhase::Finished {
            self.registry.remove(session).await;
        }
        Ok(snapshot)
    }

    pub async fn draw(
        &self,
        session: &str,
        player: &PlayerRef,
    ) -> Result<(Card, GameSnapshot), GameError> {
        let handle = self.registry.get(session).await?;
        let mut game = handle.lock().await;
        let card = game.draw_for_turn(&player.id)?;
        Ok((card, game.snapshot()))
    }

    pub async fn pass(&self, session: &str, player: &PlayerRef) -> Result<GameSnapshot, GameError> {
        let handle = self.registry.get(session).await?;
        let mut game = handle.lock().await;
        game.pass(&player.id)?;
        Ok(game.snapshot())
    }

    pub async fn status(&self, session: &str) -> Result<GameSnapshot, GameError> {
        let handle = self.registry.get(session).await?;
        let game = handle.lock().await;
        Ok(game.snapshot())
    }

    pub async fn hand(&self, session: &str, player: &PlayerRef) -> Result<HandView, GameError> {
        let handle = self.registry.get(session).await?;
        let game = handle.lock().await;
        game.hand_view(&player.id)
    }

    /// Early termination: any seated player may end the game; it finishes
    /// with no winner and the session key frees up immediately.
    pub async fn quit(&self, session: &str, player: &PlayerRef) -> Result<GameSnapshot, GameError> {
        let handle = self.registry.get(session).await?;
        let snapshot = {
            let mut game = handle.lock().await;
            game.abort(&player.id)?;
            game.snapshot()
        };
        self.registry.remove(session).await;
        Ok(snapshot)
    }

    /// Number of live sessions; mainly for operator introspection.
    pub async fn session_count(&self) -> usize {
        self.registry.session_count().await
    }
}
