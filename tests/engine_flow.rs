//! Facade tests: full intent flows through `UnoEngine`, including the
//! concurrency guarantees around the session registry.

use uno_engine::cards::deck::DECK_SIZE;
use uno_engine::cards::rules::is_playable;
use uno_engine::{
    Card, Color, EngineReply, GameError, GamePhase, GameSnapshot, Intent, PlayerRef, UnoEngine,
};

fn alice() -> PlayerRef {
    PlayerRef::new("u1", "Alice")
}

fn bob() -> PlayerRef {
    PlayerRef::new("u2", "Bob")
}

async fn two_player_game(engine: &UnoEngine, session: &str) -> GameSnapshot {
    engine.create(session, &alice()).await.unwrap();
    engine.join(session, &bob()).await.unwrap();
    engine.start(session, &alice()).await.unwrap()
}

fn cards_on_table(snapshot: &GameSnapshot) -> usize {
    snapshot.deck_size
        + snapshot.discard_size
        + snapshot.players.iter().map(|p| p.cards_held).sum::<usize>()
}

#[tokio::test]
async fn create_join_start_status_flow() {
    let engine = UnoEngine::new();
    let snap = two_player_game(&engine, "c1").await;

    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.current_player.as_deref(), Some("u1"));
    assert_eq!(snap.turn_count, 1);
    assert_eq!(snap.players.len(), 2);
    for player in &snap.players {
        assert_eq!(player.cards_held, 7);
    }
    assert_eq!(snap.deck_size, DECK_SIZE - 1 - 14);
    assert_eq!(snap.discard_size, 1);
    assert!(!snap.top_of_discard.unwrap().is_wild());
    assert_eq!(cards_on_table(&snap), DECK_SIZE);

    // Status is a pure read: two calls agree.
    let status = engine.status("c1").await.unwrap();
    assert_eq!(status, engine.status("c1").await.unwrap());
}

#[tokio::test]
async fn unknown_session_is_reported() {
    let engine = UnoEngine::new();
    assert_eq!(
        engine.status("nowhere").await,
        Err(GameError::SessionNotFound)
    );
    assert_eq!(
        engine.join("nowhere", &bob()).await,
        Err(GameError::SessionNotFound)
    );
}

#[tokio::test]
async fn duplicate_create_is_rejected_until_quit() {
    let engine = UnoEngine::new();
    engine.create("c1", &alice()).await.unwrap();
    assert_eq!(
        engine.create("c1", &bob()).await,
        Err(GameError::SessionAlreadyActive)
    );

    let snap = engine.quit("c1", &alice()).await.unwrap();
    assert_eq!(snap.phase, GamePhase::Finished);
    assert_eq!(snap.winner, None);

    // The key frees up the moment the game ends.
    assert_eq!(engine.status("c1").await, Err(GameError::SessionNotFound));
    engine.create("c1", &bob()).await.unwrap();
}

#[tokio::test]
async fn racing_creates_resolve_to_one_winner() {
    let engine = UnoEngine::new();
    let alice = alice();
    let bob = bob();
    let (a, b) = tokio::join!(
        engine.create("race", &alice),
        engine.create("race", &bob)
    );
    assert_eq!(
        a.is_ok() as u8 + b.is_ok() as u8,
        1,
        "exactly one create may win"
    );
    assert_eq!(engine.session_count().await, 1);
}

#[tokio::test]
async fn sessions_on_different_keys_are_independent() {
    let engine = UnoEngine::new();
    two_player_game(&engine, "c1").await;
    two_player_game(&engine, "c2").await;
    assert_eq!(engine.session_count().await, 2);

    engine.quit("c1", &alice()).await.unwrap();
    assert_eq!(engine.status("c2").await.unwrap().phase, GamePhase::Active);
}

#[tokio::test]
async fn hand_is_private_and_membership_checked() {
    let engine = UnoEngine::new();
    two_player_game(&engine, "c1").await;

    let view = engine.hand("c1", &alice()).await.unwrap();
    assert_eq!(view.player_id, "u1");
    assert_eq!(view.cards.len(), 7);

    let stranger = PlayerRef::new("u9", "Mallory");
    assert_eq!(
        engine.hand("c1", &stranger).await,
        Err(GameError::NotInGame)
    );
}

#[tokio::test]
async fn out_of_turn_and_unheld_plays_are_rejected() {
    let engine = UnoEngine::new();
    let snap = two_player_game(&engine, "c1").await;
    let top = snap.top_of_discard.unwrap();

    assert_eq!(
        engine.play("c1", &bob(), top, None).await,
        Err(GameError::NotYourTurn)
    );

    // Pick a colored card Alice provably does not hold: 52 exist and she
    // holds at most 7.
    let hand = engine.hand("c1", &alice()).await.unwrap().cards;
    let mut full_deck = uno_engine::cards::Deck::new();
    let mut deck_cards = Vec::new();
    while let Some(card) = full_deck.draw() {
        deck_cards.push(card);
    }
    let unheld = deck_cards
        .into_iter()
        .find(|c| !c.is_wild() && !hand.contains(c))
        .unwrap();
    assert_eq!(
        engine.play("c1", &alice(), unheld, None).await,
        Err(GameError::CardNotInHand)
    );

    // Rejections mutate nothing.
    assert_eq!(engine.status("c1").await.unwrap(), snap);
}

#[tokio::test]
async fn turn_draw_returns_the_card_privately() {
    let engine = UnoEngine::new();
    two_player_game(&engine, "c1").await;

    assert_eq!(
        engine.draw("c1", &bob()).await,
        Err(GameError::NotYourTurn)
    );

    let (card, snap) = engine.draw("c1", &alice()).await.unwrap();
    assert_eq!(snap.players[0].cards_held, 8);
    assert_eq!(snap.current_player.as_deref(), Some("u1"));
    let hand = engine.hand("c1", &alice()).await.unwrap();
    assert!(hand.cards.contains(&card));

    let snap = engine.pass("c1", &alice()).await.unwrap();
    assert_eq!(snap.current_player.as_deref(), Some("u2"));
    assert_eq!(snap.turn_count, 2);
}

#[tokio::test]
async fn dispatch_routes_every_intent() {
    let engine = UnoEngine::new();
    let reply = engine
        .dispatch("c1", &alice(), Intent::Create)
        .await
        .unwrap();
    match reply {
        EngineReply::State(snap) => assert_eq!(snap.phase, GamePhase::Lobby),
        other => panic!("unexpected reply: {:?}", other),
    }

    engine
        .dispatch("c1", &bob(), Intent::Join)
        .await
        .unwrap();
    assert_eq!(
        engine.dispatch("c1", &bob(), Intent::Join).await,
        Err(GameError::AlreadyJoined)
    );
    engine
        .dispatch("c1", &alice(), Intent::Start)
        .await
        .unwrap();

    match engine.dispatch("c1", &alice(), Intent::Hand).await.unwrap() {
        EngineReply::Hand(view) => assert_eq!(view.cards.len(), 7),
        other => panic!("unexpected reply: {:?}", other),
    }
    match engine.dispatch("c1", &alice(), Intent::Draw).await.unwrap() {
        EngineReply::Drew { state, .. } => assert_eq!(state.players[0].cards_held, 8),
        other => panic!("unexpected reply: {:?}", other),
    }
    match engine.dispatch("c1", &alice(), Intent::Quit).await.unwrap() {
        EngineReply::State(snap) => assert_eq!(snap.phase, GamePhase::Finished),
        other => panic!("unexpected reply: {:?}", other),
    }
}

/// Drives a whole game with a first-playable-card bot, checking card
/// conservation after every transition. A finished game must also have
/// been evicted by the facade.
#[tokio::test]
async fn bot_game_conserves_cards_and_evicts_on_finish() {
    let engine = UnoEngine::new();
    two_player_game(&engine, "c1").await;
    let players = [alice(), bob()];

    let mut finished = None;
    for _ in 0..500 {
        let snap = match engine.status("c1").await {
            Ok(snap) => snap,
            Err(GameError::SessionNotFound) => break,
            Err(e) => panic!("unexpected error: {}", e),
        };
        assert_eq!(cards_on_table(&snap), DECK_SIZE);

        let current_id = snap.current_player.clone().unwrap();
        let actor = players.iter().find(|p| p.id == current_id).unwrap();
        let hand = engine.hand("c1", actor).await.unwrap().cards;
        let playable = hand
            .iter()
            .copied()
            .find(|&c| is_playable(c, snap.top_of_discard));

        let result: Result<GameSnapshot, GameError> = match playable {
            Some(card) => {
                let chosen: Option<Color> = card.is_wild().then_some(Color::Green);
                engine.play("c1", actor, card, chosen).await
            }
            None => match engine.draw("c1", actor).await {
                Ok(_) => continue,
                Err(GameError::DeckEmpty) => engine.pass("c1", actor).await,
                Err(e) => panic!("unexpected error: {}", e),
            },
        };
        let after = result.unwrap();
        if after.phase == GamePhase::Finished {
            finished = Some(after);
            break;
        }
    }

    if let Some(last) = finished {
        let winner = last.winner.expect("a winning play names a winner");
        let summary = last.players.iter().find(|p| p.id == winner).unwrap();
        assert_eq!(summary.cards_held, 0);
        // Evicted in the same call that finished it.
        assert_eq!(engine.status("c1").await, Err(GameError::SessionNotFound));
        assert!(engine.create("c1", &alice()).await.is_ok());
    }
}

#[tokio::test]
async fn parsed_chat_card_plays_through_the_facade() {
    // The dispatcher splits `play 7 red` and hands the engine a parsed
    // card. Simulate that path end to end against a known hand.
    let engine = UnoEngine::new();
    two_player_game(&engine, "c1").await;

    let hand = engine.hand("c1", &alice()).await.unwrap().cards;
    let spelled = hand[0].to_string();
    let reparsed: Card = spelled.parse().unwrap();
    if reparsed.is_wild() {
        // A colorless wild needs an explicit chosen color.
        assert_eq!(
            engine.play("c1", &alice(), reparsed, None).await,
            Err(GameError::MissingOrInvalidColor)
        );
    } else {
        assert_eq!(reparsed, hand[0]);
    }
}
