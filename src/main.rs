//! Bomber Arena Demo
//!
//! Runs a scripted session against the headless host: loads the bundled
//! map, seats four players, walks one of them clear, and lets the fuse
//! timers decide the rest.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bomber_arena::{
    GameEvent, GameSession, HeadlessUi, SessionConfig, SessionPhase, DEFAULT_MAP, VERSION,
};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Bomber Arena v{}", VERSION);

    demo_session()
}

/// Scripted session against the headless host.
fn demo_session() -> Result<()> {
    info!("=== Starting Demo Session ===");

    let config = SessionConfig::default();
    let fuse = config.bomb_fuse_ticks;
    let mut session = GameSession::from_source(DEFAULT_MAP, config, HeadlessUi::new())?;
    session.start();

    for player in session.players() {
        info!(
            "Player {} seated at ({}, {})",
            player.id, player.position.x, player.position.y
        );
    }

    // Player 0 plants and runs; the rest stand on their own bombs.
    let script: &[(usize, &str)] = &[
        (0, "dropBomb"),
        (0, "right"),
        (1, "dropBomb"),
        (2, "dropBomb"),
        (3, "dropBomb"),
        (0, "right"),
        (0, "jump"), // unknown token, ignored by the session
    ];
    for (player_id, token) in script {
        session.handle_command(*player_id, token);
    }
    report(session.drain_events());

    let mut ticks = 0;
    while session.phase() == SessionPhase::Playing && ticks <= fuse {
        session.tick();
        ticks += 1;
        report(session.drain_events());
    }

    info!("Session ended after {} ticks", ticks);
    info!(
        "End screen revealed: {}",
        session.ui().end_screen_revealed()
    );
    Ok(())
}

/// Log drained events the way a host UI would consume them.
fn report(events: Vec<GameEvent>) {
    for event in events {
        match event {
            GameEvent::MapLoaded {
                width,
                height,
                player_slots,
            } => {
                info!("Map published: {}x{}, {} seats", width, height, player_slots);
            }
            GameEvent::BombPlanted { player_id, position } => {
                info!(
                    "Player {} planted a bomb at ({}, {})",
                    player_id, position.x, position.y
                );
            }
            GameEvent::Detonation { position } => {
                info!("Boom at ({}, {})", position.x, position.y);
            }
            GameEvent::PlayerDied { player_id, position } => {
                info!("Player {} died at ({}, {})", player_id, position.x, position.y);
            }
            GameEvent::GameOver { survivor } => match survivor {
                Some(id) => info!("Game over! Player {} survives", id),
                None => info!("Game over! Nobody survives"),
            },
            GameEvent::PlayerMoved { player_id, to, .. } => {
                info!("Player {} moved to ({}, {})", player_id, to.x, to.y);
            }
        }
    }
}
