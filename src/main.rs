//! Coin Dash entry point
//!
//! Headless demo driver: stands in for the external frame scheduler and
//! input collaborators. It advances a session at the fixed ~16ms cadence
//! with a scripted input track and prints JSON state snapshots the way a
//! renderer would read them.

use std::thread;
use std::time::Duration;

use coin_dash::consts::TICK_DT;
use coin_dash::{GameSession, MoveDir};

/// Demo length: 10 seconds of simulated time
const DEMO_TICKS: u32 = 600;

fn main() {
    env_logger::init();
    log::info!("coin-dash (headless demo) starting...");

    let mut session = GameSession::new();
    let frame = Duration::from_secs_f32(TICK_DT);

    // Scripted input track: run right the whole way, hop every 2 seconds
    session.set_horizontal_velocity(MoveDir::Right);

    for tick_no in 0..DEMO_TICKS {
        if tick_no % 120 == 0 {
            session.jump();
        }
        session.advance();

        // Snapshot once a second, as the render collaborator would
        if tick_no % 60 == 0 {
            match serde_json::to_string(session.state()) {
                Ok(json) => println!("{json}"),
                Err(err) => log::error!("snapshot serialization failed: {err}"),
            }
        }

        if session.is_over() {
            break;
        }

        thread::sleep(frame);
    }

    log::info!(
        "demo finished: {} ticks, score {}, over: {}",
        session.state().time_ticks,
        session.score(),
        session.is_over()
    );
}
