//! Headless match runner
//!
//! Drives the simulation shell-side: a trivial ball-chasing policy produces
//! the per-tick input intents for both players, match events go to the log,
//! and the final state is dumped as JSON. Handy for smoke-testing balance
//! changes without a rendering shell.
//!
//! Usage: `arcade-volley [seed]`

use arcade_volley::Tuning;
use arcade_volley::consts::SIM_HZ;
use arcade_volley::sim::{GameEvent, GameState, PlayerInput, Side, TickInput, tick};

/// Move toward the ball while it is on our half, otherwise re-center;
/// hop when the ball is falling close overhead.
fn chase(state: &GameState, side: Side) -> PlayerInput {
    let me = state.player(side);
    let ball = &state.ball;

    let on_my_half = match side {
        Side::Left => ball.pos.x < state.tuning.court_mid(),
        Side::Right => ball.pos.x >= state.tuning.court_mid(),
    };
    let (min_x, max_x) = me.x_bounds(&state.tuning);
    let target = if on_my_half {
        ball.pos.x
    } else {
        (min_x + max_x) / 2.0
    };

    let deadzone = state.tuning.player_speed;
    PlayerInput {
        move_left: target < me.pos.x - deadzone,
        move_right: target > me.pos.x + deadzone,
        jump: on_my_half
            && ball.vel.y > 0.0
            && ball.pos.y < me.pos.y
            && (ball.pos.x - me.pos.x).abs() < 60.0,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut state = match GameState::new(Tuning::default(), seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid tuning: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Starting match (seed {seed})");

    // Global stop: cap the run at ten simulated minutes
    let max_ticks = 10 * 60 * SIM_HZ as u64;
    'run: while state.time_ticks < max_ticks {
        let input = TickInput {
            left: chase(&state, Side::Left),
            right: chase(&state, Side::Right),
            restart: false,
        };

        for event in tick(&mut state, &input) {
            match event {
                GameEvent::PointScored { scorer } => {
                    let [left, right] = state.scores();
                    log::info!("Point for {scorer:?} ({left}-{right})");
                }
                GameEvent::RallyStarted => log::debug!("Rally started"),
                GameEvent::MatchWon { winner } => {
                    log::info!(
                        "Match won by {winner:?} after {} ticks ({:.1}s of play)",
                        state.time_ticks,
                        state.time_ticks as f32 / SIM_HZ as f32,
                    );
                    break 'run;
                }
                GameEvent::MatchRestarted => {}
            }
        }
    }

    if state.winner().is_none() {
        log::warn!("Tick cap reached without a winner");
    }

    match serde_json::to_string_pretty(&state) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(e) => log::error!("Snapshot failed: {e}"),
    }
}
