//! Headless demo host
//!
//! Drives the simulation core the way a real presentation layer would:
//! sample input, call `tick`, inspect the result, read the frame. Input is
//! scripted (hold fire, sweep side to side) so a run is reproducible from
//! its seed alone.

use trench_run::{GamePhase, GameState, TickInput, tick};

/// Two minutes at the fixed cadence
const MAX_TICKS: u64 = 60 * 120;

fn scripted_input(t: u64) -> TickInput {
    let sweep_left = (t / 120) % 2 == 0;
    TickInput {
        left: sweep_left,
        right: !sweep_left,
        up: false,
        down: false,
        fire: true,
        restart: false,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x7ae5c);
    let mut state = GameState::new(seed);

    for t in 0..MAX_TICKS {
        let input = scripted_input(t);
        if let Err(e) = tick(&mut state, &input) {
            log::error!("tick {t} fault, stopping: {e}");
            std::process::exit(1);
        }
        if state.phase != GamePhase::Playing {
            break;
        }
    }

    let frame = state.frame();
    log::info!(
        "run over: {:?}, score {}, kills {}/{} ({:.0}% accuracy), {:.1}s survived",
        frame.player.phase,
        frame.stats.score,
        frame.stats.kills,
        frame.stats.spawned,
        frame.stats.accuracy(),
        frame.stats.survival_secs,
    );
}
