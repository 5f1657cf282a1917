//! Minicade headless demo entry point
//!
//! Runs a short scripted flyer session through the public API and logs the
//! outcome. Rendering and real input capture live in an embedding shell;
//! this binary exists to smoke-run the simulation from the command line.

use minicade::flyer::FlyerState;
use minicade::input::{Control, Inputs};
use minicade::settings::Settings;
use minicade::sim::{Command, Phase, Session};

fn main() {
    env_logger::init();
    log::info!("minicade headless demo starting");

    let settings = Settings::default();
    let mut session = Session::new(FlyerState::new(0xC0FFEE, settings.game_speed()));
    let mut inputs = Inputs::new();
    session.command(Command::Start);

    // Weave left and right for up to a minute of simulated time.
    let mut now_ms = 0.0;
    for frame in 0..3600u32 {
        if frame % 120 == 0 {
            inputs.clear();
            inputs.press(if (frame / 120) % 2 == 0 {
                Control::Left
            } else {
                Control::Right
            });
        }
        session.update(now_ms, &inputs);
        now_ms += 16.7;
        if session.phase() == Phase::GameOver {
            break;
        }
    }

    let flyer = session.sim();
    log::info!(
        "demo finished in {:?}: score {}, {} hazards live, best {:?}",
        session.phase(),
        flyer.score,
        flyer.hazards.len(),
        flyer.best_score.get()
    );
}
