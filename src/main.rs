//=========================================================================
// Aetheric Locomotion Demo
//=========================================================================
//
// Opens a window and drives the locomotion controller from the keyboard:
//
//   W / A / S / D or arrows   move, relative to the camera
//   Shift                     toggle walk / run
//   left mouse drag           orbit the camera
//
// Nothing is drawn; state changes are logged. Set RUST_LOG=debug to see
// cross-fades and run toggles, or RUST_LOG=trace for per-frame input.
//
//=========================================================================

use std::process::ExitCode;

use aetheric_locomotion::core::locomotion::{BlendMixer, ClipBindings};
use aetheric_locomotion::EngineBuilder;
use log::{error, info};

/// Clips in the order the character asset lists them. `TPose` is the
/// bind pose and is never played.
const CHARACTER_CLIPS: [(&str, f32); 4] = [("Idle", 2.0), ("Run", 0.7), ("TPose", 1.0), ("Walk", 1.1)];

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut mixer = BlendMixer::new();
    for (name, length) in CHARACTER_CLIPS {
        mixer.add_clip(name, length);
    }
    let named: Vec<_> = mixer.named_clips().map(|(name, id)| (name.to_owned(), id)).collect();

    let clips = match ClipBindings::from_named(named) {
        Ok(clips) => clips,
        Err(e) => {
            error!("Character asset is missing a locomotion clip: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Loaded {} clips", CHARACTER_CLIPS.len());

    match EngineBuilder::new().build(mixer, clips).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
