//=========================================================================
// Aetheric Locomotion — Library Root
//
// Camera-relative character locomotion with animation blending.
//
// Responsibilities:
// - `core::locomotion`: the per-tick controller and its collaborators
//   (animation mixer, camera), usable without any window
// - `core::input`: key bindings and held / pressed action state
// - `Engine`: a winit window feeding a fixed-rate logic thread that
//   drives the controller
//
// Typical usage:
// ```no_run
// use aetheric_locomotion::EngineBuilder;
// use aetheric_locomotion::core::locomotion::{BlendMixer, ClipBindings};
//
// let mut mixer = BlendMixer::new();
// // ... register "Idle", "Walk" and "Run" clips ...
// let named: Vec<_> = mixer.named_clips().map(|(n, id)| (n.to_owned(), id)).collect();
// EngineBuilder::new().build(mixer, ClipBindings::from_named(named)?).run()?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds every system that runs on the logic thread. The controller
// and its traits live here and are usable on their own.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit window and event loop and is not part of the
// public API. `engine` wires platform and core together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
