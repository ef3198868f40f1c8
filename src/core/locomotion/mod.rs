//=========================================================================
// Locomotion
//=========================================================================
//
// Keyboard-driven humanoid locomotion: held directions and the camera
// view become a facing rotation, a horizontal displacement and an
// Idle / Walk / Run animation state, every tick.
//
// Architecture:
// ```text
//   DirectionFlags ──┐
//                    ├──> LocomotionController::tick() ──> TickOutcome
//   CameraRig ───────┘            │
//                                 └──> AnimationMixer (via ClipBindings)
// ```
//
// Components:
// - `direction`: per-tick direction snapshot and offset table
// - `action_state`: Idle / Walk / Run selection
// - `animation`: mixer collaborator trait and the state → clip table
// - `blend_mixer`: weight-blending mixer implementation
// - `camera`: camera collaborator trait and the orbit camera
// - `config`: tuning constants
// - `controller`: the per-tick update
//
//=========================================================================

//=== Module Declarations =================================================

mod action_state;
mod animation;
mod blend_mixer;
mod camera;
mod config;
mod controller;
mod direction;

//=== Public API ==========================================================

pub use action_state::ActionState;
pub use animation::{AnimationMixer, ClipBindings, ClipBindingsBuilder};
pub use blend_mixer::{BlendMixer, ClipId};
pub use camera::{CameraFollow, CameraRig, OrbitCamera, OrbitLimits};
pub use config::LocomotionConfig;
pub use controller::{quat_angle, rotate_towards, FacingTransform, LocomotionController, TickOutcome};
pub use direction::DirectionFlags;

//=== LocomotionError =====================================================

/// Errors raised while wiring a controller to its clips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocomotionError {
    /// No clip was bound for this state.
    UnboundClip(ActionState),

    /// A clip name that does not name a locomotion state.
    UnknownClipName(String),
}

impl std::fmt::Display for LocomotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundClip(state) => write!(f, "No animation clip bound for state {}", state),
            Self::UnknownClipName(name) => write!(f, "Unknown locomotion clip name {:?}", name),
        }
    }
}

impl std::error::Error for LocomotionError {}

//=========================================================================
// Unit Tests
//=========================================================================
