//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_locomotion::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::PlatformError;

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Input
pub use crate::core::input::{Action, InputSystem, KeyCode, LocomotionAction, Modifiers, MouseButton};

// Locomotion
pub use crate::core::locomotion::{
    ActionState, AnimationMixer, BlendMixer, CameraFollow, CameraRig, ClipBindings, DirectionFlags,
    FacingTransform, LocomotionConfig, LocomotionController, LocomotionError, OrbitCamera,
    TickOutcome,
};

// Time
pub use crate::core::time::FrameClock;
