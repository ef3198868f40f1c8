//=========================================================================
// Actions
//=========================================================================
//
// Game-level commands that key bindings resolve to.
//
// The `Action` trait keeps the mapper generic; `LocomotionAction` is the
// concrete set the locomotion controller consumes.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;

//=== Action Trait ========================================================

/// Marker trait for action enums routed by the input system.
///
/// `Send + 'static` because bindings are configured on the main thread and
/// then moved to the logic thread together with the input system.
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== LocomotionAction ====================================================

/// Commands understood by the locomotion controller.
///
/// The four directions are *held* actions: they are sampled every tick.
/// `ToggleRun` is a *pressed* action: it fires once per physical press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionAction {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    ToggleRun,
}

impl Action for LocomotionAction {}

impl LocomotionAction {
    /// WASD and arrows for movement, either Shift key for the run toggle.
    pub fn default_bindings() -> [(KeyCode, LocomotionAction); 10] {
        use LocomotionAction::*;
        [
            (KeyCode::KeyW, Forward),
            (KeyCode::ArrowUp, Forward),
            (KeyCode::KeyS, Backward),
            (KeyCode::ArrowDown, Backward),
            (KeyCode::KeyA, StrafeLeft),
            (KeyCode::ArrowLeft, StrafeLeft),
            (KeyCode::KeyD, StrafeRight),
            (KeyCode::ArrowRight, StrafeRight),
            (KeyCode::ShiftLeft, ToggleRun),
            (KeyCode::ShiftRight, ToggleRun),
        ]
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
