//=========================================================================
// Global Systems
//=========================================================================
//
// Container for the logic systems run on every tick.
//
// Processing pipeline:
//   1. Input: batches → StateTracker → held / pressed actions
//   2. Run toggle: ToggleRun press → controller.toggle_run()
//   3. Camera: left-button drag → OrbitCamera::orbit()
//   4. Locomotion: DirectionFlags + camera → controller.tick()
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, trace};

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{InputSystem, LocomotionAction, MouseButton};
use crate::core::locomotion::{AnimationMixer, LocomotionController, TickOutcome};

//=== GlobalSystems =======================================================

/// Logic systems owned by the orchestrator.
///
/// # Available Systems
///
/// - `input`: key bindings and action resolution
/// - `locomotion`: the character controller, owning its animation mixer
pub struct GlobalSystems<M: AnimationMixer> {
    /// Bindings default to WASD / arrows / Shift. Rebind in
    /// [`Engine::init`](crate::Engine::init).
    pub input: InputSystem<LocomotionAction>,

    pub locomotion: LocomotionController<M>,

    /// Radians of camera orbit per pixel of mouse drag.
    pub orbit_sensitivity: f32,
}

impl<M: AnimationMixer> GlobalSystems<M> {
    pub(crate) fn new(locomotion: LocomotionController<M>, orbit_sensitivity: f32) -> Self {
        Self {
            input: InputSystem::with_default_bindings(),
            locomotion,
            orbit_sensitivity,
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick of every system over `context`.
    ///
    /// # Panics
    ///
    /// Panics if `delta_time` is negative or not finite.
    pub(crate) fn update(&mut self, context: &mut GlobalContext, delta_time: f32) -> TickOutcome {
        //--- 1. Input ---------------------------------------------------
        self.input.process_frame(&mut context.input_state, &context.frame_events);
        context.frame_events.clear();

        //--- 2. Run toggle ---------------------------------------------
        if self.input.is_action_pressed(LocomotionAction::ToggleRun) {
            self.locomotion.toggle_run();
        }

        //--- 3. Camera orbit -------------------------------------------
        if context.input_state.is_button_down(MouseButton::Left) {
            let (dx, dy) = context.input_state.cursor_delta();
            if dx != 0.0 || dy != 0.0 {
                // Dragging right swings the eye left; dragging down lifts it.
                let yaw = -dx * self.orbit_sensitivity;
                let pitch = -dy * self.orbit_sensitivity;
                context.camera.orbit(yaw, pitch);
                trace!(target: "core", "Camera orbit yaw {:.3} pitch {:.3}", yaw, pitch);
            }
        }

        //--- 4. Locomotion ---------------------------------------------
        let directions = self.input.direction_flags();
        let outcome = self.locomotion.tick(delta_time, &directions, &mut context.camera);

        if outcome.transitioned {
            info!(target: "locomotion", "State: {}", outcome.action);
        }
        context.last_outcome = Some(outcome);
        outcome
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
