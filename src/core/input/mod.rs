//=========================================================================
// Input System
//=========================================================================
//
// Turns batched platform events into per-tick action state.
//
// Architecture:
//   Vec<Vec<InputEvent>> → StateTracker (held keys, edges)
//                              ↓
//                         ActionMapper  → pressed actions (edges)
//                                       → held actions   (levels)
//
// `process_frame()` runs once per tick on the logic thread. All queries
// afterwards see the same fully-applied frame, so consumers never observe
// a half-updated key set.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub(crate) mod action_mapper;
pub mod event;
pub mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, LocomotionAction};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::locomotion::DirectionFlags;
use action_mapper::ActionMapper;

//=== InputSystem =========================================================

/// Key bindings plus the actions they produced on the last frame.
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
    pressed: Vec<A>,
    held: HashSet<A>,
}

impl<A: Action> InputSystem<A> {
    /// Creates an input system with no bindings.
    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
            pressed: Vec::new(),
            held: HashSet::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action. A key maps to at most one action.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        if let Some(previous) = self.mapper.bind_key(key, action) {
            trace!(target: "core::input", "{:?} rebound from {:?} to {:?}", key, previous, action);
        }
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        self.mapper.unbind_key(key);
    }

    pub fn unbind_action(&mut self, action: A) {
        self.mapper.unbind_action(action);
    }

    pub fn clear_bindings(&mut self) {
        self.mapper.clear();
    }

    /// Keys currently bound to `action`.
    pub fn keys_for(&self, action: A) -> Vec<KeyCode> {
        self.mapper.keys_for(action).collect()
    }

    //--- Frame Processing -------------------------------------------------

    /// Applies this tick's event batches to `tracker` and re-resolves actions.
    pub fn process_frame(&mut self, tracker: &mut StateTracker, batches: &[Vec<InputEvent>]) {
        tracker.clear();
        for batch in batches {
            tracker.process_events(batch);
        }
        tracker.finalize_frame();

        self.pressed.clear();
        for key in tracker.pressed_keys() {
            if let Some(action) = self.mapper.resolve(*key) {
                if !self.pressed.contains(&action) {
                    self.pressed.push(action);
                }
            }
        }

        self.held.clear();
        self.held
            .extend(tracker.held_keys().filter_map(|key| self.mapper.resolve(*key)));
    }

    //--- Queries ----------------------------------------------------------

    /// Actions whose key went down this frame (once per physical press).
    pub fn actions_pressed(&self) -> &[A] {
        &self.pressed
    }

    pub fn is_action_pressed(&self, action: A) -> bool {
        self.pressed.contains(&action)
    }

    /// `true` while any key bound to `action` is held.
    pub fn is_action_down(&self, action: A) -> bool {
        self.held.contains(&action)
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//--- Locomotion Helpers --------------------------------------------------

impl InputSystem<LocomotionAction> {
    /// Input system preloaded with [`LocomotionAction::default_bindings`].
    pub fn with_default_bindings() -> Self {
        let mut system = Self::new();
        for (key, action) in LocomotionAction::default_bindings() {
            system.bind_key(key, action);
        }
        system
    }

    /// Snapshot of the four direction flags for this tick.
    pub fn direction_flags(&self) -> DirectionFlags {
        DirectionFlags {
            forward: self.is_action_down(LocomotionAction::Forward),
            backward: self.is_action_down(LocomotionAction::Backward),
            left: self.is_action_down(LocomotionAction::StrafeLeft),
            right: self.is_action_down(LocomotionAction::StrafeRight),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    fn run(system: &mut InputSystem<LocomotionAction>, tracker: &mut StateTracker, events: Vec<InputEvent>) {
        system.process_frame(tracker, &[events]);
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn held_key_yields_direction_flag() {
        let mut system = InputSystem::with_default_bindings();
        let mut tracker = StateTracker::new();

        run(&mut system, &mut tracker, vec![down(KeyCode::KeyW), down(KeyCode::KeyA)]);
        let flags = system.direction_flags();

        assert!(flags.forward && flags.left);
        assert!(!flags.backward && !flags.right);
    }

    #[test]
    fn direction_stays_held_until_release() {
        let mut system = InputSystem::with_default_bindings();
        let mut tracker = StateTracker::new();

        run(&mut system, &mut tracker, vec![down(KeyCode::KeyD)]);
        run(&mut system, &mut tracker, vec![]);
        assert!(system.direction_flags().right);

        run(&mut system, &mut tracker, vec![up(KeyCode::KeyD)]);
        assert!(!system.direction_flags().any());
    }

    #[test]
    fn arrow_and_letter_share_a_direction() {
        let mut system = InputSystem::with_default_bindings();
        let mut tracker = StateTracker::new();

        run(&mut system, &mut tracker, vec![down(KeyCode::KeyW), down(KeyCode::ArrowUp)]);
        run(&mut system, &mut tracker, vec![up(KeyCode::KeyW)]);

        assert!(system.is_action_down(LocomotionAction::Forward));
    }

    #[test]
    fn toggle_run_fires_once_per_press() {
        let mut system = InputSystem::with_default_bindings();
        let mut tracker = StateTracker::new();

        run(&mut system, &mut tracker, vec![down(KeyCode::ShiftLeft)]);
        assert!(system.is_action_pressed(LocomotionAction::ToggleRun));

        // auto-repeat while held
        run(&mut system, &mut tracker, vec![down(KeyCode::ShiftLeft)]);
        assert!(!system.is_action_pressed(LocomotionAction::ToggleRun));
    }

    #[test]
    fn both_shift_keys_in_one_frame_report_one_action() {
        let mut system = InputSystem::with_default_bindings();
        let mut tracker = StateTracker::new();

        run(&mut system, &mut tracker, vec![down(KeyCode::ShiftLeft), down(KeyCode::ShiftRight)]);

        assert_eq!(system.actions_pressed(), &[LocomotionAction::ToggleRun]);
    }

    #[test]
    fn unbound_keys_produce_nothing() {
        let mut system = InputSystem::<LocomotionAction>::new();
        let mut tracker = StateTracker::new();

        run(&mut system, &mut tracker, vec![down(KeyCode::KeyW)]);

        assert!(system.actions_pressed().is_empty());
        assert!(!system.direction_flags().any());
        assert!(tracker.is_key_down(KeyCode::KeyW));
    }

    #[test]
    fn rebinding_moves_the_action() {
        let mut system = InputSystem::with_default_bindings();
        system.unbind_action(LocomotionAction::Forward);
        system.bind_key(KeyCode::KeyZ, LocomotionAction::Forward);

        assert_eq!(system.keys_for(LocomotionAction::Forward), vec![KeyCode::KeyZ]);
    }

    #[test]
    fn batches_are_applied_in_order() {
        let mut system = InputSystem::with_default_bindings();
        let mut tracker = StateTracker::new();

        system.process_frame(
            &mut tracker,
            &[vec![down(KeyCode::KeyS)], vec![up(KeyCode::KeyS)]],
        );

        assert!(!system.direction_flags().backward);
        assert!(tracker.is_key_released(KeyCode::KeyS));
    }
}
