//=========================================================================
// Action Mapper
//=========================================================================
//
// Resolves physical keys to actions.
//
// Architecture:
//   KeyCode → HashMap → Action
//
// Bindings ignore modifier state: Shift is itself a bound key (the run
// toggle), so requiring an exact modifier match would make Shift+W stop
// moving the character.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{action::Action, event::KeyCode};

//=== ActionMapper ========================================================

/// Key → action lookup table. One action per key; several keys may share
/// an action.
pub(crate) struct ActionMapper<A: Action> {
    bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    pub(crate) fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `action`, replacing any previous binding of `key`.
    ///
    /// Returns the action the key was bound to before, if any.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A) -> Option<A> {
        self.bindings.insert(key, action)
    }

    pub(crate) fn unbind_key(&mut self, key: KeyCode) -> Option<A> {
        self.bindings.remove(&key)
    }

    /// Removes every key bound to `action`.
    pub(crate) fn unbind_action(&mut self, action: A) {
        self.bindings.retain(|_, bound| *bound != action);
    }

    pub(crate) fn clear(&mut self) {
        self.bindings.clear();
    }

    //--- Resolution -------------------------------------------------------

    pub(crate) fn resolve(&self, key: KeyCode) -> Option<A> {
        self.bindings.get(&key).copied()
    }

    /// Keys currently bound to `action`, in no particular order.
    pub(crate) fn keys_for(&self, action: A) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(key, _)| *key)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::LocomotionAction;

    #[test]
    fn resolves_bound_key() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyW, LocomotionAction::Forward);

        assert_eq!(mapper.resolve(KeyCode::KeyW), Some(LocomotionAction::Forward));
        assert_eq!(mapper.resolve(KeyCode::KeyS), None);
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyQ, LocomotionAction::StrafeLeft);

        let previous = mapper.bind_key(KeyCode::KeyQ, LocomotionAction::StrafeRight);

        assert_eq!(previous, Some(LocomotionAction::StrafeLeft));
        assert_eq!(mapper.resolve(KeyCode::KeyQ), Some(LocomotionAction::StrafeRight));
        assert_eq!(mapper.len(), 1);
    }

    #[test]
    fn several_keys_share_an_action() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyW, LocomotionAction::Forward);
        mapper.bind_key(KeyCode::ArrowUp, LocomotionAction::Forward);

        let mut keys: Vec<_> = mapper.keys_for(LocomotionAction::Forward).collect();
        keys.sort_by_key(|k| format!("{:?}", k));
        assert_eq!(keys, vec![KeyCode::ArrowUp, KeyCode::KeyW]);
    }

    #[test]
    fn unbind_action_removes_all_its_keys() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::ShiftLeft, LocomotionAction::ToggleRun);
        mapper.bind_key(KeyCode::ShiftRight, LocomotionAction::ToggleRun);
        mapper.bind_key(KeyCode::KeyW, LocomotionAction::Forward);

        mapper.unbind_action(LocomotionAction::ToggleRun);

        assert_eq!(mapper.len(), 1);
        assert_eq!(mapper.resolve(KeyCode::ShiftLeft), None);
    }

    #[test]
    fn unbind_key_and_clear() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyA, LocomotionAction::StrafeLeft);
        mapper.bind_key(KeyCode::KeyD, LocomotionAction::StrafeRight);

        assert_eq!(mapper.unbind_key(KeyCode::KeyA), Some(LocomotionAction::StrafeLeft));
        assert_eq!(mapper.unbind_key(KeyCode::KeyA), None);

        mapper.clear();
        assert_eq!(mapper.len(), 0);
    }
}
