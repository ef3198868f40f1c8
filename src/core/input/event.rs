//=========================================================================
// Input Events
//=========================================================================
//
// Engine-side representation of keyboard and mouse input.
//
// The platform layer converts winit events into these types before they
// cross the thread boundary, so nothing past the platform bridge ever
// sees a winit type.
//
// Event Flow:
// ```text
// winit WindowEvent
//         ↓
//    InputProcessor (platform)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker → ActionMapper → LocomotionAction
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button. Dragging with it orbits the camera.
    Left,
    Right,
    Middle,
    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Names the key location, not the produced character: `KeyW` is the
/// same physical key on QWERTY and AZERTY layouts.
///
/// The set covers what locomotion needs (letters, arrows, both Shift
/// keys) plus a handful of common keys for game bindings. Anything else
/// arrives as `Unidentified` and is dropped by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Letters ----------------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrows -----------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Modifier Keys ----------------------------------------------------
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    //--- Special ----------------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,

    /// Key the platform reported but the engine does not map.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier state reported alongside key and button events.
///
/// Left and right variants are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };

    /// Returns `true` if no modifier is held.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

//=== InputEvent ==========================================================

/// Low-level input event produced by the platform layer.
///
/// Discrete events (keys, buttons) carry the modifier state at the time
/// they fired. `MouseMoved` carries absolute window coordinates in
/// pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },
    MouseMoved { x: f32, y: f32 },
    /// Anything the platform chose to forward but could not classify.
    Unidentified,
}

impl InputEvent {
    /// Returns `true` for key and button events, whose order matters.
    ///
    /// Continuous events (cursor movement) may be coalesced; discrete ones
    /// never are.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Self::KeyDown { .. }
                | Self::KeyUp { .. }
                | Self::MouseButtonDown { .. }
                | Self::MouseButtonUp { .. }
        )
    }

    /// Modifier state carried by the event, if it is a discrete event.
    pub fn modifiers(&self) -> Option<Modifiers> {
        match self {
            Self::KeyDown { modifiers, .. }
            | Self::KeyUp { modifiers, .. }
            | Self::MouseButtonDown { modifiers, .. }
            | Self::MouseButtonUp { modifiers, .. } => Some(*modifiers),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_and_button_events_are_discrete() {
        let key = InputEvent::KeyDown { key: KeyCode::KeyW, modifiers: Modifiers::NONE };
        let btn = InputEvent::MouseButtonUp { button: MouseButton::Left, modifiers: Modifiers::NONE };

        assert!(key.is_discrete());
        assert!(btn.is_discrete());
    }

    #[test]
    fn mouse_motion_is_continuous() {
        assert!(!InputEvent::MouseMoved { x: 1.0, y: 2.0 }.is_discrete());
        assert!(!InputEvent::Unidentified.is_discrete());
    }

    #[test]
    fn modifiers_are_exposed_for_discrete_events_only() {
        let ev = InputEvent::KeyUp { key: KeyCode::KeyA, modifiers: Modifiers::SHIFT };
        assert_eq!(ev.modifiers(), Some(Modifiers::SHIFT));
        assert_eq!(InputEvent::MouseMoved { x: 0.0, y: 0.0 }.modifiers(), None);
    }

    #[test]
    fn modifiers_default_is_empty() {
        assert!(Modifiers::default().is_empty());
        assert!(!Modifiers::CTRL.is_empty());
    }

    #[test]
    fn mouse_moved_compares_by_position() {
        let a = InputEvent::MouseMoved { x: 10.0, y: 10.0 };
        let b = InputEvent::MouseMoved { x: 20.0, y: 10.0 };
        assert_ne!(a, b);
    }
}
