//=========================================================================
// State Tracker
//=========================================================================
//
// Held-key bookkeeping for the logic thread.
//
// The tracker is the only place where raw events mutate input state, and
// it is only touched at the tick boundary. Everything downstream (action
// resolution, the locomotion snapshot) reads a fully-applied frame.
//
// Frame lifecycle: clear() → process_events() → finalize_frame() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== StateTracker ========================================================

/// Persistent held state plus per-frame edges for keys and mouse buttons.
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent (survives the frame boundary) -------------------------
    held_keys: HashSet<KeyCode>,
    held_buttons: HashSet<MouseButton>,
    cursor: (f32, f32),
    modifiers: Modifiers,

    //--- Edges (reset by clear()) -----------------------------------------
    pressed_keys: HashSet<KeyCode>,
    released_keys: HashSet<KeyCode>,
    pressed_buttons: HashSet<MouseButton>,

    //--- Derived ----------------------------------------------------------
    cursor_at_frame_start: (f32, f32),
    cursor_delta: (f32, f32),
    seen_cursor: bool,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Drops last frame's edges. Held state is kept.
    pub(crate) fn clear(&mut self) {
        self.pressed_keys.clear();
        self.released_keys.clear();
        self.pressed_buttons.clear();
        self.cursor_at_frame_start = self.cursor;
    }

    /// Applies a batch of events in arrival order.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.apply(event);
        }
    }

    /// Computes cursor movement accumulated since `clear()`.
    pub(crate) fn finalize_frame(&mut self) {
        self.cursor_delta = (
            self.cursor.0 - self.cursor_at_frame_start.0,
            self.cursor.1 - self.cursor_at_frame_start.1,
        );
    }

    fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = modifiers;
                // Auto-repeat arrives as repeated KeyDown; only the first counts.
                if self.held_keys.insert(key) {
                    self.pressed_keys.insert(key);
                }
            }
            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = modifiers;
                if self.held_keys.remove(&key) {
                    self.released_keys.insert(key);
                }
            }
            InputEvent::MouseButtonDown { button, modifiers } => {
                self.modifiers = modifiers;
                if self.held_buttons.insert(button) {
                    self.pressed_buttons.insert(button);
                }
            }
            InputEvent::MouseButtonUp { button, modifiers } => {
                self.modifiers = modifiers;
                self.held_buttons.remove(&button);
            }
            InputEvent::MouseMoved { x, y } => {
                // The first reported position is a placement, not a drag.
                if !self.seen_cursor {
                    self.seen_cursor = true;
                    self.cursor_at_frame_start = (x, y);
                }
                self.cursor = (x, y);
            }
            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Queries
    //=====================================================================

    /// `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held_keys.contains(&key)
    }

    /// `true` only on the frame the key went down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// `true` only on the frame the key went up.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.released_keys.contains(&key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.held_buttons.contains(&button)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Cursor position in window pixels.
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    /// Cursor movement over the last frame, `(0, 0)` if it did not move.
    pub fn cursor_delta(&self) -> (f32, f32) {
        self.cursor_delta
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn held_keys(&self) -> impl Iterator<Item = &KeyCode> {
        self.held_keys.iter()
    }

    pub fn pressed_keys(&self) -> impl Iterator<Item = &KeyCode> {
        self.pressed_keys.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
