//=========================================================================
// Input Buffer
//=========================================================================
//
// Holds input between two redraws on the platform thread.
//
// Two lanes:
// - `discrete`: keys and buttons, in arrival order. Identical consecutive
//   events (OS auto-repeat) collapse into one.
// - `continuous`: cursor position. Only the latest survives, since the
//   logic thread derives drag deltas from absolute positions.
//
// The lanes travel as separate lists, so their relative order within one
// frame is lost. A button press, drag and release that all land between
// two redraws reach the logic thread as a click plus one cursor move, and
// the camera does not orbit.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    cursor: Option<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 32;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            cursor: None,
        }
    }

    //--- Pushing ----------------------------------------------------------

    /// Records the latest cursor position, replacing any earlier one.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        debug_assert!(!event.is_discrete(), "discrete event on the continuous lane");
        self.cursor = Some(event);
    }

    /// Appends a key or button event unless it repeats the previous one.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        debug_assert!(event.is_discrete(), "continuous event on the discrete lane");
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- drain() ----------------------------------------------------------

    /// Empties both lanes as `(discrete, continuous)`, or `None` when
    /// nothing arrived since the last drain.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }
        let capacity = self.discrete.capacity();
        let discrete = std::mem::replace(&mut self.discrete, Vec::with_capacity(capacity));
        let continuous = self.cursor.take().into_iter().collect();
        Some((discrete, continuous))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.cursor.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
