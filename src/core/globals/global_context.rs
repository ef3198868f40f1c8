//=========================================================================
// Global Context
//=========================================================================
//
// Shared data the logic systems read and write each tick.
//
// Contains:
// - input_state: low-level input state (keys, mouse, modifiers)
// - camera: the orbit camera the character is viewed through
// - last_outcome: what the previous locomotion tick did
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, StateTracker};
use crate::core::locomotion::{OrbitCamera, TickOutcome};

//=== GlobalContext =======================================================

/// Data owned by the logic thread, separate from the systems that act on
/// it.
#[derive(Debug)]
pub struct GlobalContext {
    /// Raw input state tracker for low-level input queries.
    ///
    /// For action-level queries, use the input system in
    /// [`GlobalSystems`](super::GlobalSystems).
    pub input_state: StateTracker,

    /// Camera used both for camera-relative movement and for follow.
    pub camera: OrbitCamera,

    /// Result of the most recent locomotion tick, `None` before the first.
    pub last_outcome: Option<TickOutcome>,

    /// Input batches for the current tick. Filled by the orchestrator and
    /// consumed by the input system.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl GlobalContext {
    pub(crate) fn new(camera: OrbitCamera) -> Self {
        Self {
            input_state: StateTracker::new(),
            camera,
            last_outcome: None,
            frame_events: Vec::new(),
        }
    }
}
