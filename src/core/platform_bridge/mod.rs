//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform layer (winit, main thread) and the logic
// thread. The core never touches winit types beyond the error wrapper.
//
// Components:
// - `interface`: event and error types that cross the channel
// - `event_collector`: logic-thread draining into input batches
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
