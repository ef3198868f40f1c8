//=========================================================================
// Event Collector
//=========================================================================
//
// Logic-thread side of the platform channel.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input batches → TickControl
//
// Draining is bounded so a flooded channel cannot starve the tick; the
// remainder is picked up next tick. Pacing is left to the orchestrator.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Pulls pending platform events into per-tick input batches.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    pub(crate) const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
        }
    }

    //--- collect_frame() --------------------------------------------------

    /// Replaces the batches with whatever arrived since the last call.
    ///
    /// Returns [`TickControl::Exit`] on window close or when the platform
    /// side has hung up.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();

        for drained in 0..Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    self.push_batch(discrete);
                    self.push_batch(continuous);
                }
                Ok(PlatformEvent::WindowClosed) => {
                    trace!(target: "core", "Window closed after {} events", drained);
                    return TickControl::Exit;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => return TickControl::Continue,
            }
        }

        warn!(
            target: "core",
            "Event queue backlog: {} events this tick, {} left for the next",
            Self::MAX_EVENTS_PER_FRAME,
            self.receiver.len()
        );
        TickControl::Continue
    }

    /// Hands this tick's batches over, leaving the collector empty.
    pub(crate) fn take_batches(&mut self) -> Vec<Vec<InputEvent>> {
        std::mem::take(&mut self.input_batches)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_batch(&mut self, batch: Vec<InputEvent>) {
        if !batch.is_empty() {
            self.input_batches.push(batch);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};
    use crossbeam_channel::unbounded;

    //--- Test Helpers -----------------------------------------------------

    fn key_batch(key: KeyCode) -> PlatformEvent {
        PlatformEvent::Inputs {
            discrete: vec![InputEvent::KeyDown { key, modifiers: Modifiers::NONE }],
            continuous: vec![],
        }
    }

    //=====================================================================
    // Collection
    //=====================================================================

    #[test]
    fn empty_queue_continues() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn discrete_and_continuous_become_separate_batches() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs {
            discrete: vec![InputEvent::KeyDown { key: KeyCode::KeyW, modifiers: Modifiers::NONE }],
            continuous: vec![InputEvent::MouseMoved { x: 10.0, y: 20.0 }],
        })
        .unwrap();
        tx.send(key_batch(KeyCode::ShiftLeft)).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.batches().len(), 3);
        assert_eq!(collector.batches()[1], vec![InputEvent::MouseMoved { x: 10.0, y: 20.0 }]);
    }

    #[test]
    fn empty_halves_are_dropped() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs { discrete: vec![], continuous: vec![] }).unwrap();

        collector.collect_frame();
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn previous_batches_are_cleared() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(key_batch(KeyCode::KeyA)).unwrap();
        collector.collect_frame();
        assert_eq!(collector.batches().len(), 1);

        collector.collect_frame();
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn take_batches_moves_them_out() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(key_batch(KeyCode::KeyS)).unwrap();
        collector.collect_frame();

        let taken = collector.take_batches();
        assert_eq!(taken.len(), 1);
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn backlog_is_left_for_next_tick() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for _ in 0..EventCollector::MAX_EVENTS_PER_FRAME + 5 {
            tx.send(key_batch(KeyCode::KeyD)).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.batches().len(), EventCollector::MAX_EVENTS_PER_FRAME);

        collector.collect_frame();
        assert_eq!(collector.batches().len(), 5);
    }

    //=====================================================================
    // Shutdown
    //=====================================================================

    #[test]
    fn window_closed_exits() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn disconnect_exits() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }
}
