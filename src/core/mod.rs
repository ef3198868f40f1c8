//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Runs every logic system on a dedicated thread at a fixed tick rate.
//
// Per tick:
//   1. Collect platform events (bounded, non-blocking)
//   2. Measure real elapsed time
//   3. Update input, camera and locomotion
//   4. Sleep out the remainder of the tick
//
// The orchestrator never talks to winit. All platform traffic arrives as
// `PlatformEvent`s over the channel; window close or a hung-up sender
// ends the loop.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod globals;
pub mod input;
pub mod locomotion;
pub(crate) mod platform_bridge;
pub mod time;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Dependencies ===============================================

use globals::{GlobalContext, GlobalSystems};
use locomotion::AnimationMixer;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use time::FrameClock;

//=== CoreSystemsOrchestrator =============================================

/// Owns the systems and their shared context, and drives them.
pub(crate) struct CoreSystemsOrchestrator<M: AnimationMixer> {
    systems: GlobalSystems<M>,
    context: GlobalContext,
}

impl<M> CoreSystemsOrchestrator<M>
where
    M: AnimationMixer + Send + 'static,
    M::Clip: Send,
{
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(systems: GlobalSystems<M>, context: GlobalContext) -> Self {
        Self { systems, context }
    }

    /// Gives user code one chance to configure systems before the thread
    /// starts.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<M>),
    {
        init_fn(&mut self.systems);
    }

    //--- spawn_core_thread() ---------------------------------------------

    /// Moves the orchestrator onto the logic thread.
    ///
    /// The join handle yields the orchestrator back once the loop exits,
    /// so final state can be inspected.
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<Self> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            let mut clock = FrameClock::new();
            info!(target: "core", "Logic thread running at {} TPS", tps);

            loop {
                let frame_start = Instant::now();

                if self.step(&mut collector, &mut clock) == TickControl::Exit {
                    info!(target: "core", "Core thread exiting");
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            self
        })
    }

    //--- step() ----------------------------------------------------------

    /// One tick: gather events, then update every system.
    fn step(&mut self, collector: &mut EventCollector, clock: &mut FrameClock) -> TickControl {
        if collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        self.context.frame_events = collector.take_batches();
        let delta_time = clock.tick();
        self.systems.update(&mut self.context, delta_time);

        TickControl::Continue
    }

    /// One-line description of where the character ended up.
    pub(crate) fn summary(&self) -> String {
        let locomotion = &self.systems.locomotion;
        let p = locomotion.transform().position;
        format!("{} at ({:.2}, {:.2}, {:.2})", locomotion.action(), p.x, p.y, p.z)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn systems(&self) -> &GlobalSystems<M> {
        &self.systems
    }

    #[cfg(test)]
    pub(crate) fn context(&self) -> &GlobalContext {
        &self.context
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
