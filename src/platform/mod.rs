//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the engine's logic thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  winit Event Loop        │    │  EventCollector      │
//  │   ↓                      │    │   ↓                  │
//  │  InputProcessor          │    │  InputSystem         │
//  │   ├─ Converts winit      │    │   ↓                  │
//  │   └─ Tracks modifiers    │    │  LocomotionController│
//  │   ↓                      │    │                      │
//  │  InputBuffer             │    └──────────────────────┘
//  │   ├─ discrete            │               ↑
//  │   └─ latest cursor       │               │
//  │   ↓                      │               │
//  │  RedrawRequested (flush) │               │
//  │   ↓                      │               │
//  │  crossbeam channel ──────┼───────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// RedrawRequested is the frame boundary: everything buffered since the
// previous redraw is sent as one message. Empty frames send nothing.
//
// winit requires the event loop on the main thread (macOS/iOS), so this
// runs on the thread that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::{debug, error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window owner and input aggregator for the main thread.
///
/// Not `Send`: it holds the winit window. Talks to the logic thread only
/// through the channel sender.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,
    title: String,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(event_sender: Sender<PlatformEvent>, title: impl Into<String>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: title.into(),
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// exits abnormally.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop.run_app(&mut self).map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends everything buffered since the last redraw as one batch.
    ///
    /// Blocks while the channel is full. The logic thread drains every
    /// tick, and a lost `KeyUp` would leave a key held on that side.
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };
        let (discrete_count, continuous_count) = (discrete.len(), continuous.len());

        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                discrete_count + continuous_count
            );
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        // Blocking send: the close must not be lost to a full channel.
        if self.event_sender.send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Logic thread already gone at shutdown");
        }
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(1280, 720));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.shutdown(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", modifiers);
                self.input_processor.update_modifiers(modifiers.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(position.x, position.y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.buffer.push_discrete(event),
                    None => trace!(target: "platform::input", "Key ignored: {:?}", key_event.physical_key),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, InputSystem, KeyCode, Modifiers, StateTracker};
    use crate::core::platform_bridge::EventCollector;
    use crossbeam_channel::{bounded, unbounded};
    use std::thread;
    use std::time::Duration;

    //--- Test Helpers -----------------------------------------------------

    fn w_down() -> InputEvent {
        InputEvent::KeyDown { key: KeyCode::KeyW, modifiers: Modifiers::NONE }
    }

    //=====================================================================
    // Flushing
    //=====================================================================

    #[test]
    fn window_is_created_lazily() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx, "test");
        assert!(platform.window().is_none());
    }

    #[test]
    fn flush_empty_buffer_sends_nothing() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "test");

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_one_batch_per_frame() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "test");
        platform.buffer.push_discrete(w_down());
        platform.buffer.push_continuous(InputEvent::MouseMoved { x: 1.0, y: 2.0 });

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        assert_eq!(
            rx.try_recv(),
            Ok(PlatformEvent::Inputs {
                discrete: vec![w_down()],
                continuous: vec![InputEvent::MouseMoved { x: 1.0, y: 2.0 }],
            })
        );
        assert!(rx.try_recv().is_err(), "second flush had nothing to send");
    }

    #[test]
    fn flush_survives_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "test");
        platform.buffer.push_discrete(w_down());
        drop(rx);

        platform.flush_input_buffer();

        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn key_release_survives_full_channel() {
        let (tx, rx) = bounded(1);
        let mut platform = Platform::new(tx, "test");
        let w_up = InputEvent::KeyUp { key: KeyCode::KeyW, modifiers: Modifiers::NONE };

        platform.buffer.push_discrete(w_down());
        platform.flush_input_buffer();
        assert!(rx.is_full());

        let consumer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            (0..2).filter_map(|_| rx.recv().ok()).collect::<Vec<_>>()
        });
        platform.buffer.push_discrete(w_up);
        platform.flush_input_buffer();

        let received = consumer.join().unwrap();
        assert_eq!(
            received,
            vec![
                PlatformEvent::Inputs { discrete: vec![w_down()], continuous: vec![] },
                PlatformEvent::Inputs { discrete: vec![w_up], continuous: vec![] },
            ]
        );
    }

    #[test]
    fn released_key_is_not_held_after_backpressure() {
        let (tx, rx) = bounded(1);
        let mut platform = Platform::new(tx, "test");
        let mut collector = EventCollector::new(rx);
        let mut tracker = StateTracker::new();
        let mut input = InputSystem::with_default_bindings();

        platform.buffer.push_discrete(w_down());
        platform.flush_input_buffer();

        let logic = thread::spawn(move || {
            for _ in 0..5 {
                thread::sleep(Duration::from_millis(10));
                collector.collect_frame();
                input.process_frame(&mut tracker, &collector.take_batches());
            }
            input.direction_flags()
        });
        platform.buffer.push_discrete(InputEvent::KeyUp { key: KeyCode::KeyW, modifiers: Modifiers::NONE });
        platform.flush_input_buffer();

        let flags = logic.join().unwrap();
        assert!(!flags.forward, "W still held after release");
    }
}
