//=========================================================================
// Aetheric Locomotion Engine
//
// Main entry point: configures and runs the locomotion demo runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(mixer, clips)──>  Engine  ──run()──>  [Runtime]
//         │                                      │
//         ├─ with_tps()                          ├─ init(|systems| ..)
//         ├─ with_channel_capacity()             └─ run(): spawns logic thread,
//         ├─ with_locomotion()                         runs platform,
//         ├─ with_camera()                             blocks until exit
//         ├─ with_orbit_sensitivity()
//         └─ with_title()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use glam::Vec3;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::globals::{GlobalContext, GlobalSystems};
use crate::core::locomotion::{AnimationMixer, ClipBindings, LocomotionConfig, LocomotionController, OrbitCamera};
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Locomotion**: [`LocomotionConfig::default`]
/// - **Camera**: orbit camera at (0, 5, 5) looking at (0, 1, 0)
/// - **Orbit sensitivity**: 0.005 rad per pixel of drag
/// - **Window title**: "Aetheric Locomotion"
///
/// # Examples
///
/// ```no_run
/// use aetheric_locomotion::EngineBuilder;
/// use aetheric_locomotion::core::locomotion::{BlendMixer, ClipBindings, LocomotionConfig};
///
/// let mut mixer = BlendMixer::new();
/// for (name, length) in [("Idle", 2.0), ("Run", 0.7), ("TPose", 1.0), ("Walk", 1.1)] {
///     mixer.add_clip(name, length);
/// }
/// let named: Vec<_> = mixer.named_clips().map(|(n, id)| (n.to_owned(), id)).collect();
/// let clips = ClipBindings::from_named(named)?;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_locomotion(LocomotionConfig::default().with_run_speed(6.0))
///     .build(mixer, clips)
///     .run()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    locomotion: LocomotionConfig,
    camera: OrbitCamera,
    orbit_sensitivity: f32,
    title: String,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            locomotion: LocomotionConfig::default(),
            camera: OrbitCamera::new(Vec3::new(0.0, 5.0, 5.0), Vec3::Y),
            orbit_sensitivity: 0.005,
            title: "Aetheric Locomotion".to_owned(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Movement speed does not depend on this: each tick uses the measured
    /// elapsed time.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication, in
    /// frames of input.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_locomotion(mut self, config: LocomotionConfig) -> Self {
        self.locomotion = config;
        self
    }

    /// Replaces the starting camera.
    pub fn with_camera(mut self, camera: OrbitCamera) -> Self {
        self.camera = camera;
        self
    }

    /// # Panics
    ///
    /// Panics if `radians_per_pixel` is not positive and finite.
    pub fn with_orbit_sensitivity(mut self, radians_per_pixel: f32) -> Self {
        assert!(
            radians_per_pixel.is_finite() && radians_per_pixel > 0.0,
            "Orbit sensitivity must be positive, got {}",
            radians_per_pixel
        );
        self.orbit_sensitivity = radians_per_pixel;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds the engine around a mixer and its state → clip table.
    ///
    /// The mixer moves to the logic thread with the controller, and starts
    /// playing the Idle clip immediately.
    pub fn build<M>(self, mixer: M, clips: ClipBindings<M::Clip>) -> Engine<M>
    where
        M: AnimationMixer + Send + 'static,
        M::Clip: Send,
    {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let controller = LocomotionController::new(mixer, clips, self.locomotion);
        let systems = GlobalSystems::new(controller, self.orbit_sensitivity);
        let context = GlobalContext::new(self.camera);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(systems, context),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            title: self.title,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Locomotion runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, OrbitCamera, LocomotionController
///   │
///   └─► Platform (winit event loop)
///         └─► Window, input buffering
///
/// Communication: bounded crossbeam channel (PlatformEvent)
/// ```
pub struct Engine<M>
where
    M: AnimationMixer + Send + 'static,
    M::Clip: Send,
{
    orchestrator: CoreSystemsOrchestrator<M>,
    tps: f64,
    channel_capacity: usize,
    title: String,
}

impl<M> Engine<M>
where
    M: AnimationMixer + Send + 'static,
    M::Clip: Send,
{
    //--- Initialization ---------------------------------------------------

    /// Configures systems (key bindings, orbit sensitivity) before the
    /// logic thread starts.
    ///
    /// ```no_run
    /// # use aetheric_locomotion::EngineBuilder;
    /// # use aetheric_locomotion::core::input::{KeyCode, LocomotionAction};
    /// # use aetheric_locomotion::core::locomotion::{ActionState, BlendMixer, ClipBindings};
    /// # let mut mixer = BlendMixer::new();
    /// # let clips = ClipBindings::builder()
    /// #     .bind(ActionState::Idle, mixer.add_clip("Idle", 1.0))
    /// #     .bind(ActionState::Walk, mixer.add_clip("Walk", 1.0))
    /// #     .bind(ActionState::Run, mixer.add_clip("Run", 1.0))
    /// #     .build()?;
    /// EngineBuilder::new()
    ///     .build(mixer, clips)
    ///     .init(|systems| {
    ///         // ZQSD for AZERTY keyboards.
    ///         systems.input.bind_key(KeyCode::KeyZ, LocomotionAction::Forward);
    ///         systems.input.bind_key(KeyCode::KeyQ, LocomotionAction::StrafeLeft);
    ///     })
    ///     .run()?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<M>),
    {
        info!("Initializing engine systems");
        self.orchestrator.init_systems(init_fn);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded platform → core channel
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop on this thread
    /// 4. On window close the logic thread exits and is joined
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop could not be created or
    /// failed. The logic thread is still shut down and joined first.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        let (tx, rx) = bounded::<PlatformEvent>(self.channel_capacity);

        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        let platform = Platform::new(tx, self.title);
        let result = platform.run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        // The platform (and its sender) is gone by now, so the logic
        // thread sees a disconnect even if WindowClosed was never sent.
        match core_handle.join() {
            Ok(orchestrator) => info!("Core thread terminated cleanly ({})", orchestrator.summary()),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
