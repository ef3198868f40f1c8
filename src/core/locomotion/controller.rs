//=========================================================================
// Locomotion Controller
//=========================================================================
//
// Maps held direction input and camera orientation into character
// facing, displacement and animation state, once per tick.
//
// Tick pipeline:
// ```text
//   DirectionFlags ─┬─> ActionState::select ──(changed?)──> cross-fade clips
//                   │                                          │
//                   │                              mixer.update(dt), always
//                   │
//                   └─> (moving only)
//                         camera yaw + direction offset → turn towards
//                         camera forward (flat) ⟲ offset → displacement
//                         camera translate / recenter
// ```
//
// Movement is camera-relative rather than character-relative, so
// strafing and backpedalling are correct before the model has finished
// turning to its new heading.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{
    ActionState, AnimationMixer, CameraFollow, CameraRig, ClipBindings, DirectionFlags,
    LocomotionConfig,
};

//=== FacingTransform =====================================================

/// Character placement owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacingTransform {
    /// Unit rotation. Only ever rotated about +Y.
    pub rotation: Quat,
    pub position: Vec3,
}

impl Default for FacingTransform {
    fn default() -> Self {
        Self { rotation: Quat::IDENTITY, position: Vec3::ZERO }
    }
}

//=== TickOutcome =========================================================

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// State after the tick.
    pub action: ActionState,
    /// `true` if the state changed, and a cross-fade was requested.
    pub transitioned: bool,
    /// Horizontal displacement applied to the character.
    pub displacement: Vec3,
}

//=== LocomotionController ================================================

/// Idle / Walk / Run controller for a single character.
pub struct LocomotionController<M: AnimationMixer> {
    mixer: M,
    clips: ClipBindings<M::Clip>,
    config: LocomotionConfig,
    action: ActionState,
    transform: FacingTransform,
    run_toggled: bool,
}

impl<M: AnimationMixer> LocomotionController<M> {
    //--- Construction -----------------------------------------------------

    /// Takes ownership of the mixer and starts the Idle clip.
    pub fn new(mut mixer: M, clips: ClipBindings<M::Clip>, config: LocomotionConfig) -> Self {
        mixer.play(clips.get(ActionState::Idle));
        Self {
            mixer,
            clips,
            config,
            action: ActionState::Idle,
            transform: FacingTransform::default(),
            run_toggled: false,
        }
    }

    /// Places the character before the first tick.
    pub fn with_transform(mut self, transform: FacingTransform) -> Self {
        self.transform = transform;
        self
    }

    //--- Run Toggle -------------------------------------------------------

    /// Flips between walking and running. Takes effect on the next tick.
    pub fn toggle_run(&mut self) {
        self.run_toggled = !self.run_toggled;
        debug!(target: "locomotion", "Run toggle {}", if self.run_toggled { "on" } else { "off" });
    }

    pub fn is_run_toggled(&self) -> bool {
        self.run_toggled
    }

    //--- Accessors --------------------------------------------------------

    pub fn action(&self) -> ActionState {
        self.action
    }

    pub fn transform(&self) -> FacingTransform {
        self.transform
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn mixer(&self) -> &M {
        &self.mixer
    }

    pub fn mixer_mut(&mut self) -> &mut M {
        &mut self.mixer
    }

    //--- tick() -----------------------------------------------------------
    //
    // A zero `delta_time` is a valid tick: the state may still change, but
    // nothing moves and no blend progresses.
    //

    /// Advances the controller by `delta_time` seconds.
    ///
    /// # Panics
    ///
    /// Panics if `delta_time` is negative or not finite.
    pub fn tick<C>(&mut self, delta_time: f32, input: &DirectionFlags, camera: &mut C) -> TickOutcome
    where
        C: CameraRig + ?Sized,
    {
        assert!(
            delta_time.is_finite() && delta_time >= 0.0,
            "delta_time must be finite and non-negative, got {}",
            delta_time
        );

        //--- Step 1: Animation state ---------------------------------------
        let next = ActionState::select(input, self.run_toggled);
        let transitioned = next != self.action;
        if transitioned {
            self.cross_fade(next);
        }
        self.mixer.update(delta_time);

        if !self.action.is_moving() {
            return TickOutcome { action: self.action, transitioned, displacement: Vec3::ZERO };
        }

        //--- Step 2: Facing ------------------------------------------------
        let offset = input.direction_offset();
        let eye = camera.position();
        let position = self.transform.position;
        let camera_yaw = (eye.x - position.x).atan2(eye.z - position.z);

        let facing = Quat::from_rotation_y(camera_yaw + offset);
        self.transform.rotation = rotate_towards(self.transform.rotation, facing, self.config.turn_step);

        //--- Step 3: Displacement -----------------------------------------
        let flat_forward = (camera.forward() * Vec3::new(1.0, 0.0, 1.0)).normalize_or_zero();
        if flat_forward == Vec3::ZERO {
            trace!(target: "locomotion", "Camera looks straight down, no heading this tick");
        }
        let heading = Quat::from_rotation_y(offset) * flat_forward;
        let speed = self.config.speed_for(self.action == ActionState::Run);
        let displacement = Vec3::new(heading.x, 0.0, heading.z) * speed * delta_time;

        self.transform.position += displacement;

        //--- Step 4: Camera follow ----------------------------------------
        if self.config.camera_follow == CameraFollow::Drag {
            camera.translate(displacement);
        }
        camera.recenter(self.transform.position + self.config.follow_offset);

        TickOutcome { action: self.action, transitioned, displacement }
    }

    //--- Internal Helpers -------------------------------------------------

    fn cross_fade(&mut self, next: ActionState) {
        let blend = self.config.blend_duration;
        let from = self.clips.get(self.action);
        let to = self.clips.get(next);

        self.mixer.fade_out(from, blend);
        self.mixer.reset(to);
        self.mixer.fade_in(to, blend);
        self.mixer.play(to);

        debug!(target: "locomotion", "{} -> {} (blend {:.2}s)", self.action, next, blend);
        self.action = next;
    }
}

//=== rotate_towards() ====================================================

/// Rotates `from` towards `to` by at most `max_angle` radians.
///
/// Never overshoots: if `to` is within `max_angle`, `to` is returned.
pub fn rotate_towards(from: Quat, to: Quat, max_angle: f32) -> Quat {
    let angle = quat_angle(from, to);
    if angle <= max_angle {
        return to;
    }
    from.slerp(to, max_angle / angle).normalize()
}

/// Angle of the shortest rotation taking `a` to `b`, in `[0, π]`.
pub fn quat_angle(a: Quat, b: Quat) -> f32 {
    2.0 * a.dot(b).abs().min(1.0).acos()
}

//=========================================================================
// Unit Tests
//=========================================================================
