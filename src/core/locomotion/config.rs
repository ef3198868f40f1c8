//=========================================================================
// Locomotion Configuration
//=========================================================================

use glam::Vec3;

use super::CameraFollow;

//=== LocomotionConfig ====================================================

/// Tuning constants for [`LocomotionController`](super::LocomotionController).
///
/// # Default Values
///
/// - **Walk speed**: 2.0 units/s
/// - **Run speed**: 5.0 units/s
/// - **Blend duration**: 0.2 s
/// - **Turn step**: 0.15 rad per tick
/// - **Camera follow**: [`CameraFollow::Drag`]
/// - **Follow offset**: (0, 1, 0), so the camera looks at the chest rather
///   than the feet
///
/// # Examples
///
/// ```
/// use aetheric_locomotion::core::locomotion::{CameraFollow, LocomotionConfig};
/// use glam::Vec3;
///
/// let config = LocomotionConfig::default()
///     .with_run_speed(6.5)
///     .with_camera_follow(CameraFollow::Orbit)
///     .with_follow_offset(Vec3::ZERO);
/// assert_eq!(config.run_speed, 6.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionConfig {
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Cross-fade window between two state clips, in seconds.
    pub blend_duration: f32,
    /// Largest rotation applied to the character in one tick, in radians.
    pub turn_step: f32,
    pub camera_follow: CameraFollow,
    /// Added to the character position to obtain the camera look-at target.
    pub follow_offset: Vec3,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 5.0,
            blend_duration: 0.2,
            turn_step: 0.15,
            camera_follow: CameraFollow::Drag,
            follow_offset: Vec3::Y,
        }
    }
}

impl LocomotionConfig {
    /// # Panics
    ///
    /// Panics if `speed` is negative or not finite.
    pub fn with_walk_speed(mut self, speed: f32) -> Self {
        assert!(speed.is_finite() && speed >= 0.0, "Walk speed must be non-negative, got {}", speed);
        self.walk_speed = speed;
        self
    }

    /// # Panics
    ///
    /// Panics if `speed` is negative or not finite.
    pub fn with_run_speed(mut self, speed: f32) -> Self {
        assert!(speed.is_finite() && speed >= 0.0, "Run speed must be non-negative, got {}", speed);
        self.run_speed = speed;
        self
    }

    /// A zero duration makes state changes snap.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is negative or not finite.
    pub fn with_blend_duration(mut self, seconds: f32) -> Self {
        assert!(
            seconds.is_finite() && seconds >= 0.0,
            "Blend duration must be non-negative, got {}",
            seconds
        );
        self.blend_duration = seconds;
        self
    }

    /// # Panics
    ///
    /// Panics if `radians` is not positive and finite.
    pub fn with_turn_step(mut self, radians: f32) -> Self {
        assert!(radians.is_finite() && radians > 0.0, "Turn step must be positive, got {}", radians);
        self.turn_step = radians;
        self
    }

    pub fn with_camera_follow(mut self, follow: CameraFollow) -> Self {
        self.camera_follow = follow;
        self
    }

    pub fn with_follow_offset(mut self, offset: Vec3) -> Self {
        self.follow_offset = offset;
        self
    }

    /// Speed for a moving state. Idle never moves.
    pub(crate) fn speed_for(&self, running: bool) -> f32 {
        if running {
            self.run_speed
        } else {
            self.walk_speed
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
    fn defaults() {
        let config = LocomotionConfig::default();
        assert_eq!(config.walk_speed, 2.0);
        assert_eq!(config.run_speed, 5.0);
        assert_eq!(config.blend_duration, 0.2);
        assert_eq!(config.turn_step, 0.15);
        assert_eq!(config.camera_follow, CameraFollow::Drag);
        assert_eq!(config.follow_offset, Vec3::Y);
    }

    #[test]
    fn fluent_setters_chain() {
        let config = LocomotionConfig::default()
            .with_walk_speed(1.5)
            .with_run_speed(4.0)
            .with_blend_duration(0.0)
            .with_turn_step(0.3);

        assert_eq!(config.speed_for(false), 1.5);
        assert_eq!(config.speed_for(true), 4.0);
        assert_eq!(config.blend_duration, 0.0);
        assert_eq!(config.turn_step, 0.3);
    }

    #[test]
    #[should_panic(expected = "Run speed must be non-negative")]
    fn negative_run_speed_panics() {
        LocomotionConfig::default().with_run_speed(-1.0);
    }

    #[test]
    #[should_panic(expected = "Blend duration must be non-negative")]
    fn nan_blend_panics() {
        LocomotionConfig::default().with_blend_duration(f32::NAN);
    }

    #[test]
    #[should_panic(expected = "Turn step must be positive")]
    fn zero_turn_step_panics() {
        LocomotionConfig::default().with_turn_step(0.0);
    }
}
