//=========================================================================
// Camera Collaborator
//=========================================================================
//
// What the controller needs from a camera, and an orbit camera that
// provides it.
//
// The controller reads the camera's position and forward vector, then
// issues explicit `translate` / `recenter` requests. It never writes camera
// fields directly.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

//=== CameraRig ===========================================================

/// Camera as seen by the locomotion controller.
pub trait CameraRig {
    /// World-space eye position.
    fn position(&self) -> Vec3;

    /// World-space unit view direction.
    fn forward(&self) -> Vec3;

    /// Moves the eye by `delta` without changing the look-at target.
    fn translate(&mut self, delta: Vec3);

    /// Moves the look-at target to `target`.
    fn recenter(&mut self, target: Vec3);
}

//=== CameraFollow ========================================================

/// How the camera keeps up with a moving character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFollow {
    /// The eye is dragged by the character's displacement, then the target
    /// is recentered. Camera-to-character framing is preserved.
    #[default]
    Drag,

    /// Only the target is recentered; the eye stays put until the orbit
    /// distance limit pulls it along.
    Orbit,
}

//=== OrbitLimits =========================================================

/// Distance and elevation constraints for [`OrbitCamera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Largest angle between +Y and the target→eye vector. Just under π/2
    /// keeps the eye above the ground plane.
    pub max_polar_angle: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_distance: 5.0,
            max_distance: 15.0,
            max_polar_angle: FRAC_PI_2 - 0.05,
        }
    }
}

//=== OrbitCamera =========================================================

/// Eye orbiting a look-at target under [`OrbitLimits`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    position: Vec3,
    target: Vec3,
    limits: OrbitLimits,
}

impl OrbitCamera {
    // Keeps the azimuth defined when looking straight down.
    const MIN_POLAR_ANGLE: f32 = 1e-3;

    /// Creates a camera at `position` looking at `target`, then applies the
    /// default limits.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self::with_limits(position, target, OrbitLimits::default())
    }

    /// # Panics
    ///
    /// Panics if the distance range is empty or not positive.
    pub fn with_limits(position: Vec3, target: Vec3, limits: OrbitLimits) -> Self {
        assert!(
            limits.min_distance > 0.0 && limits.min_distance <= limits.max_distance,
            "Orbit distance range must be positive and non-empty, got [{}, {}]",
            limits.min_distance,
            limits.max_distance
        );
        let mut camera = Self { position, target, limits };
        camera.constrain(0.0, 0.0);
        camera
    }

    //--- Queries ----------------------------------------------------------

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn limits(&self) -> OrbitLimits {
        self.limits
    }

    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Angle between +Y and the target→eye vector.
    pub fn polar_angle(&self) -> f32 {
        let offset = self.position - self.target;
        let r = offset.length();
        if r == 0.0 {
            return 0.0;
        }
        (offset.y / r).clamp(-1.0, 1.0).acos()
    }

    //--- Orbit Control ----------------------------------------------------

    /// Rotates the eye about the target: `yaw` around +Y, `pitch` towards
    /// the horizon (positive) or the zenith (negative). Radians.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        self.constrain(yaw, pitch);
    }

    /// Moves the eye along the view ray, clamped to the distance limits.
    pub fn set_distance(&mut self, distance: f32) {
        let dir = (self.position - self.target).normalize_or_zero();
        let dir = if dir == Vec3::ZERO { Vec3::Z } else { dir };
        self.position = self.target + dir * distance;
        self.constrain(0.0, 0.0);
    }

    //--- Internal Helpers -------------------------------------------------

    /// Re-expresses the eye in spherical coordinates around the target,
    /// applies the rotation, then clamps radius and elevation.
    fn constrain(&mut self, yaw: f32, pitch: f32) {
        let offset = self.position - self.target;
        let radius = offset.length().clamp(self.limits.min_distance, self.limits.max_distance);

        let (theta, phi) = if offset.length_squared() == 0.0 {
            (0.0, self.limits.max_polar_angle)
        } else {
            (offset.x.atan2(offset.z), self.polar_angle())
        };

        let theta = theta + yaw;
        let phi = (phi + pitch).clamp(Self::MIN_POLAR_ANGLE, self.limits.max_polar_angle);

        self.position = self.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
    }
}

impl CameraRig for OrbitCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    fn recenter(&mut self, target: Vec3) {
        self.target = target;
        self.constrain(0.0, 0.0);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, PI};

    const EPS: f32 = 1e-4;

    fn demo_camera() -> OrbitCamera {
        OrbitCamera::new(Vec3::new(0.0, 5.0, 5.0), Vec3::ZERO)
    }

    //=====================================================================
    // Construction
    //=====================================================================

    #[test]
    fn valid_start_is_left_untouched() {
        let cam = demo_camera();
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 5.0, 5.0), EPS));
        assert!((cam.polar_angle() - FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn too_close_start_is_pushed_out() {
        let cam = OrbitCamera::new(Vec3::new(0.0, 1.0, 1.0), Vec3::ZERO);
        assert!((cam.distance() - 5.0).abs() < EPS);
    }

    #[test]
    fn below_horizon_start_is_lifted() {
        let cam = OrbitCamera::new(Vec3::new(0.0, -2.0, 8.0), Vec3::ZERO);
        assert!(cam.polar_angle() <= cam.limits().max_polar_angle + EPS);
        assert!(cam.position().y > 0.0);
    }

    #[test]
    #[should_panic(expected = "Orbit distance range")]
    fn inverted_distance_range_panics() {
        let limits = OrbitLimits { min_distance: 10.0, max_distance: 5.0, ..OrbitLimits::default() };
        OrbitCamera::with_limits(Vec3::Z * 7.0, Vec3::ZERO, limits);
    }

    //=====================================================================
    // CameraRig
    //=====================================================================

    #[test]
    fn forward_points_at_target() {
        let cam = demo_camera();
        let expected = Vec3::new(0.0, -1.0, -1.0).normalize();
        assert!(cam.forward().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn translate_moves_eye_only() {
        let mut cam = demo_camera();
        cam.translate(Vec3::new(1.0, 0.0, 0.0));
        assert!(cam.position().abs_diff_eq(Vec3::new(1.0, 5.0, 5.0), EPS));
        assert_eq!(cam.target(), Vec3::ZERO);
    }

    #[test]
    fn recenter_far_away_drags_eye_to_max_distance() {
        let mut cam = demo_camera();
        cam.recenter(Vec3::new(0.0, 0.0, -40.0));
        assert!((cam.distance() - 15.0).abs() < EPS);
    }

    //=====================================================================
    // Orbit
    //=====================================================================

    #[test]
    fn half_turn_yaw_mirrors_eye() {
        let mut cam = demo_camera();
        cam.orbit(PI, 0.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 5.0, -5.0), EPS));
    }

    #[test]
    fn pitch_is_clamped_above_horizon() {
        let mut cam = demo_camera();
        cam.orbit(0.0, 10.0);
        assert!((cam.polar_angle() - cam.limits().max_polar_angle).abs() < EPS);
    }

    #[test]
    fn pitch_cannot_cross_zenith() {
        let mut cam = demo_camera();
        cam.orbit(0.0, -10.0);
        assert!(cam.polar_angle() > 0.0);
        assert!(cam.forward().y < 0.0);
    }

    #[test]
    fn set_distance_is_clamped() {
        let mut cam = demo_camera();
        cam.set_distance(100.0);
        assert!((cam.distance() - 15.0).abs() < EPS);
        cam.set_distance(0.5);
        assert!((cam.distance() - 5.0).abs() < EPS);
    }

    #[test]
    fn default_follow_mode_drags() {
        assert_eq!(CameraFollow::default(), CameraFollow::Drag);
    }
}
