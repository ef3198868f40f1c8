//=========================================================================
// Direction Flags
//=========================================================================
//
// Per-tick snapshot of the four held direction inputs and the heading
// offset they select relative to the camera.
//
//=========================================================================

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

//=== DirectionFlags ======================================================

/// Which movement directions are held this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionFlags {
    pub const NONE: Self = Self { forward: false, backward: false, left: false, right: false };

    pub const fn new(forward: bool, backward: bool, left: bool, right: bool) -> Self {
        Self { forward, backward, left, right }
    }

    /// `true` if any direction is held.
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Heading offset in radians, counter-clockwise about +Y, relative to
    /// the camera's horizontal forward.
    ///
    /// Opposing keys do not cancel. Forward wins over backward, and within
    /// either branch left wins over right:
    ///
    /// ```text
    /// W      0        W+A   +π/4    W+D   -π/4
    /// S      π        S+A  +3π/4    S+D  -3π/4
    /// A    +π/2       D    -π/2     none   0
    /// ```
    pub fn direction_offset(&self) -> f32 {
        if self.forward {
            if self.left {
                FRAC_PI_4
            } else if self.right {
                -FRAC_PI_4
            } else {
                0.0
            }
        } else if self.backward {
            if self.left {
                FRAC_PI_4 + FRAC_PI_2
            } else if self.right {
                -FRAC_PI_4 - FRAC_PI_2
            } else {
                PI
            }
        } else if self.left {
            FRAC_PI_2
        } else if self.right {
            -FRAC_PI_2
        } else {
            0.0
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
