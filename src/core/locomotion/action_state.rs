//=========================================================================
// Action State
//=========================================================================

use std::fmt;
use std::str::FromStr;

use super::{DirectionFlags, LocomotionError};

//=== ActionState =========================================================

/// Locomotion mode, one animation clip per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Walk,
    Run,
}

impl ActionState {
    /// Every state, in clip-table order.
    pub const ALL: [ActionState; 3] = [ActionState::Idle, ActionState::Walk, ActionState::Run];

    /// Selects the state for this tick.
    ///
    /// Idle unless a direction is held; Run only when the toggle is on.
    pub fn select(directions: &DirectionFlags, run_toggled: bool) -> Self {
        match (directions.any(), run_toggled) {
            (false, _) => Self::Idle,
            (true, true) => Self::Run,
            (true, false) => Self::Walk,
        }
    }

    /// Clip name as authored in the character asset.
    pub fn clip_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Walk => "Walk",
            Self::Run => "Run",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Walk => 1,
            Self::Run => 2,
        }
    }

    pub fn is_moving(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl fmt::Display for ActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.clip_name())
    }
}

impl FromStr for ActionState {
    type Err = LocomotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.clip_name() == s)
            .ok_or_else(|| LocomotionError::UnknownClipName(s.to_owned()))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
