//=========================================================================
// Animation Collaborator
//=========================================================================
//
// The controller never owns animation clips. It holds opaque handles
// into a mixer and asks the mixer to cross-fade between them.
//
// Architecture:
//   ClipBindingsBuilder ──build()──> ClipBindings<H>   (total over states)
//                                        │
//   LocomotionController ── fade_out / reset / fade_in / play ──> Mixer
//
// A partial table is rejected at construction, so a missing clip can
// never surface in the middle of a tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{ActionState, LocomotionError};

//=== AnimationMixer ======================================================

/// Animation system seen from the locomotion controller.
///
/// Implementations own the clips; `Clip` is a cheap handle to one of them.
pub trait AnimationMixer {
    /// Handle to an independently playable clip.
    type Clip: Copy + Eq + Debug;

    /// Ramps the clip's weight down to zero over `duration` seconds.
    fn fade_out(&mut self, clip: Self::Clip, duration: f32);

    /// Rewinds the clip and cancels any fade in progress.
    fn reset(&mut self, clip: Self::Clip);

    /// Ramps the clip's weight up to one over `duration` seconds.
    fn fade_in(&mut self, clip: Self::Clip, duration: f32);

    /// Starts (or keeps) the clip playing.
    fn play(&mut self, clip: Self::Clip);

    /// Advances the mixer clock. Fades in progress resolve here.
    fn update(&mut self, delta_time: f32);
}

//=== ClipBindings ========================================================

/// State → clip table, guaranteed to cover every [`ActionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipBindings<H> {
    clips: [H; 3],
}

impl<H: Copy + Debug> ClipBindings<H> {
    /// Starts an empty table.
    pub fn builder() -> ClipBindingsBuilder<H> {
        ClipBindingsBuilder { slots: [None; 3] }
    }

    /// Builds the table from `(clip name, handle)` pairs as they come out of
    /// an asset, e.g. `[("Idle", a), ("Run", b), ("TPose", c), ("Walk", d)]`.
    ///
    /// Names that are not locomotion states are skipped.
    pub fn from_named<I, S>(clips: I) -> Result<Self, LocomotionError>
    where
        I: IntoIterator<Item = (S, H)>,
        S: AsRef<str>,
    {
        let mut builder = Self::builder();
        for (name, clip) in clips {
            match name.as_ref().parse::<ActionState>() {
                Ok(state) => {
                    builder.bind(state, clip);
                }
                Err(_) => debug!(target: "locomotion", "Skipping clip {:?}", name.as_ref()),
            }
        }
        builder.build()
    }

    /// Clip bound to `state`.
    pub fn get(&self, state: ActionState) -> H {
        self.clips[state.index()]
    }
}

//=== ClipBindingsBuilder =================================================

/// Collects bindings until every state has a clip.
#[derive(Debug, Clone)]
pub struct ClipBindingsBuilder<H> {
    slots: [Option<H>; 3],
}

impl<H: Copy + Debug> ClipBindingsBuilder<H> {
    /// Binds `clip` to `state`. Rebinding a state replaces its clip.
    pub fn bind(&mut self, state: ActionState, clip: H) -> &mut Self {
        if let Some(previous) = self.slots[state.index()].replace(clip) {
            warn!(target: "locomotion", "{} rebound from {:?} to {:?}", state, previous, clip);
        }
        self
    }

    /// Fails with the first state that has no clip.
    pub fn build(&self) -> Result<ClipBindings<H>, LocomotionError> {
        let slot = |state: ActionState| {
            self.slots[state.index()].ok_or(LocomotionError::UnboundClip(state))
        };
        Ok(ClipBindings {
            clips: [
                slot(ActionState::Idle)?,
                slot(ActionState::Walk)?,
                slot(ActionState::Run)?,
            ],
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_table_builds() {
        let bindings = ClipBindings::builder()
            .bind(ActionState::Idle, 10u32)
            .bind(ActionState::Walk, 11)
            .bind(ActionState::Run, 12)
            .build()
            .unwrap();

        assert_eq!(bindings.get(ActionState::Idle), 10);
        assert_eq!(bindings.get(ActionState::Walk), 11);
        assert_eq!(bindings.get(ActionState::Run), 12);
    }

    #[test]
    fn missing_state_is_reported() {
        let err = ClipBindings::builder()
            .bind(ActionState::Idle, 0u32)
            .bind(ActionState::Run, 2)
            .build()
            .unwrap_err();

        assert_eq!(err, LocomotionError::UnboundClip(ActionState::Walk));
    }

    #[test]
    fn empty_table_reports_idle_first() {
        let err = ClipBindings::<u32>::builder().build().unwrap_err();
        assert_eq!(err, LocomotionError::UnboundClip(ActionState::Idle));
    }

    #[test]
    fn rebinding_keeps_last_clip() {
        let bindings = ClipBindings::builder()
            .bind(ActionState::Idle, 1u32)
            .bind(ActionState::Idle, 7)
            .bind(ActionState::Walk, 2)
            .bind(ActionState::Run, 3)
            .build()
            .unwrap();

        assert_eq!(bindings.get(ActionState::Idle), 7);
    }

    #[test]
    fn named_list_skips_extra_clips() {
        let clips = vec![("Idle", 0u32), ("Run", 1), ("TPose", 2), ("Walk", 3)];
        let bindings = ClipBindings::from_named(clips).unwrap();

        assert_eq!(bindings.get(ActionState::Walk), 3);
        assert_eq!(bindings.get(ActionState::Run), 1);
    }

    #[test]
    fn named_list_without_run_fails() {
        let clips = vec![("Idle".to_string(), 0u32), ("Walk".to_string(), 1)];
        let err = ClipBindings::from_named(clips).unwrap_err();
        assert_eq!(err, LocomotionError::UnboundClip(ActionState::Run));
    }
}
