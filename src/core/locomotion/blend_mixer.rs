//=========================================================================
// Blend Mixer
//=========================================================================
//
// Minimal weight-blending animation mixer.
//
// Tracks, per clip, a looping local time, a blend weight and an optional
// linear fade. It does not sample skeletons; a renderer reads
// `effective_weight()` and `time()` and poses the model itself.
//
// Fade rules:
//   fade_in   weight 0 → 1 over duration
//   fade_out  current weight → 0 over duration, then the clip stops
//   reset     time → 0, any fade cancelled, weight untouched
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::AnimationMixer;

//=== ClipId ==============================================================

/// Handle to a clip registered with a [`BlendMixer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId(usize);

//=== Internal Types ======================================================

#[derive(Debug, Clone, Copy)]
struct Fade {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

#[derive(Debug, Clone)]
struct Clip {
    name: String,
    length: f32,
    time: f32,
    weight: f32,
    playing: bool,
    fade: Option<Fade>,
}

//=== BlendMixer ==========================================================

/// Owns a set of named clips and blends between them.
#[derive(Debug, Clone, Default)]
pub struct BlendMixer {
    clips: Vec<Clip>,
}

impl BlendMixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a clip of `length` seconds. New clips are stopped, with
    /// full weight.
    ///
    /// # Panics
    ///
    /// Panics if `length` is not a positive finite number.
    pub fn add_clip(&mut self, name: impl Into<String>, length: f32) -> ClipId {
        assert!(
            length.is_finite() && length > 0.0,
            "Clip length must be positive, got {}",
            length
        );
        self.clips.push(Clip {
            name: name.into(),
            length,
            time: 0.0,
            weight: 1.0,
            playing: false,
            fade: None,
        });
        ClipId(self.clips.len() - 1)
    }

    //--- Queries ----------------------------------------------------------

    pub fn clip_id(&self, name: &str) -> Option<ClipId> {
        self.clips.iter().position(|c| c.name == name).map(ClipId)
    }

    /// `(name, handle)` for every registered clip, in registration order.
    pub fn named_clips(&self) -> impl Iterator<Item = (&str, ClipId)> {
        self.clips
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.as_str(), ClipId(i)))
    }

    pub fn name(&self, clip: ClipId) -> Option<&str> {
        self.clips.get(clip.0).map(|c| c.name.as_str())
    }

    /// Blend weight, ignoring whether the clip is playing.
    pub fn weight(&self, clip: ClipId) -> f32 {
        self.clips.get(clip.0).map_or(0.0, |c| c.weight)
    }

    /// Weight the clip contributes to the pose: zero when stopped.
    pub fn effective_weight(&self, clip: ClipId) -> f32 {
        self.clips
            .get(clip.0)
            .map_or(0.0, |c| if c.playing { c.weight } else { 0.0 })
    }

    /// Local playback time in `[0, length)`.
    pub fn time(&self, clip: ClipId) -> f32 {
        self.clips.get(clip.0).map_or(0.0, |c| c.time)
    }

    pub fn is_playing(&self, clip: ClipId) -> bool {
        self.clips.get(clip.0).is_some_and(|c| c.playing)
    }

    pub fn is_fading(&self, clip: ClipId) -> bool {
        self.clips.get(clip.0).is_some_and(|c| c.fade.is_some())
    }

    //--- Internal Helpers -------------------------------------------------

    fn clip_mut(&mut self, clip: ClipId) -> Option<&mut Clip> {
        let found = self.clips.get_mut(clip.0);
        if found.is_none() {
            warn!(target: "locomotion", "Unknown clip handle {:?}", clip);
        }
        found
    }

    fn schedule_fade(&mut self, clip: ClipId, from: f32, to: f32, duration: f32) {
        let Some(c) = self.clip_mut(clip) else { return };
        if duration <= 0.0 {
            c.weight = to;
            c.fade = None;
            if to == 0.0 {
                c.playing = false;
            }
            return;
        }
        c.weight = from;
        c.fade = Some(Fade { from, to, duration, elapsed: 0.0 });
    }
}

impl AnimationMixer for BlendMixer {
    type Clip = ClipId;

    fn fade_out(&mut self, clip: ClipId, duration: f32) {
        let from = self.weight(clip);
        self.schedule_fade(clip, from, 0.0, duration);
    }

    fn reset(&mut self, clip: ClipId) {
        if let Some(c) = self.clip_mut(clip) {
            c.time = 0.0;
            c.fade = None;
        }
    }

    fn fade_in(&mut self, clip: ClipId, duration: f32) {
        self.schedule_fade(clip, 0.0, 1.0, duration);
    }

    fn play(&mut self, clip: ClipId) {
        if let Some(c) = self.clip_mut(clip) {
            c.playing = true;
        }
    }

    fn update(&mut self, delta_time: f32) {
        debug_assert!(delta_time >= 0.0, "mixer clock cannot run backwards");

        for c in self.clips.iter_mut().filter(|c| c.playing) {
            c.time = (c.time + delta_time).rem_euclid(c.length);

            if let Some(mut fade) = c.fade {
                fade.elapsed += delta_time;
                let t = (fade.elapsed / fade.duration).min(1.0);
                c.weight = fade.from + (fade.to - fade.from) * t;

                if t >= 1.0 {
                    c.fade = None;
                    if fade.to == 0.0 {
                        c.playing = false;
                    }
                } else {
                    c.fade = Some(fade);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn two_clips() -> (BlendMixer, ClipId, ClipId) {
        let mut mixer = BlendMixer::new();
        let idle = mixer.add_clip("Idle", 2.0);
        let walk = mixer.add_clip("Walk", 1.0);
        (mixer, idle, walk)
    }

    //=====================================================================
    // Registration
    //=====================================================================

    #[test]
    fn clips_are_found_by_name() {
        let (mixer, idle, walk) = two_clips();

        assert_eq!(mixer.clip_id("Idle"), Some(idle));
        assert_eq!(mixer.clip_id("Walk"), Some(walk));
        assert_eq!(mixer.clip_id("Run"), None);
        assert_eq!(mixer.name(walk), Some("Walk"));
    }

    #[test]
    fn named_clips_follow_registration_order() {
        let (mixer, idle, walk) = two_clips();
        let listed: Vec<_> = mixer.named_clips().collect();
        assert_eq!(listed, vec![("Idle", idle), ("Walk", walk)]);
    }

    #[test]
    #[should_panic(expected = "Clip length must be positive")]
    fn zero_length_clip_panics() {
        BlendMixer::new().add_clip("Broken", 0.0);
    }

    //=====================================================================
    // Playback
    //=====================================================================

    #[test]
    fn stopped_clip_contributes_nothing() {
        let (mixer, idle, _) = two_clips();
        assert_eq!(mixer.weight(idle), 1.0);
        assert_eq!(mixer.effective_weight(idle), 0.0);
    }

    #[test]
    fn playing_clip_loops() {
        let (mut mixer, _, walk) = two_clips();
        mixer.play(walk);

        mixer.update(0.75);
        mixer.update(0.5);

        assert!((mixer.time(walk) - 0.25).abs() < EPS);
    }

    #[test]
    fn stopped_clip_does_not_advance() {
        let (mut mixer, idle, _) = two_clips();
        mixer.update(1.0);
        assert_eq!(mixer.time(idle), 0.0);
    }

    //=====================================================================
    // Fades
    //=====================================================================

    #[test]
    fn cross_fade_settles_after_duration() {
        let (mut mixer, idle, walk) = two_clips();
        mixer.play(idle);

        mixer.fade_out(idle, 0.2);
        mixer.reset(walk);
        mixer.fade_in(walk, 0.2);
        mixer.play(walk);

        mixer.update(0.1);
        assert!((mixer.weight(idle) - 0.5).abs() < EPS);
        assert!((mixer.weight(walk) - 0.5).abs() < EPS);

        mixer.update(0.1);
        assert!(!mixer.is_playing(idle));
        assert_eq!(mixer.effective_weight(idle), 0.0);
        assert!((mixer.effective_weight(walk) - 1.0).abs() < EPS);
        assert!(!mixer.is_fading(walk));
    }

    #[test]
    fn fade_out_starts_from_current_weight() {
        let (mut mixer, idle, _) = two_clips();
        mixer.play(idle);
        mixer.fade_in(idle, 1.0);
        mixer.update(0.5);

        mixer.fade_out(idle, 1.0);
        mixer.update(0.5);

        assert!((mixer.weight(idle) - 0.25).abs() < EPS);
    }

    #[test]
    fn zero_duration_fade_applies_immediately() {
        let (mut mixer, idle, walk) = two_clips();
        mixer.play(idle);
        mixer.play(walk);

        mixer.fade_out(idle, 0.0);
        mixer.fade_in(walk, 0.0);

        assert!(!mixer.is_playing(idle));
        assert_eq!(mixer.weight(walk), 1.0);
    }

    #[test]
    fn zero_delta_makes_no_progress() {
        let (mut mixer, idle, _) = two_clips();
        mixer.play(idle);
        mixer.fade_in(idle, 0.2);

        mixer.update(0.0);

        assert_eq!(mixer.weight(idle), 0.0);
        assert!(mixer.is_fading(idle));
    }

    #[test]
    fn reset_rewinds_and_cancels_fade() {
        let (mut mixer, _, walk) = two_clips();
        mixer.play(walk);
        mixer.fade_in(walk, 1.0);
        mixer.update(0.3);

        mixer.reset(walk);

        assert_eq!(mixer.time(walk), 0.0);
        assert!(!mixer.is_fading(walk));
    }

    #[test]
    fn foreign_handle_is_ignored() {
        let (mut mixer, _, _) = two_clips();
        let foreign = ClipId(99);

        mixer.play(foreign);
        mixer.fade_out(foreign, 0.2);

        assert!(!mixer.is_playing(foreign));
        assert_eq!(mixer.weight(foreign), 0.0);
    }
}
