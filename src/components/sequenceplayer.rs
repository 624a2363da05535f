//! Sequence frame player component.
//!
//! A [`SequencePlayer`] plays an ordered list of [`Frame`]s (one texture per
//! frame) on a display surface at a fixed frame rate. It is the flip-book
//! counterpart of a sprite-sheet animation: each frame is its own image.
//!
//! # Playback
//!
//! - [`PlaybackMode::Once`] stops on the last frame and reports completion.
//! - [`PlaybackMode::Loop`] wraps back to the first frame.
//! - [`PlaybackMode::PingPong`] bounces between both ends.
//!
//! Time is consumed with a fixed-timestep accumulator: [`SequencePlayer::tick`]
//! adds the frame delta and performs one advance per elapsed frame duration,
//! so long frames catch up without skipping the mode transitions.
//!
//! # Surfaces
//!
//! The player never touches a surface directly while its state changes.
//! Index changes mark a pending apply, and
//! [`sequence_player_system`](crate::systems::sequenceplayer::sequence_player_system)
//! flushes it once per tick into the [`FrameSurface`] selected by
//! [`FrameTarget`]. Notifications are buffered the same way and turned into
//! events by the system.
//!
//! # Example
//!
//! ```ignore
//! let player = SequencePlayer::new(frames)
//!     .with_fps(10)
//!     .with_mode(PlaybackMode::PingPong)
//!     .with_target(FrameTarget::RawImage);
//! commands.spawn((RawImage::default(), Position::new(8.0, 8.0), player));
//! ```

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Frame rate used when none is configured.
pub const DEFAULT_FPS: u32 = 12;

/// What happens when playback runs past either end of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    Once,
    #[default]
    Loop,
    PingPong,
}

/// Which clock drives the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeMode {
    /// Follows [`WorldTime::delta`](crate::resources::worldtime::WorldTime).
    #[default]
    Scaled,
    /// Follows [`WorldTime::unscaled_delta`](crate::resources::worldtime::WorldTime),
    /// ignoring slow motion and pauses of the world clock.
    Unscaled,
}

/// The kind of surface the player draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameTarget {
    /// A world [`Sprite`](crate::components::sprite::Sprite).
    #[default]
    Sprite,
    /// A UI [`RawImage`](crate::components::rawimage::RawImage).
    RawImage,
}

/// One image of a sequence: a texture key and its native size in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tex_key: Arc<str>,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(tex_key: impl Into<Arc<str>>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }
}

/// Anything that can display a single [`Frame`].
pub trait FrameSurface {
    /// Texture key currently shown, if any.
    fn shown_frame(&self) -> Option<&str>;
    /// Show `frame`, resizing to its native size.
    fn show_frame(&mut self, frame: &Frame);
}

/// Notifications buffered by the player until the owning system drains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The visible index changed.
    FrameChanged(usize),
    /// Loop wrapped, or PingPong bounced off an end.
    Looped,
    /// Once mode reached the last frame.
    Completed,
}

/// Flip-book player state attached to an entity with a matching surface.
#[derive(Component, Debug, Clone)]
pub struct SequencePlayer {
    frames: Vec<Frame>,
    mode: PlaybackMode,
    pub time_mode: TimeMode,
    pub target: FrameTarget,
    /// Skip reassigning a texture the surface already shows.
    pub skip_redundant_apply: bool,
    fps: u32,
    start_frame: usize,
    current: usize,
    playing: bool,
    autoplay: bool,
    direction: i32,
    accumulator: f32,
    /// `Some(force)` when the surface must be refreshed.
    pending_apply: Option<bool>,
    events: SmallVec<[PlaybackEvent; 4]>,
    pub(crate) missing_surface_reported: bool,
}

impl SequencePlayer {
    /// Create a looping player at [`DEFAULT_FPS`] that starts playing on
    /// its first tick. The first frame is applied unconditionally.
    pub fn new(frames: Vec<Frame>) -> Self {
        let has_frames = !frames.is_empty();
        Self {
            frames,
            mode: PlaybackMode::default(),
            time_mode: TimeMode::default(),
            target: FrameTarget::default(),
            skip_redundant_apply: true,
            fps: DEFAULT_FPS,
            start_frame: 0,
            current: 0,
            playing: has_frames,
            autoplay: true,
            direction: 1,
            accumulator: 0.0,
            pending_apply: has_frames.then_some(true),
            events: SmallVec::new(),
            missing_surface_reported: false,
        }
    }

    pub fn with_mode(mut self, mode: PlaybackMode) -> Self {
        self.set_mode(mode);
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.set_fps(fps);
        self
    }

    pub fn with_time_mode(mut self, time_mode: TimeMode) -> Self {
        self.time_mode = time_mode;
        self
    }

    pub fn with_target(mut self, target: FrameTarget) -> Self {
        self.target = target;
        self
    }

    /// Set the frame used on construction and by `stop(true)`.
    pub fn with_start_frame(mut self, start_frame: usize) -> Self {
        self.start_frame = start_frame;
        self.current = self.clamp_index(start_frame as isize);
        self
    }

    /// Whether playback begins without an explicit [`play`](Self::play).
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self.playing = autoplay && !self.frames.is_empty();
        self
    }

    /// Order frames by texture key, for `0001.png, 0002.png, ...` naming.
    pub fn sorted_by_name(mut self) -> Self {
        self.frames.sort_by(|a, b| a.tex_key.cmp(&b.tex_key));
        self
    }

    pub fn with_skip_redundant_apply(mut self, skip: bool) -> Self {
        self.skip_redundant_apply = skip;
        self
    }

    // --- Queries ---

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.get(self.current)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn start_frame(&self) -> usize {
        self.start_frame
    }

    /// +1 while moving forward, -1 on the way back in PingPong.
    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// Time carried over towards the next advance.
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn frame_duration(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Position in `[0, 1]` across the sequence. Always 0 for fewer than two frames.
    pub fn normalized_time(&self) -> f32 {
        let count = self.frames.len();
        if count <= 1 {
            0.0
        } else {
            self.current as f32 / (count - 1) as f32
        }
    }

    // --- Controls ---

    pub fn set_mode(&mut self, mode: PlaybackMode) {
        self.mode = mode;
        if mode != PlaybackMode::PingPong {
            self.direction = 1;
        }
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.max(1);
    }

    pub fn play(&mut self) {
        if self.frames.is_empty() {
            return;
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Halt playback; with `rewind`, jump back to the start frame.
    pub fn stop(&mut self, rewind: bool) {
        self.playing = false;
        if rewind {
            self.set_index(self.start_frame as isize, true);
        }
    }

    /// Rewind to the start frame and resume only if the player autoplays.
    pub fn restart(&mut self) {
        self.stop(true);
        if self.autoplay {
            self.play();
        }
    }

    /// Show the frame at `index`, clamped into range.
    ///
    /// Unchanged indices are ignored unless `force_apply` is set or
    /// redundant-apply skipping is disabled.
    pub fn set_index(&mut self, index: isize, force_apply: bool) {
        if self.frames.is_empty() {
            return;
        }
        let index = self.clamp_index(index);
        if self.current == index && !force_apply && self.skip_redundant_apply {
            return;
        }
        self.current = index;
        self.pending_apply = Some(self.pending_apply.unwrap_or(false) || force_apply);
        self.events.push(PlaybackEvent::FrameChanged(index));
    }

    pub fn set_normalized_time(&mut self, t: f32) {
        let last = self.frames.len().saturating_sub(1);
        let index = (t.clamp(0.0, 1.0) * last as f32).round() as isize;
        self.set_index(index, true);
    }

    pub fn next_frame(&mut self) {
        self.step(1);
    }

    pub fn prev_frame(&mut self) {
        self.step(-1);
    }

    /// Consume `dt` seconds and return how many frames were advanced.
    pub fn tick(&mut self, dt: f32) -> usize {
        if !self.playing || self.frames.len() <= 1 {
            return 0;
        }
        self.accumulator += dt.max(0.0);
        let frame_duration = self.frame_duration();
        let mut advanced = 0;
        while self.accumulator >= frame_duration {
            self.accumulator -= frame_duration;
            self.advance();
            advanced += 1;
            if !self.playing {
                self.accumulator = 0.0;
                break;
            }
        }
        advanced
    }

    // --- Output ---

    /// Take the buffered notifications in the order they happened.
    pub fn drain_events(&mut self) -> SmallVec<[PlaybackEvent; 4]> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_apply(&self) -> bool {
        self.pending_apply.is_some()
    }

    /// Flush a pending frame change into `surface`.
    ///
    /// Returns true when the surface was written.
    pub fn apply_to(&mut self, surface: &mut dyn FrameSurface) -> bool {
        let Some(force) = self.pending_apply.take() else {
            return false;
        };
        let Some(frame) = self.frames.get(self.current) else {
            return false;
        };
        if self.skip_redundant_apply && !force && surface.shown_frame() == Some(&*frame.tex_key)
        {
            return false;
        }
        surface.show_frame(frame);
        true
    }

    // --- Internal ---

    fn clamp_index(&self, index: isize) -> usize {
        let last = self.frames.len().saturating_sub(1) as isize;
        index.clamp(0, last) as usize
    }

    fn advance(&mut self) {
        let count = self.frames.len() as isize;
        if count == 0 {
            return;
        }
        let mut next = self.current as isize + self.direction as isize;

        match self.mode {
            PlaybackMode::Once => {
                if next >= count {
                    self.set_index(count - 1, false);
                    self.playing = false;
                    self.events.push(PlaybackEvent::Completed);
                    return;
                }
            }
            PlaybackMode::Loop => {
                if next >= count {
                    next = 0;
                    self.events.push(PlaybackEvent::Looped);
                }
            }
            PlaybackMode::PingPong => {
                if next >= count {
                    self.direction = -1;
                    next = (count - 2).clamp(0, count - 1);
                    self.events.push(PlaybackEvent::Looped);
                } else if next < 0 {
                    self.direction = 1;
                    next = 1.clamp(0, count - 1);
                    self.events.push(PlaybackEvent::Looped);
                }
            }
        }

        self.set_index(next, false);
    }

    fn step(&mut self, delta: isize) {
        let count = self.frames.len() as isize;
        if count == 0 {
            return;
        }
        let index = self.current as isize + delta;
        let index = match self.mode {
            PlaybackMode::Loop => index.rem_euclid(count),
            PlaybackMode::Once | PlaybackMode::PingPong => index.clamp(0, count - 1),
        };
        self.set_index(index, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: usize) -> Vec<Frame> {
        (0..n)
            .map(|i| Frame::new(format!("frame_{i:04}"), 32.0, 32.0))
            .collect()
    }

    fn player(n: usize, mode: PlaybackMode) -> SequencePlayer {
        SequencePlayer::new(frames(n)).with_mode(mode).with_fps(10)
    }

    /// Advance exactly one frame duration.
    fn advance_once(p: &mut SequencePlayer) -> usize {
        let d = p.frame_duration();
        p.tick(d)
    }

    fn count(events: &[PlaybackEvent], wanted: PlaybackEvent) -> usize {
        events.iter().filter(|e| **e == wanted).count()
    }

    #[derive(Default)]
    struct TestSurface {
        key: Option<String>,
        writes: usize,
    }

    impl FrameSurface for TestSurface {
        fn shown_frame(&self) -> Option<&str> {
            self.key.as_deref()
        }
        fn show_frame(&mut self, frame: &Frame) {
            self.key = Some(frame.tex_key.to_string());
            self.writes += 1;
        }
    }

    #[test]
    fn test_new_player_autoplays_with_frames() {
        let p = SequencePlayer::new(frames(3));
        assert!(p.is_playing());
        assert_eq!(p.fps(), DEFAULT_FPS);
        assert_eq!(p.mode(), PlaybackMode::Loop);
        assert!(p.has_pending_apply());
    }

    #[test]
    fn test_empty_player_is_inert() {
        let mut p = SequencePlayer::new(Vec::new());
        assert!(!p.is_playing());
        p.play();
        assert!(!p.is_playing());
        p.set_index(3, true);
        p.next_frame();
        assert_eq!(p.tick(10.0), 0);
        assert_eq!(p.current_index(), 0);
        assert!(p.drain_events().is_empty());
        assert!(p.current_frame().is_none());
    }

    #[test]
    fn test_set_index_clamps_in_every_mode() {
        for mode in [PlaybackMode::Once, PlaybackMode::Loop, PlaybackMode::PingPong] {
            let mut p = player(4, mode);
            for index in [-10, -1, 0, 2, 3, 4, 99] {
                p.set_index(index, false);
                assert!(p.current_index() < p.frame_count());
            }
            p.set_index(-5, false);
            assert_eq!(p.current_index(), 0);
            p.set_index(50, false);
            assert_eq!(p.current_index(), 3);
        }
    }

    #[test]
    fn test_set_index_same_index_is_noop_unless_forced() {
        let mut p = player(3, PlaybackMode::Loop);
        p.set_index(1, false);
        p.drain_events();
        p.set_index(1, false);
        assert!(p.drain_events().is_empty());
        p.set_index(1, true);
        assert_eq!(
            p.drain_events().as_slice(),
            &[PlaybackEvent::FrameChanged(1)]
        );
    }

    #[test]
    fn test_set_index_same_index_reports_when_skipping_disabled() {
        let mut p = player(3, PlaybackMode::Loop).with_skip_redundant_apply(false);
        p.set_index(0, false);
        assert_eq!(
            p.drain_events().as_slice(),
            &[PlaybackEvent::FrameChanged(0)]
        );
    }

    #[test]
    fn test_loop_returns_to_start_with_one_loop_event() {
        let mut p = player(5, PlaybackMode::Loop);
        for _ in 0..5 {
            advance_once(&mut p);
        }
        assert_eq!(p.current_index(), 0);
        let events = p.drain_events();
        assert_eq!(count(&events, PlaybackEvent::Looped), 1);
        assert_eq!(count(&events, PlaybackEvent::Completed), 0);
        // loop is reported before the wrapped frame
        assert_eq!(
            &events[events.len() - 2..],
            &[PlaybackEvent::Looped, PlaybackEvent::FrameChanged(0)]
        );
    }

    #[test]
    fn test_ping_pong_visits_both_ends() {
        let n = 4;
        let mut p = player(n, PlaybackMode::PingPong);
        let mut visited = vec![p.current_index()];
        let mut flips = Vec::new();
        for step in 0..12 {
            let before = p.direction();
            advance_once(&mut p);
            if p.direction() != before {
                flips.push((step, p.current_index()));
            }
            visited.push(p.current_index());
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 2, 1, 0, 1, 2, 3, 2, 1, 0]);
        // flips happen only when bouncing off the last or first frame
        assert_eq!(flips, vec![(3, 2), (6, 1), (9, 2)]);
        let events = p.drain_events();
        assert_eq!(count(&events, PlaybackEvent::Looped), 3);
    }

    #[test]
    fn test_ping_pong_two_frames_alternates() {
        let mut p = player(2, PlaybackMode::PingPong);
        let mut visited = vec![p.current_index()];
        for _ in 0..5 {
            advance_once(&mut p);
            visited.push(p.current_index());
        }
        assert_eq!(visited, vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_once_clamps_stops_and_completes_once() {
        let mut p = player(3, PlaybackMode::Once);
        advance_once(&mut p);
        advance_once(&mut p);
        assert!(p.is_playing());
        advance_once(&mut p);
        assert_eq!(p.current_index(), 2);
        assert!(!p.is_playing());
        // further time does nothing
        assert_eq!(p.tick(5.0), 0);
        let events = p.drain_events();
        assert_eq!(count(&events, PlaybackEvent::Completed), 1);
        assert_eq!(count(&events, PlaybackEvent::Looped), 0);
    }

    #[test]
    fn test_once_large_step_completes_once() {
        let mut p = player(3, PlaybackMode::Once);
        let advanced = p.tick(10.0);
        assert_eq!(advanced, 3);
        assert_eq!(p.current_index(), 2);
        assert_eq!(p.accumulator(), 0.0);
        let events = p.drain_events();
        assert_eq!(count(&events, PlaybackEvent::Completed), 1);
    }

    #[test]
    fn test_tick_catches_up_exactly() {
        // fps=10, 3 frames, six ticks of 0.05s -> three advances: 1, 2, 0
        let mut p = player(3, PlaybackMode::Loop);
        let mut advances = 0;
        for _ in 0..6 {
            advances += p.tick(0.05);
        }
        assert_eq!(advances, 3);
        assert_eq!(p.current_index(), 0);
        let changed: Vec<usize> = p
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                PlaybackEvent::FrameChanged(i) => Some(i),
                _ => None,
            })
            .collect();
        assert_eq!(changed, vec![1, 2, 0]);
    }

    #[test]
    fn test_accumulator_stays_below_frame_duration() {
        let mut p = player(6, PlaybackMode::Loop);
        for dt in [0.013, 0.27, 0.0, 0.099, 1.234, 0.05] {
            p.tick(dt);
            assert!(p.accumulator() >= 0.0);
            assert!(p.accumulator() < p.frame_duration());
        }
    }

    #[test]
    fn test_single_frame_never_advances() {
        let mut p = player(1, PlaybackMode::Once);
        assert_eq!(p.tick(3.0), 0);
        assert!(p.is_playing());
    }

    #[test]
    fn test_pause_keeps_position_and_stop_rewinds() {
        let mut p = player(5, PlaybackMode::Loop).with_start_frame(1);
        assert_eq!(p.current_index(), 1);
        advance_once(&mut p);
        advance_once(&mut p);
        assert_eq!(p.current_index(), 3);

        p.pause();
        assert_eq!(p.tick(1.0), 0);
        assert_eq!(p.current_index(), 3);

        p.play();
        p.stop(false);
        assert_eq!(p.current_index(), 3);

        p.stop(true);
        assert!(!p.is_playing());
        assert_eq!(p.current_index(), 1);
    }

    #[test]
    fn test_start_frame_is_clamped() {
        let p = player(3, PlaybackMode::Loop).with_start_frame(10);
        assert_eq!(p.current_index(), 2);
    }

    #[test]
    fn test_step_wraps_only_in_loop() {
        let mut p = player(3, PlaybackMode::Loop);
        p.prev_frame();
        assert_eq!(p.current_index(), 2);
        p.next_frame();
        assert_eq!(p.current_index(), 0);

        let mut p = player(3, PlaybackMode::Once);
        p.prev_frame();
        assert_eq!(p.current_index(), 0);
        p.set_index(2, false);
        p.next_frame();
        assert_eq!(p.current_index(), 2);

        let mut p = player(3, PlaybackMode::PingPong);
        p.set_index(2, false);
        p.next_frame();
        assert_eq!(p.current_index(), 2);
    }

    #[test]
    fn test_normalized_time_maps_both_ways() {
        let mut p = player(5, PlaybackMode::Loop);
        p.set_index(2, false);
        assert!((p.normalized_time() - 0.5).abs() < 1e-6);
        p.set_normalized_time(1.0);
        assert_eq!(p.current_index(), 4);
        p.set_normalized_time(-3.0);
        assert_eq!(p.current_index(), 0);
        p.set_normalized_time(0.3);
        assert_eq!(p.current_index(), 1);

        let single = player(1, PlaybackMode::Loop);
        assert_eq!(single.normalized_time(), 0.0);
    }

    #[test]
    fn test_sorted_by_name_orders_frames() {
        let p = SequencePlayer::new(vec![
            Frame::new("walk_0003", 1.0, 1.0),
            Frame::new("walk_0001", 1.0, 1.0),
            Frame::new("walk_0002", 1.0, 1.0),
        ])
        .sorted_by_name();
        let keys: Vec<&str> = p.frames().iter().map(|f| &*f.tex_key).collect();
        assert_eq!(keys, vec!["walk_0001", "walk_0002", "walk_0003"]);
    }

    #[test]
    fn test_leaving_ping_pong_resets_direction() {
        let mut p = player(3, PlaybackMode::PingPong);
        for _ in 0..3 {
            advance_once(&mut p);
        }
        assert_eq!(p.direction(), -1);
        p.set_mode(PlaybackMode::Loop);
        assert_eq!(p.direction(), 1);
    }

    #[test]
    fn test_apply_coalesces_changes_within_a_tick() {
        let mut p = player(4, PlaybackMode::Loop);
        let mut surface = TestSurface::default();
        assert!(p.apply_to(&mut surface));
        assert_eq!(surface.key.as_deref(), Some("frame_0000"));

        // three advances, one write
        p.tick(0.3);
        assert!(p.apply_to(&mut surface));
        assert!(!p.apply_to(&mut surface));
        assert_eq!(surface.writes, 2);
        assert_eq!(surface.key.as_deref(), Some("frame_0003"));
    }

    #[test]
    fn test_apply_skips_frame_already_shown() {
        let mut p = player(3, PlaybackMode::Loop).with_autoplay(false);
        let mut surface = TestSurface::default();
        p.apply_to(&mut surface);

        p.set_index(1, false);
        surface.key = Some("frame_0001".to_string());
        assert!(!p.apply_to(&mut surface));
        assert_eq!(surface.writes, 1);

        // forced applies always write
        p.stop(true);
        p.set_index(1, true);
        assert!(p.apply_to(&mut surface));
        assert_eq!(surface.writes, 2);
    }

    #[test]
    fn test_restart_keeps_autoplay_choice() {
        let mut manual = player(3, PlaybackMode::Once).with_autoplay(false);
        manual.play();
        manual.tick(0.25);
        manual.restart();
        assert_eq!(manual.current_index(), 0);
        assert!(!manual.is_playing());

        let mut auto = player(3, PlaybackMode::Once);
        auto.tick(0.25);
        auto.pause();
        auto.restart();
        assert_eq!(auto.current_index(), 0);
        assert!(auto.is_playing());
    }
}
