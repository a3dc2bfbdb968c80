use crate::looper::LoopBounds;
use crate::overlay::{announce, StatusOverlay};

use super::rate::PlaybackRate;
use super::video::VideoElement;

pub const DEFAULT_SEEK_STEP_SECS: f64 = 5.0;
pub const MIN_SEEK_STEP_SECS: f64 = 0.5;
pub const MAX_SEEK_STEP_SECS: f64 = 60.0;

/// Named playback operations on top of the raw video primitives.
///
/// Holds the playback-rate selection; loop markers are passed in as [`LoopBounds`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackController {
    rate: PlaybackRate,
    seek_step: f64,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(DEFAULT_SEEK_STEP_SECS)
    }
}

impl PlaybackController {
    pub fn new(seek_step: f64) -> Self {
        Self {
            rate: PlaybackRate::default(),
            seek_step: seek_step.clamp(MIN_SEEK_STEP_SECS, MAX_SEEK_STEP_SECS),
        }
    }

    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    pub fn seek_step(&self) -> f64 {
        self.seek_step
    }

    pub fn seek_back<V, O>(&self, video: &mut V, overlay: &mut O, bounds: LoopBounds)
    where
        V: VideoElement + ?Sized,
        O: StatusOverlay + ?Sized,
    {
        self.seek_relative(video, overlay, -self.seek_step, bounds);
    }

    pub fn seek_forward<V, O>(&self, video: &mut V, overlay: &mut O, bounds: LoopBounds)
    where
        V: VideoElement + ?Sized,
        O: StatusOverlay + ?Sized,
    {
        self.seek_relative(video, overlay, self.seek_step, bounds);
    }

    /// Moves playback by `delta` seconds without leaving the loop.
    pub fn seek_relative<V, O>(&self, video: &mut V, overlay: &mut O, delta: f64, bounds: LoopBounds)
    where
        V: VideoElement + ?Sized,
        O: StatusOverlay + ?Sized,
    {
        let target = seek_target(video.current_time(), delta, bounds);
        video.set_current_time(target);

        let message = if delta < 0.0 {
            format!("Rewinding {}sec", -delta)
        } else {
            format!("Forwarding {delta}sec")
        };
        announce(overlay, &message);
    }

    /// Jumps to the loop start when one is marked, otherwise to the beginning.
    pub fn rewind<V, O>(&self, video: &mut V, overlay: &mut O, loop_start: Option<f64>)
    where
        V: VideoElement + ?Sized,
        O: StatusOverlay + ?Sized,
    {
        match loop_start {
            Some(start) => {
                announce(overlay, "Rewinding Loop Start");
                video.set_current_time(start);
            }
            None => {
                announce(overlay, "Rewinding");
                video.set_current_time(0.0);
            }
        }
    }

    pub fn toggle_play_pause<V, O>(&self, video: &mut V, overlay: &mut O)
    where
        V: VideoElement + ?Sized,
        O: StatusOverlay + ?Sized,
    {
        if video.is_paused() {
            announce(overlay, "Play");
            video.play();
        } else {
            announce(overlay, "Pause");
            video.pause();
        }
    }

    pub fn cycle_rate<V, O>(&mut self, video: &mut V, overlay: &mut O)
    where
        V: VideoElement + ?Sized,
        O: StatusOverlay + ?Sized,
    {
        self.rate = self.rate.next();
        video.set_playback_rate(self.rate.multiplier());
        announce(overlay, &format!("Playback rate = {}%", self.rate.percent()));
    }

    pub fn reset_rate<V>(&mut self, video: &mut V)
    where
        V: VideoElement + ?Sized,
    {
        self.rate = PlaybackRate::default();
        video.set_playback_rate(self.rate.multiplier());
    }

    pub fn toggle_fullscreen<V>(&self, video: &mut V)
    where
        V: VideoElement + ?Sized,
    {
        if video.is_fullscreen() {
            video.exit_fullscreen();
        } else {
            video.enter_fullscreen();
        }
    }
}

/// Where a relative seek lands.
///
/// While both markers are set the result is held inside `[start, end]`. With only a start
/// marker a backwards seek that would cross it stops on it. Never below zero.
pub fn seek_target(current: f64, delta: f64, bounds: LoopBounds) -> f64 {
    let target = current + delta;
    let target = match (bounds.start, bounds.end) {
        (Some(start), Some(end)) if start <= end => target.clamp(start, end),
        (Some(start), _) if delta < 0.0 && current >= start && target < start => start,
        _ => target,
    };
    target.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeVideo, RecordingOverlay};

    const LOOP: LoopBounds = LoopBounds {
        start: Some(10.0),
        end: Some(20.0),
    };

    #[test]
    fn seek_without_loop_moves_freely_but_not_below_zero() {
        assert_eq!(seek_target(30.0, 5.0, LoopBounds::default()), 35.0);
        assert_eq!(seek_target(3.0, -5.0, LoopBounds::default()), 0.0);
    }

    #[test]
    fn seek_never_leaves_an_active_loop() {
        for current in [10.0, 12.5, 19.9, 20.0] {
            for delta in [-1000.0, -5.0, -0.1, 0.0, 0.1, 5.0, 1000.0] {
                let target = seek_target(current, delta, LOOP);
                assert!((10.0..=20.0).contains(&target), "{current} + {delta} -> {target}");
            }
        }
        assert_eq!(seek_target(18.0, 5.0, LOOP), 20.0);
        assert_eq!(seek_target(12.0, -5.0, LOOP), 10.0);
        assert_eq!(seek_target(12.0, 5.0, LOOP), 17.0);
    }

    #[test]
    fn start_marker_alone_only_stops_backward_crossing() {
        let bounds = LoopBounds {
            start: Some(10.0),
            end: None,
        };
        assert_eq!(seek_target(12.0, -5.0, bounds), 10.0);
        assert_eq!(seek_target(12.0, 50.0, bounds), 62.0);
        assert_eq!(seek_target(4.0, -2.0, bounds), 2.0);
    }

    #[test]
    fn seek_back_and_forward_announce_step() {
        let controller = PlaybackController::default();
        let mut video = FakeVideo::at(30.0);
        let mut overlay = RecordingOverlay::default();

        controller.seek_back(&mut video, &mut overlay, LoopBounds::default());
        assert_eq!(video.current_time(), 25.0);
        controller.seek_forward(&mut video, &mut overlay, LoopBounds::default());
        assert_eq!(video.current_time(), 30.0);

        assert_eq!(overlay.messages(), vec!["Rewinding 5sec", "Forwarding 5sec"]);
    }

    #[test]
    fn rewind_prefers_loop_start() {
        let controller = PlaybackController::default();
        let mut video = FakeVideo::at(42.0);
        let mut overlay = RecordingOverlay::default();

        controller.rewind(&mut video, &mut overlay, Some(0.0));
        assert_eq!(video.current_time(), 0.0);
        assert_eq!(overlay.messages(), vec!["Rewinding Loop Start"]);

        video.set_current_time(42.0);
        controller.rewind(&mut video, &mut overlay, None);
        assert_eq!(video.current_time(), 0.0);
        assert_eq!(overlay.messages().last().map(String::as_str), Some("Rewinding"));
    }

    #[test]
    fn toggle_play_pause_reports_resulting_action() {
        let controller = PlaybackController::default();
        let mut video = FakeVideo::at(0.0);
        let mut overlay = RecordingOverlay::default();

        controller.toggle_play_pause(&mut video, &mut overlay);
        assert!(!video.is_paused());
        controller.toggle_play_pause(&mut video, &mut overlay);
        assert!(video.is_paused());
        assert_eq!(overlay.messages(), vec!["Play", "Pause"]);
    }

    #[test]
    fn cycle_rate_applies_and_announces_percent() {
        let mut controller = PlaybackController::default();
        let mut video = FakeVideo::at(0.0);
        let mut overlay = RecordingOverlay::default();

        for _ in 0..5 {
            controller.cycle_rate(&mut video, &mut overlay);
        }
        assert_eq!(
            overlay.messages(),
            vec![
                "Playback rate = 75%",
                "Playback rate = 50%",
                "Playback rate = 35%",
                "Playback rate = 25%",
                "Playback rate = 100%",
            ]
        );
        assert_eq!(video.playback_rate(), 1.0);

        controller.cycle_rate(&mut video, &mut overlay);
        controller.reset_rate(&mut video);
        assert_eq!(controller.rate(), PlaybackRate::Normal);
        assert_eq!(video.playback_rate(), 1.0);
    }

    #[test]
    fn fullscreen_toggles() {
        let controller = PlaybackController::default();
        let mut video = FakeVideo::at(0.0);
        controller.toggle_fullscreen(&mut video);
        assert!(video.is_fullscreen());
        controller.toggle_fullscreen(&mut video);
        assert!(!video.is_fullscreen());
    }

    #[test]
    fn seek_step_is_clamped() {
        assert_eq!(PlaybackController::new(0.0).seek_step(), MIN_SEEK_STEP_SECS);
        assert_eq!(PlaybackController::new(600.0).seek_step(), MAX_SEEK_STEP_SECS);
    }
}
