use crate::keys::Action;
use crate::looper::{BoundaryCheck, BoundaryPoll, LoopState, LoopTransition};
use crate::overlay::{announce, StatusOverlay};
use crate::player::{PlaybackController, PlaybackRate, VideoElement, VideoLocator};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// Outcome of dispatching one action against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// No video on the page yet; nothing happened.
    NoVideo,
    Applied,
    /// A loop was just closed and needs its boundary poll.
    StartPolling,
}

/// Everything the handlers touch for one page: the video, the overlay, the loop markers,
/// the rate selection and the boundary poll while a loop runs.
pub struct PlaybackSession<L: VideoLocator, O> {
    locator: L,
    video: Option<L::Video>,
    overlay: O,
    playback: PlaybackController,
    markers: LoopState,
    poll: Option<BoundaryPoll>,
}

impl<L, O> PlaybackSession<L, O>
where
    L: VideoLocator,
    O: StatusOverlay,
{
    pub fn new(locator: L, overlay: O, playback: PlaybackController) -> Self {
        Self {
            locator,
            video: None,
            overlay,
            playback,
            markers: LoopState::Idle,
            poll: None,
        }
    }

    pub fn loop_state(&self) -> LoopState {
        self.markers
    }

    pub fn rate(&self) -> PlaybackRate {
        self.playback.rate()
    }

    pub fn is_polling(&self) -> bool {
        self.poll.as_ref().is_some_and(|poll| !poll.is_finished())
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    pub fn dispatch(&mut self, action: Action) -> Dispatch {
        if !self.video.as_ref().is_some_and(VideoElement::is_attached) {
            self.video = self.locator.locate();
        }
        let Some(video) = self.video.as_mut() else {
            log_debug!("{} ignored: no video element on the page", action.as_str());
            return Dispatch::NoVideo;
        };

        let overlay = &mut self.overlay;
        match action {
            Action::Speed => self.playback.cycle_rate(video, overlay),
            Action::Back => self.playback.seek_back(video, overlay, self.markers.bounds()),
            Action::Forward => self
                .playback
                .seek_forward(video, overlay, self.markers.bounds()),
            Action::PlayPause => self.playback.toggle_play_pause(video, overlay),
            Action::Rewind => self.playback.rewind(video, overlay, self.markers.start()),
            Action::Fullscreen => self.playback.toggle_fullscreen(video),
            Action::Loop => return self.toggle_loop(),
            Action::Reset => self.clear_settings(),
        }
        Dispatch::Applied
    }

    fn toggle_loop(&mut self) -> Dispatch {
        let Some(video) = self.video.as_ref() else {
            return Dispatch::NoVideo;
        };
        let now = video.current_time();

        match self.markers.advance(now) {
            LoopTransition::MarkedStart { start } => {
                log_info!("loop start marked at {start:.2}s");
                announce(&mut self.overlay, "Set loop start");
                Dispatch::Applied
            }
            LoopTransition::MarkedEnd { start, end } => {
                log_info!("looping {start:.2}s..{end:.2}s");
                announce(&mut self.overlay, "Set loop end");
                self.overlay.set_progress_visible(true);
                if let Some(percent) = self.markers.progress(now) {
                    self.overlay.show_progress(percent);
                }
                Dispatch::StartPolling
            }
            LoopTransition::TooShort => {
                announce(&mut self.overlay, "Loop too short");
                Dispatch::Applied
            }
            LoopTransition::Cleared => {
                announce(&mut self.overlay, "Loop cleared");
                self.overlay.set_progress_visible(false);
                self.stop_poll();
                Dispatch::Applied
            }
        }
    }

    fn clear_settings(&mut self) {
        announce(&mut self.overlay, "Settings cleared");
        self.overlay.set_progress_visible(false);
        self.markers.clear();
        self.stop_poll();
        if let Some(video) = self.video.as_mut() {
            self.playback.reset_rate(video);
        }
    }

    /// Takes ownership of the boundary poll started for the current loop.
    pub fn attach_poll(&mut self, poll: BoundaryPoll) {
        if let Some(previous) = self.poll.replace(poll) {
            previous.stop();
        }
    }

    fn stop_poll(&mut self) {
        if let Some(poll) = self.poll.take() {
            poll.stop();
        }
    }

    /// Starts over for a newly loaded page: forgets the video, markers, rate and panels.
    pub fn reset_page(&mut self) {
        self.stop_poll();
        self.markers = LoopState::Idle;
        self.video = None;
        self.playback = PlaybackController::new(self.playback.seek_step());
        self.overlay.reset();
    }
}

impl<L, O> BoundaryCheck for PlaybackSession<L, O>
where
    L: VideoLocator,
    O: StatusOverlay,
{
    fn check_boundary(&mut self) -> bool {
        if !self.markers.is_looping() {
            return false;
        }
        let Some(video) = self.video.as_mut() else {
            return false;
        };

        let mut now = video.current_time();
        if let Some(start) = self.markers.wrap_target(now) {
            video.set_current_time(start);
            now = start;
        }
        if let Some(percent) = self.markers.progress(now) {
            self.overlay.show_progress(percent);
        }
        true
    }
}
