//! In-memory stand-ins for the page: a video element, its locator, the overlay and the
//! script sink. Each is a cheap handle over shared state so tests can keep a clone.

use std::sync::{Arc, Mutex};

use crate::bridge::ScriptSink;
use crate::overlay::StatusOverlay;
use crate::player::{VideoElement, VideoLocator};

#[derive(Debug, Clone)]
struct FakeVideoState {
    current_time: f64,
    paused: bool,
    rate: f64,
    fullscreen: bool,
    attached: bool,
}

#[derive(Debug, Clone)]
pub struct FakeVideo {
    state: Arc<Mutex<FakeVideoState>>,
}

impl FakeVideo {
    pub fn at(current_time: f64) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeVideoState {
                current_time,
                paused: true,
                rate: 1.0,
                fullscreen: false,
                attached: true,
            })),
        }
    }

    /// Moves the playhead as if the video had played or the user scrubbed.
    pub fn seek_to(&self, seconds: f64) {
        self.state.lock().unwrap().current_time = seconds;
    }

    pub fn playback_rate(&self) -> f64 {
        self.state.lock().unwrap().rate
    }

    pub fn detach(&self) {
        self.state.lock().unwrap().attached = false;
    }
}

impl VideoElement for FakeVideo {
    fn is_attached(&self) -> bool {
        self.state.lock().unwrap().attached
    }

    fn current_time(&self) -> f64 {
        self.state.lock().unwrap().current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.seek_to(seconds);
    }

    fn is_paused(&self) -> bool {
        self.state.lock().unwrap().paused
    }

    fn play(&mut self) {
        self.state.lock().unwrap().paused = false;
    }

    fn pause(&mut self) {
        self.state.lock().unwrap().paused = true;
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.state.lock().unwrap().rate = rate;
    }

    fn is_fullscreen(&self) -> bool {
        self.state.lock().unwrap().fullscreen
    }

    fn enter_fullscreen(&mut self) {
        self.state.lock().unwrap().fullscreen = true;
    }

    fn exit_fullscreen(&mut self) {
        self.state.lock().unwrap().fullscreen = false;
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeLocator {
    video: Arc<Mutex<Option<FakeVideo>>>,
}

impl FakeLocator {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(video: FakeVideo) -> Self {
        let locator = Self::default();
        locator.provide(video);
        locator
    }

    pub fn provide(&self, video: FakeVideo) {
        *self.video.lock().unwrap() = Some(video);
    }
}

impl VideoLocator for FakeLocator {
    type Video = FakeVideo;

    fn locate(&mut self) -> Option<FakeVideo> {
        self.video.lock().unwrap().clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    Message(String),
    Progress(f64),
    ProgressVisible(bool),
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingOverlay {
    events: Arc<Mutex<Vec<OverlayEvent>>>,
}

impl RecordingOverlay {
    pub fn events(&self) -> Vec<OverlayEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                OverlayEvent::Message(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_progress(&self) -> Option<f64> {
        self.events().into_iter().rev().find_map(|event| match event {
            OverlayEvent::Progress(percent) => Some(percent),
            _ => None,
        })
    }

    pub fn progress_visible(&self) -> Option<bool> {
        self.events().into_iter().rev().find_map(|event| match event {
            OverlayEvent::ProgressVisible(visible) => Some(visible),
            _ => None,
        })
    }

    fn push(&self, event: OverlayEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl StatusOverlay for RecordingOverlay {
    fn show_message(&mut self, text: &str) {
        self.push(OverlayEvent::Message(text.to_string()));
    }

    fn show_progress(&mut self, percent: f64) {
        self.push(OverlayEvent::Progress(percent));
    }

    fn set_progress_visible(&mut self, visible: bool) {
        self.push(OverlayEvent::ProgressVisible(visible));
    }

    fn reset(&mut self) {
        self.push(OverlayEvent::Reset);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    scripts: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }
}

impl ScriptSink for RecordingSink {
    fn run_script(&self, script: &str) {
        self.scripts.lock().unwrap().push(script.to_string());
    }
}
