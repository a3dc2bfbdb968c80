use std::sync::{Arc, Mutex, PoisonError};

use serde::Deserialize;
use serde_json::json;

use crate::player::{Rect, VideoElement, VideoLocator};

use super::script::{call, ScriptSink};

/// Video state as last reported by the page bridge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoSnapshot {
    /// Whether the page currently has a `<video>` element.
    pub present: bool,
    pub current_time: f64,
    pub paused: bool,
    pub fullscreen: bool,
    pub rect: Rect,
    /// Number of seeks issued from Rust that the page had applied when it took the snapshot.
    pub seek_generation: u64,
}

/// Shared copy of the page's video state.
///
/// The bridge pushes snapshots in; writes made from Rust land here immediately so reads
/// later in the same handler see them before the page reports back.
#[derive(Debug, Clone, Default)]
pub struct VideoMirror {
    inner: Arc<Mutex<VideoSnapshot>>,
}

impl VideoMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> VideoSnapshot {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the mirrored state. A snapshot taken before the page applied the latest
    /// seek is dropped and `false` is returned.
    pub fn update(&self, snapshot: VideoSnapshot) -> bool {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if snapshot.seek_generation < guard.seek_generation {
            return false;
        }
        *guard = snapshot;
        true
    }

    /// Forgets the previous page, including its seek count.
    pub fn clear(&self) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = VideoSnapshot::default();
    }

    fn modify<T>(&self, apply: impl FnOnce(&mut VideoSnapshot) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        apply(&mut *guard)
    }
}

/// [`VideoElement`] backed by the mirror for reads and page scripts for writes.
#[derive(Debug, Clone)]
pub struct WebviewVideo<S> {
    mirror: VideoMirror,
    sink: S,
}

impl<S: ScriptSink> VideoElement for WebviewVideo<S> {
    fn is_attached(&self) -> bool {
        self.mirror.snapshot().present
    }

    fn current_time(&self) -> f64 {
        self.mirror.snapshot().current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let generation = self.mirror.modify(|video| {
            video.current_time = seconds;
            video.seek_generation += 1;
            video.seek_generation
        });
        self.sink
            .run_script(&call("seek", &[json!(seconds), json!(generation)]));
    }

    fn is_paused(&self) -> bool {
        self.mirror.snapshot().paused
    }

    fn play(&mut self) {
        self.mirror.modify(|video| video.paused = false);
        self.sink.run_script(&call("play", &[]));
    }

    fn pause(&mut self) {
        self.mirror.modify(|video| video.paused = true);
        self.sink.run_script(&call("pause", &[]));
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.sink.run_script(&call("setRate", &[json!(rate)]));
    }

    fn is_fullscreen(&self) -> bool {
        self.mirror.snapshot().fullscreen
    }

    fn enter_fullscreen(&mut self) {
        self.mirror.modify(|video| video.fullscreen = true);
        self.sink.run_script(&call("enterFullscreen", &[]));
    }

    fn exit_fullscreen(&mut self) {
        self.mirror.modify(|video| video.fullscreen = false);
        self.sink.run_script(&call("exitFullscreen", &[]));
    }
}

/// Hands out a [`WebviewVideo`] once the bridge has reported a video on the page.
#[derive(Debug, Clone)]
pub struct WebviewLocator<S> {
    mirror: VideoMirror,
    sink: S,
}

impl<S> WebviewLocator<S> {
    pub fn new(mirror: VideoMirror, sink: S) -> Self {
        Self { mirror, sink }
    }
}

impl<S: ScriptSink + Clone> VideoLocator for WebviewLocator<S> {
    type Video = WebviewVideo<S>;

    fn locate(&mut self) -> Option<Self::Video> {
        self.mirror.snapshot().present.then(|| WebviewVideo {
            mirror: self.mirror.clone(),
            sink: self.sink.clone(),
        })
    }
}
