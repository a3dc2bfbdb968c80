use serde::Deserialize;

/// Bounding box of the video element in page pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The page's `<video>` element as the controllers see it.
pub trait VideoElement {
    /// False once the element has left the page and a fresh lookup is needed.
    fn is_attached(&self) -> bool {
        true
    }
    /// Playback position in seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    fn is_paused(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);
    fn set_playback_rate(&mut self, rate: f64);
    fn is_fullscreen(&self) -> bool;
    fn enter_fullscreen(&mut self);
    fn exit_fullscreen(&mut self);
}

/// Finds the first video element on the current page, if there is one yet.
pub trait VideoLocator {
    type Video: VideoElement;

    fn locate(&mut self) -> Option<Self::Video>;
}
