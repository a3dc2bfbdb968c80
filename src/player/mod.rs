pub mod controller;
pub mod rate;
pub mod video;

pub use controller::{PlaybackController, DEFAULT_SEEK_STEP_SECS};
pub use rate::PlaybackRate;
pub use video::{Rect, VideoElement, VideoLocator};
