use crate::player::Rect;

const LOG_WIDTH: f64 = 350.0;
const LOG_HEIGHT: f64 = 35.0;
const PROGRESS_WIDTH: f64 = 100.0;
const PROGRESS_HEIGHT: f64 = 75.0;
const PROGRESS_INSET: f64 = 5.0;

/// Absolute placement of one overlay panel, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PanelLayout {
    /// Message strip centred on the video, one strip height above its bottom edge.
    pub fn log_panel(video: Rect) -> Self {
        Self {
            left: video.left + (video.width - LOG_WIDTH) / 2.0,
            top: video.bottom() - 2.0 * LOG_HEIGHT,
            width: LOG_WIDTH,
            height: LOG_HEIGHT,
        }
    }

    /// Progress box tucked into the video's top-left corner.
    pub fn progress_panel(video: Rect) -> Self {
        Self {
            left: video.left + PROGRESS_INSET,
            top: video.top + PROGRESS_INSET,
            width: PROGRESS_WIDTH,
            height: PROGRESS_HEIGHT,
        }
    }

    fn font_size(&self) -> f64 {
        self.height * 0.5
    }

    fn box_css(&self) -> String {
        format!(
            "position: absolute; top: {top}px; left: {left}px; width: {width}px; height: {height}px; \
             z-index: 2147483647; border-radius: 5px; margin: 0; padding: 0; \
             background-color: #fff; font-weight: bold; font-size: {font}px; color: #333; \
             text-align: center; line-height: {height}px; opacity: 0.8; display: none;",
            top = self.top,
            left = self.left,
            width = self.width,
            height = self.height,
            font = self.font_size(),
        )
    }

    pub fn log_css(&self) -> String {
        self.box_css()
    }

    pub fn progress_css(&self) -> String {
        format!(
            "{} background-repeat: no-repeat; \
             background-image: linear-gradient(90deg, rgba(51, 153, 102, 0.5) 0%, rgba(51, 153, 102, 0.5) 100%); \
             background-size: 0%; text-shadow: 0 0 8px #fff;",
            self.box_css()
        )
    }
}
