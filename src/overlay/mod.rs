//! On-screen status: a transient message panel and a loop progress panel.

pub mod dom;
pub mod layout;

pub use dom::{DomOverlay, MESSAGE_DURATION};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Renders status for the user.
pub trait StatusOverlay {
    /// Shows `text` in the message panel; the most recent message wins.
    fn show_message(&mut self, text: &str);
    /// Updates the progress panel with a percentage in `0..=100`.
    fn show_progress(&mut self, percent: f64);
    fn set_progress_visible(&mut self, visible: bool);
    /// Forgets panels created for a previous page.
    fn reset(&mut self) {}
}

/// Logs a status message and shows it on the overlay.
pub fn announce<O: StatusOverlay + ?Sized>(overlay: &mut O, text: &str) {
    log_info!("Online Video Looper Pedal: {text}");
    overlay.show_message(text);
}
