//! Glue between the Rust session and the script injected into the video page.

pub mod commands;
pub mod script;
pub mod video;

pub use script::{call, ScriptSink};
pub use video::{VideoMirror, VideoSnapshot, WebviewLocator};

use tauri::{AppHandle, Manager, Runtime};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_warn};

/// Script installed into every page the window loads.
pub const BRIDGE_SCRIPT: &str = include_str!("bridge.js");

/// Runs scripts in a webview window looked up by label at call time, so it can be created
/// before the window exists.
pub struct WindowSink<R: Runtime> {
    app: AppHandle<R>,
    label: &'static str,
}

impl<R: Runtime> WindowSink<R> {
    pub fn new(app: AppHandle<R>, label: &'static str) -> Self {
        Self { app, label }
    }
}

impl<R: Runtime> Clone for WindowSink<R> {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
            label: self.label,
        }
    }
}

impl<R: Runtime> ScriptSink for WindowSink<R> {
    fn run_script(&self, script: &str) {
        let Some(window) = self.app.get_webview_window(self.label) else {
            log_debug!("window {} is gone; dropping script", self.label);
            return;
        };
        if let Err(err) = window.eval(script) {
            log_warn!("failed to evaluate bridge script: {err}");
        }
    }
}
