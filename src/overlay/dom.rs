use serde_json::json;
use tokio::{task::JoinHandle, time::Duration};

use crate::bridge::{call, ScriptSink, VideoMirror};

use super::{layout::PanelLayout, StatusOverlay};

/// How long a status message stays on screen after the last call.
pub const MESSAGE_DURATION: Duration = Duration::from_millis(850);

const LOG_PANEL: &str = "ovlp_log";
const PROGRESS_PANEL: &str = "ovlp_progress";

/// Overlay drawn as two absolutely positioned `<div>`s through the page bridge.
///
/// Panels are created on first use, placed against the video's bounding box at that moment.
pub struct DomOverlay<S> {
    sink: S,
    mirror: VideoMirror,
    message_duration: Duration,
    log_created: bool,
    progress_created: bool,
    hide_task: Option<JoinHandle<()>>,
}

impl<S> DomOverlay<S> {
    pub fn new(sink: S, mirror: VideoMirror, message_duration: Duration) -> Self {
        Self {
            sink,
            mirror,
            message_duration,
            log_created: false,
            progress_created: false,
            hide_task: None,
        }
    }

    fn cancel_hide(&mut self) {
        if let Some(task) = self.hide_task.take() {
            task.abort();
        }
    }
}

impl<S: ScriptSink> DomOverlay<S> {
    fn ensure_log_panel(&mut self) {
        if self.log_created {
            return;
        }
        let css = PanelLayout::log_panel(self.mirror.snapshot().rect).log_css();
        self.sink
            .run_script(&call("createPanel", &[json!(LOG_PANEL), json!(css)]));
        self.log_created = true;
    }

    fn ensure_progress_panel(&mut self) {
        if self.progress_created {
            return;
        }
        let css = PanelLayout::progress_panel(self.mirror.snapshot().rect).progress_css();
        self.sink
            .run_script(&call("createPanel", &[json!(PROGRESS_PANEL), json!(css)]));
        self.progress_created = true;
    }
}

impl<S> StatusOverlay for DomOverlay<S>
where
    S: ScriptSink + Clone + Send + 'static,
{
    fn show_message(&mut self, text: &str) {
        self.ensure_log_panel();
        self.sink
            .run_script(&call("setText", &[json!(LOG_PANEL), json!(text)]));
        self.sink
            .run_script(&call("setVisible", &[json!(LOG_PANEL), json!(true)]));

        self.cancel_hide();
        let sink = self.sink.clone();
        let delay = self.message_duration;
        self.hide_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sink.run_script(&call("setText", &[json!(LOG_PANEL), json!("")]));
            sink.run_script(&call("setVisible", &[json!(LOG_PANEL), json!(false)]));
        }));
    }

    fn show_progress(&mut self, percent: f64) {
        self.ensure_progress_panel();
        let label = format!("{}%", percent.floor());
        self.sink
            .run_script(&call("setText", &[json!(PROGRESS_PANEL), json!(label)]));
        self.sink
            .run_script(&call("setFill", &[json!(PROGRESS_PANEL), json!(percent)]));
    }

    fn set_progress_visible(&mut self, visible: bool) {
        if !visible && !self.progress_created {
            return;
        }
        self.ensure_progress_panel();
        self.sink
            .run_script(&call("setVisible", &[json!(PROGRESS_PANEL), json!(visible)]));
    }

    fn reset(&mut self) {
        self.cancel_hide();
        self.log_created = false;
        self.progress_created = false;
    }
}

impl<S> Drop for DomOverlay<S> {
    fn drop(&mut self) {
        self.cancel_hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::VideoSnapshot;
    use crate::player::Rect;
    use crate::test_support::RecordingSink;

    fn overlay() -> (DomOverlay<RecordingSink>, RecordingSink) {
        let mirror = VideoMirror::new();
        mirror.update(VideoSnapshot {
            present: true,
            rect: Rect {
                left: 0.0,
                top: 0.0,
                width: 640.0,
                height: 360.0,
            },
            ..VideoSnapshot::default()
        });
        let sink = RecordingSink::default();
        (DomOverlay::new(sink.clone(), mirror, MESSAGE_DURATION), sink)
    }

    fn hides(sink: &RecordingSink) -> usize {
        sink.scripts()
            .iter()
            .filter(|script| script.contains(r#"setVisible("ovlp_log", false)"#))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn panel_is_created_once_and_hidden_after_duration() {
        let (mut overlay, sink) = overlay();
        overlay.show_message("Play");
        overlay.show_message("Pause");

        let creates = sink
            .scripts()
            .iter()
            .filter(|script| script.contains("createPanel"))
            .count();
        assert_eq!(creates, 1);
        assert!(sink.scripts()[0].contains("left: 145px"));

        tokio::time::sleep(Duration::from_millis(800)).await;
        assert_eq!(hides(&sink), 0);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(hides(&sink), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn each_message_restarts_the_hide_timer() {
        let (mut overlay, sink) = overlay();
        overlay.show_message("Set loop start");
        tokio::time::sleep(Duration::from_millis(500)).await;
        overlay.show_message("Set loop end");

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(hides(&sink), 0);
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(hides(&sink), 1);
    }

    #[test]
    fn progress_label_is_floored_and_fill_exact() {
        let (mut overlay, sink) = overlay();
        overlay.set_progress_visible(true);
        overlay.show_progress(42.7);

        let scripts = sink.scripts();
        assert!(scripts[0].contains(r#"createPanel("ovlp_progress""#));
        assert!(scripts.contains(&r#"window.__ovlp && window.__ovlp.setText("ovlp_progress", "42%");"#.to_string()));
        assert!(scripts.contains(&"window.__ovlp && window.__ovlp.setFill(\"ovlp_progress\", 42.7);".to_string()));
    }

    #[test]
    fn hiding_an_uncreated_progress_panel_is_silent() {
        let (mut overlay, sink) = overlay();
        overlay.set_progress_visible(false);
        assert!(sink.scripts().is_empty());
    }
}
