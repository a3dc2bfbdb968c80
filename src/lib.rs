mod activation;
mod bridge;
mod keys;
mod looper;
mod overlay;
mod player;
mod session;
mod settings;
mod utils;

#[cfg(test)]
mod test_support;

use activation::ActivationScope;
use bridge::{
    commands::{activate_page, report_video_state},
    VideoMirror, WebviewLocator, WindowSink, BRIDGE_SCRIPT,
};
use keys::Keymap;
use overlay::DomOverlay;
use player::PlaybackController;
use session::{commands::handle_key, SessionController};
use settings::AppSettings;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder, Wry};

const MAIN_WINDOW: &str = "main";

pub(crate) type PageSink = WindowSink<Wry>;
pub(crate) type PageSession = SessionController<WebviewLocator<PageSink>, DomOverlay<PageSink>>;

pub(crate) struct AppState {
    pub(crate) session: PageSession,
    pub(crate) mirror: VideoMirror,
    pub(crate) scope: ActivationScope,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var, info by default)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("OVLP starting up...");

    tauri::Builder::default()
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let settings = AppSettings::from_env()?;
                let keymap = Keymap::from_config(&settings.keymap);

                let mirror = VideoMirror::new();
                let sink = WindowSink::new(app.handle().clone(), MAIN_WINDOW);
                let session = SessionController::new(
                    WebviewLocator::new(mirror.clone(), sink.clone()),
                    DomOverlay::new(sink, mirror.clone(), settings.message_duration),
                    PlaybackController::new(settings.seek_step_secs),
                    keymap,
                );

                // State must be managed before the page can call back into us.
                app.manage(AppState {
                    session,
                    mirror,
                    scope: ActivationScope::default(),
                });

                log::info!("opening {}", settings.start_url);
                WebviewWindowBuilder::new(
                    app,
                    MAIN_WINDOW,
                    WebviewUrl::External(settings.start_url.clone()),
                )
                .title("OVLP")
                .inner_size(1280.0, 800.0)
                .initialization_script(BRIDGE_SCRIPT)
                .build()?;

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            activate_page,
            report_video_state,
            handle_key,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
