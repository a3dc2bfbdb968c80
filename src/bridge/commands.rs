use tauri::State;
use url::Url;

use crate::{keys::BindingDescriptor, AppState};

use super::VideoSnapshot;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_warn};

/// Called by the bridge once per loaded document. Every call starts a fresh session.
/// Returns the bindings the page should intercept, or `None` when the page is outside the
/// activation scope.
#[tauri::command]
pub async fn activate_page(
    state: State<'_, AppState>,
    href: String,
) -> Result<Option<Vec<BindingDescriptor>>, String> {
    state.mirror.clear();
    let url = match Url::parse(&href) {
        Ok(url) => Some(url),
        Err(err) => {
            log_warn!("cannot parse page url {href:?}: {err}");
            None
        }
    };
    Ok(state.session.activate(&state.scope, url.as_ref()).await)
}

#[tauri::command]
pub fn report_video_state(state: State<'_, AppState>, snapshot: VideoSnapshot) {
    if !state.mirror.update(snapshot) {
        log_debug!("dropped video report predating the last seek");
    }
}
