use tauri::State;

use crate::{
    bridge::VideoSnapshot,
    keys::{Action, KeyEvent},
    AppState,
};

/// Keyup forwarded by the page. The bridge sends the video state it saw at that moment so
/// the action works on a fresh playhead.
#[tauri::command]
pub async fn handle_key(
    state: State<'_, AppState>,
    event: KeyEvent,
    snapshot: Option<VideoSnapshot>,
) -> Result<Option<Action>, String> {
    if let Some(snapshot) = snapshot {
        state.mirror.update(snapshot);
    }
    Ok(state.session.handle_key(&event).await)
}
