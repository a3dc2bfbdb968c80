use std::sync::Arc;

use tokio::{sync::Mutex, time::Duration};
use url::Url;

use crate::activation::ActivationScope;
use crate::keys::{Action, BindingDescriptor, KeyEvent, Keymap};
use crate::looper::{BoundaryPoll, BOUNDARY_POLL_INTERVAL};
use crate::overlay::StatusOverlay;
use crate::player::{PlaybackController, VideoLocator};

use super::state::{Dispatch, PlaybackSession};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub loop_state: crate::looper::LoopState,
    pub rate_percent: u32,
    pub polling: bool,
    pub has_video: bool,
}

/// Entry point for keyboard input. Serialises access to the session between the key
/// handler and the boundary poll.
pub struct SessionController<L: VideoLocator, O> {
    session: Arc<Mutex<PlaybackSession<L, O>>>,
    keymap: Arc<Keymap>,
    poll_interval: Duration,
}

impl<L: VideoLocator, O> Clone for SessionController<L, O> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            keymap: self.keymap.clone(),
            poll_interval: self.poll_interval,
        }
    }
}

impl<L, O> SessionController<L, O>
where
    L: VideoLocator + Send + 'static,
    L::Video: Send,
    O: StatusOverlay + Send + 'static,
{
    pub fn new(locator: L, overlay: O, playback: PlaybackController, keymap: Keymap) -> Self {
        Self {
            session: Arc::new(Mutex::new(PlaybackSession::new(locator, overlay, playback))),
            keymap: Arc::new(keymap),
            poll_interval: BOUNDARY_POLL_INTERVAL,
        }
    }

    /// Starts a fresh session for a newly loaded document, whether or not the looper attaches
    /// to it. Returns the bindings the page should intercept, or `None` when `url` is missing
    /// or outside `scope`.
    pub async fn activate(
        &self,
        scope: &ActivationScope,
        url: Option<&Url>,
    ) -> Option<Vec<BindingDescriptor>> {
        self.begin_page().await;
        match url {
            Some(url) if scope.allows(url) => {
                log_info!("activating on {url}");
                Some(self.keymap.descriptors())
            }
            Some(url) => {
                log_info!("not activating on {url}");
                None
            }
            None => None,
        }
    }

    /// Resolves a keyup to its action and runs it. `None` means the event is not ours and
    /// should pass through to the page.
    pub async fn handle_key(&self, event: &KeyEvent) -> Option<Action> {
        let action = self.keymap.resolve(event)?;
        self.perform(action).await;
        Some(action)
    }

    pub async fn perform(&self, action: Action) -> Dispatch {
        let mut guard = self.session.lock().await;
        let outcome = guard.dispatch(action);
        if outcome == Dispatch::StartPolling {
            log_debug!("starting boundary poll every {:?}", self.poll_interval);
            guard.attach_poll(BoundaryPoll::spawn(self.session.clone(), self.poll_interval));
        }
        outcome
    }

    /// Drops all state tied to the previous page.
    pub async fn begin_page(&self) {
        let mut guard = self.session.lock().await;
        log_debug!(
            "page reset: loop {:?}, rate {}%, polling {}, video {}",
            guard.loop_state(),
            guard.rate().percent(),
            guard.is_polling(),
            guard.has_video()
        );
        guard.reset_page();
    }

    #[cfg(test)]
    pub async fn snapshot(&self) -> SessionSnapshot {
        let guard = self.session.lock().await;
        SessionSnapshot {
            loop_state: guard.loop_state(),
            rate_percent: guard.rate().percent(),
            polling: guard.is_polling(),
            has_video: guard.has_video(),
        }
    }
}
