use anyhow::{bail, Context, Result};
use tokio::time::Duration;
use url::Url;

use crate::activation::ActivationScope;
use crate::keys::KeymapConfig;
use crate::overlay::MESSAGE_DURATION;
use crate::player::DEFAULT_SEEK_STEP_SECS;

pub const DEFAULT_START_URL: &str = "https://www.youtube.com/";

const START_URL_VAR: &str = "OVLP_START_URL";
const KEYMAP_VAR: &str = "OVLP_KEYMAP";
const SEEK_STEP_VAR: &str = "OVLP_SEEK_STEP";

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub start_url: Url,
    pub keymap: KeymapConfig,
    pub seek_step_secs: f64,
    pub message_duration: Duration,
}

impl AppSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let start_url = lookup(START_URL_VAR).unwrap_or_else(|| DEFAULT_START_URL.into());
        let start_url = Url::parse(&start_url)
            .with_context(|| format!("{START_URL_VAR} is not a valid URL: {start_url}"))?;
        if !ActivationScope::default().allows(&start_url) {
            bail!("{START_URL_VAR} must point at a supported video site, got {start_url}");
        }

        let keymap = match lookup(KEYMAP_VAR) {
            Some(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse {KEYMAP_VAR}"))?,
            None => KeymapConfig::default(),
        };

        let seek_step_secs = match lookup(SEEK_STEP_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{SEEK_STEP_VAR} must be a number of seconds, got {raw:?}"))?,
            None => DEFAULT_SEEK_STEP_SECS,
        };
        if !seek_step_secs.is_finite() {
            bail!("{SEEK_STEP_VAR} must be finite");
        }

        Ok(Self {
            start_url,
            keymap,
            seek_step_secs,
            message_duration: MESSAGE_DURATION,
        })
    }
}
