/// Playback-rate selection stepped through by the Speed action.
///
/// Rates are kept as whole percentages so the cycle never depends on float equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackRate {
    #[default]
    Normal,
    ThreeQuarters,
    Half,
    Slow,
    Quarter,
}

impl PlaybackRate {
    pub const CYCLE: [PlaybackRate; 5] = [
        PlaybackRate::Normal,
        PlaybackRate::ThreeQuarters,
        PlaybackRate::Half,
        PlaybackRate::Slow,
        PlaybackRate::Quarter,
    ];

    pub fn percent(self) -> u32 {
        match self {
            PlaybackRate::Normal => 100,
            PlaybackRate::ThreeQuarters => 75,
            PlaybackRate::Half => 50,
            PlaybackRate::Slow => 35,
            PlaybackRate::Quarter => 25,
        }
    }

    pub fn multiplier(self) -> f64 {
        f64::from(self.percent()) / 100.0
    }

    /// The rate after this one, wrapping from the slowest back to normal.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::CYCLE
            .iter()
            .position(|&rate| rate == self)
            .unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }
}
