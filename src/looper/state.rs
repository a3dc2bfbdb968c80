/// Shortest loop that can be marked, in seconds. Anything shorter is treated as an
/// accidental double press.
pub const MIN_LOOP_SECS: f64 = 0.1;

/// A-B loop markers and the phase they put playback in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    StartSet {
        start: f64,
    },
    Looping {
        start: f64,
        end: f64,
    },
}

/// What a Loop action did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopTransition {
    MarkedStart { start: f64 },
    MarkedEnd { start: f64, end: f64 },
    /// The end mark was too close to the start; the start marker is kept.
    TooShort,
    Cleared,
}

/// Seek limits derived from the current markers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoopBounds {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl LoopState {
    pub fn is_looping(&self) -> bool {
        matches!(self, LoopState::Looping { .. })
    }

    pub fn start(&self) -> Option<f64> {
        match *self {
            LoopState::Idle => None,
            LoopState::StartSet { start } | LoopState::Looping { start, .. } => Some(start),
        }
    }

    pub fn bounds(&self) -> LoopBounds {
        match *self {
            LoopState::Idle => LoopBounds::default(),
            LoopState::StartSet { start } => LoopBounds {
                start: Some(start),
                end: None,
            },
            LoopState::Looping { start, end } => LoopBounds {
                start: Some(start),
                end: Some(end),
            },
        }
    }

    /// Applies one Loop action with playback at `now`.
    ///
    /// Idle marks the start, StartSet marks the end, Looping clears both. An end mark before
    /// the start swaps the two so `start <= end` always holds while looping.
    pub fn advance(&mut self, now: f64) -> LoopTransition {
        match *self {
            LoopState::Idle => {
                *self = LoopState::StartSet { start: now };
                LoopTransition::MarkedStart { start: now }
            }
            LoopState::StartSet { start } => {
                let (start, end) = if now < start { (now, start) } else { (start, now) };
                if end - start < MIN_LOOP_SECS {
                    return LoopTransition::TooShort;
                }
                *self = LoopState::Looping { start, end };
                LoopTransition::MarkedEnd { start, end }
            }
            LoopState::Looping { .. } => {
                *self = LoopState::Idle;
                LoopTransition::Cleared
            }
        }
    }

    /// Drops both markers. Returns true if a loop was running.
    pub fn clear(&mut self) -> bool {
        let was_looping = self.is_looping();
        *self = LoopState::Idle;
        was_looping
    }

    /// Seek target for the boundary check: the loop start once playback has passed the end.
    pub fn wrap_target(&self, now: f64) -> Option<f64> {
        match *self {
            LoopState::Looping { start, end } if now > end => Some(start),
            _ => None,
        }
    }

    /// Position inside the loop as a percentage, or `None` when not looping.
    pub fn progress(&self, now: f64) -> Option<f64> {
        match *self {
            LoopState::Looping { start, end } => Some(loop_progress(start, end, now)),
            _ => None,
        }
    }
}

/// `100 * (now - start) / (end - start)`, clamped to `0..=100`. An empty span reports 0.
pub fn loop_progress(start: f64, end: f64, now: f64) -> f64 {
    let span = end - start;
    if span <= 0.0 {
        return 0.0;
    }
    (100.0 * (now - start) / span).clamp(0.0, 100.0)
}
