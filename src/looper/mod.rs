pub mod poll;
pub mod state;

pub use poll::{BoundaryCheck, BoundaryPoll, BOUNDARY_POLL_INTERVAL};
pub use state::{LoopBounds, LoopState, LoopTransition};
