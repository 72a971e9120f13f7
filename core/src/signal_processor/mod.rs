//! Classification of raw client events into issue signals.
//!
//! Chat and animation events arrive independently and mostly carry nothing of
//! interest. This module filters them down to the handful of [`IssueSignal`]s
//! the issue tracker reacts to.

mod classify;
mod handler;
mod signal;

pub use classify::{classify_animation, classify_chat, strip_markup};
pub use handler::SignalHandler;
pub use signal::{EpisodeEndCue, IssueSignal, SensedCue};
