//! Application State
//!
//! The four data slots the page is rendered from, plus the error banner,
//! and the single update function that mutates them.
//!
//! State only changes through [`AppState::update`]. Every message replaces
//! a whole slot; nothing is patched in place, so a failed request can
//! never leave a collection half-updated.

mod app;

pub use app::{guests_attending, AppState, Msg, Operation};
