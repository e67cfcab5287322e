//! Planner
//!
//! Drives the client: calls the gateway, feeds replies into
//! [`AppState::update`](crate::state::AppState::update), and re-renders the
//! page after every state change.
//!
//! ## Data Flow
//!
//! 1. A user interaction (or bootstrap) calls a planner operation
//! 2. The planner awaits the gateway; no lock is held meanwhile
//! 3. The reply becomes a [`Msg`](crate::state::Msg) applied to the state
//! 4. The page is rebuilt from the new state
//!
//! Failures are logged, shown in the error banner, and returned to the
//! caller. They never modify the party, guest or RSVP collections.

mod cycle;
mod error;

pub use cycle::Planner;
pub use error::{PlannerError, PlannerResult};
