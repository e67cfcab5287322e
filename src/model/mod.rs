//! Data Model
//!
//! Records exchanged with the remote event API and the helpers that
//! turn form input into a party draft.
//!
//! ## Records
//!
//! - [`Party`]: an event (`/events` collection)
//! - [`Guest`]: a person that may attend parties
//! - [`Rsvp`]: join record linking a guest to a party
//! - [`Envelope`]: the `{ "data": ... }` wrapper around every reply

mod datetime;
mod form;
mod types;

pub use datetime::{calendar_date, combine_date_time, combine_date_time_in};
pub use form::{DraftError, NewPartyForm};
pub use types::{ApiErrorBody, Envelope, ErrorEnvelope, Guest, GuestId, Party, PartyDraft, PartyId, Rsvp, RsvpId};
