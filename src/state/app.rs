use std::fmt;

use crate::model::{Guest, Party, PartyId, Rsvp};

/// Everything the page shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Party collection as last fetched
    pub parties: Vec<Party>,
    /// Snapshot of the selected party; not refreshed when `parties` is
    pub selected: Option<Party>,
    /// RSVP collection as last fetched
    pub rsvps: Vec<Rsvp>,
    /// Guest collection as last fetched
    pub guests: Vec<Guest>,
    /// Message for the error banner
    pub error: Option<String>,
}

/// State transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    PartiesLoaded(Vec<Party>),
    PartySelected(Party),
    RsvpsLoaded(Vec<Rsvp>),
    GuestsLoaded(Vec<Guest>),
    SelectionCleared,
    RequestFailed { operation: Operation, message: String },
    ErrorDismissed,
}

/// User-facing name of a gateway operation, for the error banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadParties,
    LoadParty,
    LoadRsvps,
    LoadGuests,
    CreateParty,
    RemoveParty,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::LoadParties => "load parties",
            Operation::LoadParty => "load party",
            Operation::LoadRsvps => "load RSVPs",
            Operation::LoadGuests => "load guests",
            Operation::CreateParty => "create party",
            Operation::RemoveParty => "remove party",
        };
        f.write_str(label)
    }
}

impl AppState {
    /// Apply one transition
    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::PartiesLoaded(parties) => self.parties = parties,
            Msg::PartySelected(party) => self.selected = Some(party),
            Msg::RsvpsLoaded(rsvps) => self.rsvps = rsvps,
            Msg::GuestsLoaded(guests) => self.guests = guests,
            Msg::SelectionCleared => self.selected = None,
            Msg::RequestFailed { operation, message } => {
                self.error = Some(format!("Could not {}: {}", operation, message));
            }
            Msg::ErrorDismissed => self.error = None,
        }
    }

    /// Whether `id` is the selected party
    pub fn is_selected(&self, id: PartyId) -> bool {
        self.selected.as_ref().is_some_and(|p| p.id == id)
    }

    /// Guests with an RSVP for the selected party
    pub fn selected_guests(&self) -> Vec<&Guest> {
        match &self.selected {
            Some(party) => guests_attending(&self.guests, &self.rsvps, party.id),
            None => Vec::new(),
        }
    }
}

/// Guests holding at least one RSVP for `party_id`, in guest-collection
/// order. A guest is listed once no matter how many matching RSVPs exist.
pub fn guests_attending<'a>(guests: &'a [Guest], rsvps: &[Rsvp], party_id: PartyId) -> Vec<&'a Guest> {
    guests
        .iter()
        .filter(|guest| {
            rsvps
                .iter()
                .any(|rsvp| rsvp.guest_id == guest.id && rsvp.event_id == party_id)
        })
        .collect()
}
