//! In-memory gateway for tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use super::{GatewayError, GatewayResult, PartyGateway};
use crate::model::{Guest, Party, PartyDraft, PartyId, Rsvp};

/// Gateway operations, used to inject failures and record calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListParties,
    GetParty,
    ListRsvps,
    ListGuests,
    CreateParty,
    DeleteParty,
}

#[derive(Default)]
pub struct FakeGateway {
    parties: Mutex<Vec<Party>>,
    guests: Mutex<Vec<Guest>>,
    rsvps: Mutex<Vec<Rsvp>>,
    failing: Mutex<HashSet<Op>>,
    calls: Mutex<Vec<Op>>,
    created: Mutex<Vec<PartyDraft>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parties(self, parties: Vec<Party>) -> Self {
        *self.parties.lock().unwrap() = parties;
        self
    }

    pub fn with_guests(self, guests: Vec<Guest>) -> Self {
        *self.guests.lock().unwrap() = guests;
        self
    }

    pub fn with_rsvps(self, rsvps: Vec<Rsvp>) -> Self {
        *self.rsvps.lock().unwrap() = rsvps;
        self
    }

    /// Make every call to `op` fail until [`FakeGateway::recover`]
    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    pub fn calls(&self) -> Vec<Op> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<PartyDraft> {
        self.created.lock().unwrap().clone()
    }

    pub fn remote_parties(&self) -> Vec<Party> {
        self.parties.lock().unwrap().clone()
    }

    fn record(&self, op: Op) -> GatewayResult<()> {
        self.calls.lock().unwrap().push(op);
        if self.failing.lock().unwrap().contains(&op) {
            Err(GatewayError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PartyGateway for FakeGateway {
    async fn list_parties(&self) -> GatewayResult<Vec<Party>> {
        self.record(Op::ListParties)?;
        Ok(self.parties.lock().unwrap().clone())
    }

    async fn get_party(&self, id: PartyId) -> GatewayResult<Party> {
        self.record(Op::GetParty)?;
        self.parties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::Status {
                status: 404,
                message: format!("Event {} not found", id),
            })
    }

    async fn list_rsvps(&self) -> GatewayResult<Vec<Rsvp>> {
        self.record(Op::ListRsvps)?;
        Ok(self.rsvps.lock().unwrap().clone())
    }

    async fn list_guests(&self) -> GatewayResult<Vec<Guest>> {
        self.record(Op::ListGuests)?;
        Ok(self.guests.lock().unwrap().clone())
    }

    async fn create_party(&self, draft: &PartyDraft) -> GatewayResult<Party> {
        self.record(Op::CreateParty)?;
        self.created.lock().unwrap().push(draft.clone());

        let mut parties = self.parties.lock().unwrap();
        let id = parties.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let party = Party {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            date: draft.date.clone(),
            location: draft.location.clone(),
        };
        parties.push(party.clone());
        Ok(party)
    }

    async fn delete_party(&self, id: PartyId) -> GatewayResult<()> {
        self.record(Op::DeleteParty)?;
        self.parties.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}
