//! The render-cycle controller.
//!
//! [`Planner`] serialises state changes behind one lock and keeps the page
//! rendered from the latest state.

use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{PlannerError, PlannerResult};
use crate::gateway::PartyGateway;
use crate::model::{DraftError, NewPartyForm, Party, PartyDraft, PartyId};
use crate::state::{AppState, Msg, Operation};
use crate::view::{self, html, Node};

/// Owns the application state and the last rendered page
pub struct Planner {
    gateway: Arc<dyn PartyGateway>,
    inner: RwLock<Rendered>,
}

struct Rendered {
    state: AppState,
    page: Node,
    generation: u64,
    /// Set by the first successful gateway reply
    loaded: bool,
}

impl Planner {
    /// Create a planner with empty state; the initial page is rendered
    /// immediately
    pub fn new(gateway: Arc<dyn PartyGateway>) -> Self {
        let state = AppState::default();
        let page = view::app(&state);

        Self {
            gateway,
            inner: RwLock::new(Rendered {
                state,
                page,
                generation: 0,
                loaded: false,
            }),
        }
    }

    /// Initial load: parties, then RSVPs, then guests, one after another.
    ///
    /// Every fetch is attempted; the first failure is returned.
    pub async fn bootstrap(&self) -> PlannerResult<()> {
        tracing::info!("Loading parties, RSVPs and guests");

        let parties = self.refresh_parties().await;
        let rsvps = self.refresh_rsvps().await;
        let guests = self.refresh_guests().await;

        parties.and(rsvps).and(guests)
    }

    /// Replace the party collection with the server's
    pub async fn refresh_parties(&self) -> PlannerResult<()> {
        match self.gateway.list_parties().await {
            Ok(parties) => {
                tracing::debug!(count = parties.len(), "Parties loaded");
                self.dispatch(Msg::PartiesLoaded(parties)).await;
                Ok(())
            }
            Err(e) => {
                self.fail(Operation::LoadParties, &e).await;
                Err(e.into())
            }
        }
    }

    /// Replace the RSVP collection with the server's
    pub async fn refresh_rsvps(&self) -> PlannerResult<()> {
        match self.gateway.list_rsvps().await {
            Ok(rsvps) => {
                tracing::debug!(count = rsvps.len(), "RSVPs loaded");
                self.dispatch(Msg::RsvpsLoaded(rsvps)).await;
                Ok(())
            }
            Err(e) => {
                self.fail(Operation::LoadRsvps, &e).await;
                Err(e.into())
            }
        }
    }

    /// Replace the guest collection with the server's
    pub async fn refresh_guests(&self) -> PlannerResult<()> {
        match self.gateway.list_guests().await {
            Ok(guests) => {
                tracing::debug!(count = guests.len(), "Guests loaded");
                self.dispatch(Msg::GuestsLoaded(guests)).await;
                Ok(())
            }
            Err(e) => {
                self.fail(Operation::LoadGuests, &e).await;
                Err(e.into())
            }
        }
    }

    /// Fetch a party and make it the selection
    pub async fn select_party(&self, id: PartyId) -> PlannerResult<()> {
        match self.gateway.get_party(id).await {
            Ok(party) => {
                tracing::debug!(party_id = id, "Party selected");
                self.dispatch(Msg::PartySelected(party)).await;
                Ok(())
            }
            Err(e) => {
                self.fail(Operation::LoadParty, &e).await;
                Err(e.into())
            }
        }
    }

    /// Create a party, then reload the party list whatever the outcome so
    /// the page shows server-assigned fields
    pub async fn create_party(&self, draft: PartyDraft) -> PlannerResult<Party> {
        let created = self.gateway.create_party(&draft).await;

        match &created {
            Ok(party) => tracing::info!(party_id = party.id, name = %party.name, "Party created"),
            Err(e) => self.fail(Operation::CreateParty, e).await,
        }

        // Failure is already on the banner
        let _ = self.refresh_parties().await;

        created.map_err(PlannerError::from)
    }

    /// Turn submitted form fields into a draft (local wall-clock time) and
    /// create the party
    pub async fn submit_form(&self, form: NewPartyForm) -> PlannerResult<Party> {
        let draft = form.into_draft();
        self.submit_draft(draft).await
    }

    async fn submit_draft(&self, draft: Result<PartyDraft, DraftError>) -> PlannerResult<Party> {
        match draft {
            Ok(draft) => self.create_party(draft).await,
            Err(e) => {
                self.fail(Operation::CreateParty, &e).await;
                Err(e.into())
            }
        }
    }

    /// Delete a party, clear the selection, then reload the party list
    pub async fn remove_party(&self, id: PartyId) -> PlannerResult<()> {
        let removed = self.gateway.delete_party(id).await;

        match &removed {
            Ok(()) => tracing::info!(party_id = id, "Party removed"),
            Err(e) => self.fail(Operation::RemoveParty, e).await,
        }

        self.dispatch(Msg::SelectionCleared).await;
        let _ = self.refresh_parties().await;

        removed.map_err(PlannerError::from)
    }

    /// Hide the error banner
    pub async fn dismiss_error(&self) {
        self.dispatch(Msg::ErrorDismissed).await;
    }

    /// Apply a state transition and re-render the whole page
    pub async fn dispatch(&self, msg: Msg) {
        let mut inner = self.inner.write().await;
        if matches!(
            msg,
            Msg::PartiesLoaded(_) | Msg::RsvpsLoaded(_) | Msg::GuestsLoaded(_) | Msg::PartySelected(_)
        ) {
            inner.loaded = true;
        }
        inner.state.update(msg);
        inner.page = view::app(&inner.state);
        inner.generation += 1;

        tracing::trace!(generation = inner.generation, "Page rendered");
    }

    /// Copy of the current state
    pub async fn state(&self) -> AppState {
        self.inner.read().await.state.clone()
    }

    /// The last rendered page tree
    pub async fn page(&self) -> Node {
        self.inner.read().await.page.clone()
    }

    /// The last rendered page as an HTML document
    pub async fn html(&self) -> String {
        let inner = self.inner.read().await;
        html::render_document(view::components::PAGE_TITLE, &inner.page)
    }

    /// Number of renders since creation
    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }

    /// Whether any gateway reply has reached the state yet
    pub async fn is_loaded(&self) -> bool {
        self.inner.read().await.loaded
    }

    async fn fail(&self, operation: Operation, error: &(dyn Display + Sync)) {
        tracing::error!(operation = %operation, error = %error, "Request failed");
        self.dispatch(Msg::RequestFailed {
            operation,
            message: error.to_string(),
        })
        .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::fake::{FakeGateway, Op};
    use crate::model::{Guest, Rsvp};
    use crate::view::{components, Action, Element};
    use chrono::Utc;

    fn party(id: i64, name: &str) -> Party {
        Party {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            date: "2025-10-19T18:30:00.000Z".to_string(),
            location: format!("{} location", name),
        }
    }

    fn seeded() -> Arc<FakeGateway> {
        Arc::new(
            FakeGateway::new()
                .with_parties(vec![party(1, "Launch"), party(2, "Retro"), party(3, "Offsite")])
                .with_guests(vec![
                    Guest { id: 10, name: "Ada".to_string() },
                    Guest { id: 11, name: "Grace".to_string() },
                ])
                .with_rsvps(vec![
                    Rsvp { id: 1, guest_id: 10, event_id: 2 },
                    Rsvp { id: 2, guest_id: 11, event_id: 3 },
                ]),
        )
    }

    async fn booted(gateway: &Arc<FakeGateway>) -> Planner {
        let planner = Planner::new(Arc::clone(gateway) as Arc<dyn PartyGateway>);
        planner.bootstrap().await.unwrap();
        planner
    }

    fn entries(page: &Node) -> Vec<String> {
        page.find_all(|el| matches!(el.action, Some(Action::SelectParty(_))))
            .iter()
            .map(|el| el.text_content())
            .collect()
    }

    fn party_list_of(page: &Node) -> Element {
        page.find(|el| el.has_class("parties")).cloned().unwrap()
    }

    fn form(name: &str, date: &str, time: &str) -> NewPartyForm {
        NewPartyForm {
            name: name.to_string(),
            description: "Fresh".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            location: "Rooftop".to_string(),
        }
    }

    #[tokio::test]
    async fn test_bootstrap_fetches_sequentially_then_renders() {
        let gateway = seeded();
        let planner = booted(&gateway).await;

        assert_eq!(gateway.calls(), vec![Op::ListParties, Op::ListRsvps, Op::ListGuests]);

        let state = planner.state().await;
        assert_eq!(state.parties.len(), 3);
        assert_eq!(state.rsvps.len(), 2);
        assert_eq!(state.guests.len(), 2);
        assert_eq!(planner.generation().await, 3);

        let page = planner.page().await;
        assert_eq!(entries(&page), vec!["Launch", "Retro", "Offsite"]);
        assert!(page.text_content().contains(components::SELECT_PROMPT));
    }

    #[tokio::test]
    async fn test_bootstrap_continues_past_failure() {
        let gateway = seeded();
        gateway.fail(Op::ListRsvps);

        let planner = Planner::new(Arc::clone(&gateway) as Arc<dyn PartyGateway>);
        let result = planner.bootstrap().await;

        assert!(matches!(result, Err(PlannerError::Gateway(_))));
        assert_eq!(gateway.calls(), vec![Op::ListParties, Op::ListRsvps, Op::ListGuests]);

        let state = planner.state().await;
        assert_eq!(state.parties.len(), 3);
        assert!(state.rsvps.is_empty());
        assert_eq!(state.guests.len(), 2);
        assert!(state.error.unwrap().starts_with("Could not load RSVPs"));
    }

    #[tokio::test]
    async fn test_select_party_shows_details_and_guests() {
        let gateway = seeded();
        let planner = booted(&gateway).await;

        planner.select_party(2).await.unwrap();

        let state = planner.state().await;
        assert_eq!(state.selected, Some(party(2, "Retro")));

        let page = planner.page().await;
        let detail = page.find(|el| el.has_class("party")).unwrap();
        let text = Node::from(detail.clone()).text_content();
        assert!(text.contains("Retro #2"));
        assert!(text.contains("2025-10-19"));
        assert!(text.contains("Retro location"));
        assert!(text.contains("Retro description"));

        let guests: Vec<String> = page
            .find_all(|el| el.tag == "li")
            .iter()
            .filter(|el| el.action.is_none() && !el.children.iter().any(|c| matches!(c, Node::Element(_))))
            .map(|el| el.text_content())
            .collect();
        assert_eq!(guests, vec!["Ada"]);

        let selected = page.find(|el| el.has_class("selected")).unwrap();
        assert_eq!(selected.text_content(), "Retro");
    }

    #[tokio::test]
    async fn test_select_missing_party_keeps_state() {
        let gateway = seeded();
        let planner = booted(&gateway).await;
        planner.select_party(1).await.unwrap();

        let err = planner.select_party(99).await.unwrap_err();
        assert!(err.to_string().contains("Event 99 not found"));

        let state = planner.state().await;
        assert_eq!(state.selected, Some(party(1, "Launch")));
    }

    #[tokio::test]
    async fn test_failed_list_leaves_party_list_unchanged() {
        let gateway = seeded();
        let planner = booted(&gateway).await;
        let before = party_list_of(&planner.page().await);

        gateway.fail(Op::ListParties);
        assert!(planner.refresh_parties().await.is_err());

        let page = planner.page().await;
        assert_eq!(party_list_of(&page), before);
        assert!(page.find(|el| el.has_class("error")).is_some());

        planner.dismiss_error().await;
        assert!(planner.page().await.find(|el| el.has_class("error")).is_none());
    }

    #[tokio::test]
    async fn test_list_recovers_after_failure() {
        let gateway = seeded();
        gateway.fail(Op::ListParties);
        gateway.fail(Op::ListRsvps);
        gateway.fail(Op::ListGuests);

        let planner = Planner::new(Arc::clone(&gateway) as Arc<dyn PartyGateway>);
        assert!(planner.bootstrap().await.is_err());
        assert!(!planner.is_loaded().await);
        assert!(planner.generation().await > 0);
        assert!(entries(&planner.page().await).is_empty());

        gateway.recover(Op::ListParties);
        planner.refresh_parties().await.unwrap();

        assert!(planner.is_loaded().await);
        assert_eq!(entries(&planner.page().await), vec!["Launch", "Retro", "Offsite"]);
        // The banner stays until dismissed
        assert!(planner.state().await.error.is_some());
    }

    #[tokio::test]
    async fn test_submit_form_posts_iso_date_and_refreshes() {
        let gateway = seeded();
        let planner = booted(&gateway).await;

        let created = planner
            .submit_draft(form("Gala", "2025-12-31", "21:00").into_draft_in(&Utc))
            .await
            .unwrap();
        assert_eq!(created.id, 4);

        let drafts = gateway.created();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].date, "2025-12-31T21:00:00.000Z");
        assert_eq!(drafts[0].description, "Fresh");

        let calls = gateway.calls();
        assert_eq!(&calls[calls.len() - 2..], &[Op::CreateParty, Op::ListParties]);

        assert_eq!(entries(&planner.page().await), vec!["Launch", "Retro", "Offsite", "Gala"]);

        // The form is rebuilt empty
        let page = planner.page().await;
        let inputs = page.find_all(|el| el.tag == "input");
        assert!(inputs.iter().all(|el| el.get_attr("value").is_none()));
    }

    #[tokio::test]
    async fn test_failed_create_still_refreshes() {
        let gateway = seeded();
        let planner = booted(&gateway).await;
        gateway.fail(Op::CreateParty);

        let result = planner.create_party(PartyDraft::new("Gala", "2025-12-31T21:00:00.000Z", "Hall")).await;
        assert!(result.is_err());

        let calls = gateway.calls();
        assert_eq!(calls.last(), Some(&Op::ListParties));

        let state = planner.state().await;
        assert_eq!(state.parties.len(), 3);
        assert!(state.error.unwrap().starts_with("Could not create party"));
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let gateway = seeded();
        let planner = booted(&gateway).await;
        let calls_before = gateway.calls().len();

        let result = planner.submit_form(form("", "2025-12-31", "21:00")).await;
        assert!(matches!(result, Err(PlannerError::Draft(DraftError::MissingField("name")))));
        assert_eq!(gateway.calls().len(), calls_before);

        let state = planner.state().await;
        assert_eq!(state.error.as_deref(), Some("Could not create party: Missing required field: name"));
    }

    #[tokio::test]
    async fn test_remove_party_clears_selection() {
        let gateway = seeded();
        let planner = booted(&gateway).await;
        planner.select_party(2).await.unwrap();

        planner.remove_party(2).await.unwrap();

        let calls = gateway.calls();
        assert_eq!(&calls[calls.len() - 2..], &[Op::DeleteParty, Op::ListParties]);
        assert!(gateway.remote_parties().iter().all(|p| p.id != 2));

        let state = planner.state().await;
        assert!(state.selected.is_none());

        let page = planner.page().await;
        assert_eq!(entries(&page), vec!["Launch", "Offsite"]);
        assert!(page.text_content().contains(components::SELECT_PROMPT));
    }

    #[tokio::test]
    async fn test_failed_remove_still_clears_selection() {
        let gateway = seeded();
        let planner = booted(&gateway).await;
        planner.select_party(1).await.unwrap();
        gateway.fail(Op::DeleteParty);

        assert!(planner.remove_party(1).await.is_err());

        let state = planner.state().await;
        assert!(state.selected.is_none());
        assert_eq!(state.parties.len(), 3);
        assert!(state.error.unwrap().starts_with("Could not remove party"));
    }

    #[tokio::test]
    async fn test_every_dispatch_renders() {
        let gateway = seeded();
        let planner = Planner::new(Arc::clone(&gateway) as Arc<dyn PartyGateway>);
        assert_eq!(planner.generation().await, 0);
        assert!(planner.page().await.slots().is_empty());

        planner.dispatch(Msg::SelectionCleared).await;
        planner.dispatch(Msg::ErrorDismissed).await;
        assert_eq!(planner.generation().await, 2);

        assert!(!planner.is_loaded().await);

        let html = planner.html().await;
        assert!(html.contains(">Party Planner</title>"));
        assert!(html.contains("class=\"parties\""));
        assert!(!html.contains("<li"));
    }
}
