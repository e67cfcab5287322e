//! Page Routes
//!
//! Every interaction is a link or a form post. Handlers run the matching
//! planner operation and redirect back to the page, which then shows the
//! new state (or the error banner).
//!
//! - GET / - The rendered page
//! - GET /parties/:id - Select a party
//! - POST /parties - Create a party from the form
//! - POST /parties/:id/delete - Remove a party
//! - POST /error/dismiss - Hide the error banner
//! - POST /refresh - Reload parties, RSVPs and guests

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::model::{NewPartyForm, PartyId};
use crate::server::state::ServerState;
use crate::view::html::HOME_PATH;

const DETAILS_ANCHOR: &str = "/#selected";

/// GET /
pub async fn index(State(state): State<Arc<ServerState>>) -> Html<String> {
    Html(state.planner.html().await)
}

/// GET /parties/:id
pub async fn select_party(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<PartyId>,
) -> Redirect {
    // Failures are on the banner
    let _ = state.planner.select_party(id).await;
    Redirect::to(DETAILS_ANCHOR)
}

/// POST /parties
pub async fn create_party(
    State(state): State<Arc<ServerState>>,
    Form(form): Form<NewPartyForm>,
) -> Redirect {
    let _ = state.planner.submit_form(form).await;
    Redirect::to(HOME_PATH)
}

/// POST /parties/:id/delete
pub async fn remove_party(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<PartyId>,
) -> Redirect {
    let _ = state.planner.remove_party(id).await;
    Redirect::to(HOME_PATH)
}

/// POST /error/dismiss
pub async fn dismiss_error(State(state): State<Arc<ServerState>>) -> Redirect {
    state.planner.dismiss_error().await;
    Redirect::to(HOME_PATH)
}

/// POST /refresh
pub async fn refresh(State(state): State<Arc<ServerState>>) -> Redirect {
    let _ = state.planner.bootstrap().await;
    Redirect::to(HOME_PATH)
}
