//! View Layer
//!
//! Pure projections of [`AppState`](crate::state::AppState) into a tree of
//! typed nodes, plus renderers for the two front-ends.
//!
//! ## Render Cycle
//!
//! [`components::app`] builds the page [`skeleton`](components::skeleton)
//! with named [`Slot`]s, then replaces each slot with a freshly built
//! fragment in a fixed order: party list, creation form, selected-party
//! detail, error banner. Nothing is diffed; the whole tree is rebuilt.
//!
//! ## Renderers
//!
//! - [`html`]: markup for the browser page
//! - [`text`]: plain text for the command line

pub mod components;
pub mod html;
mod node;
pub mod text;

pub use components::{
    app, error_banner, guest_list, new_party_form, party_list, party_list_item, selected_party,
    skeleton,
};
pub use node::{Action, Element, Node, Slot};
