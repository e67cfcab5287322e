//! View functions.
//!
//! Each function reads [`AppState`] and returns a fresh fragment. None of
//! them keep state of their own.

use super::node::{Action, Element, Node, Slot};
use crate::model::Party;
use crate::state::AppState;

pub const PAGE_TITLE: &str = "Party Planner";
pub const SELECT_PROMPT: &str = "Please select a party to learn more.";
pub const REMOVE_CONFIRM: &str = "Are you sure you want to remove this party?";

/// Order in which skeleton placeholders are filled
pub const FILL_ORDER: [Slot; 4] = [
    Slot::PartyList,
    Slot::NewPartyForm,
    Slot::SelectedParty,
    Slot::ErrorBanner,
];

/// Page skeleton with named placeholders
pub fn skeleton() -> Node {
    Element::new("div")
        .attr("id", "app")
        .child(Element::new("h1").text(PAGE_TITLE))
        .child(
            Element::new("button")
                .attr("type", "submit")
                .text("Refresh")
                .on(Action::Refresh),
        )
        .child(Slot::ErrorBanner)
        .child(
            Element::new("main")
                .child(
                    Element::new("section")
                        .child(Element::new("h2").text("Upcoming Parties"))
                        .child(Slot::PartyList)
                        .child(Slot::NewPartyForm),
                )
                .child(
                    Element::new("section")
                        .attr("id", "selected")
                        .child(Element::new("h2").text("Party Details"))
                        .child(Slot::SelectedParty),
                ),
        )
        .into()
}

/// The whole page: skeleton with every placeholder filled from `state`
pub fn app(state: &AppState) -> Node {
    let mut root = skeleton();

    for slot in FILL_ORDER {
        let fragment = match slot {
            Slot::PartyList => party_list(state),
            Slot::NewPartyForm => new_party_form(),
            Slot::SelectedParty => selected_party(state),
            Slot::ErrorBanner => error_banner(state),
        };
        root.replace_slot(slot, fragment);
    }

    root
}

/// One clickable entry per party
pub fn party_list(state: &AppState) -> Node {
    Element::new("ul")
        .class("parties")
        .children(
            state
                .parties
                .iter()
                .map(|party| party_list_item(party, state.is_selected(party.id))),
        )
        .into()
}

/// Party name that shows the party's details when clicked
pub fn party_list_item(party: &Party, selected: bool) -> Node {
    let mut item = Element::new("li");
    if selected {
        item = item.class("selected");
    }

    item.child(
        Element::new("a")
            .text(party.name.clone())
            .on(Action::SelectParty(party.id)),
    )
    .into()
}

/// Details of the selected party, or a prompt to pick one
pub fn selected_party(state: &AppState) -> Node {
    let Some(party) = &state.selected else {
        return Element::new("p").text(SELECT_PROMPT).into();
    };

    Element::new("section")
        .class("party")
        .child(Element::new("h3").text(format!("{} #{}", party.name, party.id)))
        .child(
            Element::new("time")
                .attr("datetime", party.date.clone())
                .text(party.calendar_date()),
        )
        .child(Element::new("address").text(party.location.clone()))
        .child(Element::new("p").text(party.description.clone()))
        .child(guest_list(state))
        .child(
            Element::new("button")
                .attr("type", "submit")
                .text("Remove Party")
                .on(Action::RemoveParty {
                    id: party.id,
                    confirm: REMOVE_CONFIRM.to_string(),
                }),
        )
        .into()
}

/// Guests attending the selected party
pub fn guest_list(state: &AppState) -> Node {
    Element::new("ul")
        .class("guests")
        .children(
            state
                .selected_guests()
                .into_iter()
                .map(|guest| Element::new("li").text(guest.name.clone())),
        )
        .into()
}

/// Form for creating a party
pub fn new_party_form() -> Node {
    Element::new("form")
        .attr("id", "new-party-form")
        .on(Action::CreateParty)
        .child(labelled("name", "Name", text_input("name", "text").attr("placeholder", "Name").attr("required", "")))
        .child(labelled(
            "description",
            "Description",
            Element::new("textarea")
                .attr("id", "description")
                .attr("name", "description")
                .attr("placeholder", "Description"),
        ))
        .child(labelled("date", "Date", text_input("date", "date").attr("required", "")))
        .child(labelled("time", "Time", text_input("time", "time").attr("required", "")))
        .child(labelled(
            "location",
            "Location",
            text_input("location", "text").attr("placeholder", "Location").attr("required", ""),
        ))
        .child(Element::new("button").attr("type", "submit").text("Add Party"))
        .into()
}

fn text_input(name: &'static str, kind: &'static str) -> Element {
    Element::new("input")
        .attr("id", name)
        .attr("name", name)
        .attr("type", kind)
}

fn labelled(id: &'static str, label: &'static str, input: Element) -> Node {
    Node::Fragment(vec![
        Element::new("label").attr("for", id).text(label).into(),
        input.into(),
    ])
}

/// Banner for the most recent failure, if any
pub fn error_banner(state: &AppState) -> Node {
    match &state.error {
        Some(message) => Element::new("div")
            .class("error")
            .attr("role", "alert")
            .child(Element::new("p").text(message.clone()))
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .text("Dismiss")
                    .on(Action::DismissError),
            )
            .into(),
        None => Node::empty(),
    }
}
