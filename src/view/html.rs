//! HTML renderer.
//!
//! Maps the view tree onto leptos views and renders them server-side for
//! the local page server. Leptos escapes text and attribute values.
//! Actions become plain links and form posts, so the page works without
//! any script beyond the removal confirmation prompt.

use leptos::html::{custom, input, meta, Custom, ElementDescriptor, HtmlElement};
use leptos::{CollectView, IntoView, View};

use super::node::{Action, Element, Node};
use crate::model::PartyId;

/// Path of the page itself
pub const HOME_PATH: &str = "/";

/// Path that receives new-party form posts
pub const PARTIES_PATH: &str = "/parties";

/// Path that dismisses the error banner
pub const DISMISS_ERROR_PATH: &str = "/error/dismiss";

/// Path that reloads every collection
pub const REFRESH_PATH: &str = "/refresh";

// Rendered as escaped text, so no child combinators
const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; }
main { display: flex; gap: 2rem; }
main section { flex: 1; }
ul.parties li.selected a { font-weight: bold; }
ul.parties a { cursor: pointer; }
form#new-party-form { display: grid; grid-template-columns: max-content 1fr; gap: 0.5rem; }
div.error { background: #fdd; border: 1px solid #c00; padding: 0.5rem 1rem; }
";

/// Link that selects a party
pub fn party_path(id: PartyId) -> String {
    format!("{}/{}", PARTIES_PATH, id)
}

/// Form target that removes a party
pub fn remove_path(id: PartyId) -> String {
    format!("{}/{}/delete", PARTIES_PATH, id)
}

/// Render a fragment to markup
pub fn render(node: &Node) -> String {
    let node = node.clone();
    leptos::ssr::render_to_string(move || to_view(&node)).to_string()
}

/// Render a complete HTML document around `body`
pub fn render_document(title: &str, body: &Node) -> String {
    let document: Node = Element::new("html")
        .attr("lang", "en")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(
                    Element::new("meta")
                        .attr("name", "viewport")
                        .attr("content", "width=device-width, initial-scale=1"),
                )
                .child(Element::new("title").text(title))
                .child(Element::new("style").text(STYLE)),
        )
        .child(Element::new("body").child(body.clone()))
        .into();

    format!("<!DOCTYPE html>\n{}\n", render(&document))
}

fn to_view(node: &Node) -> View {
    match node {
        Node::Text(text) => text.clone().into_view(),
        Node::Fragment(children) => children.iter().map(to_view).collect_view(),
        Node::Element(el) => element_view(el),
        // Unfilled placeholders render as nothing
        Node::Slot(_) => ().into_view(),
    }
}

/// Apply the element's action, which may add attributes or a wrapper
fn element_view(el: &Element) -> View {
    match &el.action {
        None => plain(el, &[]),
        Some(Action::SelectParty(id)) => {
            let href = format!("{}#selected", party_path(*id));
            plain(el, &[("href", href)])
        }
        Some(Action::CreateParty) => plain(
            el,
            &[
                ("method", "post".to_string()),
                ("action", PARTIES_PATH.to_string()),
            ],
        ),
        Some(Action::RemoveParty { id, confirm }) => post_form(
            el,
            "remove-party",
            remove_path(*id),
            Some(format!("return confirm('{}');", escape_js(confirm))),
        ),
        Some(Action::DismissError) => post_form(el, "dismiss-error", DISMISS_ERROR_PATH.to_string(), None),
        Some(Action::Refresh) => post_form(el, "refresh", REFRESH_PATH.to_string(), None),
    }
}

/// Wrap a control in a form posting to `path`
fn post_form(el: &Element, class: &'static str, path: String, onsubmit: Option<String>) -> View {
    let mut form = custom(Custom::new("form"))
        .attr("class", class)
        .attr("method", "post")
        .attr("action", path);
    if let Some(script) = onsubmit {
        form = form.attr("onsubmit", script);
    }
    form.child(plain(el, &[])).into_view()
}

/// The element itself, without its action wrapper
fn plain(el: &Element, extra: &[(&'static str, String)]) -> View {
    // Void elements need their typed builders to render without a closing tag
    match el.tag {
        "input" => decorate(input(), el, extra).into_view(),
        "meta" => decorate(meta(), el, extra).into_view(),
        tag => decorate(custom(Custom::new(tag)), el, extra).into_view(),
    }
}

fn decorate<E>(mut target: HtmlElement<E>, el: &Element, extra: &[(&'static str, String)]) -> HtmlElement<E>
where
    E: ElementDescriptor + 'static,
{
    if !el.classes.is_empty() {
        target = target.attr("class", el.classes.join(" "));
    }
    for (name, value) in el.attrs.iter().chain(extra.iter()) {
        // Empty values are boolean attributes
        target = if value.is_empty() {
            target.attr(*name, true)
        } else {
            target.attr(*name, value.clone())
        };
    }
    append_children(target, &el.children)
}

/// Fragments are spliced into the parent element
fn append_children<E>(mut target: HtmlElement<E>, children: &[Node]) -> HtmlElement<E>
where
    E: ElementDescriptor + 'static,
{
    for child in children {
        target = match child {
            Node::Fragment(inner) => append_children(target, inner),
            Node::Slot(_) => target,
            other => target.child(to_view(other)),
        };
    }
    target
}

/// Escape for a single-quoted JavaScript string literal
fn escape_js(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
}
