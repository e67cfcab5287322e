//! Plain-text renderer for terminals.
//!
//! Interactive controls (forms, buttons) have no terminal counterpart and
//! are skipped; party links show the identifier to pass to the CLI.

use super::node::{Action, Element, Node};

/// Render a view tree as plain text lines
pub fn render(node: &Node) -> String {
    let mut lines = Vec::new();
    write_node(node, &mut lines);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn write_node(node: &Node, lines: &mut Vec<String>) {
    match node {
        Node::Text(text) => {
            let text = text.trim();
            if !text.is_empty() {
                lines.push(text.to_string());
            }
        }
        Node::Fragment(children) => children.iter().for_each(|c| write_node(c, lines)),
        Node::Element(el) => write_element(el, lines),
        Node::Slot(_) => {}
    }
}

fn write_element(el: &Element, lines: &mut Vec<String>) {
    match el.tag {
        "form" | "button" | "label" | "input" | "textarea" => {}
        "h1" => {
            let title = el.text_content();
            lines.push(title.clone());
            lines.push("=".repeat(title.chars().count()));
        }
        "h2" => {
            let title = el.text_content();
            lines.push(String::new());
            lines.push(title.clone());
            lines.push("-".repeat(title.chars().count()));
        }
        "li" => {
            let marker = if el.has_class("selected") { '*' } else { '-' };
            lines.push(format!("{} {}", marker, inline(el)));
        }
        "div" if el.has_class("error") => {
            let message = el
                .children
                .iter()
                .filter(|c| !matches!(c, Node::Element(e) if e.tag == "button"))
                .map(Node::text_content)
                .collect::<String>();
            lines.push(format!("! {}", message));
        }
        "h3" | "p" | "time" | "address" => {
            let text = el.text_content();
            if !text.trim().is_empty() {
                lines.push(text.trim().to_string());
            }
        }
        "ul" if el.has_class("guests") => {
            if el.children.is_empty() {
                lines.push("Guests: none".to_string());
            } else {
                lines.push("Guests:".to_string());
                el.children.iter().for_each(|c| write_node(c, lines));
            }
        }
        _ => el.children.iter().for_each(|c| write_node(c, lines)),
    }
}

/// Single-line text of a list entry, with party ids shown
fn inline(el: &Element) -> String {
    let mut out = String::new();
    for child in &el.children {
        match child {
            Node::Element(inner) => {
                out.push_str(&inner.text_content());
                if let Some(Action::SelectParty(id)) = inner.action {
                    out.push_str(&format!(" (#{})", id));
                }
            }
            other => out.push_str(&other.text_content()),
        }
    }
    out
}
