//! Typed view nodes.
//!
//! View functions build a tree of [`Node`]s; renderers map it onto a
//! concrete target. Interactive elements carry an [`Action`] instead of a
//! callback so the tree stays plain data that tests can inspect.

use crate::model::PartyId;

/// A node in the view tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Children rendered in place, without a wrapper
    Fragment(Vec<Node>),
    /// Named placeholder, replaced during the render cycle
    Slot(Slot),
}

/// Named placeholders in the page skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    PartyList,
    NewPartyForm,
    SelectedParty,
    ErrorBanner,
}

/// What activating an element does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the party and show its details
    SelectParty(PartyId),
    /// Ask `confirm`, then delete the party
    RemoveParty { id: PartyId, confirm: String },
    /// Submit the new-party form
    CreateParty,
    /// Hide the error banner
    DismissError,
    /// Reload parties, RSVPs and guests
    Refresh,
}

/// An element with attributes, children and an optional action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    pub action: Option<Action>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            action: None,
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn on(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Slot> for Node {
    fn from(slot: Slot) -> Self {
        Node::Slot(slot)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    /// Replace the first placeholder named `slot` with `fragment`.
    ///
    /// Returns `false` if the tree has no such placeholder.
    pub fn replace_slot(&mut self, slot: Slot, fragment: Node) -> bool {
        let mut fragment = Some(fragment);
        self.replace_slot_with(slot, &mut fragment)
    }

    fn replace_slot_with(&mut self, slot: Slot, fragment: &mut Option<Node>) -> bool {
        if matches!(self, Node::Slot(s) if *s == slot) {
            return match fragment.take() {
                Some(f) => {
                    *self = f;
                    true
                }
                None => false,
            };
        }

        match self {
            Node::Element(el) => el
                .children
                .iter_mut()
                .any(|c| c.replace_slot_with(slot, fragment)),
            Node::Fragment(children) => children
                .iter_mut()
                .any(|c| c.replace_slot_with(slot, fragment)),
            _ => false,
        }
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Node::Fragment(children) => children.iter().for_each(|c| c.collect_text(out)),
            Node::Slot(_) => {}
        }
    }

    /// All elements in document order matching `pred`
    pub fn find_all<F>(&self, pred: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.walk(&pred, &mut found);
        found
    }

    /// First element in document order matching `pred`
    pub fn find<F>(&self, pred: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.find_all(pred).into_iter().next()
    }

    fn walk<'a, F>(&'a self, pred: &F, found: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        match self {
            Node::Element(el) => {
                if pred(el) {
                    found.push(el);
                }
                el.children.iter().for_each(|c| c.walk(pred, found));
            }
            Node::Fragment(children) => children.iter().for_each(|c| c.walk(pred, found)),
            Node::Text(_) | Node::Slot(_) => {}
        }
    }

    /// Placeholders still present in the tree
    pub fn slots(&self) -> Vec<Slot> {
        match self {
            Node::Slot(s) => vec![*s],
            Node::Element(el) => el.children.iter().flat_map(Node::slots).collect(),
            Node::Fragment(children) => children.iter().flat_map(Node::slots).collect(),
            Node::Text(_) => Vec::new(),
        }
    }
}

impl Element {
    /// Text of this element's subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.collect_text(&mut out));
        out
    }
}
