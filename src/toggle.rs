//! Show/hide handling for a post's comment section.
//!
//! Each post owns a `<section data-post-id>` and a `<button data-post-id>`.
//! The section starts with the `hide` class and the button reads
//! "Show Comments"; one toggle flips both.

use crate::builders::{CLASS_HIDE, DATA_POST_ID};
use crate::dom::{Document, DomEvent, NodeId};
use crate::types::present_id;

pub const SHOW_COMMENTS_LABEL: &str = "Show Comments";
pub const HIDE_COMMENTS_LABEL: &str = "Hide Comments";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentsState {
    Hidden,
    Shown,
}

impl CommentsState {
    /// Button label offered while in this state.
    pub fn label(self) -> &'static str {
        match self {
            CommentsState::Hidden => SHOW_COMMENTS_LABEL,
            CommentsState::Shown => HIDE_COMMENTS_LABEL,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            SHOW_COMMENTS_LABEL => Some(CommentsState::Hidden),
            HIDE_COMMENTS_LABEL => Some(CommentsState::Shown),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            CommentsState::Hidden => CommentsState::Shown,
            CommentsState::Shown => CommentsState::Hidden,
        }
    }
}

/// Outcome of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    /// No post id was given; nothing was looked up.
    Skipped,
    NotFound,
    Toggled(NodeId),
}

impl Toggled {
    pub fn node(self) -> Option<NodeId> {
        match self {
            Toggled::Toggled(node) => Some(node),
            _ => None,
        }
    }
}

/// First `tag` element under `root` tagged with `post_id`.
pub fn find_tagged(doc: &Document, root: NodeId, tag: &str, post_id: u64) -> Option<NodeId> {
    let wanted = post_id.to_string();
    doc.find(root, |el| el.tag() == tag && el.data(DATA_POST_ID) == Some(wanted.as_str()))
}

pub fn toggle_section(doc: &mut Document, main: NodeId, post_id: Option<u64>) -> Toggled {
    let Some(post_id) = present_id(post_id) else {
        return Toggled::Skipped;
    };
    let Some(section) = find_tagged(doc, main, "section", post_id) else {
        return Toggled::NotFound;
    };
    if let Some(element) = doc.element_mut(section) {
        element.toggle_class(CLASS_HIDE);
    }
    Toggled::Toggled(section)
}

pub fn toggle_button_label(doc: &mut Document, main: NodeId, post_id: Option<u64>) -> Toggled {
    let Some(post_id) = present_id(post_id) else {
        return Toggled::Skipped;
    };
    let Some(button) = find_tagged(doc, main, "button", post_id) else {
        return Toggled::NotFound;
    };
    if let Some(element) = doc.element_mut(button) {
        let next = match CommentsState::from_label(element.text()) {
            Some(state) => state.toggled(),
            None => CommentsState::Hidden,
        };
        element.set_text(next.label());
    }
    Toggled::Toggled(button)
}

/// Click handler for a "Show/Hide Comments" button.
pub fn toggle_comments(
    doc: &mut Document,
    main: NodeId,
    event: Option<&DomEvent>,
    post_id: Option<u64>,
) -> Option<(Toggled, Toggled)> {
    event?;
    let post_id = present_id(post_id)?;

    let section = toggle_section(doc, main, Some(post_id));
    let button = toggle_button_label(doc, main, Some(post_id));
    tracing::debug!("Toggled comments for post {}", post_id);

    Some((section, button))
}

/// Current state of a post's comment section, read from its class list.
pub fn comments_state(doc: &Document, main: NodeId, post_id: u64) -> Option<CommentsState> {
    let section = find_tagged(doc, main, "section", post_id)?;
    let element = doc.element(section)?;
    Some(if element.has_class(CLASS_HIDE) {
        CommentsState::Hidden
    } else {
        CommentsState::Shown
    })
}
