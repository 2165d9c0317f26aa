//! Builders that turn API records into detached elements.

use crate::dom::{Document, Fragment, NodeId};
use crate::types::{Comment, User};

pub const CLASS_HIDE: &str = "hide";
pub const CLASS_COMMENT: &str = "comment";
pub const CLASS_COMMENTS: &str = "comments";
pub const CLASS_DEFAULT_TEXT: &str = "default-text";

/// Dataset key shared by a post's toggle button and its comment section.
pub const DATA_POST_ID: &str = "post-id";
pub const SELECT_MENU_ID: &str = "selectMenu";

pub fn build_labeled_element(
    doc: &mut Document,
    tag: &str,
    text: &str,
    class_name: Option<&str>,
) -> NodeId {
    let id = doc.create_element(tag);
    if let Some(element) = doc.element_mut(id) {
        element.set_text(text);
        if let Some(class) = class_name {
            element.add_class(class);
        }
    }
    id
}

/// One `<option>` per user, valued by id and labelled by name.
pub fn build_user_options(doc: &mut Document, users: Option<&[User]>) -> Option<Vec<NodeId>> {
    let users = users?;
    let options = users
        .iter()
        .map(|user| {
            let option = build_labeled_element(doc, "option", &user.name, None);
            if let Some(element) = doc.element_mut(option) {
                element.set_attr("value", user.id.to_string());
            }
            option
        })
        .collect();
    Some(options)
}

pub fn build_comment_fragment(doc: &mut Document, comments: Option<&[Comment]>) -> Option<Fragment> {
    let comments = comments?;
    let mut fragment = Fragment::new();

    for comment in comments {
        let article = doc.create_element("article");
        if let Some(element) = doc.element_mut(article) {
            element.add_class(CLASS_COMMENT);
        }

        let header = build_labeled_element(doc, "h3", &comment.name, None);
        let body = build_labeled_element(doc, "p", &comment.body, None);
        let author = build_labeled_element(doc, "p", &format!("From: {}", comment.email), None);

        for child in [header, body, author] {
            doc.append_child(article, child);
        }
        fragment.push(article);
    }

    Some(fragment)
}

/// Appends the user options to `select`.
pub fn populate_select(doc: &mut Document, select: NodeId, users: Option<&[User]>) -> Option<NodeId> {
    if !doc.contains(select) {
        return None;
    }
    let options = build_user_options(doc, users)?;
    for option in options {
        doc.append_child(select, option);
    }
    Some(select)
}
