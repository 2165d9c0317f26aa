use dioxus::prelude::*;

use crate::builders::DATA_POST_ID;
use crate::dom::{Document, NodeId};

/// The parts of one element a [`DomNode`] renders.
#[derive(Debug, Clone, PartialEq)]
struct NodeView {
    tag: String,
    class: String,
    text: String,
    dom_id: Option<String>,
    value: Option<String>,
    post_id: Option<String>,
    disabled: bool,
    children: Vec<NodeId>,
}

impl NodeView {
    fn read(doc: &Document, id: NodeId) -> Option<Self> {
        let element = doc.element(id)?;
        Some(Self {
            tag: element.tag().to_string(),
            class: element.class_name(),
            text: element.text().to_string(),
            dom_id: element.attr("id").map(str::to_string),
            value: element.attr("value").map(str::to_string),
            post_id: element.data(DATA_POST_ID).map(str::to_string),
            disabled: element.is_disabled(),
            children: doc.children(id).to_vec(),
        })
    }
}

/// Mirrors one element of the page document, and its subtree, into the view.
///
/// Select changes and button clicks are handed back as the raw value and the
/// clicked element's id; the page controller decides what they mean. Each
/// node re-renders only when its own [`NodeView`] changes between snapshots.
#[component]
pub fn DomNode(
    doc: ReadOnlySignal<Document>,
    id: NodeId,
    on_click: EventHandler<NodeId>,
    on_change: EventHandler<String>,
) -> Element {
    // Children are keyed by id, so `id` is fixed for the life of this node.
    let node = use_memo(move || NodeView::read(&doc.read(), id));
    let Some(NodeView {
        tag,
        class,
        text,
        dom_id,
        value,
        post_id,
        disabled,
        children,
    }) = node()
    else {
        return rsx! {};
    };

    let nested = rsx! {
        for child in children {
            DomNode { key: "{child}", doc, id: child, on_click, on_change }
        }
    };

    match tag.as_str() {
        "div" => rsx! {
            div { id: dom_id, class, {text} {nested} }
        },
        "main" => rsx! {
            main { class, {text} {nested} }
        },
        "select" => rsx! {
            select {
                id: dom_id,
                class,
                disabled,
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                {nested}
            }
        },
        "option" => rsx! {
            option { value, class, {text} }
        },
        "article" => rsx! {
            article { class, {text} {nested} }
        },
        "section" => rsx! {
            section { class, "data-post-id": post_id, {text} {nested} }
        },
        "button" => rsx! {
            button {
                class,
                "data-post-id": post_id,
                onclick: move |_| on_click.call(id),
                {text}
            }
        },
        "h2" => rsx! {
            h2 { class, {text} }
        },
        "h3" => rsx! {
            h3 { class, {text} }
        },
        "p" => rsx! {
            p { class, {text} }
        },
        other => {
            tracing::warn!("No view for <{}> element {}", other, id);
            rsx! {}
        }
    }
}
