//! Page controller: dropdown selection, refresh and click wiring.

use std::collections::HashMap;

use crate::builders::*;
use crate::client::PostsApi;
use crate::config::AppConfig;
use crate::dom::{Document, DomEvent, EventKind, NodeId};
use crate::render::{PostRenderer, Rendered};
use crate::toggle::{comments_state, toggle_comments, Toggled};
use crate::types::{present_id, Post, User};

/// Click binding registered on a comment toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleListener {
    pub post_id: u64,
}

/// Listeners owned by the page, keyed by the element they are bound to.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    bindings: HashMap<NodeId, ToggleListener>,
}

impl ListenerRegistry {
    /// Returns `false` if `node` already had a binding.
    pub fn bind(&mut self, node: NodeId, listener: ToggleListener) -> bool {
        if self.bindings.contains_key(&node) {
            return false;
        }
        self.bindings.insert(node, listener);
        true
    }

    pub fn unbind(&mut self, node: NodeId) -> Option<ToggleListener> {
        self.bindings.remove(&node)
    }

    pub fn get(&self, node: NodeId) -> Option<ToggleListener> {
        self.bindings.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Intermediate results of one [`PageController::refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub unbound: Vec<NodeId>,
    pub cleared: Option<NodeId>,
    pub rendered: Option<Rendered>,
    pub bound: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    pub user_id: u64,
    pub posts: Option<Vec<Post>>,
    pub refresh: Option<RefreshOutcome>,
}

/// Parses the dropdown value, falling back when it is missing or not an id.
pub fn resolve_user_id(value: Option<&str>, fallback: u64) -> u64 {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value.parse().unwrap_or(fallback),
        None => fallback,
    }
}

pub struct PageController<A> {
    doc: Document,
    root: NodeId,
    main: NodeId,
    select: NodeId,
    api: A,
    config: AppConfig,
    listeners: ListenerRegistry,
    change_bound: bool,
    observer: Option<Box<dyn FnMut(&Document)>>,
}

impl<A: PostsApi> PageController<A> {
    /// Builds the page shell: a dropdown with its prompt option above an
    /// empty `<main>` showing the placeholder text.
    pub fn new(api: A, config: AppConfig) -> Self {
        let mut doc = Document::new();
        let root = doc.create_element("div");
        let select = doc.create_element("select");
        let main = doc.create_element("main");

        if let Some(element) = doc.element_mut(root) {
            element.add_class("app");
        }
        if let Some(element) = doc.element_mut(select) {
            element.set_attr("id", SELECT_MENU_ID);
        }
        let prompt = build_labeled_element(&mut doc, "option", "Select an Employee", None);
        if let Some(element) = doc.element_mut(prompt) {
            element.set_attr("value", "");
        }
        let placeholder =
            build_labeled_element(&mut doc, "p", &config.placeholder_text, Some(CLASS_DEFAULT_TEXT));

        doc.append_child(select, prompt);
        doc.append_child(main, placeholder);
        doc.append_child(root, select);
        doc.append_child(root, main);

        Self {
            doc,
            root,
            main,
            select,
            api,
            config,
            listeners: ListenerRegistry::default(),
            change_bound: false,
            observer: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn main(&self) -> NodeId {
        self.main
    }

    pub fn select(&self) -> NodeId {
        self.select
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Called with the document each time the page visibly changes.
    pub fn on_update(&mut self, observer: impl FnMut(&Document) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.doc);
        }
    }

    fn post_buttons(&self) -> Vec<NodeId> {
        self.doc.find_all(self.main, |el| el.tag() == "button")
    }

    fn button_post_id(&self, button: NodeId) -> Option<u64> {
        let raw = self.doc.element(button)?.data(DATA_POST_ID)?;
        present_id(raw.parse().ok())
    }

    /// Registers the comment toggle on every post button in `<main>`.
    pub fn bind_toggle_listeners(&mut self) -> Vec<NodeId> {
        let buttons = self.post_buttons();
        for &button in &buttons {
            if let Some(post_id) = self.button_post_id(button) {
                self.listeners.bind(button, ToggleListener { post_id });
            }
        }
        buttons
    }

    pub fn unbind_toggle_listeners(&mut self) -> Vec<NodeId> {
        let buttons = self.post_buttons();
        if self.listeners.is_empty() {
            return buttons;
        }
        for &button in &buttons {
            self.listeners.unbind(button);
        }
        buttons
    }

    /// Runs the listener bound to the clicked element, if there is one.
    pub fn handle_click(&mut self, event: &DomEvent) -> Option<(Toggled, Toggled)> {
        if event.kind != EventKind::Click {
            return None;
        }
        let listener = self.listeners.get(event.target?)?;
        let toggled = toggle_comments(&mut self.doc, self.main, Some(event), Some(listener.post_id));
        if let Some(state) = comments_state(&self.doc, self.main, listener.post_id) {
            tracing::debug!("Comments for post {} now {:?}", listener.post_id, state);
        }
        self.notify();
        toggled
    }

    /// Replaces the contents of `<main>` with `posts`.
    pub async fn refresh(&mut self, posts: Option<&[Post]>) -> Option<RefreshOutcome> {
        let posts = posts?;

        let unbound = self.unbind_toggle_listeners();
        let cleared = self.doc.clear_children(self.main);
        let renderer = PostRenderer::new(&self.api, &self.config);
        let rendered = renderer.render_posts(&mut self.doc, self.main, Some(posts)).await;
        let bound = self.bind_toggle_listeners();
        self.notify();

        Some(RefreshOutcome {
            unbound,
            cleared,
            rendered,
            bound,
        })
    }

    pub async fn on_selection_change(&mut self, event: Option<&DomEvent>) -> Option<SelectionOutcome> {
        let event = event.filter(|event| event.kind == EventKind::Change)?;
        let select = event
            .target
            .filter(|&target| self.doc.contains(target))
            .unwrap_or(self.select);
        if !self.doc.contains(select) {
            return None;
        }

        self.set_disabled(select, true);

        let value = self.doc.element(select).and_then(|el| el.attr("value"));
        let user_id = resolve_user_id(value, self.config.fallback_user_id);
        tracing::info!("Loading posts for user {}", user_id);

        let posts = self.api.list_user_posts(Some(user_id)).await;
        let refresh = self.refresh(posts.as_deref()).await;

        self.set_disabled(select, false);

        Some(SelectionOutcome {
            user_id,
            posts,
            refresh,
        })
    }

    fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if let Some(element) = self.doc.element_mut(node) {
            element.set_disabled(disabled);
        }
        self.notify();
    }

    /// Fetches every user and fills the dropdown.
    pub async fn init_page(&mut self) -> (Option<Vec<User>>, Option<NodeId>) {
        let users = self.api.list_users().await;
        let select = populate_select(&mut self.doc, self.select, users.as_deref());
        self.notify();
        (users, select)
    }

    /// Page load: fill the dropdown, then start listening for changes.
    pub async fn init_app(&mut self) -> (Option<Vec<User>>, Option<NodeId>) {
        let initialized = self.init_page().await;
        if self.doc.contains(self.select) {
            self.change_bound = true;
        }
        match &initialized.0 {
            Some(users) => tracing::info!("Loaded {} employees", users.len()),
            None => tracing::warn!("Employee list unavailable"),
        }
        initialized
    }

    /// Delivers a change event if the change handler has been attached.
    pub async fn handle_change(&mut self, event: &DomEvent) -> Option<SelectionOutcome> {
        if !self.change_bound {
            return None;
        }
        self.on_selection_change(Some(event)).await
    }

    /// Sets the dropdown value and fires a change event, as a user pick would.
    pub async fn select_user(&mut self, value: &str) -> Option<SelectionOutcome> {
        if let Some(element) = self.doc.element_mut(self.select) {
            element.set_attr("value", value);
        }
        self.handle_change(&DomEvent::change(self.select)).await
    }
}
