//! Owned element tree the page is built into.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Freed slots are
//! recycled, but each reuse bumps the slot's generation, so a handle that
//! outlives its node simply stops resolving instead of pointing at a
//! different element.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    text: String,
    classes: Vec<String>,
    dataset: BTreeMap<String, String>,
    attrs: BTreeMap<String, String>,
    disabled: bool,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            text: String::new(),
            classes: Vec::new(),
            dataset: BTreeMap::new(),
            attrs: BTreeMap::new(),
            disabled: false,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Text owned directly by this element, not including descendants.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Space separated class list, as it would appear in a `class` attribute.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Reads a `data-*` value, keyed without the `data-` prefix.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    pub fn set_data(&mut self, key: &str, value: impl Into<String>) {
        self.dataset.insert(key.to_string(), value.into());
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
}

/// Detached roots built together and appended as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    roots: Vec<NodeId>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId) {
        self.roots.push(node);
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Change,
    Click,
}

/// A user interaction delivered to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: Option<NodeId>,
}

impl DomEvent {
    pub fn change(target: NodeId) -> Self {
        Self {
            kind: EventKind::Change,
            target: Some(target),
        }
    }

    pub fn click(target: NodeId) -> Self {
        Self {
            kind: EventKind::Click,
            target: Some(target),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let node = Node {
            parent: None,
            children: Vec::new(),
            element: Element::new(tag),
        };
        self.live += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    fn free_node(&mut self, id: NodeId) -> Option<Node> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let node = slot.node.take()?;
        self.free.push(id.index);
        self.live -= 1;
        Some(node)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id).map(|node| &node.element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.node_mut(id).map(|node| &mut node.element)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut cursor = Some(of);
        while let Some(current) = cursor {
            if current == candidate {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.retain(|child| *child != id);
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    /// Moves `child` to the end of `parent`'s children.
    ///
    /// Returns `false` when either handle is dead or the move would create a
    /// cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.contains(parent) || !self.contains(child) {
            return false;
        }
        if self.is_ancestor_or_self(child, parent) {
            return false;
        }
        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        true
    }

    /// Appends every root of `fragment` to `parent`, returning how many moved.
    pub fn append_fragment(&mut self, parent: NodeId, fragment: Fragment) -> usize {
        fragment
            .roots
            .into_iter()
            .filter(|&root| self.append_child(parent, root))
            .count()
    }

    /// Detaches and frees `id` together with its whole subtree.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.detach(id);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.free_node(current) {
                stack.extend(node.children);
            }
        }
        true
    }

    /// Removes every child of `id`, last child first.
    pub fn clear_children(&mut self, id: NodeId) -> Option<NodeId> {
        if !self.contains(id) {
            return None;
        }
        while let Some(&last) = self.children(id).last() {
            self.remove(last);
        }
        Some(id)
    }

    /// Descendants of `root` in document order, excluding `root` itself.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    pub fn find(&self, root: NodeId, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.element(id).is_some_and(&predicate))
    }

    pub fn find_all(&self, root: NodeId, predicate: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(&predicate))
            .collect()
    }

    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(element) = self.element(id) {
            out.push_str(element.text());
        }
        for descendant in self.descendants(id) {
            if let Some(element) = self.element(descendant) {
                out.push_str(element.text());
            }
        }
        out
    }

    /// Serializes `id` and its subtree as HTML.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(element) = self.element(id) else {
            return;
        };
        out.push('<');
        out.push_str(element.tag());
        for (name, value) in &element.attrs {
            push_attr(out, name, value);
        }
        if !element.classes.is_empty() {
            push_attr(out, "class", &element.class_name());
        }
        for (key, value) in &element.dataset {
            push_attr(out, &format!("data-{key}"), value);
        }
        if element.disabled {
            out.push_str(" disabled");
        }
        out.push('>');
        out.push_str(&escape(element.text(), false));
        for &child in self.children(id) {
            self.write_html(child, out);
        }
        out.push_str("</");
        out.push_str(element.tag());
        out.push('>');
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Slots allocated so far, live or waiting for reuse.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value, true));
    out.push('"');
}

fn escape(raw: &str, in_attr: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
