//! Render target for the dashboard flows.
//!
//! [`Document`] is the only way a flow touches the page. [`PageDocument`]
//! is an in-memory page that can be rendered back to HTML.

use crate::errors::GlueError;
use crate::ui::{self, escape_html};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Inserted as text; escaped when rendered.
    Text(String),
    /// Trusted markup, rendered as is.
    Markup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub class_name: String,
    pub content: Content,
    style: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class_name: String::new(),
            content: Content::Text(String::new()),
            style: Vec::new(),
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.content = Content::Markup(markup.into());
        self
    }

    pub fn with_style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    /// Overwrites the property in place so the declaration order stays stable.
    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.style.iter_mut().find(|(name, _)| name == property) {
            Some(entry) => entry.1 = value,
            None => self.style.push((property.to_string(), value)),
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn css_text(&self) -> String {
        self.style
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn text(&self) -> &str {
        match &self.content {
            Content::Text(text) | Content::Markup(text) => text,
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        if !self.class_name.is_empty() {
            html.push_str(&format!(" class=\"{}\"", escape_html(&self.class_name)));
        }
        if !self.style.is_empty() {
            html.push_str(&format!(" style=\"{}\"", escape_html(&self.css_text())));
        }
        html.push('>');
        match &self.content {
            Content::Text(text) => html.push_str(&escape_html(text)),
            Content::Markup(markup) => html.push_str(markup),
        }
        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

pub trait Document: Send + Sync {
    /// Replaces the markup inside the element with the given id.
    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), GlueError>;

    fn append_to_head(&self, element: Element) -> NodeId;

    fn append_to_body(&self, element: Element) -> NodeId;

    /// Returns `false` when the node is no longer attached.
    fn set_style(&self, node: NodeId, property: &str, value: &str) -> bool;

    /// Returns `false` when the node is no longer attached.
    fn remove(&self, node: NodeId) -> bool;
}

#[derive(Debug, Default)]
struct PageState {
    next_id: u64,
    regions: BTreeMap<String, String>,
    head: Vec<(NodeId, Element)>,
    body: Vec<(NodeId, Element)>,
}

impl PageState {
    fn allocate(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }
}

#[derive(Debug)]
pub struct PageDocument {
    title: String,
    state: Mutex<PageState>,
}

impl Default for PageDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PageDocument {
    /// The dashboard page shell with its `nav-stats` region.
    pub fn new() -> Self {
        Self::with_regions(ui::PAGE_TITLE, [(ui::NAV_STATS_ID, ui::NAV_STATS_PLACEHOLDER)])
    }

    pub fn with_regions<'a>(
        title: impl Into<String>,
        regions: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let state = PageState {
            regions: regions
                .into_iter()
                .map(|(id, html)| (id.to_string(), html.to_string()))
                .collect(),
            ..PageState::default()
        };
        Self {
            title: title.into(),
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.lock().regions.get(id).cloned()
    }

    /// Region content with tags stripped and whitespace collapsed.
    pub fn text_content(&self, id: &str) -> Option<String> {
        self.inner_html(id).map(|html| strip_tags(&html))
    }

    pub fn head_elements(&self) -> Vec<Element> {
        self.lock().head.iter().map(|(_, el)| el.clone()).collect()
    }

    pub fn element(&self, node: NodeId) -> Option<Element> {
        let state = self.lock();
        state
            .head
            .iter()
            .chain(state.body.iter())
            .find(|(id, _)| *id == node)
            .map(|(_, el)| el.clone())
    }

    /// Body elements carrying the `notification` class.
    pub fn notifications(&self) -> Vec<Element> {
        self.lock()
            .body
            .iter()
            .filter(|(_, el)| el.class_name.split_whitespace().any(|c| c == "notification"))
            .map(|(_, el)| el.clone())
            .collect()
    }

    pub fn to_html(&self) -> String {
        let state = self.lock();
        let head: String = state.head.iter().map(|(_, el)| el.to_html()).collect();
        let overlays: String = state.body.iter().map(|(_, el)| el.to_html()).collect();
        let nav_stats = state.regions.get(ui::NAV_STATS_ID).map(String::as_str);
        ui::render_page(&self.title, nav_stats, &head, &overlays)
    }
}

impl Document for PageDocument {
    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), GlueError> {
        let mut state = self.lock();
        let region = state
            .regions
            .get_mut(id)
            .ok_or_else(|| GlueError::MissingRegion(id.to_string()))?;
        *region = html.to_string();
        Ok(())
    }

    fn append_to_head(&self, element: Element) -> NodeId {
        let mut state = self.lock();
        let node = state.allocate();
        state.head.push((node, element));
        node
    }

    fn append_to_body(&self, element: Element) -> NodeId {
        let mut state = self.lock();
        let node = state.allocate();
        state.body.push((node, element));
        node
    }

    fn set_style(&self, node: NodeId, property: &str, value: &str) -> bool {
        let mut state = self.lock();
        let PageState { head, body, .. } = &mut *state;
        match head.iter_mut().chain(body.iter_mut()).find(|(id, _)| *id == node) {
            Some((_, el)) => {
                el.set_style(property, value);
                true
            }
            None => false,
        }
    }

    fn remove(&self, node: NodeId) -> bool {
        let mut state = self.lock();
        let before = state.head.len() + state.body.len();
        state.head.retain(|(id, _)| *id != node);
        state.body.retain(|(id, _)| *id != node);
        before != state.head.len() + state.body.len()
    }
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
