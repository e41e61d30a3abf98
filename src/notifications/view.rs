// SPDX-License-Identifier: MPL-2.0
//! A single notification: its properties and its rendered subtree.
//!
//! Every property setter stores the new value and immediately re-renders the
//! region that depends on it, so the subtree never shows stale content once a
//! setter returns. Regions are independent:
//!
//! - icon: the `icon` property
//! - body: `title`, `subtitle` and `text`, always rendered together
//! - actions: `actions` and `minimal`
//!
//! Render failures are logged and swallowed; setters never fail.

use super::action::{Action, ActionMap, ClickEvent};
use super::template::{ClassNames, ROOT_TAG};
use super::transition::Closing;
use crate::dom::{class_list, NodeId, Substrate};
use crate::error::RenderError;
use std::rc::Rc;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Observable properties of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Icon,
    Title,
    Subtitle,
    Text,
    Minimal,
    Actions,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::Icon,
        Property::Title,
        Property::Subtitle,
        Property::Text,
        Property::Minimal,
        Property::Actions,
    ];

    /// Parses a property name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|property| property.name().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Property::Icon => "icon",
            Property::Title => "title",
            Property::Subtitle => "subtitle",
            Property::Text => "text",
            Property::Minimal => "minimal",
            Property::Actions => "actions",
        }
    }

    fn region(self) -> Region {
        match self {
            Property::Icon => Region::Icon,
            Property::Title | Property::Subtitle | Property::Text => Region::Body,
            Property::Minimal | Property::Actions => Region::Actions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Icon,
    Body,
    Actions,
}

/// Fully resolved property set a view is built from.
#[derive(Debug, Clone, Default)]
pub(crate) struct Resolved {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub minimal: bool,
    pub actions: ActionMap,
    pub click_action: Action,
}

/// Node ids of the fixed part of a notification subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewNodes {
    pub root: NodeId,
    pub height_container: NodeId,
    pub main: NodeId,
    pub icon: NodeId,
    pub image: NodeId,
    pub msg: NodeId,
    pub title: NodeId,
    pub subtitle: NodeId,
    pub text: NodeId,
    pub actions: NodeId,
}

impl ViewNodes {
    fn all(&self) -> [NodeId; 10] {
        [
            self.root,
            self.height_container,
            self.main,
            self.icon,
            self.image,
            self.msg,
            self.title,
            self.subtitle,
            self.text,
            self.actions,
        ]
    }
}

/// What a click on a notification node maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Trigger {
    Body,
    Action(String),
}

#[derive(Debug)]
pub struct NotificationView {
    id: NotificationId,
    classes: Rc<ClassNames>,
    nodes: ViewNodes,
    /// Rendered action buttons with the label each one displays.
    action_nodes: Vec<(NodeId, String)>,
    icon: String,
    title: String,
    subtitle: String,
    text: String,
    minimal: bool,
    actions: ActionMap,
    click_action: Action,
    closing: Option<Closing>,
}

impl NotificationView {
    /// Builds the subtree for `props` and renders every region once.
    ///
    /// The root is left detached; inserting it is the host's job.
    pub(crate) fn build<D: Substrate + ?Sized>(
        dom: &mut D,
        classes: Rc<ClassNames>,
        props: Resolved,
    ) -> Self {
        let root = dom.create_element(ROOT_TAG);
        let height_container = dom.create_element("div");
        let main = dom.create_element("div");
        let icon = dom.create_element("div");
        let image = dom.create_element("img");
        let msg = dom.create_element("div");
        let title = dom.create_element("div");
        let subtitle = dom.create_element("div");
        let text = dom.create_element("div");
        let actions = dom.create_element("div");

        let nodes = ViewNodes {
            root,
            height_container,
            main,
            icon,
            image,
            msg,
            title,
            subtitle,
            text,
            actions,
        };

        let mut view = Self {
            id: NotificationId::new(),
            classes,
            nodes,
            action_nodes: Vec::new(),
            icon: props.icon,
            title: props.title,
            subtitle: props.subtitle,
            text: props.text,
            minimal: props.minimal,
            actions: props.actions,
            click_action: props.click_action,
            closing: None,
        };

        if let Err(err) = view.assemble(dom) {
            log::warn!("failed to assemble notification {:?}: {err}", view.id);
        }
        view.update_dom(dom, None);
        log::debug!("created notification {:?}", view.id);
        view
    }

    fn assemble<D: Substrate + ?Sized>(&self, dom: &mut D) -> Result<(), RenderError> {
        let n = &self.nodes;
        let c = &self.classes;

        dom.set_attribute(n.height_container, "class", Some(&c.height_container))?;
        dom.set_attribute(n.main, "class", Some(&c.main))?;
        dom.set_attribute(n.icon, "class", Some(&c.icon))?;
        dom.set_attribute(n.image, "alt", Some(""))?;
        dom.set_attribute(n.msg, "class", Some(&c.msg))?;
        dom.set_attribute(n.title, "class", Some(&c.title))?;
        dom.set_attribute(n.subtitle, "class", Some(&c.subtitle))?;
        dom.set_attribute(n.text, "class", Some(&c.text))?;

        dom.insert_before(n.root, n.height_container, None)?;
        dom.insert_before(n.height_container, n.main, None)?;
        dom.insert_before(n.main, n.icon, None)?;
        dom.insert_before(n.icon, n.image, None)?;
        dom.insert_before(n.main, n.msg, None)?;
        dom.insert_before(n.msg, n.title, None)?;
        dom.insert_before(n.msg, n.subtitle, None)?;
        dom.insert_before(n.msg, n.text, None)?;
        dom.insert_before(n.height_container, n.actions, None)?;

        dom.listen_click(n.root)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn nodes(&self) -> &ViewNodes {
        &self.nodes
    }

    /// Rendered action buttons, in display order.
    pub fn action_nodes(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.action_nodes
            .iter()
            .map(|(node, label)| (*node, label.as_str()))
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn minimal(&self) -> bool {
        self.minimal
    }

    #[must_use]
    pub fn actions(&self) -> &ActionMap {
        &self.actions
    }

    #[must_use]
    pub fn click_action(&self) -> &Action {
        &self.click_action
    }

    /// Whether the dismiss sequence has started.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing.is_some()
    }

    pub fn set_icon<D: Substrate + ?Sized>(&mut self, dom: &mut D, icon: impl Into<String>) {
        self.icon = icon.into();
        self.update_dom(dom, Some(Property::Icon));
    }

    pub fn set_title<D: Substrate + ?Sized>(&mut self, dom: &mut D, title: impl Into<String>) {
        self.title = title.into();
        self.update_dom(dom, Some(Property::Title));
    }

    pub fn set_subtitle<D: Substrate + ?Sized>(
        &mut self,
        dom: &mut D,
        subtitle: impl Into<String>,
    ) {
        self.subtitle = subtitle.into();
        self.update_dom(dom, Some(Property::Subtitle));
    }

    pub fn set_text<D: Substrate + ?Sized>(&mut self, dom: &mut D, text: impl Into<String>) {
        self.text = text.into();
        self.update_dom(dom, Some(Property::Text));
    }

    pub fn set_minimal<D: Substrate + ?Sized>(&mut self, dom: &mut D, minimal: bool) {
        self.minimal = minimal;
        self.update_dom(dom, Some(Property::Minimal));
    }

    pub fn set_actions<D: Substrate + ?Sized>(&mut self, dom: &mut D, actions: ActionMap) {
        self.actions = actions;
        self.update_dom(dom, Some(Property::Actions));
    }

    /// Nothing is rendered from the click action, so no region is updated.
    pub fn set_click_action(&mut self, action: Action) {
        self.click_action = action;
    }

    /// In-place access to the action map. The buttons are not rebuilt until
    /// [`reload_actions`](Self::reload_actions) is called.
    pub fn actions_mut(&mut self) -> &mut ActionMap {
        &mut self.actions
    }

    /// Rebuilds the action buttons from the current map.
    pub fn reload_actions<D: Substrate + ?Sized>(&mut self, dom: &mut D) {
        self.update_dom(dom, Some(Property::Actions));
    }

    /// Re-renders the region owning `property`, or every region for `None`.
    fn update_dom<D: Substrate + ?Sized>(&mut self, dom: &mut D, property: Option<Property>) {
        let regions: &[Region] = match property.map(Property::region) {
            Some(Region::Icon) => &[Region::Icon],
            Some(Region::Body) => &[Region::Body],
            Some(Region::Actions) => &[Region::Actions],
            None => &[Region::Icon, Region::Body, Region::Actions],
        };

        for &region in regions {
            let result = match region {
                Region::Icon => self.update_icon(dom),
                Region::Body => self.update_body(dom),
                Region::Actions => self.update_actions(dom),
            };
            if let Err(err) = result {
                log::warn!(
                    "notification {:?}: {region:?} region not updated: {err}",
                    self.id
                );
            }
        }
    }

    fn update_icon<D: Substrate + ?Sized>(&self, dom: &mut D) -> Result<(), RenderError> {
        if self.icon.is_empty() {
            dom.set_attribute(self.nodes.icon, "style", None)?;
            return dom.set_attribute(self.nodes.image, "src", None);
        }
        let escaped = self.icon.replace('\\', "\\\\").replace('"', "\\\"");
        let style = format!("background-image: url(\"{escaped}\")");
        dom.set_attribute(self.nodes.icon, "style", Some(&style))?;
        dom.set_attribute(self.nodes.image, "src", Some(&self.icon))
    }

    fn update_body<D: Substrate + ?Sized>(&self, dom: &mut D) -> Result<(), RenderError> {
        dom.set_text(self.nodes.title, &self.title)?;
        dom.set_text(self.nodes.subtitle, &self.subtitle)?;
        dom.set_text(self.nodes.text, &self.text)
    }

    fn update_actions<D: Substrate + ?Sized>(&mut self, dom: &mut D) -> Result<(), RenderError> {
        for (node, _) in self.action_nodes.drain(..) {
            // A button already gone is what we want anyway.
            if let Err(err) = dom.remove_child(self.nodes.actions, node) {
                log::debug!("stale action node {node:?}: {err}");
            }
            if let Err(err) = dom.release(node) {
                log::debug!("action node {node:?} not released: {err}");
            }
        }

        let minimal = if self.minimal {
            self.classes.minimal.as_str()
        } else {
            ""
        };
        let class = class_list([self.classes.actions.as_str(), minimal]);
        dom.set_attribute(self.nodes.actions, "class", Some(&class))?;

        for label in self.actions.keys() {
            let node = dom.create_element("div");
            // Tracked before anything can fail so the next rebuild frees it.
            self.action_nodes.push((node, label.clone()));
            dom.set_attribute(node, "class", Some(&self.classes.action))?;
            dom.set_text(node, label)?;
            dom.listen_click(node)?;
            dom.insert_before(self.nodes.actions, node, None)?;
        }
        Ok(())
    }

    /// Maps a clicked node to what it triggers, or `None` if this view does
    /// not own the node.
    ///
    /// The root runs the click action. Any other node is looked up in the
    /// action map by its rendered text, so a button resolves to its own
    /// action and a text node usually to no action at all.
    pub(crate) fn trigger_for(&self, target: NodeId) -> Option<Trigger> {
        if target == self.nodes.root {
            return Some(Trigger::Body);
        }
        if let Some((_, label)) = self.action_nodes.iter().find(|(node, _)| *node == target) {
            return Some(Trigger::Action(label.clone()));
        }
        self.nodes
            .all()
            .contains(&target)
            .then(|| Trigger::Action(self.rendered_text(target)))
    }

    /// Text content of one of the fixed nodes, as last rendered.
    fn rendered_text(&self, node: NodeId) -> String {
        let n = &self.nodes;
        let body = || [self.title.as_str(), &self.subtitle, &self.text].concat();
        let labels = || {
            self.action_nodes
                .iter()
                .map(|(_, label)| label.as_str())
                .collect::<String>()
        };

        if node == n.title {
            self.title.clone()
        } else if node == n.subtitle {
            self.subtitle.clone()
        } else if node == n.text {
            self.text.clone()
        } else if node == n.msg || node == n.main {
            body()
        } else if node == n.actions {
            labels()
        } else if node == n.height_container {
            body() + &labels()
        } else {
            String::new()
        }
    }

    /// Runs the action for `trigger` and returns the dismiss decision.
    ///
    /// A label that is no longer in the map behaves like an unset action.
    pub(crate) fn resolve(&self, trigger: &Trigger, event: &ClickEvent) -> bool {
        // Clone so a callback cannot observe the view mid-dispatch.
        let action = match trigger {
            Trigger::Body => self.click_action.clone(),
            Trigger::Action(label) => self.actions.get(label).cloned().unwrap_or_default(),
        };
        action.resolve(event)
    }

    /// Marks the view as closing and applies the hide class.
    pub(crate) fn begin_closing<D: Substrate + ?Sized>(&mut self, dom: &mut D, closing: Closing) {
        self.closing = Some(closing);
        let class = class_list([
            self.classes.height_container.as_str(),
            self.classes.hide.as_str(),
        ]);
        if let Err(err) = dom.set_attribute(self.nodes.height_container, "class", Some(&class)) {
            log::warn!("notification {:?}: hide class not applied: {err}", self.id);
        }
    }

    pub(crate) fn closing(&self) -> Option<&Closing> {
        self.closing.as_ref()
    }
}
