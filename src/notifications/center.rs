// SPDX-License-Identifier: MPL-2.0
//! The host container and notification factory.
//!
//! A `NotificationCenter` owns the substrate, the host node and the ordered
//! list of live notifications (newest first). It resolves creation options
//! against its mutable [`Defaults`], routes clicks to the right notification
//! and runs the dismiss sequence:
//!
//! 1. the notification gets the hide class and its [`Transition`] starts;
//! 2. it is detached when the transition finishes, is reported finished, or
//!    the dismiss timeout elapses, whichever comes first.
//!
//! Dismissing a notification that is already closing does nothing, so a
//! double click during the hide transition detaches it only once.

use super::action::{Action, ActionMap, ClickEvent};
use super::options::NotificationOptions;
use super::template::{ClassNames, HOST_TAG};
use super::transition::{Animated, Closing, Immediate, Transition, TransitionState};
use super::view::{NotificationId, NotificationView, Resolved};
use crate::config::{self, Config, DefaultsConfig};
use crate::dom::{MemoryDom, NodeId, Substrate};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Values used for options left empty. Changes apply to notifications
/// created afterwards.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub icon: String,
    pub title: String,
    pub actions: ActionMap,
    pub to_minimal: bool,
    pub click_action: Action,
}

impl Default for Defaults {
    fn default() -> Self {
        Self::from(&DefaultsConfig::default())
    }
}

impl From<&DefaultsConfig> for Defaults {
    fn from(config: &DefaultsConfig) -> Self {
        Self {
            icon: config.icon.clone(),
            title: config.title.clone(),
            actions: config.action_map(),
            to_minimal: config.to_minimal,
            click_action: Action::Fixed(config.click_dismisses),
        }
    }
}

/// What a click or a dismiss request led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No live notification owns the target.
    Ignored,
    /// The action decided to keep the notification.
    Kept,
    /// The hide transition is running (or already was).
    Closing,
    /// The notification was detached from the host.
    Detached,
}

pub struct NotificationCenter<D: Substrate = MemoryDom> {
    dom: D,
    host: NodeId,
    /// Newest first, matching the host's child order.
    views: VecDeque<NotificationView>,
    defaults: Defaults,
    classes: Rc<ClassNames>,
    transition: Box<dyn Transition>,
    dismiss_timeout: Duration,
}

impl NotificationCenter<MemoryDom> {
    /// A center rendering into a fresh in-memory tree.
    #[must_use]
    pub fn new() -> Self {
        Self::with_substrate(MemoryDom::new())
    }
}

impl Default for NotificationCenter<MemoryDom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Substrate> NotificationCenter<D> {
    /// Creates the host node in `dom` and uses built-in defaults with no
    /// hide animation.
    pub fn with_substrate(mut dom: D) -> Self {
        let host = dom.create_element(HOST_TAG);
        Self::with_host(dom, host)
    }

    /// Uses an existing node of `dom` as the host.
    pub fn with_host(dom: D, host: NodeId) -> Self {
        Self {
            dom,
            host,
            views: VecDeque::new(),
            defaults: Defaults::default(),
            classes: Rc::new(ClassNames::default()),
            transition: Box::new(Immediate),
            dismiss_timeout: Duration::from_millis(config::DEFAULT_DISMISS_TIMEOUT_MS),
        }
    }

    /// Applies defaults, class names and dismiss timing from `config`.
    pub fn from_config(dom: D, config: &Config) -> Self {
        let mut center = Self::with_substrate(dom);
        center.defaults = Defaults::from(&config.defaults);
        center.classes = Rc::new(config.classes.clone());
        center.dismiss_timeout = config.dismiss.timeout();
        center.transition = Box::new(Animated::new(config.dismiss.animation()));
        center
    }

    pub fn set_transition(&mut self, transition: impl Transition + 'static) {
        self.transition = Box::new(transition);
    }

    /// Sets the upper bound between a dismiss and the removal, clamped to
    /// the range the settings file accepts.
    pub fn set_dismiss_timeout(&mut self, timeout: Duration) {
        self.dismiss_timeout = timeout.clamp(
            Duration::from_millis(config::MIN_DISMISS_TIMEOUT_MS),
            Duration::from_millis(config::MAX_DISMISS_TIMEOUT_MS),
        );
    }

    #[must_use]
    pub fn dismiss_timeout(&self) -> Duration {
        self.dismiss_timeout
    }

    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut Defaults {
        &mut self.defaults
    }

    #[must_use]
    pub fn classes(&self) -> &ClassNames {
        &self.classes
    }

    #[must_use]
    pub fn host(&self) -> NodeId {
        self.host
    }

    #[must_use]
    pub fn substrate(&self) -> &D {
        &self.dom
    }

    pub fn substrate_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.position(id).is_some()
    }

    /// Live notifications, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &NotificationView> {
        self.views.iter()
    }

    /// Ids of live notifications, newest first.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.views.iter().map(NotificationView::id).collect()
    }

    #[must_use]
    pub fn notification(&self, id: NotificationId) -> Option<&NotificationView> {
        self.views.iter().find(|view| view.id() == id)
    }

    pub fn notification_mut(&mut self, id: NotificationId) -> Option<NotificationMut<'_, D>> {
        let index = self.position(id)?;
        Some(NotificationMut {
            view: &mut self.views[index],
            dom: &mut self.dom,
        })
    }

    /// Creates a notification from `opts`, inserts it as the host's first
    /// child and returns it.
    pub fn add_notification(&mut self, opts: NotificationOptions) -> NotificationMut<'_, D> {
        let props = self.resolve(opts);
        let view = NotificationView::build(&mut self.dom, Rc::clone(&self.classes), props);

        let first = self.dom.first_child(self.host);
        if let Err(err) = self.dom.insert_before(self.host, view.nodes().root, first) {
            log::warn!("notification {:?} not inserted into host: {err}", view.id());
        }
        self.views.push_front(view);

        NotificationMut {
            view: &mut self.views[0],
            dom: &mut self.dom,
        }
    }

    /// Merges `opts` with the current defaults.
    pub(crate) fn resolve(&self, opts: NotificationOptions) -> Resolved {
        let defaults = &self.defaults;
        let pick = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let mut title = pick(opts.title, &defaults.title);
        if title.is_empty() {
            title = config::PLACEHOLDER_TEXT.to_string();
        }
        let subtitle = opts.subtitle.unwrap_or_default();
        let mut text = opts.text.unwrap_or_default();
        if text.is_empty() && subtitle.is_empty() {
            text = config::PLACEHOLDER_TEXT.to_string();
        }

        Resolved {
            icon: pick(opts.icon, &defaults.icon),
            title,
            subtitle,
            text,
            minimal: opts.minimal.unwrap_or(false) || defaults.to_minimal,
            actions: opts.actions.unwrap_or_else(|| defaults.actions.clone()),
            click_action: opts
                .click
                .filter(|action| !action.is_falsy())
                .unwrap_or_else(|| defaults.click_action.clone()),
        }
    }

    /// Dispatches a click, using the current time for any dismiss it starts.
    pub fn click(&mut self, event: ClickEvent) -> DispatchOutcome {
        self.click_at(event, Instant::now())
    }

    /// Dispatches a click on a notification node.
    ///
    /// The root runs the click action. Any other node runs the action stored
    /// under its rendered text; a text without a matching label counts as an
    /// unset action and dismisses.
    pub fn click_at(&mut self, event: ClickEvent, now: Instant) -> DispatchOutcome {
        let Some((index, trigger)) = self
            .views
            .iter()
            .enumerate()
            .find_map(|(i, view)| view.trigger_for(event.target).map(|t| (i, t)))
        else {
            return DispatchOutcome::Ignored;
        };

        if self.views[index].resolve(&trigger, &event) {
            self.begin_dismiss(index, now)
        } else {
            DispatchOutcome::Kept
        }
    }

    /// Starts the dismiss sequence for `id` without running any action.
    pub fn dismiss(&mut self, id: NotificationId) -> DispatchOutcome {
        self.dismiss_at(id, Instant::now())
    }

    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> DispatchOutcome {
        match self.position(id) {
            Some(index) => self.begin_dismiss(index, now),
            None => DispatchOutcome::Ignored,
        }
    }

    /// Reports that the hide transition of the notification rooted at `root`
    /// has ended. Returns whether a notification was detached.
    pub fn transition_finished(&mut self, root: NodeId) -> bool {
        let index = self
            .views
            .iter()
            .position(|view| view.nodes().root == root && view.is_closing());
        match index {
            Some(index) => {
                self.detach(index);
                true
            }
            None => false,
        }
    }

    /// Detaches every closing notification whose transition or timeout is
    /// over at `now`. Returns how many were detached.
    pub fn tick(&mut self, now: Instant) -> usize {
        let before = self.views.len();
        let mut index = 0;
        while index < self.views.len() {
            let due = self.views[index]
                .closing()
                .is_some_and(|closing| closing.is_due(now));
            if due {
                self.detach(index);
            } else {
                index += 1;
            }
        }
        before - self.views.len()
    }

    /// Whether any notification is waiting to be detached.
    #[must_use]
    pub fn has_pending_dismissals(&self) -> bool {
        self.views.iter().any(NotificationView::is_closing)
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.views.iter().position(|view| view.id() == id)
    }

    fn begin_dismiss(&mut self, index: usize, now: Instant) -> DispatchOutcome {
        let view = &mut self.views[index];
        if view.is_closing() {
            return DispatchOutcome::Closing;
        }

        let root = view.nodes().root;
        let state = self.transition.start_hide(root);
        let expected = match state {
            TransitionState::Finished => Some(Duration::ZERO),
            TransitionState::Running { expected } => expected,
        };
        view.begin_closing(
            &mut self.dom,
            Closing::new(now, expected, self.dismiss_timeout),
        );
        log::debug!("dismissing notification {:?}", view.id());

        if state == TransitionState::Finished {
            self.detach(index);
            DispatchOutcome::Detached
        } else {
            DispatchOutcome::Closing
        }
    }

    /// Removes the view from the list, then its root from the host, then
    /// frees the subtree. The list removal comes first so a view can only
    /// ever be detached once.
    fn detach(&mut self, index: usize) {
        let Some(view) = self.views.remove(index) else {
            return;
        };
        let root = view.nodes().root;
        if let Err(err) = self.dom.remove_child(self.host, root) {
            log::debug!("notification {:?} already detached: {err}", view.id());
        }
        if let Err(err) = self.dom.release(root) {
            log::debug!("notification {:?} subtree not released: {err}", view.id());
        }
        log::debug!("removed notification {:?}", view.id());
    }
}

/// Mutable access to a live notification.
///
/// Setters store the value and re-render the affected region right away.
pub struct NotificationMut<'a, D: Substrate> {
    pub(super) view: &'a mut NotificationView,
    pub(super) dom: &'a mut D,
}

impl<D: Substrate> NotificationMut<'_, D> {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.view.id()
    }

    #[must_use]
    pub fn view(&self) -> &NotificationView {
        &*self.view
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.view.set_icon(&mut *self.dom, icon);
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.view.set_title(&mut *self.dom, title);
        self
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) -> &mut Self {
        self.view.set_subtitle(&mut *self.dom, subtitle);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.view.set_text(&mut *self.dom, text);
        self
    }

    pub fn set_minimal(&mut self, minimal: bool) -> &mut Self {
        self.view.set_minimal(&mut *self.dom, minimal);
        self
    }

    pub fn set_actions(&mut self, actions: ActionMap) -> &mut Self {
        self.view.set_actions(&mut *self.dom, actions);
        self
    }

    pub fn set_click_action(&mut self, action: impl Into<Action>) -> &mut Self {
        self.view.set_click_action(action.into());
        self
    }

    /// In-place access to the action map; call
    /// [`reload_actions`](Self::reload_actions) afterwards.
    pub fn actions_mut(&mut self) -> &mut ActionMap {
        self.view.actions_mut()
    }

    pub fn reload_actions(&mut self) -> &mut Self {
        self.view.reload_actions(&mut *self.dom);
        self
    }
}
