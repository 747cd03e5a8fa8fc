//! Transient toast notifications.
//!
//! Each call to [`Notifier::show`] appends one element to the page body and
//! schedules its dismissal: after [`VISIBLE_FOR`] the element switches to the
//! slide-out animation, and [`FADE_OUT`] later it is removed. Toasts stack;
//! nothing is deduplicated and nothing can cancel a dismissal.
//!
//! A toast is visible as soon as it is attached, so its lifecycle starts at
//! [`NotificationPhase::Visible`]. Removed toasts are forgotten.

use crate::clock::Clock;
use crate::dom::{Document, Element, NodeId};
use crate::models::{NotificationKind, NotificationPhase};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

pub const VISIBLE_FOR: Duration = Duration::from_millis(5000);
pub const FADE_OUT: Duration = Duration::from_millis(300);

pub const SLIDE_IN: &str = "slideIn 0.3s ease-out";
pub const SLIDE_OUT: &str = "slideOut 0.3s ease-out";

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Local>,
    pub phase: NotificationPhase,
}

/// Builds the toast element without attaching it.
pub fn notification_element(message: &str, kind: NotificationKind) -> Element {
    Element::new("div")
        .with_class(format!("notification notification-{kind}"))
        .with_text(message)
        .with_style("position", "fixed")
        .with_style("top", "20px")
        .with_style("right", "20px")
        .with_style("padding", "1rem 1.5rem")
        .with_style("background-color", kind.background_color())
        .with_style("color", kind.text_color())
        .with_style("border-radius", "8px")
        .with_style("box-shadow", "0 4px 6px rgba(0, 0, 0, 0.1)")
        .with_style("z-index", "1000")
        .with_style("animation", SLIDE_IN)
}

#[derive(Default)]
struct Registry {
    notifications: BTreeMap<NodeId, Notification>,
    dismissals: JoinSet<()>,
}

impl Registry {
    /// Drops finished dismissal tasks, logging any that panicked.
    fn reap(&mut self) {
        while let Some(result) = self.dismissals.try_join_next() {
            if let Err(err) = result {
                error!("notification dismissal task failed: {err}");
            }
        }
    }
}

#[derive(Clone)]
pub struct Notifier {
    document: Arc<dyn Document>,
    clock: Arc<dyn Clock>,
    registry: Arc<Mutex<Registry>>,
}

impl Notifier {
    pub fn new(document: Arc<dyn Document>, clock: Arc<dyn Clock>) -> Self {
        Self {
            document,
            clock,
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Shows a toast and schedules its removal. Returns `None` without
    /// touching the page when there is no tokio runtime to run the
    /// dismissal on.
    pub fn show(&self, message: &str, kind: NotificationKind) -> Option<NodeId> {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("cannot show notification outside a tokio runtime: {err}");
                return None;
            }
        };

        let created_at = Local::now();
        let node = self.document.append_to_body(notification_element(message, kind));
        let notification = Notification {
            message: message.to_string(),
            kind,
            created_at,
            phase: NotificationPhase::Visible,
        };
        info!(
            %node,
            %kind,
            created_at = %created_at.format("%H:%M:%S%.3f"),
            "notification shown: {message}"
        );

        let notifier = self.clone();
        let dismissal = async move {
            notifier.clock.sleep(VISIBLE_FOR).await;
            notifier.document.set_style(node, "animation", SLIDE_OUT);
            notifier.advance(node, NotificationPhase::Fading);

            notifier.clock.sleep(FADE_OUT).await;
            notifier.document.remove(node);
            notifier.registry().notifications.remove(&node);
            debug!(%node, phase = %NotificationPhase::Removed, "notification phase changed");
        };

        let mut registry = self.registry();
        registry.reap();
        registry.notifications.insert(node, notification);
        registry.dismissals.spawn_on(dismissal, &runtime);
        Some(node)
    }

    fn advance(&self, node: NodeId, phase: NotificationPhase) {
        if let Some(notification) = self.registry().notifications.get_mut(&node) {
            notification.phase = phase;
        }
        debug!(%node, %phase, "notification phase changed");
    }

    /// Nodes this notifier never showed, or already removed, report
    /// [`NotificationPhase::Removed`].
    pub fn phase(&self, node: NodeId) -> NotificationPhase {
        self.registry()
            .notifications
            .get(&node)
            .map_or(NotificationPhase::Removed, |n| n.phase)
    }

    pub fn get(&self, node: NodeId) -> Option<Notification> {
        self.registry().notifications.get(&node).cloned()
    }

    /// Toasts still attached to the page.
    pub fn active(&self) -> Vec<(NodeId, Notification)> {
        self.registry()
            .notifications
            .iter()
            .map(|(node, n)| (*node, n.clone()))
            .collect()
    }

    /// Dismissal tasks not yet reaped.
    pub fn pending_dismissals(&self) -> usize {
        self.registry().dismissals.len()
    }

    /// Waits until every scheduled dismissal has run, including ones
    /// scheduled while waiting.
    pub async fn settle(&self) {
        loop {
            let mut pending = std::mem::take(&mut self.registry().dismissals);
            if pending.is_empty() {
                return;
            }
            while let Some(result) = pending.join_next().await {
                if let Err(err) = result {
                    error!("notification dismissal task failed: {err}");
                }
            }
        }
    }
}
