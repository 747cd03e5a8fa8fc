use crate::clock::{Clock, TokioClock};
use crate::config::Config;
use crate::dom::{Document, Element};
use crate::fetch::{Fetch, HttpFetcher};
use crate::health;
use crate::notification::Notifier;
use crate::stats;
use crate::ui::ANIMATIONS_CSS;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Handles of the two flows started by [`Dashboard::on_page_load`]. Nothing
/// needs to await them; they are returned for callers that want to.
pub struct PageLoad {
    pub stats: JoinHandle<()>,
    pub health: JoinHandle<()>,
}

impl PageLoad {
    pub async fn finish(self) {
        if let Err(err) = self.stats.await {
            error!("stats flow task failed: {err}");
        }
        if let Err(err) = self.health.await {
            error!("health flow task failed: {err}");
        }
    }
}

/// The page glue with its collaborators injected.
#[derive(Clone)]
pub struct Dashboard {
    fetch: Arc<dyn Fetch>,
    document: Arc<dyn Document>,
    notifier: Notifier,
}

impl Dashboard {
    pub fn new(fetch: Arc<dyn Fetch>, document: Arc<dyn Document>, clock: Arc<dyn Clock>) -> Self {
        let notifier = Notifier::new(Arc::clone(&document), clock);
        Self {
            fetch,
            document,
            notifier,
        }
    }

    /// Real HTTP client and tokio timers against the configured backend.
    pub fn from_config(config: &Config, document: Arc<dyn Document>) -> Self {
        Self::new(
            Arc::new(HttpFetcher::new(config.base_url.clone())),
            document,
            Arc::new(TokioClock),
        )
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub async fn load_stats(&self) {
        stats::load_stats(self.fetch.as_ref(), self.document.as_ref()).await;
    }

    pub async fn check_health(&self) {
        health::check_health(self.fetch.as_ref(), &self.notifier).await;
    }

    /// Starts both flows as independent tasks. Neither waits on the other
    /// and they may finish in any order.
    pub fn on_page_load(&self) -> PageLoad {
        info!("page loaded, starting stats and health flows");
        let dashboard = self.clone();
        let stats = tokio::spawn(async move { dashboard.load_stats().await });
        let dashboard = self.clone();
        let health = tokio::spawn(async move { dashboard.check_health().await });
        PageLoad { stats, health }
    }
}

/// Adds the toast keyframes to the page head.
pub fn install_animations(document: &dyn Document) {
    document.append_to_head(Element::new("style").with_markup(ANIMATIONS_CSS));
}
