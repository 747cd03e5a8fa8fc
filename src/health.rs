use crate::errors::GlueError;
use crate::fetch::Fetch;
use crate::models::{HealthPayload, NotificationKind};
use crate::notification::Notifier;
use tracing::{debug, error};

pub const HEALTH_PATH: &str = "/health";
pub const UNREACHABLE_MESSAGE: &str =
    "API server is unreachable. Please ensure the API is running on port 8000.";

/// Fetches `/health` and decodes it whatever the status code: the backend
/// answers 503 together with the status field this flow needs.
pub async fn fetch_health(fetch: &dyn Fetch) -> Result<HealthPayload, GlueError> {
    fetch.get(HEALTH_PATH).await?.json()
}

/// Runs the health flow. Only an explicit `unreachable` status produces a
/// notification; a failed check is logged and otherwise ignored.
pub async fn check_health(fetch: &dyn Fetch, notifier: &Notifier) {
    match fetch_health(fetch).await {
        Ok(health) if health.is_unreachable() => {
            notifier.show(UNREACHABLE_MESSAGE, NotificationKind::Error);
        }
        Ok(health) => debug!(api_status = ?health.api_status, "health check passed"),
        Err(err) => error!("health check failed: {err}"),
    }
}
