use crate::dom::Document;
use crate::errors::GlueError;
use crate::fetch::Fetch;
use crate::models::StatsPayload;
use crate::ui::NAV_STATS_ID;
use tracing::{error, info, warn};

pub const STATS_PATH: &str = "/stats";
pub const STATS_UNAVAILABLE: &str = "Stats unavailable";

/// Groups digits in threes with `,` the way the en-US locale does.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn render_nav_stats(stats: &StatsPayload) -> String {
    if stats.has_error() {
        return format!(r#"<span class="stat-item">{STATS_UNAVAILABLE}</span>"#);
    }

    let counters = [
        ("Individuals", stats.individuals_count),
        ("Entities", stats.entities_count),
        ("Programs", stats.programs_count),
    ];

    let mut html = String::new();
    for (label, count) in counters {
        html.push_str(&format!(
            "\n<span class=\"stat-item\">\n    <strong>{label}:</strong> {}\n</span>",
            format_count(count.unwrap_or(0))
        ));
    }
    html.push('\n');
    html
}

/// Fetches `/stats` and decodes it. A non-success status is a failure even
/// when the body would decode.
pub async fn fetch_stats(fetch: &dyn Fetch) -> Result<StatsPayload, GlueError> {
    let response = fetch.get(STATS_PATH).await?;
    if !response.ok() {
        return Err(GlueError::status(STATS_PATH, response.status));
    }
    response.json()
}

/// Runs the stats flow to completion. Failures end here: they are logged
/// and the region is left as it was.
pub async fn load_stats(fetch: &dyn Fetch, document: &dyn Document) {
    let stats = match fetch_stats(fetch).await {
        Ok(stats) => stats,
        Err(err) => {
            error!("failed to load stats: {err}");
            return;
        }
    };

    if stats.has_error() {
        let reason = stats
            .error
            .as_ref()
            .map(|value| value.to_string())
            .unwrap_or_default();
        warn!("{}", GlueError::Application(reason));
    }

    match document.set_inner_html(NAV_STATS_ID, &render_nav_stats(&stats)) {
        Ok(()) => info!(
            individuals = stats.individuals_count,
            entities = stats.entities_count,
            programs = stats.programs_count,
            "nav stats updated"
        ),
        Err(err) => error!("failed to render stats: {err}"),
    }
}
