use sdn_dashboard::{install_animations, Config, Dashboard, Document, PageDocument};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("loading dashboard against {}", config.base_url);

    let page = Arc::new(PageDocument::new());
    install_animations(page.as_ref());

    let document: Arc<dyn Document> = page.clone();
    let dashboard = Dashboard::from_config(&config, document);

    let settled = async {
        dashboard.on_page_load().finish().await;
        dashboard.notifier().settle().await;
    };

    tokio::select! {
        _ = settled => info!("page settled"),
        _ = tokio::signal::ctrl_c() => warn!("interrupted before the page settled"),
    }

    println!("{}", page.to_html());
    Ok(())
}
