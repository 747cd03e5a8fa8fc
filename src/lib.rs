pub mod app;
pub mod clock;
pub mod config;
pub mod dom;
pub mod errors;
pub mod fetch;
pub mod health;
pub mod models;
pub mod notification;
pub mod stats;
pub mod ui;

pub use app::{install_animations, Dashboard, PageLoad};
pub use config::Config;
pub use dom::{Document, PageDocument};
pub use errors::GlueError;
pub use notification::Notifier;
