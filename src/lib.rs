pub mod assets;
pub mod config;
pub mod language;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};

rust_i18n::i18n!("locales", fallback = "es");
