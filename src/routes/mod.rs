use axum::{Router, response::IntoResponse, routing::get};
use healthia_mealplan::WeeklyPlan;
use std::sync::Arc;

use crate::template::Template;

mod health;
mod nutrition;
pub mod plan;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub plan: Arc<WeeklyPlan>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(plan::page))
        .route("/plan/{day}", get(plan::day))
        .route("/plan/{day}/meals/{label}", get(plan::activate))
        .route("/nutrition/{name}", get(nutrition::page))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
