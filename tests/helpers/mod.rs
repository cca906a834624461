//! Shared setup for HTTP tests: the fixture plan and a router around it.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use healthia::{
    AppState, Config,
    config::{I18nConfig, ObservabilityConfig, PlanConfig, ServerConfig},
};
use healthia_mealplan::WeeklyPlan;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const PLAN: &str = include_str!("../fixtures/plan.json");

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        plan: PlanConfig {
            path: "tests/fixtures/plan.json".to_string(),
        },
        i18n: I18nConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn app() -> Router {
    app_with_plan(PLAN)
}

pub fn app_with_plan(plan: &str) -> Router {
    let plan = WeeklyPlan::from_json(plan).expect("plan should parse");

    healthia::router(AppState {
        config: config(),
        plan: Arc::new(plan),
    })
}

pub async fn get(uri: &str) -> Response<Body> {
    get_from(app(), uri).await
}

pub async fn get_from(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_with_language(uri: &str, language: &str) -> Response<Body> {
    app()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::ACCEPT_LANGUAGE, language)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
