use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use healthia_mealplan::{DailyTargets, MealPlanCard, NUTRITION_PREFIX, Navigator, Nutrition, Tile};
use urlencoding::encode;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

pub struct TileView {
    pub key: String,
    pub type_key: String,
    pub label: String,
    pub name: String,
    pub image: String,
    pub href: String,
}

pub struct CardView {
    pub heading: String,
    pub tiles: Vec<TileView>,
}

impl CardView {
    fn tile(day: &str, tile: &Tile) -> TileView {
        TileView {
            key: tile.key(),
            type_key: tile.type_key().to_owned(),
            label: tile.label.to_owned(),
            name: tile.name.to_owned(),
            image: tile.image.to_owned(),
            href: format!("/plan/{}/meals/{}", encode(day), encode(&tile.label)),
        }
    }
}

impl From<&MealPlanCard> for CardView {
    fn from(card: &MealPlanCard) -> Self {
        Self {
            heading: card.heading(),
            tiles: card
                .tiles
                .iter()
                .map(|tile| CardView::tile(&card.day, tile))
                .collect(),
        }
    }
}

/// Navigator answering a tile activation with an HTTP redirect.
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    location: Option<String>,
}

impl RedirectNavigator {
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Percent-encodes one path segment. Dot-only segments are encoded too, so
/// clients don't resolve `.` or `..` against the prefix.
fn encode_segment(segment: &str) -> String {
    if !segment.is_empty() && segment.chars().all(|c| c == '.') {
        return "%2E".repeat(segment.len());
    }

    encode(segment).into_owned()
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, path: &str) {
        // The meal name is a single segment, even when it contains `/`.
        let location = match path.strip_prefix(NUTRITION_PREFIX) {
            Some(name) => format!("{NUTRITION_PREFIX}{}", encode_segment(name)),
            _ => path
                .split('/')
                .map(encode_segment)
                .collect::<Vec<_>>()
                .join("/"),
        };

        self.location = Some(location);
    }
}

impl IntoResponse for RedirectNavigator {
    fn into_response(self) -> Response {
        match self.location {
            Some(location) => Redirect::to(&location).into_response(),
            _ => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/meal-plan-card.html")]
pub struct CardTemplate {
    pub card: CardView,
}

#[derive(askama::Template)]
#[template(path = "plan.html")]
pub struct PlanTemplate {
    pub current_path: String,
    pub user_name: Option<String>,
    pub targets: Option<DailyTargets>,
    pub rationale: Option<String>,
    pub warnings: Vec<String>,
    pub cards: Vec<CardView>,
}

#[derive(askama::Template)]
#[template(path = "day.html")]
pub struct DayTemplate {
    pub current_path: String,
    pub card: CardView,
    pub totals: Option<Nutrition>,
}

/// Standalone HTML of one card.
pub fn render_card(
    template: &Template,
    card: &MealPlanCard,
) -> Result<String, askama::Error> {
    template.render_to_string(CardTemplate { card: card.into() })
}

#[tracing::instrument(skip_all)]
pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let plan = &app.plan;

    template.render(PlanTemplate {
        current_path: "plan".to_owned(),
        user_name: plan.user_name.to_owned(),
        targets: plan.targets,
        rationale: plan.rationale.to_owned(),
        warnings: plan.warnings.to_owned(),
        cards: plan.cards().iter().map(CardView::from).collect(),
    })
}

#[tracing::instrument(skip_all, fields(day = %day))]
pub async fn day(
    template: Template,
    State(app): State<AppState>,
    Path((day,)): Path<(String,)>,
) -> impl IntoResponse {
    let Some(day_plan) = app.plan.day(&day) else {
        return template.not_found();
    };

    template.render(DayTemplate {
        current_path: "plan".to_owned(),
        card: (&day_plan.card()).into(),
        totals: day_plan.totals,
    })
}

#[tracing::instrument(skip_all, fields(day = %day, label = %label))]
pub async fn activate(
    template: Template,
    State(app): State<AppState>,
    Path((day, label)): Path<(String, String)>,
) -> impl IntoResponse {
    let Some(day_plan) = app.plan.day(&day) else {
        return template.not_found();
    };

    let mut navigator = RedirectNavigator::default();
    if !day_plan.card().activate(&label, &mut navigator) {
        return template.not_found();
    }

    tracing::debug!(location = navigator.location(), "Meal tile activated");

    navigator.into_response()
}
