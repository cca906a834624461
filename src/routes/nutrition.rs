use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use healthia_mealplan::{Nutrition, PLACEHOLDER_IMAGE};
use urlencoding::encode;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

pub struct SlotView {
    pub day: String,
    pub label: String,
    pub href: String,
}

#[derive(askama::Template)]
#[template(path = "nutrition.html")]
pub struct NutritionTemplate {
    pub current_path: String,
    pub name: String,
    pub image: String,
    pub nutrition: Option<Nutrition>,
    pub slots: Vec<SlotView>,
}

#[tracing::instrument(skip_all, fields(name = %name))]
pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Path((name,)): Path<(String,)>,
) -> impl IntoResponse {
    let Some(usage) = app.plan.find_meal(&name) else {
        return template.not_found();
    };

    let slots = usage
        .slots
        .iter()
        .map(|(day, label)| SlotView {
            day: day.to_string(),
            label: label.to_string(),
            href: format!("/plan/{}", encode(day)),
        })
        .collect();

    template.render(NutritionTemplate {
        current_path: "nutrition".to_owned(),
        name: usage.meal.name.to_owned(),
        image: usage
            .meal
            .image
            .to_owned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
        nutrition: usage.meal.nutrition,
        slots,
    })
}
