use thiserror::Error;

#[derive(Error, Debug)]
pub enum MealPlanError {
    #[error("Failed to read meal plan: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid meal plan JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Meal plan generation failed: {0}")]
    GenerationFailed(String),

    #[error("Meal plan has no days")]
    EmptyPlan,
}
