//! Meal plan domain for HealthIA
//!
//! Typed meals and slots, the weekly plan file loader, and the
//! [`MealPlanCard`] view model that renders one day of a plan.

mod card;
mod error;
mod meal;
mod plan;

pub use card::*;
pub use error::*;
pub use meal::*;
pub use plan::*;
