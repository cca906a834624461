use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, MapAccess, Visitor},
};
use std::{fmt, marker::PhantomData, path::Path};
use strum::VariantArray;

use crate::{Meal, MealPlanCard, MealPlanError, MealType, MealsByType, Nutrition, meal::non_empty};

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct DailyTargets {
    #[serde(rename = "calorias_diarias_recomendadas", default)]
    pub energy_kcal: f32,
    #[serde(rename = "proteinas_gramos_diarios", default)]
    pub protein_g: f32,
    #[serde(rename = "carbohidratos_gramos_diarios", default)]
    pub carbohydrates_g: f32,
    #[serde(rename = "grasas_gramos_diarios", default)]
    pub fat_g: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DayPlan {
    pub day: String,
    pub meals: MealsByType,
    pub totals: Option<Nutrition>,
}

impl DayPlan {
    pub fn card(&self) -> MealPlanCard {
        MealPlanCard::new(self.day.to_owned(), &self.meals)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeeklyPlan {
    pub user_name: Option<String>,
    pub targets: Option<DailyTargets>,
    pub rationale: Option<String>,
    pub warnings: Vec<String>,
    pub days: Vec<DayPlan>,
}

/// Where a meal shows up in a plan.
#[derive(Debug, PartialEq)]
pub struct MealUsage<'a> {
    pub meal: &'a Meal,
    pub slots: Vec<(&'a str, &'a str)>,
}

impl WeeklyPlan {
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MealPlanError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let plan = Self::from_json(&content)?;

        tracing::info!(days = plan.days.len(), "Meal plan loaded");

        Ok(plan)
    }

    pub fn from_json(content: &str) -> Result<Self, MealPlanError> {
        let file: PlanFile = serde_json::from_str(content)?;

        let days = match (file.plan_semanal, file.error) {
            (Some(days), _) => days.0,
            (_, Some(err)) => return Err(MealPlanError::GenerationFailed(err)),
            _ => Vec::new(),
        };

        if days.is_empty() {
            return Err(MealPlanError::EmptyPlan);
        }

        let (user_name, targets) = match file.usuario {
            Some(user) => (user.nombre, user.datos_calculados),
            _ => (None, None),
        };

        Ok(Self {
            user_name,
            targets,
            rationale: file.justificacion_general.filter(|r| !r.trim().is_empty()),
            warnings: file.advertencias,
            days: days
                .into_iter()
                .map(|(day, entry)| entry.into_day_plan(day))
                .collect(),
        })
    }

    /// Day lookup, ignoring case (`lunes` finds `Lunes`).
    pub fn day(&self, day: &str) -> Option<&DayPlan> {
        let day = day.to_lowercase();

        self.days.iter().find(|d| d.day.to_lowercase() == day)
    }

    pub fn cards(&self) -> Vec<MealPlanCard> {
        self.days.iter().map(DayPlan::card).collect()
    }

    pub fn find_meal(&self, name: &str) -> Option<MealUsage<'_>> {
        let mut usage: Option<MealUsage<'_>> = None;

        for day in &self.days {
            for (label, meal) in day.meals.meals().filter(|(_, m)| m.name == name) {
                match usage.as_mut() {
                    Some(usage) => usage.slots.push((day.day.as_str(), label)),
                    _ => {
                        usage = Some(MealUsage {
                            meal,
                            slots: vec![(day.day.as_str(), label)],
                        })
                    }
                }
            }
        }

        usage
    }
}

/// Input of a single card: a day label and its meals.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CardProps {
    pub day: String,
    pub meals: MealsByType,
}

impl CardProps {
    pub fn from_json(content: &str) -> Result<Self, MealPlanError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn card(&self) -> MealPlanCard {
        MealPlanCard::new(self.day.to_owned(), &self.meals)
    }
}

#[derive(Deserialize)]
struct PlanFile {
    #[serde(default)]
    usuario: Option<PlanUser>,
    #[serde(default)]
    justificacion_general: Option<String>,
    #[serde(default)]
    plan_semanal: Option<Ordered<PlanDay>>,
    #[serde(default)]
    advertencias: Vec<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct PlanUser {
    #[serde(default)]
    nombre: Option<String>,
    #[serde(default)]
    datos_calculados: Option<DailyTargets>,
}

#[derive(Deserialize)]
struct PlanDay {
    #[serde(default)]
    desayuno: Option<PlanMeal>,
    #[serde(default)]
    almuerzo: Option<PlanMeal>,
    #[serde(default)]
    merienda: Option<PlanMeal>,
    #[serde(default)]
    cena: Option<PlanMeal>,
    #[serde(default)]
    totales_dia: Option<Nutrition>,
}

impl PlanDay {
    fn into_day_plan(mut self, day: String) -> DayPlan {
        let meals = MealType::VARIANTS
            .iter()
            .map(|meal_type| {
                let meal = self.take(*meal_type).map(Meal::from);
                (meal_type.label().to_owned(), meal)
            })
            .collect();

        DayPlan {
            day,
            meals,
            totals: self.totales_dia,
        }
    }

    fn take(&mut self, meal_type: MealType) -> Option<PlanMeal> {
        match meal_type {
            MealType::Breakfast => self.desayuno.take(),
            MealType::Lunch => self.almuerzo.take(),
            MealType::Snack => self.merienda.take(),
            MealType::Dinner => self.cena.take(),
        }
    }
}

#[derive(Deserialize)]
struct PlanMeal {
    #[serde(default)]
    nombre: String,
    #[serde(default, deserialize_with = "non_empty")]
    imagen_url: Option<String>,
    #[serde(flatten)]
    nutrition: Nutrition,
}

impl From<PlanMeal> for Meal {
    fn from(value: PlanMeal) -> Self {
        Meal {
            name: value.nombre,
            image: value.imagen_url,
            nutrition: Some(value.nutrition),
        }
    }
}

/// JSON object kept in document order.
struct Ordered<V>(Vec<(String, V)>);

impl<'de, V: DeserializeOwned> Deserialize<'de> for Ordered<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: DeserializeOwned> Visitor<'de> for OrderedVisitor<V> {
            type Value = Ordered<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or_default());
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }

                Ok(Ordered(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}
