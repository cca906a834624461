use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::fmt;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// Canonical meal slot. The string form (`breakfast`, `lunch`, ...) is the
/// meal-type key; [`MealType::label`] is the caller-facing label.
#[derive(
    EnumString, VariantArray, Display, AsRefStr, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Desayuno",
            MealType::Lunch => "Almuerzo",
            MealType::Snack => "Merienda",
            MealType::Dinner => "Cena",
        }
    }

    /// Exact lookup of a label such as `Desayuno`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::VARIANTS.iter().find(|t| t.label() == label).copied()
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Nutrition {
    #[serde(rename = "energia_kcal", default)]
    pub energy_kcal: f32,
    #[serde(rename = "proteinas_g", default)]
    pub protein_g: f32,
    #[serde(rename = "carbohidratos_g", default)]
    pub carbohydrates_g: f32,
    #[serde(rename = "grasas_g", default)]
    pub fat_g: f32,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Meal {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

impl Meal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        self.image = (!image.is_empty()).then_some(image);
        self
    }

    pub fn nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = Some(nutrition);
        self
    }
}

/// Empty image URIs count as "no image".
pub(crate) fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.filter(|v| !v.is_empty()))
}

/// Meals of one day keyed by meal-type label, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MealsByType(Vec<(String, Option<Meal>)>);

impl MealsByType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the meal of a slot. An existing label keeps its position.
    pub fn insert(&mut self, label: impl Into<String>, meal: Option<Meal>) {
        let label = label.into();

        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = meal,
            _ => self.0.push((label, meal)),
        }
    }

    pub fn with(mut self, label: impl Into<String>, meal: Option<Meal>) -> Self {
        self.insert(label, meal);
        self
    }

    pub fn get(&self, label: &str) -> Option<&Meal> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .and_then(|(_, meal)| meal.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Meal>)> {
        self.0.iter().map(|(l, m)| (l.as_str(), m.as_ref()))
    }

    pub fn meals(&self) -> impl Iterator<Item = (&str, &Meal)> {
        self.iter().filter_map(|(l, m)| m.map(|m| (l, m)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Option<Meal>)> for MealsByType {
    fn from_iter<T: IntoIterator<Item = (String, Option<Meal>)>>(iter: T) -> Self {
        let mut meals = MealsByType::new();
        for (label, meal) in iter {
            meals.insert(label, meal);
        }

        meals
    }
}

impl<'de> Deserialize<'de> for MealsByType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MealsVisitor;

        impl<'de> Visitor<'de> for MealsVisitor {
            type Value = MealsByType;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of meal-type label to meal")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut meals = MealsByType::new();
                while let Some((label, meal)) = map.next_entry::<String, Option<Meal>>()? {
                    meals.insert(label, meal);
                }

                Ok(meals)
            }
        }

        deserializer.deserialize_map(MealsVisitor)
    }
}
