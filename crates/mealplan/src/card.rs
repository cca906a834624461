use crate::{Meal, MealType, MealsByType, Nutrition};

pub const NUTRITION_PREFIX: &str = "/nutrition/";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100";
pub const HEADING_PREFIX: &str = "Menú para";

/// Receives navigation requests issued by a tile.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, path: &str) {
        self(path)
    }
}

/// One rendered meal of a [`MealPlanCard`].
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub label: String,
    pub meal_type: Option<MealType>,
    pub name: String,
    pub image: String,
    pub nutrition: Option<Nutrition>,
}

impl Tile {
    fn new(label: &str, meal: &Meal) -> Self {
        Self {
            label: label.to_owned(),
            meal_type: MealType::from_label(label),
            name: meal.name.to_owned(),
            image: meal
                .image
                .to_owned()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
            nutrition: meal.nutrition,
        }
    }

    /// List key, unique even when a name repeats across slots.
    pub fn key(&self) -> String {
        format!("{}-{}", self.type_key(), self.name)
    }

    pub fn type_key(&self) -> &str {
        match self.meal_type {
            Some(meal_type) => <&'static str>::from(meal_type),
            _ => &self.label,
        }
    }

    /// Detail path of the meal; `None` when the meal has no name.
    pub fn path(&self) -> Option<String> {
        if self.name.is_empty() {
            return None;
        }

        Some(format!("{NUTRITION_PREFIX}{}", self.name))
    }

    pub fn activate<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        let Some(path) = self.path() else {
            tracing::debug!(label = %self.label, "Tile without meal name activated");
            return;
        };

        navigator.navigate(&path);
    }
}

/// One day of a meal plan: a heading and a grid of tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct MealPlanCard {
    pub day: String,
    pub tiles: Vec<Tile>,
}

impl MealPlanCard {
    pub fn new(day: impl Into<String>, meals: &MealsByType) -> Self {
        let tiles = meals
            .meals()
            .map(|(label, meal)| Tile::new(label, meal))
            .collect();

        Self {
            day: day.into(),
            tiles,
        }
    }

    pub fn heading(&self) -> String {
        format!("{HEADING_PREFIX} {}", self.day)
    }

    pub fn tile(&self, label: &str) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.label == label)
    }

    /// Activates the tile of `label`. Returns `false` when the card has no
    /// tile for it.
    pub fn activate<N: Navigator + ?Sized>(&self, label: &str, navigator: &mut N) -> bool {
        match self.tile(label) {
            Some(tile) => {
                tile.activate(navigator);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunes() -> MealsByType {
        serde_json::from_str(
            r#"{
                "Desayuno": {"name": "Avena"},
                "Almuerzo": null,
                "Merienda": {"name": "Yogurt", "image": "x.png"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lunes_card() {
        let card = MealPlanCard::new("Lunes", &lunes());

        assert_eq!(card.heading(), "Menú para Lunes");
        assert_eq!(card.tiles.len(), 2);
        assert_eq!(card.tiles[0].name, "Avena");
        assert_eq!(card.tiles[0].image, PLACEHOLDER_IMAGE);
        assert_eq!(card.tiles[1].name, "Yogurt");
        assert_eq!(card.tiles[1].image, "x.png");
        assert!(card.tile("Almuerzo").is_none());

        let mut paths = Vec::new();
        assert!(card.activate("Desayuno", &mut |p: &str| paths.push(p.to_owned())));
        assert_eq!(paths, vec!["/nutrition/Avena"]);
    }

    #[test]
    fn test_empty_name_does_not_navigate() {
        let meals = MealsByType::new().with("Cena", Some(Meal::new("")));
        let card = MealPlanCard::new("Martes", &meals);

        let mut calls = 0;
        assert!(card.activate("Cena", &mut |_: &str| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_unknown_slot_is_not_activated() {
        let card = MealPlanCard::new("Lunes", &lunes());

        let mut calls = 0;
        assert!(!card.activate("Almuerzo", &mut |_: &str| calls += 1));
        assert!(!card.activate("Cena", &mut |_: &str| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_name_is_used_verbatim() {
        let meals = MealsByType::new().with("Cena", Some(Meal::new("Pollo al horno")));
        let card = MealPlanCard::new("Jueves", &meals);

        assert_eq!(card.tiles[0].path().as_deref(), Some("/nutrition/Pollo al horno"));
    }

    #[test]
    fn test_tile_keys() {
        let meals = MealsByType::new()
            .with("Almuerzo", Some(Meal::new("Ensalada")))
            .with("Cena", Some(Meal::new("Ensalada")))
            .with("Brunch", Some(Meal::new("Huevos")));
        let card = MealPlanCard::new("Viernes", &meals);

        let keys: Vec<_> = card.tiles.iter().map(Tile::key).collect();
        assert_eq!(keys, vec!["lunch-Ensalada", "dinner-Ensalada", "Brunch-Huevos"]);
    }

    #[test]
    fn test_card_is_pure() {
        let meals = lunes();
        assert_eq!(
            MealPlanCard::new("Lunes", &meals),
            MealPlanCard::new("Lunes", &meals)
        );
    }
}
