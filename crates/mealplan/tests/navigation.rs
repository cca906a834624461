use healthia_mealplan::{
    Meal, MealPlanCard, MealsByType, Navigator, NUTRITION_PREFIX, PLACEHOLDER_IMAGE,
};

#[derive(Default)]
struct RecordingNavigator {
    paths: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        self.paths.push(path.to_owned());
    }
}

fn week_day() -> MealsByType {
    MealsByType::new()
        .with("Desayuno", Some(Meal::new("Avena")))
        .with("Almuerzo", None)
        .with("Merienda", Some(Meal::new("Yogurt").image("x.png")))
        .with("Cena", Some(Meal::new("")))
}

#[test]
fn test_each_activation_navigates_once() {
    let card = MealPlanCard::new("Lunes", &week_day());
    let mut navigator = RecordingNavigator::default();

    card.activate("Desayuno", &mut navigator);
    card.activate("Desayuno", &mut navigator);
    card.activate("Merienda", &mut navigator);

    assert_eq!(
        navigator.paths,
        vec!["/nutrition/Avena", "/nutrition/Avena", "/nutrition/Yogurt"]
    );
}

#[test]
fn test_tiles_without_name_or_meal_never_navigate() {
    let card = MealPlanCard::new("Lunes", &week_day());
    let mut navigator = RecordingNavigator::default();

    assert!(card.activate("Cena", &mut navigator));
    assert!(!card.activate("Almuerzo", &mut navigator));
    assert!(navigator.paths.is_empty());
}

#[test]
fn test_every_tile_path_uses_prefix_and_name() {
    let card = MealPlanCard::new("Lunes", &week_day());

    for tile in card.tiles.iter().filter(|t| !t.name.is_empty()) {
        assert_eq!(tile.path(), Some(format!("{NUTRITION_PREFIX}{}", tile.name)));
    }
}

#[test]
fn test_images_fall_back_to_placeholder() {
    let card = MealPlanCard::new("Lunes", &week_day());

    let images: Vec<_> = card.tiles.iter().map(|t| t.image.as_str()).collect();
    assert_eq!(images, vec![PLACEHOLDER_IMAGE, "x.png", PLACEHOLDER_IMAGE]);
}

#[test]
fn test_only_empty_image_is_treated_as_missing() {
    let meals = MealsByType::new()
        .with("Almuerzo", Some(Meal::new("Arroz").image("")))
        .with("Cena", Some(Meal::new("Sopa").image("   ")));
    let card = MealPlanCard::new("Martes", &meals);

    assert_eq!(card.tiles[0].image, PLACEHOLDER_IMAGE);
    assert_eq!(card.tiles[1].image, "   ");
}
