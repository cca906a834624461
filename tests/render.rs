use healthia::{routes::plan::render_card, template::Template};
use healthia_mealplan::{CardProps, PLACEHOLDER_IMAGE, WeeklyPlan};
use temp_dir::TempDir;

#[test]
fn test_render_card_from_props() {
    let props = CardProps::from_json(
        r#"{
            "day": "Lunes",
            "meals": {
                "Desayuno": {"name": "Avena"},
                "Almuerzo": null,
                "Merienda": {"name": "Yogurt", "image": "x.png"}
            }
        }"#,
    )
    .unwrap();

    let html = render_card(&Template::new("es"), &props.card()).unwrap();

    assert!(html.contains(r#"<h3 class="meal-plan-day">Menú para Lunes</h3>"#));
    assert_eq!(html.matches(r#"class="meal-plan-item "#).count(), 2);
    assert!(html.contains(&format!(r#"src="{PLACEHOLDER_IMAGE}""#)));
    assert!(html.contains(r#"src="x.png""#));
    assert!(html.contains(r#"href="/plan/Lunes/meals/Desayuno""#));
    assert!(html.find("Avena") < html.find("Yogurt"));

    assert_eq!(html, render_card(&Template::new("es"), &props.card()).unwrap());
}

#[test]
fn test_render_escapes_meal_names() {
    let props =
        CardProps::from_json(r#"{"day": "Lunes", "meals": {"Cena": {"name": "<b>Sopa</b>"}}}"#)
            .unwrap();

    let html = render_card(&Template::new("es"), &props.card()).unwrap();

    assert!(!html.contains("<b>Sopa</b>"));
    assert!(html.contains("&#60;b&#62;Sopa&#60;/b&#62;"));
}

#[test]
fn test_load_plan_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("plan_alimenticio.json");
    std::fs::write(&path, include_str!("fixtures/plan.json")).unwrap();

    let plan = WeeklyPlan::load(&path).unwrap();
    assert_eq!(plan.days.len(), 3);
    assert_eq!(plan.user_name.as_deref(), Some("Ana"));
}

#[test]
fn test_load_missing_plan_fails() {
    let dir = TempDir::new().unwrap();

    assert!(WeeklyPlan::load(dir.child("missing.json")).is_err());
}
