use anyhow::Result;
use healthia::{routes::plan::render_card, template::Template};
use healthia_mealplan::CardProps;

/// Prints the HTML of one meal plan card built from a props file.
pub fn render(input: &str, lang: &str) -> Result<()> {
    let content = std::fs::read_to_string(input)?;
    let props = CardProps::from_json(&content)?;

    tracing::debug!(day = %props.day, tiles = props.card().tiles.len(), "Rendering card");

    let html = render_card(&Template::new(lang), &props.card())?;
    println!("{html}");

    Ok(())
}
