//! Turns food items into dashboard card markup.
//!
//! Each card carries three class tags: the fixed `food-card` marker, the
//! item's category, and a slug derived from its display name. The tags are
//! styling hooks only; nothing reads them back.

use crate::domain::food::{FoodCategory, FoodItem};

/// Cards partitioned into the two dashboard containers. Every input item
/// lands in exactly one of them.
#[derive(Debug, Default)]
pub struct RenderedSections {
    pub healthy: Vec<String>,
    pub junk: Vec<String>,
}

impl RenderedSections {
    pub fn card_count(&self) -> usize {
        self.healthy.len() + self.junk.len()
    }
}

/// Derives a CSS-safe identifier from a display name: lowercase, any
/// parenthesized segments stripped, literal periods removed, whitespace
/// runs collapsed to single underscores.
pub fn slugify(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    let mut depth: u32 = 0;
    for ch in name.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '.' => {}
            _ if depth == 0 => cleaned.extend(ch.to_lowercase()),
            _ => {}
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Minimal HTML escaping for text interpolated into the card template.
/// Food names and descriptions come from an external dataset and are not
/// trusted to be markup-free.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Builds the markup for a single card. Numeric fields are interpolated
/// as-is, without rounding or formatting.
pub fn food_card(item: &FoodItem) -> String {
    format!(
        concat!(
            "<div class=\"food-card {category} {slug}\">\n",
            "  <h3>{name}</h3>\n",
            "  <p>{description}</p>\n",
            "  <ul>\n",
            "    <li>Calories: {calories} kcal</li>\n",
            "    <li>Protein: {protein}g</li>\n",
            "    <li>Fat: {fat}g</li>\n",
            "    <li>Carbs: {carbs}g</li>\n",
            "  </ul>\n",
            "</div>"
        ),
        category = item.category.as_str(),
        slug = escape_html(&slugify(&item.name)),
        name = escape_html(&item.name),
        description = escape_html(&item.description),
        calories = item.calories,
        protein = item.protein,
        fat = item.fat,
        carbs = item.carbs,
    )
}

/// Renders one card per item and partitions the cards by category.
pub fn render_sections(foods: &[FoodItem]) -> RenderedSections {
    let mut sections = RenderedSections::default();
    for item in foods {
        let card = food_card(item);
        match item.category {
            FoodCategory::Healthy => sections.healthy.push(card),
            FoodCategory::Junk => sections.junk.push(card),
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: FoodCategory) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            description: "desc".to_string(),
            calories: 100,
            protein: 1.5,
            fat: 0.5,
            carbs: 20.0,
            category,
        }
    }

    #[test]
    fn test_slugify_strips_parenthetical_and_periods() {
        assert_eq!(slugify("Greek Yogurt (Low-fat)."), "greek_yogurt");
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Soft  Drink   (Cola)"), "soft_drink");
        assert_eq!(slugify("Brown Rice"), "brown_rice");
    }

    #[test]
    fn test_slugify_lowercases_plain_names() {
        assert_eq!(slugify("Apple"), "apple");
        assert_eq!(slugify("Almonds (10 pcs)"), "almonds");
    }

    #[test]
    fn test_escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html("<b>\"fish\" & 'chips'</b>"),
            "&lt;b&gt;&quot;fish&quot; &amp; &#39;chips&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_food_card_contains_class_tags_and_fields() {
        let card = food_card(&item("Greek Yogurt", FoodCategory::Healthy));
        assert!(card.contains("class=\"food-card healthy greek_yogurt\""));
        assert!(card.contains("<h3>Greek Yogurt</h3>"));
        assert!(card.contains("Calories: 100 kcal"));
        assert!(card.contains("Protein: 1.5g"));
        assert!(card.contains("Fat: 0.5g"));
        assert!(card.contains("Carbs: 20g"));
    }

    #[test]
    fn test_food_card_escapes_untrusted_text() {
        let mut evil = item("Apple", FoodCategory::Healthy);
        evil.description = "<script>alert(1)</script>".to_string();
        let card = food_card(&evil);
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_render_sections_partitions_by_category() {
        let foods = vec![
            item("Apple", FoodCategory::Healthy),
            item("Chips", FoodCategory::Junk),
            item("Salad", FoodCategory::Healthy),
        ];
        let sections = render_sections(&foods);
        assert_eq!(sections.healthy.len(), 2);
        assert_eq!(sections.junk.len(), 1);
        assert_eq!(sections.card_count(), foods.len());
        assert!(sections.healthy[0].contains("apple"));
        assert!(sections.junk[0].contains("chips"));
    }

    #[test]
    fn test_render_sections_empty_input_renders_nothing() {
        let sections = render_sections(&[]);
        assert!(sections.healthy.is_empty());
        assert!(sections.junk.is_empty());
    }
}
