//! Static page shells. The dashboard body is assembled from rendered cards;
//! everything else is fixed markup.

use crate::presentation::render::{RenderedSections, escape_html};

/// Auth page with the register/login tab markup. Element identifiers match
/// the form contract the API expects (`regName`, `loginPhone`, ...).
pub fn auth_page() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>NutriDash - Sign in</title>
</head>
<body>
  <div class="tabs">
    <button class="tab active" data-target="registerForm">Register</button>
    <button class="tab" data-target="loginForm">Login</button>
  </div>
  <form id="registerForm" class="form active" method="post" action="/register">
    <input id="regName" name="name" placeholder="Name">
    <input id="regPhone" name="phone" placeholder="Phone number">
    <input id="regPassword" name="password" type="password" placeholder="Password">
    <button type="submit">Register</button>
  </form>
  <form id="loginForm" class="form" method="post" action="/login">
    <input id="loginPhone" name="phone" placeholder="Phone number">
    <input id="loginPassword" name="password" type="password" placeholder="Password">
    <button type="submit">Login</button>
  </form>
</body>
</html>
"#
}

/// Dashboard with both food containers populated.
pub fn dashboard_page(sections: &RenderedSections) -> String {
    dashboard_shell(None, sections)
}

/// Dashboard shown when the dataset could not be loaded: a notice plus two
/// empty containers. No partially rendered cards.
pub fn dashboard_failure_page(message: &str) -> String {
    dashboard_shell(Some(message), &RenderedSections::default())
}

fn dashboard_shell(notice: Option<&str>, sections: &RenderedSections) -> String {
    let notice = match notice {
        Some(message) => format!("  <p class=\"notice\">{}</p>\n", escape_html(message)),
        None => String::new(),
    };
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"UTF-8\">\n",
            "  <title>NutriDash - Dashboard</title>\n",
            "</head>\n",
            "<body>\n",
            "  <h1>Nutrition Dashboard</h1>\n",
            "  <a href=\"/logout\">Logout</a>\n",
            "{notice}",
            "  <h2>Healthy Foods</h2>\n",
            "  <div id=\"healthyFoods\">\n{healthy}</div>\n",
            "  <h2>Junk Foods</h2>\n",
            "  <div id=\"junkFoods\">\n{junk}</div>\n",
            "</body>\n",
            "</html>\n"
        ),
        notice = notice,
        healthy = join_cards(&sections.healthy),
        junk = join_cards(&sections.junk),
    )
}

fn join_cards(cards: &[String]) -> String {
    cards.iter().map(|card| format!("{}\n", card)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::food_catalog::sample_foods;
    use crate::presentation::render::render_sections;

    #[test]
    fn test_auth_page_carries_form_contract_ids() {
        let page = auth_page();
        for id in [
            "registerForm",
            "loginForm",
            "regName",
            "regPhone",
            "regPassword",
            "loginPhone",
            "loginPassword",
        ] {
            assert!(page.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
    }

    #[test]
    fn test_dashboard_page_places_cards_in_both_containers() {
        let foods = sample_foods();
        let page = dashboard_page(&render_sections(&foods));
        assert!(page.contains("id=\"healthyFoods\""));
        assert!(page.contains("id=\"junkFoods\""));
        assert_eq!(page.matches("food-card").count(), foods.len());
    }

    #[test]
    fn test_failure_page_has_notice_and_empty_containers() {
        let page = dashboard_failure_page("Failed to load nutrition data");
        assert!(page.contains("Failed to load nutrition data"));
        assert!(!page.contains("food-card"));
    }
}
