//! Theme-specific class helpers for consistent styling across pages.

use crate::domain::{SortDirection, Theme};

// ============================================
// ROOT / THEME
// ============================================

pub fn root_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "app theme-light",
        Theme::Dark => "app theme-dark",
    }
}

/// Label of the toggle, naming the theme it switches to.
pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "🌙 Dark",
        Theme::Dark => "☀️ Light",
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn mode_button(active: bool) -> &'static str {
    if active {
        "btn btn-segment btn-segment-active"
    } else {
        "btn btn-segment"
    }
}

pub fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "↑ Ascending",
        SortDirection::Desc => "↓ Descending",
    }
}

// ============================================
// CATEGORY BADGES
// ============================================

/// Badge class per known category; unknown categories share a neutral style.
pub fn category_badge(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "hosting" => "badge badge-hosting",
        "llm/ai" => "badge badge-ai",
        "database" => "badge badge-database",
        "email" => "badge badge-email",
        _ => "badge badge-neutral",
    }
}

pub fn card_class(cheapest: bool) -> &'static str {
    if cheapest {
        "card card-cheapest"
    } else {
        "card"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_get_their_own_badge() {
        assert_eq!(category_badge("Hosting"), "badge badge-hosting");
        assert_eq!(category_badge("LLM/AI"), "badge badge-ai");
        assert_eq!(category_badge("email"), "badge badge-email");
    }

    #[test]
    fn unknown_category_falls_back_to_neutral() {
        assert_eq!(category_badge("Monitoring"), "badge badge-neutral");
        assert_eq!(category_badge(""), "badge badge-neutral");
    }

    #[test]
    fn toggle_names_the_other_theme() {
        assert!(toggle_label(Theme::Light).contains("Dark"));
        assert!(toggle_label(Theme::Dark).contains("Light"));
        assert_ne!(root_class(Theme::Light), root_class(Theme::Dark));
    }
}
