use serde::{Deserialize, Serialize};

use crate::diag;

/// Client visual theme, loaded from JSON at compile time. Values are CSS
/// color strings, applied to the document root as custom properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub page: PageTheme,
    pub card: CardTheme,
    pub player: PlayerTheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageTheme {
    pub background: String,
    pub header_bg: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub accent: String,
}

impl Default for PageTheme {
    fn default() -> Self {
        Self {
            background: "#030712".to_string(),
            header_bg: "rgba(17, 24, 39, 0.8)".to_string(),
            text_primary: "#f3f4f6".to_string(),
            text_secondary: "#9ca3af".to_string(),
            accent: "#818cf8".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardTheme {
    pub background: String,
    pub border: String,
    pub border_hover: String,
    pub badge_bg: String,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            background: "#111827".to_string(),
            border: "#1f2937".to_string(),
            border_hover: "rgba(99, 102, 241, 0.5)".to_string(),
            badge_bg: "#6366f1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTheme {
    pub stage_bg: String,
    pub button_bg: String,
    pub hint_bg: String,
}

impl Default for PlayerTheme {
    fn default() -> Self {
        Self {
            stage_bg: "#000000".to_string(),
            button_bg: "#1f2937".to_string(),
            hint_bg: "rgba(17, 24, 39, 0.9)".to_string(),
        }
    }
}

const THEME_JSON: &str = include_str!("../assets/theme.json");

impl Theme {
    /// Parse the bundled theme, falling back to defaults if the document
    /// is malformed.
    pub fn load() -> Self {
        match serde_json::from_str(THEME_JSON) {
            Ok(theme) => theme,
            Err(e) => {
                diag::console_warn!("theme.json invalid, using defaults: {e}");
                Self::default()
            },
        }
    }

    /// CSS custom property name/value pairs for every themed color.
    pub fn css_variables(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("--ah-bg", &self.page.background),
            ("--ah-header-bg", &self.page.header_bg),
            ("--ah-text", &self.page.text_primary),
            ("--ah-text-dim", &self.page.text_secondary),
            ("--ah-accent", &self.page.accent),
            ("--ah-card-bg", &self.card.background),
            ("--ah-card-border", &self.card.border),
            ("--ah-card-border-hover", &self.card.border_hover),
            ("--ah-badge-bg", &self.card.badge_bg),
            ("--ah-stage-bg", &self.player.stage_bg),
            ("--ah-button-bg", &self.player.button_bg),
            ("--ah-hint-bg", &self.player.hint_bg),
        ]
    }

    /// Apply the theme to the document root as CSS custom properties.
    pub fn apply(&self) {
        use wasm_bindgen::JsCast;

        let Ok(document) = crate::dom::document() else {
            return;
        };
        let Some(root) = document.document_element() else {
            return;
        };
        let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let style = root.style();
        for (name, value) in self.css_variables() {
            if let Err(e) = style.set_property(name, value) {
                diag::console_warn!("failed to set {name}: {e:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_theme_parses() {
        let theme: Theme = serde_json::from_str(THEME_JSON).expect("bundled theme must parse");
        assert!(!theme.page.accent.is_empty());
    }

    #[test]
    fn load_falls_back_to_defaults_per_section() {
        // A document naming only one section leaves the rest at defaults.
        let theme: Theme = serde_json::from_str(r##"{"page": {"accent": "#ff0000"}}"##).unwrap();
        assert_eq!(theme.page.accent, "#ff0000");
        assert_eq!(theme.card.background, CardTheme::default().background);
        assert_eq!(theme.player.stage_bg, PlayerTheme::default().stage_bg);
    }

    #[test]
    fn css_variables_cover_every_color() {
        let theme = Theme::default();
        let vars = theme.css_variables();
        assert_eq!(vars.len(), 12);
        for (name, value) in vars {
            assert!(name.starts_with("--ah-"));
            assert!(!value.is_empty());
        }
    }
}
