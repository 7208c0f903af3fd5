//! Theme palette shared by component style functions.

use crate::config::{ThemeConfig, ThemeKind};

/// Colours derived once from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub kind: ThemeKind,
    pub primary: String,
    pub accent: String,
    /// Text drawn on top of `primary`/`accent`.
    pub contrast_text: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub divider: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub spacing_unit: u32,
    pub font_family: String,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let (background, surface, text, divider) = match config.kind {
            ThemeKind::Light => ("#fafafa", "#fff", "rgba(0, 0, 0, 0.87)", "rgba(0, 0, 0, 0.12)"),
            ThemeKind::Dark => ("#303030", "#424242", "#fff", "rgba(255, 255, 255, 0.12)"),
        };

        Self {
            palette: Palette {
                kind: config.kind,
                primary: config.primary.clone(),
                accent: config.accent.clone(),
                contrast_text: "#fff".to_string(),
                background: background.to_string(),
                surface: surface.to_string(),
                text: text.to_string(),
                divider: divider.to_string(),
            },
            spacing_unit: 8,
            font_family: "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif".to_string(),
        }
    }

    /// Multiples of the spacing unit as a CSS length.
    pub fn spacing(&self, factor: u32) -> String {
        format!("{}px", self.spacing_unit * factor)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_light_green_red() {
        let theme = Theme::default();
        assert_eq!(theme.palette.kind, ThemeKind::Light);
        assert_eq!(theme.palette.primary, "#4caf50");
        assert_eq!(theme.palette.accent, "#f44336");
        assert_eq!(theme.palette.background, "#fafafa");
    }

    #[test]
    fn test_dark_kind() {
        let theme = Theme::from_config(&ThemeConfig {
            kind: ThemeKind::Dark,
            ..Default::default()
        });
        assert_eq!(theme.palette.text, "#fff");
        assert_eq!(theme.spacing(3), "24px");
    }
}
