//! Theme-driven style sheets for the application components.

use crate::styles::{StyleSheet, Theme};

pub fn layout(theme: &Theme) -> StyleSheet {
    let p = &theme.palette;
    StyleSheet::new("Layout")
        .rule(
            "root",
            &[
                ("min-height", "100vh"),
                ("background-color", p.background.as_str()),
                ("color", p.text.as_str()),
                ("font-family", theme.font_family.as_str()),
            ],
        )
        .rule(
            "header",
            &[
                ("display", "flex"),
                ("align-items", "center"),
                ("padding", format!("0 {}", theme.spacing(3)).as_str()),
                ("height", "64px"),
                ("background-color", p.primary.as_str()),
                ("color", p.contrast_text.as_str()),
            ],
        )
        .rule(
            "title",
            &[
                ("margin", "0"),
                ("font-size", "1.25rem"),
                ("font-weight", "500"),
            ],
        )
        .rule("drawer", &[("display", "none")])
        .rule(
            "drawerOpen",
            &[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("padding", theme.spacing(2).as_str()),
                ("background-color", p.surface.as_str()),
                ("border-bottom", format!("1px solid {}", p.divider).as_str()),
            ],
        )
        .rule(
            "link",
            &[
                ("color", "inherit"),
                ("text-decoration", "none"),
                ("padding", format!("{} 0", theme.spacing(1)).as_str()),
            ],
        )
        .rule(
            "linkActive",
            &[("color", p.accent.as_str()), ("font-weight", "500")],
        )
        .rule(
            "content",
            &[
                ("padding", theme.spacing(3).as_str()),
                ("max-width", "960px"),
            ],
        )
}

pub fn posts(theme: &Theme) -> StyleSheet {
    let p = &theme.palette;
    StyleSheet::new("Posts")
        .rule(
            "list",
            &[("list-style", "none"), ("padding", "0"), ("margin", "0")],
        )
        .rule(
            "item",
            &[
                ("padding", theme.spacing(2).as_str()),
                ("margin-bottom", theme.spacing(1).as_str()),
                ("background-color", p.surface.as_str()),
                ("border", format!("1px solid {}", p.divider).as_str()),
            ],
        )
        .rule(
            "link",
            &[
                ("color", p.primary.as_str()),
                ("text-decoration", "none"),
            ],
        )
        .rule(
            "empty",
            &[("font-style", "italic"), ("color", p.text.as_str())],
        )
}

pub fn article(theme: &Theme) -> StyleSheet {
    StyleSheet::new("Article")
        .rule(
            "heading",
            &[("margin", format!("0 0 {}", theme.spacing(2)).as_str())],
        )
        .rule("body", &[("line-height", "1.6")])
        .rule("back", &[("color", theme.palette.primary.as_str())])
}

pub fn not_found(theme: &Theme) -> StyleSheet {
    StyleSheet::new("NotFound")
        .rule(
            "root",
            &[
                ("text-align", "center"),
                ("padding", theme.spacing(6).as_str()),
            ],
        )
        .rule(
            "code",
            &[
                ("font-size", "4rem"),
                ("color", theme.palette.accent.as_str()),
                ("margin", "0"),
            ],
        )
}
