//! Style capture registry.
//!
//! # Responsibilities
//! - Record every sheet attached while components render
//! - Hand back the generated class names for each rule
//! - Serialize captured rules into one stylesheet, in attach order
//!
//! # Design Decisions
//! - One registry per request, never shared
//! - Attaching a sheet name twice in one render reuses the first attachment
//! - `serialize` consumes the registry, so it runs exactly once

use thiserror::Error;

use crate::styles::class_names::ClassNameGenerator;

/// Lookup failures for generated or scoped class names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("style sheet '{sheet}' has no rule '{rule}'")]
    UnknownRule { sheet: String, rule: String },

    #[error("style module '{0}' is not loaded")]
    UnknownModule(String),
}

/// A single rule: a key local to its sheet plus CSS declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub key: String,
    pub declarations: Vec<(String, String)>,
}

/// A named group of rules emitted by one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    name: String,
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, key: impl Into<String>, declarations: &[(&str, &str)]) -> Self {
        self.rules.push(StyleRule {
            key: key.into(),
            declarations: declarations
                .iter()
                .map(|(property, value)| (property.to_string(), value.to_string()))
                .collect(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }
}

/// Rule key → generated class name for one attached sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap {
    sheet: String,
    classes: Vec<(String, String)>,
}

impl ClassMap {
    pub fn get(&self, key: &str) -> Result<&str, StyleError> {
        self.classes
            .iter()
            .find(|(rule, _)| rule == key)
            .map(|(_, class)| class.as_str())
            .ok_or_else(|| StyleError::UnknownRule {
                sheet: self.sheet.clone(),
                rule: key.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug)]
struct Attached {
    name: String,
    classes: ClassMap,
    css: String,
}

/// Per-request accumulator of style sheets.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    attached: Vec<Attached>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a sheet, generating class names for its rules.
    pub fn attach(&mut self, sheet: &StyleSheet, generator: &mut ClassNameGenerator) -> ClassMap {
        if let Some(existing) = self.find(&sheet.name) {
            return existing.classes.clone();
        }

        let classes: Vec<(String, String)> = sheet
            .rules
            .iter()
            .map(|rule| (rule.key.clone(), generator.generate(&sheet.name, &rule.key)))
            .collect();

        let mut css = String::new();
        for (rule, (_, class)) in sheet.rules.iter().zip(&classes) {
            if !css.is_empty() {
                css.push('\n');
            }
            css.push('.');
            css.push_str(class);
            css.push_str(" {\n");
            for (property, value) in &rule.declarations {
                css.push_str("  ");
                css.push_str(property);
                css.push_str(": ");
                css.push_str(value);
                css.push_str(";\n");
            }
            css.push('}');
        }

        let classes = ClassMap {
            sheet: sheet.name.clone(),
            classes,
        };
        self.attached.push(Attached {
            name: sheet.name.clone(),
            classes: classes.clone(),
            css,
        });
        classes
    }

    /// Attach pre-scoped CSS (a CSS module) under `name`.
    ///
    /// Returns false when `name` was already attached.
    pub fn attach_css(&mut self, name: &str, css: &str, classes: &[(String, String)]) -> bool {
        if self.find(name).is_some() {
            return false;
        }
        self.attached.push(Attached {
            name: name.to_string(),
            classes: ClassMap {
                sheet: name.to_string(),
                classes: classes.to_vec(),
            },
            css: css.trim().to_string(),
        });
        true
    }

    /// Sheet names in attach order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.attached.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Concatenate every captured sheet in attach order.
    pub fn serialize(self) -> String {
        self.attached
            .into_iter()
            .map(|a| a.css)
            .filter(|css| !css.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn find(&self, name: &str) -> Option<&Attached> {
        self.attached.iter().find(|a| a.name == name)
    }
}

/// Create a fresh registry for one request.
pub fn create_registry() -> StyleRegistry {
    StyleRegistry::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn header_sheet() -> StyleSheet {
        StyleSheet::new("Header")
            .rule("root", &[("color", "#fff"), ("padding", "8px")])
            .rule("title", &[("font-size", "20px")])
    }

    #[test]
    fn test_attach_and_serialize() {
        let mut registry = create_registry();
        let mut generator = ClassNameGenerator::new(Environment::Development);

        let classes = registry.attach(&header_sheet(), &mut generator);
        assert_eq!(classes.get("root").unwrap(), "Header-root-1");
        assert_eq!(classes.get("title").unwrap(), "Header-title-2");

        assert_eq!(
            registry.serialize(),
            ".Header-root-1 {\n  color: #fff;\n  padding: 8px;\n}\n.Header-title-2 {\n  font-size: 20px;\n}"
        );
    }

    #[test]
    fn test_attach_is_idempotent_per_name() {
        let mut registry = create_registry();
        let mut generator = ClassNameGenerator::new(Environment::Production);

        let first = registry.attach(&header_sheet(), &mut generator);
        let second = registry.attach(&header_sheet(), &mut generator);

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_insertion_order() {
        let mut registry = create_registry();
        let mut generator = ClassNameGenerator::new(Environment::Production);

        registry.attach(&StyleSheet::new("B").rule("r", &[("margin", "0")]), &mut generator);
        registry.attach_css("module:a.css", "._x1 { color: red; }\n", &[]);
        registry.attach(&StyleSheet::new("A").rule("r", &[("margin", "1px")]), &mut generator);

        assert_eq!(registry.sheet_names(), vec!["B", "module:a.css", "A"]);
        let css = registry.serialize();
        let b = css.find(".jss1").unwrap();
        let module = css.find("._x1").unwrap();
        let a = css.find(".jss2").unwrap();
        assert!(b < module && module < a);
    }

    #[test]
    fn test_unknown_rule() {
        let mut registry = create_registry();
        let mut generator = ClassNameGenerator::new(Environment::Production);
        let classes = registry.attach(&header_sheet(), &mut generator);

        assert_eq!(
            classes.get("missing"),
            Err(StyleError::UnknownRule {
                sheet: "Header".into(),
                rule: "missing".into()
            })
        );
    }

    #[test]
    fn test_empty_registry_serializes_empty() {
        assert_eq!(create_registry().serialize(), "");
    }
}
