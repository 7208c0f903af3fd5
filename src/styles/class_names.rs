//! Deterministic class-name generation scoped to one render.

use crate::config::Environment;

/// Generates class names for style rules attached during a render.
///
/// The counter starts at 1 for every generator, so two renders that attach
/// the same sheets in the same order produce the same names.
#[derive(Debug)]
pub struct ClassNameGenerator {
    environment: Environment,
    counter: u32,
}

impl ClassNameGenerator {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            counter: 0,
        }
    }

    /// Name for `rule` of `sheet`.
    pub fn generate(&mut self, sheet: &str, rule: &str) -> String {
        self.counter += 1;
        match self.environment {
            Environment::Development => {
                format!("{}-{}-{}", sanitize(sheet), sanitize(rule), self.counter)
            }
            Environment::Production => format!("jss{}", self.counter),
        }
    }
}

/// Create a fresh generator for one request.
pub fn create_class_name_generator(environment: Environment) -> ClassNameGenerator {
    ClassNameGenerator::new(environment)
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
        .collect()
}
