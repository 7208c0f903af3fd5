//! CSS-module resolution.
//!
//! # Responsibilities
//! - Load `*.css` files from the modules directory once at startup
//! - Rewrite every class selector to a scoped name
//! - Expose local → scoped name mappings (dashed names also in camelCase)
//! - Honor `:global` / `:local` and same-file `composes`
//!
//! # Design Decisions
//! - Development names keep the file and local name for readability:
//!   `footer-page-footer-Ab3_x`; production names are the hash alone
//! - The hash covers file and local name only, so names are stable across
//!   processes and match what the client bundle computes
//! - Declaration blocks are never rewritten (`0.5em` is not a class)
//! - A composing class maps to its own name followed by the composed
//!   names, space separated, so one `class` attribute carries them all

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::Environment;
use crate::styles::registry::StyleError;

/// Errors raised while loading CSS modules.
#[derive(Debug, Error)]
pub enum StyleModuleError {
    #[error("failed to read style modules from '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One compiled CSS module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedModule {
    file: String,
    classes: Vec<(String, String)>,
    css: String,
}

impl ScopedModule {
    /// Scoped class for a local name (dashed or camelCase).
    pub fn class(&self, local: &str) -> Result<&str, StyleError> {
        self.classes
            .iter()
            .find(|(name, _)| name == local)
            .map(|(_, scoped)| scoped.as_str())
            .ok_or_else(|| StyleError::UnknownRule {
                sheet: self.file.clone(),
                rule: local.to_string(),
            })
    }

    /// CSS text with every class selector scoped.
    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn classes(&self) -> &[(String, String)] {
        &self.classes
    }
}

/// Read-only set of CSS modules, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct StyleModules {
    modules: BTreeMap<String, ScopedModule>,
}

impl StyleModules {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every `*.css` file directly inside `dir`.
    pub fn load_dir(dir: &Path, environment: Environment) -> Result<Self, StyleModuleError> {
        let io_err = |source| StyleModuleError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("css") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let source = fs::read_to_string(&path).map_err(|source| StyleModuleError::Io {
                path: path.clone(),
                source,
            })?;
            let file = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            sources.push((file, source));
        }

        Ok(Self::from_sources(sources, environment))
    }

    /// Compile modules from in-memory `(file name, css)` pairs.
    pub fn from_sources<I, F, S>(sources: I, environment: Environment) -> Self
    where
        I: IntoIterator<Item = (F, S)>,
        F: Into<String>,
        S: AsRef<str>,
    {
        let modules = sources
            .into_iter()
            .map(|(file, source)| {
                let module = compile(file.into(), source.as_ref(), environment);
                (module.file.clone(), module)
            })
            .collect();
        Self { modules }
    }

    pub fn get(&self, file: &str) -> Result<&ScopedModule, StyleError> {
        self.modules
            .get(file)
            .ok_or_else(|| StyleError::UnknownModule(file.to_string()))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Compile one CSS module.
pub fn compile(file: String, source: &str, environment: Environment) -> ScopedModule {
    let stem = file.strip_suffix(".css").unwrap_or(&file).to_string();
    let mut locals: Vec<String> = Vec::new();

    let Rewrite { css, compositions } = rewrite_class_selectors(source, |local| {
        if !locals.iter().any(|l| l == local) {
            locals.push(local.to_string());
        }
        scoped_name(&stem, &file, local, environment)
    });

    let mut classes = Vec::with_capacity(locals.len());
    for local in &locals {
        let mut names = vec![scoped_name(&stem, &file, local, environment)];
        let mut seen = vec![local.as_str()];
        collect_composed(local, &compositions, &mut seen, &mut |class: &Composed| {
            let name = match class {
                Composed::Local(name) => scoped_name(&stem, &file, name, environment),
                Composed::Global(name) => name.clone(),
            };
            if !names.contains(&name) {
                names.push(name);
            }
        });

        let scoped = names.join(" ");
        let camel = camel_case_dashes(local);
        classes.push((local.clone(), scoped.clone()));
        if camel != *local && !locals.contains(&camel) {
            classes.push((camel, scoped));
        }
    }

    ScopedModule { file, classes, css }
}

/// Visit everything `local` composes, depth first, each local once.
fn collect_composed<'a>(
    local: &str,
    compositions: &'a [Composition],
    seen: &mut Vec<&'a str>,
    visit: &mut impl FnMut(&'a Composed),
) {
    for composition in compositions.iter().filter(|c| c.owners.iter().any(|o| o == local)) {
        for class in &composition.classes {
            visit(class);
            if let Composed::Local(name) = class {
                if !seen.contains(&name.as_str()) {
                    seen.push(name.as_str());
                    collect_composed(name, compositions, seen, visit);
                }
            }
        }
    }
}

/// Scoped class name for `local` in `file`.
pub fn scoped_name(stem: &str, file: &str, local: &str, environment: Environment) -> String {
    let hash = short_hash(&format!("{}:{}", file, local));
    match environment {
        Environment::Development => format!("{}-{}-{}", stem, local, hash),
        Environment::Production => hash,
    }
}

/// First five characters of the URL-safe base64 SHA-256, made a valid
/// identifier start.
fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let encoded = URL_SAFE_NO_PAD.encode(digest);
    let hash: String = encoded.chars().take(5).collect();
    match hash.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '-' => format!("_{}", hash),
        _ => hash,
    }
}

/// `page-footer` → `pageFooter`.
fn camel_case_dashes(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    /// Block whose body holds further rules (`@media`, `@supports`).
    Group,
    /// Block whose body holds declarations, with the local classes named
    /// in its selector.
    Declarations { owners: Vec<String> },
}

/// A class pulled in by `composes`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Composed {
    Local(String),
    Global(String),
}

/// One `composes` declaration and the selector classes it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Composition {
    owners: Vec<String>,
    classes: Vec<Composed>,
}

#[derive(Debug)]
struct Rewrite {
    css: String,
    compositions: Vec<Composition>,
}

/// Open parenthesis inside a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paren {
    Plain,
    Global,
    Local,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-' || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii()
}

fn starts_with_at(chars: &[char], i: usize, pattern: &str) -> bool {
    let mut at = i;
    for p in pattern.chars() {
        if chars.get(at) != Some(&p) {
            return false;
        }
        at += 1;
    }
    true
}

/// `:global` / `:local` with no argument, followed by a non-identifier.
fn bare_keyword(chars: &[char], i: usize, keyword: &str) -> bool {
    starts_with_at(chars, i, keyword)
        && !chars
            .get(i + keyword.chars().count())
            .copied()
            .is_some_and(|c| is_ident_char(c) || c == '(')
}

/// Parse the value of a `composes` declaration.
fn parse_composes(value: &str) -> Vec<Composed> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    match tokens.iter().position(|t| *t == "from") {
        None => tokens.iter().map(|t| Composed::Local(t.to_string())).collect(),
        Some(at) => {
            let origin = tokens[at + 1..].join(" ");
            if origin == "global" {
                tokens[..at]
                    .iter()
                    .map(|t| Composed::Global(t.to_string()))
                    .collect()
            } else {
                tracing::warn!(
                    origin = %origin,
                    "composes from another module is not supported; ignored"
                );
                Vec::new()
            }
        }
    }
}

/// Replace every `.class` in selector position with `scope(class)`.
///
/// `:global(...)` and a bare `:global` leave their classes untouched and
/// are removed from the output; `:local` does the reverse. `composes`
/// declarations are removed and returned alongside the CSS.
fn rewrite_class_selectors(source: &str, mut scope: impl FnMut(&str) -> String) -> Rewrite {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut compositions = Vec::new();
    let mut blocks: Vec<Block> = Vec::new();
    // First significant character of the current prelude, once seen.
    let mut prelude: Option<usize> = None;
    // Local classes named in the current selector.
    let mut prelude_locals: Vec<String> = Vec::new();
    let mut parens: Vec<Paren> = Vec::new();
    // Set by a bare `:global`, cleared at the next selector.
    let mut bare_global = false;
    let mut declaration_start = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Comments are copied verbatim.
        if c == '/' && chars.get(i + 1) == Some(&'*') {
            let start = i;
            i += 2;
            while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                i += 1;
            }
            i = (i + 2).min(chars.len());
            out.extend(&chars[start..i]);
            continue;
        }

        // Strings are copied verbatim.
        if c == '"' || c == '\'' {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != c {
                if chars[i] == '\\' {
                    i += 1;
                }
                i += 1;
            }
            i = (i + 1).min(chars.len());
            out.extend(&chars[start..i]);
            declaration_start = false;
            continue;
        }

        let owners = match blocks.last() {
            Some(Block::Declarations { owners }) => Some(owners),
            _ => None,
        };
        let in_declarations = owners.is_some();
        let in_at_rule = matches!(prelude, Some(start) if chars[start] == '@');
        let in_selector = !in_declarations && !in_at_rule;

        if in_declarations && declaration_start && !c.is_whitespace() {
            declaration_start = false;
            if starts_with_at(&chars, i, "composes") {
                let mut colon = i + "composes".len();
                while colon < chars.len() && chars[colon].is_whitespace() {
                    colon += 1;
                }
                if chars.get(colon) == Some(&':') {
                    let mut end = colon + 1;
                    while end < chars.len() && chars[end] != ';' && chars[end] != '}' {
                        end += 1;
                    }
                    let value: String = chars[colon + 1..end].iter().collect();
                    let owners = owners.cloned().unwrap_or_default();
                    if !owners.is_empty() {
                        compositions.push(Composition {
                            owners,
                            classes: parse_composes(&value),
                        });
                    }
                    i = if chars.get(end) == Some(&';') { end + 1 } else { end };
                    declaration_start = true;
                    continue;
                }
            }
        }

        match c {
            '{' => {
                let kind = if in_declarations {
                    Block::Declarations { owners: Vec::new() }
                } else {
                    match prelude {
                        Some(start) if chars[start] == '@' => {
                            let at_rule: String = chars[start..i].iter().collect();
                            if at_rule.starts_with("@font-face") || at_rule.starts_with("@page") {
                                Block::Declarations { owners: Vec::new() }
                            } else {
                                Block::Group
                            }
                        }
                        _ => Block::Declarations {
                            owners: std::mem::take(&mut prelude_locals),
                        },
                    }
                };
                blocks.push(kind);
                prelude = None;
                prelude_locals.clear();
                parens.clear();
                bare_global = false;
                declaration_start = true;
                out.push(c);
                i += 1;
            }
            '}' => {
                blocks.pop();
                prelude = None;
                prelude_locals.clear();
                declaration_start = matches!(blocks.last(), Some(Block::Declarations { .. }));
                out.push(c);
                i += 1;
            }
            ';' => {
                prelude = None;
                declaration_start = in_declarations;
                out.push(c);
                i += 1;
            }
            ',' if in_selector && parens.is_empty() => {
                bare_global = false;
                out.push(c);
                i += 1;
            }
            ':' if in_selector && starts_with_at(&chars, i, ":global(") => {
                prelude.get_or_insert(i);
                parens.push(Paren::Global);
                i += ":global(".len();
            }
            ':' if in_selector && starts_with_at(&chars, i, ":local(") => {
                prelude.get_or_insert(i);
                parens.push(Paren::Local);
                i += ":local(".len();
            }
            ':' if in_selector
                && (bare_keyword(&chars, i, ":global") || bare_keyword(&chars, i, ":local")) =>
            {
                prelude.get_or_insert(i);
                bare_global = chars[i + 1] == 'g';
                i += if bare_global { ":global".len() } else { ":local".len() };
                if chars.get(i).is_some_and(|c| c.is_whitespace()) {
                    i += 1;
                }
            }
            '(' if in_selector => {
                parens.push(Paren::Plain);
                out.push(c);
                i += 1;
            }
            ')' if in_selector && !parens.is_empty() => {
                if parens.pop() == Some(Paren::Plain) {
                    out.push(c);
                }
                i += 1;
            }
            '.' if in_selector && chars.get(i + 1).copied().is_some_and(is_ident_start) => {
                prelude.get_or_insert(i);
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && is_ident_char(chars[end]) {
                    end += 1;
                }
                let local: String = chars[start..end].iter().collect();
                let global = match parens.iter().rev().find(|p| **p != Paren::Plain) {
                    Some(paren) => *paren == Paren::Global,
                    None => bare_global,
                };
                out.push('.');
                if global {
                    out.push_str(&local);
                } else {
                    out.push_str(&scope(&local));
                    if !prelude_locals.contains(&local) {
                        prelude_locals.push(local);
                    }
                }
                i = end;
            }
            _ => {
                if prelude.is_none() && !c.is_whitespace() {
                    prelude = Some(i);
                }
                if !c.is_whitespace() {
                    declaration_start = false;
                }
                out.push(c);
                i += 1;
            }
        }
    }

    Rewrite { css: out, compositions }
}
