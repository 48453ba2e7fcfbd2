//! Template rendering for sprout.
//! Placeholders are plain tokens replaced literally; there is no expression
//! language, no escaping and no conditionals.
use indexmap::IndexMap;

use crate::bindings::{build_inputs, build_outputs};
use crate::constants::tokens;
use crate::model::Component;
use crate::naming::{to_camel, to_pascal};

/// Ordered mapping from placeholder token to replacement value.
///
/// Entries are applied in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementSet {
    entries: IndexMap<String, String>,
}

impl ReplacementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set for one component node: dash name, camel name, pascal
    /// name, input bindings and output bindings, in that order.
    pub fn for_component(component: &Component, app_prefix: &str) -> Self {
        let mut set = Self::new();
        set.insert(tokens::DASH_NAME, &component.name);
        set.insert(tokens::CAMEL_NAME, to_camel(&component.name));
        set.insert(tokens::PASCAL_NAME, to_pascal(&component.name));
        set.insert(tokens::INPUTS, build_inputs(&component.inputs, app_prefix));
        set.insert(tokens::OUTPUTS, build_outputs(&component.outputs, app_prefix));
        set
    }

    /// Adds or replaces a token. A replaced token keeps its original position.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, token: K, value: V) {
        self.entries.insert(token.into(), value.into());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (token, value) in iter {
            set.insert(token, value);
        }
        set
    }
}

/// Replaces every occurrence of every token in `template`, one entry at a
/// time in the set's order.
///
/// A value that contains a later token will be rewritten by that later entry.
pub fn substitute(template: &str, replacements: &ReplacementSet) -> String {
    replacements
        .iter()
        .filter(|(token, _)| !token.is_empty())
        .fold(template.to_string(), |text, (token, value)| text.replace(token, value))
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders template text with the given replacements.
    fn render(&self, template: &str, replacements: &ReplacementSet) -> String;
}

/// Renderer doing literal, order-dependent token replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralRenderer;

impl LiteralRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for LiteralRenderer {
    fn render(&self, template: &str, replacements: &ReplacementSet) -> String {
        substitute(template, replacements)
    }
}
