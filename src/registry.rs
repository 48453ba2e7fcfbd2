//! Mapping from generated-file kind to template source and output suffix.

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Category of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedFileKind {
    /// Component logic
    Component,
    /// View markup
    Html,
    /// Module wiring
    Module,
    /// Stylesheet
    Style,
    /// Test spec
    Spec,
    /// Data-access store
    Store,
}

impl GeneratedFileKind {
    /// Every kind, in registry order.
    pub const ALL: [GeneratedFileKind; 6] = [
        GeneratedFileKind::Component,
        GeneratedFileKind::Html,
        GeneratedFileKind::Module,
        GeneratedFileKind::Style,
        GeneratedFileKind::Spec,
        GeneratedFileKind::Store,
    ];

    /// Kinds emitted for every component node, in emission order.
    pub const COMPONENT_FILES: [GeneratedFileKind; 5] = [
        GeneratedFileKind::Component,
        GeneratedFileKind::Html,
        GeneratedFileKind::Module,
        GeneratedFileKind::Style,
        GeneratedFileKind::Spec,
    ];
}

impl fmt::Display for GeneratedFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeneratedFileKind::Component => "component",
            GeneratedFileKind::Html => "html",
            GeneratedFileKind::Module => "module",
            GeneratedFileKind::Style => "style",
            GeneratedFileKind::Spec => "spec",
            GeneratedFileKind::Store => "store",
        };
        f.write_str(name)
    }
}

/// Where a kind's template lives and what its output file ends with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateEntry {
    /// Template path, relative to the template root unless absolute
    pub template: PathBuf,
    /// Appended to the node name to form the output file name
    pub suffix: String,
}

impl TemplateEntry {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(template: P, suffix: S) -> Self {
        Self { template: template.into(), suffix: suffix.into() }
    }
}

/// Lookup table from [`GeneratedFileKind`] to [`TemplateEntry`].
///
/// The default table points at the bundled templates. Entries can be replaced
/// or removed, so lookups are fallible even though the kind set is closed.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    entries: IndexMap<GeneratedFileKind, TemplateEntry>,
}

impl TypeRegistry {
    /// Creates a registry from an explicit table.
    pub fn new(entries: IndexMap<GeneratedFileKind, TemplateEntry>) -> Self {
        Self { entries }
    }

    /// Replaces the entries named in `overrides`, keeping all others.
    pub fn with_overrides(mut self, overrides: IndexMap<GeneratedFileKind, TemplateEntry>) -> Self {
        for (kind, entry) in overrides {
            debug!("Overriding {} template with '{}'", kind, entry.template.display());
            self.entries.insert(kind, entry);
        }
        self
    }

    /// Returns the entry for `kind`.
    ///
    /// # Errors
    /// * `Error::UnknownKind` if nothing is registered for `kind`
    pub fn lookup(&self, kind: GeneratedFileKind) -> Result<&TemplateEntry> {
        self.entries.get(&kind).ok_or(Error::UnknownKind { kind })
    }

    /// Checks that every kind has an entry.
    pub fn validate(&self) -> Result<()> {
        GeneratedFileKind::ALL.iter().try_for_each(|kind| self.lookup(*kind).map(|_| ()))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        let entries = IndexMap::from([
            (
                GeneratedFileKind::Component,
                TemplateEntry::new("component.ts.tpl", ".component.ts"),
            ),
            (
                GeneratedFileKind::Html,
                TemplateEntry::new("component.html.tpl", ".component.html"),
            ),
            (GeneratedFileKind::Module, TemplateEntry::new("module.ts.tpl", ".module.ts")),
            (
                GeneratedFileKind::Style,
                TemplateEntry::new("component.scss.tpl", ".component.scss"),
            ),
            (
                GeneratedFileKind::Spec,
                TemplateEntry::new("component.spec.ts.tpl", ".component.spec.ts"),
            ),
            (GeneratedFileKind::Store, TemplateEntry::new("store.ts.tpl", ".store.ts")),
        ]);
        Self::new(entries)
    }
}
