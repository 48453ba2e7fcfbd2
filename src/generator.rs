//! Tree walk that turns a component tree into directories and files.
//!
//! The output root is wiped and recreated, then every component is visited
//! depth-first. Each visit gets its parent directory as an explicit path and
//! its own freshly built [`ReplacementSet`], so the process working directory
//! is never touched and no state is shared between nodes.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::emitter::FileEmitter;
use crate::error::{Error, Result};
use crate::model::{Component, Store};
use crate::registry::{GeneratedFileKind, TypeRegistry};
use crate::renderer::{ReplacementSet, TemplateRenderer};

/// Everything created by a run, in creation order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Deletes `output_dir` if it exists and recreates it empty. A regular file
/// at that path is removed as well.
///
/// # Errors
/// * `Error::SetupError` if either step fails
pub fn prepare_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    let setup_error = |source| Error::SetupError { output_dir: output_dir.to_path_buf(), source };

    if output_dir.is_dir() {
        debug!("Removing existing output directory '{}'", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(setup_error)?;
    } else if output_dir.exists() {
        debug!("Removing file in place of output directory '{}'", output_dir.display());
        fs::remove_file(output_dir).map_err(setup_error)?;
    }
    fs::create_dir_all(output_dir).map_err(setup_error)?;

    Ok(output_dir.to_path_buf())
}

/// Drives a whole generation run.
pub struct Generator<'a> {
    emitter: FileEmitter<'a>,
    registry: &'a TypeRegistry,
    app_prefix: String,
}

impl<'a> Generator<'a> {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(
        registry: &'a TypeRegistry,
        renderer: &'a dyn TemplateRenderer,
        template_root: P,
        app_prefix: S,
    ) -> Self {
        Self {
            emitter: FileEmitter::new(registry, renderer, template_root),
            registry,
            app_prefix: app_prefix.into(),
        }
    }

    /// Wipes `output_dir` and scaffolds every root of `tree` under it.
    ///
    /// The registry and the template files are checked before anything on
    /// disk is touched. Any later failure aborts the run and leaves the
    /// partial tree in place.
    pub fn generate<P: AsRef<Path>>(
        &self,
        tree: &[Component],
        output_dir: P,
    ) -> Result<GenerationReport> {
        self.registry.validate()?;
        self.emitter.check_templates()?;
        let output_root = prepare_output_dir(output_dir)?;

        let mut report = GenerationReport::default();
        for component in tree {
            self.visit(component, &output_root, &mut report)?;
        }
        Ok(report)
    }

    fn visit(
        &self,
        component: &Component,
        parent_dir: &Path,
        report: &mut GenerationReport,
    ) -> Result<()> {
        info!("Generating {}", component.name);
        let replacements = ReplacementSet::for_component(component, &self.app_prefix);

        let dir = parent_dir.join(&component.name);
        fs::create_dir(&dir).map_err(|source| Error::WriteError { path: dir.clone(), source })?;
        report.directories.push(dir.clone());

        for kind in GeneratedFileKind::COMPONENT_FILES {
            let file = self.emitter.emit(&dir, &component.name, kind, &replacements)?;
            report.files.push(file);
        }

        for store in &component.stores {
            let file = self.emit_store(store, &dir, &replacements)?;
            report.files.push(file);
        }

        for child in &component.children {
            self.visit(child, &dir, report)?;
        }
        Ok(())
    }

    /// Store files sit beside their component's files and are rendered with
    /// the component's replacements.
    fn emit_store(
        &self,
        store: &Store,
        dir: &Path,
        replacements: &ReplacementSet,
    ) -> Result<PathBuf> {
        debug!(
            "Store '{}' (get: {}, put: {}, patch: {}, delete: {})",
            store.name, store.can_get, store.can_put, store.can_patch, store.can_delete
        );
        self.emitter.emit(dir, &store.name, GeneratedFileKind::Store, replacements)
    }
}
