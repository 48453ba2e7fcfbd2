//! Writes one generated file from a registered template.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::registry::{GeneratedFileKind, TypeRegistry};
use crate::renderer::{ReplacementSet, TemplateRenderer};

/// Reads templates from `template_root`, renders them and writes the result.
pub struct FileEmitter<'a> {
    registry: &'a TypeRegistry,
    renderer: &'a dyn TemplateRenderer,
    template_root: PathBuf,
}

impl<'a> FileEmitter<'a> {
    pub fn new<P: Into<PathBuf>>(
        registry: &'a TypeRegistry,
        renderer: &'a dyn TemplateRenderer,
        template_root: P,
    ) -> Self {
        Self { registry, renderer, template_root: template_root.into() }
    }

    /// Checks that the template of every kind exists under the template root.
    ///
    /// # Errors
    /// * `Error::UnknownKind` if a kind is not registered
    /// * `Error::TemplateReadError` for the first template that is missing
    pub fn check_templates(&self) -> Result<()> {
        for kind in GeneratedFileKind::ALL {
            let template = self.template_root.join(&self.registry.lookup(kind)?.template);
            fs::metadata(&template)
                .map_err(|source| Error::TemplateReadError { template, source })?;
        }
        Ok(())
    }

    /// Renders the template for `kind` into `dir/<base_name><suffix>`,
    /// overwriting any file already there.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the written file
    ///
    /// # Errors
    /// * `Error::UnknownKind` if `kind` is not registered
    /// * `Error::TemplateReadError` if the template cannot be read
    /// * `Error::WriteError` if the output file cannot be written
    pub fn emit(
        &self,
        dir: &Path,
        base_name: &str,
        kind: GeneratedFileKind,
        replacements: &ReplacementSet,
    ) -> Result<PathBuf> {
        let entry = self.registry.lookup(kind)?;
        let template_path = self.template_root.join(&entry.template);

        let template = fs::read_to_string(&template_path)
            .map_err(|source| Error::TemplateReadError { template: template_path.clone(), source })?;

        let content = self.renderer.render(&template, replacements);

        let target = dir.join(format!("{base_name}{}", entry.suffix));
        debug!("Writing {} file '{}' from '{}'", kind, target.display(), template_path.display());
        fs::write(&target, content)
            .map_err(|source| Error::WriteError { path: target.clone(), source })?;

        Ok(target)
    }
}
