//! Per-module generator orchestration.
//!
//! Runs the API-identity walker and the type-registry walker over a
//! module's schema tree and bundles the finalized registries for the
//! templating component. The walkers populate disjoint registries and may
//! run in either order; modules share no state and are processed
//! independently.

use std::path::{Path, PathBuf};

use tracing::info;

use yanggen_ir::{ApiTree, ApiWalker, TypeRegistry, TypeWalker, WalkError, walk};
use yanggen_schema::SchemaTree;

use crate::config::{GeneratorConfig, ModuleConfig};
use crate::error::GeneratorError;

/// Finalized registries of one module, ready for rendering.
#[derive(Debug, Clone)]
pub struct ModuleArtifacts {
    /// Module name.
    pub module: String,
    /// Build integration disabled for this module's output.
    pub disabled: bool,
    /// API identity registry.
    pub api: ApiTree,
    /// Type registry.
    pub types: TypeRegistry,
}

/// Generator for a single module.
#[derive(Debug)]
pub struct ModuleGenerator {
    config: ModuleConfig,
    tree: SchemaTree,
}

impl ModuleGenerator {
    /// Creates a generator from a module's configuration and its loaded
    /// schema tree.
    #[must_use]
    pub fn new(config: ModuleConfig, tree: SchemaTree) -> Self {
        Self { config, tree }
    }

    /// Returns the module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.config.prefix
    }

    /// Runs both walkers over the module's tree.
    ///
    /// # Errors
    /// Propagates the first `WalkError`; no partial registries are
    /// returned.
    pub fn generate(&self, source_dir: &Path) -> Result<ModuleArtifacts, WalkError> {
        info!(module = self.name(), "running api-identity walker");
        let api = walk(
            &self.tree,
            ApiWalker::new(
                self.config.prefix.as_str(),
                self.config.skip_prefix_mode,
                source_dir,
            ),
        )?;
        info!(
            module = self.name(),
            entries = api.entries().len(),
            "api tree complete"
        );

        info!(module = self.name(), "running type-registry walker");
        let types = walk(&self.tree, TypeWalker::new(self.config.prefix.as_str()))?;
        info!(
            module = self.name(),
            structs = types.structs().len(),
            enums = types.enums().len(),
            bits = types.bits().len(),
            unions = types.unions().len(),
            "type registry complete"
        );

        Ok(ModuleArtifacts {
            module: self.config.name.clone(),
            disabled: self.config.disable,
            api,
            types,
        })
    }
}

/// Generator for all configured main modules.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    source_dir: PathBuf,
    modules: Vec<ModuleGenerator>,
}

impl Generator {
    /// Creates a generator after validating the configuration.
    ///
    /// # Errors
    /// Returns a `ConfigError` (wrapped) if validation fails; nothing is
    /// walked in that case.
    pub fn new(
        config: GeneratorConfig,
        source_dir: impl Into<PathBuf>,
    ) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self {
            config,
            source_dir: source_dir.into(),
            modules: Vec::new(),
        })
    }

    /// Returns the validated configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Registers a loaded schema tree for one of the configured main
    /// modules.
    ///
    /// # Errors
    /// Returns `GeneratorError::UnknownModule` if the tree's module is not
    /// configured.
    pub fn add_module(&mut self, tree: SchemaTree) -> Result<(), GeneratorError> {
        let name = tree.module().name();
        let Some(module_config) = self.config.module(name) else {
            return Err(GeneratorError::UnknownModule {
                name: name.to_string(),
            });
        };
        info!(module = name, prefix = %module_config.prefix, "loaded module");
        self.modules
            .push(ModuleGenerator::new(module_config.clone(), tree));
        Ok(())
    }

    /// Generates the registries of every registered module.
    ///
    /// # Errors
    /// Stops at the first failing module; modules are independent, so a
    /// failure carries no partial output for that module.
    pub fn generate_all(&self) -> Result<Vec<ModuleArtifacts>, GeneratorError> {
        let mut artifacts = Vec::with_capacity(self.modules.len());
        for module in &self.modules {
            artifacts.push(module.generate(&self.source_dir)?);
        }
        Ok(artifacts)
    }
}
