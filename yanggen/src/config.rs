//! Generator configuration.
//!
//! Plain data structs the external config loader deserializes into
//! (format-agnostic, serde). The core only consumes the validated values:
//! per-module prefix, disable flag and skip-prefix mode. Validation runs
//! before any traversal so malformed configuration never reaches the
//! walkers.

use serde::Deserialize;
use thiserror::Error;
use yanggen_ir::SkipPrefixMode;

/// Error type for configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A module entry has an empty name.
    #[error("module entry {index} has an empty name")]
    EmptyModuleName {
        /// Position of the entry in the main module list.
        index: usize,
    },

    /// A module entry has an empty prefix.
    #[error("module '{module}' has an empty prefix")]
    EmptyPrefix {
        /// Module name.
        module: String,
    },

    /// The same module is configured twice.
    #[error("module '{module}' is configured more than once")]
    DuplicateModule {
        /// Module name.
        module: String,
    },
}

/// Configuration of one main module.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleConfig {
    /// Module name as known to the schema loader.
    pub name: String,
    /// Prefix prepended to generated identifiers.
    pub prefix: String,
    /// Disables build integration for this module's output; the module is
    /// still walked.
    #[serde(default)]
    pub disable: bool,
    /// Prefix assignment mode.
    #[serde(default)]
    pub skip_prefix_mode: SkipPrefixMode,
}

/// Top-level generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Generated plugin name.
    pub name: String,
    /// Main modules: one generation run each.
    #[serde(default)]
    pub main: Vec<ModuleConfig>,
    /// Additional modules loaded for imports/augments only.
    #[serde(default)]
    pub other: Vec<String>,
    /// Feature names to enable, all features when absent. Resolution is
    /// the schema loader's job; carried here opaquely.
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl GeneratorConfig {
    /// Checks the configuration before any traversal begins.
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: Vec<&str> = Vec::new();
        for (index, module) in self.main.iter().enumerate() {
            if module.name.is_empty() {
                return Err(ConfigError::EmptyModuleName { index });
            }
            if module.prefix.is_empty() {
                return Err(ConfigError::EmptyPrefix {
                    module: module.name.clone(),
                });
            }
            if seen.contains(&module.name.as_str()) {
                return Err(ConfigError::DuplicateModule {
                    module: module.name.clone(),
                });
            }
            seen.push(&module.name);
        }
        Ok(())
    }

    /// Looks up the configuration of a main module by name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&ModuleConfig> {
        self.main.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str, prefix: &str) -> ModuleConfig {
        ModuleConfig {
            name: name.to_string(),
            prefix: prefix.to_string(),
            disable: false,
            skip_prefix_mode: SkipPrefixMode::Default,
        }
    }

    fn config(main: Vec<ModuleConfig>) -> GeneratorConfig {
        GeneratorConfig {
            name: "test-plugin".to_string(),
            main,
            other: Vec::new(),
            features: None,
        }
    }

    #[test]
    fn test_valid_config() {
        let cfg = config(vec![module("system", "sys"), module("interfaces", "if")]);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.module("system").unwrap().prefix, "sys");
        assert!(cfg.module("missing").is_none());
    }

    #[test]
    fn test_rejects_empty_name_and_prefix() {
        let cfg = config(vec![module("", "p")]);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::EmptyModuleName { index: 0 })
        ));

        let cfg = config(vec![module("m", "")]);
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyPrefix { .. })));
    }

    #[test]
    fn test_rejects_duplicate_module() {
        let cfg = config(vec![module("m", "a"), module("m", "b")]);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DuplicateModule { .. })
        ));
    }
}
