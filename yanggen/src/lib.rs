//! # Yanggen
//!
//! Core of a YANG datastore plugin generator: turns loaded,
//! feature-resolved schema trees into the flattened, name-resolved
//! registries an external templating component renders into plugin source
//! text.
//!
//! ## Pipeline
//!
//! ```ignore
//! use yanggen::prelude::*;
//!
//! let mut generator = Generator::new(config, "out")?;
//! generator.add_module(tree)?;
//! for artifacts in generator.generate_all()? {
//!     // hand artifacts.api and artifacts.types to the renderer
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Read-only schema tree model and builder
//! - [`ir`] - Walker framework, API-identity walker, type registry
//! - [`config`] - Generator and per-module configuration
//! - [`generator`] - Per-module orchestration of both walkers

pub mod config;
pub mod error;
pub mod generator;
pub mod prelude;

/// Schema tree model and builder.
pub mod schema {
    pub use yanggen_schema::*;
}

/// Walkers and flattened IR registries.
pub mod ir {
    pub use yanggen_ir::*;
}

pub use config::{ConfigError, GeneratorConfig, ModuleConfig};
pub use error::GeneratorError;
pub use generator::{Generator, ModuleArtifacts, ModuleGenerator};
