//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use yanggen::prelude::*;
//! ```

// Schema tree types
pub use yanggen_schema::{
    BaseType, BitLiteral, EnumLiteral, ModuleInfo, NodeId, NodeKind, NodeRef, SchemaTree,
    TreeBuilder, TypeDesc, UnionMember,
};

// Walkers and registries
pub use yanggen_ir::{
    ApiEntry, ApiTree, ApiWalker, QueryError, SchemaWalker, SkipPrefixMode, StructDef,
    TypeRegistry, TypeWalker, Typedef, VarDef, VarKind, WalkError, walk,
};

// Configuration and orchestration
pub use crate::config::{ConfigError, GeneratorConfig, ModuleConfig};
pub use crate::error::GeneratorError;
pub use crate::generator::{Generator, ModuleArtifacts, ModuleGenerator};
