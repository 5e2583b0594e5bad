//! # Yanggen IR
//!
//! Tree-walking passes that flatten a YANG schema tree into the
//! name-resolved intermediate representation the templating component
//! renders into plugin source text.
//!
//! This crate provides:
//! - A generic pre-order walker framework with explicit scope passing
//! - The API-identity walker ([`api::ApiTree`]): identifiers, prefixes and
//!   output locations per node, one virtual root per module
//! - The type-registry walker ([`registry::TypeRegistry`]): struct, union,
//!   enum, bit-set and typedef definitions with name-based deduplication
//! - Shared naming utilities

pub mod api;
pub mod error;
pub mod naming;
pub mod registry;
pub mod walker;

pub use api::{ApiEntry, ApiTree, ApiWalker, SkipPrefixMode, scalar_types};
pub use error::{QueryError, WalkError};
pub use registry::{
    BitDef, EnumDef, EnumValue, Storage, StructDef, TypeRegistry, TypeWalker, Typedef,
    UnionBranch, UnionDef, VarDef, VarKind, semantic_type_name,
};
pub use walker::{SchemaWalker, walk};
