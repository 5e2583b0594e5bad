//! # Yanggen Schema
//!
//! Read-only YANG schema tree model consumed by the yanggen walkers.
//!
//! This crate provides:
//! - Node kinds and base type definitions for YANG data models
//! - Leaf type descriptors (enumerations, bit sets, unions, primitives)
//! - An arena-backed schema tree with structural paths
//! - A builder API for the schema-loading collaborator and for tests
//!
//! Schema parsing itself is out of scope: the external loader (libyang or
//! equivalent) populates the tree through [`TreeBuilder`] after feature
//! resolution, and everything downstream treats the tree as immutable.

pub mod builder;
pub mod error;
pub mod tree;
pub mod types;

pub use builder::TreeBuilder;
pub use error::TreeError;
pub use tree::{ModuleInfo, NodeId, NodeKind, NodeRef, SchemaTree};
pub use types::{BaseType, BitLiteral, EnumLiteral, TypeDesc, UnionMember};
