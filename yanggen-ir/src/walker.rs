//! Generic schema walker framework.
//!
//! A walker is driven once over a module's schema forest in pre-order,
//! document order. Instead of a shared depth-indexed parent stack, each
//! recursive call receives the scope value the parent's `visit` returned,
//! so "the context my children attach to" is explicit and immutable.
//! Document order is load-bearing: deduplication and scope resolution rely
//! on parents being visited before their descendants.

use yanggen_schema::{ModuleInfo, NodeRef, SchemaTree};

use crate::error::WalkError;

/// One tree-walking pass over a schema forest.
pub trait SchemaWalker {
    /// Traversal context handed from a node's `visit` to its children.
    type Scope;
    /// The finalized, immutable product of the walk.
    type Output;

    /// Admission predicate. A node that is not admitted is skipped
    /// together with its subtree.
    fn admit(&self, node: NodeRef<'_>) -> bool;

    /// Called once before any node is visited; returns the scope the
    /// top-level nodes are visited under.
    fn enter_module(&mut self, module: &ModuleInfo) -> Result<Self::Scope, WalkError>;

    /// Visits one admitted node and returns the scope for its children.
    /// `depth` is 0 for top-level nodes.
    fn visit(
        &mut self,
        node: NodeRef<'_>,
        depth: usize,
        scope: &Self::Scope,
    ) -> Result<Self::Scope, WalkError>;

    /// Consumes the walker after the whole forest has been visited.
    /// Runs exactly once, enforced by move.
    fn finalize(self) -> Self::Output;
}

/// Shared admission rule of both concrete walkers: deprecated, obsolete,
/// rpc, action and notification nodes are excluded.
#[must_use]
pub fn admits(node: NodeRef<'_>) -> bool {
    !node.deprecated() && !node.obsolete() && !node.kind().is_operation()
}

/// Drives one full pre-order traversal and finalizes the walker.
///
/// # Errors
/// Propagates the first `WalkError` raised by `enter_module` or `visit`;
/// in that case no output is produced and the partially filled walker is
/// dropped.
pub fn walk<W: SchemaWalker>(tree: &SchemaTree, mut walker: W) -> Result<W::Output, WalkError> {
    let scope = walker.enter_module(tree.module())?;
    for root in tree.roots() {
        walk_node(&mut walker, root, 0, &scope)?;
    }
    Ok(walker.finalize())
}

fn walk_node<W: SchemaWalker>(
    walker: &mut W,
    node: NodeRef<'_>,
    depth: usize,
    scope: &W::Scope,
) -> Result<(), WalkError> {
    if !walker.admit(node) {
        return Ok(());
    }
    let child_scope = walker.visit(node, depth, scope)?;
    for child in node.children() {
        walk_node(walker, child, depth + 1, &child_scope)?;
    }
    Ok(())
}
