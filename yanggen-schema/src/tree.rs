//! Arena-backed schema tree.
//!
//! One [`SchemaTree`] holds the loaded, feature-resolved data model of a
//! single module: nodes in a flat arena addressed by [`NodeId`], with
//! parent/child links and a unique structural path per node. The tree is
//! immutable once built; walkers only read it.

use crate::types::TypeDesc;

/// Module metadata.
#[derive(Debug, Clone)]
pub struct ModuleInfo {
    name: String,
    description: Option<String>,
}

impl ModuleInfo {
    /// Creates module metadata with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Creates module metadata with a description.
    #[must_use]
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    /// Returns the module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the module description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Schema node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Container node.
    Container,
    /// List node (keyed, repeated record).
    List,
    /// Leaf node (single value).
    Leaf,
    /// Leaf-list node (repeated value).
    LeafList,
    /// RPC node.
    Rpc,
    /// Action node.
    Action,
    /// Notification node.
    Notification,
}

impl NodeKind {
    /// Returns true for operation kinds (rpc, action, notification),
    /// which carry no datastore state.
    #[must_use]
    pub const fn is_operation(&self) -> bool {
        matches!(self, Self::Rpc | Self::Action | Self::Notification)
    }

    /// Returns true for kinds that carry a leaf type descriptor.
    #[must_use]
    pub const fn has_type(&self) -> bool {
        matches!(self, Self::Leaf | Self::LeafList)
    }
}

/// Index of a node inside its [`SchemaTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) name: String,
    pub(crate) module: String,
    pub(crate) type_desc: Option<TypeDesc>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) keys: Vec<String>,
    pub(crate) deprecated: bool,
    pub(crate) obsolete: bool,
    pub(crate) path: String,
}

/// Immutable schema forest of one module.
#[derive(Debug, Clone)]
pub struct SchemaTree {
    pub(crate) module: ModuleInfo,
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) roots: Vec<NodeId>,
}

impl SchemaTree {
    /// Returns the owning module metadata.
    #[must_use]
    pub fn module(&self) -> &ModuleInfo {
        &self.module
    }

    /// Returns the top-level nodes in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.roots.iter().map(|&id| NodeRef { tree: self, id })
    }

    /// Returns a handle to the node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Read-only handle to one schema node.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a SchemaTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }

    /// Returns the node id.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    /// Returns the node name as written in the schema.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.data().name
    }

    /// Returns the name of the module this node belongs to. May differ
    /// from the parent's module for augmented nodes.
    #[must_use]
    pub fn module_name(&self) -> &'a str {
        &self.data().module
    }

    /// Returns the leaf type descriptor, present on leaf and leaf-list
    /// nodes only.
    #[must_use]
    pub fn type_desc(&self) -> Option<&'a TypeDesc> {
        self.data().type_desc.as_ref()
    }

    /// Returns the schema parent, absent for top-level nodes.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    /// Returns the children in declaration order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }

    /// Returns the key leaf names (lists only, empty otherwise).
    #[must_use]
    pub fn keys(&self) -> &'a [String] {
        &self.data().keys
    }

    /// Returns true if the node is marked deprecated.
    #[must_use]
    pub fn deprecated(&self) -> bool {
        self.data().deprecated
    }

    /// Returns true if the node is marked obsolete.
    #[must_use]
    pub fn obsolete(&self) -> bool {
        self.data().obsolete
    }

    /// Returns the unique structural path of this node.
    #[must_use]
    pub fn path(&self) -> &'a str {
        &self.data().path
    }
}
