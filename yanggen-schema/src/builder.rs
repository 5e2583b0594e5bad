//! Schema tree construction.
//!
//! [`TreeBuilder`] is the population API the schema-loading collaborator
//! (and the test suite) uses to assemble a [`SchemaTree`]. It computes the
//! structural path of every node and enforces the well-formedness the
//! walkers rely on: no children under leaves, no duplicate sibling names.

use crate::error::TreeError;
use crate::tree::{ModuleInfo, NodeData, NodeId, NodeKind, SchemaTree};
use crate::types::TypeDesc;

/// Builder for a single module's schema tree.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: SchemaTree,
}

impl TreeBuilder {
    /// Creates an empty builder for the given module.
    #[must_use]
    pub fn new(module: ModuleInfo) -> Self {
        Self {
            tree: SchemaTree {
                module,
                nodes: Vec::new(),
                roots: Vec::new(),
            },
        }
    }

    /// Adds a container node.
    pub fn container(&mut self, name: &str, parent: Option<NodeId>) -> Result<NodeId, TreeError> {
        let module = self.tree.module.name().to_string();
        self.insert(NodeKind::Container, &module, name, parent, None, Vec::new())
    }

    /// Adds a container node owned by another module (augmentation).
    pub fn container_from(
        &mut self,
        module: &str,
        name: &str,
        parent: Option<NodeId>,
    ) -> Result<NodeId, TreeError> {
        self.insert(NodeKind::Container, module, name, parent, None, Vec::new())
    }

    /// Adds a list node with the given key leaf names. The key leaves
    /// themselves are ordinary children added separately.
    pub fn list(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        keys: &[&str],
    ) -> Result<NodeId, TreeError> {
        let module = self.tree.module.name().to_string();
        let keys = keys.iter().map(|k| (*k).to_string()).collect();
        self.insert(NodeKind::List, &module, name, parent, None, keys)
    }

    /// Adds a leaf node.
    pub fn leaf(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        desc: TypeDesc,
    ) -> Result<NodeId, TreeError> {
        let module = self.tree.module.name().to_string();
        self.insert(NodeKind::Leaf, &module, name, parent, Some(desc), Vec::new())
    }

    /// Adds a leaf node owned by another module (augmentation).
    pub fn leaf_from(
        &mut self,
        module: &str,
        name: &str,
        parent: Option<NodeId>,
        desc: TypeDesc,
    ) -> Result<NodeId, TreeError> {
        self.insert(NodeKind::Leaf, module, name, parent, Some(desc), Vec::new())
    }

    /// Adds a leaf-list node.
    pub fn leaf_list(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        desc: TypeDesc,
    ) -> Result<NodeId, TreeError> {
        let module = self.tree.module.name().to_string();
        self.insert(
            NodeKind::LeafList,
            &module,
            name,
            parent,
            Some(desc),
            Vec::new(),
        )
    }

    /// Adds an rpc, action or notification node.
    pub fn operation(
        &mut self,
        kind: NodeKind,
        name: &str,
        parent: Option<NodeId>,
    ) -> Result<NodeId, TreeError> {
        if !kind.is_operation() {
            return Err(TreeError::NotAnOperation {
                kind: format!("{kind:?}"),
            });
        }
        let module = self.tree.module.name().to_string();
        self.insert(kind, &module, name, parent, None, Vec::new())
    }

    /// Marks a node deprecated.
    pub fn mark_deprecated(&mut self, id: NodeId) {
        self.tree.nodes[id.0].deprecated = true;
    }

    /// Marks a node obsolete.
    pub fn mark_obsolete(&mut self, id: NodeId) {
        self.tree.nodes[id.0].obsolete = true;
    }

    /// Finishes construction and returns the immutable tree.
    #[must_use]
    pub fn finish(self) -> SchemaTree {
        self.tree
    }

    fn insert(
        &mut self,
        kind: NodeKind,
        module: &str,
        name: &str,
        parent: Option<NodeId>,
        type_desc: Option<TypeDesc>,
        keys: Vec<String>,
    ) -> Result<NodeId, TreeError> {
        let path = match parent {
            Some(pid) => {
                let pdata = &self.tree.nodes[pid.0];
                if pdata.kind.has_type() {
                    return Err(TreeError::leaf_parent(&pdata.path, name));
                }
                let duplicate = pdata
                    .children
                    .iter()
                    .any(|&cid| self.tree.nodes[cid.0].name == name);
                if duplicate {
                    return Err(TreeError::duplicate_child(&pdata.path, name));
                }
                if pdata.module == module {
                    format!("{}/{}", pdata.path, name)
                } else {
                    format!("{}/{}:{}", pdata.path, module, name)
                }
            }
            None => {
                let duplicate = self
                    .tree
                    .roots
                    .iter()
                    .any(|&rid| self.tree.nodes[rid.0].name == name);
                if duplicate {
                    return Err(TreeError::duplicate_child(self.tree.module.name(), name));
                }
                format!("/{}:{}", module, name)
            }
        };

        let id = NodeId(self.tree.nodes.len());
        self.tree.nodes.push(NodeData {
            kind,
            name: name.to_string(),
            module: module.to_string(),
            type_desc,
            parent,
            children: Vec::new(),
            keys,
            deprecated: false,
            obsolete: false,
            path,
        });

        match parent {
            Some(pid) => self.tree.nodes[pid.0].children.push(id),
            None => self.tree.roots.push(id),
        }

        Ok(id)
    }
}
