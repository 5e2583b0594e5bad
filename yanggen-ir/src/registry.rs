//! Type-registry walker.
//!
//! Flattens the schema tree into struct, union, enum, bit-set and typedef
//! definitions that are independent of the live schema nodes. Reusable
//! named types are deduplicated by semantic name through index-or-insert
//! arenas; struct names are never deduplicated and a collision is a hard
//! error. A single finalize step reverses the struct and typedef lists so
//! that any type embedding another by value is declared after the type it
//! embeds, with no forward declarations.

use std::collections::HashMap;

use tracing::debug;
use yanggen_schema::{BaseType, ModuleInfo, NodeKind, NodeRef, TypeDesc};

use crate::error::WalkError;
use crate::naming::to_c_identifier;
use crate::walker::{SchemaWalker, admits};

/// Kind tag of a struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Field embeds a generated struct by value.
    Struct,
    /// Field is typed by a generated union.
    Union,
    /// Field is typed by a generated enum (enumerations and bit sets).
    Enum,
    /// Plain field typed directly by a base kind or pointer.
    Var,
}

impl VarKind {
    /// Returns the kind tag string used by the output consumer.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::Var => "var",
        }
    }
}

/// One field of a generated struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDef {
    /// Declared type reference (typedef alias, base keyword or pointer).
    pub type_ref: String,
    /// Field name (sanitized).
    pub name: String,
    /// Structural path of the node this field came from.
    pub path: String,
    /// Kind tag.
    pub kind: VarKind,
}

/// One generated struct with its ordered field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    /// Struct name (sanitized, unique).
    pub name: String,
    /// Structural path of the producing node.
    pub path: String,
    /// Fields in declaration order (after finalize).
    pub vars: Vec<VarDef>,
}

/// One enumeration literal with its verbatim position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Literal display name.
    pub name: String,
    /// Declared position; a stored/wire value, never renumbered.
    pub position: u32,
}

/// One generated enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Semantic name (dedup key).
    pub name: String,
    /// Structural path of the first defining leaf.
    pub path: String,
    /// Literals in source order.
    pub values: Vec<EnumValue>,
}

/// One generated bit set, represented with the same shape as an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitDef {
    /// Semantic name (dedup key).
    pub name: String,
    /// Structural path of the first defining leaf.
    pub path: String,
    /// Bits in source order, positions verbatim.
    pub values: Vec<EnumValue>,
}

/// One member of a generated union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionBranch {
    /// Member display name.
    pub name: String,
    /// Member base kind.
    pub base: BaseType,
}

/// One generated union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDef {
    /// Semantic name (dedup key).
    pub name: String,
    /// Structural path of the first defining leaf.
    pub path: String,
    /// Members in source order.
    pub members: Vec<UnionBranch>,
}

/// Storage category of a typedef.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// `struct` storage.
    Struct,
    /// `enum` storage (enumerations and bit sets).
    Enum,
    /// `union` storage.
    Union,
}

impl Storage {
    /// Returns the storage keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Union => "union",
        }
    }
}

/// One typedef alias; created once per definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typedef {
    /// Storage category.
    pub storage: Storage,
    /// Sanitized definition name.
    pub name: String,
    /// Derived alias (`<name>_t`).
    pub alias: String,
}

impl Typedef {
    /// Creates a typedef for the given sanitized name.
    #[must_use]
    pub fn new(storage: Storage, name: impl Into<String>) -> Self {
        let name = name.into();
        let alias = format!("{name}_t");
        Self {
            storage,
            name,
            alias,
        }
    }
}

/// Index of a struct inside the walker's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructId(usize);

/// Resolves the semantic type name of a leaf or leaf-list node: the
/// reusable type's name with any module qualifier stripped, or the node's
/// own name for inline types. This is the dedup key for enum, bit-set and
/// union definitions, shared with the output consumer.
#[must_use]
pub fn semantic_type_name(node: NodeRef<'_>) -> Option<String> {
    let desc = node.type_desc()?;
    let name = if desc.is_named() {
        desc.name()
    } else {
        node.name()
    };
    let name = name.split_once(':').map_or(name, |(_, rest)| rest);
    Some(name.to_string())
}

/// Finalized type registry of one module.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    structs: Vec<StructDef>,
    enums: Vec<EnumDef>,
    enum_index: HashMap<String, usize>,
    bits: Vec<BitDef>,
    bit_index: HashMap<String, usize>,
    unions: Vec<UnionDef>,
    union_index: HashMap<String, usize>,
    typedefs: Vec<Typedef>,
}

impl TypeRegistry {
    /// Returns the structs in declaration order (embedded before embedder).
    #[must_use]
    pub fn structs(&self) -> &[StructDef] {
        &self.structs
    }

    /// Returns the enum definitions in discovery order.
    #[must_use]
    pub fn enums(&self) -> &[EnumDef] {
        &self.enums
    }

    /// Returns the bit-set definitions in discovery order.
    #[must_use]
    pub fn bits(&self) -> &[BitDef] {
        &self.bits
    }

    /// Returns the union definitions in discovery order.
    #[must_use]
    pub fn unions(&self) -> &[UnionDef] {
        &self.unions
    }

    /// Returns the typedefs in declaration order.
    #[must_use]
    pub fn typedefs(&self) -> &[Typedef] {
        &self.typedefs
    }

    /// Looks up an enum definition by semantic name.
    #[must_use]
    pub fn enum_def(&self, name: &str) -> Option<&EnumDef> {
        self.enum_index.get(name).map(|&idx| &self.enums[idx])
    }

    /// Looks up a bit-set definition by semantic name.
    #[must_use]
    pub fn bit_def(&self, name: &str) -> Option<&BitDef> {
        self.bit_index.get(name).map(|&idx| &self.bits[idx])
    }

    /// Looks up a union definition by semantic name.
    #[must_use]
    pub fn union_def(&self, name: &str) -> Option<&UnionDef> {
        self.union_index.get(name).map(|&idx| &self.unions[idx])
    }
}

/// Walker that builds the [`TypeRegistry`].
#[derive(Debug)]
pub struct TypeWalker {
    prefix: String,
    structs: Vec<StructDef>,
    struct_index: HashMap<String, usize>,
    enums: Vec<EnumDef>,
    enum_index: HashMap<String, usize>,
    bits: Vec<BitDef>,
    bit_index: HashMap<String, usize>,
    unions: Vec<UnionDef>,
    union_index: HashMap<String, usize>,
    typedefs: Vec<Typedef>,
}

impl TypeWalker {
    /// Creates a walker for one module with the configured prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            structs: Vec::new(),
            struct_index: HashMap::new(),
            enums: Vec::new(),
            enum_index: HashMap::new(),
            bits: Vec::new(),
            bit_index: HashMap::new(),
            unions: Vec::new(),
            union_index: HashMap::new(),
            typedefs: Vec::new(),
        }
    }

    fn struct_name(&self, node_name: &str) -> String {
        to_c_identifier(&format!("{}_{}", self.prefix, node_name))
    }

    /// Registers a struct and its typedef; struct names are never
    /// deduplicated, so a second definition under one name is fatal.
    fn add_struct(&mut self, name: String, path: &str) -> Result<StructId, WalkError> {
        if let Some(&prev) = self.struct_index.get(&name) {
            return Err(WalkError::StructNameCollision {
                name,
                path: path.to_string(),
                previous: self.structs[prev].path.clone(),
            });
        }
        let id = StructId(self.structs.len());
        self.struct_index.insert(name.clone(), id.0);
        self.typedefs.push(Typedef::new(Storage::Struct, name.clone()));
        self.structs.push(StructDef {
            name,
            path: path.to_string(),
            vars: Vec::new(),
        });
        Ok(id)
    }

    fn add_var(&mut self, target: StructId, var: VarDef) {
        self.structs[target.0].vars.push(var);
    }

    /// Index-or-insert of an enum definition; returns the typedef alias.
    fn intern_enum(&mut self, name: &str, node: NodeRef<'_>, desc: &TypeDesc) -> String {
        if !self.enum_index.contains_key(name) {
            self.enum_index.insert(name.to_string(), self.enums.len());
            self.enums.push(EnumDef {
                name: name.to_string(),
                path: node.path().to_string(),
                values: desc
                    .enums()
                    .iter()
                    .map(|l| EnumValue {
                        name: l.name.clone(),
                        position: l.position,
                    })
                    .collect(),
            });
            self.typedefs
                .push(Typedef::new(Storage::Enum, to_c_identifier(name)));
            debug!(name, "recorded enum definition");
        }
        format!("{}_t", to_c_identifier(name))
    }

    fn intern_bits(&mut self, name: &str, node: NodeRef<'_>, desc: &TypeDesc) -> String {
        if !self.bit_index.contains_key(name) {
            self.bit_index.insert(name.to_string(), self.bits.len());
            self.bits.push(BitDef {
                name: name.to_string(),
                path: node.path().to_string(),
                values: desc
                    .bit_literals()
                    .iter()
                    .map(|l| EnumValue {
                        name: l.name.clone(),
                        position: l.position,
                    })
                    .collect(),
            });
            self.typedefs
                .push(Typedef::new(Storage::Enum, to_c_identifier(name)));
            debug!(name, "recorded bit-set definition");
        }
        format!("{}_t", to_c_identifier(name))
    }

    fn intern_union(&mut self, name: &str, node: NodeRef<'_>, desc: &TypeDesc) -> String {
        if !self.union_index.contains_key(name) {
            self.union_index.insert(name.to_string(), self.unions.len());
            self.unions.push(UnionDef {
                name: name.to_string(),
                path: node.path().to_string(),
                members: desc
                    .union_members()
                    .iter()
                    .map(|m| UnionBranch {
                        name: m.name.clone(),
                        base: m.base,
                    })
                    .collect(),
            });
            self.typedefs
                .push(Typedef::new(Storage::Union, to_c_identifier(name)));
            debug!(name, "recorded union definition");
        }
        format!("{}_t", to_c_identifier(name))
    }

    /// Classifies a leaf value and attaches the resulting field to
    /// `target`, creating the union/enum/bit-set definition on first use.
    fn scalar_var(&mut self, node: NodeRef<'_>, desc: &TypeDesc, target: StructId) {
        let semantic = semantic_type_name(node).unwrap_or_else(|| node.name().to_string());
        let field = to_c_identifier(node.name());
        let path = node.path().to_string();

        let (type_ref, kind) = match desc.base() {
            BaseType::Union => (self.intern_union(&semantic, node, desc), VarKind::Union),
            BaseType::Enumeration => (self.intern_enum(&semantic, node, desc), VarKind::Enum),
            BaseType::Bits => (self.intern_bits(&semantic, node, desc), VarKind::Enum),
            base => (base.keyword().to_string(), VarKind::Var),
        };

        self.add_var(
            target,
            VarDef {
                type_ref,
                name: field,
                path,
                kind,
            },
        );
    }

    /// Creates the element/data struct pair shared by lists and
    /// leaf-lists: the element holds one record plus the `next` pointer of
    /// the singly linked list. Returns the data struct and the element
    /// typedef alias for the pointer field in the enclosing struct.
    fn add_element_pair(&mut self, node: NodeRef<'_>) -> Result<(StructId, String), WalkError> {
        let data_name = self.struct_name(node.name());
        let element_name = format!("{data_name}_element");
        let data_alias = format!("{data_name}_t");
        let element_alias = format!("{element_name}_t");
        let path = node.path();

        let element = self.add_struct(element_name, path)?;
        let data = self.add_struct(data_name, path)?;

        self.add_var(
            element,
            VarDef {
                type_ref: data_alias,
                name: to_c_identifier(node.name()),
                path: path.to_string(),
                kind: VarKind::Var,
            },
        );
        self.add_var(
            element,
            VarDef {
                type_ref: format!("{element_alias}*"),
                name: "next".to_string(),
                path: path.to_string(),
                kind: VarKind::Var,
            },
        );

        Ok((data, element_alias))
    }

    fn require_scope(scope: &Option<StructId>, node: NodeRef<'_>) -> Result<StructId, WalkError> {
        scope.ok_or_else(|| WalkError::StructuralViolation {
            path: node.path().to_string(),
        })
    }

    fn require_desc<'a>(node: &NodeRef<'a>) -> Result<&'a TypeDesc, WalkError> {
        node.type_desc().ok_or_else(|| WalkError::MissingTypeDescriptor {
            path: node.path().to_string(),
        })
    }
}

impl SchemaWalker for TypeWalker {
    type Scope = Option<StructId>;
    type Output = TypeRegistry;

    fn admit(&self, node: NodeRef<'_>) -> bool {
        admits(node)
    }

    fn enter_module(&mut self, _module: &ModuleInfo) -> Result<Self::Scope, WalkError> {
        Ok(None)
    }

    fn visit(
        &mut self,
        node: NodeRef<'_>,
        _depth: usize,
        scope: &Self::Scope,
    ) -> Result<Self::Scope, WalkError> {
        match node.kind() {
            NodeKind::Container => {
                let name = self.struct_name(node.name());
                let alias = format!("{name}_t");
                let id = self.add_struct(name, node.path())?;
                if let Some(parent) = *scope {
                    self.add_var(
                        parent,
                        VarDef {
                            type_ref: alias,
                            name: to_c_identifier(node.name()),
                            path: node.path().to_string(),
                            kind: VarKind::Struct,
                        },
                    );
                }
                Ok(Some(id))
            }
            NodeKind::Leaf => {
                let parent = Self::require_scope(scope, node)?;
                let desc = Self::require_desc(&node)?;
                self.scalar_var(node, desc, parent);
                Ok(*scope)
            }
            NodeKind::LeafList => {
                let parent = Self::require_scope(scope, node)?;
                let desc = Self::require_desc(&node)?;
                let (data, element_alias) = self.add_element_pair(node)?;
                // The data struct wraps the repeated scalar value.
                self.scalar_var(node, desc, data);
                self.add_var(
                    parent,
                    VarDef {
                        type_ref: format!("{element_alias}*"),
                        name: to_c_identifier(node.name()),
                        path: node.path().to_string(),
                        kind: VarKind::Var,
                    },
                );
                Ok(*scope)
            }
            NodeKind::List => {
                let (data, element_alias) = self.add_element_pair(node)?;
                if let Some(parent) = *scope {
                    self.add_var(
                        parent,
                        VarDef {
                            type_ref: format!("{element_alias}*"),
                            name: to_c_identifier(node.name()),
                            path: node.path().to_string(),
                            kind: VarKind::Var,
                        },
                    );
                }
                // The list's own children fill the data struct.
                Ok(Some(data))
            }
            // Excluded by admission; nothing to record.
            NodeKind::Rpc | NodeKind::Action | NodeKind::Notification => Ok(*scope),
        }
    }

    fn finalize(mut self) -> TypeRegistry {
        self.structs.reverse();
        for s in &mut self.structs {
            s.vars.reverse();
        }
        self.typedefs.reverse();

        TypeRegistry {
            structs: self.structs,
            enums: self.enums,
            enum_index: self.enum_index,
            bits: self.bits,
            bit_index: self.bit_index,
            unions: self.unions,
            union_index: self.union_index,
            typedefs: self.typedefs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::walk;
    use yanggen_schema::{
        BitLiteral, EnumLiteral, ModuleInfo, SchemaTree, TreeBuilder, UnionMember,
    };

    fn registry(tree: &SchemaTree, prefix: &str) -> TypeRegistry {
        walk(tree, TypeWalker::new(prefix)).unwrap()
    }

    fn mode_t() -> TypeDesc {
        TypeDesc::named_enumeration(
            "mode-t",
            vec![EnumLiteral::new("off", 0), EnumLiteral::new("on", 1)],
        )
    }

    #[test]
    fn test_container_with_enum_leaf_end_to_end() {
        let mut b = TreeBuilder::new(ModuleInfo::new("example"));
        let top = b.container("settings", None).unwrap();
        b.leaf("mode", Some(top), mode_t()).unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "pfx");

        let st = &reg.structs()[0];
        assert_eq!(st.name, "pfx_settings");
        assert_eq!(st.vars.len(), 1);
        assert_eq!(st.vars[0].name, "mode");
        assert_eq!(st.vars[0].kind, VarKind::Enum);
        assert_eq!(st.vars[0].type_ref, "mode_t_t");

        let en = reg.enum_def("mode-t").unwrap();
        assert_eq!(en.values.len(), 2);
        assert_eq!((en.values[0].name.as_str(), en.values[0].position), ("off", 0));
        assert_eq!((en.values[1].name.as_str(), en.values[1].position), ("on", 1));
    }

    #[test]
    fn test_named_enum_dedup() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let top = b.container("c", None).unwrap();
        b.leaf("first", Some(top), mode_t()).unwrap();
        b.leaf("second", Some(top), mode_t()).unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "p");
        assert_eq!(reg.enums().len(), 1);
        assert_eq!(reg.enums()[0].name, "mode-t");
        // One typedef per definition created: the struct plus one enum.
        let enum_tds: Vec<_> = reg
            .typedefs()
            .iter()
            .filter(|t| t.storage == Storage::Enum)
            .collect();
        assert_eq!(enum_tds.len(), 1);
        assert_eq!(enum_tds[0].alias, "mode_t_t");
        // Both leaves still produced fields.
        assert_eq!(reg.structs()[0].vars.len(), 2);
    }

    #[test]
    fn test_module_qualifier_stripped_from_semantic_name() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let top = b.container("c", None).unwrap();
        b.leaf(
            "speed",
            Some(top),
            TypeDesc::named_enumeration(
                "iana:speed-t",
                vec![EnumLiteral::new("slow", 0), EnumLiteral::new("fast", 1)],
            ),
        )
        .unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "p");
        assert!(reg.enum_def("speed-t").is_some());
        assert!(reg.enum_def("iana:speed-t").is_none());
    }

    #[test]
    fn test_anonymous_enums_never_collapse() {
        let literals = vec![EnumLiteral::new("a", 0), EnumLiteral::new("b", 1)];
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let top = b.container("c", None).unwrap();
        b.leaf("one", Some(top), TypeDesc::enumeration(literals.clone()))
            .unwrap();
        b.leaf("two", Some(top), TypeDesc::enumeration(literals))
            .unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "p");
        // Identical literal sets, but distinct leaves: two definitions
        // keyed by the owning leaf names.
        assert_eq!(reg.enums().len(), 2);
        assert!(reg.enum_def("one").is_some());
        assert!(reg.enum_def("two").is_some());
    }

    #[test]
    fn test_bits_leaf() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let top = b.container("c", None).unwrap();
        b.leaf(
            "flags",
            Some(top),
            TypeDesc::named_bits(
                "if-flags",
                vec![BitLiteral::new("up", 0), BitLiteral::new("loopback", 3)],
            ),
        )
        .unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "p");
        let def = reg.bit_def("if-flags").unwrap();
        assert_eq!(def.values[1].position, 3);

        let var = &reg.structs()[0].vars[0];
        assert_eq!(var.kind, VarKind::Enum);
        assert_eq!(var.type_ref, "if_flags_t");

        let td = reg
            .typedefs()
            .iter()
            .find(|t| t.name == "if_flags")
            .unwrap();
        assert_eq!(td.storage, Storage::Enum);
    }

    #[test]
    fn test_union_dedup_and_members() {
        let union_desc = || {
            TypeDesc::named_union(
                "ip-address",
                vec![
                    UnionMember::new("ipv4-address", BaseType::String),
                    UnionMember::new("ipv6-address", BaseType::String),
                ],
            )
        };
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let top = b.container("c", None).unwrap();
        b.leaf("source", Some(top), union_desc()).unwrap();
        b.leaf("target", Some(top), union_desc()).unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "p");
        assert_eq!(reg.unions().len(), 1);
        let def = reg.union_def("ip-address").unwrap();
        assert_eq!(def.members.len(), 2);
        assert_eq!(def.members[0].name, "ipv4-address");
        assert_eq!(def.members[0].base, BaseType::String);

        let vars = &reg.structs()[0].vars;
        assert!(vars.iter().all(|v| v.kind == VarKind::Union));
        assert!(vars.iter().all(|v| v.type_ref == "ip_address_t"));
    }

    #[test]
    fn test_primitive_leaf_has_no_definition() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let top = b.container("c", None).unwrap();
        b.leaf("mtu", Some(top), TypeDesc::primitive(BaseType::Uint16))
            .unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "p");
        let var = &reg.structs()[0].vars[0];
        assert_eq!(var.kind, VarKind::Var);
        assert_eq!(var.type_ref, "uint16");
        assert!(reg.enums().is_empty());
        assert!(reg.unions().is_empty());
    }

    #[test]
    fn test_leaf_list_linked_list_shape() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let top = b.container("c", None).unwrap();
        b.leaf_list(
            "search",
            Some(top),
            TypeDesc::primitive(BaseType::String),
        )
        .unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "p");
        let by_name = |n: &str| reg.structs().iter().find(|s| s.name == n).unwrap();

        let element = by_name("p_search_element");
        assert_eq!(element.vars.len(), 2);
        // Finalize reversed the field lists.
        assert_eq!(element.vars[0].name, "next");
        assert_eq!(element.vars[0].type_ref, "p_search_element_t*");
        assert_eq!(element.vars[1].name, "search");
        assert_eq!(element.vars[1].type_ref, "p_search_t");

        let data = by_name("p_search");
        assert_eq!(data.vars.len(), 1);
        assert_eq!(data.vars[0].type_ref, "string");

        let parent = by_name("p_c");
        assert_eq!(parent.vars[0].name, "search");
        assert_eq!(parent.vars[0].type_ref, "p_search_element_t*");
        assert_eq!(parent.vars[0].kind, VarKind::Var);
    }

    #[test]
    fn test_list_with_keys() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let top = b.container("c", None).unwrap();
        let lst = b.list("entries", Some(top), &["id", "label"]).unwrap();
        b.leaf("id", Some(lst), TypeDesc::primitive(BaseType::Uint32))
            .unwrap();
        b.leaf("label", Some(lst), TypeDesc::primitive(BaseType::String))
            .unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "p");
        let by_name = |n: &str| reg.structs().iter().find(|s| s.name == n).unwrap();

        // Data struct carries the list's own children.
        let data = by_name("p_entries");
        let fields: Vec<_> = data
            .vars
            .iter()
            .map(|v| (v.name.as_str(), v.type_ref.as_str()))
            .collect();
        assert_eq!(fields, [("label", "string"), ("id", "uint32")]);

        let element = by_name("p_entries_element");
        assert_eq!(element.vars[0].name, "next");
        assert_eq!(element.vars[0].type_ref, "p_entries_element_t*");

        let parent = by_name("p_c");
        assert_eq!(parent.vars[0].type_ref, "p_entries_element_t*");
    }

    #[test]
    fn test_top_level_list_needs_no_parent() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let lst = b.list("servers", None, &["name"]).unwrap();
        b.leaf("name", Some(lst), TypeDesc::primitive(BaseType::String))
            .unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "p");
        assert_eq!(reg.structs().len(), 2);
    }

    #[test]
    fn test_declaration_order_embedded_before_embedder() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let outer = b.container("outer", None).unwrap();
        let inner = b.container("inner", Some(outer)).unwrap();
        b.leaf("x", Some(inner), TypeDesc::primitive(BaseType::Uint8))
            .unwrap();
        let tree = b.finish();

        let reg = registry(&tree, "p");
        let names: Vec<_> = reg.structs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["p_inner", "p_outer"]);

        // Typedef order follows the same reversal.
        let td_names: Vec<_> = reg.typedefs().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(td_names, ["p_inner", "p_outer"]);

        // The embedder's field references the already declared struct.
        assert_eq!(reg.structs()[1].vars[0].type_ref, "p_inner_t");
        assert_eq!(reg.structs()[1].vars[0].kind, VarKind::Struct);
    }

    #[test]
    fn test_top_level_leaf_is_structural_violation() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        b.leaf("orphan", None, TypeDesc::primitive(BaseType::Uint8))
            .unwrap();
        let tree = b.finish();

        let err = walk(&tree, TypeWalker::new("p")).unwrap_err();
        assert!(matches!(err, WalkError::StructuralViolation { .. }));
    }

    #[test]
    fn test_struct_name_collision_is_fatal() {
        // "a-b" and "a_b" sanitize to the same struct name.
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        b.container("a-b", None).unwrap();
        b.container("a_b", None).unwrap();
        let tree = b.finish();

        let err = walk(&tree, TypeWalker::new("p")).unwrap_err();
        match err {
            WalkError::StructNameCollision { name, .. } => assert_eq!(name, "p_a_b"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_idempotent_registries() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let top = b.container("c", None).unwrap();
        b.leaf("mode", Some(top), mode_t()).unwrap();
        b.leaf_list("tags", Some(top), TypeDesc::primitive(BaseType::String))
            .unwrap();
        let tree = b.finish();

        let first = registry(&tree, "p");
        let second = registry(&tree, "p");
        assert_eq!(first.structs(), second.structs());
        assert_eq!(first.enums(), second.enums());
        assert_eq!(first.typedefs(), second.typedefs());
    }

    #[test]
    fn test_semantic_type_name_rule() {
        let mut b = TreeBuilder::new(ModuleInfo::new("m"));
        let top = b.container("c", None).unwrap();
        let named = b
            .leaf(
                "port",
                Some(top),
                TypeDesc::named("inet:port-number", BaseType::Uint16),
            )
            .unwrap();
        let inline = b
            .leaf(
                "state",
                Some(top),
                TypeDesc::enumeration(vec![EnumLiteral::new("ok", 0)]),
            )
            .unwrap();
        let tree = b.finish();

        assert_eq!(
            semantic_type_name(tree.node(named)).as_deref(),
            Some("port-number")
        );
        assert_eq!(
            semantic_type_name(tree.node(inline)).as_deref(),
            Some("state")
        );
        assert_eq!(semantic_type_name(tree.node(top)), None);
    }
}
