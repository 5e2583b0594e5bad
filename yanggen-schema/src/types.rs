//! Base types and leaf type descriptors.
//!
//! This module contains the type information carried by leaf and leaf-list
//! nodes: the YANG built-in base kind, the (possibly module-qualified) type
//! name, and the literal sets for enumerations, bit sets and unions.

/// YANG built-in base type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// Unknown or unresolved type.
    Unknown,
    /// Binary data.
    Binary,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// String.
    String,
    /// Bit set.
    Bits,
    /// Boolean.
    Boolean,
    /// 64-bit decimal.
    Decimal64,
    /// Empty (presence-only) type.
    Empty,
    /// Enumeration.
    Enumeration,
    /// Identity reference.
    Identityref,
    /// Instance identifier.
    InstanceId,
    /// Leaf reference.
    Leafref,
    /// Union of member types.
    Union,
}

impl BaseType {
    /// All base type kinds, in schema-language declaration order.
    pub const ALL: [Self; 20] = [
        Self::Unknown,
        Self::Binary,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::String,
        Self::Bits,
        Self::Boolean,
        Self::Decimal64,
        Self::Empty,
        Self::Enumeration,
        Self::Identityref,
        Self::InstanceId,
        Self::Leafref,
        Self::Union,
    ];

    /// Returns the schema-language keyword for this base type.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Binary => "binary",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::String => "string",
            Self::Bits => "bits",
            Self::Boolean => "boolean",
            Self::Decimal64 => "decimal64",
            Self::Empty => "empty",
            Self::Enumeration => "enumeration",
            Self::Identityref => "identityref",
            Self::InstanceId => "instance-id",
            Self::Leafref => "leafref",
            Self::Union => "union",
        }
    }

    /// Parses a base type from its schema-language keyword.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.keyword() == s)
    }

    /// Returns the target-language primitive type for this base kind.
    ///
    /// Returns `None` for kinds that have no direct primitive mapping
    /// (binary, bits, enumeration, instance-id, leafref, union, unknown);
    /// those are resolved by the type registry instead.
    #[must_use]
    pub const fn target_type(&self) -> Option<&'static str> {
        match self {
            Self::Uint8 => Some("uint8_t"),
            Self::Uint16 => Some("uint16_t"),
            Self::Uint32 => Some("uint32_t"),
            Self::Uint64 => Some("uint64_t"),
            Self::Int8 => Some("int8_t"),
            Self::Int16 => Some("int16_t"),
            Self::Int32 => Some("int32_t"),
            Self::Int64 => Some("int64_t"),
            Self::String => Some("std::string"),
            Self::Boolean => Some("bool"),
            Self::Decimal64 => Some("double"),
            Self::Empty => Some("bool"),
            Self::Identityref => Some("std::string"),
            Self::Unknown
            | Self::Binary
            | Self::Bits
            | Self::Enumeration
            | Self::InstanceId
            | Self::Leafref
            | Self::Union => None,
        }
    }
}

/// One enumeration literal with its declared position.
///
/// The position is a stored/wire value and is never renumbered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumLiteral {
    /// Literal display name.
    pub name: String,
    /// Declared integer position.
    pub position: u32,
}

impl EnumLiteral {
    /// Creates a new enumeration literal.
    #[must_use]
    pub fn new(name: impl Into<String>, position: u32) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// One bit of a bit set with its declared bit position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitLiteral {
    /// Bit display name.
    pub name: String,
    /// Declared bit position.
    pub position: u32,
}

impl BitLiteral {
    /// Creates a new bit literal.
    #[must_use]
    pub fn new(name: impl Into<String>, position: u32) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// One member type of a union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionMember {
    /// Member display name (the type name as written in the schema).
    pub name: String,
    /// Member base kind.
    pub base: BaseType,
}

impl UnionMember {
    /// Creates a new union member.
    #[must_use]
    pub fn new(name: impl Into<String>, base: BaseType) -> Self {
        Self {
            name: name.into(),
            base,
        }
    }
}

/// Type descriptor for a leaf or leaf-list node.
///
/// `name` is the type name as written in the schema, possibly carrying a
/// module qualifier (`inet:port-number`). For inline (anonymous) types it
/// equals the base-kind keyword, which is how [`TypeDesc::is_named`] tells
/// reusable named types apart from one-off inline definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDesc {
    name: String,
    base: BaseType,
    enums: Vec<EnumLiteral>,
    bits: Vec<BitLiteral>,
    union_members: Vec<UnionMember>,
}

impl TypeDesc {
    /// Creates a descriptor for an inline primitive type.
    #[must_use]
    pub fn primitive(base: BaseType) -> Self {
        Self {
            name: base.keyword().to_string(),
            base,
            enums: Vec::new(),
            bits: Vec::new(),
            union_members: Vec::new(),
        }
    }

    /// Creates a descriptor for a reusable named type derived from a
    /// primitive base (`inet:port-number` over `uint16`, for example).
    #[must_use]
    pub fn named(name: impl Into<String>, base: BaseType) -> Self {
        Self {
            name: name.into(),
            base,
            enums: Vec::new(),
            bits: Vec::new(),
            union_members: Vec::new(),
        }
    }

    /// Creates a descriptor for an inline (anonymous) enumeration.
    #[must_use]
    pub fn enumeration(literals: Vec<EnumLiteral>) -> Self {
        Self {
            enums: literals,
            ..Self::primitive(BaseType::Enumeration)
        }
    }

    /// Creates a descriptor for a reusable named enumeration type.
    #[must_use]
    pub fn named_enumeration(name: impl Into<String>, literals: Vec<EnumLiteral>) -> Self {
        Self {
            name: name.into(),
            enums: literals,
            ..Self::primitive(BaseType::Enumeration)
        }
    }

    /// Creates a descriptor for an inline (anonymous) bit set.
    #[must_use]
    pub fn bits(literals: Vec<BitLiteral>) -> Self {
        Self {
            bits: literals,
            ..Self::primitive(BaseType::Bits)
        }
    }

    /// Creates a descriptor for a reusable named bit set type.
    #[must_use]
    pub fn named_bits(name: impl Into<String>, literals: Vec<BitLiteral>) -> Self {
        Self {
            name: name.into(),
            bits: literals,
            ..Self::primitive(BaseType::Bits)
        }
    }

    /// Creates a descriptor for an inline (anonymous) union.
    #[must_use]
    pub fn union(members: Vec<UnionMember>) -> Self {
        Self {
            union_members: members,
            ..Self::primitive(BaseType::Union)
        }
    }

    /// Creates a descriptor for a reusable named union type.
    #[must_use]
    pub fn named_union(name: impl Into<String>, members: Vec<UnionMember>) -> Self {
        Self {
            name: name.into(),
            union_members: members,
            ..Self::primitive(BaseType::Union)
        }
    }

    /// Returns the type name as written in the schema.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base kind.
    #[must_use]
    pub const fn base(&self) -> BaseType {
        self.base
    }

    /// Returns true if this descriptor references a reusable named type
    /// rather than an inline definition.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.name != self.base.keyword()
    }

    /// Returns the enumeration literals (empty unless base is enumeration).
    #[must_use]
    pub fn enums(&self) -> &[EnumLiteral] {
        &self.enums
    }

    /// Returns the bit literals (empty unless base is bits).
    #[must_use]
    pub fn bit_literals(&self) -> &[BitLiteral] {
        &self.bits
    }

    /// Returns the union member types (empty unless base is union).
    #[must_use]
    pub fn union_members(&self) -> &[UnionMember] {
        &self.union_members
    }
}
