//! API-identity walker.
//!
//! Assigns every admitted schema node a stable identifier, a prefix and an
//! output location, and owns the per-module virtual root entry that gives
//! top-level nodes a uniform logical parent. The finalized [`ApiTree`] is
//! one of the two registries the templating component renders from.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use yanggen_schema::{BaseType, ModuleInfo, NodeKind, NodeRef};

use crate::error::{QueryError, WalkError};
use crate::naming::to_c_identifier;
use crate::walker::{SchemaWalker, admits};

/// Prefix assignment mode, configured per module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipPrefixMode {
    /// Every node's prefix is its parent prefix joined with its own name.
    #[default]
    Default,
    /// Nodes directly under the module root get a bare name; deeper nodes
    /// get parent-joined prefixes.
    Root,
    /// Every node's prefix is just its own name.
    All,
}

impl SkipPrefixMode {
    /// Parses a mode from its configuration string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Self::Default),
            "root" => Some(Self::Root),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Index of an entry inside the [`ApiTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryId(usize);

/// Logical parent of the node currently being visited: either the synthetic
/// module root or a previously recorded real node.
#[derive(Debug, Clone, Copy)]
pub enum LogicalParent {
    /// The virtual per-module root entry.
    ModuleRoot(EntryId),
    /// A real schema node's entry.
    Node(EntryId),
}

impl LogicalParent {
    fn entry(&self) -> EntryId {
        match self {
            Self::ModuleRoot(id) | Self::Node(id) => *id,
        }
    }
}

/// One node's API identity.
#[derive(Debug, Clone)]
pub struct ApiEntry {
    /// Sanitized identifier name.
    pub name: String,
    /// Assigned prefix.
    pub prefix: String,
    /// Parent prefix, absent on virtual module roots.
    pub parent_prefix: Option<String>,
    /// Cross-module qualifier (`<module>:`), set only when the node's
    /// module differs from its parent's.
    pub module_qualifier: Option<String>,
    /// Output location directory.
    pub location: PathBuf,
    /// Structural path this entry is keyed by.
    pub path: String,
    /// Node kind (virtual roots report container).
    pub kind: NodeKind,
}

impl ApiEntry {
    /// Returns the three artifact file names generated for this entry:
    /// implementation, declaration and context declaration.
    #[must_use]
    pub fn artifacts(&self) -> [PathBuf; 3] {
        // The last location segment is the raw (unsanitized) node name.
        let stem = self
            .location
            .file_name()
            .map_or_else(|| self.name.clone(), |s| s.to_string_lossy().into_owned());
        [
            self.location.join(format!("{stem}.cpp")),
            self.location.join(format!("{stem}.hpp")),
            self.location.join(format!("{stem}-ctx.hpp")),
        ]
    }
}

/// Finalized API identity registry of one module.
#[derive(Debug, Clone)]
pub struct ApiTree {
    entries: Vec<ApiEntry>,
    by_path: HashMap<String, usize>,
    by_location: HashMap<PathBuf, String>,
}

impl ApiTree {
    /// Returns all entries in traversal order (virtual root first).
    #[must_use]
    pub fn entries(&self) -> &[ApiEntry] {
        &self.entries
    }

    /// Looks up the entry recorded for a structural path.
    #[must_use]
    pub fn entry(&self, path: &str) -> Option<&ApiEntry> {
        self.by_path.get(path).map(|&idx| &self.entries[idx])
    }

    /// Returns the distinct output directories in first-seen order.
    #[must_use]
    pub fn directories(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = Vec::new();
        for entry in &self.entries {
            if !dirs.contains(&entry.location.as_path()) {
                dirs.push(entry.location.as_path());
            }
        }
        dirs
    }

    /// Returns every artifact file name of every entry, in entry order.
    #[must_use]
    pub fn all_artifacts(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .flat_map(|e| e.artifacts())
            .collect()
    }

    /// Resolves an artifact file name back to the entry that owns it.
    ///
    /// # Errors
    /// Returns `QueryError::UnknownArtifact` if the file was never
    /// recorded. Callers treat this as a programming error.
    pub fn resolve_artifact(&self, file: &Path) -> Result<&ApiEntry, QueryError> {
        file.parent()
            .and_then(|dir| self.by_location.get(dir))
            .and_then(|path| self.entry(path))
            .ok_or_else(|| QueryError::UnknownArtifact {
                file: file.display().to_string(),
            })
    }
}

/// Static scalar-type lookup table: every base kind paired with its target
/// primitive type name, `None` where the type registry resolves instead.
#[must_use]
pub fn scalar_types() -> Vec<(BaseType, Option<&'static str>)> {
    BaseType::ALL
        .into_iter()
        .map(|b| (b, b.target_type()))
        .collect()
}

/// Walker that builds the [`ApiTree`].
#[derive(Debug)]
pub struct ApiWalker {
    prefix: String,
    mode: SkipPrefixMode,
    source_dir: PathBuf,
    entries: Vec<ApiEntry>,
    by_path: HashMap<String, usize>,
    by_location: HashMap<PathBuf, String>,
}

impl ApiWalker {
    /// Creates a walker for one module.
    ///
    /// `prefix` is the configured module prefix, `source_dir` the root the
    /// output consumer generates into.
    #[must_use]
    pub fn new(
        prefix: impl Into<String>,
        mode: SkipPrefixMode,
        source_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            mode,
            source_dir: source_dir.into(),
            entries: Vec::new(),
            by_path: HashMap::new(),
            by_location: HashMap::new(),
        }
    }

    fn record(&mut self, entry: ApiEntry) -> EntryId {
        let idx = self.entries.len();
        self.by_path.insert(entry.path.clone(), idx);
        self.by_location
            .insert(entry.location.clone(), entry.path.clone());
        self.entries.push(entry);
        EntryId(idx)
    }
}

impl SchemaWalker for ApiWalker {
    type Scope = LogicalParent;
    type Output = ApiTree;

    fn admit(&self, node: NodeRef<'_>) -> bool {
        admits(node)
    }

    fn enter_module(&mut self, module: &ModuleInfo) -> Result<LogicalParent, WalkError> {
        let location = self
            .source_dir
            .join("core")
            .join("api")
            .join(module.name());
        let id = self.record(ApiEntry {
            name: to_c_identifier(module.name()),
            prefix: self.prefix.clone(),
            parent_prefix: None,
            module_qualifier: None,
            location,
            path: format!("/{}", module.name()),
            kind: NodeKind::Container,
        });
        debug!(module = module.name(), "registered virtual module root");
        Ok(LogicalParent::ModuleRoot(id))
    }

    fn visit(
        &mut self,
        node: NodeRef<'_>,
        _depth: usize,
        scope: &LogicalParent,
    ) -> Result<LogicalParent, WalkError> {
        let parent = &self.entries[scope.entry().0];

        let prefix = match (self.mode, scope) {
            (SkipPrefixMode::All, _) | (SkipPrefixMode::Root, LogicalParent::ModuleRoot(_)) => {
                node.name().to_string()
            }
            _ => format!("{}_{}", parent.prefix, node.name()),
        };

        let module_qualifier = node
            .parent()
            .filter(|p| p.module_name() != node.module_name())
            .map(|_| format!("{}:", node.module_name()));

        let entry = ApiEntry {
            name: to_c_identifier(node.name()),
            prefix,
            parent_prefix: Some(parent.prefix.clone()),
            module_qualifier,
            location: parent.location.join(node.name()),
            path: node.path().to_string(),
            kind: node.kind(),
        };
        debug!(path = %entry.path, prefix = %entry.prefix, "recorded entry");
        let id = self.record(entry);
        Ok(LogicalParent::Node(id))
    }

    fn finalize(self) -> ApiTree {
        ApiTree {
            entries: self.entries,
            by_path: self.by_path,
            by_location: self.by_location,
        }
    }
}
