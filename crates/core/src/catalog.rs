use crate::error::Result;
use indexmap::IndexMap;
use kindscope_api::{NodeKind, NodeKindEntry};
use tracing::{debug, warn};

/// Restricts a catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindFilter {
    /// Keep only variants whose primary kind equals this string
    pub kind: Option<String>,
    /// Keep only variants that carry a subkind
    pub sub_only: bool,
}

impl KindFilter {
    pub fn matches(&self, node_kind: NodeKind) -> bool {
        if self.sub_only && !node_kind.is_subkind() {
            return false;
        }
        match &self.kind {
            Some(kind) => node_kind.kind() == kind.as_str(),
            None => true,
        }
    }
}

/// Read-only view over the node kind taxonomy used by tooling
/// (listing, documentation and schema export).
#[derive(Debug, Clone, Copy)]
pub struct KindCatalog {
    kinds: &'static [NodeKind],
}

impl Default for KindCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl KindCatalog {
    pub fn new() -> Self {
        Self {
            kinds: &NodeKind::ALL,
        }
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.kinds.iter().copied()
    }

    pub fn entries(&self) -> Vec<NodeKindEntry> {
        self.kinds().map(NodeKindEntry::from).collect()
    }

    pub fn filter(&self, filter: &KindFilter) -> Vec<NodeKind> {
        let matched: Vec<NodeKind> = self.kinds().filter(|k| filter.matches(*k)).collect();
        debug!(?filter, matched = matched.len(), "Filtered node kinds");
        matched
    }

    /// Group variants by primary kind, keeping the order in which each kind first appears.
    pub fn by_kind(&self) -> IndexMap<&'static str, Vec<NodeKind>> {
        let mut groups: IndexMap<&'static str, Vec<NodeKind>> = IndexMap::new();
        for node_kind in self.kinds() {
            groups.entry(node_kind.kind()).or_default().push(node_kind);
        }
        groups
    }

    pub fn lookup(&self, identifier: &str) -> Result<NodeKind> {
        match NodeKind::from_identifier(identifier) {
            Ok(node_kind) => {
                debug!(identifier, display = %node_kind, "Resolved node kind");
                Ok(node_kind)
            }
            Err(e) => {
                warn!(identifier, "Unknown node kind identifier");
                Err(e.into())
            }
        }
    }

    pub fn to_json_pretty(entries: &[NodeKindEntry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }

    /// JSON Schema describing the output of `entries()`.
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Vec<NodeKindEntry>);
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    /// JSON Schema of a serialized `NodeKind`: a string enum of display strings.
    pub fn kind_schema() -> Result<String> {
        let schema = schemars::schema_for!(NodeKind);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
