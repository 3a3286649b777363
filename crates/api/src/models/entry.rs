use super::node_kind::NodeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A flattened, serializable view of one taxonomy member.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct NodeKindEntry {
    /// Upper snake case variant name, e.g. `VARIABLE_PARAMETER`
    pub identifier: String,
    pub kind: String,
    /// Absent for core kinds
    pub subkind: Option<String>,
    /// `kind` or `kind/subkind`
    pub display: String,
}

impl From<NodeKind> for NodeKindEntry {
    fn from(kind: NodeKind) -> Self {
        Self {
            identifier: kind.identifier().to_string(),
            kind: kind.kind().to_string(),
            subkind: kind.subkind().map(str::to_string),
            display: kind.to_string(),
        }
    }
}

impl NodeKind {
    pub fn entry(self) -> NodeKindEntry {
        NodeKindEntry::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_core_kind() {
        let entry = NodeKind::Package.entry();
        assert_eq!(entry.identifier, "PACKAGE");
        assert_eq!(entry.kind, "package");
        assert_eq!(entry.subkind, None);
        assert_eq!(entry.display, "package");
    }

    #[test]
    fn test_entry_json_keeps_null_subkind() {
        let value = serde_json::to_value(NodeKind::Doc.entry()).unwrap();
        assert!(value["subkind"].is_null());

        let value = serde_json::to_value(NodeKind::VariableLocal.entry()).unwrap();
        assert_eq!(value["subkind"], "local");
        assert_eq!(value["display"], "variable/local");
    }
}
