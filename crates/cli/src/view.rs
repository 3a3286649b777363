use kindscope_api::NodeKind;
use tabled::Tabled;

/// One table row per taxonomy member
#[derive(Tabled)]
pub struct KindRow {
    #[tabled(rename = "Identifier")]
    pub identifier: &'static str,
    #[tabled(rename = "Kind")]
    pub kind: &'static str,
    #[tabled(rename = "Subkind")]
    pub subkind: &'static str,
    #[tabled(rename = "Display")]
    pub display: String,
}

impl From<NodeKind> for KindRow {
    fn from(kind: NodeKind) -> Self {
        Self {
            identifier: kind.identifier(),
            kind: kind.kind(),
            subkind: kind.subkind().unwrap_or("-"),
            display: kind.to_string(),
        }
    }
}
