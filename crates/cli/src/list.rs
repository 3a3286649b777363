use crate::view::KindRow;
use kindscope_api::NodeKindEntry;
use kindscope_core::{KindCatalog, KindFilter};
use tabled::{Table, settings::Style};
use tracing::info;

pub fn render(filter: &KindFilter, json: bool) -> kindscope_core::Result<String> {
    let catalog = KindCatalog::new();
    let kinds = catalog.filter(filter);
    info!(count = kinds.len(), json, "Listing node kinds");

    if json {
        let entries: Vec<NodeKindEntry> = kinds.into_iter().map(NodeKindEntry::from).collect();
        return KindCatalog::to_json_pretty(&entries);
    }

    if kinds.is_empty() {
        return Ok("No matching node kinds.".to_string());
    }

    let rows: Vec<KindRow> = kinds.into_iter().map(KindRow::from).collect();
    Ok(Table::new(&rows).with(Style::psql()).to_string())
}

/// Distinct primary kinds, each followed by the display strings filed under it.
pub fn render_grouped() -> String {
    let groups = KindCatalog::new().by_kind();
    let mut out = String::new();
    for (kind, members) in groups {
        let displays: Vec<String> = members.iter().map(ToString::to_string).collect();
        out.push_str(&format!("{:<10} {}\n", kind, displays.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_variant() {
        let table = render(&KindFilter::default(), false).unwrap();
        assert!(table.contains("Identifier"));
        assert!(table.contains("TBUILTIN"));
        assert!(table.contains("variable/local/resource"));
    }

    #[test]
    fn test_json_respects_filter() {
        let filter = KindFilter {
            kind: Some("record".to_string()),
            sub_only: false,
        };
        let json = render(&filter, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["identifier"], "RECORD_CLASS");
        assert_eq!(items[0]["display"], "record/class");
    }

    #[test]
    fn test_empty_table_message() {
        let filter = KindFilter {
            kind: Some("method".to_string()),
            sub_only: false,
        };
        assert_eq!(render(&filter, false).unwrap(), "No matching node kinds.");
        assert_eq!(render(&filter, true).unwrap(), "[]");
    }

    #[test]
    fn test_grouped_output() {
        let out = render_grouped();
        assert_eq!(out.lines().count(), 16);
        assert!(out.contains("function/constructor"));
        let variable_line = out.lines().last().unwrap();
        assert!(variable_line.starts_with("variable"));
        assert!(variable_line.contains("variable/local/parameter"));
    }
}
