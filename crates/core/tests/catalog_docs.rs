use kindscope_api::NodeKind;
use kindscope_core::{KindCatalog, KindFilter};

#[test]
fn test_grouped_listing_covers_every_variant_once() {
    let catalog = KindCatalog::new();
    let groups = catalog.by_kind();

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, NodeKind::COUNT);

    for (kind, members) in &groups {
        assert!(members.iter().all(|m| m.kind() == *kind));
    }
}

#[test]
fn test_default_filter_keeps_everything() {
    let catalog = KindCatalog::default();
    let all = catalog.filter(&KindFilter::default());
    assert_eq!(all, NodeKind::ALL.to_vec());
}

#[test]
fn test_exported_entries_match_display() {
    let catalog = KindCatalog::new();
    for (entry, kind) in catalog.entries().iter().zip(catalog.kinds()) {
        assert_eq!(entry.display, kind.to_string());
        assert_eq!(entry.identifier, kind.identifier());
    }
}
