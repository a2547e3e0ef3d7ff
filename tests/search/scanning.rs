//! Page scanning: which elements become entries, with which type and url.

use super::common::{storefront_entries, storefront_page};
use allo_search::{scan, EntryType, PageSnapshot, NO_TARGET};

#[test]
fn test_scan_order_is_tiles_then_menu_then_cards() {
    let titles: Vec<String> = storefront_entries()
        .iter()
        .map(|e| e.title().to_string())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Telecom",
            "Gaming",
            "Streaming",
            "Gaming",
            "Steam Keys",
            "PlayStation",
            "Mobile Top-up",
            "Steam Wallet 20 EUR",
            "Netflix 1 Month",
            "Phone Repair",
        ]
    );
}

#[test]
fn test_scan_assigns_types() {
    let entries = storefront_entries();
    let types: Vec<&EntryType> = entries.iter().map(|e| e.entry_type()).collect();
    assert_eq!(
        types,
        vec![
            &EntryType::Category,
            &EntryType::Category,
            &EntryType::Category,
            &EntryType::Category,
            &EntryType::Subcategory,
            &EntryType::Subcategory,
            &EntryType::Category,
            &EntryType::Product,
            &EntryType::Product,
            &EntryType::Service,
        ]
    );
}

#[test]
fn test_tiles_carry_category_keyword() {
    let entries = storefront_entries();
    assert_eq!(entries[0].keywords(), ["Telecom", "category"]);
    // menu links and cards only carry their title
    assert_eq!(entries[4].keywords(), ["Steam Keys"]);
    assert_eq!(entries[9].keywords(), ["Phone Repair"]);
}

#[test]
fn test_missing_href_becomes_sentinel() {
    let entries = storefront_entries();
    let mobile = entries
        .iter()
        .find(|e| e.title() == "Mobile Top-up")
        .expect("menu link without href is still an entry");
    assert_eq!(mobile.url(), NO_TARGET);
    assert!(!mobile.is_navigable());
}

#[test]
fn test_snapshot_json_matches_fixture() {
    let json = r#"{
        "categoryTiles": [{"title": "Telecom", "href": "/c/telecom"}],
        "menuLinks": [{"text": " Steam Keys ", "href": "/c/steam-keys", "depth": 1}],
        "listingCards": [{"title": "Phone Repair", "actionHref": "/s/phone-repair", "service": true}]
    }"#;
    let page: PageSnapshot = serde_json::from_str(json).unwrap();
    let entries = scan(&page);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].title(), "Steam Keys");
    assert_eq!(entries[2].entry_type(), &EntryType::Service);
    assert_eq!(entries[2].url(), "/s/phone-repair");
}

#[test]
fn test_scan_is_repeatable() {
    let page = storefront_page();
    assert_eq!(scan(&page), scan(&page));
}
