//! Property-based tests for site validation and email handling
//!
//! Uses proptest to check invariants over generated content.

use inkfox_core::{
    anchor_for, EmailAddress, InMemoryMailingList, MailingList, PromoItem, Section, Site,
    SiteError,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9]{0,15}").expect("valid regex")
}

fn item_strategy() -> impl Strategy<Value = PromoItem> {
    (word_strategy(), word_strategy(), ".{0,80}", word_strategy()).prop_map(
        |(image, title, subtitle, category)| {
            PromoItem::new(format!("{}.jpg", image), title, subtitle, category)
        },
    )
}

fn email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9._+-]{1,20}@[a-zA-Z0-9-]{1,20}\\.[a-zA-Z]{2,6}")
        .expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Sections built from non-empty titles and categories always validate
    #[test]
    fn generated_sections_validate(items in prop::collection::vec(item_strategy(), 0..12)) {
        let section = Section::new("books", "01", "BOOKS").with_items(items);
        prop_assert!(section.validate().is_ok());
    }

    /// Blanking any item's title is reported at that item's index
    #[test]
    fn blank_title_reported_at_index(
        items in prop::collection::vec(item_strategy(), 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut items = items;
        let index = pick.index(items.len());
        items[index].title = "   ".to_string();

        let section = Section::new("prints", "03", "PRINTS").with_items(items);
        match section.validate() {
            Err(SiteError::EmptyItemField { index: reported, field, .. }) => {
                prop_assert_eq!(reported, index);
                prop_assert_eq!(field, "title");
            }
            other => prop_assert!(false, "unexpected: {:?}", other),
        }
    }

    /// Anchors never contain whitespace or upper-case letters
    #[test]
    fn anchors_are_lowercase_slugs(label in "[A-Za-z ]{0,40}") {
        let anchor = anchor_for(&label);
        prop_assert!(!anchor.chars().any(char::is_whitespace));
        prop_assert_eq!(anchor.clone(), anchor.to_lowercase());
    }

    /// A section id derived from any nav label passes site validation
    #[test]
    fn derived_anchor_is_valid_section_id(label in "[A-Za-z]{1,12}( [A-Za-z]{1,12}){0,3}") {
        let anchor = anchor_for(&label);
        prop_assert_eq!(anchor_for(&anchor), anchor.clone());

        let mut site = Site::builtin();
        prop_assume!(site.footer.id != anchor && site.section(&anchor).is_none());
        site.sections[0].id = anchor;
        prop_assert!(site.validate().is_ok());
    }

    /// Well-formed addresses parse and normalize to lower case
    #[test]
    fn well_formed_emails_parse(raw in email_strategy()) {
        let email = EmailAddress::parse(&raw);
        prop_assert!(email.is_ok(), "rejected {}", raw);
        let email = email.unwrap();
        prop_assert_eq!(email.as_str(), raw.to_lowercase());
    }

    /// Strings without '@' never parse
    #[test]
    fn emails_without_at_rejected(raw in "[a-z0-9.]{0,40}") {
        prop_assert!(EmailAddress::parse(&raw).is_err());
    }

    /// The list size equals the number of distinct normalized addresses
    #[test]
    fn list_size_counts_distinct(raws in prop::collection::vec(email_strategy(), 0..20)) {
        let list = InMemoryMailingList::new();
        let mut distinct = std::collections::HashSet::new();
        for raw in &raws {
            let email = EmailAddress::parse(raw).unwrap();
            list.submit(&email).unwrap();
            distinct.insert(raw.to_lowercase());
        }
        prop_assert_eq!(list.len().unwrap(), distinct.len());
    }
}

#[test]
fn builtin_site_survives_json_roundtrip() {
    let site = Site::builtin();
    let json = site.to_json_pretty().unwrap();
    assert_eq!(Site::from_json(&json).unwrap(), site);
}
