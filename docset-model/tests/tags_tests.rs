use docset_model::{TagSet, TAG_DELIMITER};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn preserves_insertion_order() {
    let tags = TagSet::from(["fr-FR", "en-US", "de-DE"]);
    let order: Vec<&str> = tags.iter().collect();
    assert_eq!(order, vec!["fr-FR", "en-US", "de-DE"]);
}

#[test]
fn drops_duplicates_and_empty_labels() {
    let tags = TagSet::from(["en-US", "", "en-US", "fr-FR"]);
    assert_eq!(tags.len(), 2);
    let order: Vec<&str> = tags.iter().collect();
    assert_eq!(order, vec!["en-US", "fr-FR"]);
}

#[test]
fn empty_set_is_empty() {
    assert!(TagSet::empty().is_empty());
    assert_eq!(TagSet::empty().len(), 0);
    assert_eq!(TagSet::empty().signature(), "");
}

// ── Equality ─────────────────────────────────────────────────────

#[test]
fn equality_ignores_order() {
    assert_eq!(
        TagSet::from(["en-US", "fr-FR"]),
        TagSet::from(["fr-FR", "en-US"])
    );
}

#[test]
fn different_sets_are_not_equal() {
    assert_ne!(TagSet::from(["en-US"]), TagSet::from(["en-GB"]));
    assert_ne!(TagSet::from(["en-US"]), TagSet::empty());
}

// ── Signatures ───────────────────────────────────────────────────

#[test]
fn signature_wraps_each_tag_in_delimiters() {
    let tags = TagSet::from(["en-US", "fr-FR"]);
    assert_eq!(tags.signature(), "||en-US||fr-FR||");
    assert!(tags.signature().contains(&format!(
        "{TAG_DELIMITER}fr-FR{TAG_DELIMITER}"
    )));
}

#[test]
fn canonical_signature_is_order_independent() {
    let a = TagSet::from(["en-US", "fr-FR"]);
    let b = TagSet::from(["fr-FR", "en-US"]);
    assert_eq!(a.canonical_signature(), b.canonical_signature());
    assert_ne!(a.signature(), b.signature());
}

#[test]
fn parse_round_trips_the_display_signature() {
    let tags = TagSet::from(["fr-FR", "en-US"]);
    let parsed = TagSet::parse(&tags.signature());
    let order: Vec<&str> = parsed.iter().collect();
    assert_eq!(order, vec!["fr-FR", "en-US"]);
    assert_eq!(parsed, tags);
}

#[test]
fn parse_of_empty_signature_is_the_empty_set() {
    assert!(TagSet::parse("").is_empty());
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn reversal_never_changes_identity(tags in proptest::collection::vec("[a-zA-Z0-9-]{1,12}", 0..6)) {
        let forward = TagSet::new(tags.clone());
        let backward = TagSet::new(tags.into_iter().rev());
        prop_assert_eq!(forward.canonical_signature(), backward.canonical_signature());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn signature_round_trips_through_parse(tags in proptest::collection::vec("[a-zA-Z0-9-]{1,12}", 0..6)) {
        let original = TagSet::new(tags);
        let parsed = TagSet::parse(&original.signature());
        prop_assert_eq!(parsed, original);
    }
}
