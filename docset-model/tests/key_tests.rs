use docset_model::DocKey;
use pretty_assertions::assert_eq;
use uuid::Uuid;

// ── Canonical forms ──────────────────────────────────────────────

#[test]
fn text_key_is_stored_verbatim() {
    assert_eq!(DocKey::from("key1").as_str(), "key1");
    assert_eq!(DocKey::from("key1".to_string()).as_str(), "key1");
}

#[test]
fn integer_keys_render_as_decimal_text() {
    assert_eq!(DocKey::from(42_i32).as_str(), "42");
    assert_eq!(DocKey::from(42_i64).as_str(), "42");
    assert_eq!(DocKey::from(42_u32).as_str(), "42");
    assert_eq!(DocKey::from(42_u64).as_str(), "42");
    assert_eq!(DocKey::from(-7_i64).as_str(), "-7");
}

#[test]
fn uuid_key_renders_hyphenated_lowercase() {
    let uuid = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    assert_eq!(
        DocKey::from(uuid).as_str(),
        "67e55044-10b1-426f-9247-bb680e5fe0c8"
    );
}

// ── Equality across input forms ──────────────────────────────────

#[test]
fn equal_canonical_forms_are_the_same_key() {
    assert_eq!(DocKey::from(42_i64), DocKey::from("42"));
    assert_eq!(DocKey::from(42_u32), DocKey::from(42_i64));

    let uuid = Uuid::new_v4();
    assert_eq!(DocKey::from(uuid), DocKey::from(uuid.to_string()));
}

#[test]
fn different_keys_are_not_equal() {
    assert_ne!(DocKey::from("a"), DocKey::from("b"));
    assert_ne!(DocKey::from(1_i64), DocKey::from(2_i64));
}

// ── Display & serde ──────────────────────────────────────────────

#[test]
fn display_matches_canonical_form() {
    assert_eq!(DocKey::from("key1").to_string(), "key1");
    assert_eq!(DocKey::new(7_i64).to_string(), "7");
}

#[test]
fn serde_is_transparent() {
    let key = DocKey::from("key1");
    let json = serde_json::to_string(&key).unwrap();
    assert_eq!(json, "\"key1\"");
    let parsed: DocKey = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, key);
}
