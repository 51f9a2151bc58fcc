use scribe_types::{EntityMutability, Error};

// ── Serialization ────────────────────────────────────────────────

#[test]
fn serializes_in_screaming_case() {
    assert_eq!(
        serde_json::to_string(&EntityMutability::Immutable).unwrap(),
        "\"IMMUTABLE\""
    );
    assert_eq!(
        serde_json::to_string(&EntityMutability::Mutable).unwrap(),
        "\"MUTABLE\""
    );
    assert_eq!(
        serde_json::to_string(&EntityMutability::Segmented).unwrap(),
        "\"SEGMENTED\""
    );
}

#[test]
fn deserializes_from_screaming_case() {
    let parsed: EntityMutability = serde_json::from_str("\"SEGMENTED\"").unwrap();
    assert_eq!(parsed, EntityMutability::Segmented);
}

#[test]
fn rejects_unknown_labels() {
    assert!(serde_json::from_str::<EntityMutability>("\"immutable\"").is_err());
}

#[test]
fn display_matches_wire_labels() {
    assert_eq!(EntityMutability::Immutable.to_string(), "IMMUTABLE");
    assert_eq!(EntityMutability::Mutable.to_string(), "MUTABLE");
    assert_eq!(EntityMutability::Segmented.to_string(), "SEGMENTED");
}

// ── Error ────────────────────────────────────────────────────────

#[test]
fn unknown_entity_key_error_names_the_key() {
    let err = Error::UnknownEntityKey("17".to_string());
    assert_eq!(err.to_string(), "unknown entity key: 17");
}
