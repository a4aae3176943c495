use super::*;

fn identity(display_name: Option<&str>, photo_url: Option<&str>) -> Identity {
    Identity {
        uid: "u-1".to_owned(),
        email: Some("jane@example.com".to_owned()),
        display_name: display_name.map(str::to_owned),
        photo_url: photo_url.map(str::to_owned),
    }
}

// =============================================================
// split_full_name
// =============================================================

#[test]
fn split_two_tokens() {
    assert_eq!(split_full_name("Jane Doe"), ("Jane".to_owned(), "Doe".to_owned()));
}

#[test]
fn split_single_token_leaves_last_empty() {
    assert_eq!(split_full_name("Madonna"), ("Madonna".to_owned(), String::new()));
}

#[test]
fn split_discards_remainder() {
    assert_eq!(split_full_name("Mary Jane Watson"), ("Mary".to_owned(), "Jane".to_owned()));
}

#[test]
fn split_trims_outer_whitespace() {
    assert_eq!(split_full_name("  Jane Doe  "), ("Jane".to_owned(), "Doe".to_owned()));
}

#[test]
fn split_empty_is_empty() {
    assert_eq!(split_full_name(""), (String::new(), String::new()));
}

// =============================================================
// registration_record
// =============================================================

#[test]
fn registration_record_keys_by_identity_uid() {
    let record = registration_record(&identity(None, None), "Jane Doe", "typed@example.com", "2025-01-01T00:00:00Z");
    assert_eq!(record.uid, "u-1");
    assert_eq!(record.email, "jane@example.com");
    assert_eq!(record.first_name, "Jane");
    assert_eq!(record.last_name, "Doe");
    assert_eq!(record.img, "");
    assert_eq!(record.created_at.as_deref(), Some("2025-01-01T00:00:00Z"));
}

#[test]
fn registration_record_falls_back_to_typed_email() {
    let mut id = identity(None, None);
    id.email = None;
    let record = registration_record(&id, "Madonna", "typed@example.com", "t");
    assert_eq!(record.email, "typed@example.com");
    assert_eq!(record.last_name, "");
}

// =============================================================
// federated_record
// =============================================================

#[test]
fn federated_record_uses_display_name_and_photo() {
    let record = federated_record(&identity(Some("Grace Hopper"), Some("https://example.com/g.png")));
    assert_eq!(record.first_name, "Grace");
    assert_eq!(record.last_name, "Hopper");
    assert_eq!(record.img, "https://example.com/g.png");
    assert!(record.created_at.is_none());
}

#[test]
fn federated_record_without_profile_data_is_blank() {
    let record = federated_record(&identity(None, None));
    assert_eq!(record.first_name, "");
    assert_eq!(record.last_name, "");
    assert_eq!(record.img, "");
}
