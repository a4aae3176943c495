use super::*;

#[test]
fn format_rfc3339_epoch() {
    assert_eq!(format_rfc3339(OffsetDateTime::UNIX_EPOCH), "1970-01-01T00:00:00Z");
}

#[test]
fn now_rfc3339_parses_back() {
    let now = now_rfc3339();
    assert!(OffsetDateTime::parse(&now, &Rfc3339).is_ok());
}

#[test]
fn unix_now_is_after_2024() {
    assert!(unix_now() > 1_704_067_200);
}
