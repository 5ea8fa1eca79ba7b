use super::*;

#[test]
fn created_label_formats_rfc3339() {
    assert_eq!(created_label(Some("2024-03-05T10:15:00.000Z")), "Created Mar 5, 2024");
    assert_eq!(created_label(Some("2023-12-31T23:59:59+00:00")), "Created Dec 31, 2023");
}

#[test]
fn created_label_falls_back_when_missing_or_invalid() {
    assert_eq!(created_label(None), "Created Unknown");
    assert_eq!(created_label(Some("")), "Created Unknown");
    assert_eq!(created_label(Some("yesterday")), "Created Unknown");
}
