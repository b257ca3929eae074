use super::*;

#[test]
fn field_or_dash_falls_back_for_missing_values() {
    assert_eq!(field_or_dash(None), "-");
    assert_eq!(field_or_dash(Some("")), "-");
    assert_eq!(field_or_dash(Some("alice")), "alice");
}

#[test]
fn status_label_maps_active_flag() {
    assert_eq!(status_label(true), "Active");
    assert_eq!(status_label(false), "Inactive");
}
