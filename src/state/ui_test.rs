use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    assert!(!UiState::default().dark_mode);
}
