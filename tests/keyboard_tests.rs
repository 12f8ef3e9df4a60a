// Host-side tests for pure keyboard functions.
mod keys {
    include!("../src/events/keys.rs");
}

use keys::*;

#[test]
fn f_toggles_fullscreen_in_either_case() {
    assert_eq!(action_for_key("f"), Some(KeyAction::ToggleFullscreen));
    assert_eq!(action_for_key("F"), Some(KeyAction::ToggleFullscreen));
}

#[test]
fn other_keys_do_nothing() {
    for key in ["g", "Escape", " ", "Enter", "ff", ""] {
        assert_eq!(action_for_key(key), None, "key {key:?}");
    }
}
