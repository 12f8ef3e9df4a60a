/// Keyboard shortcuts understood by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleFullscreen,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "f" | "F" => Some(KeyAction::ToggleFullscreen),
        _ => None,
    }
}
