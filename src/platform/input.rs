//! Keyboard state
//!
//! Key events land here as they arrive; the simulation only ever sees the
//! `TickInput` snapshot taken at the top of a frame, so the last event before
//! the snapshot wins.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Steering directions understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Left,
    Right,
    Up,
    Down,
}

impl LogicalKey {
    /// Key names (as reported by `KeyboardEvent.key`) bound to this direction
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            LogicalKey::Left => &["ArrowLeft", "a"],
            LogicalKey::Right => &["ArrowRight", "d"],
            LogicalKey::Up => &["ArrowUp", "w"],
            LogicalKey::Down => &["ArrowDown", "s"],
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = normalize_key(key);
        [
            LogicalKey::Left,
            LogicalKey::Right,
            LogicalKey::Up,
            LogicalKey::Down,
        ]
        .into_iter()
        .find(|k| k.aliases().contains(&key.as_str()))
    }
}

/// Single letters are folded to lowercase so Shift/Caps Lock don't strand a key
fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().collect(),
        _ => key.to_string(),
    }
}

/// Set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press (repeats are harmless)
    pub fn key_down(&mut self, key: &str) {
        self.held.insert(normalize_key(key));
    }

    /// Record a key release
    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&normalize_key(key));
    }

    /// Drop everything (e.g. when the page loses focus)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        key.aliases().iter().any(|alias| self.held.contains(*alias))
    }

    /// Sample the current state for one tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_held(LogicalKey::Left),
            right: self.is_held(LogicalKey::Right),
            up: self.is_held(LogicalKey::Up),
            down: self.is_held(LogicalKey::Down),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_letter_aliases() {
        let mut keys = KeyState::new();
        keys.key_down("ArrowLeft");
        keys.key_down("w");
        let input = keys.snapshot();
        assert!(input.left && input.up);
        assert!(!input.right && !input.down);

        keys.key_up("ArrowLeft");
        keys.key_down("d");
        keys.key_down("ArrowDown");
        let input = keys.snapshot();
        assert!(!input.left && input.right && input.up && input.down);
    }

    #[test]
    fn test_releasing_one_alias_keeps_the_other() {
        let mut keys = KeyState::new();
        keys.key_down("ArrowRight");
        keys.key_down("d");
        keys.key_up("d");
        assert!(keys.is_held(LogicalKey::Right));
        keys.key_up("ArrowRight");
        assert!(!keys.is_held(LogicalKey::Right));
    }

    #[test]
    fn test_letter_case_is_folded() {
        let mut keys = KeyState::new();
        keys.key_down("A");
        assert!(keys.is_held(LogicalKey::Left));
        keys.key_up("a");
        assert!(!keys.is_held(LogicalKey::Left));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut keys = KeyState::new();
        keys.key_down(" ");
        keys.key_down("Enter");
        keys.key_down("q");
        assert_eq!(keys.snapshot(), TickInput::default());
        keys.clear();
        assert_eq!(keys.snapshot(), TickInput::default());
    }

    #[test]
    fn test_from_key() {
        assert_eq!(LogicalKey::from_key("ArrowUp"), Some(LogicalKey::Up));
        assert_eq!(LogicalKey::from_key("S"), Some(LogicalKey::Down));
        assert_eq!(LogicalKey::from_key("arrowup"), None);
        assert_eq!(LogicalKey::from_key("x"), None);
    }
}
