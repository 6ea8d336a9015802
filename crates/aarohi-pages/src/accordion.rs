//! Single-expansion accordion state.

/// Tracks which item of an expandable list is open, if any.
///
/// At most one item is expanded at a time: toggling the expanded item
/// collapses it, toggling a different item replaces the expansion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accordion<K: PartialEq> {
    expanded: Option<K>,
}

impl<K: PartialEq> Accordion<K> {
    /// Creates an accordion with nothing expanded.
    pub fn new() -> Self {
        Self { expanded: None }
    }

    /// The currently expanded key, if any.
    pub fn expanded(&self) -> Option<&K> {
        self.expanded.as_ref()
    }

    /// Whether the given key is the expanded one.
    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.as_ref() == Some(key)
    }

    /// Handles a click on the item with the given key.
    pub fn toggle(&mut self, key: K) {
        if self.is_expanded(&key) {
            self.expanded = None;
        } else {
            self.expanded = Some(key);
        }
    }

    /// Collapses everything.
    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expands_then_collapses() {
        let mut accordion = Accordion::new();
        accordion.toggle("dowry");
        assert!(accordion.is_expanded(&"dowry"));
        accordion.toggle("dowry");
        assert_eq!(accordion.expanded(), None);
    }

    #[test]
    fn test_toggling_another_item_replaces_expansion() {
        let mut accordion = Accordion::new();
        accordion.toggle("dowry");
        accordion.toggle("domestic-violence");
        assert!(accordion.is_expanded(&"domestic-violence"));
        assert!(!accordion.is_expanded(&"dowry"));
    }

    #[test]
    fn test_collapse() {
        let mut accordion = Accordion::new();
        accordion.toggle(7u32);
        accordion.collapse();
        assert_eq!(accordion.expanded(), None);
    }
}
