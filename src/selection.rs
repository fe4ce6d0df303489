//! The one piece of business state on the screen: which character is selected.

/// Sentinel returned by [`SelectionStore::get`] before any pick.
pub const NO_SELECTION: &str = "none";

/// Holds the name of the currently selected character.
///
/// Owned by the screen and handed to the dispatcher by `&mut`, so every
/// mutation is visible at the call site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStore {
    selected: Option<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the selected character, or [`NO_SELECTION`].
    pub fn get(&self) -> &str {
        self.selected.as_deref().unwrap_or(NO_SELECTION)
    }

    /// Replace the selection. Any name is accepted.
    pub fn select(&mut self, name: impl Into<String>) {
        self.selected = Some(name.into());
    }

    pub fn is_none(&self) -> bool {
        self.get() == NO_SELECTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_sentinel() {
        let store = SelectionStore::new();
        assert_eq!(store.get(), "none");
        assert!(store.is_none());
    }

    #[test]
    fn select_overwrites() {
        let mut store = SelectionStore::new();
        store.select("Zhongli");
        store.select("Diluc");
        assert_eq!(store.get(), "Diluc");
        assert!(!store.is_none());
    }

    #[test]
    fn selecting_the_sentinel_reads_back_as_none() {
        let mut store = SelectionStore::new();
        store.select("Venti");
        store.select(NO_SELECTION);
        assert!(store.is_none());
    }

    proptest! {
        #[test]
        fn select_is_idempotent(name in "\\PC*") {
            let mut once = SelectionStore::new();
            once.select(name.clone());

            let mut twice = SelectionStore::new();
            twice.select(name.clone());
            twice.select(name.clone());

            prop_assert_eq!(twice.get(), name.as_str());
            prop_assert_eq!(once, twice);
        }
    }
}
