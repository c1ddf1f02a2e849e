//! The inventory checklist and its browser search shortcuts.

use thiserror::Error;

use super::entities::{Classification, InventoryEntry};
use crate::util::{generate_id, quote};

const WALMART_SEARCH_ENDPOINT: &str = "https://www.walmart.ca/search?q=";
const WALMART_GROCERY_CATEGORY: &str = "10019";
const OFF_SEARCH_ENDPOINT: &str = "https://world.openfoodfacts.org/cgi/search.pl?search_terms=";

/// Display strings double as the user-facing messages the UI toasts.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Please enter a food item.")]
    EmptyItem,
    #[error("No item selected.")]
    NoSelection,
}

/// Rejects the empty item name. Runs before any lookup.
pub fn validate_item_name(name: &str) -> Result<(), InventoryError> {
    if name.is_empty() {
        Err(InventoryError::EmptyItem)
    } else {
        Ok(())
    }
}

/// Walmart grocery search for the current item.
pub fn walmart_search_url(item: &str) -> String {
    format!(
        "{WALMART_SEARCH_ENDPOINT}{}&c={WALMART_GROCERY_CATEGORY}",
        quote(item)
    )
}

/// Open Food Facts search for the current item.
pub fn off_search_url(item: &str) -> String {
    format!(
        "{OFF_SEARCH_ENDPOINT}{}&search_simple=1&action=process",
        quote(item)
    )
}

/// The displayed checklist. Entries live only for the process lifetime;
/// there is no backing store.
#[derive(Clone, Debug, Default)]
pub struct InventoryList {
    entries: Vec<InventoryEntry>,
}

impl InventoryList {
    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a classified item and returns its id.
    pub fn add(
        &mut self,
        name: &str,
        classification: Classification,
    ) -> Result<String, InventoryError> {
        validate_item_name(name)?;
        let id = generate_id("item");
        self.entries.push(InventoryEntry {
            id: id.clone(),
            name: name.to_string(),
            classification,
        });
        Ok(id)
    }

    /// Removes the selected entry. A missing selection is an error, not a
    /// no-op.
    pub fn remove(&mut self, selected: Option<&str>) -> Result<InventoryEntry, InventoryError> {
        let id = selected.ok_or(InventoryError::NoSelection)?;
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(InventoryError::NoSelection)?;
        Ok(self.entries.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_an_empty_item_is_rejected_and_list_unchanged() {
        let mut list = InventoryList::default();
        let result = list.add("", Classification::Green);
        assert!(matches!(result, Err(InventoryError::EmptyItem)));
        assert!(list.is_empty());
    }

    #[test]
    fn added_items_keep_their_classification() {
        let mut list = InventoryList::default();
        list.add("oats", Classification::Green).expect("valid add");
        list.add("soda", Classification::Red).expect("valid add");

        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0].name, "oats");
        assert_eq!(list.entries()[0].classification, Classification::Green);
        assert_eq!(list.entries()[1].classification, Classification::Red);
    }

    #[test]
    fn removing_without_a_selection_is_rejected_and_list_unchanged() {
        let mut list = InventoryList::default();
        list.add("oats", Classification::Green).expect("valid add");

        let result = list.remove(None);
        assert!(matches!(result, Err(InventoryError::NoSelection)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn removing_a_selected_entry_returns_it() {
        let mut list = InventoryList::default();
        let id = list.add("oats", Classification::Green).expect("valid add");
        list.add("soda", Classification::Red).expect("valid add");

        let removed = list.remove(Some(&id)).expect("selection exists");
        assert_eq!(removed.name, "oats");
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].name, "soda");
    }

    #[test]
    fn removing_a_stale_selection_is_rejected() {
        let mut list = InventoryList::default();
        let id = list.add("oats", Classification::Green).expect("valid add");
        list.remove(Some(&id)).expect("first removal");

        let result = list.remove(Some(&id));
        assert!(matches!(result, Err(InventoryError::NoSelection)));
    }

    #[test]
    fn walmart_search_url_encodes_the_item() {
        assert_eq!(
            walmart_search_url("peanut butter"),
            "https://www.walmart.ca/search?q=peanut%20butter&c=10019"
        );
    }

    #[test]
    fn off_search_url_encodes_the_item() {
        assert_eq!(
            off_search_url("brie & crackers"),
            "https://world.openfoodfacts.org/cgi/search.pl?search_terms=brie%20%26%20crackers&search_simple=1&action=process"
        );
    }
}
