use super::inventory::InventoryList;
use super::locator::LocatorSession;

/// Everything the running app mutates. Owned by the UI layer as a single
/// signal and only ever touched from the UI thread.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub locator: LocatorSession,
    pub inventory: InventoryList,
}
