//! Decision logic for the locator and inventory workflows lives here.

pub mod app_state;
pub mod classify;
pub mod entities;
pub mod geo;
pub mod inventory;
pub mod locator;
pub mod ports;
pub mod scan;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use classify::{classify, classify_item};
#[allow(unused_imports)]
pub use entities::{
    Classification, Coordinate, FoodBank, InventoryEntry, NutritionSignal, RadiusSpec, RadiusUnit,
    METERS_PER_KILOMETER, METERS_PER_MILE,
};
#[allow(unused_imports)]
pub use geo::{closest_preset, distance_miles, RADIUS_PRESETS};
#[allow(unused_imports)]
pub use inventory::{
    off_search_url, validate_item_name, walmart_search_url, InventoryError, InventoryList,
};
#[allow(unused_imports)]
pub use locator::{map_link, LocatorSession, SearchError, SearchOutcome, SearchRequest};
#[allow(unused_imports)]
pub use ports::{
    BarcodeDecoder, CameraError, CameraFrame, FrameSource, GeocodeError, Geocoder, IpLocateError,
    IpLocator, NutritionError, NutritionGateway, PlacesError, PlacesGateway, ProductLookup,
    RadiusBound,
};
#[allow(unused_imports)]
pub use scan::{resolve_scanned_item, CancelFlag, ScanError};
