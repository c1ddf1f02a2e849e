#![allow(dead_code)]

//! Capability boundaries the workflows depend on.
//!
//! Every external service is a small trait here so the decision logic can be
//! driven by fakes in tests. The reqwest-backed implementations live in
//! `crate::infra`.

use thiserror::Error;

use super::entities::{Coordinate, FoodBank, NutritionSignal};

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geocoding error: {0}")]
    Api(String),
}

/// Forward geocoding: free-form address to coordinate. `Ok(None)` is the
/// definite not-found signal, distinct from a transport failure.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError>;
}

#[derive(Debug, Error)]
pub enum IpLocateError {
    #[error("the service timed out")]
    Timeout,
    #[error("the service is unavailable")]
    Unavailable,
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for IpLocateError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            IpLocateError::Timeout
        } else if error.is_connect() {
            IpLocateError::Unavailable
        } else {
            IpLocateError::Other(error.to_string())
        }
    }
}

/// Best-effort address from the caller's network origin. `Ok(None)` means the
/// service answered but could not place the caller.
#[allow(async_fn_in_trait)]
pub trait IpLocator {
    async fn locate(&self) -> Result<Option<String>, IpLocateError>;
}

/// How a nearby query is bounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusBound {
    /// Results within this many meters of the origin, in capability order.
    Meters(f64),
    /// No bound; the capability orders results by increasing distance.
    RankByDistance,
}

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("places api error: {0}")]
    Api(String),
}

/// Points-of-interest directory restricted to the app's fixed food-bank
/// search terms.
#[allow(async_fn_in_trait)]
pub trait PlacesGateway {
    async fn nearby_food_banks(
        &self,
        origin: Coordinate,
        bound: RadiusBound,
    ) -> Result<Vec<FoodBank>, PlacesError>;
}

#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("nutrition api error: {0}")]
    Api(String),
}

/// Free-text product search returning one health signal per record, in
/// response order.
#[allow(async_fn_in_trait)]
pub trait NutritionGateway {
    async fn search_signals(&self, query: &str) -> Result<Vec<NutritionSignal>, NutritionError>;
}

/// Barcode-to-product-name lookup. `Ok(None)` means the code is not in the
/// database.
#[allow(async_fn_in_trait)]
pub trait ProductLookup {
    async fn product_name(&self, code: &str) -> Result<Option<String>, NutritionError>;
}

/// One frame from a camera capability. The payload is opaque to the app;
/// only a decoder interprets it.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraFrame(pub Vec<u8>);

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("no camera capability is configured")]
    Unavailable,
    #[error("failed to read from the camera: {0}")]
    Read(String),
}

/// A live camera producing an effectively infinite frame sequence,
/// restartable only by reopening the camera.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<CameraFrame, CameraError>;
}

/// Decodes zero or more barcode payloads out of one frame.
pub trait BarcodeDecoder {
    fn decode(&self, frame: &CameraFrame) -> Vec<String>;
}
