//! Client for the Google Places Nearby Search API.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::domain::{Coordinate, FoodBank, PlacesError, PlacesGateway, RadiusBound};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";
const USER_AGENT: &str = "food-bank-finder/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed search terms; the locator only ever asks for food banks.
const KEYWORD: &str = "food bank";
const CATEGORY: &str = "food";

/// Places API key from the environment, empty when unset. The upstream
/// answers keyless requests with REQUEST_DENIED, which surfaces through the
/// normal error path.
pub fn api_key_from_env() -> String {
    std::env::var("GOOGLE_PLACES_API_KEY").unwrap_or_default()
}

pub struct PlacesClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl PlacesClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base: &str) -> Result<Self, PlacesError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct NearbySearchDto {
    status: String,
    #[serde(default)]
    results: Vec<PlaceDto>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceDto {
    name: String,
    #[serde(default)]
    vicinity: Option<String>,
    geometry: GeometryDto,
}

#[derive(Debug, Deserialize)]
struct GeometryDto {
    location: LatLngDto,
}

#[derive(Debug, Deserialize)]
struct LatLngDto {
    lat: f64,
    lng: f64,
}

impl From<PlaceDto> for FoodBank {
    fn from(dto: PlaceDto) -> Self {
        Self {
            name: dto.name,
            address: dto.vicinity.unwrap_or_default(),
            coordinate: Coordinate {
                lat: dto.geometry.location.lat,
                lon: dto.geometry.location.lng,
            },
        }
    }
}

impl PlacesGateway for PlacesClient {
    async fn nearby_food_banks(
        &self,
        origin: Coordinate,
        bound: RadiusBound,
    ) -> Result<Vec<FoodBank>, PlacesError> {
        let mut url = self.base_url.join("nearbysearch/json")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("location", &format!("{},{}", origin.lat, origin.lon))
                .append_pair("keyword", KEYWORD)
                .append_pair("type", CATEGORY)
                .append_pair("key", &self.api_key);
            match bound {
                RadiusBound::Meters(meters) => {
                    pairs.append_pair("radius", &meters.to_string());
                }
                RadiusBound::RankByDistance => {
                    pairs.append_pair("rankby", "distance");
                }
            }
        }

        println!("[places] querying nearby food banks ({bound:?})");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let envelope: NearbySearchDto = response.json().await?;

        match envelope.status.as_str() {
            "OK" | "ZERO_RESULTS" => {
                Ok(envelope.results.into_iter().map(FoodBank::from).collect())
            }
            status => Err(PlacesError::Api(
                envelope
                    .error_message
                    .unwrap_or_else(|| status.to_string()),
            )),
        }
    }
}
