//! Location resolution over HTTP: Nominatim forward geocoding and ipinfo.io
//! IP lookup.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::domain::{Coordinate, GeocodeError, Geocoder, IpLocateError, IpLocator};

const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org/";
const IPINFO_BASE_URL: &str = "https://ipinfo.io/";
const USER_AGENT: &str = "food-bank-finder/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct NominatimClient {
    http: Client,
    base_url: Url,
}

impl NominatimClient {
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_base_url(NOMINATIM_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, GeocodeError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }
}

/// Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlaceDto {
    lat: String,
    lon: String,
}

impl Geocoder for NominatimClient {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let mut url = self.base_url.join("search")?;
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let places: Vec<NominatimPlaceDto> = response.json().await?;

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };
        match (place.lat.parse::<f64>(), place.lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => Ok(Some(Coordinate { lat, lon })),
            _ => Err(GeocodeError::Api(
                "malformed coordinates in response".to_string(),
            )),
        }
    }
}

pub struct IpinfoClient {
    http: Client,
    base_url: Url,
}

impl IpinfoClient {
    pub fn new() -> Result<Self, IpLocateError> {
        Self::with_base_url(IPINFO_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, IpLocateError> {
        let base_url = Url::parse(base).map_err(|e| IpLocateError::Other(e.to_string()))?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }
}

#[derive(Debug, Deserialize)]
struct IpInfoDto {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl IpLocator for IpinfoClient {
    async fn locate(&self) -> Result<Option<String>, IpLocateError> {
        let url = self
            .base_url
            .join("json")
            .map_err(|e| IpLocateError::Other(e.to_string()))?;

        let response = self.http.get(url).send().await?.error_for_status()?;
        let info: IpInfoDto = response.json().await?;

        let parts: Vec<String> = [info.city, info.region, info.country]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            println!("[geocode] ip lookup answered without a usable address");
            return Ok(None);
        }
        Ok(Some(parts.join(", ")))
    }
}
