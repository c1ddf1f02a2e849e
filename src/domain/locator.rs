//! The food-bank search workflow: validate, geocode, query, fall back.

use std::collections::HashMap;

use thiserror::Error;

use super::entities::{FoodBank, RadiusSpec, RadiusUnit};
use super::geo::{closest_preset, distance_miles};
use super::ports::{GeocodeError, Geocoder, PlacesError, PlacesGateway, RadiusBound};
use crate::util::quote;

const MAPS_SEARCH_ENDPOINT: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Map-search URL for one result. Name and address are percent-encoded and
/// concatenated with no separator between them.
pub fn map_link(name: &str, address: &str) -> String {
    format!("{MAPS_SEARCH_ENDPOINT}{}{}", quote(name), quote(address))
}

/// A validated search request; the radius is a positive real by the time
/// this exists.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub location: String,
    pub radius: RadiusSpec,
}

impl SearchRequest {
    /// Validates raw form input. Runs before any network call; a failure
    /// leaves no partial state anywhere.
    pub fn parse(location: &str, radius: &str, unit: RadiusUnit) -> Result<Self, SearchError> {
        if location.is_empty() {
            return Err(SearchError::EmptyLocation);
        }
        if radius.is_empty() {
            return Err(SearchError::EmptyRadius);
        }
        let value: f64 = radius
            .trim()
            .parse()
            .map_err(|_| SearchError::InvalidRadius)?;
        if !value.is_finite() || value <= 0.0 {
            return Err(SearchError::InvalidRadius);
        }
        Ok(Self {
            location: location.to_string(),
            radius: RadiusSpec { value, unit },
        })
    }
}

/// Display strings double as the user-facing messages the UI toasts.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Please enter your location.")]
    EmptyLocation,
    #[error("Please enter a search radius.")]
    EmptyRadius,
    #[error("The search radius must be a positive number.")]
    InvalidRadius,
    #[error("Failed to geocode the entered address.")]
    AddressNotFound,
    #[error("Failed to geocode the entered address.")]
    Geocode(#[source] GeocodeError),
    #[error("An error occurred while retrieving food banks.")]
    Places(#[source] PlacesError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// The radius-bounded query returned this many results.
    Found(usize),
    /// Nothing in range; the nearest unbounded hit was this far away, and
    /// the preset radius closest to that distance is suggested back.
    Fallback {
        distance_miles: f64,
        suggested_radius: f64,
    },
    /// Even the unbounded query came back empty.
    NotFound,
}

/// State one locator panel accumulates across searches: the latest result
/// list and the name-to-map-link registry behind the open-on-activate
/// action.
#[derive(Clone, Debug, Default)]
pub struct LocatorSession {
    results: Vec<FoodBank>,
    links: HashMap<String, String>,
}

impl LocatorSession {
    pub fn results(&self) -> &[FoodBank] {
        &self.results
    }

    pub fn link_for(&self, name: &str) -> Option<&str> {
        self.links.get(name).map(String::as_str)
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Runs one search end to end. The result list and link registry are
    /// rebuilt from scratch on every call; when two results share a name the
    /// later one wins.
    pub async fn search<G, P>(
        &mut self,
        geocoder: &G,
        places: &P,
        request: &SearchRequest,
    ) -> Result<SearchOutcome, SearchError>
    where
        G: Geocoder,
        P: PlacesGateway,
    {
        let origin = geocoder
            .geocode(&request.location)
            .await
            .map_err(SearchError::Geocode)?
            .ok_or(SearchError::AddressNotFound)?;

        let bound = RadiusBound::Meters(request.radius.to_meters());
        let found = places
            .nearby_food_banks(origin, bound)
            .await
            .map_err(SearchError::Places)?;

        self.results.clear();
        self.links.clear();

        if !found.is_empty() {
            for bank in &found {
                self.links
                    .insert(bank.name.clone(), map_link(&bank.name, &bank.address));
            }
            let count = found.len();
            self.results = found;
            println!("[locator] found {count} food banks in range");
            return Ok(SearchOutcome::Found(count));
        }

        let nearest = places
            .nearby_food_banks(origin, RadiusBound::RankByDistance)
            .await
            .map_err(SearchError::Places)?;

        match nearest.first() {
            Some(bank) => {
                let distance = distance_miles(origin, bank.coordinate);
                println!("[locator] nothing in range; nearest is {distance} miles out");
                Ok(SearchOutcome::Fallback {
                    distance_miles: distance,
                    suggested_radius: closest_preset(distance),
                })
            }
            None => Ok(SearchOutcome::NotFound),
        }
    }
}
