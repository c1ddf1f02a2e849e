//! reqwest-backed implementations of the capability ports.

pub mod camera;
pub mod geocode;
pub mod off;
pub mod places;
