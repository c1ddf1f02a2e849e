//! Great-circle distance and the preset-radius snap.

use super::entities::Coordinate;

/// Preset radius options offered by the locator panel, in display units.
pub const RADIUS_PRESETS: [f64; 5] = [1.0, 2.5, 5.0, 7.5, 10.0];

const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance between two coordinates in miles, rounded to two
/// decimal places.
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let miles = 2.0 * EARTH_RADIUS_MILES * h.sqrt().asin();
    (miles * 100.0).round() / 100.0
}

/// The preset closest to `distance` by absolute difference. Ties resolve to
/// the earlier (smaller) preset.
pub fn closest_preset(distance: f64) -> f64 {
    RADIUS_PRESETS
        .iter()
        .copied()
        .min_by(|a, b| {
            (a - distance)
                .abs()
                .partial_cmp(&(b - distance).abs())
                .unwrap()
        })
        .unwrap_or(RADIUS_PRESETS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let here = Coordinate {
            lat: 43.6532,
            lon: -79.3832,
        };
        assert_eq!(distance_miles(here, here), 0.00);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate {
            lat: 43.6532,
            lon: -79.3832,
        };
        let b = Coordinate {
            lat: 45.4215,
            lon: -75.6972,
        };
        assert_eq!(distance_miles(a, b), distance_miles(b, a));
    }

    #[test]
    fn cross_country_distance_is_plausible() {
        let los_angeles = Coordinate {
            lat: 34.0522,
            lon: -118.2437,
        };
        let new_york = Coordinate {
            lat: 40.7128,
            lon: -74.0060,
        };
        let miles = distance_miles(los_angeles, new_york);
        // Great-circle LA-NYC is roughly 2,445 miles
        assert!(miles > 2400.0 && miles < 2500.0, "got {miles}");
    }

    #[test]
    fn short_hop_rounds_to_two_decimals() {
        let a = Coordinate {
            lat: 43.6532,
            lon: -79.3832,
        };
        let b = Coordinate {
            lat: 43.7,
            lon: -79.4,
        };
        let scaled = distance_miles(a, b) * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn preset_snaps_down_at_six_miles() {
        assert_eq!(closest_preset(6.0), 5.0);
    }

    #[test]
    fn preset_snaps_up_at_six_point_three_miles() {
        assert_eq!(closest_preset(6.3), 7.5);
    }

    #[test]
    fn preset_tie_resolves_to_smaller_option() {
        // 1.75 is equidistant from 1 and 2.5
        assert_eq!(closest_preset(1.75), 1.0);
    }

    #[test]
    fn preset_clamps_to_extremes() {
        assert_eq!(closest_preset(0.1), 1.0);
        assert_eq!(closest_preset(60.0), 10.0);
    }
}
