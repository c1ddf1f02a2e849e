/// A (latitude, longitude) pair in floating-point degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// One food bank out of a places response. Ephemeral; lives only as long as
/// the search that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodBank {
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadiusUnit {
    #[default]
    Miles,
    Kilometers,
}

impl RadiusUnit {
    pub fn label(&self) -> &'static str {
        match self {
            RadiusUnit::Miles => "Miles",
            RadiusUnit::Kilometers => "Kilometers",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Miles" => Some(RadiusUnit::Miles),
            "Kilometers" => Some(RadiusUnit::Kilometers),
            _ => None,
        }
    }
}

pub const METERS_PER_MILE: f64 = 1609.34;
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// A positive search radius in the unit the user picked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusSpec {
    pub value: f64,
    pub unit: RadiusUnit,
}

impl RadiusSpec {
    /// Meters for the places query. The displayed value itself is never
    /// converted; only the value sent downstream is.
    pub fn to_meters(&self) -> f64 {
        match self.unit {
            RadiusUnit::Miles => self.value * METERS_PER_MILE,
            RadiusUnit::Kilometers => self.value * METERS_PER_KILOMETER,
        }
    }
}

/// Coarse health tag attached to an inventory entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Classification {
    Green,
    Red,
    #[default]
    Unknown,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Green => "healthy",
            Classification::Red => "unhealthy",
            Classification::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryEntry {
    pub id: String,
    pub name: String,
    pub classification: Classification,
}

/// The health signals one product record may carry. Derived per record,
/// consumed once by classification, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NutritionSignal {
    pub nutri_score: Option<i64>,
    pub nova_group: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miles_convert_at_1609_34_meters_each() {
        let radius = RadiusSpec {
            value: 5.0,
            unit: RadiusUnit::Miles,
        };
        assert!((radius.to_meters() - 8046.7).abs() < 1e-9);
    }

    #[test]
    fn kilometers_convert_at_1000_meters_each() {
        let radius = RadiusSpec {
            value: 2.5,
            unit: RadiusUnit::Kilometers,
        };
        assert!((radius.to_meters() - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn unit_labels_round_trip() {
        for unit in [RadiusUnit::Miles, RadiusUnit::Kilometers] {
            assert_eq!(RadiusUnit::from_label(unit.label()), Some(unit));
        }
        assert_eq!(RadiusUnit::from_label("Furlongs"), None);
    }
}
