use serde::{Deserialize, Serialize};

/// One landing event: a species brought ashore at a port in a given year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub species: String,
    /// Landing port ("Landingsplads")
    pub port: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Landed weight in kilograms ("Landet vægt (kg)")
    pub landed_weight_kg: Option<f64>,
    /// Live weight in kilograms ("Levende vægt (kg)")
    pub live_weight_kg: Option<f64>,
    /// First-hand value in Danish kroner ("Værdi (kr)")
    pub value_kr: Option<f64>,
}

impl Record {
    /// Build a record with only the required fields set.
    pub fn new(year: i32, species: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            year,
            species: species.into(),
            port: port.into(),
            lat: None,
            lon: None,
            landed_weight_kg: None,
            live_weight_kg: None,
            value_kr: None,
        }
    }

    pub fn with_position(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }

    pub fn with_landed_weight(mut self, kg: f64) -> Self {
        self.landed_weight_kg = Some(kg);
        self
    }

    pub fn with_value(mut self, kr: f64) -> Self {
        self.value_kr = Some(kr);
        self
    }

    /// Both coordinates, if the record can be placed on a map.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }

    /// Landed weight, ignoring non-finite values.
    pub fn landed_weight(&self) -> Option<f64> {
        self.landed_weight_kg.filter(|w| w.is_finite())
    }
}
