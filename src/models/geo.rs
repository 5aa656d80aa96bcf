//! Modelos geográficos
//!
//! Puntos lat/lon, distancia haversine y el diccionario de coordenadas
//! que usa la capa de mapa para ubicar orígenes y destinos.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::utils::validation::validate_coordinates;

/// Radio medio de la Tierra en kilómetros
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Punto geográfico en grados decimales.
/// Al deserializar se aplican los mismos rangos que en `GeoPoint::new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = ValidationErrors;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationErrors> {
        validate_coordinates(latitude, longitude).map_err(|e| {
            let mut errors = ValidationErrors::new();
            errors.add("coordinates", e);
            errors
        })?;
        Ok(Self { latitude, longitude })
    }

    /// Distancia de gran círculo (haversine) en kilómetros
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    pub fn is_valid(&self) -> bool {
        validate_coordinates(self.latitude, self.longitude).is_ok()
    }
}

/// Diccionario nombre -> coordenadas
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gazetteer {
    places: HashMap<String, GeoPoint>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra (o sobrescribe) las coordenadas de un lugar
    pub fn insert(&mut self, name: impl Into<String>, point: GeoPoint) -> Option<GeoPoint> {
        self.places.insert(name.into(), point)
    }

    pub fn resolve(&self, name: &str) -> Option<GeoPoint> {
        self.places.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.places.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
