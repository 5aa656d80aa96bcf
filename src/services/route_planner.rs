//! Planificador de rutas
//!
//! Convierte un origen y un destino ya geocodificados en una ruta del
//! registro: la distancia se calcula con haversine y ambos nombres quedan
//! registrados en el diccionario de coordenadas para el mapa.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::models::driver::DriverId;
use crate::models::route::{CreateRouteRequest, Route, RouteStatus};
use crate::repositories::RouteRegistry;
use crate::services::geocoding_service::GeocodingCandidate;
use crate::utils::errors::{reference_error, validation_error, Entity, RegistryResult};

/// Request del formulario "Planificar Nueva Ruta"
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRouteRequest {
    pub driver_id: DriverId,
    pub origin: GeocodingCandidate,
    pub destination: GeocodingCandidate,
    pub cargo_kg: f64,
    pub start_date: NaiveDate,
}

pub struct RoutePlanner;

impl RoutePlanner {
    /// Distancia mostrada antes de confirmar el formulario
    pub fn preview_distance(origin: &GeocodingCandidate, destination: &GeocodingCandidate) -> f64 {
        origin.point.distance_km(&destination.point)
    }

    pub fn plan_route(registry: &mut RouteRegistry, request: PlanRouteRequest) -> RegistryResult<Route> {
        // se comprueba antes de tocar el diccionario de coordenadas
        if !request.origin.point.is_valid() {
            return Err(validation_error("origin", "coordinates out of range"));
        }
        if !request.destination.point.is_valid() {
            return Err(validation_error("destination", "coordinates out of range"));
        }
        if registry.driver(request.driver_id).is_none() {
            return Err(reference_error(Entity::Driver, request.driver_id.0));
        }

        let distance_km = Self::preview_distance(&request.origin, &request.destination);
        let route_request = CreateRouteRequest::new(
            request.driver_id,
            request.origin.display_name.clone(),
            request.destination.display_name.clone(),
            distance_km,
            request.cargo_kg,
            request.start_date,
        )
        .with_status(RouteStatus::Planned);

        let route = registry.add_route(route_request)?;

        registry.register_location(request.origin.display_name, request.origin.point);
        registry.register_location(request.destination.display_name, request.destination.point);

        info!(
            "🧭 Ruta {} planificada para el conductor {} ({:.2} km)",
            route.id, route.driver_id, route.distance_km
        );
        Ok(route)
    }
}
