//! Registro en memoria de conductores y rutas
//!
//! `RouteRegistry` es la fuente de verdad de una sesión: valida cada alta
//! en la frontera, responde filtros y calcula los totales por conductor.
//! Un alta que falla no modifica el registro.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};
use validator::Validate;

use crate::models::analytics::{DriverTotals, RegistrySnapshot};
use crate::models::driver::{CreateDriverRequest, Driver, DriverFilters, DriverId};
use crate::models::geo::{Gazetteer, GeoPoint};
use crate::models::route::{CreateRouteRequest, Route, RouteFilters, RouteId, RouteSegment};
use crate::utils::errors::{
    duplicate_error, reference_error, validation_error, Entity, RegistryResult,
};
use crate::utils::validation::{validate_date_order, validate_non_negative};

#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    drivers: Vec<Driver>,
    routes: Vec<Route>,
    gazetteer: Gazetteer,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gazetteer(gazetteer: Gazetteer) -> Self {
        Self {
            gazetteer,
            ..Self::default()
        }
    }

    // ---- Conductores ----

    pub fn add_driver(&mut self, request: CreateDriverRequest) -> RegistryResult<Driver> {
        request.validate()?;

        let id = match request.id {
            Some(id) if self.driver(id).is_some() => {
                warn!("⚠️ Conductor duplicado: id {}", id);
                return Err(duplicate_error(Entity::Driver, id.0));
            }
            Some(id) => id,
            None => self.next_driver_id()?,
        };

        let driver = request.into_driver(id);
        info!("👤 Conductor agregado: {} ({})", driver.name, driver.id);
        self.drivers.push(driver.clone());
        Ok(driver)
    }

    /// Edición por reemplazo: el registro conserva la posición y el id
    pub fn replace_driver(
        &mut self,
        id: DriverId,
        request: CreateDriverRequest,
    ) -> RegistryResult<Driver> {
        request.validate()?;

        let position = self
            .drivers
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| reference_error(Entity::Driver, id.0))?;

        let driver = request.into_driver(id);
        debug!("✏️ Conductor {} reemplazado", id);
        self.drivers[position] = driver.clone();
        Ok(driver)
    }

    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    /// Primer conductor con ese nombre exacto, como en los selectores de la UI
    pub fn find_driver_by_name(&self, name: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.name == name)
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    pub fn filter_drivers(&self, filters: &DriverFilters) -> Vec<Driver> {
        self.drivers
            .iter()
            .filter(|d| filters.matches(d))
            .cloned()
            .collect()
    }

    fn next_driver_id(&self) -> RegistryResult<DriverId> {
        next_free_id(self.drivers.iter().map(|d| d.id.0)).map(DriverId)
    }

    // ---- Rutas ----

    pub fn add_route(&mut self, request: CreateRouteRequest) -> RegistryResult<Route> {
        request.validate()?;
        if validate_non_negative(request.distance_km).is_err() {
            return Err(validation_error("distance_km", "distance must be a non-negative number"));
        }
        if validate_non_negative(request.cargo_kg).is_err() {
            return Err(validation_error("cargo_kg", "cargo must be a non-negative number"));
        }
        let end_date = request
            .resolved_end_date()
            .ok_or_else(|| validation_error("end_date", "end date is out of range"))?;
        if validate_date_order(request.scheduled_date, end_date).is_err() {
            return Err(validation_error("end_date", "end date cannot precede the scheduled date"));
        }

        if self.driver(request.driver_id).is_none() {
            warn!("⚠️ Ruta con conductor inexistente: {}", request.driver_id);
            return Err(reference_error(Entity::Driver, request.driver_id.0));
        }

        let id = match request.id {
            Some(id) if self.route(id).is_some() => {
                warn!("⚠️ Ruta duplicada: id {}", id);
                return Err(duplicate_error(Entity::Route, id.0));
            }
            Some(id) => id,
            None => self.next_route_id()?,
        };

        let route = request.into_route(id, end_date);
        info!(
            "🚛 Ruta {} planificada: {} → {} ({:.2} km)",
            route.id, route.origin, route.destination, route.distance_km
        );
        self.routes.push(route.clone());
        Ok(route)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn filter_routes(&self, filters: &RouteFilters) -> Vec<Route> {
        self.routes
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect()
    }

    fn next_route_id(&self) -> RegistryResult<RouteId> {
        next_free_id(self.routes.iter().map(|r| r.id.0)).map(RouteId)
    }

    // ---- Agregados ----

    /// Totales de distancia y carga por conductor.
    /// Los conductores sin rutas aparecen con totales en cero.
    pub fn summary_by_driver(&self) -> BTreeMap<DriverId, DriverTotals> {
        let mut summary: BTreeMap<DriverId, DriverTotals> = self
            .drivers
            .iter()
            .map(|d| (d.id, DriverTotals::default()))
            .collect();

        for route in &self.routes {
            summary.entry(route.driver_id).or_default().accumulate(route);
        }

        summary
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            drivers: self.drivers.clone(),
            routes: self.routes.clone(),
        }
    }

    // ---- Mapa ----

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn register_location(&mut self, name: impl Into<String>, point: GeoPoint) {
        let name = name.into();
        debug!("📍 Coordenadas registradas para '{}'", name);
        self.gazetteer.insert(name, point);
    }

    /// Rutas filtradas con coordenadas resueltas; las que no se pueden
    /// ubicar en el diccionario se omiten.
    pub fn route_segments(&self, filters: &RouteFilters) -> Vec<RouteSegment> {
        self.routes
            .iter()
            .filter(|r| filters.matches(r))
            .filter_map(|route| {
                let origin_point = self.gazetteer.resolve(&route.origin)?;
                let destination_point = self.gazetteer.resolve(&route.destination)?;
                Some(RouteSegment {
                    route_id: route.id,
                    driver_id: route.driver_id,
                    origin: route.origin.clone(),
                    origin_point,
                    destination: route.destination.clone(),
                    destination_point,
                    distance_km: route.distance_km,
                    status: route.status,
                })
            })
            .collect()
    }
}

/// Siguiente id tras el máximo, o 1 si no hay ninguno
fn next_free_id(ids: impl Iterator<Item = u32>) -> RegistryResult<u32> {
    match ids.max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| validation_error("id", "no free id left after the highest one")),
    }
}
