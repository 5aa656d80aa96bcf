//! Modelos de Analytics
//!
//! Este módulo contiene los agregados que consumen la capa de gráficos y
//! las tarjetas del dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::driver::{Driver, DriverId, DriverStatus};
use crate::models::route::{Route, RouteStatus};

/// Totales de un conductor sobre todas sus rutas
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DriverTotals {
    pub total_distance_km: f64,
    pub total_cargo_kg: f64,
    pub route_count: usize,
}

impl DriverTotals {
    pub(crate) fn accumulate(&mut self, route: &Route) {
        self.total_distance_km += route.distance_km;
        self.total_cargo_kg += route.cargo_kg;
        self.route_count += 1;
    }
}

/// Fila de la tabla "Resumen por Conductor"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverPerformance {
    pub driver_id: DriverId,
    pub name: String,
    pub total_distance_km: f64,
    pub average_distance_km: f64,
    pub route_count: usize,
    pub total_cargo_kg: f64,
    pub average_cargo_kg: f64,
}

/// Número de rutas de un conductor, para el gráfico de barras
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverRouteCount {
    pub driver_id: DriverId,
    pub name: String,
    pub route_count: usize,
}

/// Resumen para dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_drivers: usize,
    pub active_routes: usize,
    pub total_distance_km: f64,
    pub total_cargo_kg: f64,
    pub drivers_by_status: BTreeMap<DriverStatus, usize>,
    pub routes_by_status: BTreeMap<RouteStatus, usize>,
    pub routes_per_driver: Vec<DriverRouteCount>,
}

/// Copia serializable del registro para tablas y gráficos
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrySnapshot {
    pub drivers: Vec<Driver>,
    pub routes: Vec<Route>,
}
