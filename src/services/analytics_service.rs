//! Servicio de análisis
//!
//! Calcula las métricas del dashboard y las tablas de rendimiento a partir
//! del registro. Solo lectura.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::analytics::{DashboardSummary, DriverPerformance, DriverRouteCount};
use crate::models::route::RouteStatus;
use crate::repositories::RouteRegistry;

pub struct AnalyticsService;

impl AnalyticsService {
    /// Métricas principales y distribuciones de estado
    pub fn dashboard(registry: &RouteRegistry) -> DashboardSummary {
        let routes = registry.routes();

        let mut drivers_by_status = BTreeMap::new();
        for driver in registry.drivers() {
            *drivers_by_status.entry(driver.status).or_insert(0) += 1;
        }

        let mut routes_by_status = BTreeMap::new();
        for route in routes {
            *routes_by_status.entry(route.status).or_insert(0) += 1;
        }

        let summary = registry.summary_by_driver();
        let routes_per_driver = registry
            .drivers()
            .iter()
            .filter_map(|driver| {
                let totals = summary.get(&driver.id)?;
                (totals.route_count > 0).then(|| DriverRouteCount {
                    driver_id: driver.id,
                    name: driver.name.clone(),
                    route_count: totals.route_count,
                })
            })
            .collect();

        let dashboard = DashboardSummary {
            total_drivers: registry.driver_count(),
            active_routes: routes
                .iter()
                .filter(|r| r.status == RouteStatus::InProgress)
                .count(),
            total_distance_km: routes.iter().map(|r| r.distance_km).sum(),
            total_cargo_kg: routes.iter().map(|r| r.cargo_kg).sum(),
            drivers_by_status,
            routes_by_status,
            routes_per_driver,
        };

        debug!(
            "📊 Dashboard: {} conductores, {} rutas activas",
            dashboard.total_drivers, dashboard.active_routes
        );
        dashboard
    }

    /// Tabla "Resumen por Conductor": solo conductores con al menos una ruta
    pub fn driver_performance(registry: &RouteRegistry) -> Vec<DriverPerformance> {
        let summary = registry.summary_by_driver();

        registry
            .drivers()
            .iter()
            .filter_map(|driver| {
                let totals = summary.get(&driver.id)?;
                if totals.route_count == 0 {
                    return None;
                }
                let count = totals.route_count as f64;
                Some(DriverPerformance {
                    driver_id: driver.id,
                    name: driver.name.clone(),
                    total_distance_km: round2(totals.total_distance_km),
                    average_distance_km: round2(totals.total_distance_km / count),
                    route_count: totals.route_count,
                    total_cargo_kg: round2(totals.total_cargo_kg),
                    average_cargo_kg: round2(totals.total_cargo_kg / count),
                })
            })
            .collect()
    }

    /// Rutas programadas por día de inicio
    pub fn routes_per_day(registry: &RouteRegistry) -> BTreeMap<NaiveDate, usize> {
        let mut per_day = BTreeMap::new();
        for route in registry.routes() {
            *per_day.entry(route.scheduled_date).or_insert(0) += 1;
        }
        per_day
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
