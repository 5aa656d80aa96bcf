//! Conjunto de datos de ejemplo
//!
//! Diez conductores, veinte rutas entre ciudades del Perú y las
//! coordenadas de esas ciudades. Se vuelve a sembrar en cada arranque.

use chrono::{Duration, NaiveDate};
use tracing::info;

use crate::models::driver::{CreateDriverRequest, DriverId, DriverStatus};
use crate::models::geo::{Gazetteer, GeoPoint};
use crate::models::route::{CreateRouteRequest, RouteStatus};
use crate::repositories::RouteRegistry;
use crate::utils::errors::RegistryResult;

const DRIVERS: [(&str, &str, &str, &str, DriverStatus); 10] = [
    ("Juan Pérez", "A123456", "555-0101", "Camión A", DriverStatus::Active),
    ("María García", "B789012", "555-0102", "Furgoneta B", DriverStatus::Active),
    ("Carlos López", "C345678", "555-0103", "Camión C", DriverStatus::OnRoute),
    ("Ana Martín", "D901234", "555-0104", "Van D", DriverStatus::Active),
    ("Luis Rodríguez", "E567890", "555-0105", "Camión E", DriverStatus::OnRoute),
    ("Carmen Sánchez", "F123456", "555-0106", "Furgoneta F", DriverStatus::Resting),
    ("Pedro González", "G789012", "555-0107", "Camión G", DriverStatus::Active),
    ("Laura Fernández", "H345678", "555-0108", "Van H", DriverStatus::OnRoute),
    ("Miguel Torres", "I901234", "555-0109", "Camión I", DriverStatus::Active),
    ("Isabel Ruiz", "J567890", "555-0110", "Furgoneta J", DriverStatus::Maintenance),
];

// (conductor, origen, destino, km, kg, estado)
const ROUTES: [(u32, &str, &str, f64, f64, RouteStatus); 20] = [
    (1, "Lima", "Arequipa", 1000.0, 5000.0, RouteStatus::Completed),
    (1, "Arequipa", "Lima", 1000.0, 7500.0, RouteStatus::InProgress),
    (2, "Cusco", "Lima", 1100.0, 3200.0, RouteStatus::Completed),
    (2, "Lima", "Cusco", 1100.0, 8000.0, RouteStatus::Planned),
    (3, "Trujillo", "Lima", 560.0, 4500.0, RouteStatus::InProgress),
    (3, "Lima", "Trujillo", 560.0, 6000.0, RouteStatus::Completed),
    (4, "Piura", "Lima", 970.0, 5500.0, RouteStatus::Planned),
    (5, "Iquitos", "Lima", 1800.0, 2800.0, RouteStatus::Completed),
    (6, "Huancayo", "Lima", 300.0, 4000.0, RouteStatus::InProgress),
    (7, "Chiclayo", "Lima", 770.0, 6500.0, RouteStatus::Completed),
    (8, "Lima", "Chiclayo", 770.0, 3800.0, RouteStatus::Planned),
    (9, "Tacna", "Lima", 1200.0, 7200.0, RouteStatus::Completed),
    (10, "Ayacucho", "Lima", 550.0, 4200.0, RouteStatus::InProgress),
    (1, "Callao", "Ica", 150.0, 5800.0, RouteStatus::Completed),
    (2, "Ica", "Lima", 300.0, 3500.0, RouteStatus::Planned),
    (3, "Cajamarca", "Lima", 850.0, 6800.0, RouteStatus::InProgress),
    (4, "Puno", "Cusco", 390.0, 4800.0, RouteStatus::Completed),
    (5, "Tumbes", "Piura", 1300.0, 5200.0, RouteStatus::Planned),
    (6, "Huánuco", "Lima", 410.0, 3900.0, RouteStatus::InProgress),
    (7, "Moquegua", "Tacna", 450.0, 6200.0, RouteStatus::Completed),
];

const CITIES: [(&str, f64, f64); 17] = [
    ("Lima", -12.0464, -77.0428),
    ("Arequipa", -16.4090, -71.5375),
    ("Cusco", -13.5319, -71.9675),
    ("Trujillo", -8.1116, -79.0291),
    ("Piura", -5.1945, -80.6328),
    ("Iquitos", -3.7437, -73.2516),
    ("Huancayo", -12.0685, -75.2049),
    ("Chiclayo", -6.7714, -79.8391),
    ("Tacna", -18.0148, -70.2533),
    ("Ayacucho", -13.1631, -74.2236),
    ("Callao", -12.0566, -77.1181),
    ("Ica", -14.0678, -75.7286),
    ("Cajamarca", -7.1638, -78.5005),
    ("Puno", -15.8422, -70.0199),
    ("Tumbes", -3.5669, -80.4515),
    ("Huánuco", -9.9306, -76.2422),
    ("Moquegua", -17.1934, -70.9348),
];

/// Primera fecha de inicio; las siguientes van cada dos días
pub fn first_route_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn sample_gazetteer() -> Gazetteer {
    let mut gazetteer = Gazetteer::new();
    for (name, latitude, longitude) in CITIES {
        gazetteer.insert(name, GeoPoint { latitude, longitude });
    }
    gazetteer
}

pub fn sample_drivers() -> Vec<CreateDriverRequest> {
    DRIVERS
        .iter()
        .zip(1u32..)
        .map(|(&(name, license, phone, vehicle, status), id)| {
            CreateDriverRequest::new(name, license)
                .with_id(id)
                .with_phone(phone)
                .with_vehicle(vehicle)
                .with_status(status)
        })
        .collect()
}

pub fn sample_routes() -> Vec<CreateRouteRequest> {
    let start = first_route_date();
    ROUTES
        .iter()
        .zip(0i64..)
        .map(|(&(driver, origin, destination, km, kg, status), i)| {
            let scheduled = start + Duration::days(2 * i);
            CreateRouteRequest::new(DriverId(driver), origin, destination, km, kg, scheduled)
                .with_id(i as u32 + 1)
                .with_end_date(scheduled + Duration::days(1))
                .with_status(status)
        })
        .collect()
}

impl RouteRegistry {
    /// Registro sembrado con los datos de ejemplo
    pub fn with_sample_data() -> RegistryResult<Self> {
        let mut registry = RouteRegistry::with_gazetteer(sample_gazetteer());
        for driver in sample_drivers() {
            registry.add_driver(driver)?;
        }
        for route in sample_routes() {
            registry.add_route(route)?;
        }

        info!(
            "🌱 Datos de ejemplo cargados: {} conductores, {} rutas, {} ciudades",
            registry.driver_count(),
            registry.route_count(),
            registry.gazetteer().len()
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::route::RouteFilters;

    #[test]
    fn test_sample_registry_sizes() {
        let registry = RouteRegistry::with_sample_data().unwrap();
        assert_eq!(registry.driver_count(), 10);
        assert_eq!(registry.route_count(), 20);
        assert_eq!(registry.gazetteer().len(), 17);
    }

    #[test]
    fn test_sample_dates_every_other_day() {
        let routes = sample_routes();
        assert_eq!(routes[0].scheduled_date, first_route_date());
        assert_eq!(
            routes[19].scheduled_date,
            NaiveDate::from_ymd_opt(2024, 2, 8).unwrap()
        );
        assert_eq!(
            routes[19].resolved_end_date(),
            NaiveDate::from_ymd_opt(2024, 2, 9)
        );
    }

    #[test]
    fn test_every_sample_route_resolves_on_the_map() {
        let registry = RouteRegistry::with_sample_data().unwrap();
        let segments = registry.route_segments(&RouteFilters::default());
        assert_eq!(segments.len(), 20);
    }
}
