//! Modelo de Route
//!
//! Este módulo contiene el struct Route, su estado, el request tipado de
//! planificación y los filtros de búsqueda.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::driver::DriverId;
use crate::models::geo::GeoPoint;
use crate::utils::validation::validate_not_empty;

/// Identificador de ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub u32);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Estado de la ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

impl RouteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RouteStatus::Planned => "Planificada",
            RouteStatus::InProgress => "En progreso",
            RouteStatus::Completed => "Completada",
        }
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Route principal. Inmutable una vez creada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub driver_id: DriverId,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub cargo_kg: f64,
    pub scheduled_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RouteStatus,
}

/// Request para planificar una nueva ruta
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRouteRequest {
    /// Si es `None` el registro asigna el siguiente id libre
    pub id: Option<RouteId>,

    pub driver_id: DriverId,

    #[validate(custom = "validate_not_empty", length(max = 500))]
    pub origin: String,

    #[validate(custom = "validate_not_empty", length(max = 500))]
    pub destination: String,

    pub distance_km: f64,

    pub cargo_kg: f64,

    pub scheduled_date: NaiveDate,

    /// Por defecto, un día después de `scheduled_date`
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: RouteStatus,
}

impl CreateRouteRequest {
    pub fn new(
        driver_id: DriverId,
        origin: impl Into<String>,
        destination: impl Into<String>,
        distance_km: f64,
        cargo_kg: f64,
        scheduled_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            driver_id,
            origin: origin.into(),
            destination: destination.into(),
            distance_km,
            cargo_kg,
            scheduled_date,
            end_date: None,
            status: RouteStatus::default(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(RouteId(id));
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_status(mut self, status: RouteStatus) -> Self {
        self.status = status;
        self
    }

    /// `None` si el día siguiente queda fuera del rango de fechas
    pub fn resolved_end_date(&self) -> Option<NaiveDate> {
        self.end_date
            .or_else(|| self.scheduled_date.checked_add_days(Days::new(1)))
    }

    pub(crate) fn into_route(self, id: RouteId, end_date: NaiveDate) -> Route {
        Route {
            id,
            driver_id: self.driver_id,
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
            distance_km: self.distance_km,
            cargo_kg: self.cargo_kg,
            scheduled_date: self.scheduled_date,
            end_date,
            status: self.status,
        }
    }
}

/// Filtros para búsqueda de rutas
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteFilters {
    pub driver_id: Option<DriverId>,
    pub status: Option<RouteStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub min_distance_km: Option<f64>,
    pub max_distance_km: Option<f64>,
    pub location_contains: Option<String>,
}

impl RouteFilters {
    pub fn for_driver(driver_id: DriverId) -> Self {
        Self {
            driver_id: Some(driver_id),
            ..Default::default()
        }
    }

    pub fn matches(&self, route: &Route) -> bool {
        if self.driver_id.is_some_and(|id| route.driver_id != id) {
            return false;
        }
        if self.status.is_some_and(|status| route.status != status) {
            return false;
        }
        if self.date_from.is_some_and(|from| route.scheduled_date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| route.scheduled_date > to) {
            return false;
        }
        if self.min_distance_km.is_some_and(|min| route.distance_km < min) {
            return false;
        }
        if self.max_distance_km.is_some_and(|max| route.distance_km > max) {
            return false;
        }

        if let Some(needle) = self.location_contains.as_deref() {
            let needle = needle.trim().to_lowercase();
            if !needle.is_empty()
                && !route.origin.to_lowercase().contains(&needle)
                && !route.destination.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        true
    }
}

/// Tramo listo para la capa de mapa: ruta con coordenadas resueltas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub route_id: RouteId,
    pub driver_id: DriverId,
    pub origin: String,
    pub origin_point: GeoPoint,
    pub destination: String,
    pub destination_point: GeoPoint,
    pub distance_km: f64,
    pub status: RouteStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_route() -> Route {
        CreateRouteRequest::new(DriverId(1), "Lima", "Arequipa", 1000.0, 5000.0, date(2024, 1, 1))
            .into_route(RouteId(1), date(2024, 1, 2))
    }

    #[test]
    fn test_end_date_defaults_to_next_day() {
        let request =
            CreateRouteRequest::new(DriverId(1), "Lima", "Ica", 1.0, 1.0, date(2024, 1, 31));
        assert_eq!(request.resolved_end_date(), Some(date(2024, 2, 1)));

        let route = sample_route();
        assert_eq!(route.status, RouteStatus::Planned);
    }

    #[test]
    fn test_end_date_past_last_representable_day_is_none() {
        let request = CreateRouteRequest::new(DriverId(1), "Lima", "Ica", 1.0, 1.0, NaiveDate::MAX);
        assert_eq!(request.resolved_end_date(), None);

        let explicit = request.clone().with_end_date(NaiveDate::MAX);
        assert_eq!(explicit.resolved_end_date(), Some(NaiveDate::MAX));
    }

    #[test]
    fn test_blank_locations_fail_validation() {
        let request = CreateRouteRequest::new(DriverId(1), "", "Lima", 1.0, 1.0, date(2024, 1, 1));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("origin"));
    }

    #[test]
    fn test_filters_date_range_is_inclusive() {
        let route = sample_route();
        let filters = RouteFilters {
            date_from: Some(date(2024, 1, 1)),
            date_to: Some(date(2024, 1, 1)),
            ..Default::default()
        };
        assert!(filters.matches(&route));

        let later = RouteFilters {
            date_from: Some(date(2024, 1, 2)),
            ..Default::default()
        };
        assert!(!later.matches(&route));
    }

    #[test]
    fn test_filters_distance_bounds_and_location() {
        let route = sample_route();

        let bounds = RouteFilters {
            min_distance_km: Some(1000.0),
            max_distance_km: Some(1000.0),
            ..Default::default()
        };
        assert!(bounds.matches(&route));

        let too_short = RouteFilters {
            max_distance_km: Some(999.9),
            ..Default::default()
        };
        assert!(!too_short.matches(&route));

        let location = RouteFilters {
            location_contains: Some("AREQ".to_string()),
            ..Default::default()
        };
        assert!(location.matches(&route));

        let other_driver = RouteFilters::for_driver(DriverId(2));
        assert!(!other_driver.matches(&route));
    }
}
