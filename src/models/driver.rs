//! Modelo de Driver
//!
//! Este módulo contiene el struct Driver, su estado, el request tipado
//! que llega desde el formulario y los filtros de búsqueda.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_empty;

/// Identificador de conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub u32);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Estado del conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    #[default]
    Active,
    OnRoute,
    Resting,
    Maintenance,
}

impl DriverStatus {
    /// Etiqueta visible en tablas y selectores
    pub fn label(&self) -> &'static str {
        match self {
            DriverStatus::Active => "Activo",
            DriverStatus::OnRoute => "En ruta",
            DriverStatus::Resting => "Descanso",
            DriverStatus::Maintenance => "Mantenimiento",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Driver principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub license: String,
    pub phone: Option<String>,
    pub vehicle: Option<String>,
    pub status: DriverStatus,
}

/// Request para crear (o reemplazar) un conductor
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateDriverRequest {
    /// Si es `None` el registro asigna el siguiente id libre
    pub id: Option<DriverId>,

    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub name: String,

    #[validate(custom = "validate_not_empty", length(max = 30))]
    pub license: String,

    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[validate(length(max = 100))]
    pub vehicle: Option<String>,

    #[serde(default)]
    pub status: DriverStatus,
}

impl CreateDriverRequest {
    pub fn new(name: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            license: license.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(DriverId(id));
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle = Some(vehicle.into());
        self
    }

    pub fn with_status(mut self, status: DriverStatus) -> Self {
        self.status = status;
        self
    }

    pub(crate) fn into_driver(self, id: DriverId) -> Driver {
        Driver {
            id,
            name: self.name.trim().to_string(),
            license: self.license.trim().to_string(),
            phone: self.phone.filter(|p| !p.trim().is_empty()),
            vehicle: self.vehicle.filter(|v| !v.trim().is_empty()),
            status: self.status,
        }
    }
}

/// Filtros para búsqueda de conductores
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverFilters {
    pub name_contains: Option<String>,
    pub status: Option<DriverStatus>,
}

impl DriverFilters {
    pub fn matches(&self, driver: &Driver) -> bool {
        if let Some(status) = self.status {
            if driver.status != status {
                return false;
            }
        }

        if let Some(needle) = self.name_contains.as_deref() {
            let needle = needle.trim().to_lowercase();
            if !needle.is_empty() && !driver.name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_requires_name_and_license() {
        assert!(CreateDriverRequest::new("Juan Pérez", "A123456").validate().is_ok());

        let errors = CreateDriverRequest::new("  ", "A123456").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let errors = CreateDriverRequest::new("Juan Pérez", "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("license"));
    }

    #[test]
    fn test_into_driver_trims_and_drops_blank_optionals() {
        let driver = CreateDriverRequest::new(" Ana Martín ", "D901234")
            .with_phone(" ")
            .with_vehicle("Van D")
            .into_driver(DriverId(4));

        assert_eq!(driver.name, "Ana Martín");
        assert_eq!(driver.phone, None);
        assert_eq!(driver.vehicle.as_deref(), Some("Van D"));
        assert_eq!(driver.status, DriverStatus::Active);
    }

    #[test]
    fn test_filters_match_case_insensitive_substring() {
        let driver = CreateDriverRequest::new("María García", "B789012")
            .with_status(DriverStatus::OnRoute)
            .into_driver(DriverId(2));

        assert!(DriverFilters::default().matches(&driver));

        let by_name = DriverFilters {
            name_contains: Some("garcía".to_string()),
            ..Default::default()
        };
        assert!(by_name.matches(&driver));

        let wrong_status = DriverFilters {
            name_contains: Some("maría".to_string()),
            status: Some(DriverStatus::Resting),
        };
        assert!(!wrong_status.matches(&driver));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&DriverStatus::OnRoute).unwrap();
        assert_eq!(json, "\"on_route\"");
        assert_eq!(DriverStatus::Maintenance.to_string(), "Mantenimiento");
    }
}
