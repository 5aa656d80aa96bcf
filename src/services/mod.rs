//! Services module
//!
//! Este módulo contiene la lógica de negocio que se apoya en el registro:
//! análisis, geocodificación y planificación de rutas.

pub mod analytics_service;
pub mod geocoding_service;
pub mod route_planner;

pub use analytics_service::*;
pub use geocoding_service::*;
pub use route_planner::*;
