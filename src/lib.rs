//! Gestión de rutas de transporte
//!
//! Núcleo en memoria para un panel de transporte: registro de conductores y
//! rutas, filtros, agregados para gráficos, geocodificación y planificación.
//! La presentación (tablas, mapas, gráficos) consume estos datos desde fuera.

pub mod config;
pub mod data;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use models::*;
pub use repositories::RouteRegistry;
pub use utils::errors::{Entity, RegistryError, RegistryResult};
