//! Repositorios
//!
//! Almacenamiento en memoria de la sesión.

pub mod route_registry;

pub use route_registry::RouteRegistry;
