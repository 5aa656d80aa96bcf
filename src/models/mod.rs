//! Modelos del sistema
//!
//! Este módulo contiene los modelos de conductores, rutas, geografía
//! y los agregados de analytics.

pub mod analytics;
pub mod driver;
pub mod geo;
pub mod route;

pub use analytics::*;
pub use driver::*;
pub use geo::*;
pub use route::*;
