//! Configuración del proyecto
//!
//! Variables de entorno y valores por defecto.

pub mod environment;

pub use environment::*;
