//! Utilidades compartidas: errores y validación

pub mod errors;
pub mod validation;

pub use errors::*;
