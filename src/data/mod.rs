//! Datos de ejemplo con los que arranca cada sesión

pub mod sample;

pub use sample::*;
