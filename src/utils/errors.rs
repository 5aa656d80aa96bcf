//! Sistema de manejo de errores
//!
//! Este módulo define los errores del registro de conductores y rutas.
//! Todos son recuperables: la capa de presentación los muestra como
//! feedback en línea y la sesión sigue funcionando.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

/// Tipo de entidad afectada por un error de referencia o duplicado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Driver,
    Route,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Driver => write!(f, "Driver"),
            Entity::Route => write!(f, "Route"),
        }
    }
}

/// Errores principales del registro
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Reference error: {entity} with id '{id}' does not exist")]
    Reference { entity: Entity, id: u32 },

    #[error("Duplicate error: {entity} with id '{id}' already exists")]
    Duplicate { entity: Entity, id: u32 },
}

impl RegistryError {
    /// Código estable para que la UI elija el mensaje
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::Validation(_) => "VALIDATION_ERROR",
            RegistryError::Reference { .. } => "REFERENCE_ERROR",
            RegistryError::Duplicate { .. } => "DUPLICATE_ERROR",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation(_))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, RegistryError::Reference { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, RegistryError::Duplicate { .. })
    }
}

/// Resultado tipado para operaciones del registro
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Función helper para crear errores de validación sobre un campo
pub fn validation_error(field: &'static str, message: &'static str) -> RegistryError {
    let mut error = ValidationError::new("custom");
    error.message = Some(Cow::Borrowed(message));
    error.add_param("field".into(), &field);

    let mut errors = ValidationErrors::new();
    errors.add(field, error);

    RegistryError::Validation(errors)
}

/// Función helper para crear errores de referencia
pub fn reference_error(entity: Entity, id: u32) -> RegistryError {
    RegistryError::Reference { entity, id }
}

/// Función helper para crear errores de duplicado
pub fn duplicate_error(entity: Entity, id: u32) -> RegistryError {
    RegistryError::Duplicate { entity, id }
}
