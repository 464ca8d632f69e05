use thiserror::Error;

use crate::utils::storage::StorageError;

/// Errores de la capa API.
///
/// `Rejected` es la respuesta bien formada con `success: false`; el resto
/// son fallos de transporte, HTTP o del propio cliente.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("No autorizado: {0}")]
    Unauthorized(String),
    #[error("Operación rechazada: {0}")]
    Rejected(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No hay credenciales de sesión")]
    MissingCredentials,
    #[error("Petición inválida: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// El backend respondió pero la operación falló
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { .. } | Self::Parse(_))
    }
}
