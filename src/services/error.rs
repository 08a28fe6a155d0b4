// ============================================================================
// API ERROR - Taxonomía de errores observable en el cliente
// ============================================================================

use std::fmt;

/// Error de una operación contra el backend. Todos son terminales para la
/// acción que los dispara: se muestran en un alert y el usuario reintenta
/// a mano si quiere.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// HTTP 401, independiente del cuerpo JSON.
    Auth(String),
    /// Respuesta con campo "error" a nivel de aplicación.
    Application(String),
    /// Fallo de red o de parseo del transporte.
    Network(String),
    /// JSON válido pero sin campo "error" ni el campo de éxito esperado.
    UnknownShape,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Auth(msg) => write!(f, "{}", msg),
            ApiError::Application(msg) => write!(f, "{}", msg),
            ApiError::Network(msg) => write!(f, "{}", msg),
            ApiError::UnknownShape => write!(f, "Unknown response"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}
