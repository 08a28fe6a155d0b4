// ============================================================================
// SESSION STATE - Identificadores de sesión leídos tras pasar el gate
// ============================================================================

use crate::config::{COOKIE_JWT, COOKIE_REST_ID};
use crate::session::cookies::get_cookie;

/// Snapshot de la sesión para la página actual. Se construye una vez,
/// después de que el gate haya garantizado que los valores existen; las
/// acciones de usuario lo releen de cookies por si la sesión cambió
/// en otra pestaña.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub token: String,
    pub restaurant_id: String,
}

impl SessionState {
    /// Leer la sesión completa de cookies. None si falta alguno de los dos
    /// identificadores (el gate ya debería haber redirigido en ese caso).
    pub fn load() -> Option<Self> {
        let token = get_cookie(COOKIE_JWT)?;
        let restaurant_id = get_cookie(COOKIE_REST_ID)?;
        Some(Self {
            token,
            restaurant_id,
        })
    }

    /// Variante para páginas que solo requieren token (selección, alta).
    pub fn load_token_only() -> Option<Self> {
        let token = get_cookie(COOKIE_JWT)?;
        Some(Self {
            token,
            restaurant_id: String::new(),
        })
    }
}
