// ============================================================================
// CONFIG - Constantes de la aplicación (resueltas en tiempo de compilación)
// ============================================================================

/// URL base del backend admin.
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000/api/v1/admin (por defecto)
/// - Producción: via BACKEND_URL env var (build.rs la carga desde .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000/api/v1/admin",
};

/// URL del servicio de subida de fotos.
pub const PHOTO_URL: &str = match option_env!("PHOTO_URL") {
    Some(url) => url,
    None => "http://localhost:3000/api/v1/photo",
};

/// Cadencia del tablero de pedidos (ms).
pub const POLL_INTERVAL_MS: u32 = 5_000;

/// Vida de las cookies de sesión (días).
pub const COOKIE_LIFETIME_DAYS: i64 = 30;

/// Nombres de las cookies de sesión.
pub const COOKIE_JWT: &str = "jwt_token";
pub const COOKIE_REST_ID: &str = "rest_id";

/// Páginas a las que redirige el gate de sesión.
pub const PAGE_SIGN_IN: &str = "signIn.html";
pub const PAGE_SELECTION: &str = "RestroSelection.html";
pub const PAGE_ORDERS: &str = "ManageOrders.html";
