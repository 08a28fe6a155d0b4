// ============================================================================
// SESSION MODULE - Cookies de sesión + gate de redirección
// ============================================================================

pub mod cookies;
pub mod gate;

pub use cookies::*;
pub use gate::*;
