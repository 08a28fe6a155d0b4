// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica de negocio)
// ============================================================================

pub mod history;
pub mod login;
pub mod menu;
pub mod orders;
pub mod profile;
pub mod restaurants;
pub mod shared;
pub mod signup;
pub mod tables;
