// ============================================================================
// FINE-DINE ADMIN - Panel de administración del restaurante (Rust puro)
// ============================================================================
// Un único binario wasm sirve todas las páginas del panel:
// - session: gate de redirección + cookies persistidas 30 días
// - services: cliente REST (gloo-net) contra el backend admin
// - viewmodels: tablero de pedidos con polling cada 5 s
// - views: funciones que renderizan DOM directo (sin virtual DOM)
// - state: estado de página con Rc<RefCell>
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
pub mod viewmodels;
pub mod views;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Fine-Dine Admin Panel");

    app::boot()
}
