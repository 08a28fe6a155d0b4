// ============================================================================
// LOGIN VIEW - Página de sign-in
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::config::{COOKIE_JWT, PAGE_SELECTION};
use crate::dom::{get_element_by_id, on_click};
use crate::services::ApiClient;
use crate::session::{navigate_to, set_cookie};
use crate::views::shared::{alert, input_value, loading_hide, loading_show};

/// Conectar el formulario de login. En éxito se persiste el token 30 días
/// y se navega a la selección de restaurante.
pub fn init() -> Result<(), JsValue> {
    loading_hide();

    let btn = match get_element_by_id("login_btn") {
        Some(btn) => btn,
        None => return Ok(()),
    };

    on_click(&btn, move |e| {
        e.prevent_default();

        let email = input_value("email").unwrap_or_default();
        let password = input_value("pass").unwrap_or_default();

        loading_show();
        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new();
            match api.authenticate(&email, &password).await {
                Ok(jwt) => {
                    if let Err(e) = set_cookie(COOKIE_JWT, &jwt) {
                        log::error!("❌ Error guardando jwt: {}", e);
                    }
                    navigate_to(PAGE_SELECTION);
                }
                Err(e) => alert(&e.to_string()),
            }
            loading_hide();
        });
    })?;

    Ok(())
}
