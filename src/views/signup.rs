// ============================================================================
// SIGNUP VIEW - Registro de un admin nuevo
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::config::{COOKIE_JWT, PAGE_SELECTION};
use crate::dom::{get_element_by_id, on_click};
use crate::models::admin::SignUpData;
use crate::services::ApiClient;
use crate::session::{navigate_to, set_cookie};
use crate::views::shared::{alert, input_value, loading_hide, loading_show};

pub fn init() -> Result<(), JsValue> {
    loading_hide();

    let btn = match get_element_by_id("signup_btn") {
        Some(btn) => btn,
        None => return Ok(()),
    };

    on_click(&btn, move |e| {
        e.prevent_default();

        let data = SignUpData {
            f_name: input_value("fname").unwrap_or_default(),
            l_name: input_value("lname").unwrap_or_default(),
            email_id: input_value("email").unwrap_or_default(),
            contact: input_value("phone").unwrap_or_default(),
            password: input_value("pass").unwrap_or_default(),
        };

        loading_show();
        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new();
            match api.create_admin(&data).await {
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
