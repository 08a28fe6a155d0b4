// ============================================================================
// PROFILE VIEW - Perfil del admin, lista de restaurantes y logout
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::config::{COOKIE_JWT, COOKIE_REST_ID, PAGE_SIGN_IN};
use crate::dom::{append_child, get_element_by_id, on_click, set_text_content, ElementBuilder};
use crate::models::admin::AdminProfile;
use crate::services::ApiClient;
use crate::session::{clear_cookie, navigate_to};
use crate::state::SessionState;
use crate::views::shared::{alert, input_value, loading_hide, loading_show, set_input_value};

pub fn init(session: SessionState) -> Result<(), JsValue> {
    wire_update_button(session.clone())?;
    wire_logout_button()?;

    loading_show();
    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();

        match api.get_profile(&session.token).await {
            Ok(profile) => fill_profile_form(&profile),
            Err(e) => alert(&e.to_string()),
        }

        // La misma respuesta de restaurantes rellena el nombre del actual
        // y la lista lateral.
        match api.get_restaurants(&session.token).await {
            Ok(restaurants) => {
                for restaurant in &restaurants {
                    if restaurant.id == session.restaurant_id {
                        if let Some(el) = get_element_by_id("left_rest_name") {
                            set_text_content(&el, &restaurant.name);
                        }
                    }
                    if let Err(e) = append_restaurant_entry(&restaurant.name, &restaurant.address)
                    {
                        log::error!("❌ Error renderizando restaurante: {:?}", e);
                    }
                }
            }
            Err(e) => log::error!("❌ Error cargando restaurantes: {}", e),
        }

        loading_hide();
    });

    Ok(())
}

fn fill_profile_form(profile: &AdminProfile) {
    if let Some(el) = get_element_by_id("left_name") {
        set_text_content(&el, &profile.full_name());
    }
    set_input_value("right_f_name", &profile.f_name);
    set_input_value("right_l_name", &profile.l_name);
    set_input_value("right_contact", &profile.contact_number);
    set_input_value("right_email", &profile.email_address);

    if let Some(btn) = get_element_by_id("update_details_btn") {
        let _ = btn.set_attribute("style", "display:");
    }
}

fn append_restaurant_entry(name: &str, address: &str) -> Result<(), JsValue> {
    let container = get_element_by_id("rest_div")
        .ok_or_else(|| JsValue::from_str("No #rest_div element"))?;

    let link = ElementBuilder::new("a")?
        .class("text-teal-600")
        .attr("href", "#")?
        .text(name)
        .build();
    let addr = ElementBuilder::new("div")?
        .class("text-gray-500 text-xs")
        .text(address)
        .build();
    let entry = ElementBuilder::new("li")?
        .class("p-3 bg-gray-200 rounded-xl space-y-1")
        .child(link)?
        .child(addr)?
        .build();

    append_child(&container, &entry)
}

fn wire_update_button(session: SessionState) -> Result<(), JsValue> {
    let btn = match get_element_by_id("update_details_btn") {
        Some(btn) => btn,
        None => return Ok(()),
    };

    on_click(&btn, move |_e| {
        let profile = AdminProfile {
            f_name: input_value("right_f_name").unwrap_or_default(),
            l_name: input_value("right_l_name").unwrap_or_default(),
            contact_number: input_value("right_contact").unwrap_or_default(),
            email_address: input_value("right_email").unwrap_or_default(),
        };

        if !profile.is_complete() {
            alert("Details can't be empty");
            return;
        }

        let session = session.clone();
        loading_show();
        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new();
            if let Err(e) = api.update_profile(&session.token, &profile).await {
                alert(&e.to_string());
            }
            loading_hide();
        });
    })?;

    Ok(())
}

/// Logout: sobreescribir ambas cookies con expiración pasada y volver
/// al sign-in.
fn wire_logout_button() -> Result<(), JsValue> {
    let btn = match get_element_by_id("logout_btn") {
        Some(btn) => btn,
        None => return Ok(()),
    };

    on_click(&btn, move |_e| {
        log::info!("👋 Logout");
        let _ = clear_cookie(COOKIE_JWT);
        let _ = clear_cookie(COOKIE_REST_ID);
        navigate_to(PAGE_SIGN_IN);
    })?;

    Ok(())
}
