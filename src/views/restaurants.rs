// ============================================================================
// RESTAURANTS VIEW - Selección de restaurante y alta de restaurante
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::{COOKIE_REST_ID, PAGE_ORDERS};
use crate::dom::{append_child, get_element_by_id, on_click, ElementBuilder};
use crate::models::restaurant::{NewRestaurant, Restaurant};
use crate::services::ApiClient;
use crate::session::{navigate_to, set_cookie};
use crate::state::SessionState;
use crate::views::shared::{alert, input_value, loading_hide, loading_show, selected_file};

/// Página de selección: listar los restaurantes del admin; el click en uno
/// persiste rest_id y salta al tablero de pedidos.
pub fn init_selection(session: SessionState) {
    loading_show();
    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();
        match api.get_restaurants(&session.token).await {
            Ok(restaurants) => {
                log::info!("🏪 {} restaurantes cargados", restaurants.len());
                if let Err(e) = render_restaurant_list(&restaurants) {
                    log::error!("❌ Error renderizando restaurantes: {:?}", e);
                }
            }
            Err(e) => alert(&e.to_string()),
        }
        loading_hide();
    });
}

fn render_restaurant_list(restaurants: &[Restaurant]) -> Result<(), JsValue> {
    let container = get_element_by_id("add_rest")
        .ok_or_else(|| JsValue::from_str("No #add_rest element"))?;

    for restaurant in restaurants {
        let card = build_restaurant_card(restaurant)?;
        let rest_id = restaurant.id.clone();
        on_click(&card, move |_e| {
            select_restaurant(&rest_id);
        })?;
        append_child(&container, &card)?;
    }
    Ok(())
}

fn build_restaurant_card(restaurant: &Restaurant) -> Result<Element, JsValue> {
    let photo = ElementBuilder::new("img")?
        .class("w-20 h-20 object-fill rounded-md")
        .attr("src", &restaurant.photo_url)?
        .build();
    let photo_wrap = ElementBuilder::new("div")?
        .class("w-20 h-20 rounded-md m-3 bg-black flex-none")
        .child(photo)?
        .build();

    let name = ElementBuilder::new("span")?
        .class("text-2xl text-gray-700 font-medium")
        .text(&restaurant.name)
        .build();
    let address = ElementBuilder::new("p")?
        .class("text-gray-400 text-sm")
        .text(&restaurant.address)
        .build();
    let info = ElementBuilder::new("div")?
        .class("m-2 w-auto h-auto")
        .child(name)?
        .child(address)?
        .build();

    Ok(ElementBuilder::new("div")?
        .id(&restaurant.id)?
        .class("restaurant w-auto h-auto border-2 border-gray-300 my-3 mx-6 rounded-xl flex")
        .child(photo_wrap)?
        .child(info)?
        .build())
}

fn select_restaurant(rest_id: &str) {
    if rest_id.is_empty() {
        alert("rest_id null");
        return;
    }
    if let Err(e) = set_cookie(COOKIE_REST_ID, rest_id) {
        log::error!("❌ Error guardando rest_id: {}", e);
        return;
    }
    navigate_to(PAGE_ORDERS);
}

/// Página de alta de restaurante: subir la foto primero, crear después;
/// en éxito el restaurante nuevo queda seleccionado.
pub fn init_add_restaurant(session: SessionState) -> Result<(), JsValue> {
    let btn = match get_element_by_id("add_restro_btn") {
        Some(btn) => btn,
        None => return Ok(()),
    };

    on_click(&btn, move |e| {
        e.prevent_default();

        let session = session.clone();
        let file = match selected_file("upload-file") {
            Some(file) => file,
            None => {
                alert("Selecciona una imagen del restaurante");
                return;
            }
        };

        loading_show();
        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new();
            let photo_url = match api.upload_photo(&file).await {
                Ok(url) => url,
                Err(e) => {
                    alert(&e.to_string());
                    loading_hide();
                    return;
                }
            };

            let restaurant = NewRestaurant {
                name: input_value("res-name").unwrap_or_default(),
                description: input_value("description").unwrap_or_default(),
                photo_url,
                tax_percent: input_value("gst").unwrap_or_default(),
                address: input_value("addr").unwrap_or_default(),
                pincode: input_value("Pincode").unwrap_or_default(),
            };

            match api.add_restaurant(&session.token, &restaurant).await {
                Ok(rest_id) => select_restaurant(&rest_id),
                Err(e) => alert(&e.to_string()),
            }
            loading_hide();
        });
    })?;

    Ok(())
}
