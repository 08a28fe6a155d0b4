// ============================================================================
// MENU VIEW - Gestión de la carta (listar, añadir, borrar)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, on_click, ElementBuilder};
use crate::models::menu::{MenuItem, NewMenuItem};
use crate::services::ApiClient;
use crate::state::SessionState;
use crate::views::shared::{alert, clear_input, input_value, loading_hide, loading_show, selected_file};

pub fn init(session: SessionState) -> Result<(), JsValue> {
    wire_add_button(session.clone())?;

    loading_show();
    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();
        match api.get_menus(&session.token, &session.restaurant_id).await {
            Ok(items) => {
                log::info!("🍜 {} platos en la carta", items.len());
                for item in &items {
                    if let Err(e) = append_menu_card(item, session.clone()) {
                        log::error!("❌ Error renderizando plato: {:?}", e);
                    }
                }
            }
            Err(e) => alert(&e.to_string()),
        }
        loading_hide();
    });

    Ok(())
}

fn wire_add_button(session: SessionState) -> Result<(), JsValue> {
    let btn = match get_element_by_id("add_item_btn") {
        Some(btn) => btn,
        None => return Ok(()),
    };

    on_click(&btn, move |e| {
        e.prevent_default();

        let session = session.clone();
        let file = match selected_file("upload-file") {
            Some(file) => file,
            None => {
                alert("Selecciona una foto del plato");
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

            let new_item = NewMenuItem {
                name: input_value("edit-name").unwrap_or_default(),
                description: input_value("edit-des").unwrap_or_default(),
                photo: photo_url.clone(),
                price: input_value("edit-price").unwrap_or_default(),
                restaurant_id: session.restaurant_id.clone(),
            };

            match api.new_menu(&session.token, &new_item).await {
                Ok(menu_id) => {
                    // Limpiar el formulario y añadir la card recién creada
                    clear_input("edit-name");
                    clear_input("edit-des");
                    clear_input("edit-price");
                    clear_input("upload-file");

                    let item = MenuItem {
                        id: menu_id,
                        name: new_item.name,
                        description: new_item.description,
                        photo_url,
                        price: new_item.price,
                    };
                    if let Err(e) = append_menu_card(&item, session.clone()) {
                        log::error!("❌ Error renderizando plato nuevo: {:?}", e);
                    }
                }
                Err(e) => alert(&e.to_string()),
            }
            loading_hide();
        });
    })?;

    Ok(())
}

fn append_menu_card(item: &MenuItem, session: SessionState) -> Result<(), JsValue> {
    let container = get_element_by_id("menu_container")
        .ok_or_else(|| JsValue::from_str("No #menu_container element"))?;
    let card = build_menu_card(item, session)?;
    append_child(&container, &card)
}

fn build_menu_card(item: &MenuItem, session: SessionState) -> Result<Element, JsValue> {
    let photo = ElementBuilder::new("img")?
        .class("h-40 rounded-xl w-full object-cover object-center mb-6")
        .attr("src", &item.photo_url)?
        .attr("alt", "content")?
        .build();
    let name = ElementBuilder::new("h2")?
        .class("text-lg text-gray-600 font-medium title-font mb-4")
        .text(&item.name)
        .build();
    let description = ElementBuilder::new("p")?
        .class("leading-relaxed text-base md:line-clamp-3")
        .text(&item.description)
        .build();
    let price_label = ElementBuilder::new("p")?
        .class("leading-relaxed text-base")
        .text("Price")
        .build();
    let price = ElementBuilder::new("span")?
        .text(&format!("Rs.{}", item.price))
        .build();

    let remove_btn = ElementBuilder::new("button")?
        .id(&item.id.to_string())?
        .class("float-right px-4 py-2 bg-blue-600 -mt-5 rounded-md text-white remove_item")
        .text("Remove")
        .build();
    {
        let menu_id = item.id;
        on_click(&remove_btn, move |_e| {
            remove_menu_item(menu_id, session.clone());
        })?;
    }

    let inner = ElementBuilder::new("div")?
        .class("bg-gray-100 p-6 rounded-lg shadow-md border-2 border-blue-50")
        .child(photo)?
        .child(name)?
        .child(description)?
        .child(price_label)?
        .child(price)?
        .child(remove_btn)?
        .build();

    Ok(ElementBuilder::new("div")?
        .id(&format!("card-{}", item.id))?
        .class("xl:w-1/4 md:w-1/2 p-4")
        .child(inner)?
        .build())
}

fn remove_menu_item(menu_id: u64, session: SessionState) {
    loading_show();
    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();
        match api.delete_menu(&session.token, menu_id).await {
            Ok(()) => {
                if let Some(card) = get_element_by_id(&format!("card-{}", menu_id)) {
                    card.remove();
                }
            }
            Err(e) => alert(&e.to_string()),
        }
        loading_hide();
    });
}
