// ============================================================================
// TABLES VIEW - Gestión de mesas (listar, crear, borrar, QR)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, on_click, ElementBuilder};
use crate::models::table::DiningTable;
use crate::services::ApiClient;
use crate::state::SessionState;
use crate::views::shared::{alert, clear_input, input_value, loading_hide, loading_show};

pub fn init(session: SessionState) -> Result<(), JsValue> {
    wire_create_button(session.clone())?;

    loading_show();
    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();
        match api.all_tables(&session.token, &session.restaurant_id).await {
            Ok(tables) => {
                log::info!("🪑 {} mesas cargadas", tables.len());
                for table in &tables {
                    if let Err(e) = append_table_card(table, session.clone()) {
                        log::error!("❌ Error renderizando mesa: {:?}", e);
                    }
                }
            }
            Err(e) => alert(&e.to_string()),
        }
        loading_hide();
    });

    Ok(())
}

fn wire_create_button(session: SessionState) -> Result<(), JsValue> {
    let btn = match get_element_by_id("create_table_btn") {
        Some(btn) => btn,
        None => return Ok(()),
    };

    on_click(&btn, move |e| {
        e.prevent_default();

        let session = session.clone();
        let table_name = input_value("table-name").unwrap_or_default();

        loading_show();
        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new();
            match api
                .create_table(&session.token, &session.restaurant_id, &table_name)
                .await
            {
                Ok(table_id) => {
                    clear_input("table-name");
                    let table = DiningTable {
                        id: table_id,
                        name: table_name,
                    };
                    if let Err(e) = append_table_card(&table, session.clone()) {
                        log::error!("❌ Error renderizando mesa nueva: {:?}", e);
                    }
                }
                Err(e) => alert(&e.to_string()),
            }
            loading_hide();
        });
    })?;

    Ok(())
}

fn append_table_card(table: &DiningTable, session: SessionState) -> Result<(), JsValue> {
    let container = get_element_by_id("tables_container")
        .ok_or_else(|| JsValue::from_str("No #tables_container element"))?;
    let card = build_table_card(table, session)?;
    append_child(&container, &card)
}

fn build_table_card(table: &DiningTable, session: SessionState) -> Result<Element, JsValue> {
    let api = ApiClient::new();

    let name = ElementBuilder::new("h1")?
        .class("title-font sm:text-2xl text-xl font-medium text-gray-900 mb-3")
        .text(&table.name)
        .build();

    let remove_btn = ElementBuilder::new("button")?
        .id(&table.id.to_string())?
        .class("border-2 bg-blue-500 hover:bg-blue-700 text-white px-3 py-2 my-8 rounded-lg outline-none remove_table")
        .text("Remove")
        .build();
    {
        let table_id = table.id;
        let session = session.clone();
        on_click(&remove_btn, move |_e| {
            remove_table(table_id, session.clone());
        })?;
    }

    // Enlace de descarga directa del QR (el navegador hace el GET)
    let qr_link = ElementBuilder::new("a")?
        .class("cursor-pointer text-indigo-500 inline-flex items-center mb-10 hover:text-blue-700 download_qrcode")
        .attr("href", &api.qr_code_url(&session.restaurant_id, table.id))?
        .attr("download", &format!("{}.png", table.name))?
        .attr("target", "_")?
        .text("Download QR")
        .build();

    let inner = ElementBuilder::new("div")?
        .class("h-5/6 shadow-md bg-opacity-75 px-8 pt-16 pb-24 rounded-xl overflow-hidden text-center relative border-2 border-gray-200")
        .child(name)?
        .child(remove_btn)?
        .child(ElementBuilder::new("br")?.build())?
        .child(qr_link)?
        .build();

    Ok(ElementBuilder::new("div")?
        .id(&format!("card-{}", table.id))?
        .class("p-4 w-full lg:w-1/3")
        .child(inner)?
        .build())
}

fn remove_table(table_id: u64, session: SessionState) {
    loading_show();
    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();
        match api.delete_table(&session.token, table_id).await {
            Ok(()) => {
                if let Some(card) = get_element_by_id(&format!("card-{}", table_id)) {
                    card.remove();
                }
            }
            Err(e) => alert(&e.to_string()),
        }
        loading_hide();
    });
}
