// ============================================================================
// HISTORY VIEW - Historial de pedidos con detalle expandible
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, on_click, set_inner_html, ElementBuilder};
use crate::models::order::HistoryEntry;
use crate::services::ApiClient;
use crate::state::SessionState;
use crate::views::shared::{alert, loading_hide, loading_show};

pub fn init(session: SessionState) {
    loading_show();
    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();
        match api
            .order_history(&session.token, &session.restaurant_id)
            .await
        {
            Ok(entries) => {
                log::info!("🧾 {} pedidos en el historial", entries.len());
                for entry in &entries {
                    if let Err(e) = append_history_card(entry, session.clone()) {
                        log::error!("❌ Error renderizando historial: {:?}", e);
                    }
                }
            }
            Err(e) => alert(&e.to_string()),
        }
        loading_hide();
    });
}

fn append_history_card(entry: &HistoryEntry, session: SessionState) -> Result<(), JsValue> {
    let container = get_element_by_id("order_history_container")
        .ok_or_else(|| JsValue::from_str("No #order_history_container element"))?;
    let card = build_history_card(entry, session)?;
    append_child(&container, &card)
}

fn build_history_card(entry: &HistoryEntry, session: SessionState) -> Result<Element, JsValue> {
    let customer_row = ElementBuilder::new("div")?
        .class("pr-16 lg:pr-0")
        .build();
    customer_row.set_inner_html("<img src=\"../assets/user.svg\" class=\"inline\">");
    let customer = ElementBuilder::new("span")?
        .class("ml-2 text-purple-600")
        .text(&entry.name)
        .build();
    append_child(&customer_row, &customer)?;

    let time_row = ElementBuilder::new("div")?.class("lg:pr-0").build();
    time_row.set_inner_html("<img src=\"../assets/time.svg\" class=\"inline\">");
    let time = ElementBuilder::new("span")?
        .class("ml-2 text-purple-600")
        .text(&entry.time_and_date)
        .build();
    append_child(&time_row, &time)?;

    // Contenedor del detalle, vacío hasta que se expande
    let detail_div = ElementBuilder::new("div")?
        .id(&format!("div_{}", entry.id))?
        .class("slide_div py-5 hidden")
        .build();

    let total_row = ElementBuilder::new("div")?.class("lg:pr-0").build();
    total_row.set_inner_html("<img src=\"../assets/money.svg\" class=\"inline\">");
    let total = ElementBuilder::new("span")?
        .class("ml-2 text-purple-600 text-lg")
        .text(&format!("Rs.{}", entry.total()))
        .build();
    append_child(&total_row, &total)?;

    let expand_icon = ElementBuilder::new("img")?
        .id(&entry.id.to_string())?
        .attr("src", "../assets/up.svg")?
        .class("float-right transform rotate-180")
        .build();
    {
        let order_id = entry.id;
        on_click(&expand_icon, move |_e| {
            toggle_detail(order_id, session.clone());
        })?;
    }
    append_child(&total_row, &expand_icon)?;

    let inner = ElementBuilder::new("div")?
        .class("bg-gray-100 p-6 rounded-lg shadow-md border-2 border-blue-100 pr-10 space-y-3")
        .child(customer_row)?
        .child(time_row)?
        .child(detail_div)?
        .child(total_row)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("xl:w-1/3 md:w-1/2 p-4")
        .child(inner)?
        .build())
}

/// Expandir/colapsar la factura de un pedido. Si ya está abierta se vacía;
/// si no, se pide el detalle al backend y se rellena.
fn toggle_detail(order_id: u64, session: SessionState) {
    let detail_div = match get_element_by_id(&format!("div_{}", order_id)) {
        Some(div) => div,
        None => return,
    };

    // Ya expandida: colapsar sin tocar la red
    if !detail_div.inner_html().is_empty() {
        set_inner_html(&detail_div, "");
        let _ = detail_div.class_list().add_1("hidden");
        return;
    }

    loading_show();
    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();
        match api
            .detailed_order(&session.token, &session.restaurant_id, order_id)
            .await
        {
            Ok(bill) => {
                for line in &bill {
                    let row = match ElementBuilder::new("div") {
                        Ok(b) => b
                            .class("border-2 border-indigo-200 rounded-xl shadow-sm h-auto my-3")
                            .build(),
                        Err(_) => continue,
                    };
                    row.set_inner_html(
                        "<p class=\"px-3 pt-2 w-5/6 text-lg\"></p>\
                         <p class=\"-mt-7 mr-6 float-right bg-indigo-500 px-2 rounded-md text-white\"></p>\
                         <p class=\"py-1 px-3 text-sm font-semibold text-gray-600\">Price: <span></span></p>",
                    );
                    let paragraphs = row.query_selector_all("p").ok();
                    if let Some(ps) = paragraphs {
                        if let Some(p) = ps.item(0) {
                            p.set_text_content(Some(&line.name));
                        }
                        if let Some(p) = ps.item(1) {
                            p.set_text_content(Some(&line.quantity.to_string()));
                        }
                    }
                    if let Ok(Some(span)) = row.query_selector("p span") {
                        span.set_text_content(Some(&line.price));
                    }
                    let _ = detail_div.append_child(&row);
                }
                let _ = detail_div.class_list().remove_1("hidden");
            }
            Err(e) => alert(&e.to_string()),
        }
        loading_hide();
    });
}
