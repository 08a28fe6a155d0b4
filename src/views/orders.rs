// ============================================================================
// ORDERS VIEW - Cards del tablero de pedidos (nuevos y servidos)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, on_click, remove_all, ElementBuilder};
use crate::models::order::{table_dom_key, OrderBoard, PaymentStatus, ServedBoard, TableOrders};
use crate::viewmodels::OrdersViewModel;

/// Selectores de las dos familias de cards del tablero.
pub const CLASS_NEW_CARDS: &str = ".new_order_cards";
pub const CLASS_SERVED_CARDS: &str = ".served_order_cards";

/// Reemplazo total del tablero: se quitan TODAS las cards de pedidos
/// abiertos y se re-renderiza el set completo del último tick.
pub fn render_new_orders(board: &OrderBoard, vm: OrdersViewModel) -> Result<(), JsValue> {
    let container = get_element_by_id("card_container")
        .ok_or_else(|| JsValue::from_str("No #card_container element"))?;

    remove_all(CLASS_NEW_CARDS)?;

    for (table, orders) in board {
        let card = build_open_order_card(table, orders, vm.clone())?;
        append_child(&container, &card)?;
    }
    Ok(())
}

fn build_open_order_card(
    table: &str,
    orders: &TableOrders,
    vm: OrdersViewModel,
) -> Result<Element, JsValue> {
    let key = table_dom_key(table);

    let title = ElementBuilder::new("h2")?
        .class("text-lg text-gray-600 font-medium title-font mb-4 pr-16 lg:pr-0")
        .text(table)
        .build();

    let customer = ElementBuilder::new("p")?
        .class("text-xs mt-2")
        .html("Cust Name:<span class=\"ml-2 text-purple-600\"></span>")
        .build();
    if let Some(span) = customer.query_selector("span")? {
        span.set_text_content(Some(&orders.customer));
    }

    let menu_div = ElementBuilder::new("div")?
        .id(&format!("{}_menu_div", key))?
        .build();

    for line in &orders.orders {
        let row = ElementBuilder::new("div")?
            .id(&format!("item_{}", line.id))?
            .class("border-2 border-indigo-200 rounded-xl shadow-sm h-auto flex my-3")
            .build();

        let name = ElementBuilder::new("p")?
            .class("p-3 w-5/6")
            .text(&line.name)
            .build();

        let checkbox = ElementBuilder::new("input")?
            .id(&line.id.to_string())?
            .attr("type", "checkbox")?
            .class("mt-4 mr-5")
            .build();
        {
            let vm = vm.clone();
            let line_id = line.id;
            on_click(&checkbox, move |_e| {
                vm.mark_delivered(line_id);
            })?;
        }

        let quantity = ElementBuilder::new("p")?
            .class("bg-blue-500 rounded-r-xl text-white p-3")
            .text(&line.quantity.to_string())
            .build();

        append_child(&row, &name)?;
        append_child(&row, &checkbox)?;
        append_child(&row, &quantity)?;
        append_child(&menu_div, &row)?;
    }

    let inner = ElementBuilder::new("div")?
        .class("bg-gray-100 p-6 rounded-lg shadow-md border-2")
        .child(title)?
        .child(customer)?
        .child(menu_div)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("xl:w-1/3 md:w-1/2 p-4 new_order_cards")
        .child(inner)?
        .build())
}

/// Render one-shot de los pedidos servidos; se descartan al volver a la
/// vista de nuevos.
pub fn render_served_orders(board: &ServedBoard) -> Result<(), JsValue> {
    let container = get_element_by_id("card_container")
        .ok_or_else(|| JsValue::from_str("No #card_container element"))?;

    for (table, served) in board {
        let key = table_dom_key(table);

        let title = ElementBuilder::new("h2")?
            .class("text-base text-gray-600 font-medium title-font pr-16 lg:pr-0")
            .text(table)
            .build();

        // El badge de pago sale del primer item: el backend lo repite en
        // todas las líneas de la misma mesa.
        let status = served
            .orders
            .first()
            .map(|line| PaymentStatus::from_code(&line.payment_status))
            .unwrap_or(PaymentStatus::Unknown);
        let badge_color = if status.is_settled() {
            "border-2 border-green-300 text-green-400"
        } else {
            "border-2 border-red-300 text-red-400"
        };
        let badge = ElementBuilder::new("p")?
            .class(&format!(
                "-mt-7 -mr-5 float-right p-1 rounded-md text-xs {}",
                badge_color
            ))
            .text(status.label())
            .build();

        let customer = ElementBuilder::new("p")?
            .class("text-xs mt-2")
            .build();
        customer.set_inner_html("Cust Name:<span class=\"ml-2 text-purple-600\"></span>");
        if let Some(span) = customer.query_selector("span")? {
            span.set_text_content(Some(&served.name));
        }

        let menu_div = ElementBuilder::new("div")?
            .id(&format!("{}_served_menu_div", key))?
            .build();

        for line in &served.orders {
            let row = ElementBuilder::new("div")?
                .class("border-2 border-indigo-200 rounded-xl shadow-sm h-auto flex my-2")
                .build();
            let name = ElementBuilder::new("p")?
                .class("p-3 w-5/6")
                .text(&line.name)
                .build();
            let quantity = ElementBuilder::new("p")?
                .class("m-3 float-right align-middle bg-indigo-500 px-2 rounded-md text-white")
                .text(&line.quantity.to_string())
                .build();
            append_child(&row, &name)?;
            append_child(&row, &quantity)?;
            append_child(&menu_div, &row)?;
        }

        let inner = ElementBuilder::new("div")?
            .class("bg-gray-100 p-6 rounded-lg shadow-md border-2")
            .child(title)?
            .child(badge)?
            .child(customer)?
            .child(menu_div)?
            .build();

        let card = ElementBuilder::new("div")?
            .class("xl:w-1/3 md:w-1/2 p-4 served_order_cards")
            .child(inner)?
            .build();

        append_child(&container, &card)?;
    }
    Ok(())
}

/// Conectar los dos botones del toggle nuevos/servidos.
pub fn wire_toggle_buttons(vm: OrdersViewModel) -> Result<(), JsValue> {
    if let Some(btn) = get_element_by_id("new_order_btn") {
        let vm = vm.clone();
        on_click(&btn, move |_e| {
            vm.show_new_orders();
        })?;
    }
    if let Some(btn) = get_element_by_id("served_order_btn") {
        on_click(&btn, move |_e| {
            vm.show_served_orders();
        })?;
    }
    Ok(())
}
