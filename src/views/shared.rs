// ============================================================================
// SHARED VIEW HELPERS - alert, indicador de carga, lectura de formularios
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::dom::get_element_by_id;

/// Alert nativo del navegador. Todos los errores terminan aquí; la página
/// sigue interactiva después.
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Mostrar el indicador de carga (#loading_icon).
pub fn loading_show() {
    if let Some(icon) = get_element_by_id("loading_icon") {
        let _ = icon.set_attribute("style", "display:");
    }
}

/// Ocultar el indicador de carga.
pub fn loading_hide() {
    if let Some(icon) = get_element_by_id("loading_icon") {
        let _ = icon.set_attribute("style", "display:none");
    }
}

/// Leer el value de un input por id.
pub fn input_value(id: &str) -> Option<String> {
    let el = get_element_by_id(id)?;
    let input = el.dyn_into::<HtmlInputElement>().ok()?;
    Some(input.value())
}

/// Vaciar un input por id (tras un alta exitosa).
pub fn clear_input(id: &str) {
    if let Some(el) = get_element_by_id(id) {
        if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

/// Escribir el value de un input por id.
pub fn set_input_value(id: &str, value: &str) {
    if let Some(el) = get_element_by_id(id) {
        if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
            input.set_value(value);
        }
    }
}

/// Primer fichero seleccionado en un input type=file.
pub fn selected_file(id: &str) -> Option<File> {
    let el = get_element_by_id(id)?;
    let input = el.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}
