// ============================================================================
// COOKIES - Persistencia de sesión en document.cookie
// ============================================================================
// Dos valores con nombre (jwt_token, rest_id) con expiración de 30 días.
// El logout sobreescribe ambos con una expiración en el pasado.
// ============================================================================

use chrono::{Duration, Utc};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::COOKIE_LIFETIME_DAYS;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Buscar un valor por nombre dentro de un header de cookies ya leído.
/// Separada de la lectura del DOM para poder testearla.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    for part in header.split(';') {
        let part = part.trim_start();
        if let Some(value) = part.strip_prefix(name) {
            if let Some(value) = value.strip_prefix('=') {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Leer una cookie por nombre.
pub fn get_cookie(name: &str) -> Option<String> {
    let doc = html_document()?;
    let header = doc.cookie().ok()?;
    parse_cookie(&header, name)
}

/// Guardar una cookie con la vida estándar de sesión (30 días, path=/).
pub fn set_cookie(name: &str, value: &str) -> Result<(), String> {
    let doc = html_document().ok_or("No se pudo acceder a document")?;
    let expires = (Utc::now() + Duration::days(COOKIE_LIFETIME_DAYS)).to_rfc2822();
    let cookie = format!("{}={}; expires={}; path=/", name, value, expires);
    doc.set_cookie(&cookie)
        .map_err(|_| "Error guardando cookie".to_string())
}

/// Borrar una cookie sobreescribiéndola con expiración en el pasado.
pub fn clear_cookie(name: &str) -> Result<(), String> {
    let doc = html_document().ok_or("No se pudo acceder a document")?;
    let cookie = format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/", name);
    doc.set_cookie(&cookie)
        .map_err(|_| "Error eliminando cookie".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_cookie() {
        assert_eq!(
            parse_cookie("jwt_token=abc123", "jwt_token"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn parses_among_several_with_leading_spaces() {
        let header = "theme=dark; jwt_token=tok.en; rest_id=r7";
        assert_eq!(parse_cookie(header, "jwt_token"), Some("tok.en".to_string()));
        assert_eq!(parse_cookie(header, "rest_id"), Some("r7".to_string()));
        assert_eq!(parse_cookie(header, "theme"), Some("dark".to_string()));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(parse_cookie("theme=dark", "jwt_token"), None);
        assert_eq!(parse_cookie("", "jwt_token"), None);
    }

    #[test]
    fn name_must_match_exactly_not_as_prefix() {
        // "rest_id_old" no debe responder por "rest_id"... pero un valor
        // para "rest_id" sí, aunque otro nombre lo contenga como prefijo.
        let header = "rest_id_old=stale; rest_id=r7";
        assert_eq!(parse_cookie(header, "rest_id"), Some("r7".to_string()));
    }

    #[test]
    fn empty_value_is_empty_string() {
        assert_eq!(parse_cookie("rest_id=", "rest_id"), Some(String::new()));
    }
}
