// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. Cada endpoint
// responde o bien { "error": ... } o bien un campo de éxito con nombre;
// un 401 es fallo de autenticación independientemente del cuerpo.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::FormData;

use crate::config::{BACKEND_URL, PHOTO_URL};
use crate::models::admin::{AdminProfile, SignUpData};
use crate::models::menu::{MenuItem, NewMenuItem};
use crate::models::order::{BillLine, HistoryEntry, OrderBoard, ServedBoard};
use crate::models::restaurant::{NewRestaurant, Restaurant};
use crate::models::table::DiningTable;
use crate::services::error::ApiError;

const AUTH_HEADER: &str = "X-Auth-Token";

/// Cliente API - SOLO comunicación HTTP (stateless).
/// El token viaja por parámetro; las cookies son cosa del session gate.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    photo_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
            photo_url: PHOTO_URL.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Autenticación
    // ------------------------------------------------------------------

    /// Login de admin. Devuelve el JWT a persistir.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/authenticate", self.base_url);
        let body = serde_json::json!({ "email": email, "password": password });

        log::info!("🔐 Autenticando admin: {}", email);

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        decode(response, "jwt").await
    }

    /// Registro de un admin nuevo. Devuelve el JWT recién emitido.
    pub async fn create_admin(&self, data: &SignUpData) -> Result<String, ApiError> {
        let url = format!("{}/create_admin", self.base_url);

        log::info!("📝 Registrando admin: {}", data.email_id);

        let response = Request::post(&url)
            .json(data)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        decode(response, "jwt_token").await
    }

    // ------------------------------------------------------------------
    // Restaurantes
    // ------------------------------------------------------------------

    /// Listar los restaurantes del admin.
    pub async fn get_restaurants(&self, token: &str) -> Result<Vec<Restaurant>, ApiError> {
        let url = format!("{}/get_restaurant", self.base_url);
        let response = get_with_token(&url, token).await?;
        decode(response, "restaurant_details").await
    }

    /// Alta de restaurante. Devuelve el id creado.
    pub async fn add_restaurant(
        &self,
        token: &str,
        restaurant: &NewRestaurant,
    ) -> Result<String, ApiError> {
        let url = format!("{}/add_restaurant", self.base_url);

        log::info!("🏪 Creando restaurante: {}", restaurant.name);

        let response = post_json(&url, token, restaurant).await?;
        decode(response, "restaurant_id").await
    }

    // ------------------------------------------------------------------
    // Carta
    // ------------------------------------------------------------------

    pub async fn get_menus(&self, token: &str, rest_id: &str) -> Result<Vec<MenuItem>, ApiError> {
        let url = format!("{}/get_menus?restaurant_id={}", self.base_url, rest_id);
        let response = get_with_token(&url, token).await?;
        decode(response, "menu").await
    }

    /// Alta de plato. Devuelve el id del plato creado.
    pub async fn new_menu(&self, token: &str, item: &NewMenuItem) -> Result<u64, ApiError> {
        let url = format!("{}/new_menu", self.base_url);

        log::info!("🍜 Añadiendo plato: {}", item.name);

        let response = post_json(&url, token, item).await?;
        decode(response, "menu_id").await
    }

    pub async fn delete_menu(&self, token: &str, menu_id: u64) -> Result<(), ApiError> {
        let url = format!("{}/delete_menu", self.base_url);
        let body = serde_json::json!({ "menu_id": menu_id });
        let response = post_json(&url, token, &body).await?;
        expect_success(response).await
    }

    // ------------------------------------------------------------------
    // Mesas
    // ------------------------------------------------------------------

    pub async fn all_tables(
        &self,
        token: &str,
        rest_id: &str,
    ) -> Result<Vec<DiningTable>, ApiError> {
        let url = format!("{}/all_tables?restaurant_id={}", self.base_url, rest_id);
        let response = get_with_token(&url, token).await?;
        decode(response, "tables").await
    }

    /// Crear mesa. Devuelve el id de mesa creado.
    pub async fn create_table(
        &self,
        token: &str,
        rest_id: &str,
        table_name: &str,
    ) -> Result<u64, ApiError> {
        let url = format!("{}/create_table", self.base_url);
        let body = serde_json::json!({ "restaurant_id": rest_id, "table": table_name });

        log::info!("🪑 Creando mesa: {}", table_name);

        let response = post_json(&url, token, &body).await?;
        decode(response, "table_id").await
    }

    pub async fn delete_table(&self, token: &str, table_id: u64) -> Result<(), ApiError> {
        let url = format!("{}/table?id={}", self.base_url, table_id);

        let response = Request::delete(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        expect_success(response).await
    }

    /// URL de descarga del QR de una mesa (enlace directo, sin fetch).
    pub fn qr_code_url(&self, rest_id: &str, table_id: u64) -> String {
        format!(
            "{}/code?restaurant_id={}&table={}",
            self.base_url, rest_id, table_id
        )
    }

    // ------------------------------------------------------------------
    // Pedidos
    // ------------------------------------------------------------------

    /// Pedidos abiertos, agrupados por mesa. Es la request del poll tick.
    pub async fn new_orders(&self, token: &str, rest_id: &str) -> Result<OrderBoard, ApiError> {
        let url = format!("{}/new_orders", self.base_url);
        let body = serde_json::json!({ "restaurant_id": rest_id });
        let response = post_json(&url, token, &body).await?;
        decode(response, "new_orders").await
    }

    /// Pedidos ya servidos, agrupados por mesa. Fetch one-shot del toggle.
    pub async fn recent_orders(&self, token: &str, rest_id: &str) -> Result<ServedBoard, ApiError> {
        let url = format!("{}/recent_orders", self.base_url);
        let body = serde_json::json!({ "restaurant_id": rest_id });
        let response = post_json(&url, token, &body).await?;
        decode(response, "recent_orders").await
    }

    /// Marcar una línea de pedido como entregada.
    pub async fn mark_delivered(
        &self,
        token: &str,
        rest_id: &str,
        line_id: u64,
    ) -> Result<(), ApiError> {
        let url = format!("{}/delivered/{}", self.base_url, line_id);
        let body = serde_json::json!({ "restaurant_id": rest_id });

        log::info!("✅ Marcando línea {} como entregada", line_id);

        let response = post_json(&url, token, &body).await?;
        expect_success(response).await
    }

    pub async fn order_history(
        &self,
        token: &str,
        rest_id: &str,
    ) -> Result<Vec<HistoryEntry>, ApiError> {
        let url = format!("{}/order_history", self.base_url);
        let body = serde_json::json!({ "restaurant_id": rest_id });
        let response = post_json(&url, token, &body).await?;
        decode(response, "order_history").await
    }

    /// Factura detallada de un pedido del historial.
    pub async fn detailed_order(
        &self,
        token: &str,
        rest_id: &str,
        order_id: u64,
    ) -> Result<Vec<BillLine>, ApiError> {
        let url = format!("{}/detailed_order/{}", self.base_url, order_id);
        let body = serde_json::json!({ "restaurant_id": rest_id });
        let response = post_json(&url, token, &body).await?;
        let details: OrderDetails = decode(response, "details").await?;
        Ok(details.bill)
    }

    // ------------------------------------------------------------------
    // Perfil
    // ------------------------------------------------------------------

    pub async fn get_profile(&self, token: &str) -> Result<AdminProfile, ApiError> {
        let url = format!("{}/profile", self.base_url);
        let response = get_with_token(&url, token).await?;
        decode(response, "admin_information").await
    }

    pub async fn update_profile(
        &self,
        token: &str,
        profile: &AdminProfile,
    ) -> Result<(), ApiError> {
        let url = format!("{}/profile", self.base_url);

        log::info!("💾 Actualizando perfil de {}", profile.email_address);

        let response = post_json(&url, token, profile).await?;
        expect_success(response).await
    }

    // ------------------------------------------------------------------
    // Fotos
    // ------------------------------------------------------------------

    /// Subir una imagen (multipart). Devuelve la URL pública.
    pub async fn upload_photo(&self, file: &web_sys::File) -> Result<String, ApiError> {
        let url = format!("{}/add", self.photo_url);

        let form = FormData::new()
            .map_err(|_| ApiError::Network("Error creando FormData".to_string()))?;
        form.append_with_blob("restaurant_photo", file)
            .map_err(|_| ApiError::Network("Error adjuntando la imagen".to_string()))?;

        log::info!("📷 Subiendo foto: {}", file.name());

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        decode(response, "url").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------------------------------
// Helpers de transporte
// ----------------------------------------------------------------------

async fn get_with_token(url: &str, token: &str) -> Result<Response, ApiError> {
    Request::get(url)
        .header(AUTH_HEADER, token)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Network error: {}", e)))
}

async fn post_json<B: serde::Serialize>(
    url: &str,
    token: &str,
    body: &B,
) -> Result<Response, ApiError> {
    Request::post(url)
        .header(AUTH_HEADER, token)
        .json(body)
        .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Network error: {}", e)))
}

/// Decodificar la respuesta según el contrato del backend:
/// 401 -> Auth, campo "error" -> Application, campo de éxito con nombre -> Ok,
/// cualquier otra forma -> UnknownShape.
async fn decode<T: DeserializeOwned>(response: Response, field: &str) -> Result<T, ApiError> {
    if response.status() == 401 {
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::Auth(extract_error_message(&text)));
    }

    let value: Value = response
        .json()
        .await
        .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))?;

    decode_value(value, field)
}

/// Parte pura del decode, separada para poder testearla sin red.
fn decode_value<T: DeserializeOwned>(value: Value, field: &str) -> Result<T, ApiError> {
    if let Some(err) = value.get("error") {
        let msg = err
            .as_str()
            .map(|s| s.to_string())
            .unwrap_or_else(|| err.to_string());
        return Err(ApiError::Application(msg));
    }

    match value.get(field) {
        Some(payload) => serde_json::from_value(payload.clone())
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e))),
        None => Err(ApiError::UnknownShape),
    }
}

/// Respuestas que solo confirman con { "success": ... }.
async fn expect_success(response: Response) -> Result<(), ApiError> {
    decode::<Value>(response, "success").await.map(|_| ())
}

/// Sacar el mensaje del cuerpo de un 401 ({ "error": ... }), o el cuerpo
/// crudo si no parsea.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

#[derive(serde::Deserialize)]
struct OrderDetails {
    bill: Vec<BillLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderBoard;

    #[test]
    fn error_field_wins_over_success_field() {
        let value = serde_json::json!({ "error": "token expired", "jwt": "x" });
        let result: Result<String, ApiError> = decode_value(value, "jwt");
        assert_eq!(result, Err(ApiError::Application("token expired".to_string())));
    }

    #[test]
    fn named_success_field_is_extracted() {
        let value = serde_json::json!({ "jwt": "abc.def" });
        let result: Result<String, ApiError> = decode_value(value, "jwt");
        assert_eq!(result.unwrap(), "abc.def");
    }

    #[test]
    fn unrecognized_shape_is_flagged() {
        let value = serde_json::json!({ "something_else": 1 });
        let result: Result<String, ApiError> = decode_value(value, "jwt");
        assert_eq!(result, Err(ApiError::UnknownShape));
    }

    #[test]
    fn non_string_error_still_surfaces() {
        let value = serde_json::json!({ "error": { "code": 3 } });
        let result: Result<String, ApiError> = decode_value(value, "jwt");
        match result {
            Err(ApiError::Application(msg)) => assert!(msg.contains("code")),
            other => panic!("expected Application error, got {:?}", other),
        }
    }

    #[test]
    fn order_board_payload_decodes_by_table() {
        let value = serde_json::json!({
            "new_orders": {
                "Table 1": {
                    "users.name": "Alice",
                    "orders": [ { "id": 1, "name": "Soup", "quantity": 2 } ]
                },
                "Table 2": {
                    "users.name": "Bob",
                    "orders": []
                }
            }
        });
        let board: OrderBoard = decode_value(value, "new_orders").unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board["Table 1"].customer, "Alice");
        assert!(board["Table 2"].orders.is_empty());
    }

    #[test]
    fn extract_error_message_falls_back_to_raw_body() {
        assert_eq!(extract_error_message(r#"{"error":"bad token"}"#), "bad token");
        assert_eq!(extract_error_message("<html>502</html>"), "<html>502</html>");
    }
}
