use serde::{Deserialize, Serialize};

/// Mesa del restaurante. El QR de cada mesa se descarga desde el backend
/// con restaurant_id + id de mesa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: u64,
    pub name: String,
}
