use serde::{Deserialize, Serialize};

/// Plato de la carta de un restaurante.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub photo_url: String,
    pub price: String,
}

/// Datos del formulario de alta de plato.
#[derive(Debug, Clone, Serialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub photo: String,
    pub price: String,
    pub restaurant_id: String,
}
