use serde::{Deserialize, Serialize};

/// Restaurante administrado por el admin logueado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub photo_url: String,
    pub address: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub tax_percent: String,
}

/// Datos del formulario de alta de restaurante.
#[derive(Debug, Clone, Serialize)]
pub struct NewRestaurant {
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub tax_percent: String,
    pub address: String,
    pub pincode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": "r42",
            "name": "La Terraza",
            "photo_url": "https://cdn.example/r42.png",
            "address": "Calle Mayor 1"
        }"#;
        let rest: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(rest.id, "r42");
        assert_eq!(rest.description, "");
        assert_eq!(rest.pincode, "");
    }
}
