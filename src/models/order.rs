// ============================================================================
// ORDER MODELS - Tablero de pedidos, pedidos servidos e historial
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Una línea de pedido dentro de una mesa (un plato pedido).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
}

/// Pedidos abiertos de una mesa: nombre del cliente + líneas pendientes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOrders {
    #[serde(rename = "users.name")]
    pub customer: String,
    pub orders: Vec<OrderLine>,
}

/// Tablero completo: nombre de mesa -> pedidos abiertos.
/// BTreeMap para que el orden de renderizado sea estable entre ticks.
pub type OrderBoard = BTreeMap<String, TableOrders>;

/// Clave DOM derivada del nombre de mesa: se eliminan todos los espacios
/// porque el nombre se usa como fragmento de id de elemento.
pub fn table_dom_key(table_name: &str) -> String {
    table_name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Línea de un pedido ya servido (incluye estado de pago).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServedLine {
    #[serde(rename = "menu.name")]
    pub name: String,
    pub quantity: u32,
    pub payment_status: String,
}

/// Pedidos servidos de una mesa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServedOrders {
    pub name: String,
    pub orders: Vec<ServedLine>,
}

pub type ServedBoard = BTreeMap<String, ServedOrders>;

/// Estado de pago tal como lo codifica el backend ("0".."4").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Invalid,
    Failed,
    NotPaid,
    Unknown,
}

impl PaymentStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "0" => PaymentStatus::Paid,
            "1" => PaymentStatus::Pending,
            "2" => PaymentStatus::Invalid,
            "3" => PaymentStatus::Failed,
            "4" => PaymentStatus::NotPaid,
            _ => PaymentStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Invalid => "Invalid",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::NotPaid => "Not Paid",
            PaymentStatus::Unknown => "Unknown",
        }
    }

    /// Solo "Paid" se pinta en verde; el resto en rojo.
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

/// Entrada del historial de pedidos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub name: String,
    pub time_and_date: String,
    pub price_excluding_tax: String,
    pub tax: String,
}

impl HistoryEntry {
    /// Total mostrado = precio sin impuestos + impuestos (el backend los
    /// entrega como strings numéricos).
    pub fn total(&self) -> i64 {
        let base: i64 = self.price_excluding_tax.trim().parse().unwrap_or(0);
        let tax: i64 = self.tax.trim().parse().unwrap_or(0);
        base + tax
    }
}

/// Línea de la factura detallada de un pedido del historial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillLine {
    pub name: String,
    pub quantity: u32,
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_key_strips_all_whitespace() {
        assert_eq!(table_dom_key("Table 1"), "Table1");
        assert_eq!(table_dom_key("  Mesa  VIP 2 "), "MesaVIP2");
        assert_eq!(table_dom_key("T1"), "T1");
    }

    #[test]
    fn payment_status_codes_map_like_backend() {
        assert_eq!(PaymentStatus::from_code("0"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::from_code("1"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::from_code("2"), PaymentStatus::Invalid);
        assert_eq!(PaymentStatus::from_code("3"), PaymentStatus::Failed);
        assert_eq!(PaymentStatus::from_code("4"), PaymentStatus::NotPaid);
        assert_eq!(PaymentStatus::from_code("9"), PaymentStatus::Unknown);
        assert_eq!(PaymentStatus::from_code(""), PaymentStatus::Unknown);
    }

    #[test]
    fn only_paid_is_settled() {
        assert!(PaymentStatus::Paid.is_settled());
        assert!(!PaymentStatus::Pending.is_settled());
        assert!(!PaymentStatus::NotPaid.is_settled());
    }

    #[test]
    fn board_deserializes_from_backend_shape() {
        let json = r#"{
            "T1": {
                "users.name": "Alice",
                "orders": [ { "id": 1, "name": "Soup", "quantity": 2 } ]
            }
        }"#;
        let board: OrderBoard = serde_json::from_str(json).unwrap();
        let t1 = board.get("T1").unwrap();
        assert_eq!(t1.customer, "Alice");
        assert_eq!(t1.orders.len(), 1);
        assert_eq!(t1.orders[0].name, "Soup");
        assert_eq!(t1.orders[0].quantity, 2);
    }

    #[test]
    fn history_total_sums_price_and_tax() {
        let entry = HistoryEntry {
            id: 7,
            name: "Bob".into(),
            time_and_date: "2024-01-01 20:00".into(),
            price_excluding_tax: "450".into(),
            tax: "50".into(),
        };
        assert_eq!(entry.total(), 500);
    }
}
