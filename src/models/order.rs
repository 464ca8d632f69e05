use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ingredient::Ingredient;

/// Estado de un pedido con el vocabulario del backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Pending,
    Done,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub number: u64,
    /// Ids de ingredientes en orden (bollo, rellenos..., bollo)
    pub ingredients: Vec<String>,
}

/// Pedidos del feed + contadores agregados
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub orders: Vec<Order>,
    pub total: u64,
    pub total_today: u64,
}

/// Línea de un pedido resuelta contra el catálogo
#[derive(Clone, PartialEq, Debug)]
pub struct OrderLine {
    pub ingredient: Ingredient,
    pub count: u32,
}

/// Composición de un pedido (vista de detalle)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct OrderComposition {
    pub lines: Vec<OrderLine>,
    pub total_price: u32,
    /// Ids que no están en el catálogo actual
    pub missing: Vec<String>,
}
