//! Request and response shapes exchanged over the API
//!
//! Field names are camelCase on the wire. Missing or `null` request fields
//! decode to empty values so validation, not deserialization, reports them.

use crate::core::entity::{Order, OrderItem, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Decode an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: Option<i64>,
    pub currency: Option<String>,
    pub items: Option<Vec<CreateOrderItemRequest>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub qty: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_price_cents: i64,
}

impl CreateOrderItemRequest {
    pub fn new(sku: &str, name: &str, qty: i32, unit_price_cents: i64) -> Self {
        Self {
            sku: sku.to_string(),
            name: name.to_string(),
            qty,
            unit_price_cents,
        }
    }
}

/// Full view of a stored order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: i64,
    pub customer_id: i64,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItemSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemSummary {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub qty: i32,
    pub unit_price_cents: i64,
}

impl From<&OrderItem> for OrderItemSummary {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id,
            sku: item.sku.clone(),
            name: item.name.clone(),
            qty: item.qty,
            unit_price_cents: item.unit_price_cents,
        }
    }
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            status: order.status,
            total_cents: order.total_cents,
            currency: order.currency.clone(),
            created_at: order.created_at,
            updated_at: order.updated_at,
            items: order.items.iter().map(OrderItemSummary::from).collect(),
        }
    }
}
