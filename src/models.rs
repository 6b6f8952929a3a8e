use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Product identifier. Numeric for most menu entries, textual for shared
/// extras such as `hud-lavas`; only unique within a category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ProductId {
    Num(i64),
    Text(String),
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId::Num(id)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        ProductId::Num(id as i64)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: &str, price: f64, category: &str) -> Self {
        Product {
            id: id.into(),
            name: name.to_string(),
            price,
            category: category.to_string(),
            description: None,
            image: None,
        }
    }
}

/// A product snapshot plus the ordered quantity (always >= 1).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn category(&self) -> &str {
        &self.product.category
    }

    pub fn price(&self) -> f64 {
        self.product.price
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    #[serde(rename = "dine-in")]
    DineIn,
    #[serde(rename = "delivery")]
    Delivery,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::DineIn => "dine-in",
            OrderType::Delivery => "delivery",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dine-in" => Some(OrderType::DineIn),
            "delivery" => Some(OrderType::Delivery),
            _ => None,
        }
    }
}

/// An order about to be stored; the store assigns id and timestamp.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewOrder {
    pub order_type: OrderType,
    pub items: Vec<CartItem>,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub date: DateTime<Local>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub items: Vec<CartItem>,
    pub total: f64,
}

impl Order {
    pub fn contains_product(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductStat {
    pub name: String,
    pub quantity: u64,
    pub total: f64,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SalesStats {
    pub total_sales: f64,
    pub total_orders: usize,
    pub total_delivery_orders: usize,
    /// One entry per distinct product name, in first-seen order.
    pub product_stats: Vec<ProductStat>,
    pub bread_total: u64,
}

impl SalesStats {
    pub fn product(&self, name: &str) -> Option<&ProductStat> {
        self.product_stats.iter().find(|stat| stat.name == name)
    }

    /// Units sold across all products (the report's total row).
    pub fn total_quantity(&self) -> u64 {
        self.product_stats.iter().map(|stat| stat.quantity).sum()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChartRow {
    pub name: String,
    pub dine_in_quantity: u64,
    pub delivery_quantity: u64,
}
