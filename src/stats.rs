//! Sales reporting over completed orders.
//!
//! Everything here is recomputed from the order list on each call. Nothing is
//! cached and orders are never mutated, except by [`delete_product_sales`]
//! which goes through the store.

use crate::date_range::DateRange;
use crate::error::Result;
use crate::models::{ChartRow, Order, OrderType, ProductStat, SalesStats};
use crate::rules::{contains_ignore_case, BreadRules};
use crate::store::OrderStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub fn filter_orders<'a>(orders: &'a [Order], range: &DateRange) -> Vec<&'a Order> {
    orders.iter().filter(|o| range.contains(&o.date)).collect()
}

/// Totals, per-product rollups and bread units for orders inside `range`.
pub fn sales_stats(orders: &[Order], range: &DateRange, bread: &BreadRules) -> SalesStats {
    let mut stats = SalesStats::default();
    let mut index: HashMap<String, usize> = HashMap::new();

    for order in filter_orders(orders, range) {
        stats.total_sales += order.total;
        stats.total_orders += 1;
        if order.order_type == OrderType::Delivery {
            stats.total_delivery_orders += 1;
        }

        for item in &order.items {
            let slot = *index.entry(item.name().to_string()).or_insert_with(|| {
                // Category comes from the first occurrence of the name
                stats.product_stats.push(ProductStat {
                    name: item.name().to_string(),
                    quantity: 0,
                    total: 0.0,
                    category: item.category().to_string(),
                });
                stats.product_stats.len() - 1
            });

            let stat = &mut stats.product_stats[slot];
            stat.quantity += item.quantity as u64;
            stat.total += item.line_total();
        }
    }

    stats.bread_total = bread_total(&stats.product_stats, bread);
    stats
}

pub fn bread_total(product_stats: &[ProductStat], bread: &BreadRules) -> u64 {
    product_stats
        .iter()
        .map(|stat| bread.units_per_item(&stat.name, &stat.category) * stat.quantity)
        .sum()
}

/// Optional item filters for the channel chart. Both match case-insensitive
/// substrings and must both pass when set.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ChartFilter {
    pub category: Option<String>,
    pub name: Option<String>,
}

impl ChartFilter {
    pub fn matches(&self, name: &str, category: &str) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |needle| contains_ignore_case(category, needle));
        let name_ok = self
            .name
            .as_deref()
            .map_or(true, |needle| contains_ignore_case(name, needle));
        category_ok && name_ok
    }
}

/// Per-product quantities split by channel, one row per product name.
pub fn chart_rows(orders: &[Order], range: &DateRange, filter: &ChartFilter) -> Vec<ChartRow> {
    let mut rows: Vec<ChartRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for order in filter_orders(orders, range) {
        for item in &order.items {
            if !filter.matches(item.name(), item.category()) {
                continue;
            }

            let slot = *index.entry(item.name().to_string()).or_insert_with(|| {
                rows.push(ChartRow {
                    name: item.name().to_string(),
                    dine_in_quantity: 0,
                    delivery_quantity: 0,
                });
                rows.len() - 1
            });

            let row = &mut rows[slot];
            match order.order_type {
                OrderType::DineIn => row.dine_in_quantity += item.quantity as u64,
                OrderType::Delivery => row.delivery_quantity += item.quantity as u64,
            }
        }
    }

    rows
}

/// Ids of every order with a line item named `name`.
pub fn orders_containing(orders: &[Order], name: &str) -> Vec<i64> {
    orders
        .iter()
        .filter(|o| o.contains_product(name))
        .map(|o| o.id)
        .collect()
}

/// Delete every order that sold `name`, including whatever else those orders
/// contained. Irreversible; callers confirm with the user first.
///
/// Returns the number of orders removed.
pub fn delete_product_sales(store: &dyn OrderStore, name: &str) -> Result<usize> {
    let ids = orders_containing(&store.list()?, name);

    for id in &ids {
        store.delete_by_id(*id)?;
    }

    tracing::warn!(product = name, orders = ids.len(), "Deleted all sales of product");
    Ok(ids.len())
}
