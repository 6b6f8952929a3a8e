use crate::models::{CartItem, Product, ProductId};
use std::collections::HashMap;

/// Line items of one in-progress order plus the per-product quantity picker.
///
/// Every operation is total: unknown ids are ignored and pending quantities
/// never drop below zero.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    items: Vec<CartItem>,
    pending: HashMap<ProductId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjust the pending quantity for a product, clamped at zero.
    pub fn set_quantity(&mut self, product_id: &ProductId, delta: i32) {
        let current = self.pending_quantity(product_id) as i64;
        let next = (current + delta as i64).clamp(0, u32::MAX as i64) as u32;
        self.pending.insert(product_id.clone(), next);
    }

    pub fn pending_quantity(&self, product_id: &ProductId) -> u32 {
        self.pending.get(product_id).copied().unwrap_or(0)
    }

    /// Move the pending quantity of `product` into the cart.
    ///
    /// Returns false when nothing was pending.
    pub fn add_to_cart(&mut self, product: &Product) -> bool {
        let quantity = self.pending_quantity(&product.id);
        if quantity == 0 {
            return false;
        }

        match self.items.iter_mut().find(|item| item.id() == &product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity,
            }),
        }

        self.pending.insert(product.id.clone(), 0);
        true
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.items.retain(|item| item.id() != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.pending.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
