use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{PosError, Result};
use crate::models::{CartItem, NewOrder, Order, OrderType, PriceBreakdown, Product, ProductId};
use crate::pricing;
use crate::rules::ShopRules;
use crate::store::OrderStore;

/// One order-entry flow at the counter: a channel, a cart, and the catalog
/// and rules it was opened with.
pub struct OrderSession<'a> {
    catalog: &'a Catalog,
    rules: &'a ShopRules,
    order_type: OrderType,
    cart: Cart,
}

impl<'a> OrderSession<'a> {
    pub fn new(catalog: &'a Catalog, rules: &'a ShopRules, order_type: OrderType) -> Self {
        OrderSession {
            catalog,
            rules,
            order_type,
            cart: Cart::new(),
        }
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn products_in(&self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.catalog.products_in(category)
    }

    pub fn set_quantity(&mut self, product_id: &ProductId, delta: i32) {
        self.cart.set_quantity(product_id, delta);
    }

    pub fn pending_quantity(&self, product_id: &ProductId) -> u32 {
        self.cart.pending_quantity(product_id)
    }

    /// Add the pending quantity of a catalog product. Unknown products and
    /// zero quantities are ignored.
    pub fn add_to_cart(&mut self, category: &str, product_id: &ProductId) -> bool {
        match self.catalog.find(category, product_id) {
            Some(product) => self.cart.add_to_cart(product),
            None => false,
        }
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove_from_cart(product_id);
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> PriceBreakdown {
        pricing::price(self.cart.items(), self.order_type, &self.rules.delivery)
    }

    pub fn clear(&mut self) {
        self.cart.clear();
    }

    /// Submit the cart as an order. The cart is only cleared once the store
    /// has accepted the order.
    pub fn complete(&mut self, store: &dyn OrderStore) -> Result<Order> {
        if self.cart.is_empty() {
            return Err(PosError::EmptyCart);
        }

        let totals = self.totals();
        let order = store.create(NewOrder {
            order_type: self.order_type,
            items: self.cart.items().to_vec(),
            total: totals.total,
        })?;

        tracing::debug!(
            order_id = order.id,
            subtotal = totals.subtotal,
            delivery_fee = totals.delivery_fee,
            "Order completed"
        );

        self.cart.clear();
        Ok(order)
    }
}
