use crate::error::{PosError, Result};
use crate::models::{NewOrder, Order};
use chrono::Local;
use std::sync::Mutex;

/// Durable collection of completed orders.
pub trait OrderStore {
    /// Persist an order, assigning its id and timestamp.
    fn create(&self, order: NewOrder) -> Result<Order>;

    fn list(&self) -> Result<Vec<Order>>;

    /// Deleting an id that does not exist is not an error.
    fn delete_by_id(&self, id: i64) -> Result<()>;
}

#[derive(Debug, Default)]
struct MemoryState {
    orders: Vec<Order>,
    next_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    state: Mutex<MemoryState>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with already-stamped orders, e.g. history imported from elsewhere.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        let next_id = orders.iter().map(|o| o.id).max().unwrap_or(0);
        MemoryOrderStore {
            state: Mutex::new(MemoryState { orders, next_id }),
        }
    }
}

impl OrderStore for MemoryOrderStore {
    fn create(&self, order: NewOrder) -> Result<Order> {
        let mut state = self.state.lock().map_err(|_| PosError::LockPoisoned)?;
        state.next_id += 1;

        let order = Order {
            id: state.next_id,
            date: Local::now(),
            order_type: order.order_type,
            items: order.items,
            total: order.total,
        };
        state.orders.push(order.clone());

        tracing::debug!(order_id = order.id, total = order.total, "Stored order in memory");
        Ok(order)
    }

    fn list(&self) -> Result<Vec<Order>> {
        let state = self.state.lock().map_err(|_| PosError::LockPoisoned)?;
        Ok(state.orders.clone())
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut state = self.state.lock().map_err(|_| PosError::LockPoisoned)?;
        state.orders.retain(|o| o.id != id);
        Ok(())
    }
}
