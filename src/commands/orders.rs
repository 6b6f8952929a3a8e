use crate::date_range::DateRange;
use crate::db::DatabaseExt;
use crate::error::{PosError, Result};
use crate::models::Order;
use crate::session::OrderSession;
use crate::stats;
use crate::store::OrderStore;
use crate::App;

/// Submit the session's cart; the session's cart is emptied on success.
pub fn complete_order(app: &App, session: &mut OrderSession<'_>) -> Result<Order> {
    session.complete(app.db())
}

pub fn get_orders(app: &App) -> Result<Vec<Order>> {
    app.db().list()
}

pub fn get_orders_by_date_range(app: &App, range: &DateRange) -> Result<Vec<Order>> {
    let orders = app.db().list()?;
    Ok(stats::filter_orders(&orders, range)
        .into_iter()
        .cloned()
        .collect())
}

pub fn get_order(app: &App, id: i64) -> Result<Order> {
    app.db().get_order(id)?.ok_or(PosError::OrderNotFound(id))
}

pub fn delete_order(app: &App, id: i64) -> Result<()> {
    app.db().delete_by_id(id)
}

/// Remove every order that sold `product_name`. The caller must have
/// confirmed; co-purchased products lose those sales too.
pub fn delete_product_sales(app: &App, product_name: &str) -> Result<usize> {
    stats::delete_product_sales(app.db(), product_name)
}
