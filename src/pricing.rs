use crate::models::{CartItem, OrderType, PriceBreakdown};
use crate::rules::DeliveryRules;

pub fn subtotal(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Courier surcharge for a cart: zero unless the order goes out for delivery.
pub fn delivery_fee(items: &[CartItem], order_type: OrderType, rules: &DeliveryRules) -> f64 {
    if order_type != OrderType::Delivery {
        return 0.0;
    }

    items
        .iter()
        .filter(|item| !rules.is_exempt(item.name()))
        .map(|item| rules.per_unit(item.category()) * item.quantity as f64)
        .sum()
}

pub fn price(items: &[CartItem], order_type: OrderType, rules: &DeliveryRules) -> PriceBreakdown {
    let subtotal = subtotal(items);
    let delivery_fee = delivery_fee(items, order_type, rules);

    PriceBreakdown {
        subtotal,
        delivery_fee,
        total: subtotal + delivery_fee,
    }
}
