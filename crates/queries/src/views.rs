//! Read shapes returned by the query service.

use common::{OrderId, OrderItem, Product, ProductId};
use serde::Serialize;
use store::OrderRecord;

/// A catalog entry as shown in product listings. The id is not exposed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl From<Product> for ProductListing {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            category: product.category,
        }
    }
}

/// One order line reduced to what it points at and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderLineView {
    pub product_id: ProductId,
    pub quantity: i32,
}

impl From<&OrderItem> for OrderLineView {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

/// An order with its lines expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    pub id: OrderId,
    pub user_name: String,
    pub items: Vec<OrderLineView>,
}

impl From<OrderRecord> for OrderDetails {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: record.order.id,
            user_name: record.order.user_name,
            items: record.items.iter().map(OrderLineView::from).collect(),
        }
    }
}
