//! Order commands.

use common::{DEFAULT_ORDER_STATUS, NewOrder, NewOrderItem, ProductId};

use crate::error::ValidationError;
use crate::validation::{require_positive, require_text};

/// Quantity of an order line when the caller gives none.
pub const DEFAULT_QUANTITY: i32 = 1;

/// One requested line of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    /// Defaults to [`DEFAULT_QUANTITY`] when `None`.
    pub quantity: Option<i32>,
}

impl OrderLine {
    /// Creates a line with the default quantity.
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: None,
        }
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    fn into_draft(self) -> Result<NewOrderItem, ValidationError> {
        Ok(NewOrderItem {
            product_id: self.product_id,
            quantity: require_positive("quantity", self.quantity.unwrap_or(DEFAULT_QUANTITY))?,
        })
    }
}

/// Command to create an order together with its lines.
///
/// An empty line list is allowed and produces an order with no items.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    /// The customer placing the order.
    pub user_name: String,

    /// Requested lines, kept in the given order.
    pub items: Vec<OrderLine>,
}

impl CreateOrder {
    /// Creates a new CreateOrder command with no lines.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            items: Vec::new(),
        }
    }

    /// Appends a line.
    pub fn with_item(mut self, line: OrderLine) -> Self {
        self.items.push(line);
        self
    }

    /// Validates the header and every line. New orders start as `pending`.
    pub(crate) fn into_drafts(self) -> Result<(NewOrder, Vec<NewOrderItem>), ValidationError> {
        let header = NewOrder {
            user_name: require_text("user_name", self.user_name)?,
            status: DEFAULT_ORDER_STATUS.to_string(),
        };
        let items = self
            .items
            .into_iter()
            .map(OrderLine::into_draft)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((header, items))
    }
}
