//! Order line items, shared by orders and kitchen schedules.

use record_framework::ValidationErrors;
use serde::{Deserialize, Serialize};

/// Portion size of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Big,
}

/// One line of an order.
///
/// `quantity` is optional on the wire so that an absent or `null` quantity
/// reaches validation and is rejected there, instead of being defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderItem {
    pub product: String,
    pub size: Size,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl OrderItem {
    pub fn new(product: impl Into<String>, size: Size, quantity: i64) -> Self {
        Self {
            product: product.into(),
            size,
            quantity: Some(quantity),
        }
    }
}

/// Checks an item list, recording failures under `order` / `order[i].<field>`.
pub fn validate_items(items: &[OrderItem], errors: &mut ValidationErrors) {
    if items.is_empty() {
        errors.push("order", "must contain at least one item");
        return;
    }

    for (index, item) in items.iter().enumerate() {
        if item.product.trim().is_empty() {
            errors.push(format!("order[{index}].product"), "must not be empty");
        }
        match item.quantity {
            None => errors.push(format!("order[{index}].quantity"), "may not be null"),
            Some(quantity) if quantity < 1 => errors.push(
                format!("order[{index}].quantity"),
                format!("must be at least 1, got {quantity}"),
            ),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(items: &[OrderItem]) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        validate_items(items, &mut errors);
        errors
    }

    #[test]
    fn well_formed_items_pass() {
        let items = [
            OrderItem::new("Pizza", Size::Medium, 2),
            OrderItem::new("Lasagna", Size::Big, 1),
        ];
        assert!(check(&items).is_empty());
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(check(&[]).has_field("order"));
    }

    #[test]
    fn missing_and_non_positive_quantities_are_rejected() {
        let mut missing = OrderItem::new("Pizza", Size::Small, 1);
        missing.quantity = None;
        let items = [
            OrderItem::new("Soup", Size::Small, 1),
            missing,
            OrderItem::new("Salad", Size::Big, 0),
        ];

        let errors = check(&items);
        assert_eq!(errors.len(), 2);
        assert!(errors.has_field("order[1].quantity"));
        assert!(errors.has_field("order[2].quantity"));
    }

    #[test]
    fn blank_product_is_rejected() {
        let errors = check(&[OrderItem::new("  ", Size::Medium, 1)]);
        assert!(errors.has_field("order[0].product"));
    }

    #[test]
    fn absent_quantity_deserializes_to_none() {
        let item: OrderItem =
            serde_json::from_str(r#"{"product": "Pizza", "size": "medium"}"#).unwrap();
        assert_eq!(item.quantity, None);

        let item: OrderItem =
            serde_json::from_str(r#"{"product": "Pizza", "size": "big", "quantity": null}"#)
                .unwrap();
        assert_eq!(item.quantity, None);
    }

    #[test]
    fn unknown_size_or_field_fails_to_deserialize() {
        assert!(serde_json::from_str::<OrderItem>(
            r#"{"product": "Pizza", "size": "huge", "quantity": 1}"#
        )
        .is_err());
        assert!(serde_json::from_str::<OrderItem>(
            r#"{"product": "Pizza", "size": "small", "quantity": 1, "price": 3}"#
        )
        .is_err());
    }
}
