use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    errors::ServiceError,
    utils::{checked_sum, line_subtotal},
};

/// What the storefront hands over when a shopper adds a product: a cart line without
/// its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemDescriptor {
    pub product_id: String,
    pub product_name: String,
    pub unit_price: Decimal,
    pub image_url: String,
    pub vendor_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub image_url: String,
    pub vendor_name: String,
}

impl CartItem {
    pub fn new(descriptor: CartItemDescriptor, quantity: i32) -> Self {
        let CartItemDescriptor {
            product_id,
            product_name,
            unit_price,
            image_url,
            vendor_name,
        } = descriptor;

        Self {
            product_id,
            product_name,
            unit_price,
            quantity,
            image_url,
            vendor_name,
        }
    }

    pub fn subtotal(&self) -> Result<Decimal, ServiceError> {
        line_subtotal(self.unit_price, self.quantity)
    }
}

/// A shopper's in-progress selection.
///
/// Only the item list is state. `total` and `item_count` are computed from it on every
/// call, so they can never drift from the items. At most one line exists per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from persisted lines. Lines for the same product are merged and
    /// lines with a non-positive quantity are dropped.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity <= 0 {
                continue;
            }
            match cart.position(&item.product_id) {
                Some(idx) => {
                    let existing = &mut cart.items[idx];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fails when the sum leaves the `Decimal` range.
    pub fn total(&self) -> Result<Decimal, ServiceError> {
        checked_sum(self.items.iter().map(CartItem::subtotal))
    }

    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id == product_id)
    }

    /// Merges into the existing line for the product or appends a new one.
    /// Returns `false` (and changes nothing) when `quantity <= 0`.
    pub fn add_item(&mut self, descriptor: CartItemDescriptor, quantity: i32) -> bool {
        if quantity <= 0 {
            return false;
        }

        match self.position(&descriptor.product_id) {
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.quantity = existing.quantity.saturating_add(quantity);
            }
            None => self.items.push(CartItem::new(descriptor, quantity)),
        }

        true
    }

    /// Absolute set. A quantity of zero or less removes the line.
    /// Returns `false` when the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &str, new_quantity: i32) -> bool {
        let Some(idx) = self.position(product_id) else {
            return false;
        };

        if new_quantity <= 0 {
            self.items.remove(idx);
        } else {
            self.items[idx].quantity = new_quantity;
        }

        true
    }

    pub fn remove_item(&mut self, product_id: &str) -> bool {
        match self.position(product_id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
