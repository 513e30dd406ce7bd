//! Cart data model.
//!
//! A [`Cart`] is an ordered list of [`LineItem`]s. The type enforces the cart
//! invariants on every path in: line item names are unique, quantities are at
//! least one, and ids are unique. Restored data that breaks any of these is
//! rejected as a whole.

use std::collections::HashSet;

use luxe_core::{CartState, LineItemId, Price};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when decoding persisted cart data.
#[derive(Debug, Error)]
pub enum CartDataError {
    /// The payload is not a JSON array of line items.
    #[error("malformed cart data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A line item has a quantity of zero.
    #[error("line item {0} has zero quantity")]
    ZeroQuantity(LineItemId),

    /// Two line items share a name.
    #[error("duplicate line item name: {0}")]
    DuplicateName(String),

    /// Two line items share an id.
    #[error("duplicate line item id: {0}")]
    DuplicateId(LineItemId),
}

/// One distinct product held in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable identifier assigned when the item was first added.
    pub id: LineItemId,
    /// Product display name, unique within a cart.
    pub name: String,
    /// Price of a single unit.
    #[serde(rename = "price")]
    pub unit_price: Price,
    /// Number of units, always at least one.
    pub quantity: u32,
}

impl LineItem {
    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Result of adjusting a line item's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// No line item has the given id.
    Missing,
    /// The quantity changed and the item remains.
    Updated {
        /// The new quantity.
        quantity: u32,
    },
    /// The quantity reached zero or below, so the item was dropped.
    Removed,
}

/// Ordered collection of line items, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from line items, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if any item has zero quantity, or if names or ids repeat.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, CartDataError> {
        let mut names = HashSet::with_capacity(items.len());
        let mut ids = HashSet::with_capacity(items.len());

        for item in &items {
            if item.quantity == 0 {
                return Err(CartDataError::ZeroQuantity(item.id));
            }
            if !names.insert(item.name.as_str()) {
                return Err(CartDataError::DuplicateName(item.name.clone()));
            }
            if !ids.insert(item.id) {
                return Err(CartDataError::DuplicateId(item.id));
            }
        }

        Ok(Self { items })
    }

    /// Decode a cart from its JSON storage form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or breaks a cart invariant.
    pub fn from_json(json: &str) -> Result<Self, CartDataError> {
        let items: Vec<LineItem> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// Encode the cart to its JSON storage form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empty or populated.
    #[must_use]
    pub fn state(&self) -> CartState {
        if self.items.is_empty() {
            CartState::Empty
        } else {
            CartState::Populated
        }
    }

    /// Total quantity across all line items (the badge count).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of every line total.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Look up a line item by id.
    #[must_use]
    pub fn find(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up a line item by product name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Pick an id for a new line item.
    ///
    /// Uses `now_millis` unless an existing item already has that id or a
    /// later one, in which case it moves past the largest id in the cart.
    #[must_use]
    pub fn next_id(&self, now_millis: i64) -> LineItemId {
        let floor = self
            .items
            .iter()
            .map(|item| item.id.as_i64().saturating_add(1))
            .max()
            .unwrap_or(i64::MIN);
        LineItemId::new(now_millis.max(floor))
    }

    /// Add one unit of `name`, returning the resulting line item.
    ///
    /// Merges into the existing line item with the same name, keeping its
    /// original price. Otherwise appends a new item with quantity one.
    pub fn add(&mut self, name: &str, unit_price: Price, now_millis: i64) -> LineItem {
        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.quantity = item.quantity.saturating_add(1);
            return item.clone();
        }

        let item = LineItem {
            id: self.next_id(now_millis),
            name: name.to_owned(),
            unit_price,
            quantity: 1,
        };
        self.items.push(item.clone());
        item
    }

    /// Apply a signed change to a line item's quantity.
    ///
    /// A resulting quantity of zero or less removes the item.
    pub fn adjust(&mut self, id: LineItemId, delta: i64) -> Adjustment {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Adjustment::Missing;
        };

        let next = i64::from(item.quantity).saturating_add(delta);
        if next <= 0 {
            self.remove(id);
            return Adjustment::Removed;
        }

        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        Adjustment::Updated {
            quantity: item.quantity,
        }
    }

    /// Remove a line item by id, returning it if present.
    pub fn remove(&mut self, id: LineItemId) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Drop every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    fn item(id: i64, name: &str, unit_price: &str, quantity: u32) -> LineItem {
        LineItem {
            id: LineItemId::new(id),
            name: name.to_owned(),
            unit_price: price(unit_price),
            quantity,
        }
    }

    #[test]
    fn test_add_merges_by_name() {
        let mut cart = Cart::new();
        cart.add("Ring", price("1000"), 10);
        cart.add("Necklace", price("250"), 11);
        cart.add("Ring", price("999"), 12);

        assert_eq!(cart.len(), 2);
        let ring = cart.find_by_name("Ring").unwrap();
        assert_eq!(ring.quantity, 2);
        assert_eq!(ring.unit_price, price("1000"));
        assert_eq!(ring.id, LineItemId::new(10));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        for (i, name) in ["C", "A", "B"].into_iter().enumerate() {
            cart.add(name, price("1"), i64::try_from(i).unwrap());
        }
        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_next_id_is_unique_within_same_millisecond() {
        let mut cart = Cart::new();
        let a = cart.add("Ring", price("1"), 500).id;
        let b = cart.add("Bracelet", price("1"), 500).id;
        let c = cart.add("Earrings", price("1"), 400).id;
        assert_eq!(a, LineItemId::new(500));
        assert_eq!(b, LineItemId::new(501));
        assert_eq!(c, LineItemId::new(502));
    }

    #[test]
    fn test_adjust_updates_and_removes() {
        let mut cart = Cart::from_items(vec![item(1, "Ring", "1000", 2)]).unwrap();
        let id = LineItemId::new(1);

        assert_eq!(cart.adjust(id, 3), Adjustment::Updated { quantity: 5 });
        assert_eq!(cart.adjust(id, -4), Adjustment::Updated { quantity: 1 });
        assert_eq!(cart.adjust(id, -1), Adjustment::Removed);
        assert!(cart.is_empty());
        assert_eq!(cart.adjust(id, 1), Adjustment::Missing);
    }

    #[test]
    fn test_adjust_large_negative_delta_removes() {
        let mut cart = Cart::from_items(vec![item(1, "Ring", "1000", 2)]).unwrap();
        assert_eq!(cart.adjust(LineItemId::new(1), i64::MIN), Adjustment::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_and_state() {
        let cart = Cart::from_items(vec![
            item(1, "Ring", "100", 2),
            item(2, "Pendant", "250", 1),
        ])
        .unwrap();
        assert_eq!(cart.subtotal(), price("450"));
        assert_eq!(cart.state(), CartState::Populated);
        assert_eq!(Cart::new().state(), CartState::Empty);
    }

    #[test]
    fn test_json_layout() {
        let cart = Cart::from_items(vec![item(1_700_000_000_000, "Ring", "1000", 2)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&cart.to_json().unwrap()).unwrap();
        let record = &value[0];
        assert_eq!(record["id"], 1_700_000_000_000_i64);
        assert_eq!(record["name"], "Ring");
        assert_eq!(record["price"].as_f64(), Some(1000.0));
        assert_eq!(record["quantity"], 2);
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let cart = Cart::from_items(vec![
            item(3, "Ring", "499.99", 1),
            item(1, "Chain", "89.5", 4),
        ])
        .unwrap();
        let restored = Cart::from_json(&cart.to_json().unwrap()).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_from_json_reads_storefront_records() {
        let json = r#"[{"name":"Ring","price":1000,"quantity":1,"id":1700000000000}]"#;
        let cart = Cart::from_json(json).unwrap();
        assert_eq!(cart.items()[0].unit_price, price("1000"));
    }

    #[test]
    fn test_from_json_rejects_broken_invariants() {
        assert!(matches!(
            Cart::from_json("{"),
            Err(CartDataError::Malformed(_))
        ));
        assert!(matches!(
            Cart::from_json(r#"[{"id":1,"name":"Ring","price":1,"quantity":0}]"#),
            Err(CartDataError::ZeroQuantity(_))
        ));
        assert!(matches!(
            Cart::from_json(r#"[{"id":1,"name":"Ring","price":1,"quantity":-2}]"#),
            Err(CartDataError::Malformed(_))
        ));
        assert!(matches!(
            Cart::from_json(r#"[{"id":1,"name":"Ring","price":-1,"quantity":1}]"#),
            Err(CartDataError::Malformed(_))
        ));
        assert!(matches!(
            Cart::from_items(vec![item(1, "Ring", "1", 1), item(2, "Ring", "1", 1)]),
            Err(CartDataError::DuplicateName(_))
        ));
        assert!(matches!(
            Cart::from_items(vec![item(1, "Ring", "1", 1), item(1, "Chain", "1", 1)]),
            Err(CartDataError::DuplicateId(_))
        ));
    }
}
