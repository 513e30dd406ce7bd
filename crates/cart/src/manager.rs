//! The cart manager.
//!
//! [`CartManager`] owns the session's [`Cart`], mirrors it to a
//! [`CartStorage`] slot after every mutation, and reports outcomes through a
//! [`Notifier`]. None of its operations return errors: unreadable storage
//! means an empty cart, unknown ids are no-ops, and failed writes are logged
//! while the in-memory cart keeps the change.
//!
//! # Example
//!
//! ```
//! use luxe_cart::{CartManager, MemoryStorage, RecordingNotifier};
//!
//! let mut cart = CartManager::restore(MemoryStorage::new(), RecordingNotifier::new());
//! cart.add_item("Solitaire Ring", "1000".parse().unwrap());
//! assert_eq!(cart.item_count(), 1);
//! ```

use chrono::Utc;
use luxe_core::{CartState, LineItemId, NotificationKind, Price};
use tracing::instrument;

use crate::cart::{Adjustment, Cart, LineItem};
use crate::confirm::Confirmation;
use crate::notify::Notifier;
use crate::pricing::{CartSummary, PricingPolicy};
use crate::promo::PromoCode;
use crate::storage::{CartStorage, DEFAULT_CART_KEY};

/// Prompt shown before emptying the cart.
pub const CLEAR_CART_PROMPT: &str = "Are you sure you want to clear your cart?";

/// What a mutation did to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A unit was added, either as a new line item or merged into one.
    Added {
        id: LineItemId,
        quantity: u32,
    },
    /// A line item's quantity changed.
    Updated {
        id: LineItemId,
        quantity: u32,
    },
    /// A line item was removed.
    Removed {
        id: LineItemId,
    },
    /// Every line item was removed.
    Cleared,
    /// The user declined to confirm.
    Declined,
    /// Nothing matched; the cart is untouched.
    Unchanged,
}

impl CartChange {
    /// Whether the cart contents changed, so views and the badge need a refresh.
    #[must_use]
    pub const fn requires_render(&self) -> bool {
        matches!(
            self,
            Self::Added { .. } | Self::Updated { .. } | Self::Removed { .. } | Self::Cleared
        )
    }
}

/// Result of asking to check out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to check out.
    EmptyCart,
    /// Demo hand-off with the figures that would be charged.
    Demo(CartSummary),
}

/// Owns the cart for one session.
#[derive(Debug)]
pub struct CartManager<S, N> {
    cart: Cart,
    storage: S,
    notifier: N,
    key: String,
    pricing: PricingPolicy,
    promo: Option<PromoCode>,
}

impl<S: CartStorage, N: Notifier> CartManager<S, N> {
    /// Restore the cart from the default storage slot.
    pub fn restore(storage: S, notifier: N) -> Self {
        Self::restore_from(storage, notifier, DEFAULT_CART_KEY, PricingPolicy::default())
    }

    /// Restore the cart from `key`, pricing with `pricing`.
    ///
    /// Missing, unreadable, or invalid data yields an empty cart.
    pub fn restore_from(storage: S, notifier: N, key: &str, pricing: PricingPolicy) -> Self {
        let cart = load_cart(&storage, key);
        tracing::debug!(key, items = cart.len(), "cart restored");

        Self {
            cart,
            storage,
            notifier,
            key: key.to_owned(),
            pricing,
            promo: None,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of a product.
    ///
    /// A product already in the cart (matched by name) has its quantity
    /// raised by one; otherwise a new line item is appended.
    #[instrument(skip(self), fields(price = %unit_price))]
    pub fn add_item(&mut self, name: &str, unit_price: Price) -> CartChange {
        let item = self.cart.add(name, unit_price, Utc::now().timestamp_millis());
        tracing::info!(item_id = %item.id, quantity = item.quantity, "item added to cart");

        self.persist();
        self.notifier.notify(
            &format!("\"{name}\" added to cart! 💎"),
            NotificationKind::Success,
        );

        CartChange::Added {
            id: item.id,
            quantity: item.quantity,
        }
    }

    /// Change a line item's quantity by `delta`.
    ///
    /// Unknown ids are ignored. A quantity that would drop to zero or below
    /// removes the item instead.
    #[instrument(skip(self))]
    pub fn change_quantity(&mut self, id: LineItemId, delta: i64) -> CartChange {
        match self.cart.adjust(id, delta) {
            Adjustment::Updated { quantity } => {
                tracing::info!(quantity, "quantity changed");
                self.persist();
                CartChange::Updated { id, quantity }
            }
            Adjustment::Removed => {
                self.removed(id);
                CartChange::Removed { id }
            }
            Adjustment::Missing => {
                tracing::debug!("no line item with this id");
                CartChange::Unchanged
            }
        }
    }

    /// Remove a line item.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: LineItemId) -> CartChange {
        if self.cart.remove(id).is_none() {
            tracing::debug!("no line item with this id");
            return CartChange::Unchanged;
        }
        self.removed(id);
        CartChange::Removed { id }
    }

    /// Persist and announce a line item that has left the cart.
    fn removed(&mut self, id: LineItemId) {
        tracing::info!(item_id = %id, "item removed from cart");
        self.persist();
        self.notifier
            .notify("Item removed from cart", NotificationKind::Success);
    }

    /// Empty the cart once `confirmation` approves.
    ///
    /// Declining leaves the cart and storage untouched and sends no
    /// notification.
    #[instrument(skip_all)]
    pub fn clear(&mut self, confirmation: &mut impl Confirmation) -> CartChange {
        if !confirmation.confirm(CLEAR_CART_PROMPT) {
            tracing::debug!("clear declined");
            return CartChange::Declined;
        }

        self.cart.clear();
        tracing::info!("cart cleared");

        self.persist();
        self.notifier.notify("Cart cleared", NotificationKind::Success);

        CartChange::Cleared
    }

    // =========================================================================
    // Promotions and checkout
    // =========================================================================

    /// Apply a promo code to this session's totals.
    ///
    /// Blank input is ignored. Unknown codes are reported and keep whatever
    /// promotion was already active. Promotions are never persisted.
    pub fn apply_promo(&mut self, input: &str) -> Option<PromoCode> {
        if input.trim().is_empty() {
            return None;
        }

        match input.parse::<PromoCode>() {
            Ok(code) => {
                tracing::info!(%code, "promo code applied");
                self.promo = Some(code);
                self.notifier.notify(
                    &format!("Promo code applied! {}% off", code.percent()),
                    NotificationKind::Success,
                );
                Some(code)
            }
            Err(err) => {
                tracing::debug!(error = %err, "promo code rejected");
                self.notifier
                    .notify("Invalid promo code", NotificationKind::Error);
                None
            }
        }
    }

    /// Drop the active promotion.
    pub const fn clear_promo(&mut self) {
        self.promo = None;
    }

    /// The active promotion, if any.
    #[must_use]
    pub const fn promo(&self) -> Option<PromoCode> {
        self.promo
    }

    /// Hand off to the (simulated) checkout.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.cart.is_empty() {
            self.notifier
                .notify("Your cart is empty!", NotificationKind::Error);
            return CheckoutOutcome::EmptyCart;
        }

        let summary = self.summary();
        tracing::info!(
            items = self.item_count(),
            amount_due = %summary.amount_due(),
            "demo checkout started"
        );
        self.notifier.notify(
            "Proceeding to secure checkout... (Demo)",
            NotificationKind::Success,
        );
        CheckoutOutcome::Demo(summary)
    }

    // =========================================================================
    // Read-only views
    // =========================================================================

    /// Snapshot of the line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Look up a line item by id.
    #[must_use]
    pub fn find(&self, id: LineItemId) -> Option<&LineItem> {
        self.cart.find(id)
    }

    /// The underlying cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Subtotal, discount, tax, shipping, and total.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.pricing.summarize(self.cart.subtotal(), self.promo)
    }

    /// Badge count: total quantity across all line items.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Returns true when the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Empty or populated.
    #[must_use]
    pub fn state(&self) -> CartState {
        self.cart.state()
    }

    /// Pricing rules in effect.
    #[must_use]
    pub const fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    /// The notification collaborator.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access to the notification collaborator.
    pub const fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// The storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage and notifier.
    pub fn into_parts(self) -> (S, N) {
        (self.storage, self.notifier)
    }

    /// Write the full cart to storage.
    fn persist(&mut self) {
        let json = match self.cart.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.storage.write(&self.key, &json) {
            tracing::error!(error = %e, key = %self.key, "failed to persist cart");
        }
    }
}

/// Read and decode the cart slot, falling back to an empty cart.
fn load_cart<S: CartStorage>(storage: &S, key: &str) -> Cart {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::warn!(error = %e, key, "could not read saved cart, starting empty");
            return Cart::new();
        }
    };

    Cart::from_json(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, key, "saved cart is unusable, starting empty");
        Cart::new()
    })
}
