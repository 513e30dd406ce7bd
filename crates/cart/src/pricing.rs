//! Order totals.
//!
//! `total` is `subtotal - discount + tax`. The shipping fee is reported next
//! to it but not folded in; [`CartSummary::amount_due`] gives the figure with
//! shipping included.

use luxe_core::Price;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::promo::PromoCode;

/// Flat tax rate applied to the discounted subtotal.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Rates and thresholds used to derive a [`CartSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Tax as a fraction (0.08 is 8%).
    pub tax_rate: Decimal,
    /// Subtotals at or above this ship free.
    pub free_shipping_threshold: Price,
    /// Flat fee charged below the threshold.
    pub shipping_fee: Price,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            free_shipping_threshold: Price::from_cents(50_000),
            shipping_fee: Price::from_cents(2_500),
        }
    }
}

impl PricingPolicy {
    /// Derive every order figure from a cart subtotal.
    ///
    /// The shipping threshold is compared against the subtotal before any
    /// discount.
    #[must_use]
    pub fn summarize(&self, subtotal: Price, promo: Option<PromoCode>) -> CartSummary {
        let discount = promo.map_or(Price::ZERO, |code| subtotal.scale(code.rate()));
        let taxable = subtotal.saturating_sub(discount);
        let tax = taxable.scale(self.tax_rate);
        let shipping_fee = if subtotal >= self.free_shipping_threshold {
            Price::ZERO
        } else {
            self.shipping_fee
        };

        CartSummary {
            subtotal,
            discount,
            tax,
            shipping_fee,
            total: taxable + tax,
            promo,
        }
    }
}

/// Derived order figures for the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Σ unit price × quantity.
    pub subtotal: Price,
    /// Promo discount taken off the subtotal.
    pub discount: Price,
    /// Tax on the discounted subtotal.
    pub tax: Price,
    /// Zero when the order qualifies for free shipping.
    pub shipping_fee: Price,
    /// Discounted subtotal plus tax.
    pub total: Price,
    /// Promotion the discount came from.
    #[serde(skip)]
    pub promo: Option<PromoCode>,
}

impl CartSummary {
    /// Whether the order ships free.
    #[must_use]
    pub fn is_free_shipping(&self) -> bool {
        self.shipping_fee.is_zero()
    }

    /// Shipping as shown to the customer: `FREE` or the formatted fee.
    #[must_use]
    pub fn shipping_label(&self) -> String {
        if self.is_free_shipping() {
            "FREE".to_string()
        } else {
            self.shipping_fee.display()
        }
    }

    /// What the customer would be charged: `total` plus shipping.
    #[must_use]
    pub fn amount_due(&self) -> Price {
        self.total + self.shipping_fee
    }
}
