//! Promotional discount codes.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error for a code that is not one of the known promotions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid promo code: {0}")]
pub struct UnknownPromoCode(pub String);

/// A recognised promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromoCode {
    /// `LUXE10`: 10% off.
    Luxe10,
    /// `SAVE20`: 20% off.
    Save20,
    /// `FIRST15`: 15% off.
    First15,
}

impl PromoCode {
    /// Every known code.
    pub const ALL: [Self; 3] = [Self::Luxe10, Self::Save20, Self::First15];

    /// The code as customers type it.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Luxe10 => "LUXE10",
            Self::Save20 => "SAVE20",
            Self::First15 => "FIRST15",
        }
    }

    /// Whole-number discount percentage.
    #[must_use]
    pub const fn percent(self) -> u32 {
        match self {
            Self::Luxe10 => 10,
            Self::Save20 => 20,
            Self::First15 => 15,
        }
    }

    /// Discount as a fraction of the subtotal (e.g. `0.10`).
    #[must_use]
    pub fn rate(self) -> Decimal {
        Decimal::new(i64::from(self.percent()), 2)
    }
}

impl std::fmt::Display for PromoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for PromoCode {
    type Err = UnknownPromoCode;

    /// Codes are matched after trimming and upper-casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|promo| promo.code() == normalized)
            .ok_or(UnknownPromoCode(normalized))
    }
}
