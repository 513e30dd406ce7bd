//! Plain-text rendering of the cart, catalog and toasts.
//!
//! Every function writes to an `io::Write` so output can be captured in
//! tests; the binary passes a locked stdout.

use std::io::{self, Write};

use luxe_cart::{CartSummary, LineItem, Notification, Product};

/// Cart badge text. Empty when nothing is in the cart, which hides it.
#[must_use]
pub fn badge(count: u64) -> String {
    if count == 0 {
        String::new()
    } else {
        format!("🛒 {count}")
    }
}

/// Write the cart line items, or the empty-cart message.
pub fn cart_items(out: &mut impl Write, items: &[LineItem]) -> io::Result<()> {
    if items.is_empty() {
        writeln!(out, "Your cart is empty")?;
        writeln!(out, "Start adding beautiful jewelry to your collection")?;
        return Ok(());
    }

    for item in items {
        writeln!(
            out,
            "[{id}] {name}  {price} x {qty} = {total}",
            id = item.id,
            name = item.name,
            price = item.unit_price,
            qty = item.quantity,
            total = item.line_total(),
        )?;
    }
    Ok(())
}

/// Write the order summary block.
pub fn summary(out: &mut impl Write, summary: &CartSummary) -> io::Result<()> {
    writeln!(out, "Subtotal:  {}", summary.subtotal)?;
    if let Some(promo) = summary.promo {
        writeln!(out, "Discount:  -{} ({promo})", summary.discount)?;
    }
    writeln!(out, "Tax:       {}", summary.tax)?;
    writeln!(out, "Shipping:  {}", summary.shipping_label())?;
    writeln!(out, "Total:     {}", summary.total)?;
    Ok(())
}

/// Write the whole cart view: badge, items and, when populated, the summary.
pub fn cart(
    out: &mut impl Write,
    count: u64,
    items: &[LineItem],
    totals: &CartSummary,
) -> io::Result<()> {
    let badge = badge(count);
    if !badge.is_empty() {
        writeln!(out, "{badge}")?;
    }
    cart_items(out, items)?;
    if !items.is_empty() {
        writeln!(out)?;
        summary(out, totals)?;
    }
    Ok(())
}

/// Write queued notifications as toast lines.
pub fn notifications(out: &mut impl Write, notifications: &[Notification]) -> io::Result<()> {
    for notification in notifications {
        writeln!(out, "{} {}", notification.kind.icon(), notification.message)?;
    }
    Ok(())
}

/// Write a product listing.
pub fn products(out: &mut impl Write, products: &[&Product]) -> io::Result<()> {
    if products.is_empty() {
        writeln!(out, "No products found")?;
        return Ok(());
    }

    for product in products {
        write!(out, "{:<28} {:<10} {:>12}", product.name, product.category, product.price)?;
        if let Some(badge) = &product.badge {
            write!(out, "  [{badge}]")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use luxe_cart::{PricingPolicy, PromoCode};
    use luxe_core::{LineItemId, NotificationKind, Price};

    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn item(name: &str, price: &str, quantity: u32) -> LineItem {
        LineItem {
            id: LineItemId::new(1),
            name: name.to_string(),
            unit_price: price.parse().unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_badge_hidden_when_empty() {
        assert_eq!(badge(0), "");
        assert_eq!(badge(3), "🛒 3");
    }

    #[test]
    fn test_empty_cart_message() {
        let text = render(|out| cart_items(out, &[]));
        assert!(text.starts_with("Your cart is empty"));
    }

    #[test]
    fn test_cart_lines() {
        let text = render(|out| cart_items(out, &[item("Gold Band", "1250", 2)]));
        assert_eq!(text, "[1] Gold Band  $1,250.00 x 2 = $2,500.00\n");
    }

    #[test]
    fn test_summary_free_shipping_and_discount() {
        let totals =
            PricingPolicy::default().summarize("600".parse::<Price>().unwrap(), Some(PromoCode::Luxe10));
        let text = render(|out| summary(out, &totals));
        assert!(text.contains("Subtotal:  $600.00"));
        assert!(text.contains("Discount:  -$60.00 (LUXE10)"));
        assert!(text.contains("Tax:       $43.20"));
        assert!(text.contains("Shipping:  FREE"));
        assert!(text.contains("Total:     $583.20"));
    }

    #[test]
    fn test_empty_cart_view_has_no_badge_or_summary() {
        let totals = PricingPolicy::default().summarize(Price::ZERO, None);
        let text = render(|out| cart(out, 0, &[], &totals));
        assert!(!text.contains("🛒"));
        assert!(!text.contains("Total"));
    }

    #[test]
    fn test_notifications() {
        let notes = vec![
            Notification {
                message: "Cart cleared".to_string(),
                kind: NotificationKind::Success,
            },
            Notification {
                message: "Your cart is empty!".to_string(),
                kind: NotificationKind::Error,
            },
        ];
        let text = render(|out| notifications(out, &notes));
        assert_eq!(text, "✓ Cart cleared\n⚠ Your cart is empty!\n");
    }

    #[test]
    fn test_no_products() {
        assert_eq!(render(|out| products(out, &[])), "No products found\n");
    }
}
