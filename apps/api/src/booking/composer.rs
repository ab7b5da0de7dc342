//! Message composition — seeds the "free visit" request text from the
//! dialog's own (possibly edited) dimensions and product, and builds the
//! WhatsApp deep link on submit.
//!
//! The composed text is the authoritative export format of a booking
//! request: human-readable plain text carrying product, size, area, price
//! and contact details.

use crate::catalog::Product;
use crate::estimator::estimate_raw;
use crate::estimator::format::format_area;

/// The fixed message template. Width/height are embedded as the RAW strings
/// the user typed — not re-sanitized — while area and price come from a
/// fresh estimate of those same strings.
pub fn compose_default_message(
    product: &Product,
    width_raw: &str,
    height_raw: &str,
    currency: &str,
) -> String {
    let e = estimate_raw(width_raw, height_raw, product);
    format!(
        "Hi! I'd like a free visit for {}. Size: {}cm × {}cm (~{} m²). Your price estimate: {} {}.",
        product.name,
        width_raw,
        height_raw,
        format_area(e.area_sq_m),
        currency,
        e.your_price,
    )
}

/// Appends the contact lines to the message body and wraps the whole text
/// in a `wa.me` deep link. The caller opens the link; no navigation happens
/// server-side.
pub fn compose_outbound_url(
    message: &str,
    name: &str,
    phone: &str,
    preferred: &str,
    business_number: &str,
) -> String {
    let full = format!("{message}\nName: {name}\nPhone: {phone}\nPreferred: {preferred}");
    format!(
        "https://wa.me/{business_number}?text={}",
        urlencoding::encode(&full)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{product, ProductKey};

    #[test]
    fn test_default_message_reference_values() {
        let msg = compose_default_message(product(ProductKey::Sheer), "200", "300", "AED");
        assert_eq!(
            msg,
            "Hi! I'd like a free visit for Sheer Curtains. Size: 200cm × 300cm (~6 m²). \
             Your price estimate: AED 320."
        );
    }

    #[test]
    fn test_default_message_embeds_raw_strings() {
        // Raw input goes into the text as typed; the numbers degrade to 0.
        let msg = compose_default_message(product(ProductKey::Zebra), "abc", "300", "AED");
        assert!(msg.contains("Size: abccm × 300cm"));
        assert!(msg.contains("(~0 m²)"));
        assert!(msg.contains("AED 0."));
    }

    #[test]
    fn test_outbound_url_shape() {
        let url = compose_outbound_url("Hello", "Ali", "0501234567", "WhatsApp", "97156778999");
        assert!(url.starts_with("https://wa.me/97156778999?text="));
    }

    #[test]
    fn test_outbound_url_encodes_full_text() {
        let url = compose_outbound_url(
            "Hi! ~6 m²",
            "Ali Hassan",
            "0501234567",
            "Call",
            "97156778999",
        );
        let encoded = url.split("?text=").nth(1).unwrap();
        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(
            decoded,
            "Hi! ~6 m²\nName: Ali Hassan\nPhone: 0501234567\nPreferred: Call"
        );
        // Newlines and spaces must not survive unencoded
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains(' '));
    }

    #[test]
    fn test_export_text_carries_all_required_fields() {
        let msg = compose_default_message(product(ProductKey::MotorBlinds), "150", "200", "AED");
        let url = compose_outbound_url(&msg, "Ali", "0501234567", "WhatsApp", "97156778999");
        let decoded =
            urlencoding::decode(url.split("?text=").nth(1).unwrap()).unwrap().to_string();
        for needle in [
            "Motorized Blinds",
            "150cm",
            "200cm",
            "~3 m²",
            "AED 835",
            "Name: Ali",
            "Phone: 0501234567",
            "Preferred: WhatsApp",
        ] {
            assert!(decoded.contains(needle), "missing {needle:?} in {decoded}");
        }
    }
}
