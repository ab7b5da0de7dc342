//! Estimator — the pure area/price calculation.
//!
//! Graceful degradation is a hard rule here: malformed numeric text never
//! raises an error, it silently yields zero area and zero prices. There is
//! no failure path anywhere in this module.

pub mod format;
pub mod handlers;

use serde::Serialize;

use crate::catalog::Product;

/// Fixed discount applied to the market price ("Your price (-40%)").
pub const DISCOUNT_FACTOR: f64 = 0.6;

/// Derived pricing figures. Never stored — recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    /// Width in meters, rounded to 2 decimals before any multiplication.
    pub width_m: f64,
    /// Height in meters, rounded to 2 decimals before any multiplication.
    pub height_m: f64,
    pub area_sq_m: f64,
    /// Undiscounted reference price, integer currency units.
    pub market_price: i64,
    /// Discounted price shown to the user: round(market × 0.6).
    pub your_price: i64,
}

/// Leniently coerces raw user text to a dimension in cm.
///
/// Accepts the longest leading digits-and-dot prefix ("12abc" → 12.0), so
/// partially typed input still estimates. Exponent notation is not
/// recognized — the input sanitizer only lets digits and dots through.
/// Anything unparsable or non-finite yields 0.0. Negative values are
/// returned as-is; `estimate` clamps them.
pub fn parse_dimension(raw: &str) -> f64 {
    let s = raw.trim();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + 1,
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return 0.0;
    }

    match s[..end].parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Computes the estimate for dimensions in cm against a product rate.
///
/// Algorithm (order matters and is deliberate):
/// 1. clamp each raw dimension to ≥ 0;
/// 2. convert to meters and round EACH axis to 2 decimals — before the
///    multiplication, so the visible per-axis meter values stay consistent
///    with the displayed area;
/// 3. area = product of the rounded axes, rounded to 2 decimals;
/// 4. market = round(area × rate), half-up to the nearest currency unit;
/// 5. yours = round(market × 0.6).
pub fn estimate(width_cm: f64, height_cm: f64, product: &Product) -> Estimate {
    let width_m = round2(width_cm.max(0.0) / 100.0);
    let height_m = round2(height_cm.max(0.0) / 100.0);
    let area_sq_m = round2(width_m * height_m);

    let market_price = (area_sq_m * product.rate_per_sq_m).round() as i64;
    let your_price = (market_price as f64 * DISCOUNT_FACTOR).round() as i64;

    Estimate {
        width_m,
        height_m,
        area_sq_m,
        market_price,
        your_price,
    }
}

/// Convenience wrapper for raw user-entered dimension strings.
pub fn estimate_raw(width_raw: &str, height_raw: &str, product: &Product) -> Estimate {
    estimate(
        parse_dimension(width_raw),
        parse_dimension(height_raw),
        product,
    )
}

/// Round to 2 decimal places, half away from zero (inputs are non-negative,
/// so this is round-half-up).
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{product, ProductKey};

    #[test]
    fn test_reference_sheer_200_by_300() {
        // 2.00m × 3.00m = 6.00 m² @ 533/6 → market 533, yours round(319.8) = 320
        let e = estimate_raw("200", "300", product(ProductKey::Sheer));
        assert_eq!(e.area_sq_m, 6.0);
        assert_eq!(e.market_price, 533);
        assert_eq!(e.your_price, 320);
    }

    #[test]
    fn test_reference_motor_blinds_150_by_200() {
        // 1.50m × 2.00m = 3.00 m² @ 464 → market 1392, yours round(835.2) = 835
        let e = estimate_raw("150", "200", product(ProductKey::MotorBlinds));
        assert_eq!(e.area_sq_m, 3.0);
        assert_eq!(e.market_price, 1392);
        assert_eq!(e.your_price, 835);
    }

    #[test]
    fn test_your_price_is_sixty_percent_of_market() {
        for p in crate::catalog::list_products() {
            let e = estimate(137.0, 244.0, p);
            assert_eq!(
                e.your_price,
                (e.market_price as f64 * DISCOUNT_FACTOR).round() as i64,
                "discount invariant broken for {}",
                p.key
            );
        }
    }

    #[test]
    fn test_per_axis_rounding_happens_before_multiplication() {
        // 123.4cm → 1.23m (not 1.234). 1.23 × 1.23 = 1.5129 → 1.51.
        // Round-once semantics would give round2(1.234 × 1.234) = 1.52.
        let e = estimate(123.4, 123.4, product(ProductKey::Sheer));
        assert_eq!(e.width_m, 1.23);
        assert_eq!(e.height_m, 1.23);
        assert_eq!(e.area_sq_m, 1.51);
    }

    #[test]
    fn test_non_numeric_input_degrades_to_zero() {
        let e = estimate_raw("abc", "300", product(ProductKey::Sheer));
        assert_eq!(e.area_sq_m, 0.0);
        assert_eq!(e.market_price, 0);
        assert_eq!(e.your_price, 0);
    }

    #[test]
    fn test_negative_input_clamps_to_zero() {
        let e = estimate(-50.0, 300.0, product(ProductKey::Sheer));
        assert_eq!(e.width_m, 0.0);
        assert_eq!(e.area_sq_m, 0.0);
        assert_eq!(e.market_price, 0);
    }

    #[test]
    fn test_empty_input_is_zero() {
        let e = estimate_raw("", "", product(ProductKey::Zebra));
        assert_eq!(e.area_sq_m, 0.0);
        assert_eq!(e.your_price, 0);
    }

    #[test]
    fn test_product_switch_reprices_unchanged_area() {
        let sheer = estimate_raw("200", "300", product(ProductKey::Sheer));
        let zebra = estimate_raw("200", "300", product(ProductKey::Zebra));
        assert_eq!(sheer.area_sq_m, zebra.area_sq_m);
        assert_ne!(sheer.market_price, zebra.market_price);
    }

    #[test]
    fn test_parse_dimension_leading_prefix() {
        assert_eq!(parse_dimension("12abc"), 12.0);
        assert_eq!(parse_dimension("  250 "), 250.0);
        assert_eq!(parse_dimension("2.5"), 2.5);
    }

    #[test]
    fn test_parse_dimension_second_dot_ends_the_number() {
        // The UI sanitizer lets "2.3.4" through; parseFloat reads 2.3.
        assert_eq!(parse_dimension("2.3.4"), 2.3);
    }

    #[test]
    fn test_parse_dimension_exponent_is_not_recognized() {
        // Only the digits-and-dot prefix counts; "e5" is trailing garbage.
        assert_eq!(parse_dimension("1e5"), 1.0);
        assert_eq!(parse_dimension("2.5e2"), 2.5);
    }

    #[test]
    fn test_parse_dimension_garbage() {
        assert_eq!(parse_dimension("abc"), 0.0);
        assert_eq!(parse_dimension("."), 0.0);
        assert_eq!(parse_dimension("-"), 0.0);
        assert_eq!(parse_dimension(""), 0.0);
    }

    #[test]
    fn test_parse_dimension_negative_preserved_until_estimate() {
        assert_eq!(parse_dimension("-50"), -50.0);
    }

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(1.005 + 1e-9), 1.01);
        assert_eq!(round2(2.345_000_1), 2.35);
        assert_eq!(round2(2.344_999_9), 2.34);
    }
}
