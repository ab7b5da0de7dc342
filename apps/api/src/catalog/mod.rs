//! Product catalog — the fixed table of curtain/blind products.
//!
//! Immutable for the lifetime of the process; defined once here and exposed
//! only through read accessors. Table order is display order.

pub mod handlers;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Closed set of catalog keys. Wire format is `snake_case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKey {
    Sheer,
    Blackout,
    Duo,
    RollerPremium,
    Zebra,
    MotorCurtains,
    MotorBlinds,
    WaveSheer,
    WaveBlackout,
    WaveDuo,
}

impl ProductKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKey::Sheer => "sheer",
            ProductKey::Blackout => "blackout",
            ProductKey::Duo => "duo",
            ProductKey::RollerPremium => "roller_premium",
            ProductKey::Zebra => "zebra",
            ProductKey::MotorCurtains => "motor_curtains",
            ProductKey::MotorBlinds => "motor_blinds",
            ProductKey::WaveSheer => "wave_sheer",
            ProductKey::WaveBlackout => "wave_blackout",
            ProductKey::WaveDuo => "wave_duo",
        }
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sheer" => Ok(ProductKey::Sheer),
            "blackout" => Ok(ProductKey::Blackout),
            "duo" => Ok(ProductKey::Duo),
            "roller_premium" => Ok(ProductKey::RollerPremium),
            "zebra" => Ok(ProductKey::Zebra),
            "motor_curtains" => Ok(ProductKey::MotorCurtains),
            "motor_blinds" => Ok(ProductKey::MotorBlinds),
            "wave_sheer" => Ok(ProductKey::WaveSheer),
            "wave_blackout" => Ok(ProductKey::WaveBlackout),
            "wave_duo" => Ok(ProductKey::WaveDuo),
            _ => Err(()),
        }
    }
}

/// A single catalog entry. `rate_per_sq_m` is the undiscounted market rate
/// in currency units per square meter.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub key: ProductKey,
    pub name: &'static str,
    pub blurb: &'static str,
    pub rate_per_sq_m: f64,
    pub image: &'static str,
}

/// The catalog. Rates are kept as exact fractions of the reference quotes
/// (e.g. 533 for a 2m × 3m sheer panel → 533/6 per m²).
static PRODUCTS: [Product; 10] = [
    Product {
        key: ProductKey::Sheer,
        name: "Sheer Curtains",
        blurb: "Airy, light-filtering",
        rate_per_sq_m: 533.0 / 6.0,
        image: "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?q=80&w=1200&auto=format&fit=crop",
    },
    Product {
        key: ProductKey::Blackout,
        name: "Blackout Curtains",
        blurb: "Room-darkening comfort",
        rate_per_sq_m: 826.0 / 6.0,
        image: "https://images.unsplash.com/photo-1544551950-db18acf4c5be?q=80&w=1200&auto=format&fit=crop",
    },
    Product {
        key: ProductKey::Duo,
        name: "Sheer & Blackout Curtains",
        blurb: "Day & night flexibility",
        rate_per_sq_m: 1244.0 / 6.0,
        image: "https://images.unsplash.com/photo-1600585154526-990dced4db0d?q=80&w=1200&auto=format&fit=crop",
    },
    Product {
        key: ProductKey::RollerPremium,
        name: "Roller Blinds Premium",
        blurb: "Minimal & modern",
        rate_per_sq_m: 561.0 / 3.0,
        image: "https://images.unsplash.com/photo-1554995207-c18c203602cb?q=80&w=1200&auto=format&fit=crop",
    },
    Product {
        key: ProductKey::Zebra,
        name: "Zebra Blinds",
        blurb: "Day-night stripes",
        rate_per_sq_m: 1104.0 / 3.0,
        image: "https://images.unsplash.com/photo-1501183638710-841dd1904471?q=80&w=1200&auto=format&fit=crop",
    },
    Product {
        key: ProductKey::MotorCurtains,
        name: "Motorized Curtains",
        blurb: "Wireless convenience",
        rate_per_sq_m: 2085.0 / 6.0,
        image: "https://images.unsplash.com/photo-1519710164239-da123dc03ef4?q=80&w=1200&auto=format&fit=crop",
    },
    Product {
        key: ProductKey::MotorBlinds,
        name: "Motorized Blinds",
        blurb: "One-tap control",
        rate_per_sq_m: 1392.0 / 3.0,
        image: "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=1200&auto=format&fit=crop",
    },
    Product {
        key: ProductKey::WaveSheer,
        name: "Wave Style Sheer Curtains",
        blurb: "Soft ripple finish",
        rate_per_sq_m: 752.0 / 6.0,
        image: "https://picsum.photos/id/1015/1200/800",
    },
    Product {
        key: ProductKey::WaveBlackout,
        name: "Wave Style Blackout Curtains",
        blurb: "Elegant & darkening",
        rate_per_sq_m: 1162.0 / 6.0,
        image: "https://picsum.photos/id/1016/1200/800",
    },
    Product {
        key: ProductKey::WaveDuo,
        name: "Wave Style Sheer & Blackout",
        blurb: "Best of both",
        rate_per_sq_m: 1855.0 / 6.0,
        image: "https://picsum.photos/id/1018/1200/800",
    },
];

/// Returns all products in display order.
pub fn list_products() -> &'static [Product] {
    &PRODUCTS
}

/// Infallible lookup by typed key. Every `ProductKey` has a catalog row.
pub fn product(key: ProductKey) -> &'static Product {
    PRODUCTS
        .iter()
        .find(|p| p.key == key)
        .expect("every ProductKey variant has a catalog row")
}

/// Lookup by raw wire key, e.g. from a query parameter.
pub fn find_by_key(raw: &str) -> Result<&'static Product, AppError> {
    let key: ProductKey = raw
        .parse()
        .map_err(|_| AppError::NotFound(format!("Unknown product '{raw}'")))?;
    Ok(product(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_products_in_display_order() {
        let products = list_products();
        assert_eq!(products.len(), 10);
        assert_eq!(products[0].key, ProductKey::Sheer);
        assert_eq!(products[9].key, ProductKey::WaveDuo);
    }

    #[test]
    fn test_all_rates_positive() {
        for p in list_products() {
            assert!(p.rate_per_sq_m > 0.0, "{} has non-positive rate", p.key);
        }
    }

    #[test]
    fn test_reference_rates() {
        assert!((product(ProductKey::Sheer).rate_per_sq_m - 533.0 / 6.0).abs() < 1e-9);
        assert!((product(ProductKey::MotorBlinds).rate_per_sq_m - 464.0).abs() < 1e-9);
    }

    #[test]
    fn test_find_by_key_known() {
        let p = find_by_key("zebra").unwrap();
        assert_eq!(p.name, "Zebra Blinds");
    }

    #[test]
    fn test_find_by_key_unknown_is_not_found() {
        let err = find_by_key("velvet").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_key_round_trips_through_wire_format() {
        for p in list_products() {
            let parsed: ProductKey = p.key.as_str().parse().unwrap();
            assert_eq!(parsed, p.key);
        }
    }

    #[test]
    fn test_serde_wire_format_is_snake_case() {
        let json = serde_json::to_string(&ProductKey::RollerPremium).unwrap();
        assert_eq!(json, "\"roller_premium\"");
    }
}
