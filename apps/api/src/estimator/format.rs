//! Display formatting — integer prices with thousands grouping and a fixed
//! 3-letter currency prefix; areas with up to 2 decimals, trailing zeros
//! trimmed ("6" not "6.00", "2.5" not "2.50").

/// Groups an integer with comma thousands separators: 1392 → "1,392".
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// "AED 1,392"
pub fn format_price(n: i64, currency: &str) -> String {
    format!("{currency} {}", group_thousands(n))
}

/// Area with up to 2 decimal places: 6.0 → "6", 2.5 → "2.5", 1.51 → "1.51".
pub fn format_area(area: f64) -> String {
    let s = format!("{area:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
