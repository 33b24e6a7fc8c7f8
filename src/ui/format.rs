//! Display formatting. Amounts are kept unrounded everywhere else.

pub fn currency(value: f64) -> String {
    format!("R$ {}", two_decimals(value))
}

pub fn kilograms(value: f64) -> String {
    format!("{} kg", two_decimals(value))
}

fn two_decimals(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{value:.2}");
    // Avoid "-0.00" for tiny negatives.
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}
