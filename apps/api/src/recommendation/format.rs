//! Currency labels shared by both rule sets.

/// `880_000` → `"$880K"`. Rounds to the nearest thousand.
pub fn thousands_label(amount: u64) -> String {
    let thousands = (amount as f64 / 1000.0).round() as u64;
    format!("${thousands}K")
}

/// `1_250_000` → `"$1,250,000"`.
pub fn currency_label(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
