/// Format an integer with comma thousands separators, e.g. `1234567` -> `1,234,567`
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One decimal place with a trailing `.0` dropped, suffixed with `x`
pub fn format_multiplier(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    match formatted.strip_suffix(".0") {
        Some(whole) => format!("{}x", whole),
        None => format!("{}x", formatted),
    }
}
