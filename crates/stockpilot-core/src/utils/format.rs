/// Format a phone number for display.
/// Normalizes Korean mobile numbers to 010-XXXX-XXXX.
pub fn format_phone(phone: &str) -> String {
    // Extract just the digits
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        11 if digits.starts_with("01") => format!(
            "{}-{}-{}",
            &digits[0..3],
            &digits[3..7],
            &digits[7..11]
        ),
        10 if digits.starts_with("01") => format!(
            "{}-{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..10]
        ),
        _ => phone.to_string(), // Return original if can't format
    }
}

/// Truncate a string to a maximum number of characters, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format an amount with thousands separators: 100000000 -> "100,000,000"
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
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

/// Format a change with an explicit sign: 138000 -> "+138,000"
pub fn format_change(change: i64) -> String {
    if change > 0 {
        format!("+{}", format_amount(change))
    } else {
        format_amount(change)
    }
}

/// Format a percentage with sign and two decimals: 0.2 -> "+0.20%"
pub fn format_percent(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{:.2}%", percent)
    } else if percent < 0.0 {
        format!("{:.2}%", percent)
    } else {
        "0.00%".to_string()
    }
}
