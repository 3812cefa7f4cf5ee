use crate::eligibility::StatusRecord;

/// Format an amount with thousands separators, dropping a zero fraction.
///
pub fn amount(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if cents > 0 {
        grouped.push_str(&format!(".{:02}", cents));
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Label for an eligibility decision.
///
pub fn outcome(eligible: bool) -> &'static str {
    if eligible {
        "Eligible"
    } else {
        "Not eligible"
    }
}

/// Local time a decision was made, or the raw timestamp if it cannot be read.
///
pub fn decided_at(record: &StatusRecord) -> String {
    match record.decided_at() {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => record.timestamp.clone(),
    }
}
