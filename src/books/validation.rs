//! Pure validation rules for catalog entries and lending fees.

pub const MAX_TITLE_LEN: usize = 200;
pub const LATE_FEE_PER_DAY: f64 = 0.50;
pub const MAX_LATE_FEE: f64 = 20.00;

/// Checks the shape of an ISBN: hyphens and spaces are ignored, and what
/// remains must be 10 or 13 ASCII digits. Check digits are not verified.
pub fn is_valid_isbn(isbn: &str) -> bool {
    let digits: Vec<char> = isbn.chars().filter(|c| *c != '-' && *c != ' ').collect();
    if digits.len() != 10 && digits.len() != 13 {
        return false;
    }
    digits.iter().all(char::is_ascii_digit)
}

pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty() && title.chars().count() <= MAX_TITLE_LEN
}

/// Late fee at the standard schedule of 0.50 per day, capped at 20.00.
pub fn calculate_late_fee(days_overdue: i64) -> f64 {
    calculate_late_fee_with(days_overdue, LATE_FEE_PER_DAY, MAX_LATE_FEE)
}

// Non-positive days owe nothing.
pub fn calculate_late_fee_with(days_overdue: i64, fee_per_day: f64, max_fee: f64) -> f64 {
    if days_overdue <= 0 {
        return 0.0;
    }
    (days_overdue as f64 * fee_per_day).min(max_fee)
}
