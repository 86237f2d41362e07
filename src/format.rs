use chrono::NaiveDate;

/// `Thu, Jan 11`
pub fn format_short(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// `Thursday, January 11, 2024`
pub fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `January 2024`
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
