//! Display helpers shared by the dashboard, text summaries and charts.

/// Format an integer with comma thousands separators (`12345` -> `"12,345"`)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Truncate a label to `max` characters, marking the cut with an ellipsis
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        return label.to_string();
    }
    let keep: String = label.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", keep)
}

/// Heading for a ranking of `shown` entries out of `requested`
///
/// Counts the entries actually shown; an empty ranking keeps the requested size.
pub fn ranking_title(requested: usize, shown: usize) -> String {
    let n = if shown == 0 { requested } else { shown.min(requested) };
    format!("Top {} High-Demand Skills", n)
}
