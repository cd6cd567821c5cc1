//! Number formatting for display

/// Group digits with commas (e.g., 1247 -> "1,247")
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-dollar amount with commas (e.g., 12450 -> "$12,450")
pub fn format_dollars(amount: u64) -> String {
    format!("${}", format_count(amount))
}

/// Initials from a display name (e.g., "Sarah Johnson" -> "SJ")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1247), "1,247");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn dollars() {
        assert_eq!(format_dollars(45), "$45");
        assert_eq!(format_dollars(47890), "$47,890");
    }

    #[test]
    fn initials_from_names() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("  Coach   Sarah "), "CS");
        assert_eq!(initials(""), "");
    }
}
