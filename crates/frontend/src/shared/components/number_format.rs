//! Number formatting utilities for tables and stat cards

/// Format a number with comma thousands separators and the given number of
/// decimal places
///
/// # Examples
///
/// ```
/// use frontend::shared::components::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    // Split integer and fractional parts
    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a comma every 3 digits, counting from the end
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Format a COP amount: "$" prefix, comma separators, no decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::components::number_format::format_cop;
/// assert_eq!(format_cop(1500000.0), "$1,500,000");
/// ```
pub fn format_cop(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number_with_decimals(-value, 0))
    } else {
        format!("${}", format_number_with_decimals(value, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cop() {
        assert_eq!(format_cop(1_500_000.0), "$1,500,000");
        assert_eq!(format_cop(0.0), "$0");
        assert_eq!(format_cop(999.0), "$999");
        assert_eq!(format_cop(-1_234_500.0), "-$1,234,500");
    }

    #[test]
    fn test_format_cop_is_stable() {
        // same input must always render the same string
        assert_eq!(format_cop(1_500_000.0), format_cop(1_500_000.0));
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1,234");
    }
}
