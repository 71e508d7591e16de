//! Currency string formatting
//!
//! Dollar sign, thousands separators, and two decimal places only when
//! the value actually has a fractional part, so whole amounts render as
//! `$15,000` and fractional ones as `$1,200.50`.

/// Format a numeric amount as a currency string
///
/// NaN guards to `"$0"`; negative values get a leading minus.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$0".to_string();
    }

    let negative = value < 0.0;
    let abs = value.abs();

    let body = if abs.fract() != 0.0 {
        let fixed = format!("{:.2}", abs);
        match fixed.split_once('.') {
            Some((int_part, frac_part)) => {
                format!("{}.{}", group_thousands(int_part), frac_part)
            }
            None => group_thousands(&fixed),
        }
    } else {
        group_thousands(&format!("{:.0}", abs))
    };

    if negative {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts_have_no_decimals() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(42.0), "$42");
        assert_eq!(format_currency(15000.0), "$15,000");
        assert_eq!(format_currency(2500.0), "$2,500");
    }

    #[test]
    fn test_fractional_amounts_show_cents() {
        assert_eq!(format_currency(1200.5), "$1,200.50");
        assert_eq!(format_currency(0.05), "$0.05");
        assert_eq!(format_currency(999.99), "$999.99");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_currency(1000000.0), "$1,000,000");
        assert_eq!(format_currency(100.0), "$100");
    }

    #[test]
    fn test_nan_guards_to_zero() {
        assert_eq!(format_currency(f64::NAN), "$0");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_currency(-1200.5), "-$1,200.50");
        assert_eq!(format_currency(-42.0), "-$42");
    }
}
