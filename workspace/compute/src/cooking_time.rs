//! Reading the free-text cooking time recipes carry ("25 mins", "1h 30m").

/// Total minutes described by `text`, or `None` when it holds no number or
/// uses a unit other than hours or minutes.
///
/// Every number is read together with the word right after it; a bare
/// number counts as minutes. Words that do not follow a number are skipped,
/// so "about 1 hour and 20 minutes" reads as 80. A decimal part ("1.5 hours",
/// "0,5 h") is scaled by its unit and rounded to the nearest minute.
pub fn parse_minutes(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    let mut chars = lower.chars().peekable();
    let mut total: Option<u32> = None;

    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            chars.next();
            continue;
        }

        let mut value: u32 = 0;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            value = value.checked_mul(10)?.checked_add(digit)?;
            chars.next();
        }

        // Fraction digits and their scale, e.g. ".25" gives (25, 100).
        let mut fraction: (u64, u64) = (0, 1);
        if chars.peek().is_some_and(|c| *c == '.' || *c == ',') {
            let mut ahead = chars.clone();
            ahead.next();
            if ahead.peek().is_some_and(|c| c.is_ascii_digit()) {
                chars.next();
                while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                    if fraction.1 < MAX_FRACTION_SCALE {
                        fraction = (fraction.0 * 10 + u64::from(digit), fraction.1 * 10);
                    }
                    chars.next();
                }
            }
        }

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        let mut unit = String::new();
        while let Some(&c) = chars.peek() {
            if !c.is_alphabetic() {
                break;
            }
            unit.push(c);
            chars.next();
        }

        let factor = unit_factor(&unit)?;
        let (numerator, scale) = fraction;
        let partial = (numerator * u64::from(factor) + scale / 2) / scale;
        let minutes = value
            .checked_mul(factor)?
            .checked_add(u32::try_from(partial).ok()?)?;
        total = Some(total.unwrap_or(0).checked_add(minutes)?);
    }

    total
}

/// Fraction digits past this scale are ignored.
const MAX_FRACTION_SCALE: u64 = 1_000_000;

fn unit_factor(unit: &str) -> Option<u32> {
    match unit {
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(60),
        "" | "m" | "min" | "mins" | "minute" | "minutes" => Some(1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_only() {
        assert_eq!(parse_minutes("25 mins"), Some(25));
        assert_eq!(parse_minutes("10 minutes"), Some(10));
        assert_eq!(parse_minutes("45"), Some(45));
        assert_eq!(parse_minutes("30m"), Some(30));
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(parse_minutes("1 hr 15 mins"), Some(75));
        assert_eq!(parse_minutes("1h 30m"), Some(90));
        assert_eq!(parse_minutes("2 hours"), Some(120));
        assert_eq!(parse_minutes("About 1 Hour and 20 Minutes"), Some(80));
    }

    #[test]
    fn test_decimal_hours() {
        assert_eq!(parse_minutes("1.5 hours"), Some(90));
        assert_eq!(parse_minutes("0.5 hours"), Some(30));
        assert_eq!(parse_minutes("0,75 h"), Some(45));
        assert_eq!(parse_minutes("1.25 hrs"), Some(75));
        assert_eq!(parse_minutes("1.33 hours"), Some(80));
        assert_eq!(parse_minutes("2.5 mins"), Some(3));
        assert_eq!(parse_minutes("20."), Some(20));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("overnight"), None);
        assert_eq!(parse_minutes("2 days"), None);
        assert_eq!(parse_minutes("99999999999 mins"), None);
        assert_eq!(parse_minutes("1.5 days"), None);
    }
}
