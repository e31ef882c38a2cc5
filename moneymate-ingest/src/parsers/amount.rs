//! Amount fields: plain decimals plus the usual export decorations.

/// Parse an amount such as `-15.00`, `$1,204.50`, `+3` or `(12.50)`.
///
/// Accounting parentheses mean negative. Returns `None` for anything that is
/// not a finite number once decorations are stripped.
pub fn parse_amount(s: &str) -> Option<f64> {
    let mut s = s.trim();
    if s.is_empty() {
        return None;
    }

    let mut negate = false;
    if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        negate = true;
        s = inner.trim();
    }

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    let rest = rest.trim_start();
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let value = sign * value;
    Some(if negate { -value } else { value })
}
