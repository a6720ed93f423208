//! Keystroke-level entry of ISO `YYYY-MM-DD` dates.

use chrono::NaiveDate;

const ISO_LEN: usize = 10;
const SEPARATOR_POSITIONS: [usize; 2] = [4, 7];

/// Whether `s` can still be completed into a valid `YYYY-MM-DD` date.
fn is_valid_iso_prefix(s: &str) -> bool {
    if s.len() > ISO_LEN || !s.is_ascii() {
        return false;
    }

    for (i, b) in s.bytes().enumerate() {
        let ok = if SEPARATOR_POSITIONS.contains(&i) {
            b == b'-'
        } else {
            b.is_ascii_digit()
        };
        if !ok {
            return false;
        }
    }

    let month = s.get(5..7).or_else(|| s.get(5..6));
    match month {
        Some(m) if m.len() == 1 && m > "1" => return false,
        Some(m) if m.len() == 2 && !("01"..="12").contains(&m) => return false,
        _ => {}
    }

    let day = s.get(8..10).or_else(|| s.get(8..9));
    match day {
        Some(d) if d.len() == 1 && d > "3" => return false,
        Some(d) if d.len() == 2 && !("01"..="31").contains(&d) => return false,
        _ => {}
    }

    if s.len() == ISO_LEN {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok();
    }

    true
}

/// Append a typed character to a partial ISO date, inserting the `-`
/// separator automatically. Returns `None` if the character cannot be part
/// of a valid date at this position.
///
/// - `"2025"` + `'0'` → `"2025-0"`
/// - `"2025-0"` + `'1'` → `"2025-01"`
/// - `"2025-01"` + `'1'` → `"2025-01-1"`
pub fn append_iso_date_char(current: &str, c: char) -> Option<String> {
    let direct = format!("{}{}", current, c);
    if is_valid_iso_prefix(&direct) {
        return Some(direct);
    }

    if c.is_ascii_digit() && SEPARATOR_POSITIONS.contains(&current.len()) {
        let with_separator = format!("{}-{}", current, c);
        if is_valid_iso_prefix(&with_separator) {
            return Some(with_separator);
        }
    }

    None
}
