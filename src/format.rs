//! Compact display of large magnitudes and Roman numerals.

use crate::magnitude::Magnitude;

/// Exponent-group alphabet, one symbol per power of one thousand. `~` is the
/// zero symbol so multi-letter groups carry positional zeroes.
const LETTERS: &[u8] = b"~abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Formats a magnitude as a short mantissa plus a letter suffix encoding
/// `floor(exponent / 3)` in base `LETTERS.len()`, most-significant first.
///
/// Thousands get "a", millions "b", and so on through "Z", then two-symbol
/// combinations. Decimal places shrink as the mantissa widens so the output
/// stays three significant digits.
pub fn format_letters(n: Magnitude) -> String {
    if n.is_zero() {
        return "0.00".to_string();
    }

    let e = n.exponent();
    let base = LETTERS.len() as i64;

    let mut group = e.div_euclid(3);
    let mut suffix = String::new();
    while group > 0 {
        suffix.insert(0, LETTERS[(group % base) as usize] as char);
        group /= base;
    }

    let places = (2 - e % 3).max(0) as usize;
    let mantissa = 10f64.powf(n.log10() % 3.0);

    format!("{mantissa:.places$}{suffix}")
}

/// Canonical symbol-value pairs for greedy Roman numeral encoding.
const ROMAN: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Standard greedy Roman numeral encoding. Zero yields the empty string.
pub fn format_roman(mut n: u32) -> String {
    let mut result = String::new();
    for (amount, symbol) in ROMAN {
        while n >= amount {
            result.push_str(symbol);
            n -= amount;
            if n == 0 {
                return result;
            }
        }
    }
    result
}
