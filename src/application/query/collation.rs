// SPDX-License-Identifier: MPL-2.0
//! Locale-style collation for file names.
//!
//! Follows the root-locale ordering used by interactive file lists:
//! whitespace, punctuation and symbols sort before digits, digits before
//! letters, letters compare case-insensitively, and only when two names are
//! otherwise equal does case decide (lowercase first). Digits compare one
//! character at a time, so `10.png` precedes `2.png`.
//!
//! Punctuation and symbols are not ignorable: they take part in the primary
//! comparison with the CLDR root weights, so `img_2.png` < `img-2.png` <
//! `img.png`.

use std::cmp::Ordering;

/// ASCII punctuation and symbols in CLDR root order.
const SYMBOL_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight class of a character.
fn class(c: char) -> u8 {
    if c.is_numeric() {
        1
    } else if c.is_alphabetic() {
        2
    } else {
        0
    }
}

/// Rank within the symbol class. Whitespace sorts first; symbols outside
/// the ASCII table sort after it, by code point.
fn symbol_rank(c: char) -> usize {
    if c.is_whitespace() {
        return 0;
    }
    SYMBOL_ORDER
        .chars()
        .position(|symbol| symbol == c)
        .map_or(SYMBOL_ORDER.len() + 1, |position| position + 1)
}

/// Primary weight: class, then symbol rank, then code point.
fn weight(c: char) -> (u8, usize, char) {
    let class = class(c);
    let rank = if class == 0 { symbol_rank(c) } else { 0 };
    (class, rank, c)
}

fn primary(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().flat_map(char::to_lowercase);
    let mut right = b.chars().flat_map(char::to_lowercase);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = weight(l).cmp(&weight(r));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn tertiary(a: &str, b: &str) -> Ordering {
    for (l, r) in a.chars().zip(b.chars()) {
        if l == r {
            continue;
        }
        match (l.is_lowercase(), r.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return l.cmp(&r),
        }
    }
    Ordering::Equal
}

/// Compares two display names.
///
/// Names that differ only in case are ordered lowercase first; identical
/// names compare equal so a stable sort keeps their input order.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary(a, b).then_with(|| tertiary(a, b))
}
