// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu item count and style levels.

use core::fmt;

/// Number of menu items, always within `[MIN, MAX]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementCount(u8);

impl ElementCount {
    /// Fewest items.
    pub const MIN: u8 = 3;
    /// Most items.
    pub const MAX: u8 = 8;
    /// Fallback for missing, non-numeric, zero or out-of-range input.
    pub const DEFAULT: Self = Self(5);

    /// Accept `n` if it is within bounds.
    pub fn new(n: i64) -> Option<Self> {
        u8::try_from(n)
            .ok()
            .filter(|n| (Self::MIN..=Self::MAX).contains(n))
            .map(Self)
    }

    /// Interpret raw input text.
    ///
    /// The leading integer is used, so `"4 items"` and `" 7.9"` count as 4 and 7.
    /// Anything else falls back to [`DEFAULT`](Self::DEFAULT).
    pub fn from_input(raw: Option<&str>) -> Self {
        raw.and_then(parse_leading_int)
            .and_then(Self::new)
            .unwrap_or(Self::DEFAULT)
    }

    /// Item count.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for ElementCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ElementCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parse an optional sign and the run of ASCII digits that follows leading whitespace.
///
/// Values too large for `i64` saturate, which keeps them out of range.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let run = digits.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for b in run {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    seen.then_some(if negative { -value } else { value })
}

/// Number of style levels past the first; the menu collapses after the last.
pub const MAX_STYLES: u8 = 2;

/// Index of the active menu style, `0..=MAX_STYLES`. Higher is denser.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleLevel(u8);

impl StyleLevel {
    /// Least dense style.
    pub const FIRST: Self = Self(0);
    /// Densest style, just before collapse.
    pub const MAX: Self = Self(MAX_STYLES);

    const LABELS: [&'static str; MAX_STYLES as usize + 1] =
        ["Large screen", "Medium screen", "Small screen"];

    /// Style number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether this is the densest style.
    pub fn is_max(self) -> bool {
        self == Self::MAX
    }

    /// The next denser style, if any.
    pub fn next(self) -> Option<Self> {
        (self.0 < MAX_STYLES).then(|| Self(self.0 + 1))
    }

    /// Heading shown above the menu.
    pub fn label(self) -> &'static str {
        Self::LABELS[usize::from(self.0)]
    }

    /// Class given to each item, e.g. `menu-style-1`.
    pub fn item_class(self, prefix: &str) -> String {
        format!("{prefix}{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn leading_integer_like_a_browser() {
        assert_eq!(parse_leading_int("4"), Some(4));
        assert_eq!(parse_leading_int("  7.9"), Some(7));
        assert_eq!(parse_leading_int("6 items"), Some(6));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+8"), Some(8));
        assert_eq!(parse_leading_int("x4"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn fallback_cases() {
        for raw in [None, Some(""), Some("abc"), Some("0"), Some("2"), Some("9"), Some("-5")] {
            assert_eq!(ElementCount::from_input(raw), ElementCount::DEFAULT, "{raw:?}");
        }
        assert_eq!(ElementCount::from_input(Some("3")).get(), 3);
        assert_eq!(ElementCount::from_input(Some("8")).get(), 8);
    }

    #[test]
    fn style_levels_step_to_the_cap() {
        let mut style = StyleLevel::FIRST;
        let mut seen = vec![style.label()];
        while let Some(next) = style.next() {
            assert_eq!(next.get(), style.get() + 1);
            style = next;
            seen.push(style.label());
        }
        assert!(style.is_max());
        assert_eq!(seen, ["Large screen", "Medium screen", "Small screen"]);
        assert_eq!(style.item_class("menu-style-"), "menu-style-2");
    }

    proptest! {
        #[test]
        fn in_range_counts_are_kept(n in 3i64..=8) {
            prop_assert_eq!(ElementCount::from_input(Some(&n.to_string())).get() as i64, n);
        }

        #[test]
        fn out_of_range_counts_fall_back(n in any::<i64>().prop_filter("out of range", |n| !(3..=8).contains(n))) {
            prop_assert_eq!(ElementCount::from_input(Some(&n.to_string())), ElementCount::DEFAULT);
        }

        #[test]
        fn non_numeric_input_falls_back(s in "[a-zA-Z ]*") {
            prop_assert_eq!(ElementCount::from_input(Some(&s)), ElementCount::DEFAULT);
        }
    }
}
