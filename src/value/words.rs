//! English number words for the reveal display.
//!
//! Short-scale rules up to the ten-thousands place, hyphenated compounds
//! for 21-99, comma-joined thousands/hundreds groups. Decimal boards
//! render as `"<whole> and <fraction> <place name>"` with the place name
//! pluralized unless the fraction count is exactly 1.

use crate::core::BoardConfig;

use super::place::PlaceValue;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Words for 0..=99, hyphenating 21-99 compounds ("twenty-one").
fn under_100(n: i64) -> String {
    debug_assert!((0..100).contains(&n));
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        ones => format!("{}-{}", tens, ONES[ones as usize]),
    }
}

/// Words for a whole number 0..=99_999, groups joined with commas
/// ("twelve thousand, three hundred, forty-five").
fn whole_words(n: i64) -> String {
    debug_assert!((0..100_000).contains(&n));
    if n == 0 {
        return "zero".to_string();
    }

    let mut groups = Vec::new();

    let thousands = n / 1000;
    if thousands > 0 {
        groups.push(format!("{} thousand", under_100(thousands)));
    }

    let hundreds = (n % 1000) / 100;
    if hundreds > 0 {
        groups.push(format!("{} hundred", ONES[hundreds as usize]));
    }

    let rest = n % 100;
    if rest > 0 {
        groups.push(under_100(rest));
    }

    groups.join(", ")
}

/// Render a hand value in English words under the board's shape.
///
/// Whole boards: `"five hundred, eight"`. Decimal boards:
/// `"twelve and thirty-four hundredths"`, with a zero fraction rendered
/// as `"zero tenths"` (etc.) rather than omitted.
#[must_use]
pub fn number_words(value: PlaceValue, config: &BoardConfig) -> String {
    let whole = whole_words(value.whole_part());
    if !config.include_decimal {
        return whole;
    }

    let places = config.decimal_place_count as u32;
    let frac_count = value.frac_millis() / (1000 / 10i64.pow(places));
    let place_name = match (places, frac_count) {
        (1, 1) => "tenth",
        (1, _) => "tenths",
        (2, 1) => "hundredth",
        (2, _) => "hundredths",
        (3, 1) => "thousandth",
        (3, _) => "thousandths",
        _ => unreachable!("decimal place count validated to 1..=3"),
    };

    format!("{} and {} {}", whole, whole_words(frac_count), place_name)
}
